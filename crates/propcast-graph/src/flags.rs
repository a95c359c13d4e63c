//! Type flag bits, mirroring the checker's `TypeFlags`.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags describing the resolved kind of a type.
    ///
    /// Serialized in the textual bitflags form, e.g. `"STRING_LITERAL"` or
    /// `"OBJECT | UNION"`.
    #[derive(Copy, Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const ENUM = 1 << 5;
        const BIG_INT = 1 << 6;
        const STRING_LITERAL = 1 << 7;
        const NUMBER_LITERAL = 1 << 8;
        const BOOLEAN_LITERAL = 1 << 9;
        const ENUM_LITERAL = 1 << 10;
        const BIG_INT_LITERAL = 1 << 11;
        const TEMPLATE_LITERAL = 1 << 12;
        const UNDEFINED = 1 << 13;
        const NULL = 1 << 14;
        const VOID = 1 << 15;
        const NEVER = 1 << 16;
        const OBJECT = 1 << 17;
        const UNION = 1 << 18;
        const INTERSECTION = 1 << 19;
        const TYPE_PARAMETER = 1 << 20;

        const LITERAL = Self::STRING_LITERAL.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::BOOLEAN_LITERAL.bits()
            | Self::ENUM_LITERAL.bits()
            | Self::BIG_INT_LITERAL.bits();
        const STRING_LIKE = Self::STRING.bits()
            | Self::STRING_LITERAL.bits()
            | Self::TEMPLATE_LITERAL.bits();
        const NUMBER_LIKE = Self::NUMBER.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::ENUM.bits();
    }
}

impl TypeFlags {
    pub fn is_literal(&self) -> bool {
        self.intersects(TypeFlags::LITERAL)
    }

    /// Keyword used when rendering a type that has no better name.
    pub fn keyword(&self) -> Option<&'static str> {
        const KEYWORDS: &[(TypeFlags, &str)] = &[
            (TypeFlags::ANY, "any"),
            (TypeFlags::UNKNOWN, "unknown"),
            (TypeFlags::STRING, "string"),
            (TypeFlags::NUMBER, "number"),
            (TypeFlags::BOOLEAN, "boolean"),
            (TypeFlags::BIG_INT, "bigint"),
            (TypeFlags::UNDEFINED, "undefined"),
            (TypeFlags::NULL, "null"),
            (TypeFlags::VOID, "void"),
            (TypeFlags::NEVER, "never"),
            (TypeFlags::OBJECT, "object"),
        ];

        KEYWORDS
            .iter()
            .find(|(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| *keyword)
    }
}
