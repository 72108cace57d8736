use core::fmt;

/// The tag of a [`Variant`](super::Variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Empty,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Array,
    Map,
}

impl VariantKind {
    /// Returns `true` for the eight integer kinds.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }

    /// Returns `true` for `F32` and `F64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` for integer and float kinds.
    #[inline]
    pub const fn is_number(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Returns the lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
            Self::Array => "array",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::VariantKind;
    use alloc::format;

    #[test]
    fn display_pads() {
        assert_eq!(format!("{:>6}", VariantKind::U16), "   u16");
        assert_eq!(format!("{}", VariantKind::Map), "map");
    }

    #[test]
    fn groups() {
        assert!(VariantKind::U64.is_integer());
        assert!(!VariantKind::F32.is_integer());
        assert!(VariantKind::F32.is_number());
        assert!(!VariantKind::String.is_number());
    }
}
