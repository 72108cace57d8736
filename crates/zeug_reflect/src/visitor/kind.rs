use core::fmt;

/// The dispatch tag of a value property.
///
/// Each tag except `Other` has a dedicated method on
/// [`PropertyVisitor`](super::PropertyVisitor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Bool,
    Int,
    Double,
    String,
    Color,
    FilePath,
    Enum,
    BoolArray,
    IntArray,
    DoubleArray,
    Other,
}

impl PropertyKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Double => "double",
            Self::String => "string",
            Self::Color => "color",
            Self::FilePath => "file_path",
            Self::Enum => "enum",
            Self::BoolArray => "bool_array",
            Self::IntArray => "int_array",
            Self::DoubleArray => "double_array",
            Self::Other => "other",
        }
    }

    /// Returns `true` for the three array tags.
    #[inline]
    pub const fn is_array(self) -> bool {
        matches!(self, Self::BoolArray | Self::IntArray | Self::DoubleArray)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
