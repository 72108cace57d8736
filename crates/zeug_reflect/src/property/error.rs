use alloc::borrow::Cow;
use alloc::string::String;

use thiserror::Error;

use crate::variant::VariantKind;

// -----------------------------------------------------------------------------
// Error

/// The failure of a property operation.
///
/// A property reporting an error has not been modified.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum PropertyError {
    #[error("Cannot parse {input:?} as a value of type `{type_name}`")]
    Parse {
        type_name: Cow<'static, str>,
        input: String,
    },

    #[error("Cannot convert a variant of kind `{kind}` to type `{type_name}`")]
    Conversion {
        type_name: Cow<'static, str>,
        kind: VariantKind,
    },

    #[error("Property `{name}` is read-only")]
    ReadOnly { name: String },

    #[error("Index {index} is out of range for an array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("No property found at path `{path}`")]
    NotFound { path: String },

    #[error("A property named `{name}` already exists in this group")]
    DuplicateName { name: String },
}

#[cfg(test)]
mod tests {
    use super::PropertyError;
    use crate::variant::VariantKind;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        let e = PropertyError::Parse {
            type_name: "i32".into(),
            input: "x".into(),
        };
        assert_eq!(e.to_string(), "Cannot parse \"x\" as a value of type `i32`");

        let e = PropertyError::Conversion {
            type_name: "bool".into(),
            kind: VariantKind::Array,
        };
        assert_eq!(e.to_string(), "Cannot convert a variant of kind `array` to type `bool`");
    }
}
