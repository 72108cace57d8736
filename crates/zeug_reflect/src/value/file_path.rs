use alloc::string::String;
use core::fmt;

use super::PropertyValue;
use crate::property::TypedProperty;
use crate::variant::Variant;
use crate::visitor::{PropertyMut, PropertyRef};

/// A file system path stored as a string.
///
/// Kept separate from `String` so that visitors can offer a file picker
/// instead of a line edit. The string form is the path itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePath(String);

impl FilePath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

crate::cfg::std! {
    impl FilePath {
        /// Views the path as a [`std::path::Path`].
        #[inline]
        pub fn as_path(&self) -> &std::path::Path {
            std::path::Path::new(&self.0)
        }
    }

    impl From<std::path::PathBuf> for FilePath {
        /// Non-UTF-8 components are replaced lossily.
        fn from(path: std::path::PathBuf) -> Self {
            Self(path.to_string_lossy().into_owned())
        }
    }

    impl From<&std::path::Path> for FilePath {
        fn from(path: &std::path::Path) -> Self {
            Self(path.to_string_lossy().into_owned())
        }
    }
}

impl From<String> for FilePath {
    #[inline]
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&str> for FilePath {
    #[inline]
    fn from(path: &str) -> Self {
        Self(path.into())
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PropertyValue for FilePath {
    const TYPE_NAME: &'static str = "file_path";

    #[inline]
    fn to_property_string(&self) -> String {
        self.0.clone()
    }

    #[inline]
    fn from_property_string(s: &str) -> Option<Self> {
        Some(Self::new(s))
    }

    #[inline]
    fn to_variant(&self) -> Variant {
        Variant::String(self.0.clone())
    }

    fn from_variant(variant: &Variant) -> Option<Self> {
        variant.as_str().map(Self::new)
    }

    fn dispatch_ref<'a>(property: &'a dyn TypedProperty<Self>) -> PropertyRef<'a> {
        PropertyRef::FilePath(property)
    }

    fn dispatch_mut<'a>(property: &'a mut dyn TypedProperty<Self>) -> PropertyMut<'a> {
        PropertyMut::FilePath(property)
    }
}
