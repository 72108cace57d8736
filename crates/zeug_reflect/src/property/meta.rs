use alloc::string::String;

use crate::variant::{Variant, VariantMap};

/// The name and consumer-facing options of a property.
///
/// Options are never interpreted by the property itself. Editors read keys
/// such as `"minimum"`, `"maximum"`, `"step"`, `"choices"` or `"title"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMeta {
    name: String,
    options: VariantMap,
}

impl PropertyMeta {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: VariantMap::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn options(&self) -> &VariantMap {
        &self.options
    }

    #[inline]
    pub fn options_mut(&mut self) -> &mut VariantMap {
        &mut self.options
    }

    #[inline]
    pub fn option(&self, key: &str) -> Option<&Variant> {
        self.options.get(key)
    }

    /// Sets an option, returning the previous value.
    #[inline]
    pub fn set_option(&mut self, key: &str, value: Variant) -> Option<Variant> {
        self.options.insert(key.into(), value)
    }

    #[inline]
    pub fn remove_option(&mut self, key: &str) -> Option<Variant> {
        self.options.remove(key)
    }
}
