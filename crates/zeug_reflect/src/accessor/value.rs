use core::fmt;

use super::{Accessor, ReadAccessor};

// -----------------------------------------------------------------------------
// AccessorValue

/// An accessor that owns its value.
///
/// # Examples
///
/// ```
/// use zeug_reflect::accessor::{Accessor, AccessorValue, ReadAccessor};
///
/// let mut accessor = AccessorValue::<i32>::new();
/// assert_eq!(accessor.get_value(), 0);
///
/// accessor.set_value(3);
/// assert_eq!(accessor.get_value(), 3);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct AccessorValue<T> {
    value: T,
}

impl<T: Default> AccessorValue<T> {
    /// Creates an accessor holding `T::default()`.
    #[inline]
    pub fn new() -> Self {
        Self {
            value: T::default(),
        }
    }
}

impl<T> AccessorValue<T> {
    /// Creates an accessor holding `value`.
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self { value }
    }

    /// Consumes the accessor and returns the held value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> ReadAccessor<T> for AccessorValue<T> {
    #[inline]
    fn get_value(&self) -> T {
        self.value.clone()
    }
}

impl<T: Clone> Accessor<T> for AccessorValue<T> {
    #[inline]
    fn set_value(&mut self, value: T) {
        self.value = value;
    }
}

impl<T: fmt::Debug> fmt::Debug for AccessorValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessorValue").field(&self.value).finish()
    }
}

// -----------------------------------------------------------------------------
// ConstAccessorValue

/// A read-only accessor that owns its value.
///
/// The value is fixed at construction.
#[derive(Clone, Default, PartialEq)]
pub struct ConstAccessorValue<T> {
    value: T,
}

impl<T: Default> ConstAccessorValue<T> {
    /// Creates an accessor holding `T::default()`.
    #[inline]
    pub fn new() -> Self {
        Self {
            value: T::default(),
        }
    }
}

impl<T> ConstAccessorValue<T> {
    /// Creates an accessor holding `value`.
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> ReadAccessor<T> for ConstAccessorValue<T> {
    #[inline]
    fn get_value(&self) -> T {
        self.value.clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for ConstAccessorValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstAccessorValue")
            .field(&self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessorValue, ConstAccessorValue};
    use crate::accessor::{Accessor, ReadAccessor};
    use alloc::string::String;

    #[test]
    fn default_then_set() {
        let mut accessor = AccessorValue::<String>::new();
        assert_eq!(accessor.get_value(), "");

        accessor.set_value("abc".into());
        assert_eq!(accessor.get_value(), "abc");
        assert_eq!(accessor.into_inner(), "abc");
    }

    #[test]
    fn const_value() {
        let accessor = ConstAccessorValue::with_value(2.5_f64);
        assert_eq!(accessor.get_value(), 2.5);
    }
}
