use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;
use core::cell::RefCell;
use core::fmt;

use super::{AbstractProperty, ArrayValueProperty, PropertyError, PropertyMeta};
use super::{TypedProperty, ValueProperty};
use crate::accessor::{ArrayAccessor, ArrayAccessorGetSet, ArrayAccessorValue, ArrayReadAccessor};
use crate::accessor::{ConstArrayAccessorGetSet, ConstArrayAccessorValue};
use crate::value::{ArrayElement, PropertyValue, parse_tuple, write_tuple};
use crate::variant::Variant;
use crate::visitor::{PropertyMut, PropertyRef};

// -----------------------------------------------------------------------------
// PropertyArrayAccessor

/// The array accessor object held by an array property.
///
/// Implemented for `dyn ArrayAccessor<T, N>` and `dyn ArrayReadAccessor<T, N>`.
pub trait PropertyArrayAccessor<T, const N: usize>: ArrayReadAccessor<T, N> {
    const READ_ONLY: bool;

    fn try_set_element(&mut self, index: usize, value: T) -> bool;

    fn try_set_array(&mut self, array: [T; N]) -> bool;
}

impl<T, const N: usize> PropertyArrayAccessor<T, N> for dyn ArrayAccessor<T, N> {
    const READ_ONLY: bool = false;

    #[inline]
    fn try_set_element(&mut self, index: usize, value: T) -> bool {
        self.set_element(index, value);
        true
    }

    #[inline]
    fn try_set_array(&mut self, array: [T; N]) -> bool {
        self.set_array(array);
        true
    }
}

impl<T, const N: usize> PropertyArrayAccessor<T, N> for dyn ArrayReadAccessor<T, N> {
    const READ_ONLY: bool = true;

    #[inline]
    fn try_set_element(&mut self, _index: usize, _value: T) -> bool {
        false
    }

    #[inline]
    fn try_set_array(&mut self, _array: [T; N]) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// BaseArrayProperty

/// A named `[T; N]` value, stored behind an array accessor of kind `A`.
///
/// Use the [`ArrayProperty`] and [`ConstArrayProperty`] aliases.
pub struct BaseArrayProperty<T: 'static, const N: usize, A: ?Sized + 'static = dyn ArrayAccessor<T, N>> {
    meta: PropertyMeta,
    accessor: Box<A>,
    listeners: Vec<Box<dyn FnMut(&[T; N])>>,
}

/// A read-write vector-like property.
///
/// The string form is `"(v0, v1, ..., vN-1)"`.
///
/// # Examples
///
/// ```
/// use zeug_reflect::property::{ArrayProperty, ValueProperty};
///
/// let mut position = ArrayProperty::new("position", [1, 2, 3]);
/// assert_eq!(position.to_string(), "(1, 2, 3)");
///
/// position.from_string("(4, 5, 6)").unwrap();
/// assert!(position.from_string("(4, 5)").is_err());
/// assert_eq!(position.value(), [4, 5, 6]);
/// ```
pub type ArrayProperty<T, const N: usize> = BaseArrayProperty<T, N, dyn ArrayAccessor<T, N>>;

/// A read-only vector-like property.
pub type ConstArrayProperty<T, const N: usize> =
    BaseArrayProperty<T, N, dyn ArrayReadAccessor<T, N>>;

impl<T: ArrayElement, const N: usize, A> BaseArrayProperty<T, N, A>
where
    A: ?Sized + PropertyArrayAccessor<T, N>,
{
    fn from_parts(name: impl Into<String>, accessor: Box<A>) -> Self {
        Self {
            meta: PropertyMeta::new(name),
            accessor,
            listeners: Vec::new(),
        }
    }

    /// Returns all elements, read in ascending index order.
    #[inline]
    pub fn value(&self) -> [T; N] {
        self.accessor.get_array()
    }

    /// Sets an option and returns the property, for use at construction.
    pub fn with_option(mut self, key: &str, value: impl Into<Variant>) -> Self {
        self.meta.set_option(key, value.into());
        self
    }

    fn read_only_error(&self) -> PropertyError {
        PropertyError::ReadOnly {
            name: self.meta.name().into(),
        }
    }

    fn apply(&mut self, array: [T; N]) -> Result<(), PropertyError> {
        if !self.accessor.try_set_array(array) {
            return Err(self.read_only_error());
        }
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let current = self.accessor.get_array();
        for listener in &mut self.listeners {
            listener(&current);
        }
    }

    /// Exact array or element-wise conversion, after the string form.
    fn array_from_variant(variant: &Variant) -> Option<[T; N]> {
        match variant {
            Variant::String(s) => parse_tuple(s),
            Variant::Array(elements) if elements.len() == N => {
                let mut array = [T::default(); N];
                for (slot, element) in array.iter_mut().zip(elements) {
                    *slot = T::from_variant(element)?;
                }
                Some(array)
            }
            _ => None,
        }
    }
}

impl<T: ArrayElement, const N: usize> BaseArrayProperty<T, N, dyn ArrayAccessor<T, N>> {
    /// Creates a property owning `array`.
    pub fn new(name: impl Into<String>, array: [T; N]) -> Self {
        Self::with_accessor(name, ArrayAccessorValue::with_value(array))
    }

    /// Creates a property owning `N` default elements.
    pub fn with_default(name: impl Into<String>) -> Self {
        Self::with_accessor(name, ArrayAccessorValue::<T, N>::new())
    }

    /// Creates a property forwarding to per-index closures.
    pub fn from_accessors(
        name: impl Into<String>,
        getter: impl Fn(usize) -> T + 'static,
        setter: impl FnMut(usize, T) + 'static,
    ) -> Self {
        Self::with_accessor(name, ArrayAccessorGetSet::<T, N>::new(getter, setter))
    }

    /// Creates a property bound to per-index methods of a shared object.
    pub fn from_methods<O: 'static>(
        name: impl Into<String>,
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O, usize) -> T + 'static,
        setter: impl Fn(&mut O, usize, T) + 'static,
    ) -> Self {
        Self::with_accessor(
            name,
            ArrayAccessorGetSet::<T, N>::from_methods(object, getter, setter),
        )
    }

    /// Creates a property bound to per-index by-reference methods of a shared object.
    pub fn from_ref_methods<O: 'static>(
        name: impl Into<String>,
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O, usize) -> &T + 'static,
        setter: impl Fn(&mut O, usize, &T) + 'static,
    ) -> Self {
        Self::with_accessor(
            name,
            ArrayAccessorGetSet::<T, N>::from_ref_methods(object, getter, setter),
        )
    }

    /// Creates a property around a pre-built array accessor.
    pub fn with_accessor(
        name: impl Into<String>,
        accessor: impl ArrayAccessor<T, N> + 'static,
    ) -> Self {
        Self::from_parts(name, Box::new(accessor))
    }

    /// Replaces all elements, in ascending index order.
    pub fn set_value(&mut self, array: [T; N]) {
        self.accessor.set_array(array);
        self.notify();
    }

    /// Registers a listener called after every successful write.
    pub fn on_value_changed(&mut self, listener: impl FnMut(&[T; N]) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl<T: ArrayElement, const N: usize> BaseArrayProperty<T, N, dyn ArrayReadAccessor<T, N>> {
    /// Creates a read-only property owning `array`.
    pub fn new(name: impl Into<String>, array: [T; N]) -> Self {
        Self::with_accessor(name, ConstArrayAccessorValue::with_value(array))
    }

    /// Creates a read-only property forwarding to a per-index closure.
    pub fn from_getter(name: impl Into<String>, getter: impl Fn(usize) -> T + 'static) -> Self {
        Self::with_accessor(name, ConstArrayAccessorGetSet::<T, N>::new(getter))
    }

    /// Creates a read-only property bound to a per-index method of a shared object.
    pub fn from_method<O: 'static>(
        name: impl Into<String>,
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O, usize) -> T + 'static,
    ) -> Self {
        Self::with_accessor(name, ConstArrayAccessorGetSet::<T, N>::from_method(object, getter))
    }

    pub fn with_accessor(
        name: impl Into<String>,
        accessor: impl ArrayReadAccessor<T, N> + 'static,
    ) -> Self {
        Self::from_parts(name, Box::new(accessor))
    }
}

// -----------------------------------------------------------------------------
// Property traits

impl<T: ArrayElement, const N: usize, A> AbstractProperty for BaseArrayProperty<T, N, A>
where
    A: ?Sized + PropertyArrayAccessor<T, N>,
{
    #[inline]
    fn meta(&self) -> &PropertyMeta {
        &self.meta
    }

    #[inline]
    fn meta_mut(&mut self) -> &mut PropertyMeta {
        &mut self.meta
    }

    #[inline]
    fn as_value(&self) -> Option<&dyn ValueProperty> {
        Some(self)
    }

    #[inline]
    fn as_value_mut(&mut self) -> Option<&mut dyn ValueProperty> {
        Some(self)
    }
}

impl<T: ArrayElement, const N: usize, A> ValueProperty for BaseArrayProperty<T, N, A>
where
    A: ?Sized + PropertyArrayAccessor<T, N>,
{
    #[inline]
    fn value_type_id(&self) -> TypeId {
        TypeId::of::<[T; N]>()
    }

    fn value_type_name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{}[{N}]", T::TYPE_NAME))
    }

    #[inline]
    fn is_read_only(&self) -> bool {
        A::READ_ONLY
    }

    fn to_string(&self) -> String {
        write_tuple(&self.value())
    }

    fn from_string(&mut self, s: &str) -> Result<(), PropertyError> {
        if A::READ_ONLY {
            return Err(self.read_only_error());
        }
        match parse_tuple::<T, N>(s) {
            Some(array) => self.apply(array),
            None => {
                log::debug!(
                    "property `{}` rejected {s:?} as a tuple of {N} `{}`",
                    self.meta.name(),
                    T::TYPE_NAME,
                );
                Err(PropertyError::Parse {
                    type_name: self.value_type_name(),
                    input: s.into(),
                })
            }
        }
    }

    fn to_variant(&self) -> Variant {
        self.value().iter().map(PropertyValue::to_variant).collect()
    }

    fn from_variant(&mut self, variant: &Variant) -> Result<(), PropertyError> {
        if A::READ_ONLY {
            return Err(self.read_only_error());
        }
        match Self::array_from_variant(variant) {
            Some(array) => self.apply(array),
            None => {
                log::debug!(
                    "property `{}` rejected a `{}` variant as a tuple of {N} `{}`",
                    self.meta.name(),
                    variant.kind(),
                    T::TYPE_NAME,
                );
                Err(PropertyError::Conversion {
                    type_name: self.value_type_name(),
                    kind: variant.kind(),
                })
            }
        }
    }

    #[inline]
    fn property_ref(&self) -> PropertyRef<'_> {
        T::dispatch_array_ref(self)
    }

    #[inline]
    fn property_mut(&mut self) -> PropertyMut<'_> {
        T::dispatch_array_mut(self)
    }
}

impl<T: ArrayElement, const N: usize, A> TypedProperty<[T; N]> for BaseArrayProperty<T, N, A>
where
    A: ?Sized + PropertyArrayAccessor<T, N>,
{
    #[inline]
    fn value(&self) -> [T; N] {
        self.accessor.get_array()
    }

    #[inline]
    fn set_value(&mut self, value: [T; N]) -> Result<(), PropertyError> {
        self.apply(value)
    }
}

impl<T: ArrayElement, const N: usize, A> ArrayValueProperty<T> for BaseArrayProperty<T, N, A>
where
    A: ?Sized + PropertyArrayAccessor<T, N>,
{
    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn element(&self, index: usize) -> Option<T> {
        (index < N).then(|| self.accessor.get_element(index))
    }

    fn set_element(&mut self, index: usize, value: T) -> Result<(), PropertyError> {
        if index >= N {
            return Err(PropertyError::IndexOutOfRange { index, len: N });
        }
        if !self.accessor.try_set_element(index, value) {
            return Err(self.read_only_error());
        }
        self.notify();
        Ok(())
    }

    fn elements(&self) -> Vec<T> {
        self.value().to_vec()
    }

    fn set_elements(&mut self, values: &[T]) -> Result<(), PropertyError> {
        let array = <[T; N]>::try_from(values).map_err(|_| PropertyError::LengthMismatch {
            expected: N,
            found: values.len(),
        })?;
        self.apply(array)
    }
}

impl<T: ArrayElement, const N: usize, A> fmt::Debug for BaseArrayProperty<T, N, A>
where
    A: ?Sized + PropertyArrayAccessor<T, N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if A::READ_ONLY { "ConstArrayProperty" } else { "ArrayProperty" };
        f.debug_struct(name)
            .field("name", &self.meta.name())
            .field("value", &self.value())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{ArrayProperty, ConstArrayProperty};
    use crate::property::{ArrayValueProperty, PropertyError, ValueProperty};
    use crate::variant::Variant;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn vector_scenario() {
        let mut v = ArrayProperty::new("v", [1, 2, 3]);
        assert_eq!(v.to_string(), "(1, 2, 3)");

        assert_eq!(v.from_string("(4, 5, 6)"), Ok(()));
        assert!(matches!(v.from_string("(4, 5)"), Err(PropertyError::Parse { .. })));
        assert!(v.from_string("[4, 5, 6]").is_err());
        assert!(v.from_string("(4, 5, x)").is_err());
        assert_eq!(v.value(), [4, 5, 6]);
    }

    #[test]
    fn type_names() {
        let v = ArrayProperty::new("v", [0.0_f64; 3]);
        assert_eq!(v.value_type_name(), "f64[3]");
        assert_eq!(ConstArrayProperty::new("mask", [true, false]).value_type_name(), "bool[2]");

        let mut w = ArrayProperty::new("w", [1_u8, 2]);
        assert_eq!(
            w.from_string("(1)"),
            Err(PropertyError::Parse {
                type_name: "u8[2]".into(),
                input: "(1)".into()
            })
        );
    }

    #[test]
    fn checked_elements() {
        let mut v = ArrayProperty::new("v", [0.5_f64, 1.5]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.element(1), Some(1.5));
        assert_eq!(v.element(2), None);

        v.set_element(0, -1.0).unwrap();
        assert_eq!(
            v.set_element(2, 0.0),
            Err(PropertyError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            v.set_elements(&[1.0]),
            Err(PropertyError::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(v.elements(), vec![-1.0, 1.5]);
    }

    #[test]
    fn variants() {
        let mut v = ArrayProperty::new("v", [0_i32; 3]);
        assert_eq!(
            v.to_variant(),
            Variant::Array(vec![Variant::I32(0), Variant::I32(0), Variant::I32(0)])
        );

        v.from_variant(&Variant::from("(1, 2, 3)")).unwrap();
        assert_eq!(v.value(), [1, 2, 3]);

        let mixed = Variant::Array(vec![Variant::U8(7), Variant::from("8"), Variant::F64(9.0)]);
        v.from_variant(&mixed).unwrap();
        assert_eq!(v.value(), [7, 8, 9]);

        let short = Variant::Array(vec![Variant::I32(1)]);
        assert!(v.from_variant(&short).is_err());
        assert_eq!(v.value(), [7, 8, 9]);
    }

    #[test]
    fn per_index_setters_run_in_order() {
        let writes = Rc::new(RefCell::new(vec![]));
        let sink = writes.clone();
        let mut v = ArrayProperty::<u8, 3>::from_accessors(
            "v",
            |index| index as u8,
            move |index, value| sink.borrow_mut().push((index, value)),
        );

        v.from_string("(7, 8, 9)").unwrap();
        assert_eq!(*writes.borrow(), [(0, 7), (1, 8), (2, 9)]);
    }

    #[test]
    fn read_only_array() {
        let mut v = ConstArrayProperty::<bool, 2>::from_getter("v", |index| index == 1);
        assert_eq!(v.to_string(), "(false, true)");
        assert!(v.is_read_only());
        assert!(v.set_element(0, true).is_err());
        assert!(v.from_string("(true, true)").is_err());
    }
}
