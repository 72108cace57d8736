use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;
use core::cell::RefCell;
use core::fmt;

use super::{AbstractProperty, PropertyError, PropertyMeta, TypedProperty, ValueProperty};
use crate::accessor::{Accessor, AccessorGetSet, AccessorValue, ReadAccessor};
use crate::accessor::{ConstAccessorGetSet, ConstAccessorValue};
use crate::value::PropertyValue;
use crate::variant::Variant;
use crate::visitor::{PropertyMut, PropertyRef};

// -----------------------------------------------------------------------------
// PropertyAccessor

/// The accessor object held by a property.
///
/// Implemented for `dyn Accessor<T>` and `dyn ReadAccessor<T>`, which are
/// the two kinds of [`BaseProperty`].
pub trait PropertyAccessor<T>: ReadAccessor<T> {
    const READ_ONLY: bool;

    /// Writes `value`, returning `false` when the accessor is read-only.
    fn try_set_value(&mut self, value: T) -> bool;
}

impl<T> PropertyAccessor<T> for dyn Accessor<T> {
    const READ_ONLY: bool = false;

    #[inline]
    fn try_set_value(&mut self, value: T) -> bool {
        self.set_value(value);
        true
    }
}

impl<T> PropertyAccessor<T> for dyn ReadAccessor<T> {
    const READ_ONLY: bool = true;

    #[inline]
    fn try_set_value(&mut self, _value: T) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// BaseProperty

/// A named value of type `T`, stored behind an accessor of kind `A`.
///
/// Use the [`Property`] and [`ConstProperty`] aliases.
pub struct BaseProperty<T: 'static, A: ?Sized + 'static = dyn Accessor<T>> {
    meta: PropertyMeta,
    accessor: Box<A>,
    listeners: Vec<Box<dyn FnMut(&T)>>,
}

/// A read-write property.
///
/// # Examples
///
/// ```
/// use zeug_reflect::property::{Property, PropertyError, ValueProperty};
///
/// let mut scale = Property::new("scale", 1.5_f32);
/// assert_eq!(scale.to_string(), "1.5");
///
/// assert!(matches!(scale.from_string("big"), Err(PropertyError::Parse { .. })));
/// assert_eq!(scale.value(), 1.5);
/// ```
pub type Property<T> = BaseProperty<T, dyn Accessor<T>>;

/// A read-only property. Every write fails with [`PropertyError::ReadOnly`].
pub type ConstProperty<T> = BaseProperty<T, dyn ReadAccessor<T>>;

impl<T: PropertyValue, A: ?Sized + PropertyAccessor<T>> BaseProperty<T, A> {
    fn from_parts(name: impl Into<String>, accessor: Box<A>) -> Self {
        Self {
            meta: PropertyMeta::new(name),
            accessor,
            listeners: Vec::new(),
        }
    }

    /// Returns the current value, read through the accessor.
    #[inline]
    pub fn value(&self) -> T {
        self.accessor.get_value()
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

    /// Writes through the accessor and notifies listeners.
    fn apply(&mut self, value: T) -> Result<(), PropertyError> {
        if !self.accessor.try_set_value(value) {
            return Err(self.read_only_error());
        }
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let current = self.accessor.get_value();
        for listener in &mut self.listeners {
            listener(&current);
        }
    }
}

impl<T: PropertyValue> BaseProperty<T, dyn Accessor<T>> {
    /// Creates a property owning `value`.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self::with_accessor(name, AccessorValue::with_value(value))
    }

    /// Creates a property owning `T::default()`.
    pub fn with_default(name: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self::with_accessor(name, AccessorValue::<T>::new())
    }

    /// Creates a property forwarding to a getter and a setter closure.
    pub fn from_accessors(
        name: impl Into<String>,
        getter: impl Fn() -> T + 'static,
        setter: impl FnMut(T) + 'static,
    ) -> Self {
        Self::with_accessor(name, AccessorGetSet::new(getter, setter))
    }

    /// Creates a property bound to by-value methods of a shared object.
    ///
    /// See [`AccessorGetSet::from_methods`].
    pub fn from_methods<O: 'static>(
        name: impl Into<String>,
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O) -> T + 'static,
        setter: impl Fn(&mut O, T) + 'static,
    ) -> Self {
        Self::with_accessor(name, AccessorGetSet::from_methods(object, getter, setter))
    }

    /// Creates a property bound to by-reference methods of a shared object.
    pub fn from_ref_methods<O: 'static>(
        name: impl Into<String>,
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O) -> &T + 'static,
        setter: impl Fn(&mut O, &T) + 'static,
    ) -> Self {
        Self::with_accessor(name, AccessorGetSet::from_ref_methods(object, getter, setter))
    }

    /// Creates a property whose getter needs `&mut O`.
    pub fn from_mut_methods<O: 'static>(
        name: impl Into<String>,
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&mut O) -> T + 'static,
        setter: impl Fn(&mut O, T) + 'static,
    ) -> Self {
        Self::with_accessor(name, AccessorGetSet::from_mut_methods(object, getter, setter))
    }

    /// Creates a property around a pre-built accessor.
    pub fn with_accessor(name: impl Into<String>, accessor: impl Accessor<T> + 'static) -> Self {
        Self::from_parts(name, Box::new(accessor))
    }

    /// Creates a property around a boxed accessor.
    pub fn from_boxed(name: impl Into<String>, accessor: Box<dyn Accessor<T>>) -> Self {
        Self::from_parts(name, accessor)
    }

    /// Replaces the value and notifies listeners.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.accessor.set_value(value);
        self.notify();
    }

    /// Registers a listener called after every successful write.
    ///
    /// The listener receives the value read back through the accessor,
    /// which may differ from the written one when the setter clamps.
    pub fn on_value_changed(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl<T: PropertyValue> BaseProperty<T, dyn ReadAccessor<T>> {
    /// Creates a read-only property owning `value`.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self::with_accessor(name, ConstAccessorValue::with_value(value))
    }

    /// Creates a read-only property forwarding to a getter closure.
    pub fn from_getter(name: impl Into<String>, getter: impl Fn() -> T + 'static) -> Self {
        Self::with_accessor(name, ConstAccessorGetSet::new(getter))
    }

    /// Creates a read-only property bound to a by-value method of a shared object.
    pub fn from_method<O: 'static>(
        name: impl Into<String>,
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O) -> T + 'static,
    ) -> Self {
        Self::with_accessor(name, ConstAccessorGetSet::from_method(object, getter))
    }

    /// Creates a read-only property bound to a by-reference method of a shared object.
    pub fn from_ref_method<O: 'static>(
        name: impl Into<String>,
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O) -> &T + 'static,
    ) -> Self {
        Self::with_accessor(name, ConstAccessorGetSet::from_ref_method(object, getter))
    }

    pub fn with_accessor(name: impl Into<String>, accessor: impl ReadAccessor<T> + 'static) -> Self {
        Self::from_parts(name, Box::new(accessor))
    }
}

// -----------------------------------------------------------------------------
// Property traits

impl<T: PropertyValue, A: ?Sized + PropertyAccessor<T>> AbstractProperty for BaseProperty<T, A> {
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

impl<T: PropertyValue, A: ?Sized + PropertyAccessor<T>> ValueProperty for BaseProperty<T, A> {
    #[inline]
    fn value_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    #[inline]
    fn value_type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(T::TYPE_NAME)
    }

    #[inline]
    fn is_read_only(&self) -> bool {
        A::READ_ONLY
    }

    fn to_string(&self) -> String {
        self.value().to_property_string()
    }

    fn from_string(&mut self, s: &str) -> Result<(), PropertyError> {
        if A::READ_ONLY {
            return Err(self.read_only_error());
        }
        match T::from_property_string(s) {
            Some(value) => self.apply(value),
            None => {
                log::debug!("property `{}` rejected {s:?} as `{}`", self.meta.name(), T::TYPE_NAME);
                Err(PropertyError::Parse {
                    type_name: Cow::Borrowed(T::TYPE_NAME),
                    input: s.into(),
                })
            }
        }
    }

    fn to_variant(&self) -> Variant {
        self.value().to_variant()
    }

    fn from_variant(&mut self, variant: &Variant) -> Result<(), PropertyError> {
        if A::READ_ONLY {
            return Err(self.read_only_error());
        }
        match T::from_variant(variant) {
            Some(value) => self.apply(value),
            None => {
                log::debug!(
                    "property `{}` rejected a `{}` variant as `{}`",
                    self.meta.name(),
                    variant.kind(),
                    T::TYPE_NAME,
                );
                Err(PropertyError::Conversion {
                    type_name: Cow::Borrowed(T::TYPE_NAME),
                    kind: variant.kind(),
                })
            }
        }
    }

    #[inline]
    fn property_ref(&self) -> PropertyRef<'_> {
        T::dispatch_ref(self)
    }

    #[inline]
    fn property_mut(&mut self) -> PropertyMut<'_> {
        T::dispatch_mut(self)
    }
}

impl<T: PropertyValue, A: ?Sized + PropertyAccessor<T>> TypedProperty<T> for BaseProperty<T, A> {
    #[inline]
    fn value(&self) -> T {
        self.accessor.get_value()
    }

    #[inline]
    fn set_value(&mut self, value: T) -> Result<(), PropertyError> {
        self.apply(value)
    }
}

impl<T: PropertyValue, A: ?Sized + PropertyAccessor<T>> fmt::Debug for BaseProperty<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(if A::READ_ONLY { "ConstProperty" } else { "Property" })
            .field("name", &self.meta.name())
            .field("value", &self.value())
            .finish_non_exhaustive()
    }
}
