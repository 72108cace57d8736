use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::{Any, TypeId};

use super::{PropertyError, PropertyMeta};
use crate::group::PropertyGroup;
use crate::variant::{Variant, VariantMap};
use crate::visitor::{PropertyKind, PropertyMut, PropertyRef, PropertyVisitor};

// -----------------------------------------------------------------------------
// AbstractProperty

/// The type-erased base of every property node, value or group.
pub trait AbstractProperty: Any {
    fn meta(&self) -> &PropertyMeta;

    fn meta_mut(&mut self) -> &mut PropertyMeta;

    /// Returns the name of the property. Names are unique within a group only.
    #[inline]
    fn name(&self) -> &str {
        self.meta().name()
    }

    #[inline]
    fn options(&self) -> &VariantMap {
        self.meta().options()
    }

    #[inline]
    fn option(&self, key: &str) -> Option<&Variant> {
        self.meta().option(key)
    }

    #[inline]
    fn has_option(&self, key: &str) -> bool {
        self.meta().option(key).is_some()
    }

    /// Sets an option, returning the previous value.
    #[inline]
    fn set_option(&mut self, key: &str, value: Variant) -> Option<Variant> {
        self.meta_mut().set_option(key, value)
    }

    #[inline]
    fn remove_option(&mut self, key: &str) -> Option<Variant> {
        self.meta_mut().remove_option(key)
    }

    /// Returns `Some` if this node holds a value.
    fn as_value(&self) -> Option<&dyn ValueProperty> {
        None
    }

    fn as_value_mut(&mut self) -> Option<&mut dyn ValueProperty> {
        None
    }

    /// Returns `Some` if this node is a [`PropertyGroup`].
    fn as_group(&self) -> Option<&PropertyGroup> {
        None
    }

    fn as_group_mut(&mut self) -> Option<&mut PropertyGroup> {
        None
    }

    #[inline]
    fn is_group(&self) -> bool {
        self.as_group().is_some()
    }
}

impl dyn AbstractProperty {
    /// Returns `true` if the concrete node type is `P`.
    #[inline]
    pub fn is<P: AbstractProperty>(&self) -> bool {
        (self as &dyn Any).is::<P>()
    }

    #[inline]
    pub fn downcast_ref<P: AbstractProperty>(&self) -> Option<&P> {
        (self as &dyn Any).downcast_ref::<P>()
    }

    #[inline]
    pub fn downcast_mut<P: AbstractProperty>(&mut self) -> Option<&mut P> {
        (self as &mut dyn Any).downcast_mut::<P>()
    }
}

// -----------------------------------------------------------------------------
// ValueProperty

/// The type-erased interface of a property holding a value.
///
/// Failing operations leave the value untouched.
pub trait ValueProperty: AbstractProperty {
    /// Returns the `TypeId` of the value type, independent of the backing accessor.
    fn value_type_id(&self) -> TypeId;

    /// Returns the stable name of the value type, the key used by the registry.
    ///
    /// Scalars report [`PropertyValue::TYPE_NAME`](crate::value::PropertyValue::TYPE_NAME),
    /// arrays the element name followed by the length, as in `f64[3]`.
    fn value_type_name(&self) -> Cow<'static, str>;

    fn is_read_only(&self) -> bool;

    /// Renders the current value.
    fn to_string(&self) -> String;

    /// Parses `s` and applies the result.
    #[allow(clippy::wrong_self_convention)]
    fn from_string(&mut self, s: &str) -> Result<(), PropertyError>;

    fn to_variant(&self) -> Variant;

    /// Applies a value read from `variant`.
    ///
    /// Candidates are tried in order: the exact value type, a convertible
    /// type, a string parsed like [`from_string`](Self::from_string), and for
    /// array properties an array converted element by element.
    #[allow(clippy::wrong_self_convention)]
    fn from_variant(&mut self, variant: &Variant) -> Result<(), PropertyError>;

    /// Borrows the property under the tag of its value type.
    fn property_ref(&self) -> PropertyRef<'_>;

    /// Mutably borrows the property under the tag of its value type.
    fn property_mut(&mut self) -> PropertyMut<'_>;

    #[inline]
    fn kind(&self) -> PropertyKind {
        self.property_ref().kind()
    }

    /// Calls the one visitor method matching the value type.
    #[inline]
    fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        self.property_mut().accept(visitor);
    }
}

impl dyn ValueProperty {
    /// Returns `true` if the value type is `T`.
    #[inline]
    pub fn holds<T: 'static>(&self) -> bool {
        self.value_type_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<P: ValueProperty>(&self) -> Option<&P> {
        (self as &dyn Any).downcast_ref::<P>()
    }

    #[inline]
    pub fn downcast_mut<P: ValueProperty>(&mut self) -> Option<&mut P> {
        (self as &mut dyn Any).downcast_mut::<P>()
    }
}

// -----------------------------------------------------------------------------
// TypedProperty

/// A property whose value type `T` is known.
pub trait TypedProperty<T: 'static>: ValueProperty {
    fn value(&self) -> T;

    /// Replaces the value.
    ///
    /// Fails with [`PropertyError::ReadOnly`] on read-only properties.
    fn set_value(&mut self, value: T) -> Result<(), PropertyError>;
}

// -----------------------------------------------------------------------------
// ArrayValueProperty

/// A property holding a fixed-size array of `T`, with per-element access.
pub trait ArrayValueProperty<T: 'static>: ValueProperty {
    fn len(&self) -> usize;

    /// Returns the element at `index`, `None` when out of range.
    fn element(&self, index: usize) -> Option<T>;

    /// Replaces the element at `index`.
    fn set_element(&mut self, index: usize, value: T) -> Result<(), PropertyError>;

    /// Returns all elements in index order.
    fn elements(&self) -> Vec<T>;

    /// Replaces all elements. `values` must hold exactly [`len`](Self::len) elements.
    fn set_elements(&mut self, values: &[T]) -> Result<(), PropertyError>;
}
