//! Map a value type to the property type representing it.
//!
//! The mapping is resolved at compile time through [`PropertyType`]:
//!
//! | value type                         | property type          |
//! |------------------------------------|------------------------|
//! | `bool`, integers, floats, `String` | [`Property<T>`]        |
//! | [`Color`], [`FilePath`]            | [`Property<T>`]        |
//! | enums via `impl_enum_value!`       | [`Property<T>`]        |
//! | `[E; N]` for any [`ArrayElement`]  | [`ArrayProperty<E, N>`] |
//!
//! Generic code names the property of `T` as [`PropertyOf<T>`]:
//!
//! ```
//! use zeug_reflect::property::{ArrayValueProperty, ValueProperty};
//! use zeug_reflect::selector::{PropertyOf, PropertyType};
//!
//! let extent: PropertyOf<[u32; 2]> = <[u32; 2]>::make_property("extent".into(), [640, 480]);
//! assert_eq!(extent.len(), 2);
//! assert_eq!(extent.to_string(), "(640, 480)");
//! ```
//!
//! [`Property<T>`]: crate::property::Property
//! [`ArrayProperty<E, N>`]: crate::property::ArrayProperty
//! [`Color`]: crate::value::Color
//! [`FilePath`]: crate::value::FilePath
//! [`ArrayElement`]: crate::value::ArrayElement

use alloc::string::String;

use crate::property::{ArrayProperty, Property, TypedProperty};
use crate::value::{ArrayElement, Color, FilePath};

// -----------------------------------------------------------------------------
// PropertyType

/// A value type with a designated property type.
pub trait PropertyType: Sized + 'static {
    /// The property representing values of this type.
    type Property: TypedProperty<Self>;

    /// Creates a property owning `value`.
    fn make_property(name: String, value: Self) -> Self::Property;
}

/// The property type selected for `T`.
pub type PropertyOf<T> = <T as PropertyType>::Property;

macro_rules! impl_scalar_property_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PropertyType for $ty {
                type Property = Property<$ty>;

                #[inline]
                fn make_property(name: String, value: Self) -> Self::Property {
                    Property::new(name, value)
                }
            }
        )*
    };
}

impl_scalar_property_type! {
    bool,
    i8, i16, i32, i64,
    u8, u16, u32, u64,
    f32, f64,
    String,
    Color,
    FilePath,
}

impl<T: ArrayElement, const N: usize> PropertyType for [T; N] {
    type Property = ArrayProperty<T, N>;

    #[inline]
    fn make_property(name: String, value: Self) -> Self::Property {
        ArrayProperty::new(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::{PropertyOf, PropertyType};
    use crate::property::{TypedProperty, ValueProperty};
    use crate::value::Color;
    use core::any::TypeId;

    fn erased<T: PropertyType>(value: T) -> TypeId {
        let property: PropertyOf<T> = T::make_property("p".into(), value);
        property.value_type_id()
    }

    #[test]
    fn value_type_is_preserved() {
        assert_eq!(erased(1_i8), TypeId::of::<i8>());
        assert_eq!(erased(Color::BLACK), TypeId::of::<Color>());
        assert_eq!(erased([1.0_f32; 4]), TypeId::of::<[f32; 4]>());
    }

    #[test]
    fn typed_access() {
        let p = <[bool; 2]>::make_property("flags".into(), [true, false]);
        assert_eq!(TypedProperty::value(&p), [true, false]);
    }
}
