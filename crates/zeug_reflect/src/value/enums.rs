use core::fmt::Debug;

use crate::variant::Variant;

// -----------------------------------------------------------------------------
// EnumValue

/// A C-like enum with a fixed table of names.
///
/// Implement it through [`impl_enum_value!`](crate::impl_enum_value), which
/// also wires the enum into [`PropertyValue`](super::PropertyValue) and
/// [`PropertyType`](crate::selector::PropertyType).
///
/// `VALUES[i]` is named `NAMES[i]`; both tables have the same length.
pub trait EnumValue: Copy + PartialEq + Debug + 'static {
    /// Every value, in declaration order.
    const VALUES: &'static [Self];
    /// The name of each value in `VALUES`.
    const NAMES: &'static [&'static str];

    /// Returns the position of `self` in [`VALUES`](Self::VALUES).
    fn index(self) -> usize {
        Self::VALUES
            .iter()
            .position(|value| *value == self)
            .expect("enum value missing from its VALUES table")
    }

    /// Returns the name of `self`.
    #[inline]
    fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::VALUES.get(index).copied()
    }

    fn from_name(name: &str) -> Option<Self> {
        let index = Self::NAMES.iter().position(|n| *n == name)?;
        Self::from_index(index)
    }

    /// Reads a value from its name, or from an integer index into the table.
    fn from_enum_variant(variant: &Variant) -> Option<Self> {
        match variant {
            Variant::String(name) => Self::from_name(name.trim()),
            other if other.kind().is_integer() => {
                Self::from_index(usize::try_from(other.value::<u64>()?).ok()?)
            }
            _ => None,
        }
    }
}

/// Implements [`EnumValue`], [`PropertyValue`] and [`PropertyType`] for a
/// field-less enum.
///
/// The string and variant forms of a value are its name. Variants holding an
/// integer are read as an index into the declaration order.
///
/// # Examples
///
/// ```
/// use zeug_reflect::impl_enum_value;
/// use zeug_reflect::property::{Property, ValueProperty};
/// use zeug_reflect::visitor::PropertyKind;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Shading { Flat, Smooth }
///
/// impl_enum_value!(Shading {
///     Flat => "flat",
///     Smooth => "smooth",
/// });
///
/// let mut shading = Property::new("shading", Shading::Flat);
/// assert_eq!(shading.kind(), PropertyKind::Enum);
///
/// shading.from_string("smooth").unwrap();
/// assert_eq!(shading.value(), Shading::Smooth);
/// assert!(shading.from_string("phong").is_err());
/// ```
///
/// [`PropertyValue`]: crate::value::PropertyValue
/// [`PropertyType`]: crate::selector::PropertyType
#[macro_export]
macro_rules! impl_enum_value {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $crate::value::EnumValue for $ty {
            const VALUES: &'static [Self] = &[$(Self::$variant),+];
            const NAMES: &'static [&'static str] = &[$($name),+];
        }

        impl $crate::value::PropertyValue for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn to_property_string(&self) -> $crate::__private::String {
                $crate::value::EnumValue::name(*self).into()
            }

            fn from_property_string(s: &str) -> Option<Self> {
                <Self as $crate::value::EnumValue>::from_name(s.trim())
            }

            fn to_variant(&self) -> $crate::variant::Variant {
                $crate::variant::Variant::from($crate::value::EnumValue::name(*self))
            }

            fn from_variant(variant: &$crate::variant::Variant) -> Option<Self> {
                <Self as $crate::value::EnumValue>::from_enum_variant(variant)
            }

            fn dispatch_ref<'a>(
                property: &'a dyn $crate::property::TypedProperty<Self>,
            ) -> $crate::visitor::PropertyRef<'a> {
                $crate::visitor::PropertyRef::Enum($crate::visitor::EnumRef::new(
                    property,
                    <Self as $crate::value::EnumValue>::NAMES,
                ))
            }

            fn dispatch_mut<'a>(
                property: &'a mut dyn $crate::property::TypedProperty<Self>,
            ) -> $crate::visitor::PropertyMut<'a> {
                $crate::visitor::PropertyMut::Enum($crate::visitor::EnumMut::new(
                    property,
                    <Self as $crate::value::EnumValue>::NAMES,
                ))
            }
        }

        impl $crate::selector::PropertyType for $ty {
            type Property = $crate::property::Property<Self>;

            fn make_property(name: $crate::__private::String, value: Self) -> Self::Property {
                $crate::property::Property::new(name, value)
            }
        }
    };
}
