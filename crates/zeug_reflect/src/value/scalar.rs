use alloc::string::{String, ToString};

use super::format::{is_decimal_literal, is_integral_literal};
use super::{ArrayElement, PropertyValue};
use crate::property::{ArrayValueProperty, TypedProperty};
use crate::variant::{Variant, VariantType};
use crate::visitor::{PropertyMut, PropertyRef};

/// Exact or convertible value first, then the string codec.
fn scalar_from_variant<T: PropertyValue + VariantType>(variant: &Variant) -> Option<T> {
    variant
        .value::<T>()
        .or_else(|| variant.as_str().and_then(T::from_property_string))
}

// -----------------------------------------------------------------------------
// Numbers

macro_rules! impl_number {
    ($literal:ident: $($ty:ident $(=> $tag:ident, $array_tag:ident)?),* $(,)?) => {
        $(
            impl PropertyValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                #[inline]
                fn to_property_string(&self) -> String {
                    self.to_string()
                }

                fn from_property_string(s: &str) -> Option<Self> {
                    s.trim().parse().ok()
                }

                #[inline]
                fn to_variant(&self) -> Variant {
                    Variant::from(*self)
                }

                #[inline]
                fn from_variant(variant: &Variant) -> Option<Self> {
                    scalar_from_variant(variant)
                }

                $(
                    fn dispatch_ref<'a>(property: &'a dyn TypedProperty<Self>) -> PropertyRef<'a> {
                        PropertyRef::$tag(property)
                    }

                    fn dispatch_mut<'a>(property: &'a mut dyn TypedProperty<Self>) -> PropertyMut<'a> {
                        PropertyMut::$tag(property)
                    }
                )?
            }

            impl ArrayElement for $ty {
                fn parse_literal(s: &str) -> Option<Self> {
                    if $literal(s) { s.parse().ok() } else { None }
                }

                $(
                    fn dispatch_array_ref<'a>(
                        property: &'a dyn ArrayValueProperty<Self>,
                    ) -> PropertyRef<'a> {
                        PropertyRef::$array_tag(property)
                    }

                    fn dispatch_array_mut<'a>(
                        property: &'a mut dyn ArrayValueProperty<Self>,
                    ) -> PropertyMut<'a> {
                        PropertyMut::$array_tag(property)
                    }
                )?
            }
        )*
    };
}

impl_number! {
    is_integral_literal:
    i8, i16, i32 => Int, IntArray, i64,
    u8, u16, u32, u64,
}

impl_number! {
    is_decimal_literal:
    f32, f64 => Double, DoubleArray,
}

// -----------------------------------------------------------------------------
// bool

impl PropertyValue for bool {
    const TYPE_NAME: &'static str = "bool";

    #[inline]
    fn to_property_string(&self) -> String {
        self.to_string()
    }

    fn from_property_string(s: &str) -> Option<Self> {
        Self::parse_literal(s.trim())
    }

    #[inline]
    fn to_variant(&self) -> Variant {
        Variant::Bool(*self)
    }

    #[inline]
    fn from_variant(variant: &Variant) -> Option<Self> {
        scalar_from_variant(variant)
    }

    fn dispatch_ref<'a>(property: &'a dyn TypedProperty<Self>) -> PropertyRef<'a> {
        PropertyRef::Bool(property)
    }

    fn dispatch_mut<'a>(property: &'a mut dyn TypedProperty<Self>) -> PropertyMut<'a> {
        PropertyMut::Bool(property)
    }
}

impl ArrayElement for bool {
    fn parse_literal(s: &str) -> Option<Self> {
        match s {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn dispatch_array_ref<'a>(property: &'a dyn ArrayValueProperty<Self>) -> PropertyRef<'a> {
        PropertyRef::BoolArray(property)
    }

    fn dispatch_array_mut<'a>(
        property: &'a mut dyn ArrayValueProperty<Self>,
    ) -> PropertyMut<'a> {
        PropertyMut::BoolArray(property)
    }
}

// -----------------------------------------------------------------------------
// String

impl PropertyValue for String {
    const TYPE_NAME: &'static str = "string";

    #[inline]
    fn to_property_string(&self) -> String {
        self.clone()
    }

    #[inline]
    fn from_property_string(s: &str) -> Option<Self> {
        Some(s.into())
    }

    #[inline]
    fn to_variant(&self) -> Variant {
        Variant::String(self.clone())
    }

    #[inline]
    fn from_variant(variant: &Variant) -> Option<Self> {
        variant.value::<String>()
    }

    fn dispatch_ref<'a>(property: &'a dyn TypedProperty<Self>) -> PropertyRef<'a> {
        PropertyRef::String(property)
    }

    fn dispatch_mut<'a>(property: &'a mut dyn TypedProperty<Self>) -> PropertyMut<'a> {
        PropertyMut::String(property)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::PropertyValue;
    use crate::variant::Variant;
    use alloc::string::String;

    fn round_trip<T: PropertyValue>(value: T) {
        let text = value.to_property_string();
        assert_eq!(T::from_property_string(&text), Some(value), "{text}");
    }

    #[test]
    fn round_trips() {
        round_trip(true);
        round_trip(false);
        round_trip(i8::MIN);
        round_trip(i64::MAX);
        round_trip(u64::MAX);
        round_trip(0.1_f32);
        round_trip(-1234.5678_f64);
        round_trip(1e300_f64);
        round_trip(f32::INFINITY);
        round_trip(String::from(" spaced "));
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(i32::from_property_string("seven"), None);
        assert_eq!(i32::from_property_string("1.5"), None);
        assert_eq!(u8::from_property_string("256"), None);
        assert_eq!(u8::from_property_string("-1"), None);
        assert_eq!(f64::from_property_string("1e3"), Some(1000.0));
        assert_eq!(f64::from_property_string("1,5"), None);
        assert_eq!(f64::from_property_string(" 2.5 "), Some(2.5));
        assert_eq!(i32::from_property_string("+4"), Some(4));
    }

    #[test]
    fn variants() {
        assert_eq!(i32::from_variant(&Variant::I32(7)), Some(7));
        assert_eq!(i32::from_variant(&Variant::U8(7)), Some(7));
        assert_eq!(i32::from_variant(&Variant::from("7")), Some(7));
        assert_eq!(i32::from_variant(&Variant::array()), None);
        assert_eq!(bool::from_variant(&Variant::from("true")), Some(true));
        assert_eq!(String::from_variant(&Variant::F64(0.5)).as_deref(), Some("0.5"));
        assert_eq!(f32::to_variant(&1.5), Variant::F32(1.5));
    }
}
