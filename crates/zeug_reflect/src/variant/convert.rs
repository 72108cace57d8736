use alloc::string::{String, ToString};

use super::{Variant, VariantArray, VariantKind, VariantMap};

// -----------------------------------------------------------------------------
// VariantType

/// A type that can be stored in and read back from a [`Variant`].
///
/// `convert` must succeed whenever the variant's kind is `KIND`.
pub trait VariantType: Sized {
    /// The kind produced by [`into_variant`](Self::into_variant).
    const KIND: VariantKind;

    /// Reads a value out of `variant`, converting if allowed.
    fn convert(variant: &Variant) -> Option<Self>;

    /// Wraps `self` into a variant of kind `KIND`.
    fn into_variant(self) -> Variant;
}

// -----------------------------------------------------------------------------
// Numeric helpers

/// A number read out of a numeric variant before it is narrowed to the target type.
///
/// Strings are not numbers here; each target parses them with its own `FromStr`.
#[derive(Clone, Copy)]
enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn of(variant: &Variant) -> Option<Self> {
        Some(match *variant {
            Variant::Bool(v) => Self::Int(i128::from(v)),
            Variant::I8(v) => Self::Int(i128::from(v)),
            Variant::I16(v) => Self::Int(i128::from(v)),
            Variant::I32(v) => Self::Int(i128::from(v)),
            Variant::I64(v) => Self::Int(i128::from(v)),
            Variant::U8(v) => Self::Int(i128::from(v)),
            Variant::U16(v) => Self::Int(i128::from(v)),
            Variant::U32(v) => Self::Int(i128::from(v)),
            Variant::U64(v) => Self::Int(i128::from(v)),
            Variant::F32(v) => Self::Float(f64::from(v)),
            Variant::F64(v) => Self::Float(v),
            _ => return None,
        })
    }
}

macro_rules! impl_integer {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl VariantType for $ty {
                const KIND: VariantKind = VariantKind::$variant;

                fn convert(variant: &Variant) -> Option<Self> {
                    if let Variant::String(s) = variant {
                        return s.trim().parse().ok();
                    }
                    match Number::of(variant)? {
                        Number::Int(v) => $ty::try_from(v).ok(),
                        // `as i128` saturates far outside every target range.
                        Number::Float(v) if v.is_finite() => $ty::try_from(v.trunc() as i128).ok(),
                        Number::Float(_) => None,
                    }
                }

                #[inline]
                fn into_variant(self) -> Variant {
                    Variant::$variant(self)
                }
            }
        )*
    };
}

impl_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

macro_rules! impl_float {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl VariantType for $ty {
                const KIND: VariantKind = VariantKind::$variant;

                fn convert(variant: &Variant) -> Option<Self> {
                    if let Variant::String(s) = variant {
                        return s.trim().parse().ok();
                    }
                    match Number::of(variant)? {
                        Number::Int(v) => Some(v as $ty),
                        Number::Float(v) => Some(v as $ty),
                    }
                }

                #[inline]
                fn into_variant(self) -> Variant {
                    Variant::$variant(self)
                }
            }
        )*
    };
}

impl_float! {
    f32 => F32,
    f64 => F64,
}

impl VariantType for bool {
    const KIND: VariantKind = VariantKind::Bool;

    fn convert(variant: &Variant) -> Option<Self> {
        match variant {
            Variant::Bool(v) => Some(*v),
            Variant::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            other => match Number::of(other)? {
                Number::Int(v) => Some(v != 0),
                Number::Float(v) => Some(v != 0.0),
            },
        }
    }

    #[inline]
    fn into_variant(self) -> Variant {
        Variant::Bool(self)
    }
}

impl VariantType for String {
    const KIND: VariantKind = VariantKind::String;

    fn convert(variant: &Variant) -> Option<Self> {
        Some(match variant {
            Variant::String(s) => s.clone(),
            Variant::Bool(v) => v.to_string(),
            Variant::I8(v) => v.to_string(),
            Variant::I16(v) => v.to_string(),
            Variant::I32(v) => v.to_string(),
            Variant::I64(v) => v.to_string(),
            Variant::U8(v) => v.to_string(),
            Variant::U16(v) => v.to_string(),
            Variant::U32(v) => v.to_string(),
            Variant::U64(v) => v.to_string(),
            Variant::F32(v) => v.to_string(),
            Variant::F64(v) => v.to_string(),
            Variant::Empty | Variant::Array(_) | Variant::Map(_) => return None,
        })
    }

    #[inline]
    fn into_variant(self) -> Variant {
        Variant::String(self)
    }
}

impl VariantType for VariantArray {
    const KIND: VariantKind = VariantKind::Array;

    fn convert(variant: &Variant) -> Option<Self> {
        variant.as_array().cloned()
    }

    #[inline]
    fn into_variant(self) -> Variant {
        Variant::Array(self)
    }
}

impl VariantType for VariantMap {
    const KIND: VariantKind = VariantKind::Map;

    fn convert(variant: &Variant) -> Option<Self> {
        variant.as_map().cloned()
    }

    #[inline]
    fn into_variant(self) -> Variant {
        Variant::Map(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::variant::{Variant, VariantArray, VariantMap, VariantType};
    use alloc::string::String;
    use alloc::vec;

    fn samples() -> alloc::vec::Vec<Variant> {
        vec![
            Variant::Empty,
            Variant::Bool(true),
            Variant::I8(-3),
            Variant::I16(300),
            Variant::I32(-70_000),
            Variant::I64(1 << 40),
            Variant::U8(200),
            Variant::U16(60_000),
            Variant::U32(4_000_000_000),
            Variant::U64(u64::MAX),
            Variant::F32(1.5),
            Variant::F64(-2.25),
            Variant::from("12"),
            Variant::from(vec![Variant::I32(1)]),
            Variant::from(VariantMap::new()),
        ]
    }

    fn exact_implies_convertible<T: VariantType>() {
        for v in samples() {
            if v.has_type::<T>() {
                assert!(v.can_convert::<T>(), "{v:?}");
                assert_eq!(T::convert(&v).map(T::into_variant), Some(v));
            }
        }
    }

    #[test]
    fn has_type_implies_can_convert() {
        exact_implies_convertible::<bool>();
        exact_implies_convertible::<i8>();
        exact_implies_convertible::<i16>();
        exact_implies_convertible::<i32>();
        exact_implies_convertible::<i64>();
        exact_implies_convertible::<u8>();
        exact_implies_convertible::<u16>();
        exact_implies_convertible::<u32>();
        exact_implies_convertible::<u64>();
        exact_implies_convertible::<f32>();
        exact_implies_convertible::<f64>();
        exact_implies_convertible::<String>();
        exact_implies_convertible::<VariantArray>();
        exact_implies_convertible::<VariantMap>();
    }

    #[test]
    fn integer_ranges() {
        assert_eq!(Variant::I16(300).value::<u8>(), None);
        assert_eq!(Variant::I16(255).value::<u8>(), Some(255));
        assert_eq!(Variant::I8(-1).value::<u64>(), None);
        assert_eq!(Variant::U64(u64::MAX).value::<i64>(), None);
        assert_eq!(Variant::U64(u64::MAX).value::<u64>(), Some(u64::MAX));
    }

    #[test]
    fn float_and_int() {
        assert_eq!(Variant::F64(2.75).value::<i32>(), Some(2));
        assert_eq!(Variant::F64(f64::NAN).value::<i32>(), None);
        assert_eq!(Variant::I32(3).value::<f32>(), Some(3.0));
        assert_eq!(Variant::F64(-2.75).value::<i32>(), Some(-2));
        assert_eq!(Variant::F64(1e20).value::<i32>(), None);
        assert_eq!(Variant::F64(1e40).value::<u64>(), None);
        assert_eq!(Variant::F32(-1.0).value::<u8>(), None);
        assert_eq!(Variant::F64(f64::INFINITY).value::<i64>(), None);
        assert_eq!(Variant::Bool(true).value::<f64>(), Some(1.0));
        assert_eq!(Variant::I32(0).value::<bool>(), Some(false));
    }

    #[test]
    fn strings() {
        assert_eq!(Variant::from(" 17 ").value::<i32>(), Some(17));
        assert_eq!(Variant::from("0.5").value::<f32>(), Some(0.5));
        assert_eq!(Variant::from("abc").value::<i32>(), None);
        assert_eq!(Variant::from("1e3").value::<f64>(), Some(1000.0));
        assert_eq!(Variant::from("inf").value::<f32>(), Some(f32::INFINITY));
        assert_eq!(Variant::from("true").value::<bool>(), Some(true));
        assert_eq!(Variant::from("yes").value::<bool>(), None);
        assert_eq!(Variant::I32(42).value::<String>().as_deref(), Some("42"));
        assert_eq!(Variant::Bool(false).value::<String>().as_deref(), Some("false"));
        assert_eq!(Variant::Empty.value::<String>(), None);
    }

    #[test]
    fn integer_strings_use_integer_grammar() {
        assert_eq!(Variant::from("7.9").value::<i32>(), None);
        assert_eq!(Variant::from("1e3").value::<i32>(), None);
        assert_eq!(Variant::from("-0").value::<i8>(), Some(0));
        assert_eq!(Variant::from("+42").value::<u16>(), Some(42));
        assert_eq!(Variant::from("-1").value::<u32>(), None);
        assert_eq!(Variant::from("99999999999999999999999999999999999999999").value::<i32>(), None);
        assert_eq!(Variant::from("18446744073709551615").value::<u64>(), Some(u64::MAX));
        assert!(!Variant::from("7.9").can_convert::<i64>());
    }

    #[test]
    fn containers_do_not_convert_to_scalars() {
        assert!(!Variant::array().can_convert::<i32>());
        assert!(!Variant::map().can_convert::<bool>());
        assert!(!Variant::I32(1).can_convert::<VariantArray>());
    }
}
