use alloc::string::String;
use core::fmt;

use serde_core::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_core::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Variant, VariantArray, VariantMap};

// -----------------------------------------------------------------------------
// Serialize

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Variant::Empty => serializer.serialize_unit(),
            Variant::Bool(v) => serializer.serialize_bool(*v),
            Variant::I8(v) => serializer.serialize_i8(*v),
            Variant::I16(v) => serializer.serialize_i16(*v),
            Variant::I32(v) => serializer.serialize_i32(*v),
            Variant::I64(v) => serializer.serialize_i64(*v),
            Variant::U8(v) => serializer.serialize_u8(*v),
            Variant::U16(v) => serializer.serialize_u16(*v),
            Variant::U32(v) => serializer.serialize_u32(*v),
            Variant::U64(v) => serializer.serialize_u64(*v),
            Variant::F32(v) => serializer.serialize_f32(*v),
            Variant::F64(v) => serializer.serialize_f64(*v),
            Variant::String(v) => serializer.serialize_str(v),
            Variant::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for element in array {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Variant::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Deserialize

/// Self-describing formats only: the variant kind is taken from the input.
///
/// Signed integers come back as `I64`. Unsigned integers come back as `I64`
/// when they fit, `U64` otherwise. Floats come back as `F64`.
impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(VariantVisitor)
    }
}

struct VariantVisitor;

impl<'de> Visitor<'de> for VariantVisitor {
    type Value = Variant;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any variant value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Variant::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Variant::I64(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(match i64::try_from(v) {
            Ok(v) => Variant::I64(v),
            Err(_) => Variant::U64(v),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Variant::F64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Variant::String(v.into()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Variant::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Variant::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Variant::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut array = VariantArray::with_capacity(seq.size_hint().unwrap_or(0).min(64));
        while let Some(element) = seq.next_element::<Variant>()? {
            array.push(element);
        }
        Ok(Variant::Array(array))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut result = VariantMap::new();
        while let Some((key, value)) = map.next_entry::<String, Variant>()? {
            result.insert(key, value);
        }
        Ok(Variant::Map(result))
    }
}

#[cfg(test)]
mod tests {
    use crate::variant::{Variant, VariantMap};
    use alloc::string::{String, ToString};
    use alloc::vec;

    fn sample() -> Variant {
        let mut map = VariantMap::new();
        map.insert("name".into(), Variant::from("box"));
        map.insert("size".into(), Variant::I64(3));
        map.insert("scale".into(), Variant::F64(0.5));
        map.insert("visible".into(), Variant::Bool(true));
        map.insert("tags".into(), Variant::Array(vec![Variant::from("a"), Variant::Empty]));
        Variant::Map(map)
    }

    #[test]
    fn json() {
        let v = sample();
        let text = serde_json::to_string(&v).unwrap();
        assert_eq!(
            text,
            r#"{"name":"box","scale":0.5,"size":3,"tags":["a",null],"visible":true}"#
        );

        let back: Variant = serde_json::from_str(&text).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn ron() {
        let v = sample();
        let text = ron::to_string(&v).unwrap();
        let back: Variant = ron::from_str(&text).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn large_unsigned() {
        let back: Variant = serde_json::from_str(&u64::MAX.to_string()).unwrap();
        assert_eq!(back, Variant::U64(u64::MAX));

        let narrow: Variant = serde_json::from_str("7").unwrap();
        assert_eq!(narrow, Variant::I64(7));
        assert_eq!(narrow.value::<String>().as_deref(), Some("7"));
    }
}
