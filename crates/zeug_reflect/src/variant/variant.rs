use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use super::{VariantKind, VariantType};

// -----------------------------------------------------------------------------
// Variant

/// An ordered list of variants.
pub type VariantArray = Vec<Variant>;

/// A string-keyed map of variants, iterated in key order.
pub type VariantMap = BTreeMap<String, Variant>;

/// A dynamically typed value.
///
/// See the [module documentation](super) for the conversion rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Variant {
    #[default]
    Empty,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Array(VariantArray),
    Map(VariantMap),
}

impl Variant {
    /// Returns the tag of the stored value.
    pub const fn kind(&self) -> VariantKind {
        match self {
            Self::Empty => VariantKind::Empty,
            Self::Bool(_) => VariantKind::Bool,
            Self::I8(_) => VariantKind::I8,
            Self::I16(_) => VariantKind::I16,
            Self::I32(_) => VariantKind::I32,
            Self::I64(_) => VariantKind::I64,
            Self::U8(_) => VariantKind::U8,
            Self::U16(_) => VariantKind::U16,
            Self::U32(_) => VariantKind::U32,
            Self::U64(_) => VariantKind::U64,
            Self::F32(_) => VariantKind::F32,
            Self::F64(_) => VariantKind::F64,
            Self::String(_) => VariantKind::String,
            Self::Array(_) => VariantKind::Array,
            Self::Map(_) => VariantKind::Map,
        }
    }

    /// Creates an empty array variant.
    #[inline]
    pub const fn array() -> Self {
        Self::Array(Vec::new())
    }

    /// Creates an empty map variant.
    #[inline]
    pub const fn map() -> Self {
        Self::Map(BTreeMap::new())
    }

    /// Creates an empty array variant able to hold `capacity` elements.
    #[inline]
    pub fn array_with_capacity(capacity: usize) -> Self {
        Self::Array(Vec::with_capacity(capacity))
    }

    /// Appends an element to an array variant.
    ///
    /// An empty variant becomes an array first.
    ///
    /// # Panics
    ///
    /// Panics if the variant holds anything else.
    pub fn push(&mut self, value: impl Into<Variant>) {
        if self.is_empty() {
            *self = Self::array();
        }
        match self {
            Self::Array(array) => array.push(value.into()),
            other => panic!("cannot push onto a variant of kind {}", other.kind()),
        }
    }

    /// Inserts an entry into a map variant, returning the replaced value.
    ///
    /// An empty variant becomes a map first.
    ///
    /// # Panics
    ///
    /// Panics if the variant holds anything else.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Variant>) -> Option<Variant> {
        if self.is_empty() {
            *self = Self::map();
        }
        match self {
            Self::Map(map) => map.insert(key.into(), value.into()),
            other => panic!("cannot insert into a variant of kind {}", other.kind()),
        }
    }

    /// Returns the entry stored under `key` if a map is stored.
    pub fn get(&self, key: &str) -> Option<&Variant> {
        self.as_map()?.get(key)
    }

    /// Returns `true` if no value is stored.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the stored value is exactly of type `T`.
    #[inline]
    pub fn has_type<T: VariantType>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Returns `true` if [`value::<T>`](Self::value) would succeed.
    #[inline]
    pub fn can_convert<T: VariantType>(&self) -> bool {
        self.has_type::<T>() || T::convert(self).is_some()
    }

    /// Returns the stored value as `T`, converting if needed.
    ///
    /// Returns `None` when no conversion applies.
    #[inline]
    pub fn value<T: VariantType>(&self) -> Option<T> {
        T::convert(self)
    }

    /// Returns the string slice if a string is stored.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array if an array is stored.
    pub fn as_array(&self) -> Option<&VariantArray> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the array mutably if an array is stored.
    pub fn as_array_mut(&mut self) -> Option<&mut VariantArray> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the map if a map is stored.
    pub fn as_map(&self) -> Option<&VariantMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the map mutably if a map is stored.
    pub fn as_map_mut(&mut self) -> Option<&mut VariantMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// From impls

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Variant {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    VariantArray => Array,
    VariantMap => Map,
}

impl From<&str> for Variant {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<()> for Variant {
    #[inline]
    fn from((): ()) -> Self {
        Self::Empty
    }
}

impl FromIterator<Variant> for Variant {
    fn from_iter<I: IntoIterator<Item = Variant>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Variant)> for Variant {
    fn from_iter<I: IntoIterator<Item = (K, Variant)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{Variant, VariantMap};
    use crate::variant::VariantKind;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn kinds() {
        assert_eq!(Variant::default().kind(), VariantKind::Empty);
        assert_eq!(Variant::from("a").kind(), VariantKind::String);
        assert_eq!(Variant::from(1_u64).kind(), VariantKind::U64);
        assert_eq!(Variant::array().kind(), VariantKind::Array);
        assert_eq!(Variant::map().kind(), VariantKind::Map);
    }

    #[test]
    fn collect() {
        let array: Variant = [1, 2].into_iter().map(Variant::from).collect();
        assert_eq!(array, Variant::Array(vec![Variant::I32(1), Variant::I32(2)]));

        let map: Variant = [("a", Variant::Bool(true))].into_iter().collect();
        let mut expected = VariantMap::new();
        expected.insert(String::from("a"), Variant::Bool(true));
        assert_eq!(map, Variant::Map(expected));
    }

    #[test]
    fn accessors() {
        let mut v = Variant::array();
        v.as_array_mut().unwrap().push(Variant::from(1.5));
        assert_eq!(v.as_array().map(|a| a.len()), Some(1));
        assert!(v.as_map().is_none());
        assert!(v.as_str().is_none());
        assert!(Variant::Empty.is_empty());
    }

    #[test]
    fn push_and_insert() {
        let mut nested = Variant::Empty;
        nested.push(1);
        nested.push(Variant::array());
        nested.push("x");
        assert_eq!(
            nested,
            Variant::Array(vec![Variant::I32(1), Variant::array(), Variant::from("x")])
        );

        let mut map = Variant::Empty;
        assert_eq!(map.insert("a", true), None);
        assert_eq!(map.insert("a", false), Some(Variant::Bool(true)));
        assert_eq!(map.get("a"), Some(&Variant::Bool(false)));
        assert_eq!(map.get("b"), None);
    }

    #[test]
    #[should_panic(expected = "cannot push")]
    fn push_onto_scalar() {
        Variant::I8(1).push(2);
    }
}
