//! Runtime lookup of value types by [`TypeId`] or name.
//!
//! A [`PropertyTypeRegistry`] stores one [`PropertyTypeInfo`] per value type.
//! Each entry can build a default-valued property of its type, which lets a
//! property tree be rebuilt from type names stored alongside serialized data.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::any::TypeId;
use core::fmt;

use zeug_utils::TypeIdMap;
use zeug_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::property::ValueProperty;
use crate::selector::PropertyType;
use crate::value::{Color, FilePath};
use crate::visitor::PropertyKind;

// -----------------------------------------------------------------------------
// PropertyTypeInfo

/// Registration data of one value type.
#[derive(Clone)]
pub struct PropertyTypeInfo {
    type_id: TypeId,
    type_name: Cow<'static, str>,
    kind: PropertyKind,
    create: fn(String) -> Box<dyn ValueProperty>,
}

fn create_default<T: PropertyType + Default>(name: String) -> Box<dyn ValueProperty> {
    Box::new(T::make_property(name, T::default()))
}

impl PropertyTypeInfo {
    /// Builds the entry of `T`.
    pub fn of<T: PropertyType + Default>() -> Self {
        let probe = T::make_property(String::new(), T::default());
        Self {
            type_id: TypeId::of::<T>(),
            type_name: probe.value_type_name(),
            kind: probe.kind(),
            create: create_default::<T>,
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The name reported by [`ValueProperty::value_type_name`].
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Creates a property named `name` holding the default value.
    #[inline]
    pub fn create(&self, name: impl Into<String>) -> Box<dyn ValueProperty> {
        (self.create)(name.into())
    }
}

impl fmt::Debug for PropertyTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyTypeInfo")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// PropertyTypeRegistry

/// A registry of value types.
///
/// # Examples
///
/// ```
/// use zeug_reflect::property::{AbstractProperty, ValueProperty};
/// use zeug_reflect::registry::PropertyTypeRegistry;
/// use zeug_reflect::visitor::PropertyKind;
///
/// let registry = PropertyTypeRegistry::new();
///
/// let info = registry.get_with_name("color").unwrap();
/// assert_eq!(info.kind(), PropertyKind::Color);
///
/// let mut tint = registry.create("color", "tint").unwrap();
/// tint.from_string("#FF8000").unwrap();
/// assert_eq!(tint.name(), "tint");
/// assert_eq!(tint.to_string(), "#FF8000FF");
/// ```
pub struct PropertyTypeRegistry {
    types: TypeIdMap<PropertyTypeInfo>,
    names: HashMap<Cow<'static, str>, TypeId>,
    ambiguous_names: HashSet<Cow<'static, str>>,
}

impl Default for PropertyTypeRegistry {
    /// See [`PropertyTypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyTypeRegistry {
    /// Creates a registry without any type.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            types: TypeIdMap::new(),
            names: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry holding the built-in value types.
    ///
    /// - `bool`, `String`, [`Color`], [`FilePath`]
    /// - `i8 - i64`, `u8 - u64`, `f32`, `f64`
    /// - `[T; 2]`, `[T; 3]` and `[T; 4]` for `bool`, `i32`, `u32`, `f32`
    ///   and `f64`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry.register::<Color>();
        registry.register::<FilePath>();

        macro_rules! register_arrays {
            ($($ty:ty),*) => {
                $(
                    registry.register::<[$ty; 2]>();
                    registry.register::<[$ty; 3]>();
                    registry.register::<[$ty; 4]>();
                )*
            };
        }
        register_arrays!(bool, i32, u32, f32, f64);

        registry
    }

    /// Registers `T`.
    ///
    /// Returns `false`, and changes nothing, if `T` is already registered.
    pub fn register<T: PropertyType + Default>(&mut self) -> bool {
        self.register_info(PropertyTypeInfo::of::<T>())
    }

    /// Registers a prepared entry.
    ///
    /// A name shared by two types becomes ambiguous and is dropped from the
    /// name index; both types stay reachable through [`get`](Self::get).
    pub fn register_info(&mut self, info: PropertyTypeInfo) -> bool {
        let Self {
            types,
            names,
            ambiguous_names,
        } = self;

        types.try_insert(info.type_id, || {
            let name = info.type_name.clone();
            if !ambiguous_names.contains(name.as_ref()) {
                if names.remove(name.as_ref()).is_some() {
                    log::warn!("value type name `{name}` is ambiguous");
                    ambiguous_names.insert(name);
                } else {
                    names.insert(name, info.type_id);
                }
            }
            info
        })
    }

    /// Returns `true` if the type is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.types.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&PropertyTypeInfo> {
        self.types.get(&type_id)
    }

    /// Looks an entry up by [`PropertyTypeInfo::type_name`].
    ///
    /// Ambiguous names resolve to `None`.
    pub fn get_with_name(&self, type_name: &str) -> Option<&PropertyTypeInfo> {
        self.names.get(type_name).and_then(|id| self.types.get(id))
    }

    /// Returns `true` if `type_name` is shared by several registered types.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Creates a default-valued property of the type named `type_name`.
    pub fn create(
        &self,
        type_name: &str,
        property_name: impl Into<String>,
    ) -> Option<Box<dyn ValueProperty>> {
        let info = self.get_with_name(type_name);
        if info.is_none() {
            log::debug!("no registered value type named `{type_name}`");
        }
        Some(info?.create(property_name))
    }

    /// Number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Iterates over all entries in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &PropertyTypeInfo> {
        self.types.values()
    }
}

impl fmt::Debug for PropertyTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.types.values()).finish()
    }
}
