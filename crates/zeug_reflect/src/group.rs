//! Hierarchical collections of properties.
//!
//! A [`PropertyGroup`] owns an ordered list of named children, each either a
//! value property or a nested group. Children are addressed by `/`-separated
//! paths relative to the group:
//!
//! ```
//! use zeug_reflect::PropertyGroup;
//! use zeug_reflect::property::ValueProperty;
//!
//! let mut scene = PropertyGroup::new("scene");
//! scene.add_value("title", String::from("untitled")).unwrap();
//!
//! let camera = scene.add_group("camera").unwrap();
//! camera.add_value("fov", 60.0_f32).unwrap();
//! camera.add_value("position", [0.0_f64, 1.0, 5.0]).unwrap();
//!
//! let fov = scene.value_property_mut("camera/fov").unwrap();
//! fov.from_string("75").unwrap();
//!
//! assert_eq!(scene.value_property("camera/fov").unwrap().to_string(), "75");
//! assert!(scene.property("camera/zoom").is_none());
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use zeug_utils::hash::HashMap;

use crate::property::{AbstractProperty, PropertyError, PropertyMeta, ValueProperty};
use crate::selector::{PropertyOf, PropertyType};
use crate::variant::{Variant, VariantMap};
use crate::visitor::PropertyVisitor;

/// The separator of group paths.
pub const PATH_SEPARATOR: char = '/';

// -----------------------------------------------------------------------------
// PropertyGroup

/// A named, ordered collection of properties and nested groups.
///
/// Child names are unique within a group.
pub struct PropertyGroup {
    meta: PropertyMeta,
    children: Vec<Box<dyn AbstractProperty>>,
    index: HashMap<String, usize>,
}

impl PropertyGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: PropertyMeta::new(name),
            children: Vec::new(),
            index: HashMap::default(),
        }
    }

    /// Returns the number of direct children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child and returns it.
    ///
    /// Fails with [`PropertyError::DuplicateName`] if a direct child already
    /// has the same name.
    pub fn add_property<P: AbstractProperty>(&mut self, property: P) -> Result<&mut P, PropertyError> {
        let child = self.add_boxed(Box::new(property))?;
        Ok(child
            .downcast_mut::<P>()
            .expect("a child keeps the type it was added with"))
    }

    /// Appends a type-erased child, such as one built by the
    /// [`PropertyTypeRegistry`](crate::registry::PropertyTypeRegistry).
    pub fn add_boxed(
        &mut self,
        property: Box<dyn AbstractProperty>,
    ) -> Result<&mut dyn AbstractProperty, PropertyError> {
        let name = property.name();
        if self.index.contains_key(name) {
            log::warn!("group `{}` already has a child named `{name}`", self.meta.name());
            return Err(PropertyError::DuplicateName { name: name.into() });
        }

        self.index.insert(name.into(), self.children.len());
        self.children.push(property);

        let child = self.children.last_mut().expect("a child was just pushed");
        Ok(&mut **child)
    }

    /// Appends a value property built by the [`PropertyType`] of `T`.
    pub fn add_value<T: PropertyType>(
        &mut self,
        name: impl Into<String>,
        value: T,
    ) -> Result<&mut PropertyOf<T>, PropertyError> {
        self.add_property(T::make_property(name.into(), value))
    }

    /// Appends an empty nested group.
    pub fn add_group(&mut self, name: impl Into<String>) -> Result<&mut PropertyGroup, PropertyError> {
        self.add_property(PropertyGroup::new(name))
    }

    /// Removes the direct child named `name`.
    pub fn take_property(&mut self, name: &str) -> Option<Box<dyn AbstractProperty>> {
        let position = self.index.remove(name)?;
        let child = self.children.remove(position);
        for index in self.index.values_mut() {
            if *index > position {
                *index -= 1;
            }
        }
        Some(child)
    }

    fn child(&self, name: &str) -> Option<&dyn AbstractProperty> {
        let index = *self.index.get(name)?;
        Some(&*self.children[index])
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut dyn AbstractProperty> {
        let index = *self.index.get(name)?;
        Some(&mut *self.children[index])
    }

    /// Looks a node up by path.
    pub fn property(&self, path: &str) -> Option<&dyn AbstractProperty> {
        match path.split_once(PATH_SEPARATOR) {
            None => self.child(path),
            Some((head, rest)) => self.child(head)?.as_group()?.property(rest),
        }
    }

    pub fn property_mut(&mut self, path: &str) -> Option<&mut dyn AbstractProperty> {
        match path.split_once(PATH_SEPARATOR) {
            None => self.child_mut(path),
            Some((head, rest)) => self.child_mut(head)?.as_group_mut()?.property_mut(rest),
        }
    }

    /// Returns `true` if a node exists at `path`.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.property(path).is_some()
    }

    /// Looks a value property up by path.
    pub fn value_property(&self, path: &str) -> Option<&dyn ValueProperty> {
        self.property(path)?.as_value()
    }

    pub fn value_property_mut(&mut self, path: &str) -> Option<&mut dyn ValueProperty> {
        self.property_mut(path)?.as_value_mut()
    }

    /// Parses `input` into the value property at `path`.
    ///
    /// Fails with [`PropertyError::NotFound`] if no value property lives
    /// there.
    pub fn set_string(&mut self, path: &str, input: &str) -> Result<(), PropertyError> {
        match self.value_property_mut(path) {
            Some(property) => property.from_string(input),
            None => Err(PropertyError::NotFound { path: path.into() }),
        }
    }

    /// Looks a nested group up by path.
    pub fn group(&self, path: &str) -> Option<&PropertyGroup> {
        self.property(path)?.as_group()
    }

    pub fn group_mut(&mut self, path: &str) -> Option<&mut PropertyGroup> {
        self.property_mut(path)?.as_group_mut()
    }

    /// Looks a node of concrete type `P` up by path.
    pub fn get<P: AbstractProperty>(&self, path: &str) -> Option<&P> {
        self.property(path)?.downcast_ref::<P>()
    }

    pub fn get_mut<P: AbstractProperty>(&mut self, path: &str) -> Option<&mut P> {
        self.property_mut(path)?.downcast_mut::<P>()
    }

    /// Iterates over direct children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn AbstractProperty> {
        self.children.iter().map(|child| &**child)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut dyn AbstractProperty> {
        self.children.iter_mut().map(|child| &mut **child)
    }

    /// Calls `f` with the path and the property of every value, depth-first.
    ///
    /// # Examples
    ///
    /// ```
    /// use zeug_reflect::PropertyGroup;
    /// use zeug_reflect::property::ValueProperty;
    ///
    /// let mut root = PropertyGroup::new("root");
    /// root.add_value("a", 1).unwrap();
    /// root.add_group("g").unwrap().add_value("b", true).unwrap();
    ///
    /// let mut seen = Vec::new();
    /// root.for_each_value(|path, p| seen.push(format!("{path}={}", p.to_string())));
    /// assert_eq!(seen, ["a=1", "g/b=true"]);
    /// ```
    pub fn for_each_value(&self, mut f: impl FnMut(&str, &dyn ValueProperty)) {
        let mut path = String::new();
        self.walk_values(&mut path, &mut f);
    }

    fn walk_values(&self, path: &mut String, f: &mut dyn FnMut(&str, &dyn ValueProperty)) {
        for child in &self.children {
            let prefix_len = path.len();
            if prefix_len > 0 {
                path.push(PATH_SEPARATOR);
            }
            path.push_str(child.name());

            if let Some(value) = child.as_value() {
                f(path.as_str(), value);
            } else if let Some(group) = child.as_group() {
                group.walk_values(path, f);
            }

            path.truncate(prefix_len);
        }
    }

    /// Visits every descendant depth-first.
    ///
    /// Value properties dispatch to their visitor method. Nested groups are
    /// passed to [`PropertyVisitor::visit_group`] before their children.
    pub fn accept(&mut self, visitor: &mut dyn PropertyVisitor) {
        for child in &mut self.children {
            if let Some(group) = child.as_group_mut() {
                visitor.visit_group(group);
                group.accept(visitor);
            } else if let Some(value) = child.as_value_mut() {
                value.accept(visitor);
            }
        }
    }

    /// Collects every value into a map keyed by child name.
    ///
    /// Nested groups become nested maps.
    pub fn to_variant(&self) -> Variant {
        let mut map = VariantMap::new();
        for child in &self.children {
            let value = match (child.as_value(), child.as_group()) {
                (Some(value), _) => value.to_variant(),
                (None, Some(group)) => group.to_variant(),
                (None, None) => continue,
            };
            map.insert(child.name().into(), value);
        }
        Variant::Map(map)
    }

    /// Applies the entries of a map produced by [`to_variant`](Self::to_variant).
    ///
    /// Unknown keys and read-only properties are skipped. Every entry is
    /// attempted; the first error is returned.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_variant(&mut self, variant: &Variant) -> Result<(), PropertyError> {
        let Some(map) = variant.as_map() else {
            return Err(PropertyError::Conversion {
                type_name: "group".into(),
                kind: variant.kind(),
            });
        };

        let mut result = Ok(());
        for (name, entry) in map {
            let Some(child) = self.child_mut(name) else {
                log::debug!("group `{}` has no child `{name}`, skipped", self.meta.name());
                continue;
            };

            let outcome = if let Some(group) = child.as_group_mut() {
                group.from_variant(entry)
            } else if let Some(value) = child.as_value_mut() {
                if value.is_read_only() {
                    continue;
                }
                value.from_variant(entry)
            } else {
                continue;
            };

            if result.is_ok() {
                result = outcome;
            }
        }
        result
    }
}

impl AbstractProperty for PropertyGroup {
    #[inline]
    fn meta(&self) -> &PropertyMeta {
        &self.meta
    }

    #[inline]
    fn meta_mut(&mut self) -> &mut PropertyMeta {
        &mut self.meta
    }

    #[inline]
    fn as_group(&self) -> Option<&PropertyGroup> {
        Some(self)
    }

    #[inline]
    fn as_group_mut(&mut self) -> Option<&mut PropertyGroup> {
        Some(self)
    }
}

impl fmt::Debug for PropertyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyGroup")
            .field("name", &self.meta.name())
            .field(
                "children",
                &self.children.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
