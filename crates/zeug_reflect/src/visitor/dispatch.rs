use alloc::string::String;

use super::{PropertyKind, PropertyVisitor};
use crate::property::{ArrayValueProperty, PropertyError, TypedProperty, ValueProperty};
use crate::value::{Color, FilePath};

// -----------------------------------------------------------------------------
// PropertyRef

/// A shared borrow of a value property, tagged with its value type.
///
/// Matching on it recovers the concrete property interface without knowing
/// the value type up front.
///
/// # Examples
///
/// ```
/// use zeug_reflect::property::{Property, TypedProperty, ValueProperty};
/// use zeug_reflect::visitor::PropertyRef;
///
/// let p = Property::new("ratio", 0.25_f64);
/// let erased: &dyn ValueProperty = &p;
///
/// match erased.property_ref() {
///     PropertyRef::Double(p) => assert_eq!(p.value(), 0.25),
///     other => panic!("unexpected {}", other.kind()),
/// }
/// ```
#[derive(Clone, Copy)]
pub enum PropertyRef<'a> {
    Bool(&'a dyn TypedProperty<bool>),
    Int(&'a dyn TypedProperty<i32>),
    Double(&'a dyn TypedProperty<f64>),
    String(&'a dyn TypedProperty<String>),
    Color(&'a dyn TypedProperty<Color>),
    FilePath(&'a dyn TypedProperty<FilePath>),
    Enum(EnumRef<'a>),
    BoolArray(&'a dyn ArrayValueProperty<bool>),
    IntArray(&'a dyn ArrayValueProperty<i32>),
    DoubleArray(&'a dyn ArrayValueProperty<f64>),
    Other(&'a dyn ValueProperty),
}

impl<'a> PropertyRef<'a> {
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::Bool(_) => PropertyKind::Bool,
            Self::Int(_) => PropertyKind::Int,
            Self::Double(_) => PropertyKind::Double,
            Self::String(_) => PropertyKind::String,
            Self::Color(_) => PropertyKind::Color,
            Self::FilePath(_) => PropertyKind::FilePath,
            Self::Enum(_) => PropertyKind::Enum,
            Self::BoolArray(_) => PropertyKind::BoolArray,
            Self::IntArray(_) => PropertyKind::IntArray,
            Self::DoubleArray(_) => PropertyKind::DoubleArray,
            Self::Other(_) => PropertyKind::Other,
        }
    }

    /// Forgets the tag.
    pub fn as_value(self) -> &'a dyn ValueProperty {
        match self {
            Self::Bool(p) => p,
            Self::Int(p) => p,
            Self::Double(p) => p,
            Self::String(p) => p,
            Self::Color(p) => p,
            Self::FilePath(p) => p,
            Self::Enum(p) => p.property(),
            Self::BoolArray(p) => p,
            Self::IntArray(p) => p,
            Self::DoubleArray(p) => p,
            Self::Other(p) => p,
        }
    }
}

// -----------------------------------------------------------------------------
// PropertyMut

/// A mutable borrow of a value property, tagged with its value type.
pub enum PropertyMut<'a> {
    Bool(&'a mut dyn TypedProperty<bool>),
    Int(&'a mut dyn TypedProperty<i32>),
    Double(&'a mut dyn TypedProperty<f64>),
    String(&'a mut dyn TypedProperty<String>),
    Color(&'a mut dyn TypedProperty<Color>),
    FilePath(&'a mut dyn TypedProperty<FilePath>),
    Enum(EnumMut<'a>),
    BoolArray(&'a mut dyn ArrayValueProperty<bool>),
    IntArray(&'a mut dyn ArrayValueProperty<i32>),
    DoubleArray(&'a mut dyn ArrayValueProperty<f64>),
    Other(&'a mut dyn ValueProperty),
}

impl<'a> PropertyMut<'a> {
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::Bool(_) => PropertyKind::Bool,
            Self::Int(_) => PropertyKind::Int,
            Self::Double(_) => PropertyKind::Double,
            Self::String(_) => PropertyKind::String,
            Self::Color(_) => PropertyKind::Color,
            Self::FilePath(_) => PropertyKind::FilePath,
            Self::Enum(_) => PropertyKind::Enum,
            Self::BoolArray(_) => PropertyKind::BoolArray,
            Self::IntArray(_) => PropertyKind::IntArray,
            Self::DoubleArray(_) => PropertyKind::DoubleArray,
            Self::Other(_) => PropertyKind::Other,
        }
    }

    /// Forgets the tag.
    pub fn into_value(self) -> &'a mut dyn ValueProperty {
        match self {
            Self::Bool(p) => p,
            Self::Int(p) => p,
            Self::Double(p) => p,
            Self::String(p) => p,
            Self::Color(p) => p,
            Self::FilePath(p) => p,
            Self::Enum(p) => p.into_property(),
            Self::BoolArray(p) => p,
            Self::IntArray(p) => p,
            Self::DoubleArray(p) => p,
            Self::Other(p) => p,
        }
    }

    /// Calls the visitor method matching the tag, exactly once.
    pub fn accept(self, visitor: &mut dyn PropertyVisitor) {
        log::trace!("visiting a `{}` property", self.kind());
        match self {
            Self::Bool(p) => visitor.visit_bool(p),
            Self::Int(p) => visitor.visit_int(p),
            Self::Double(p) => visitor.visit_double(p),
            Self::String(p) => visitor.visit_string(p),
            Self::Color(p) => visitor.visit_color(p),
            Self::FilePath(p) => visitor.visit_file_path(p),
            Self::Enum(p) => visitor.visit_enum(p),
            Self::BoolArray(p) => visitor.visit_bool_array(p),
            Self::IntArray(p) => visitor.visit_int_array(p),
            Self::DoubleArray(p) => visitor.visit_double_array(p),
            Self::Other(p) => visitor.visit_other(p),
        }
    }
}

// -----------------------------------------------------------------------------
// Enum views

/// Shared view of an enum-valued property: its choices and the selected one.
#[derive(Clone, Copy)]
pub struct EnumRef<'a> {
    property: &'a dyn ValueProperty,
    choices: &'static [&'static str],
}

impl<'a> EnumRef<'a> {
    #[inline]
    pub fn new(property: &'a dyn ValueProperty, choices: &'static [&'static str]) -> Self {
        Self { property, choices }
    }

    #[inline]
    pub fn property(&self) -> &'a dyn ValueProperty {
        self.property
    }

    /// The names of all values, in declaration order.
    #[inline]
    pub fn choices(&self) -> &'static [&'static str] {
        self.choices
    }

    /// Index of the current value in [`choices`](Self::choices).
    pub fn selected(&self) -> Option<usize> {
        let current = self.property.to_string();
        self.choices.iter().position(|name| *name == current)
    }
}

/// Mutable view of an enum-valued property.
pub struct EnumMut<'a> {
    property: &'a mut dyn ValueProperty,
    choices: &'static [&'static str],
}

impl<'a> EnumMut<'a> {
    #[inline]
    pub fn new(property: &'a mut dyn ValueProperty, choices: &'static [&'static str]) -> Self {
        Self { property, choices }
    }

    #[inline]
    pub fn property(&self) -> &dyn ValueProperty {
        &*self.property
    }

    #[inline]
    pub fn property_mut(&mut self) -> &mut dyn ValueProperty {
        &mut *self.property
    }

    #[inline]
    pub fn into_property(self) -> &'a mut dyn ValueProperty {
        self.property
    }

    #[inline]
    pub fn choices(&self) -> &'static [&'static str] {
        self.choices
    }

    pub fn selected(&self) -> Option<usize> {
        let current = self.property.to_string();
        self.choices.iter().position(|name| *name == current)
    }

    /// Selects the value at `index` in [`choices`](Self::choices).
    pub fn select(&mut self, index: usize) -> Result<(), PropertyError> {
        let name = self
            .choices
            .get(index)
            .ok_or(PropertyError::IndexOutOfRange {
                index,
                len: self.choices.len(),
            })?;
        self.property.from_string(name)
    }
}
