//! Value types a property can hold, and their codecs.
//!
//! [`PropertyValue`] tells a property how to render its value as a string,
//! parse it back, and move it through a [`Variant`]. It is implemented for
//! `bool`, every fixed-width integer, `f32`, `f64`, `String`, [`Color`],
//! [`FilePath`], and for enums through [`impl_enum_value!`](crate::impl_enum_value).
//!
//! [`ArrayElement`] marks the element types of vector-like properties
//! (`[T; N]`). Their string form is a parenthesised tuple:
//!
//! ```text
//! (1, 2, 3)      integral elements:     (-|+)?digits
//! (0.5, -1, 2.)  non-integral elements: (-|+)?digits(.digits)?
//! (true, false)  boolean elements
//! ```
//!
//! Leading and trailing whitespace and whitespace around `,` are allowed.
//! Anything else, including a wrong element count, is rejected.

// -----------------------------------------------------------------------------
// Modules

mod color;
mod enums;
mod file_path;
mod format;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use color::Color;
pub use enums::EnumValue;
pub use file_path::FilePath;
pub use format::{parse_tuple, write_tuple};

use alloc::string::String;
use core::fmt::Debug;

use crate::property::{ArrayValueProperty, TypedProperty};
use crate::variant::Variant;
use crate::visitor::{PropertyMut, PropertyRef};

// -----------------------------------------------------------------------------
// PropertyValue

/// A value type with string and variant codecs.
///
/// Implementations must round-trip: `from_property_string(&v.to_property_string())`
/// yields a value equal to `v`.
pub trait PropertyValue: Clone + PartialEq + Debug + 'static {
    /// A short, stable name for the type, used by the registry.
    const TYPE_NAME: &'static str;

    /// Renders the value.
    fn to_property_string(&self) -> String;

    /// Parses a value, returning `None` on malformed input.
    fn from_property_string(s: &str) -> Option<Self>;

    /// Converts the value into its interchange form.
    fn to_variant(&self) -> Variant;

    /// Reads a value from a variant.
    ///
    /// The exact stored type wins, then any convertible type, then a string
    /// parsed with [`from_property_string`](Self::from_property_string).
    fn from_variant(variant: &Variant) -> Option<Self>;

    /// Tags a property holding this type for visitor dispatch.
    ///
    /// Types without a dedicated visitor method keep the default.
    fn dispatch_ref<'a>(property: &'a dyn TypedProperty<Self>) -> PropertyRef<'a> {
        PropertyRef::Other(property)
    }

    /// Mutable counterpart of [`dispatch_ref`](Self::dispatch_ref).
    fn dispatch_mut<'a>(property: &'a mut dyn TypedProperty<Self>) -> PropertyMut<'a> {
        PropertyMut::Other(property)
    }
}

// -----------------------------------------------------------------------------
// ArrayElement

/// An element type of vector-like `[T; N]` properties.
///
/// Float elements accept plain decimal literals only. Arrays holding `inf`
/// or `NaN` render to strings that [`parse_tuple`] rejects, so they survive
/// a [`Variant`] round trip but not a string one.
pub trait ArrayElement: PropertyValue + Copy + Default {
    /// Parses one tuple element, following the literal grammar of the type.
    fn parse_literal(s: &str) -> Option<Self>;

    /// Tags an array property of this element type for visitor dispatch.
    fn dispatch_array_ref<'a>(property: &'a dyn ArrayValueProperty<Self>) -> PropertyRef<'a> {
        PropertyRef::Other(property)
    }

    /// Mutable counterpart of [`dispatch_array_ref`](Self::dispatch_array_ref).
    fn dispatch_array_mut<'a>(
        property: &'a mut dyn ArrayValueProperty<Self>,
    ) -> PropertyMut<'a> {
        PropertyMut::Other(property)
    }
}
