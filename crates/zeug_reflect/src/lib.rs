//! Typed, introspectable properties.
//!
//! A property is a named value of a static type `T` whose storage is hidden
//! behind an [accessor]: an owned value, a getter/setter pair, or methods of a
//! shared object. Properties can be rendered to and parsed from strings,
//! converted to and from the [`Variant`](variant::Variant) interchange value,
//! and handed to a [`PropertyVisitor`](visitor::PropertyVisitor) which
//! recovers their concrete value type.
//!
//! ```
//! use zeug_reflect::property::{Property, ValueProperty};
//!
//! let mut width = Property::new("width", 5);
//! assert_eq!(width.to_string(), "5");
//!
//! width.from_string("7").unwrap();
//! assert_eq!(width.value(), 7);
//!
//! // Malformed input is rejected and leaves the value untouched.
//! assert!(width.from_string("seven").is_err());
//! assert_eq!(width.value(), 7);
//! ```
//!
//! ## Menu
//!
//! - [`accessor`]: read/write strategies, scalar and fixed-size array flavours.
//! - [`variant`]: the closed tagged interchange value, with serde support.
//! - [`value`]: per-type string and variant codecs, plus `Color`, `FilePath` and enums.
//! - [`property`]: `Property`, `ConstProperty`, `ArrayProperty` and the type-erased traits.
//! - [`selector`]: the compile-time mapping from a value type to its property type.
//! - [`visitor`]: tag-based dispatch recovering the concrete property type.
//! - [`group`]: hierarchical collections of properties.
//! - [`registry`]: runtime lookup of property types by name.
//!
//! [accessor]: accessor
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    zeug_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
    }
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod accessor;
pub mod group;
pub mod property;
pub mod registry;
pub mod selector;
pub mod value;
pub mod variant;
pub mod visitor;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use group::PropertyGroup;
pub use property::{ConstProperty, Property, PropertyError};
pub use registry::PropertyTypeRegistry;
pub use variant::Variant;

#[doc(hidden)]
pub mod __private {
    pub use alloc::string::String;
}
