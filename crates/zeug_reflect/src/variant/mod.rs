//! The interchange value used for options and serialization.
//!
//! [`Variant`] is a closed tagged union: empty, booleans, every fixed-width
//! integer, both float widths, strings, arrays of variants and string-keyed
//! maps of variants. Values move in and out through [`VariantType`], which
//! also governs which conversions are allowed.
//!
//! ## Conversions
//!
//! [`Variant::value`] accepts more than the exact stored type:
//!
//! - integer to integer succeeds when the value fits the target range.
//! - integer to float and float to integer use `as` semantics; non-finite
//!   floats never convert to integers.
//! - booleans convert to numbers as `0`/`1`, numbers convert to booleans as `!= 0`.
//! - strings convert to numbers by parsing, and to booleans from `"true"`/`"false"`.
//! - every scalar converts to a string through its display form.
//!
//! Whenever [`Variant::has_type`] holds, [`Variant::can_convert`] holds too.
//!
//! # Examples
//!
//! ```
//! use zeug_reflect::variant::{Variant, VariantKind};
//!
//! let v = Variant::from(42_i32);
//! assert_eq!(v.kind(), VariantKind::I32);
//! assert!(v.has_type::<i32>());
//!
//! assert_eq!(v.value::<String>().as_deref(), Some("42"));
//! assert_eq!(v.value::<u8>(), Some(42));
//! assert_eq!(Variant::from(300).value::<u8>(), None);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod kind;
mod serde;
mod variant;

// -----------------------------------------------------------------------------
// Exports

pub use convert::VariantType;
pub use kind::VariantKind;
pub use variant::{Variant, VariantArray, VariantMap};
