//! Named, typed, introspectable values.
//!
//! ## Layers
//!
//! - [`AbstractProperty`]: any node in a property tree, value or group. Carries
//!   the name and the consumer options.
//! - [`ValueProperty`]: a node holding a value whose type is erased. Renders and
//!   parses strings, converts variants, dispatches to visitors.
//! - [`TypedProperty<T>`]: the value type is known, `value` / `set_value` are typed.
//! - [`ArrayValueProperty<T>`]: checked per-element access on `[T; N]` values.
//!
//! ## Concrete types
//!
//! - [`Property<T>`] / [`ConstProperty<T>`]: scalar values behind an
//!   [`Accessor`](crate::accessor::Accessor) or a
//!   [`ReadAccessor`](crate::accessor::ReadAccessor).
//! - [`ArrayProperty<T, N>`] / [`ConstArrayProperty<T, N>`]: vector-like values
//!   behind an array accessor.
//!
//! Every constructor family is a named function: `new`, `with_default`,
//! `from_accessors`, `from_methods`, `from_ref_methods`, `from_mut_methods`,
//! `with_accessor`, and for read-only properties `from_getter`, `from_method`,
//! `from_ref_method`.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use zeug_reflect::property::{ConstProperty, Property, ValueProperty};
//!
//! struct Camera { fov: f32, id: u64 }
//!
//! impl Camera {
//!     fn fov(&self) -> f32 { self.fov }
//!     fn set_fov(&mut self, fov: f32) { self.fov = fov.clamp(10.0, 120.0); }
//!     fn id(&self) -> &u64 { &self.id }
//! }
//!
//! let camera = Rc::new(RefCell::new(Camera { fov: 60.0, id: 7 }));
//!
//! let mut fov = Property::from_methods("fov", &camera, Camera::fov, Camera::set_fov);
//! let id = ConstProperty::from_ref_method("id", &camera, Camera::id);
//!
//! fov.from_string("200").unwrap();
//! assert_eq!(camera.borrow().fov, 120.0);
//!
//! assert!(id.is_read_only());
//! assert_eq!(id.to_string(), "7");
//! assert!(id.value_type_id() == core::any::TypeId::of::<u64>());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod array_property;
mod error;
mod meta;
mod property;
mod traits;

// -----------------------------------------------------------------------------
// Exports

pub use array_property::{ArrayProperty, BaseArrayProperty, ConstArrayProperty};
pub use array_property::PropertyArrayAccessor;
pub use error::PropertyError;
pub use meta::PropertyMeta;
pub use property::{BaseProperty, ConstProperty, Property, PropertyAccessor};
pub use traits::{AbstractProperty, ArrayValueProperty, TypedProperty, ValueProperty};
