//! Provide read/write strategies for typed values.
//!
//! An accessor hides *where* a value lives. A property owns exactly one
//! accessor and never touches the storage directly.
//!
//! ## Menu
//!
//! Scalar accessors:
//!
//! - [`ReadAccessor`]: `get_value` only. No mutator is reachable through it.
//! - [`Accessor`]: adds `set_value`.
//! - [`AccessorValue`] / [`ConstAccessorValue`]: own the value.
//! - [`AccessorGetSet`] / [`ConstAccessorGetSet`]: forward to callables, either
//!   closures or methods of a shared `Rc<RefCell<O>>` object.
//!
//! Array accessors, with a compile-time element count `N`:
//!
//! - [`ArrayReadAccessor`] / [`ArrayAccessor`]: per-index access plus whole-array
//!   `get_array` / `set_array`, which run the per-index operations in ascending
//!   index order.
//! - [`ArrayAccessorValue`] / [`ConstArrayAccessorValue`]: own a `[T; N]`.
//! - [`ArrayAccessorGetSet`] / [`ConstArrayAccessorGetSet`]: forward to per-index callables.
//!
//! A read-only accessor cannot be built from a setter: none of the `Const*`
//! constructors accept one, so the mistake is a type error.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use zeug_reflect::accessor::{Accessor, AccessorGetSet, ReadAccessor};
//!
//! struct Window { width: u32 }
//!
//! impl Window {
//!     fn width(&self) -> u32 { self.width }
//!     fn set_width(&mut self, width: u32) { self.width = width; }
//! }
//!
//! let window = Rc::new(RefCell::new(Window { width: 640 }));
//! let mut accessor = AccessorGetSet::from_methods(&window, Window::width, Window::set_width);
//!
//! accessor.set_value(800);
//! assert_eq!(accessor.get_value(), 800);
//! assert_eq!(window.borrow().width, 800);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod array;
mod get_set;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use array::{ArrayAccessor, ArrayReadAccessor};
pub use array::{ArrayAccessorGetSet, ConstArrayAccessorGetSet};
pub use array::{ArrayAccessorValue, ConstArrayAccessorValue};
pub use get_set::{AccessorGetSet, ConstAccessorGetSet};
pub use value::{AccessorValue, ConstAccessorValue};

// -----------------------------------------------------------------------------
// Traits

/// Read access to a value of type `T`.
pub trait ReadAccessor<T> {
    /// Returns the current value.
    fn get_value(&self) -> T;
}

/// Read and write access to a value of type `T`.
pub trait Accessor<T>: ReadAccessor<T> {
    /// Replaces the current value.
    fn set_value(&mut self, value: T);
}
