use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use super::{Accessor, ReadAccessor};

// -----------------------------------------------------------------------------
// AccessorGetSet

/// An accessor forwarding to a getter and a setter.
///
/// Bound objects are shared through `Rc<RefCell<O>>`; the accessor keeps the
/// object alive for as long as it exists. Calling `get_value` while the object
/// is mutably borrowed elsewhere panics, as `RefCell` does.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use zeug_reflect::accessor::{Accessor, AccessorGetSet, ReadAccessor};
///
/// let cell = Rc::new(Cell::new(1.0_f32));
/// let (get, set) = (cell.clone(), cell.clone());
///
/// let mut accessor = AccessorGetSet::new(move || get.get(), move |v| set.set(v));
/// accessor.set_value(0.5);
/// assert_eq!(cell.get(), 0.5);
/// assert_eq!(accessor.get_value(), 0.5);
/// ```
pub struct AccessorGetSet<T> {
    getter: Box<dyn Fn() -> T>,
    setter: Box<dyn FnMut(T)>,
}

impl<T: 'static> AccessorGetSet<T> {
    /// Creates an accessor from two closures.
    pub fn new(getter: impl Fn() -> T + 'static, setter: impl FnMut(T) + 'static) -> Self {
        Self {
            getter: Box::new(getter),
            setter: Box::new(setter),
        }
    }

    /// Binds a by-value getter and a by-value setter of `O`.
    pub fn from_methods<O: 'static>(
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O) -> T + 'static,
        setter: impl Fn(&mut O, T) + 'static,
    ) -> Self {
        let (get_obj, set_obj) = (object.clone(), object.clone());
        Self::new(
            move || getter(&get_obj.borrow()),
            move |value| setter(&mut set_obj.borrow_mut(), value),
        )
    }

    /// Binds a getter returning a reference and a setter taking a reference.
    ///
    /// The referenced value is cloned out on every read.
    pub fn from_ref_methods<O: 'static>(
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O) -> &T + 'static,
        setter: impl Fn(&mut O, &T) + 'static,
    ) -> Self
    where
        T: Clone,
    {
        let (get_obj, set_obj) = (object.clone(), object.clone());
        Self::new(
            move || getter(&get_obj.borrow()).clone(),
            move |value| setter(&mut set_obj.borrow_mut(), &value),
        )
    }

    /// Binds a getter that needs `&mut O`, such as a lazily computed value.
    pub fn from_mut_methods<O: 'static>(
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&mut O) -> T + 'static,
        setter: impl Fn(&mut O, T) + 'static,
    ) -> Self {
        let (get_obj, set_obj) = (object.clone(), object.clone());
        Self::new(
            move || getter(&mut get_obj.borrow_mut()),
            move |value| setter(&mut set_obj.borrow_mut(), value),
        )
    }
}

impl<T> ReadAccessor<T> for AccessorGetSet<T> {
    #[inline]
    fn get_value(&self) -> T {
        (self.getter)()
    }
}

impl<T> Accessor<T> for AccessorGetSet<T> {
    #[inline]
    fn set_value(&mut self, value: T) {
        (self.setter)(value);
    }
}

impl<T> fmt::Debug for AccessorGetSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorGetSet").finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// ConstAccessorGetSet

/// A read-only accessor forwarding to a getter.
pub struct ConstAccessorGetSet<T> {
    getter: Box<dyn Fn() -> T>,
}

impl<T: 'static> ConstAccessorGetSet<T> {
    /// Creates an accessor from a closure.
    pub fn new(getter: impl Fn() -> T + 'static) -> Self {
        Self {
            getter: Box::new(getter),
        }
    }

    /// Binds a by-value getter of `O`.
    pub fn from_method<O: 'static>(
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O) -> T + 'static,
    ) -> Self {
        let object = object.clone();
        Self::new(move || getter(&object.borrow()))
    }

    /// Binds a getter returning a reference, cloning on every read.
    pub fn from_ref_method<O: 'static>(
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O) -> &T + 'static,
    ) -> Self
    where
        T: Clone,
    {
        let object = object.clone();
        Self::new(move || getter(&object.borrow()).clone())
    }
}

impl<T> ReadAccessor<T> for ConstAccessorGetSet<T> {
    #[inline]
    fn get_value(&self) -> T {
        (self.getter)()
    }
}

impl<T> fmt::Debug for ConstAccessorGetSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstAccessorGetSet").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessorGetSet, ConstAccessorGetSet};
    use crate::accessor::{Accessor, ReadAccessor};
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use core::cell::RefCell;

    struct Node {
        name: String,
        hits: u32,
    }

    impl Node {
        fn name(&self) -> &String {
            &self.name
        }

        fn set_name(&mut self, name: &String) {
            self.name.clone_from(name);
        }

        fn hit(&mut self) -> u32 {
            self.hits += 1;
            self.hits
        }

        fn set_hits(&mut self, hits: u32) {
            self.hits = hits;
        }
    }

    fn node() -> Rc<RefCell<Node>> {
        Rc::new(RefCell::new(Node {
            name: "root".to_string(),
            hits: 0,
        }))
    }

    #[test]
    fn ref_methods() {
        let node = node();
        let mut accessor = AccessorGetSet::from_ref_methods(&node, Node::name, Node::set_name);
        assert_eq!(accessor.get_value(), "root");

        accessor.set_value("leaf".to_string());
        assert_eq!(node.borrow().name, "leaf");
    }

    #[test]
    fn mut_methods() {
        let node = node();
        let mut accessor = AccessorGetSet::from_mut_methods(&node, Node::hit, Node::set_hits);
        assert_eq!(accessor.get_value(), 1);
        assert_eq!(accessor.get_value(), 2);

        accessor.set_value(10);
        assert_eq!(accessor.get_value(), 11);
    }

    #[test]
    fn const_ref_method() {
        let node = node();
        let accessor = ConstAccessorGetSet::from_ref_method(&node, Node::name);
        node.borrow_mut().name.push('!');
        assert_eq!(accessor.get_value(), "root!");
    }
}
