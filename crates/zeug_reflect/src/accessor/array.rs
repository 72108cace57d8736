use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

// -----------------------------------------------------------------------------
// Traits

/// Read access to a fixed-size array of `N` elements.
///
/// Indices at or past `N` are a programming error and panic.
pub trait ArrayReadAccessor<T, const N: usize> {
    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    fn get_element(&self, index: usize) -> T;

    /// Returns all elements, reading index `0` first.
    fn get_array(&self) -> [T; N] {
        core::array::from_fn(|index| self.get_element(index))
    }
}

/// Read and write access to a fixed-size array of `N` elements.
pub trait ArrayAccessor<T, const N: usize>: ArrayReadAccessor<T, N> {
    /// Replaces the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    fn set_element(&mut self, index: usize, value: T);

    /// Replaces all elements, writing index `0` first.
    fn set_array(&mut self, array: [T; N]) {
        for (index, value) in array.into_iter().enumerate() {
            self.set_element(index, value);
        }
    }
}

// -----------------------------------------------------------------------------
// ArrayAccessorValue

/// An array accessor that owns a `[T; N]`.
#[derive(Clone, PartialEq)]
pub struct ArrayAccessorValue<T, const N: usize> {
    array: [T; N],
}

impl<T: Default, const N: usize> ArrayAccessorValue<T, N> {
    /// Creates an accessor holding `N` default elements.
    pub fn new() -> Self {
        Self {
            array: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> ArrayAccessorValue<T, N> {
    /// Creates an accessor holding `array`.
    #[inline]
    pub const fn with_value(array: [T; N]) -> Self {
        Self { array }
    }
}

impl<T: Default, const N: usize> Default for ArrayAccessorValue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> ArrayReadAccessor<T, N> for ArrayAccessorValue<T, N> {
    #[inline]
    fn get_element(&self, index: usize) -> T {
        self.array[index].clone()
    }

    #[inline]
    fn get_array(&self) -> [T; N] {
        self.array.clone()
    }
}

impl<T: Clone, const N: usize> ArrayAccessor<T, N> for ArrayAccessorValue<T, N> {
    #[inline]
    fn set_element(&mut self, index: usize, value: T) {
        self.array[index] = value;
    }

    #[inline]
    fn set_array(&mut self, array: [T; N]) {
        self.array = array;
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ArrayAccessorValue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArrayAccessorValue")
            .field(&self.array)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ConstArrayAccessorValue

/// A read-only array accessor that owns a `[T; N]`.
#[derive(Clone, PartialEq)]
pub struct ConstArrayAccessorValue<T, const N: usize> {
    array: [T; N],
}

impl<T, const N: usize> ConstArrayAccessorValue<T, N> {
    /// Creates an accessor holding `array`.
    #[inline]
    pub const fn with_value(array: [T; N]) -> Self {
        Self { array }
    }
}

impl<T: Clone, const N: usize> ArrayReadAccessor<T, N> for ConstArrayAccessorValue<T, N> {
    #[inline]
    fn get_element(&self, index: usize) -> T {
        self.array[index].clone()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ConstArrayAccessorValue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstArrayAccessorValue")
            .field(&self.array)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ArrayAccessorGetSet

/// An array accessor forwarding to per-index callables.
///
/// The index is checked against `N` before the callable runs, so callables
/// only ever see valid indices.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use zeug_reflect::accessor::{ArrayAccessor, ArrayAccessorGetSet, ArrayReadAccessor};
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let sink = log.clone();
///
/// let mut accessor = ArrayAccessorGetSet::<i32, 3>::new(
///     |index| index as i32,
///     move |index, value| sink.borrow_mut().push((index, value)),
/// );
///
/// assert_eq!(accessor.get_array(), [0, 1, 2]);
///
/// accessor.set_array([7, 8, 9]);
/// assert_eq!(*log.borrow(), [(0, 7), (1, 8), (2, 9)]);
/// ```
pub struct ArrayAccessorGetSet<T, const N: usize> {
    getter: Box<dyn Fn(usize) -> T>,
    setter: Box<dyn FnMut(usize, T)>,
}

impl<T: 'static, const N: usize> ArrayAccessorGetSet<T, N> {
    /// Creates an accessor from two per-index closures.
    pub fn new(
        getter: impl Fn(usize) -> T + 'static,
        setter: impl FnMut(usize, T) + 'static,
    ) -> Self {
        Self {
            getter: Box::new(getter),
            setter: Box::new(setter),
        }
    }

    /// Binds per-index methods of `O`.
    pub fn from_methods<O: 'static>(
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O, usize) -> T + 'static,
        setter: impl Fn(&mut O, usize, T) + 'static,
    ) -> Self {
        let (get_obj, set_obj) = (object.clone(), object.clone());
        Self::new(
            move |index| getter(&get_obj.borrow(), index),
            move |index, value| setter(&mut set_obj.borrow_mut(), index, value),
        )
    }

    /// Binds per-index methods of `O` that return and take references.
    pub fn from_ref_methods<O: 'static>(
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O, usize) -> &T + 'static,
        setter: impl Fn(&mut O, usize, &T) + 'static,
    ) -> Self
    where
        T: Clone,
    {
        let (get_obj, set_obj) = (object.clone(), object.clone());
        Self::new(
            move |index| getter(&get_obj.borrow(), index).clone(),
            move |index, value| setter(&mut set_obj.borrow_mut(), index, &value),
        )
    }
}

impl<T, const N: usize> ArrayReadAccessor<T, N> for ArrayAccessorGetSet<T, N> {
    fn get_element(&self, index: usize) -> T {
        assert!(index < N, "array index {index} out of range for length {N}");
        (self.getter)(index)
    }
}

impl<T, const N: usize> ArrayAccessor<T, N> for ArrayAccessorGetSet<T, N> {
    fn set_element(&mut self, index: usize, value: T) {
        assert!(index < N, "array index {index} out of range for length {N}");
        (self.setter)(index, value);
    }
}

impl<T, const N: usize> fmt::Debug for ArrayAccessorGetSet<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayAccessorGetSet")
            .field("len", &N)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// ConstArrayAccessorGetSet

/// A read-only array accessor forwarding to a per-index getter.
pub struct ConstArrayAccessorGetSet<T, const N: usize> {
    getter: Box<dyn Fn(usize) -> T>,
}

impl<T: 'static, const N: usize> ConstArrayAccessorGetSet<T, N> {
    /// Creates an accessor from a per-index closure.
    pub fn new(getter: impl Fn(usize) -> T + 'static) -> Self {
        Self {
            getter: Box::new(getter),
        }
    }

    /// Binds a per-index method of `O`.
    pub fn from_method<O: 'static>(
        object: &Rc<RefCell<O>>,
        getter: impl Fn(&O, usize) -> T + 'static,
    ) -> Self {
        let object = object.clone();
        Self::new(move |index| getter(&object.borrow(), index))
    }
}

impl<T, const N: usize> ArrayReadAccessor<T, N> for ConstArrayAccessorGetSet<T, N> {
    fn get_element(&self, index: usize) -> T {
        assert!(index < N, "array index {index} out of range for length {N}");
        (self.getter)(index)
    }
}

impl<T, const N: usize> fmt::Debug for ConstArrayAccessorGetSet<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstArrayAccessorGetSet")
            .field("len", &N)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{ArrayAccessor, ArrayAccessorGetSet, ArrayAccessorValue, ArrayReadAccessor};
    use super::ConstArrayAccessorGetSet;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn value_array() {
        let mut accessor = ArrayAccessorValue::<u8, 4>::new();
        assert_eq!(accessor.get_array(), [0; 4]);

        accessor.set_element(2, 9);
        assert_eq!(accessor.get_element(2), 9);
        assert_eq!(accessor.get_array(), [0, 0, 9, 0]);
    }

    #[test]
    #[should_panic]
    fn value_out_of_range() {
        let accessor = ArrayAccessorValue::<u8, 2>::new();
        accessor.get_element(2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_set_out_of_range() {
        let accessor = ConstArrayAccessorGetSet::<u8, 2>::new(|_| unreachable!());
        accessor.get_element(5);
    }

    #[test]
    fn reads_ascending() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let seen = order.clone();
        let accessor = ConstArrayAccessorGetSet::<usize, 4>::new(move |index| {
            seen.borrow_mut().push(index);
            index * 10
        });

        assert_eq!(accessor.get_array(), [0, 10, 20, 30]);
        assert_eq!(*order.borrow(), [0, 1, 2, 3]);
    }

    struct Vec3([f32; 3]);

    #[test]
    fn methods() {
        let object = Rc::new(RefCell::new(Vec3([1.0, 2.0, 3.0])));
        let mut accessor = ArrayAccessorGetSet::<f32, 3>::from_methods(
            &object,
            |v: &Vec3, i| v.0[i],
            |v: &mut Vec3, i, x| v.0[i] = x,
        );

        accessor.set_element(1, 5.0);
        assert_eq!(object.borrow().0, [1.0, 5.0, 3.0]);
        assert_eq!(accessor.get_array(), [1.0, 5.0, 3.0]);
    }
}
