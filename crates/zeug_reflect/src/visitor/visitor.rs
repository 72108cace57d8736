use alloc::string::String;

use super::EnumMut;
use crate::group::PropertyGroup;
use crate::property::{ArrayValueProperty, TypedProperty, ValueProperty};
use crate::value::{Color, FilePath};

/// One method per dispatch tag.
///
/// Every method defaults to doing nothing, so a visitor only overrides the
/// value types it handles. Value types without a dedicated method arrive in
/// [`visit_other`](Self::visit_other).
///
/// # Examples
///
/// ```
/// use zeug_reflect::property::{Property, TypedProperty, ValueProperty};
/// use zeug_reflect::visitor::PropertyVisitor;
///
/// #[derive(Default)]
/// struct Halve(usize);
///
/// impl PropertyVisitor for Halve {
///     fn visit_double(&mut self, property: &mut dyn TypedProperty<f64>) {
///         let v = property.value();
///         property.set_value(v / 2.0).unwrap();
///         self.0 += 1;
///     }
/// }
///
/// let mut opacity = Property::new("opacity", 0.5_f64);
/// let mut visitor = Halve::default();
/// opacity.accept(&mut visitor);
///
/// assert_eq!(visitor.0, 1);
/// assert_eq!(opacity.value(), 0.25);
/// ```
pub trait PropertyVisitor {
    fn visit_bool(&mut self, _property: &mut dyn TypedProperty<bool>) {}

    /// Called for `i32` properties.
    fn visit_int(&mut self, _property: &mut dyn TypedProperty<i32>) {}

    /// Called for `f64` properties.
    fn visit_double(&mut self, _property: &mut dyn TypedProperty<f64>) {}

    fn visit_string(&mut self, _property: &mut dyn TypedProperty<String>) {}

    fn visit_color(&mut self, _property: &mut dyn TypedProperty<Color>) {}

    fn visit_file_path(&mut self, _property: &mut dyn TypedProperty<FilePath>) {}

    /// Called for properties holding an [`EnumValue`](crate::value::EnumValue).
    fn visit_enum(&mut self, _property: EnumMut<'_>) {}

    fn visit_bool_array(&mut self, _property: &mut dyn ArrayValueProperty<bool>) {}

    fn visit_int_array(&mut self, _property: &mut dyn ArrayValueProperty<i32>) {}

    fn visit_double_array(&mut self, _property: &mut dyn ArrayValueProperty<f64>) {}

    /// Called for every value type without a dedicated method.
    fn visit_other(&mut self, _property: &mut dyn ValueProperty) {}

    /// Called for nested groups, before their children are visited.
    fn visit_group(&mut self, _group: &mut PropertyGroup) {}
}
