//! Recover the value type of a type-erased property.
//!
//! Every value property belongs to one [`PropertyKind`]. Dispatch is a
//! `match` over a tagged borrow:
//!
//! - [`ValueProperty::property_ref`] returns a [`PropertyRef`], a shared
//!   borrow whose variant names the concrete interface
//!   (`&dyn TypedProperty<f64>` for `Double`, and so on).
//! - [`ValueProperty::property_mut`] returns the mutable [`PropertyMut`].
//! - [`ValueProperty::accept`] feeds a [`PropertyMut`] to a [`PropertyVisitor`],
//!   calling the one method matching the tag.
//!
//! Adding a value type with its own editor means adding one tag, one
//! visitor method, and a [`PropertyValue::dispatch_ref`] override.
//!
//! [`ValueProperty::property_ref`]: crate::property::ValueProperty::property_ref
//! [`ValueProperty::property_mut`]: crate::property::ValueProperty::property_mut
//! [`ValueProperty::accept`]: crate::property::ValueProperty::accept
//! [`PropertyValue::dispatch_ref`]: crate::value::PropertyValue::dispatch_ref

// -----------------------------------------------------------------------------
// Modules

mod dispatch;
mod kind;
mod visitor;

// -----------------------------------------------------------------------------
// Exports

pub use dispatch::{EnumMut, EnumRef, PropertyMut, PropertyRef};
pub use kind::PropertyKind;
pub use visitor::PropertyVisitor;

#[cfg(test)]
mod tests {
    use super::{EnumMut, PropertyKind, PropertyVisitor};
    use crate::property::{ArrayProperty, ArrayValueProperty, ConstProperty, Property};
    use crate::property::{TypedProperty, ValueProperty};
    use crate::value::{Color, FilePath};
    use alloc::string::String;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Record(Vec<&'static str>);

    impl PropertyVisitor for Record {
        fn visit_bool(&mut self, _: &mut dyn TypedProperty<bool>) {
            self.0.push("bool");
        }
        fn visit_int(&mut self, _: &mut dyn TypedProperty<i32>) {
            self.0.push("int");
        }
        fn visit_double(&mut self, _: &mut dyn TypedProperty<f64>) {
            self.0.push("double");
        }
        fn visit_string(&mut self, _: &mut dyn TypedProperty<String>) {
            self.0.push("string");
        }
        fn visit_color(&mut self, _: &mut dyn TypedProperty<Color>) {
            self.0.push("color");
        }
        fn visit_file_path(&mut self, _: &mut dyn TypedProperty<FilePath>) {
            self.0.push("file_path");
        }
        fn visit_enum(&mut self, _: EnumMut<'_>) {
            self.0.push("enum");
        }
        fn visit_int_array(&mut self, _: &mut dyn ArrayValueProperty<i32>) {
            self.0.push("int_array");
        }
        fn visit_other(&mut self, _: &mut dyn ValueProperty) {
            self.0.push("other");
        }
    }

    #[test]
    fn one_call_per_property() {
        let mut record = Record::default();
        Property::new("a", true).accept(&mut record);
        Property::new("b", 1_i32).accept(&mut record);
        Property::new("c", 1.0_f64).accept(&mut record);
        Property::new("d", String::new()).accept(&mut record);
        Property::new("e", Color::WHITE).accept(&mut record);
        ConstProperty::new("f", FilePath::new("x")).accept(&mut record);
        ArrayProperty::new("g", [1_i32, 2]).accept(&mut record);
        Property::new("h", 1_u8).accept(&mut record);
        Property::new("i", 1.0_f32).accept(&mut record);
        ArrayProperty::new("j", [1_u8, 2]).accept(&mut record);

        assert_eq!(
            record.0,
            [
                "bool",
                "int",
                "double",
                "string",
                "color",
                "file_path",
                "int_array",
                "other",
                "other",
                "other"
            ]
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(Property::new("a", 1_i32).kind(), PropertyKind::Int);
        assert_eq!(Property::new("a", 1_i64).kind(), PropertyKind::Other);
        assert_eq!(ArrayProperty::new("a", [true]).kind(), PropertyKind::BoolArray);
        assert_eq!(ArrayProperty::new("a", [0.0_f64; 3]).kind(), PropertyKind::DoubleArray);
        assert!(PropertyKind::DoubleArray.is_array());
        assert_eq!(alloc::format!("{:<6}|", PropertyKind::Int), "int   |");
    }
}
