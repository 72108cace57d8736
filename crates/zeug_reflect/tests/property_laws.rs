use core::any::TypeId;
use std::cell::RefCell;
use std::rc::Rc;

use zeug_reflect::accessor::{ArrayAccessorGetSet, ArrayReadAccessor};
use zeug_reflect::property::{AbstractProperty, ArrayProperty, ConstProperty, Property};
use zeug_reflect::property::{TypedProperty, ValueProperty};
use zeug_reflect::value::{ArrayElement, Color, FilePath, PropertyValue};
use zeug_reflect::variant::{Variant, VariantArray, VariantMap, VariantType};
use zeug_reflect::visitor::PropertyVisitor;

// -----------------------------------------------------------------------------
// Construction strategies

struct Holder<T>(T);

fn check_strategies<T: PropertyValue>(sample: T) {
    let expected = TypeId::of::<T>();
    let object = Rc::new(RefCell::new(Holder(sample.clone())));
    let shared = Rc::new(RefCell::new(sample.clone()));
    let (read, write) = (shared.clone(), shared.clone());

    let properties: Vec<Box<dyn ValueProperty>> = vec![
        Box::new(Property::new("owned", sample.clone())),
        Box::new(Property::from_accessors(
            "free",
            move || read.borrow().clone(),
            move |v| *write.borrow_mut() = v,
        )),
        Box::new(Property::from_methods(
            "by_value",
            &object,
            |h: &Holder<T>| h.0.clone(),
            |h: &mut Holder<T>, v| h.0 = v,
        )),
        Box::new(Property::from_ref_methods(
            "by_ref",
            &object,
            |h: &Holder<T>| &h.0,
            |h: &mut Holder<T>, v: &T| h.0 = v.clone(),
        )),
        Box::new(Property::from_mut_methods(
            "by_mut",
            &object,
            |h: &mut Holder<T>| h.0.clone(),
            |h: &mut Holder<T>, v| h.0 = v,
        )),
        Box::new(ConstProperty::new("const_owned", sample.clone())),
        Box::new(ConstProperty::from_method("const_by_value", &object, |h: &Holder<T>| {
            h.0.clone()
        })),
        Box::new(ConstProperty::from_ref_method("const_by_ref", &object, |h: &Holder<T>| &h.0)),
    ];

    let rendered = sample.to_property_string();
    for property in &properties {
        assert_eq!(property.value_type_id(), expected, "{}", property.name());
        assert_eq!(property.value_type_name(), T::TYPE_NAME);
        assert_eq!(property.to_string(), rendered, "{}", property.name());
    }
}

#[test]
fn value_type_matches_for_every_strategy() {
    check_strategies(true);
    check_strategies(-7_i8);
    check_strategies(300_i16);
    check_strategies(5_i32);
    check_strategies(-9_000_000_000_i64);
    check_strategies(7_u8);
    check_strategies(65_000_u16);
    check_strategies(4_000_000_000_u32);
    check_strategies(u64::MAX);
    check_strategies(0.5_f32);
    check_strategies(-2.25_f64);
    check_strategies(String::from("label"));
    check_strategies(Color::rgba(1, 2, 3, 4));
    check_strategies(FilePath::new("assets/mesh.obj"));
}

// -----------------------------------------------------------------------------
// String round-trip

fn round_trips<T: PropertyValue + Default>(value: T) {
    let mut fresh = Property::<T>::with_default("fresh");
    fresh.from_string(&value.to_property_string()).unwrap();
    assert_eq!(fresh.value(), value);
}

fn array_round_trips<T: ArrayElement, const N: usize>(value: [T; N]) {
    let source = ArrayProperty::new("source", value);
    let mut fresh = ArrayProperty::<T, N>::with_default("fresh");
    fresh.from_string(&source.to_string()).unwrap();
    assert_eq!(fresh.value(), value);
}

#[test]
fn string_round_trip() {
    round_trips(false);
    round_trips(i8::MIN);
    round_trips(i64::MAX);
    round_trips(u64::MAX);
    round_trips(-0.1_f32);
    round_trips(1e-300_f64);
    round_trips(f64::MAX);
    round_trips(f32::NEG_INFINITY);
    round_trips(String::from("a, (b)"));
    round_trips(Color::rgb(0x12, 0xAB, 0xFF));
    round_trips(FilePath::new("/tmp/out.png"));

    array_round_trips([1.5_f64, -2.0, 3.25]);
    array_round_trips([0.1_f32, 1e-7, -42.0]);
    array_round_trips([i32::MIN, 0, i32::MAX]);
    array_round_trips([u8::MAX; 4]);
    array_round_trips([true, false]);
}

// -----------------------------------------------------------------------------
// Parse failures

#[test]
fn malformed_input_keeps_value() {
    let mut vector = ArrayProperty::new("v", [1.0_f64, 2.0, 3.0]);
    for input in [
        "[1, 2, 3]",
        "(1, 2, 3",
        "1, 2, 3",
        "(1, 2)",
        "(1, 2, 3, 4)",
        "(1, x, 3)",
        "(1, 2e3, 3)",
        "(1, , 3)",
        "",
    ] {
        assert!(vector.from_string(input).is_err(), "{input:?}");
        assert_eq!(vector.value(), [1.0, 2.0, 3.0]);
    }

    let mut count = Property::new("count", 3_u8);
    for input in ["", "three", "-1", "256", "3.0"] {
        assert!(count.from_string(input).is_err(), "{input:?}");
        assert_eq!(count.value(), 3);
    }

    let mut tint = Property::new("tint", Color::WHITE);
    for input in ["FFFFFF", "#FFF", "#GGGGGG", "#FFFFFFFFF"] {
        assert!(tint.from_string(input).is_err(), "{input:?}");
        assert_eq!(tint.value(), Color::WHITE);
    }
}

// -----------------------------------------------------------------------------
// Variant conversion law

fn has_type_implies_can_convert<T: VariantType>(variant: &Variant) {
    if variant.has_type::<T>() {
        assert!(variant.can_convert::<T>(), "{variant:?}");
        assert!(variant.value::<T>().is_some(), "{variant:?}");
    }
}

#[test]
fn has_type_implies_can_convert_everywhere() {
    let mut map = VariantMap::new();
    map.insert("k".into(), Variant::I32(1));

    let samples = [
        Variant::Empty,
        Variant::Bool(true),
        Variant::I8(-1),
        Variant::I16(2),
        Variant::I32(42),
        Variant::I64(i64::MIN),
        Variant::U8(255),
        Variant::U16(3),
        Variant::U32(4),
        Variant::U64(u64::MAX),
        Variant::F32(1.5),
        Variant::F64(f64::NAN),
        Variant::from("12"),
        Variant::from("true"),
        Variant::Array(vec![Variant::I32(1)]),
        Variant::Map(map),
    ];

    for variant in &samples {
        has_type_implies_can_convert::<bool>(variant);
        has_type_implies_can_convert::<i8>(variant);
        has_type_implies_can_convert::<i16>(variant);
        has_type_implies_can_convert::<i32>(variant);
        has_type_implies_can_convert::<i64>(variant);
        has_type_implies_can_convert::<u8>(variant);
        has_type_implies_can_convert::<u16>(variant);
        has_type_implies_can_convert::<u32>(variant);
        has_type_implies_can_convert::<u64>(variant);
        has_type_implies_can_convert::<f32>(variant);
        has_type_implies_can_convert::<f64>(variant);
        has_type_implies_can_convert::<String>(variant);
        has_type_implies_can_convert::<VariantArray>(variant);
        has_type_implies_can_convert::<VariantMap>(variant);
    }

    // The converse does not hold.
    let text = Variant::from("12");
    assert!(!text.has_type::<i32>());
    assert!(text.can_convert::<i32>());
}

// -----------------------------------------------------------------------------
// Array accessor ordering

#[test]
fn whole_array_read_matches_element_reads() {
    let accessor = ArrayAccessorGetSet::<u32, 5>::new(|i| (i as u32 + 1) * 10, |_, _| {});
    let manual: Vec<u32> = (0..5).map(|i| accessor.get_element(i)).collect();
    assert_eq!(accessor.get_array().to_vec(), manual);
    assert_eq!(manual, [10, 20, 30, 40, 50]);
}

// -----------------------------------------------------------------------------
// Visitor dispatch

#[derive(Default)]
struct DoubleOnly {
    calls: usize,
    seen: Option<f64>,
}

impl PropertyVisitor for DoubleOnly {
    fn visit_double(&mut self, property: &mut dyn TypedProperty<f64>) {
        self.calls += 1;
        self.seen = Some(property.value());
    }
}

#[test]
fn double_visitor_fires_once() {
    let mut visitor = DoubleOnly::default();
    let mut property: Box<dyn ValueProperty> = Box::new(Property::new("ratio", 0.75_f64));
    property.accept(&mut visitor);
    assert_eq!(visitor.calls, 1);
    assert_eq!(visitor.seen, Some(0.75));

    Property::new("other", 1_i32).accept(&mut visitor);
    ArrayProperty::new("array", [1.0_f64, 2.0]).accept(&mut visitor);
    assert_eq!(visitor.calls, 1);
}

// -----------------------------------------------------------------------------
// Scenarios

#[test]
fn int_property_scenario() {
    let mut x = Property::new("x", 5_i32);
    assert_eq!(x.to_string(), "5");
    x.from_string("7").unwrap();
    assert_eq!(x.to_string(), "7");
}

#[test]
fn vector_property_scenario() {
    let mut v = ArrayProperty::new("v", [1_i32, 2, 3]);
    assert_eq!(v.to_string(), "(1, 2, 3)");
    v.from_string("(4, 5, 6)").unwrap();
    assert!(v.from_string("(4, 5)").is_err());
    assert_eq!(v.to_string(), "(4, 5, 6)");
}

#[test]
fn variant_int_to_string_scenario() {
    let v = Variant::from(42_i32);
    assert!(v.can_convert::<String>());
    assert_eq!(v.value::<String>().as_deref(), Some("42"));
}
