use polyvalue::{decode, DecodeOptions, Decoder, Mapping, PolymorphicValue, ValueKind};

use PolymorphicValue::{FloatingPoint, Integer, Sequence};

fn mapping(entries: Vec<(&str, PolymorphicValue)>) -> PolymorphicValue {
    entries.into_iter().collect()
}

// ============================================================================
// Structural equality
// ============================================================================

#[test]
fn integer_never_equals_float() {
    assert_ne!(Integer(42), FloatingPoint(42.0));
    assert_ne!(Integer(0), FloatingPoint(0.0));
}

#[test]
fn same_variant_compares_payload() {
    assert_eq!(Integer(42), Integer(42));
    assert_ne!(Integer(42), Integer(43));
    assert_eq!(FloatingPoint(3.14), FloatingPoint(3.14));
    assert_ne!(FloatingPoint(3.14), FloatingPoint(3.15));
}

#[test]
fn sequence_equality_is_order_sensitive() {
    assert_eq!(
        Sequence(vec![Integer(1), Integer(2)]),
        Sequence(vec![Integer(1), Integer(2)])
    );
    assert_ne!(
        Sequence(vec![Integer(1), Integer(2)]),
        Sequence(vec![Integer(2), Integer(1)])
    );
    assert_ne!(
        Sequence(vec![Integer(1)]),
        Sequence(vec![Integer(1), Integer(1)])
    );
}

#[test]
fn mapping_equality_ignores_key_order() {
    let ab = mapping(vec![("a", Integer(1)), ("b", Integer(2))]);
    let ba = mapping(vec![("b", Integer(2)), ("a", Integer(1))]);
    assert_eq!(ab, ba);
    assert_eq!(decode(r#"{"a":1,"b":2}"#).unwrap(), decode(r#"{"b":2,"a":1}"#).unwrap());
}

#[test]
fn mapping_equality_requires_same_keys_and_values() {
    let base = mapping(vec![("a", Integer(1))]);
    assert_ne!(base, mapping(vec![("a", FloatingPoint(1.0))]));
    assert_ne!(base, mapping(vec![("b", Integer(1))]));
    assert_ne!(base, mapping(vec![("a", Integer(1)), ("b", Integer(2))]));
}

#[test]
fn containers_never_equal_other_variants() {
    assert_ne!(Sequence(vec![]), mapping(vec![]));
    assert_ne!(Sequence(vec![Integer(1)]), Integer(1));
}

// ============================================================================
// Debug rendering
// ============================================================================

#[test]
fn render_numbers() {
    assert_eq!(Integer(42).to_string(), "42");
    assert_eq!(Integer(-3).to_string(), "-3");
    assert_eq!(FloatingPoint(3.14).to_string(), "3.14");
    assert_eq!(FloatingPoint(42.0).to_string(), "42.0");
}

#[test]
fn render_sequence() {
    let value = Sequence(vec![Integer(1), FloatingPoint(2.5), Sequence(vec![])]);
    assert_eq!(value.to_string(), "[1, 2.5, []]");
}

#[test]
fn render_mapping_keys_then_values() {
    let value = decode(r#"{"int": 42, "double": 42.0}"#).unwrap();
    assert_eq!(value.to_string(), "[double, int]: 42.0, 42");
}

#[test]
fn render_empty_mapping() {
    assert_eq!(mapping(vec![]).to_string(), "[]: ");
}

#[test]
fn render_nested_mapping() {
    let value = mapping(vec![
        ("inner", mapping(vec![("x", Integer(1))])),
        ("list", Sequence(vec![Integer(2), Integer(3)])),
    ]);
    assert_eq!(value.to_string(), "[inner, list]: [x]: 1, [2, 3]");
}

// ============================================================================
// Accessors and conversions
// ============================================================================

#[test]
fn accessors_do_not_coerce() {
    assert_eq!(Integer(7).as_integer(), Some(7));
    assert_eq!(Integer(7).as_floating_point(), None);
    assert_eq!(FloatingPoint(7.0).as_integer(), None);
    assert_eq!(FloatingPoint(7.0).as_floating_point(), Some(7.0));
}

#[test]
fn container_accessors() {
    let seq = Sequence(vec![Integer(1)]);
    assert_eq!(seq.as_sequence(), Some(&[Integer(1)][..]));
    assert!(seq.as_mapping().is_none());
    assert!(seq.get("a").is_none());

    let map = mapping(vec![("a", Integer(1))]);
    assert_eq!(map.get("a"), Some(&Integer(1)));
    assert_eq!(map.get("b"), None);
    assert_eq!(map.as_mapping().map(Mapping::len), Some(1));
}

#[test]
fn kind_and_predicates() {
    assert_eq!(Integer(1).kind(), ValueKind::Integer);
    assert_eq!(FloatingPoint(1.0).kind(), ValueKind::FloatingPoint);
    assert_eq!(Sequence(vec![]).kind(), ValueKind::Sequence);
    assert_eq!(mapping(vec![]).kind(), ValueKind::Mapping);
    assert_eq!(ValueKind::FloatingPoint.to_string(), "floating-point");

    assert!(Integer(1).is_integer());
    assert!(FloatingPoint(1.0).is_floating_point());
    assert!(Sequence(vec![]).is_sequence());
    assert!(mapping(vec![]).is_mapping());
    assert!(!Integer(1).is_floating_point());
}

#[test]
fn from_conversions() {
    assert_eq!(PolymorphicValue::from(42i64), Integer(42));
    assert_eq!(PolymorphicValue::from(42i32), Integer(42));
    assert_eq!(PolymorphicValue::from(42.0), FloatingPoint(42.0));
    assert_eq!(
        PolymorphicValue::from(vec![Integer(1)]),
        Sequence(vec![Integer(1)])
    );

    let collected: PolymorphicValue = (1..=3).map(Integer).collect();
    assert_eq!(collected, Sequence(vec![Integer(1), Integer(2), Integer(3)]));
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn decode_options_defaults() {
    assert_eq!(DecodeOptions::default().max_depth, 128);
    assert_eq!(DecodeOptions::new().with_max_depth(4).max_depth, 4);
}

// ============================================================================
// Thread safety
// ============================================================================

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<PolymorphicValue>();
    assert_send_sync::<Decoder>();
    assert_send_sync::<DecodeOptions>();
}
