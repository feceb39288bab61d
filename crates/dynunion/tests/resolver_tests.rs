//! Tests for dereference and index result types across alternative lists
//!
//! Each test pins the resolved type with an annotated binding, so a wrong
//! resolution fails to compile rather than at runtime.

use dynunion::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Referenced types
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_single_reference_yields_plain_referent() -> anyhow::Result<()> {
    type V = Value<Alts![f64, Shared<String>]>;
    let v = V::shared(String::from("inside"));

    let r: String = v.referent()?;
    assert_eq!(r, "inside");
    Ok(())
}

#[test]
fn test_two_references_yield_value_over_both() -> anyhow::Result<()> {
    type V = Value<Alts![Shared<f64>, Shared<String>]>;

    let n: Value<Alts![f64, String]> = V::shared(1.5_f64).referent()?;
    assert_eq!(n.as_f64(), Some(1.5));

    let s: Value<Alts![f64, String]> = V::shared(String::from("x")).referent()?;
    assert_eq!(s.as_str(), Some("x"));
    Ok(())
}

#[test]
fn test_reference_to_value_is_spliced() -> anyhow::Result<()> {
    type Inner = Value<Alts![bool, f64]>;
    type V = Value<Alts![String, Shared<Inner>]>;

    let v = V::shared(Inner::from_kind(true));
    let r: Value<Alts![bool, f64]> = v.referent()?;
    assert_eq!(r.as_bool(), Some(true));
    Ok(())
}

#[test]
fn test_plain_and_value_references_concatenate() -> anyhow::Result<()> {
    type Inner = Value<Alts![bool, String]>;
    type V = Value<Alts![Shared<f64>, Shared<Inner>]>;

    let from_plain: Value<Alts![f64, bool, String]> = V::shared(3.0_f64).referent()?;
    assert_eq!(from_plain.kind_name(), "number");

    let from_nested: Value<Alts![f64, bool, String]> =
        V::shared(Inner::text("deep")).referent()?;
    assert_eq!(from_nested.as_str(), Some("deep"));
    Ok(())
}

#[test]
fn test_reference_to_undefined_value_stays_undefined() -> anyhow::Result<()> {
    type Inner = Value<Alts![f64]>;
    type V = Value<Alts![Shared<f64>, Shared<Inner>]>;

    let r = V::shared(Inner::new()).referent()?;
    assert!(r.is_undefined());
    Ok(())
}

#[test]
fn test_reference_to_sequence_aliases_buffer() -> anyhow::Result<()> {
    type V = Value<Alts![Shared<Sequence<f64>>]>;
    let v = V::shared(Sequence::from_vec(vec![1.0, 2.0]));

    let seq: Sequence<f64> = v.referent()?;
    seq.push(3.0);
    assert_eq!(v.to_string(), "1,2,3");
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Element types
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_sequence_of_values_is_flattened() -> anyhow::Result<()> {
    type Item = Value<Alts![f64, String]>;
    type V = Value<Alts![bool, Sequence<Item>]>;

    let v = V::sequence(vec![Item::number(1.0), Item::text("two"), Item::new()]);

    let first: Value<Alts![f64, String]> = v.element(0)?;
    assert!(first == 1.0_f64);
    assert_eq!(v.element(1)?.as_str(), Some("two"));
    assert!(v.element(2)?.is_undefined());
    Ok(())
}

#[test]
fn test_two_sequences_concatenate_element_kinds() -> anyhow::Result<()> {
    type Item = Value<Alts![bool, String]>;
    type V = Value<Alts![Sequence<f64>, Sequence<Item>]>;

    let numbers = V::sequence(vec![4.0_f64]);
    let e: Value<Alts![f64, bool, String]> = numbers.element(0)?;
    assert_eq!(e.as_f64(), Some(4.0));

    let items = V::sequence(vec![Item::from_kind(false)]);
    let e: Value<Alts![f64, bool, String]> = items.element(0)?;
    assert_eq!(e.as_bool(), Some(false));
    Ok(())
}

#[test]
fn test_value_sequence_then_plain_sequence() -> anyhow::Result<()> {
    type V = Value<Alts![Sequence<Value<Alts![bool]>>, Sequence<String>]>;

    let v = V::sequence(vec![String::from("s")]);
    let e: Value<Alts![bool, String]> = v.element(0)?;
    assert_eq!(e.as_str(), Some("s"));
    Ok(())
}

#[test]
fn test_two_value_sequences_concatenate() -> anyhow::Result<()> {
    type V = Value<Alts![Sequence<Value<Alts![bool]>>, Sequence<Value<Alts![f64]>>]>;

    let v = V::sequence(vec![Value::<Alts![f64]>::number(8.0)]);
    let e: Value<Alts![bool, f64]> = v.element(0)?;
    assert_eq!(e.as_f64(), Some(8.0));
    Ok(())
}

#[test]
fn test_duplicate_element_kinds_are_kept() -> anyhow::Result<()> {
    type V = Value<Alts![Sequence<f64>, Sequence<f64>]>;

    let v = V::from_kind::<Sequence<f64>, There<Here>>(vec![6.0].into());
    let e: Value<Alts![f64, f64]> = v.element(0)?;
    assert_eq!(e.to_string(), "6");
    assert!(e == 6.0_f64);
    Ok(())
}

#[test]
fn test_nested_sequences_index_to_inner_sequence() -> anyhow::Result<()> {
    type V = Value<Alts![Sequence<Sequence<f64>>]>;
    let inner: Sequence<f64> = vec![1.0, 2.0].into();
    let v = V::sequence(vec![inner.clone()]);

    let row: Sequence<f64> = v.element(0)?;
    assert!(row.ptr_eq(&inner));
    assert_eq!(row.get(1)?, 2.0);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Writing through merged element types
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_set_element_routes_to_active_sequence() -> anyhow::Result<()> {
    type Item = Value<Alts![bool, String]>;
    type V = Value<Alts![Sequence<f64>, Sequence<Item>]>;
    type E = Value<Alts![f64, bool, String]>;

    let items = V::sequence(vec![Item::new(), Item::new()]);
    items.set_element(1, E::text("set"))?;
    assert_eq!(items.element(1)?.as_str(), Some("set"));

    let numbers = V::sequence(vec![0.0_f64]);
    numbers.set_element(0, E::number(2.0))?;
    assert_eq!(numbers.to_string(), "2");
    Ok(())
}

#[test]
fn test_set_element_rejects_foreign_kind() -> anyhow::Result<()> {
    type Item = Value<Alts![bool, String]>;
    type V = Value<Alts![Sequence<f64>, Sequence<Item>]>;
    type E = Value<Alts![f64, bool, String]>;

    let numbers = V::sequence(vec![0.0_f64]);
    assert_eq!(
        numbers.set_element(0, E::from_kind(true)),
        Err(AccessError::ElementMismatch {
            index: 0,
            sequence: "sequence"
        })
    );
    assert_eq!(numbers.element(0)?.to_string(), "0");
    assert!(numbers.set_element(0, E::new()).is_err());
    Ok(())
}
