//! Tests for Display and Debug rendering of values

use dynunion::*;
use pretty_assertions::assert_eq;

type Item = Value<Alts![bool, f64, String]>;
type Tree = Value<Alts![f64, String, Shared<Item>, Sequence<Item>]>;

#[test]
fn test_scalar_display() {
    assert_eq!(Item::from_kind(true).to_string(), "true");
    assert_eq!(Item::from_kind(false).to_string(), "false");
    assert_eq!(Item::number(42).to_string(), "42");
    assert_eq!(Item::number(-1.25).to_string(), "-1.25");
    assert_eq!(Item::text("plain").to_string(), "plain");
    assert_eq!(Item::new().to_string(), "undefined");
}

#[test]
fn test_sequence_display_joins_with_commas() {
    let v = Tree::sequence(vec![
        Item::number(1.0),
        Item::text("two"),
        Item::from_kind(true),
        Item::new(),
    ]);
    assert_eq!(v.to_string(), "1,two,true,undefined");
    assert_eq!(Tree::sequence(Vec::<Item>::new()).to_string(), "");
}

#[test]
fn test_shared_display_renders_referent() {
    let v = Tree::shared(Item::text("behind"));
    assert_eq!(v.to_string(), "behind");
}

#[test]
fn test_debug_quotes_strings_and_marks_references() {
    let seq = Tree::sequence(vec![Item::number(1.0), Item::text("a")]);
    assert_eq!(format!("{:?}", seq), "[1, \"a\"]");

    let shared = Tree::shared(Item::text("a"));
    assert_eq!(format!("{:?}", shared), "&\"a\"");

    assert_eq!(format!("{:?}", Tree::number(0.5)), "0.5");
    assert_eq!(format!("{:?}", Tree::new()), "undefined");
}

#[test]
fn test_display_follows_mutation_through_alias() {
    let v = Tree::sequence(vec![Item::number(1.0)]);
    if let Some(seq) = v.get::<Sequence<Item>, _>() {
        seq.push(Item::number(2.0));
    }
    assert_eq!(v.to_string(), "1,2");
}

#[test]
fn test_number_text_boundaries() {
    assert_eq!(number_to_text(123456789.0), "123456789");
    assert_eq!(number_to_text(1e-6), "0.000001");
    assert_eq!(number_to_text(1e-7), "1e-7");
    assert_eq!(number_to_text(999999999999999900000.0), "999999999999999900000");
    assert_eq!(number_to_text(1.2345e25), "1.2345e+25");
}
