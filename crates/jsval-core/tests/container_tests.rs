//! Sequence and Mapping: literal construction, positional vs keyed access,
//! key canonicalization and the get-checked / get-or-insert split.

use jsval_core::{Mapping, Number, Sequence, Tag, Text, Variant};

// ============================================================================
// Sequence
// ============================================================================

#[test]
fn sequence_literal_keeps_order() {
    let seq = Sequence::from([Variant::from(1), Variant::from("two"), Variant::from(true)]);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq[0].to_string(), "1");
    assert_eq!(seq[1].to_string(), "two");
    assert_eq!(seq[2].to_string(), "true");
}

#[test]
fn sequence_write_then_read() {
    let mut seq = Sequence::from([0, 0, 0]);
    seq[1] = Variant::from("x");
    assert_eq!(seq[1], Variant::from("x"));
    assert_eq!(seq[0], Variant::from(0));
}

#[test]
fn sequence_indexed_by_number() {
    let seq = Sequence::from([10, 20]);
    assert_eq!(seq[Number::from(1)], Variant::from(20));
    assert_eq!(seq[Number::from(1.9)], Variant::from(20));
}

#[test]
fn sequence_indexed_by_wide_integers() {
    let mut seq = Sequence::from([10, 20]);
    seq[1u128] = Variant::from(21);
    assert_eq!(seq[1i128], Variant::from(21));
    assert!(seq.get(u128::MAX).is_none());
}

#[test]
#[should_panic(expected = "sequence index out of range")]
fn sequence_read_past_end_panics() {
    let seq = Sequence::from([1, 2]);
    let _ = &seq[2];
}

#[test]
#[should_panic(expected = "sequence index out of range")]
fn sequence_write_past_end_panics_instead_of_growing() {
    let mut seq = Sequence::new();
    seq[0] = Variant::from(1);
}

#[test]
fn sequence_checked_get_is_non_trapping() {
    let mut seq = Sequence::from([1]);
    assert!(seq.get(0).is_some());
    assert!(seq.get(1).is_none());
    assert!(seq.get(-1).is_none());
    assert!(seq.get_mut(5).is_none());
    assert_eq!(seq.len(), 1);
}

#[test]
fn sequence_push_grows() {
    let mut seq = Sequence::new();
    assert!(seq.is_empty());
    seq.push(1);
    seq.push(Text::from("a"));
    assert_eq!(seq.len(), 2);
    assert_eq!(seq[1].tag(), Tag::Text);
}

#[test]
fn sequence_pop_shrinks_from_the_end() {
    let mut seq = Sequence::from([1, 2]);
    assert_eq!(seq.pop(), Some(Variant::from(2)));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.pop(), Some(Variant::from(1)));
    assert_eq!(seq.pop(), None);
}

#[test]
fn sequence_iter_mut_edits_every_element() {
    let mut seq = Sequence::from([1, 2, 3]);
    for item in seq.iter_mut() {
        *item = Variant::from(item.to_string());
    }
    assert_eq!(seq.iter().filter(|v| v.tag() == Tag::Text).count(), 3);
    assert_eq!(seq[2], Variant::from("3"));
}

#[test]
fn sequence_renders_placeholder() {
    let seq = Sequence::from([1, 2, 3]);
    assert_eq!(seq.to_string(), "[array]");
    assert_eq!(Sequence::new().to_string(), "[array]");
}

// ============================================================================
// Mapping
// ============================================================================

#[test]
fn mapping_literal_last_write_wins() {
    let m = Mapping::from([("k", 1), ("k", 2)]);
    assert_eq!(m.len(), 1);
    assert_eq!(m["k"], Variant::from(2));
}

#[test]
fn mapping_integer_and_text_keys_share_a_slot() {
    let mut m = Mapping::new();
    m[0] = Variant::from("zero");
    assert_eq!(m["0"].to_string(), "zero");

    m["1"] = Variant::from("one");
    assert_eq!(m[1].to_string(), "one");
    assert_eq!(m[1u64].to_string(), "one");
    assert_eq!(m[Number::from(1)].to_string(), "one");
}

#[test]
fn mapping_wide_integer_keys_stringify_exactly() {
    let mut m = Mapping::new();
    m[u128::MAX] = Variant::from("max");
    m[i128::MIN] = Variant::from("min");
    assert_eq!(m[u128::MAX.to_string()].to_string(), "max");
    assert_eq!(m[i128::MIN.to_string()].to_string(), "min");
}

#[test]
fn mapping_fractional_number_key_uses_its_rendering() {
    let mut m = Mapping::new();
    m[Number::from(1.5)] = Variant::from(true);
    assert!(m.contains_key("1.5"));
}

#[test]
fn mapping_read_of_missing_key_does_not_insert() {
    let m = Mapping::from([("a", 1)]);
    assert_eq!(m["missing"].tag(), Tag::Absence);
    assert!(!m.contains_key("missing"));
    assert!(m.get("missing").is_none());
}

#[test]
fn mapping_write_access_auto_vivifies() {
    let mut m = Mapping::new();
    let slot = m.get_or_insert("c");
    assert_eq!(*slot, Variant::Absence);
    assert!(m.contains_key("c"));
    assert_eq!(m["c"].to_string(), "undefined");
}

#[test]
fn mapping_index_mut_assigns() {
    let mut m = Mapping::new();
    m["x"] = Variant::from(Number::from(2.5));
    assert_eq!(m["x"].to_string(), "2.5");
    m["x"] = Variant::from("replaced");
    assert_eq!(m["x"].to_string(), "replaced");
    assert_eq!(m.len(), 1);
}

#[test]
fn mapping_insert_and_remove() {
    let mut m = Mapping::new();
    assert!(m.insert("a", 1).is_none());
    assert_eq!(m.insert("a", 2), Some(Variant::from(1)));
    assert_eq!(m.remove("a"), Some(Variant::from(2)));
    assert!(m.is_empty());
}

#[test]
fn mapping_sorted_entries_are_ordered() {
    let m = Mapping::from([("b", 2), ("a", 1), ("c", 3)]);
    let keys: Vec<&str> = m.sorted_entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["a", "b", "c"]);
}

#[test]
fn mapping_renders_placeholder() {
    assert_eq!(Mapping::from([("a", 1)]).to_string(), "[object]");
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn mapping_end_to_end_scenario() {
    let mut m = Mapping::from([
        ("a", Variant::from(Number::from(1))),
        ("b", Variant::from(Text::from("x"))),
    ]);
    assert_eq!(m["a"].to_string(), "1");
    assert_eq!(m["b"].to_string(), "x");

    // first write-side access creates the entry
    let _ = &mut m["c"];
    assert!(m.contains_key("c"));
    assert_eq!(m["c"].to_string(), "undefined");
}
