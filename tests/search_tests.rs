//! Search Tests
//!
//! Tests verify the find-or-insertion-point contract both orderings
//! rely on: a hit reports its index, a miss reports the first index whose
//! element is greater than the key.

use agenda::directory::search::{locate, Slot};

#[test]
fn test_locate_empty() {
    let seq: [u32; 0] = [];
    assert_eq!(locate(&seq, |x| x.cmp(&5)), Slot::Vacant(0));
}

#[test]
fn test_locate_found() {
    let seq = [10, 20, 30, 40];
    assert_eq!(locate(&seq, |x| x.cmp(&10)), Slot::Found(0));
    assert_eq!(locate(&seq, |x| x.cmp(&30)), Slot::Found(2));
    assert_eq!(locate(&seq, |x| x.cmp(&40)), Slot::Found(3));
}

#[test]
fn test_locate_insertion_points() {
    let seq = [10, 20, 30, 40];
    assert_eq!(locate(&seq, |x| x.cmp(&5)), Slot::Vacant(0));
    assert_eq!(locate(&seq, |x| x.cmp(&25)), Slot::Vacant(2));
    assert_eq!(locate(&seq, |x| x.cmp(&45)), Slot::Vacant(4));
}

#[test]
fn test_slot_accessors() {
    assert_eq!(Slot::Found(3).found(), Some(3));
    assert_eq!(Slot::Found(3).vacant(), None);
    assert_eq!(Slot::Vacant(1).found(), None);
    assert_eq!(Slot::Vacant(1).vacant(), Some(1));
}

#[test]
fn test_locate_strings_by_byte_order() {
    let seq = ["Bond", "Miller", "Smith", "smith"];
    assert_eq!(locate(&seq, |s| s.cmp(&"Smith")), Slot::Found(2));
    assert_eq!(locate(&seq, |s| s.cmp(&"Zorro")), Slot::Vacant(3));
    assert_eq!(locate(&seq, |s| s.cmp(&"bond")), Slot::Vacant(3));
}
