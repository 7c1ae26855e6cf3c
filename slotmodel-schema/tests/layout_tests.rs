use serde_json::json;
use slotmodel_schema::{LayoutBuilder, Member, StdMember};

// ── Basic construction ────────────────────────────────────────────

#[test]
fn empty_layout_has_no_slots() {
    let layout = LayoutBuilder::new().freeze();
    assert_eq!(layout.slot_count(), 0);
    assert!(layout.is_empty());
    assert!(layout.get("a").is_none());
}

#[test]
fn insert_assigns_slots_in_order() {
    let mut b = LayoutBuilder::new();
    b.insert("a", StdMember::int(0));
    b.insert("b", StdMember::text(""));
    b.insert("c", StdMember::boolean(false));
    let layout = b.freeze();

    assert_eq!(layout.slot_count(), 3);
    assert_eq!(layout.slot_of("a"), Some(0));
    assert_eq!(layout.slot_of("b"), Some(1));
    assert_eq!(layout.slot_of("c"), Some(2));
}

#[test]
fn names_iterate_in_slot_order() {
    let mut b = LayoutBuilder::new();
    b.insert("z", StdMember::int(0));
    b.insert("a", StdMember::int(0));
    b.insert("m", StdMember::int(0));
    let layout = b.freeze();

    let names: Vec<&str> = layout.names().collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

// ── Override semantics ────────────────────────────────────────────

#[test]
fn reinsert_replaces_descriptor() {
    let mut b = LayoutBuilder::new();
    b.insert("a", StdMember::int(0));
    b.insert("a", StdMember::int(99));
    let layout = b.freeze();

    assert_eq!(layout.slot_count(), 1);
    let entry = layout.get("a").unwrap();
    assert_eq!(entry.member().default_value(), json!(99));
}

#[test]
fn reinsert_keeps_slot_position() {
    let mut b = LayoutBuilder::new();
    b.insert("a", StdMember::int(0));
    b.insert("b", StdMember::int(0));
    b.insert("a", StdMember::text("moved?"));
    let layout = b.freeze();

    assert_eq!(layout.slot_of("a"), Some(0));
    assert_eq!(layout.slot_of("b"), Some(1));
}

// ── Merge ─────────────────────────────────────────────────────────

#[test]
fn merge_copies_all_entries() {
    let mut base = LayoutBuilder::new();
    base.insert("x", StdMember::int(1));
    base.insert("y", StdMember::text("y"));
    let base = base.freeze();

    let mut b = LayoutBuilder::new();
    b.merge(&base);
    b.insert("z", StdMember::boolean(true));
    let layout = b.freeze();

    assert_eq!(layout.slot_count(), 3);
    assert!(layout.contains("x"));
    assert!(layout.contains("y"));
    assert!(layout.contains("z"));
}

#[test]
fn later_merge_overrides_earlier() {
    let mut far = LayoutBuilder::new();
    far.insert("a", StdMember::int(1));
    let far = far.freeze();

    let mut near = LayoutBuilder::new();
    near.insert("a", StdMember::int(2));
    let near = near.freeze();

    let mut b = LayoutBuilder::new();
    b.merge(&far);
    b.merge(&near);
    let layout = b.freeze();

    assert_eq!(layout.slot_count(), 1);
    assert_eq!(layout.get("a").unwrap().member().default_value(), json!(2));
}

#[test]
fn own_insert_overrides_merge() {
    let mut inherited = LayoutBuilder::new();
    inherited.insert("a", StdMember::int(1));
    let inherited = inherited.freeze();

    let mut b = LayoutBuilder::new();
    b.merge(&inherited);
    b.insert("a", StdMember::int(3));
    let layout = b.freeze();

    assert_eq!(layout.get("a").unwrap().member().default_value(), json!(3));
}

// ── Entry access ──────────────────────────────────────────────────

#[test]
fn entry_at_matches_slot_of() {
    let mut b = LayoutBuilder::new();
    b.insert("a", StdMember::int(0));
    b.insert("b", StdMember::text("b"));
    let layout = b.freeze();

    let slot = layout.slot_of("b").unwrap();
    assert_eq!(layout.entry_at(slot).name(), "b");
}
