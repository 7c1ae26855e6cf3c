//! Layout maps: the frozen, per-class view of declared members.
//!
//! A layout map is built exactly once, when a class is registered, and is
//! never mutated afterwards. It assigns every member name a slot index so
//! the object layer can size instance storage exactly: one slot per entry,
//! no over-allocation and no fallback dictionary.

use crate::Member;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One entry in a layout map: a member name bound to its descriptor.
#[derive(Clone)]
pub struct LayoutEntry {
    name: String,
    member: Arc<dyn Member>,
}

impl LayoutEntry {
    /// The member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptor resolved for this name (most-derived declaration wins).
    #[must_use]
    pub fn member(&self) -> &Arc<dyn Member> {
        &self.member
    }
}

impl fmt::Debug for LayoutEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The frozen mapping from member name to slot index and descriptor.
///
/// Invariants, established by [`LayoutBuilder`] and preserved by
/// immutability:
/// - at most one entry per name;
/// - when a name is declared at several levels of an ancestor chain, the
///   entry holds the most-derived declaration;
/// - re-declaring an inherited name keeps the name's original slot index,
///   so base-class slot indices are stable across subclasses.
#[derive(Debug, Clone, Default)]
pub struct LayoutMap {
    entries: Vec<LayoutEntry>,
    index: HashMap<String, usize>,
}

impl LayoutMap {
    /// Number of storage slots an instance of this class needs.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    /// True when the class declares no members anywhere in its chain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The slot index assigned to a member name.
    #[must_use]
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// The entry for a member name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LayoutEntry> {
        self.slot_of(name).map(|slot| &self.entries[slot])
    }

    /// The entry stored at a slot index.
    #[must_use]
    pub fn entry_at(&self, slot: usize) -> &LayoutEntry {
        &self.entries[slot]
    }

    /// True when the layout contains a member of this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates entries in slot order.
    pub fn entries(&self) -> impl Iterator<Item = &LayoutEntry> {
        self.entries.iter()
    }

    /// Iterates member names in slot order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

/// Accumulates member declarations across an ancestor chain, then freezes
/// the result into a [`LayoutMap`].
///
/// Merge ancestors root-to-derived, then the class's own declarations last;
/// later insertions of an existing name overwrite the descriptor in place,
/// which yields most-derived-wins precedence with stable slot assignment.
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    entries: Vec<LayoutEntry>,
    index: HashMap<String, usize>,
}

impl LayoutBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one declaration. An existing name keeps its slot; the
    /// descriptor is replaced.
    pub fn insert(&mut self, name: &str, member: Arc<dyn Member>) {
        match self.index.get(name) {
            Some(&slot) => self.entries[slot].member = member,
            None => {
                let slot = self.entries.len();
                self.entries.push(LayoutEntry {
                    name: name.to_string(),
                    member,
                });
                self.index.insert(name.to_string(), slot);
            }
        }
    }

    /// Merges a previously frozen layout, entry by entry in its slot order.
    pub fn merge(&mut self, layout: &LayoutMap) {
        for entry in layout.entries() {
            self.insert(&entry.name, Arc::clone(&entry.member));
        }
    }

    /// Freezes the accumulated declarations.
    #[must_use]
    pub fn freeze(self) -> LayoutMap {
        LayoutMap {
            entries: self.entries,
            index: self.index,
        }
    }
}
