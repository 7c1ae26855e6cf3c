//! The object state protocol: capture, restore, and reduction.
//!
//! A snapshot is the complete restorable view of one instance: every
//! dynamic attribute, every set extra slot, and every layout-map member read
//! through the standard read path. Restoring writes every snapshot entry
//! back through the standard write path, so member validation applies
//! exactly as it would to normal assignment.
//!
//! The protocol is a trait so a class family can override capture or
//! restore wholesale; [`DefaultProtocol`] is the base behavior. A
//! persistence framework talks to this module through [`reduce`] and
//! [`rebuild`], which pair a snapshot with the class name and any
//! allocation arguments the protocol extracts.

use crate::object::class_def;
use crate::{Object, ObjectError, ObjectResult};
use serde::{Deserialize, Serialize};
use slotmodel_schema::ClassRegistry;
use slotmodel_types::Value;
use std::collections::BTreeMap;

/// A transient, restorable snapshot of one instance's attribute values.
///
/// Serializes as a plain JSON map; the byte encoding around it is the
/// persistence framework's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<String, Value>);

impl Snapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute value, overwriting any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// The captured value for an attribute name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Snapshot {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Captures a complete snapshot of an instance.
///
/// Assembly order: dynamic attributes, then set extra slots, then every
/// layout-map member. Members are read through the standard read path, so
/// unmaterialized defaults materialize here (an observable but idempotent
/// side effect). Unset extra slots are skipped; they have no value to
/// capture.
pub fn capture_state(registry: &ClassRegistry, object: &mut Object) -> ObjectResult<Snapshot> {
    let mut snapshot = Snapshot::new();
    for (name, value) in object.dynamic_attrs() {
        snapshot.insert(name, value.clone());
    }

    let def = class_def(registry, object.class())?;
    for (slot, name) in def.extra_slots().iter().enumerate() {
        if let Some(value) = object.extra_value(slot) {
            snapshot.insert(name.clone(), value.clone());
        }
    }

    let member_names: Vec<String> = def.layout().names().map(str::to_string).collect();
    for name in member_names {
        let value = object.get(registry, &name)?.clone();
        snapshot.insert(name, value);
    }
    Ok(snapshot)
}

/// Restores a snapshot into a freshly allocated instance.
///
/// Every entry is assigned through the standard write path: member
/// validation applies, unknown names fail with
/// [`ObjectError::UnknownAttribute`]. Restore is not atomic: the first
/// failure stops it and leaves the instance partially restored.
pub fn restore_state(
    registry: &ClassRegistry,
    object: &mut Object,
    snapshot: Snapshot,
) -> ObjectResult<()> {
    for (name, value) in snapshot {
        object.set(registry, &name, value)?;
    }
    Ok(())
}

/// Capture/restore behavior for a class family.
///
/// Meant to be overridden wholesale, not composed: implement the methods
/// you need and the defaults cover the rest. [`DefaultProtocol`] uses all
/// defaults.
pub trait StateProtocol {
    /// Captures the instance's state. See [`capture_state`].
    fn capture(&self, registry: &ClassRegistry, object: &mut Object) -> ObjectResult<Snapshot> {
        capture_state(registry, object)
    }

    /// Restores state into a raw-allocated instance. See [`restore_state`].
    fn restore(
        &self,
        registry: &ClassRegistry,
        object: &mut Object,
        snapshot: Snapshot,
    ) -> ObjectResult<()> {
        restore_state(registry, object, snapshot)
    }

    /// Positional arguments a custom allocation step needs when this
    /// instance is reconstructed. Default: none.
    fn new_args(&self, registry: &ClassRegistry, object: &Object) -> Vec<Value> {
        let _ = (registry, object);
        Vec::new()
    }
}

/// The base state protocol: generic capture and restore, no allocation
/// arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProtocol;

impl StateProtocol for DefaultProtocol {}

/// What a persistence framework needs to reconstruct an instance: the class
/// name, the allocation arguments, and the captured state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reduction {
    pub class: String,
    pub new_args: Vec<Value>,
    pub state: Snapshot,
}

/// Reduces an instance to a [`Reduction`] via the given protocol.
pub fn reduce(
    protocol: &dyn StateProtocol,
    registry: &ClassRegistry,
    object: &mut Object,
) -> ObjectResult<Reduction> {
    let class = class_def(registry, object.class())?.name().to_string();
    let new_args = protocol.new_args(registry, object);
    let state = protocol.capture(registry, object)?;
    Ok(Reduction {
        class,
        new_args,
        state,
    })
}

/// Rebuilds an instance from a [`Reduction`]: class lookup by name, raw
/// allocation, then restore through the protocol. Never runs normal
/// constructor logic.
pub fn rebuild(
    protocol: &dyn StateProtocol,
    registry: &ClassRegistry,
    reduction: Reduction,
) -> ObjectResult<Object> {
    let def = registry
        .class_named(&reduction.class)
        .ok_or_else(|| ObjectError::UnknownClassName(reduction.class.clone()))?;
    let mut object = Object::allocate_uninitialized(registry, def.id())?;
    protocol.restore(registry, &mut object, reduction.state)?;
    Ok(object)
}
