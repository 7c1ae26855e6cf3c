//! Instances with exact slot storage.
//!
//! An object's storage is sized from its class's frozen layout map: one slot
//! per effective member, one fixed slot per declared extra slot, and a
//! dynamic attribute map only when the class opted in. Nothing is
//! over-allocated and there is no fallback dictionary.
//!
//! Member slots start unmaterialized; the first read through [`Object::get`]
//! materializes the descriptor's default into the slot. Writes go through
//! descriptor validation. Both paths are the "standard" access paths the
//! state protocol uses, so capture and restore observe exactly what normal
//! attribute access observes.

use crate::{ObjectError, ObjectResult};
use slotmodel_schema::{ClassDef, ClassRegistry};
use slotmodel_types::{ClassId, Value};
use std::collections::BTreeMap;

/// One instance of a registered class.
///
/// Carries its class handle and its storage; all class structure (layout,
/// extra slot names, capabilities) is read from the registry on each access,
/// so an object is only meaningful together with the registry that defined
/// its class.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: ClassId,
    slots: Box<[Option<Value>]>,
    extra: Box<[Option<Value>]>,
    dynamic: Option<BTreeMap<String, Value>>,
}

impl Object {
    /// Raw allocation: storage sized from the layout map, every member slot
    /// unmaterialized, no constructor logic. This is the path restore and
    /// rebuild use.
    pub fn allocate_uninitialized(registry: &ClassRegistry, class: ClassId) -> ObjectResult<Self> {
        let def = class_def(registry, class)?;
        Ok(Self {
            class,
            slots: vec![None; def.layout().slot_count()].into_boxed_slice(),
            extra: vec![None; def.extra_slots().len()].into_boxed_slice(),
            dynamic: def.dynamic_store().then(BTreeMap::new),
        })
    }

    /// Normal construction. Storage is identical to raw allocation; member
    /// defaults stay lazy until first read.
    pub fn new(registry: &ClassRegistry, class: ClassId) -> ObjectResult<Self> {
        Self::allocate_uninitialized(registry, class)
    }

    /// The instance's class handle.
    #[must_use]
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Number of member slots (equals the layout map's slot count).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether this instance carries a dynamic attribute map.
    #[must_use]
    pub fn has_dynamic_store(&self) -> bool {
        self.dynamic.is_some()
    }

    /// Reads an attribute through the standard read path.
    ///
    /// Resolution order: member slot (materializing the descriptor default
    /// on first read), then extra slot, then dynamic store. An unset extra
    /// slot or absent dynamic key is an [`ObjectError::UnknownAttribute`].
    pub fn get(&mut self, registry: &ClassRegistry, name: &str) -> ObjectResult<&Value> {
        let def = class_def(registry, self.class)?;
        if let Some(slot) = def.layout().slot_of(name) {
            let entry = def.layout().entry_at(slot);
            return Ok(self.slots[slot].get_or_insert_with(|| entry.member().default_value()));
        }
        if let Some(slot) = def.extra_slot_of(name) {
            return self.extra[slot]
                .as_ref()
                .ok_or_else(|| unknown_attribute(def, name));
        }
        if let Some(dynamic) = &self.dynamic
            && let Some(value) = dynamic.get(name)
        {
            return Ok(value);
        }
        Err(unknown_attribute(def, name))
    }

    /// Reads an attribute without materializing defaults.
    ///
    /// Returns `None` for unmaterialized member slots, unset extra slots,
    /// absent dynamic keys, and undeclared names alike.
    #[must_use]
    pub fn peek(&self, registry: &ClassRegistry, name: &str) -> Option<&Value> {
        let def = registry.class(self.class)?;
        if let Some(slot) = def.layout().slot_of(name) {
            return self.slots[slot].as_ref();
        }
        if let Some(slot) = def.extra_slot_of(name) {
            return self.extra[slot].as_ref();
        }
        self.dynamic.as_ref()?.get(name)
    }

    /// Writes an attribute through the standard write path.
    ///
    /// Members validate through their descriptor; a rejection propagates as
    /// [`ObjectError::Validation`] and leaves the slot untouched. Extra
    /// slots store unvalidated. Undeclared names land in the dynamic store
    /// when the class opted in, and fail otherwise.
    pub fn set(&mut self, registry: &ClassRegistry, name: &str, value: Value) -> ObjectResult<()> {
        let def = class_def(registry, self.class)?;
        if let Some(slot) = def.layout().slot_of(name) {
            let entry = def.layout().entry_at(slot);
            entry
                .member()
                .validate(&value)
                .map_err(|source| ObjectError::Validation {
                    member: name.to_string(),
                    source,
                })?;
            self.slots[slot] = Some(value);
            return Ok(());
        }
        if let Some(slot) = def.extra_slot_of(name) {
            self.extra[slot] = Some(value);
            return Ok(());
        }
        if let Some(dynamic) = &mut self.dynamic {
            dynamic.insert(name.to_string(), value);
            return Ok(());
        }
        Err(unknown_attribute(def, name))
    }

    /// Removes a dynamic attribute. Members and extra slots cannot be
    /// removed, only overwritten.
    pub fn remove_dynamic(&mut self, name: &str) -> Option<Value> {
        self.dynamic.as_mut()?.remove(name)
    }

    /// Iterates the dynamic attributes, if the instance carries a store.
    pub fn dynamic_attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.dynamic
            .iter()
            .flat_map(|d| d.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub(crate) fn extra_value(&self, slot: usize) -> Option<&Value> {
        self.extra[slot].as_ref()
    }
}

pub(crate) fn class_def(registry: &ClassRegistry, class: ClassId) -> ObjectResult<&ClassDef> {
    registry.class(class).ok_or(ObjectError::UnknownClass(class))
}

fn unknown_attribute(def: &ClassDef, name: &str) -> ObjectError {
    ObjectError::UnknownAttribute {
        class: def.name().to_string(),
        name: name.to_string(),
    }
}
