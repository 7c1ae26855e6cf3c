//! The class registry.
//!
//! Registration is the explicit, one-shot build step that stands in for
//! class-definition time: it resolves the ancestor chain, merges member
//! declarations into a frozen [`LayoutMap`], and records the class. A parent
//! must be registered before any subclass can reference it, so ancestor
//! chains are acyclic by construction and a class is fully defined before
//! the first instance of it can exist.

use crate::{ClassSpec, LayoutBuilder, LayoutMap, SchemaError, SchemaResult};
use slotmodel_types::ClassId;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A registered class: frozen layout plus resolved storage capabilities.
#[derive(Debug, Clone)]
pub struct ClassDef {
    id: ClassId,
    name: String,
    parent: Option<ClassId>,
    ancestors: Vec<ClassId>,
    layout: Arc<LayoutMap>,
    dynamic_store: bool,
    extra_slots: Vec<String>,
}

impl ClassDef {
    /// The handle issued at registration.
    #[must_use]
    pub fn id(&self) -> ClassId {
        self.id
    }

    /// The class name, unique within the registry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The direct parent, if any.
    #[must_use]
    pub fn parent(&self) -> Option<ClassId> {
        self.parent
    }

    /// The ancestor chain, root first, excluding this class.
    #[must_use]
    pub fn ancestors(&self) -> &[ClassId] {
        &self.ancestors
    }

    /// The frozen layout map.
    #[must_use]
    pub fn layout(&self) -> &Arc<LayoutMap> {
        &self.layout
    }

    /// Whether instances carry a dynamic attribute map (own or inherited
    /// opt-in).
    #[must_use]
    pub fn dynamic_store(&self) -> bool {
        self.dynamic_store
    }

    /// Effective extra slot names, root-first, deduplicated.
    #[must_use]
    pub fn extra_slots(&self) -> &[String] {
        &self.extra_slots
    }

    /// The storage index of an extra slot name.
    #[must_use]
    pub fn extra_slot_of(&self, name: &str) -> Option<usize> {
        self.extra_slots.iter().position(|s| s == name)
    }
}

/// Registry of class definitions.
///
/// Mutated only by [`register`](Self::register); every lookup is read-only.
/// Layout maps are shared out as `Arc` and never change after the freeze.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: Vec<ClassDef>,
    by_name: HashMap<String, ClassId>,
}

impl ClassRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class, building and freezing its layout map.
    ///
    /// The merge walks the ancestor chain root-to-derived, folding each
    /// ancestor's layout map into the working mapping, then folds in the
    /// class's own declarations last. Same-named entries overwrite, which
    /// gives most-derived-wins override precedence; the walk order is fixed
    /// by the chain, so two identical declarations always freeze into
    /// structurally identical layouts.
    pub fn register(&mut self, spec: ClassSpec) -> SchemaResult<ClassId> {
        if self.by_name.contains_key(&spec.name) {
            return Err(SchemaError::DuplicateClass(spec.name));
        }

        let parent = match spec.parent {
            Some(pid) => Some(self.class(pid).ok_or(SchemaError::UnknownParent {
                class: spec.name.clone(),
                parent: pid,
            })?),
            None => None,
        };

        let mut ancestors = Vec::new();
        if let Some(parent) = parent {
            ancestors.extend_from_slice(parent.ancestors());
            ancestors.push(parent.id());
        }

        let mut builder = LayoutBuilder::new();
        for ancestor in &ancestors {
            // Chain ids are always valid: they came from a registered parent.
            if let Some(def) = self.class(*ancestor) {
                builder.merge(def.layout());
            }
        }
        for (name, member) in &spec.members {
            builder.insert(name, Arc::clone(member));
        }
        let layout = builder.freeze();

        let mut dynamic_store = spec.dynamic_store;
        let mut extra_slots = Vec::new();
        if let Some(parent) = parent {
            dynamic_store |= parent.dynamic_store();
            extra_slots.extend_from_slice(parent.extra_slots());
        }
        for slot in &spec.extra_slots {
            if !extra_slots.contains(slot) {
                extra_slots.push(slot.clone());
            }
        }
        for slot in &extra_slots {
            if layout.contains(slot) {
                return Err(SchemaError::SlotCollision {
                    class: spec.name.clone(),
                    name: slot.clone(),
                });
            }
        }

        let id = ClassId::from_index(self.classes.len() as u32);
        debug!(
            class = %spec.name,
            id = %id,
            slots = layout.slot_count(),
            "class registered"
        );
        self.by_name.insert(spec.name.clone(), id);
        self.classes.push(ClassDef {
            id,
            name: spec.name,
            parent: spec.parent,
            ancestors,
            layout: Arc::new(layout),
            dynamic_store,
            extra_slots,
        });
        Ok(id)
    }

    /// Looks up a class by handle.
    #[must_use]
    pub fn class(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.index() as usize)
    }

    /// Looks up a class by name.
    #[must_use]
    pub fn class_named(&self, name: &str) -> Option<&ClassDef> {
        self.by_name.get(name).and_then(|id| self.class(*id))
    }

    /// Looks up a class by name, erroring when absent.
    pub fn resolve(&self, name: &str) -> SchemaResult<&ClassDef> {
        self.class_named(name)
            .ok_or_else(|| SchemaError::UnknownClass(name.to_string()))
    }

    /// Number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates classes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.iter()
    }
}
