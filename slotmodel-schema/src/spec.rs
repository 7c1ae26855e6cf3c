//! Class declarations.
//!
//! A [`ClassSpec`] is the literal content of one class body: its name, its
//! parent, the members declared directly on it, and the storage capabilities
//! it opts into. The registry turns a spec into a registered class with a
//! frozen layout map.

use crate::Member;
use slotmodel_types::ClassId;
use std::sync::Arc;

/// Declaration of one class, prior to registration.
///
/// Instances of the registered class get exactly one storage slot per
/// effective member and nothing else. A per-instance dynamic attribute map
/// and extra fixed slots are strictly opt-in, and both capabilities are
/// inherited by subclasses.
pub struct ClassSpec {
    pub(crate) name: String,
    pub(crate) parent: Option<ClassId>,
    pub(crate) members: Vec<(String, Arc<dyn Member>)>,
    pub(crate) dynamic_store: bool,
    pub(crate) extra_slots: Vec<String>,
}

impl ClassSpec {
    /// Starts a declaration for a root class (no parent).
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            members: Vec::new(),
            dynamic_store: false,
            extra_slots: Vec::new(),
        }
    }

    /// Starts a declaration for a subclass of an already registered class.
    #[must_use]
    pub fn derive(name: &str, parent: ClassId) -> Self {
        Self {
            parent: Some(parent),
            ..Self::new(name)
        }
    }

    /// Declares a member directly on this class body. Declaration order is
    /// preserved and determines slot order for new names.
    #[must_use]
    pub fn member(mut self, name: &str, member: Arc<dyn Member>) -> Self {
        self.members.push((name.to_string(), member));
        self
    }

    /// Opts into a per-instance dynamic attribute map.
    #[must_use]
    pub fn with_dynamic_store(mut self) -> Self {
        self.dynamic_store = true;
        self
    }

    /// Declares a named fixed storage slot outside the member system.
    /// Extra slots are unvalidated and have no default.
    #[must_use]
    pub fn extra_slot(mut self, name: &str) -> Self {
        self.extra_slots.push(name.to_string());
        self
    }

    /// The declared class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
