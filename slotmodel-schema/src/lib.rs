//! Class declarations, member descriptors, and layout maps for slotmodel.
//!
//! This crate implements the definition-time half of the object model:
//!
//! - [`Member`] — the descriptor contract for one named, typed attribute
//!   slot, with [`StdMember`] as the standard kind-checked implementation
//! - [`ClassSpec`] — the literal declaration of one class body
//! - [`ClassRegistry`] — the explicit registration step that walks the
//!   ancestor chain, merges declarations with most-derived-wins precedence,
//!   and freezes the result into a per-class [`LayoutMap`]
//!
//! A layout map tells the object layer exactly how many storage slots an
//! instance needs and which slot each member name occupies. It is built
//! once, at registration, and shared read-only thereafter.

mod error;
mod layout;
mod member;
mod registry;
mod spec;

pub use error::{SchemaError, SchemaResult, ValidationError};
pub use layout::{LayoutBuilder, LayoutEntry, LayoutMap};
pub use member::{Member, StdMember};
pub use registry::{ClassDef, ClassRegistry};
pub use spec::ClassSpec;
