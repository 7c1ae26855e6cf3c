//! Core type definitions for slotmodel.
//!
//! This crate defines the primitives shared by the schema and object layers:
//! - Class handles (dense registry indices)
//! - Value-kind classification over `serde_json::Value`
//!
//! Domain-specific descriptors, layouts, and instances belong to the
//! `slotmodel-schema` and `slotmodel-object` crates, not here.

mod ids;
mod value;

pub use ids::ClassId;
pub use value::{Value, ValueKind};
