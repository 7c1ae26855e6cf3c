//! Instances, exact slot storage, and the state protocol for slotmodel.
//!
//! The runtime half of the object model:
//!
//! - [`Object`] — an instance whose storage is sized exactly from its
//!   class's layout map, with raw allocation
//!   ([`Object::allocate_uninitialized`]) as a distinct path from normal
//!   construction
//! - [`Snapshot`] + [`StateProtocol`] — generic capture/restore of an
//!   instance's complete attribute state
//! - [`Reduction`], [`reduce`], [`rebuild`] — the surface a persistence
//!   framework calls to serialize and reconstruct instances
//!
//! Everything here is synchronous and single-threaded; a consistent
//! snapshot under concurrent mutation is the caller's responsibility.

mod error;
mod object;
mod state;

pub use error::{ObjectError, ObjectResult};
pub use object::Object;
pub use state::{
    DefaultProtocol, Reduction, Snapshot, StateProtocol, capture_state, reduce, rebuild,
    restore_state,
};
