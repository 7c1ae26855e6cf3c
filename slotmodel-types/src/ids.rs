//! Class handles used throughout slotmodel.
//!
//! A `ClassId` is a dense index into a class registry, assigned in
//! registration order. It is stable for the lifetime of the registry and
//! cheap to copy, but carries no meaning outside the registry that issued it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Handle to a registered class.
///
/// Issued by a class registry at registration time. Because parents must be
/// registered before their subclasses, a class's id is always greater than
/// the ids of all of its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(u32);

impl ClassId {
    /// Creates a class id from a raw registry index.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw registry index.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for ClassId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(raw.parse()?))
    }
}
