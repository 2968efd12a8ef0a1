//! `EntityId`: a strong, zero-cost handle for topological entities
//!
//! Every entity in the network (vertex, edge, chain, face, block) is
//! identified by a unique, opaque handle. `EntityId` wraps a nonzero `u64` so
//! that 0 stays reserved as an invalid/sentinel value, and so the niche makes
//! `Option<EntityId>` the same size as a bare id; edge endpoint slots rely
//! on this.
//!
//! Ids are never reused: the network hands them out from a monotonically
//! increasing counter, so a stale handle to a collected entity can be
//! detected instead of silently aliasing a new one.

use crate::net_error::BrepNetError;
use std::{fmt, num::NonZeroU64};

/// Opaque, non-zero handle to a topological entity.
///
/// `repr(transparent)`: same ABI and alignment as `NonZeroU64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct EntityId(NonZeroU64);

impl EntityId {
    /// Creates an `EntityId` from a raw `u64`, rejecting the reserved 0.
    #[inline]
    pub fn new(raw: u64) -> Result<Self, BrepNetError> {
        NonZeroU64::new(raw)
            .map(EntityId)
            .ok_or(BrepNetError::InvalidEntityId)
    }

    /// Returns the raw `u64` behind this handle.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityId").field(&self.get()).finish()
    }
}

/// Prints only the raw integer, without wrapper text.
impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(EntityId::new(0), Err(BrepNetError::InvalidEntityId));
    }

    #[test]
    fn new_and_get() {
        let id = EntityId::new(42).unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn debug_and_display() {
        let id = EntityId::new(7).unwrap();
        assert_eq!(format!("{id:?}"), "EntityId(7)");
        assert_eq!(format!("{id}"), "7");
    }

    #[test]
    fn ordering_and_hash() {
        let a = EntityId::new(1).unwrap();
        let b = EntityId::new(2).unwrap();
        assert!(a < b);
        let mut set = std::collections::HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn max_value() {
        let id = EntityId::new(u64::MAX).unwrap();
        assert_eq!(id.get(), u64::MAX);
    }
}
