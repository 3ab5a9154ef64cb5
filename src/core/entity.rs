//! Card instance identification.
//!
//! Every card instance in a match carries an `InstanceId` that is distinct
//! from its catalog character id. Two copies of the same character (or a
//! Phantom duplicate) are different instances, and effects that need to
//! find "that exact card" (return-to-hand, removal from hand on play) look
//! it up by instance id, never by value.
//!
//! ```
//! use rust_triad::core::InstanceIds;
//!
//! let mut ids = InstanceIds::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Monotonic allocator for instance IDs.
///
/// Lives inside `GameState` so abilities that mint cards mid-match
/// (duplication) never collide with cards dealt at match start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIds {
    next: u32,
}

impl InstanceIds {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator that continues after `last`.
    #[must_use]
    pub fn after(last: InstanceId) -> Self {
        Self { next: last.0 + 1 }
    }

    /// Allocate the next ID.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Peek at the ID the next `alloc` will return.
    #[must_use]
    pub fn peek(&self) -> InstanceId {
        InstanceId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = InstanceIds::new();
        assert_eq!(ids.alloc(), InstanceId(0));
        assert_eq!(ids.alloc(), InstanceId(1));
        assert_eq!(ids.peek(), InstanceId(2));
    }

    #[test]
    fn test_after() {
        let mut ids = InstanceIds::after(InstanceId(41));
        assert_eq!(ids.alloc(), InstanceId(42));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(5)), "Card#5");
    }

    #[test]
    fn test_serialization() {
        let id = InstanceId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
