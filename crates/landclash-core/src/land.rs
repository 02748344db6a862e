//! Land parcels and ownership tracking.

use crate::types::{LandId, PlayerId};
use serde::{Deserialize, Serialize};

/// An atomic territory unit with at most one current owner.
///
/// Ownership is an index into the game's roster rather than a reference, so
/// land can be stored and serialized independently of player data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Land {
    /// Immutable identifier, assigned sequentially from 0.
    id: LandId,
    /// Index of the owning player, if any.
    owner: Option<PlayerId>,
}

impl Land {
    /// Create an unowned land parcel.
    pub fn new(id: LandId) -> Self {
        Self { id, owner: None }
    }

    /// The parcel's identifier.
    pub fn id(&self) -> LandId {
        self.id
    }

    /// The current owner, if any.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Unconditionally replace the current owner.
    pub fn set_owner(&mut self, player: PlayerId) {
        self.owner = Some(player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_land_is_unowned() {
        let land = Land::new(3);
        assert_eq!(land.id(), 3);
        assert_eq!(land.owner(), None);
    }

    #[test]
    fn test_set_owner_replaces() {
        let mut land = Land::new(0);
        land.set_owner(1);
        assert_eq!(land.owner(), Some(1));
        land.set_owner(2);
        assert_eq!(land.owner(), Some(2));
    }
}
