//! Player state and elimination tracking.

use serde::{Deserialize, Serialize};

/// A player in the game.
///
/// Players are created once at game construction and never removed. Losing
/// a battle does not delete a player; it turns them into a spectator, which
/// permanently excludes them from attacker/defender lookups while leaving
/// any land they still own recorded under their name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Not enforced unique; lookups resolve the first active
    /// match in roster order.
    name: String,
    /// Whether this player has been eliminated as a combatant.
    spectator: bool,
}

impl Player {
    /// Create a new active player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spectator: false,
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this player has been eliminated as a combatant.
    pub fn is_spectator(&self) -> bool {
        self.spectator
    }

    /// Eliminate this player. One-way: a spectator never becomes active
    /// again.
    pub fn eliminate(&mut self) {
        self.spectator = true;
    }
}
