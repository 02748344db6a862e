//! Game settings and configuration.

use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for a game session.
///
/// The board size and roster are parameters rather than constants so a
/// front end can supply its own; [`GameSettings::default`] reproduces the
/// classic board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Number of land parcels on the board.
    pub land_count: u32,
    /// Player roster in seating order.
    pub player_names: Vec<String>,
}

impl GameSettings {
    /// Create settings with the given board size and roster.
    pub fn new(land_count: u32, player_names: Vec<String>) -> Self {
        Self {
            land_count,
            player_names,
        }
    }

    /// Validate settings and return any errors.
    ///
    /// Construction refuses invalid settings up front; an empty roster in
    /// particular must never reach the random ownership assignment.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.land_count == 0 {
            return Err(SettingsError::NoLands);
        }
        if self.player_names.is_empty() {
            return Err(SettingsError::NoPlayers);
        }
        if self.player_names.len() > usize::from(PlayerId::MAX) + 1 {
            return Err(SettingsError::TooManyPlayers);
        }
        Ok(())
    }
}

impl Default for GameSettings {
    /// The classic board: ten lands, four players.
    fn default() -> Self {
        Self::new(
            10,
            vec![
                "Alice".to_string(),
                "Bob".to_string(),
                "Charlie".to_string(),
                "Diana".to_string(),
            ],
        )
    }
}

/// Errors detected by [`GameSettings::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The board must hold at least one land parcel.
    #[error("at least one land parcel is required")]
    NoLands,
    /// The roster must name at least one player.
    #[error("at least one player is required")]
    NoPlayers,
    /// Player indices are 8-bit; the roster cannot exceed 256 entries.
    #[error("player roster cannot exceed 256 entries")]
    TooManyPlayers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert_eq!(settings.land_count, 10);
        assert_eq!(settings.player_names.len(), 4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_lands_rejected() {
        let settings = GameSettings::new(0, vec!["Alice".to_string()]);
        assert_eq!(settings.validate(), Err(SettingsError::NoLands));
    }

    #[test]
    fn test_empty_roster_rejected() {
        let settings = GameSettings::new(5, Vec::new());
        assert_eq!(settings.validate(), Err(SettingsError::NoPlayers));
    }

    #[test]
    fn test_oversized_roster_rejected() {
        let names = (0..257).map(|i| format!("Player {i}")).collect();
        let settings = GameSettings::new(5, names);
        assert_eq!(settings.validate(), Err(SettingsError::TooManyPlayers));
    }

    #[test]
    fn test_single_player_single_land_allowed() {
        let settings = GameSettings::new(1, vec!["Alice".to_string()]);
        assert!(settings.validate().is_ok());
    }
}
