//! Root game state and the per-turn command cycle.

use crate::battle::{resolve_battle, BattleContext, BattleOutcome};
use crate::land::Land;
use crate::player::Player;
use crate::rng::SeededRng;
use crate::settings::{GameSettings, SettingsError};
use crate::types::{LandId, PlayerId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phases of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Game is in progress.
    #[default]
    Playing,
    /// Game has ended with a winner.
    Ended,
}

/// A single turn request: attacker and defender by name, land by id.
///
/// This is the whole external command surface; a front end reads one of
/// these per turn and feeds it to [`GameState::submit_turn`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCommand {
    /// Name of the player attempting the seizure.
    pub attacker: String,
    /// Name of the player expected to own the contested land.
    pub defender: String,
    /// Identifier of the contested land.
    pub land: LandId,
}

/// What happened in a successfully resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The resolved battle.
    pub outcome: BattleOutcome,
    /// Set when this turn ended the game: the sole remaining active player.
    pub winner: Option<PlayerId>,
}

/// Errors from submitting a turn.
///
/// All variants are recoverable; a rejected command leaves the state
/// untouched, and resubmitting it yields the same error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game already has a winner.
    #[error("the game has already ended")]
    GameOver,
    /// No active player matches the given name. Spectators are invisible
    /// to this lookup.
    #[error("no active player named {name:?}")]
    PlayerNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// No land parcel carries the given id.
    #[error("no land with id {id}")]
    LandNotFound {
        /// The id that failed to resolve.
        id: LandId,
    },
    /// The named defender is not the current owner of the contested land.
    #[error("{name:?} does not own land {id}")]
    DefenderDoesNotOwnLand {
        /// The defender named in the command.
        name: String,
        /// The contested land.
        id: LandId,
    },
}

/// The complete state of a game at any point in time.
///
/// The state owns the canonical storage for players and lands; lands refer
/// to their owner by roster index, never by reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Game configuration (immutable after construction).
    settings: GameSettings,
    /// All players, in roster order. Fixed at construction; only the
    /// spectator flag ever changes.
    players: Vec<Player>,
    /// All lands, indexed by id.
    lands: Vec<Land>,
    /// Game phase.
    phase: GamePhase,
    /// Victor (if the game has ended).
    winner: Option<PlayerId>,
}

impl GameState {
    /// Create a game: validate settings, build the board, and randomly
    /// distribute every land among the roster.
    ///
    /// Each land is assigned a uniformly random owner in land order, so a
    /// given seed always produces the same board. Nothing guarantees that
    /// every player receives land.
    pub fn new(settings: GameSettings, rng: &mut SeededRng) -> Result<Self, SettingsError> {
        settings.validate()?;

        let players: Vec<Player> = settings
            .player_names
            .iter()
            .cloned()
            .map(Player::new)
            .collect();
        let mut lands: Vec<Land> = (0..settings.land_count).map(Land::new).collect();

        let player_count = players.len() as u32;
        for land in &mut lands {
            land.set_owner(rng.next_range(player_count) as PlayerId);
        }

        Ok(Self {
            settings,
            players,
            lands,
            phase: GamePhase::Playing,
            winner: None,
        })
    }

    /// Game configuration.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// All players, in roster order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// All lands, in id order.
    pub fn lands(&self) -> &[Land] {
        &self.lands
    }

    /// Current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Check if the game has ended.
    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// The sole surviving active player once the game has ended.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Get a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(usize::from(id))
    }

    /// Get a land by id.
    pub fn land(&self, id: LandId) -> Option<&Land> {
        self.lands.get(id as usize)
    }

    /// Resolve a name among non-spectator players.
    ///
    /// A spectator with a matching name is treated as not found. Names are
    /// not enforced unique; the first active match in roster order wins.
    pub fn find_active_player(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| !p.is_spectator() && p.name() == name)
            .map(|i| i as PlayerId)
    }

    /// Players still eligible to fight, in roster order.
    pub fn active_players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_spectator())
            .map(|(i, p)| (i as PlayerId, p))
    }

    /// Number of players still eligible to fight.
    pub fn active_player_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_spectator()).count()
    }

    /// Lands currently owned by the given player, in land order.
    pub fn holdings(&self, id: PlayerId) -> Vec<LandId> {
        self.lands
            .iter()
            .filter(|l| l.owner() == Some(id))
            .map(Land::id)
            .collect()
    }

    /// Every owned land with its owner's name, in land order.
    ///
    /// Lands without an owner are skipped (unreachable after a successful
    /// construction, but representable).
    pub fn owned_lands(&self) -> impl Iterator<Item = (LandId, &str)> {
        self.lands.iter().filter_map(|l| {
            let owner = l.owner()?;
            let player = self.players.get(usize::from(owner))?;
            Some((l.id(), player.name()))
        })
    }

    /// Process one turn command against the current state.
    ///
    /// Validation resolves the attacker and defender among active players
    /// and requires the defender to be the current owner of the named land.
    /// A rejected command mutates nothing. A valid command resolves one
    /// battle; the loser becomes a spectator but keeps any other land it
    /// owns. Termination is evaluated only after a resolved battle: when a
    /// single active player remains, it is recorded as the winner and the
    /// game ends.
    pub fn submit_turn(
        &mut self,
        cmd: &TurnCommand,
        rng: &mut SeededRng,
    ) -> Result<TurnReport, GameError> {
        if self.phase == GamePhase::Ended {
            return Err(GameError::GameOver);
        }

        let attacker =
            self.find_active_player(&cmd.attacker)
                .ok_or_else(|| GameError::PlayerNotFound {
                    name: cmd.attacker.clone(),
                })?;
        let defender =
            self.find_active_player(&cmd.defender)
                .ok_or_else(|| GameError::PlayerNotFound {
                    name: cmd.defender.clone(),
                })?;
        let land = self
            .land(cmd.land)
            .ok_or(GameError::LandNotFound { id: cmd.land })?;
        if land.owner() != Some(defender) {
            return Err(GameError::DefenderDoesNotOwnLand {
                name: cmd.defender.clone(),
                id: cmd.land,
            });
        }

        let outcome = resolve_battle(
            &BattleContext {
                attacker,
                defender,
                land: cmd.land,
            },
            rng,
        );
        self.apply_outcome(&outcome);

        let winner = self.check_winner();
        Ok(TurnReport { outcome, winner })
    }

    /// Apply a resolved battle to the board.
    fn apply_outcome(&mut self, outcome: &BattleOutcome) {
        if outcome.attacker_won {
            self.lands[outcome.land as usize].set_owner(outcome.winner);
        }
        // The loser keeps any other holdings; a spectator only loses the
        // right to fight.
        self.players[usize::from(outcome.loser)].eliminate();
    }

    /// End the game if exactly one active player remains.
    fn check_winner(&mut self) -> Option<PlayerId> {
        let mut active = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_spectator());
        let sole = match (active.next(), active.next()) {
            (Some((id, _)), None) => Some(id as PlayerId),
            _ => None,
        };
        if let Some(id) = sole {
            self.winner = Some(id);
            self.phase = GamePhase::Ended;
        }
        sole
    }
}
