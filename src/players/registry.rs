//! Player roster and turn rotation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EngineError, PlayerId, PlayerMap, Result};

use super::player::{Player, PlayerStatus};

/// Smallest table the engine seats.
pub const MIN_PLAYERS: usize = 2;
/// Largest table the engine seats.
pub const MAX_PLAYERS: usize = 4;

/// All players of a session plus the active-player pointer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: PlayerMap<Player>,
    active: PlayerId,
}

impl PlayerRegistry {
    /// Seat `count` players on Go with `starting_cash` each. Player 1 starts.
    pub fn initialize(count: usize, starting_cash: i64) -> Result<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(EngineError::InvalidPlayerCount(count));
        }

        Ok(Self {
            players: PlayerMap::new(count, |id| Player::new(id, starting_cash)),
            active: PlayerId::new(0),
        })
    }

    /// Registry with nobody seated, for a session that has not started.
    pub(crate) fn empty() -> Self {
        Self {
            players: PlayerMap::default(),
            active: PlayerId::new(0),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn active_id(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn active_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.active]
    }

    /// Panics if `id` is not seated.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Rotate to the next non-bankrupt player after the active one.
    ///
    /// Stays put when nobody else is left.
    pub fn advance_turn(&mut self) -> PlayerId {
        let count = self.len();
        let next = (1..=count)
            .map(|step| PlayerId::new(((self.active.index() + step) % count) as u8))
            .find(|&id| !self.players[id].is_bankrupt());

        if let Some(next) = next {
            self.active = next;
        }
        debug!(player = %self.active, "turn passes");
        self.active
    }

    /// Non-bankrupt players other than `id`, in seat order.
    #[must_use]
    pub fn players_except(&self, id: PlayerId) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(other, p)| *other != id && !p.is_bankrupt())
            .map(|(other, _)| other)
            .collect()
    }

    /// Players still in the game.
    #[must_use]
    pub fn solvent_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.status != PlayerStatus::Bankrupt)
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_bounds() {
        assert_eq!(PlayerRegistry::initialize(1, 1500), Err(EngineError::InvalidPlayerCount(1)));
        assert_eq!(PlayerRegistry::initialize(5, 1500), Err(EngineError::InvalidPlayerCount(5)));

        let registry = PlayerRegistry::initialize(4, 1500).unwrap();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.active_id(), PlayerId(0));
        assert!(registry.iter().all(|p| p.cash == 1500 && p.position.0 == 0));
    }

    #[test]
    fn test_advance_turn_is_cyclic() {
        let mut registry = PlayerRegistry::initialize(3, 1500).unwrap();
        assert_eq!(registry.advance_turn(), PlayerId(1));
        assert_eq!(registry.advance_turn(), PlayerId(2));
        assert_eq!(registry.advance_turn(), PlayerId(0));
    }

    #[test]
    fn test_advance_turn_skips_bankrupt() {
        let mut registry = PlayerRegistry::initialize(4, 1500).unwrap();
        registry.get_mut(PlayerId(1)).status = PlayerStatus::Bankrupt;
        registry.get_mut(PlayerId(2)).status = PlayerStatus::Bankrupt;

        assert_eq!(registry.advance_turn(), PlayerId(3));
        assert_eq!(registry.advance_turn(), PlayerId(0));
        assert_eq!(registry.players_except(PlayerId(0)), vec![PlayerId(3)]);
        assert_eq!(registry.solvent_players(), vec![PlayerId(0), PlayerId(3)]);
    }

    #[test]
    fn test_advance_turn_with_single_survivor() {
        let mut registry = PlayerRegistry::initialize(2, 1500).unwrap();
        registry.get_mut(PlayerId(1)).status = PlayerStatus::Bankrupt;
        assert_eq!(registry.advance_turn(), PlayerId(0));
    }
}
