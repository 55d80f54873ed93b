//! Stack registry implementation.

use super::models::{PlayerId, PlayerStack};
use crate::chips::{self, ChipDenomination, ChipInventory};
use std::collections::BTreeMap;

/// Holds every player's chip inventory and keeps the derived valuation in
/// step with both inventory writes and big-blind changes.
///
/// Player slots are created when the registry is built and live for its whole
/// lifetime; `clear` and `reset_all` zero inventories, they never remove
/// slots. Operations against an unknown player id are silent no-ops.
#[derive(Debug, Clone)]
pub struct StackRegistry {
    players: BTreeMap<PlayerId, PlayerStack>,
    denominations: Vec<ChipDenomination>,
    big_blind: i64,
}

impl StackRegistry {
    /// Build a registry with the given player slots, each starting on a zero
    /// inventory over the configured denomination set.
    pub fn new(
        slots: Vec<(PlayerId, String)>,
        denominations: &[ChipDenomination],
        big_blind: i64,
    ) -> Self {
        let initial = chips::initial_inventory(denominations);
        let players = slots
            .into_iter()
            .map(|(id, name)| (id, PlayerStack::new(&name, initial.clone())))
            .collect();
        Self {
            players,
            denominations: denominations.to_vec(),
            big_blind,
        }
    }

    /// The conventional single-device layout: one own stack and two
    /// opponents.
    pub fn with_default_slots(denominations: &[ChipDenomination], big_blind: i64) -> Self {
        Self::new(
            vec![
                ("player1".to_string(), "My Stack".to_string()),
                ("player2".to_string(), "Opponent 1".to_string()),
                ("player3".to_string(), "Opponent 2".to_string()),
            ],
            denominations,
            big_blind,
        )
    }

    /// Look up a player's stack
    pub fn get(&self, player_id: &str) -> Option<&PlayerStack> {
        self.players.get(player_id)
    }

    /// All stacks in stable id order
    pub fn players(&self) -> impl Iterator<Item = (&PlayerId, &PlayerStack)> {
        self.players.iter()
    }

    /// Number of player slots
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the registry has no player slots
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The big blind the current depths were derived from
    pub fn big_blind(&self) -> i64 {
        self.big_blind
    }

    /// Replace a player's inventory wholesale and recompute that player's
    /// total and depth.
    pub fn set_inventory(&mut self, player_id: &str, inventory: ChipInventory) {
        let big_blind = self.big_blind;
        if let Some(player) = self.players.get_mut(player_id) {
            player.total_value = chips::total(&inventory);
            player.big_blind_depth = chips::big_blind_depth(player.total_value, big_blind);
            player.inventory = inventory;
        }
    }

    /// Add `delta` chips of one denomination, flooring the count at zero.
    pub fn adjust(&mut self, player_id: &str, denomination: i64, delta: i64) {
        let Some(player) = self.players.get(player_id) else {
            return;
        };
        let current = player
            .inventory
            .get(&denomination)
            .copied()
            .unwrap_or(0);
        let count = i64::from(current).saturating_add(delta);
        self.set_count(player_id, denomination, count);
    }

    /// Set the held count of one denomination, flooring at zero.
    pub fn set_count(&mut self, player_id: &str, denomination: i64, count: i64) {
        let Some(player) = self.players.get(player_id) else {
            return;
        };
        let clamped = count.clamp(0, i64::from(u32::MAX)) as u32;
        let mut inventory = player.inventory.clone();
        inventory.insert(denomination, clamped);
        self.set_inventory(player_id, inventory);
    }

    /// Reset one player to a zero inventory over the configured denominations
    pub fn clear(&mut self, player_id: &str) {
        let inventory = chips::initial_inventory(&self.denominations);
        self.set_inventory(player_id, inventory);
    }

    /// Adopt a live-edited denomination set without zeroing inventories.
    ///
    /// Entries for denominations that were removed stay in place and keep
    /// counting toward totals until the next clear or reset.
    pub fn set_denominations(&mut self, denominations: &[ChipDenomination]) {
        self.denominations = denominations.to_vec();
    }

    /// Re-point the registry at a new denomination set and zero every player
    /// (invoked on configuration switch).
    pub fn reset_all(&mut self, denominations: &[ChipDenomination]) {
        self.denominations = denominations.to_vec();
        let initial = chips::initial_inventory(denominations);
        for player in self.players.values_mut() {
            player.inventory = initial.clone();
            player.total_value = 0;
            player.big_blind_depth = 0.0;
        }
    }

    /// Re-derive every player's depth from their stored total after a
    /// big-blind change. Inventories are not touched.
    pub fn recompute_for_big_blind(&mut self, big_blind: i64) {
        self.big_blind = big_blind;
        for player in self.players.values_mut() {
            player.big_blind_depth = chips::big_blind_depth(player.total_value, big_blind);
        }
    }
}
