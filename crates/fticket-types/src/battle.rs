//! Battle snapshot, per-action report and end-of-battle result.
//!
//! The server resolves every action, including the enemy turn that follows
//! the last living player character. The client only mirrors the latest
//! [`BattleState`] it was handed.

use serde::{Deserialize, Serialize};

use crate::enums::CharacterType;
use crate::names::CharacterName;
use crate::structs::PartyMember;

/// Server-side battle snapshot, replaced wholesale after every action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    /// Turn counter.
    #[serde(default)]
    pub turn: u32,
    /// Whether the player side is acting.
    #[serde(default)]
    pub is_player_turn: bool,
    /// Rotating index into the living player combatants.
    #[serde(default)]
    pub current_character_index: usize,
    /// Player side.
    pub player_party: Vec<Combatant>,
    /// Enemy side.
    pub enemy_party: Vec<Combatant>,
    /// Most recent log lines.
    #[serde(default)]
    pub battle_log: Vec<String>,
    /// Whether one side has been wiped out.
    #[serde(default)]
    pub is_battle_over: bool,
}

impl BattleState {
    /// Enemies still standing, in server order.
    ///
    /// Attack and spell target indices refer to positions in this list.
    pub fn living_enemies(&self) -> impl Iterator<Item = &Combatant> {
        self.enemy_party.iter().filter(|c| c.is_alive)
    }

    /// The player combatant whose turn it is.
    ///
    /// The index rotates over living members only, so it is taken modulo
    /// the number of living members.
    pub fn active_combatant(&self) -> Option<&Combatant> {
        let alive: Vec<&Combatant> = self.player_party.iter().filter(|c| c.is_alive).collect();
        let index = self.current_character_index.checked_rem(alive.len())?;
        alive.get(index).copied()
    }
}

/// A participant in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name.
    pub name: CharacterName,
    /// Human or monster.
    pub character_type: CharacterType,
    /// Current hit points.
    ///
    /// Signed: enemies scaled far below their base level come out with
    /// negative stats.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Current magic points.
    #[serde(default)]
    pub mp: i32,
    /// Maximum magic points.
    #[serde(default)]
    pub max_mp: i32,
    /// Level.
    #[serde(default)]
    pub level: u32,
    /// Portrait emoji.
    #[serde(default)]
    pub emoji: Option<String>,
    /// Whether hit points remain.
    pub is_alive: bool,
}

/// Report of a single resolved action, as echoed in the `result` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReport {
    /// Whether the server accepted the action.
    #[serde(default)]
    pub success: bool,
    /// Narration of what happened, or the rejection reason.
    #[serde(default)]
    pub message: Option<String>,
    /// Who acted.
    #[serde(default)]
    pub character: Option<CharacterName>,
    /// Who was hit.
    #[serde(default)]
    pub target: Option<CharacterName>,
    /// Damage dealt after defense.
    #[serde(default)]
    pub damage: Option<u32>,
    /// Hit points restored by a healing spell.
    #[serde(default)]
    pub heal_amount: Option<u32>,
}

/// Outcome sent once a battle ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Whether the player side won.
    pub victory: bool,
    /// Gold and tickets awarded (zero on defeat).
    #[serde(default)]
    pub rewards: Rewards,
    /// Defeated enemies that asked to join the party.
    #[serde(default)]
    pub recruited_monsters: Vec<PartyMember>,
}

/// Battle rewards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    /// Gold earned. Negative when the defeated enemy had negative scaling.
    #[serde(default)]
    pub gold: i64,
    /// F-tickets earned.
    #[serde(default)]
    pub f_tickets: u64,
}
