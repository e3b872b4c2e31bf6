//! Game state snapshot owned by the server.
//!
//! Every successful state-changing call returns a complete [`GameState`].
//! The client never edits one in place; it replaces its copy wholesale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::CharacterType;
use crate::names::{CharacterName, ItemName};

/// Maximum number of members the server allows in a party.
pub const MAX_PARTY_SIZE: usize = 4;

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// Full server-side game state for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player resources, inventories and party.
    pub player: PlayerState,
    /// Current economic condition and ticket base value.
    pub f_ticket_system: FTicketSystemState,
    /// Area number the party is exploring.
    #[serde(default)]
    pub current_area: u32,
    /// Number of battles won so far.
    #[serde(default)]
    pub story_progress: u32,
}

/// Player resources, inventories and party roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Gold on hand.
    pub gold: u64,
    /// F-tickets on hand.
    pub f_tickets: u64,
    /// Weapons in the shared inventory.
    #[serde(default)]
    pub inventory_weapons: Vec<OwnedWeapon>,
    /// Armor pieces in the shared inventory.
    #[serde(default)]
    pub inventory_armors: Vec<OwnedArmor>,
    /// Consumables by name with their remaining quantity.
    #[serde(default)]
    pub inventory_consumables: BTreeMap<ItemName, u32>,
    /// Party roster, player character first.
    #[serde(default)]
    pub party: Vec<PartyMember>,
}

impl PlayerState {
    /// Find a party member by name.
    pub fn member(&self, name: &CharacterName) -> Option<&PartyMember> {
        self.party.iter().find(|m| &m.name == name)
    }

    /// Whether the party has reached [`MAX_PARTY_SIZE`].
    pub fn party_is_full(&self) -> bool {
        self.party.len() >= MAX_PARTY_SIZE
    }

    /// Monsters in the party, the only members that can be released.
    pub fn releasable_monsters(&self) -> impl Iterator<Item = &PartyMember> {
        self.party.iter().filter(|m| m.character_type.is_monster())
    }

    /// Consumables with at least one unit left.
    pub fn stocked_consumables(&self) -> impl Iterator<Item = (&ItemName, u32)> {
        self.inventory_consumables
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(name, qty)| (name, *qty))
    }
}

/// A weapon held in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedWeapon {
    /// Weapon name.
    pub name: ItemName,
    /// Attack bonus when equipped.
    pub attack_bonus: u32,
}

/// An armor piece held in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedArmor {
    /// Armor name.
    pub name: ItemName,
    /// Defense bonus when equipped.
    pub defense_bonus: u32,
}

/// A member of the player's party as reported in [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyMember {
    /// Display name; also the identifier used by equip and item calls.
    pub name: CharacterName,
    /// Human or monster.
    pub character_type: CharacterType,
    /// Current hit points.
    ///
    /// Stats are signed because recruited monsters keep whatever the
    /// server's level scaling produced, negative values included.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Current magic points.
    pub mp: i32,
    /// Maximum magic points (zero for characters without magic).
    pub max_mp: i32,
    /// Attack including equipment.
    #[serde(default)]
    pub attack: i32,
    /// Defense including equipment.
    #[serde(default)]
    pub defense: i32,
    /// Character level.
    pub level: u32,
    /// Experience accumulated toward the next level.
    #[serde(default)]
    pub experience: u64,
    /// Experience required for the next level.
    #[serde(default)]
    pub exp_needed: Option<u64>,
    /// Name of the equipped weapon, if any.
    #[serde(default)]
    pub equipped_weapon: Option<ItemName>,
    /// Name of the equipped armor, if any.
    #[serde(default)]
    pub equipped_armor: Option<ItemName>,
    /// Portrait emoji.
    #[serde(default)]
    pub emoji: Option<String>,
}

impl PartyMember {
    /// Experience needed for the next level.
    ///
    /// Falls back to `level * 100` when the server omits it.
    pub fn experience_target(&self) -> u64 {
        self.exp_needed
            .unwrap_or_else(|| u64::from(self.level).saturating_mul(100))
    }
}

/// Economic state of the F-ticket system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FTicketSystemState {
    /// Server label of the current economic condition.
    ///
    /// Kept verbatim; interpretation (and the fallback for labels the
    /// client does not know) lives in the valuation engine.
    pub current_condition: String,
    /// Gold value of one ticket before the condition multiplier.
    pub base_value: u64,
}

/// Payload of the financial knowledge call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialKnowledge {
    /// Server label of the current economic condition.
    pub condition: String,
    /// Narrative description of the condition.
    pub description: String,
    /// Financial lesson for the condition.
    pub knowledge: String,
    /// Server-computed unit ticket value, when provided.
    #[serde(default)]
    pub f_ticket_value: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state_json() -> serde_json::Value {
        serde_json::json!({
            "player": {
                "gold": 100,
                "f_tickets": 5,
                "inventory_weapons": [{"name": "Wooden Sword", "attack_bonus": 3}],
                "inventory_armors": [],
                "inventory_consumables": {"Herb": 2, "Ether": 0},
                "party": [
                    {
                        "name": "Hero", "character_type": "人間",
                        "hp": 50, "max_hp": 50, "mp": 10, "max_mp": 10,
                        "attack": 12, "defense": 6, "level": 1,
                        "experience": 0, "exp_needed": 100,
                        "equipped_weapon": null, "equipped_armor": null,
                        "emoji": "👤"
                    },
                    {
                        "name": "Slime", "character_type": "モンスター",
                        "hp": 20, "max_hp": 20, "mp": 0, "max_mp": 0,
                        "attack": 5, "defense": 2, "level": 1,
                        "experience": 0, "exp_needed": 100,
                        "equipped_weapon": null, "equipped_armor": null,
                        "emoji": "🟢"
                    }
                ]
            },
            "f_ticket_system": {"current_condition": "安定", "base_value": 50},
            "current_area": 1,
            "story_progress": 0
        })
    }

    #[test]
    fn parses_server_snapshot() {
        let state: Option<GameState> = serde_json::from_value(sample_state_json()).ok();
        assert!(state.is_some());
        let Some(state) = state else { return };
        assert_eq!(state.player.gold, 100);
        assert_eq!(state.player.party.len(), 2);
        assert_eq!(state.f_ticket_system.current_condition, "安定");
        assert_eq!(state.f_ticket_system.base_value, 50);
    }

    #[test]
    fn snapshot_serializes_back_to_the_same_json() {
        let original = sample_state_json();
        let state: Option<GameState> = serde_json::from_value(original.clone()).ok();
        let again = state.and_then(|s| serde_json::to_value(s).ok());
        assert_eq!(again, Some(original));
    }

    #[test]
    fn player_helpers() {
        let state: Option<GameState> = serde_json::from_value(sample_state_json()).ok();
        let Some(state) = state else { return };
        let player = &state.player;

        assert!(player.member(&CharacterName::from("Slime")).is_some());
        assert!(!player.party_is_full());
        let monsters: Vec<_> = player.releasable_monsters().map(|m| m.name.as_str()).collect();
        assert_eq!(monsters, vec!["Slime"]);
        let stocked: Vec<_> = player.stocked_consumables().map(|(n, q)| (n.as_str(), q)).collect();
        assert_eq!(stocked, vec![("Herb", 2)]);
    }

    #[test]
    fn experience_target_falls_back_to_level_formula() {
        let member: Option<PartyMember> = serde_json::from_value(serde_json::json!({
            "name": "Hero", "character_type": "人間",
            "hp": 1, "max_hp": 1, "mp": 0, "max_mp": 0, "level": 3
        }))
        .ok();
        assert_eq!(member.map(|m| m.experience_target()), Some(300));
    }
}
