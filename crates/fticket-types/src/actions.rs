//! Request bodies the client sends to the game server.
//!
//! One struct per state-changing call. Field names match the server's JSON
//! keys exactly; optional battle fields are always sent, as `null` when
//! unused.

use serde::{Deserialize, Serialize};

use crate::enums::{ActionType, Currency, EquipmentSlot};
use crate::names::{CharacterName, ItemName, SpellName};

/// Body of the session start call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {
    /// Name of the player character.
    pub name: CharacterName,
}

/// One battle command for the active player character.
///
/// Only the field matching `action_type` is meaningful: attacks use
/// `target_index`, item use needs `item_name`, spells need `spell_name`
/// (and optionally a target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleCommand {
    /// What to do.
    pub action_type: ActionType,
    /// Index into the living enemies; the server picks one when absent.
    pub target_index: Option<usize>,
    /// Item to use.
    pub item_name: Option<ItemName>,
    /// Spell to cast.
    pub spell_name: Option<SpellName>,
}

impl BattleCommand {
    /// Attack, optionally at a specific living enemy.
    pub const fn attack(target_index: Option<usize>) -> Self {
        Self {
            action_type: ActionType::Attack,
            target_index,
            item_name: None,
            spell_name: None,
        }
    }

    /// Cast a spell, optionally at a specific living enemy.
    pub fn spell(spell_name: impl Into<SpellName>, target_index: Option<usize>) -> Self {
        Self {
            action_type: ActionType::Spell,
            target_index,
            item_name: None,
            spell_name: Some(spell_name.into()),
        }
    }

    /// Use an inventory item.
    pub fn item(item_name: impl Into<ItemName>) -> Self {
        Self {
            action_type: ActionType::Item,
            target_index: None,
            item_name: Some(item_name.into()),
            spell_name: None,
        }
    }

    /// Defend this turn.
    pub const fn defend() -> Self {
        Self {
            action_type: ActionType::Defend,
            target_index: None,
            item_name: None,
            spell_name: None,
        }
    }
}

/// Body of the weapon/armor purchase call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyEquipmentRequest {
    /// Weapon or armor.
    #[serde(rename = "type")]
    pub slot: EquipmentSlot,
    /// Item to buy.
    pub name: ItemName,
    /// Pay in tickets instead of gold.
    pub use_f_tickets: bool,
}

impl BuyEquipmentRequest {
    /// Build a purchase request paying with `currency`.
    pub const fn new(slot: EquipmentSlot, name: ItemName, currency: Currency) -> Self {
        Self {
            slot,
            name,
            use_f_tickets: currency.use_f_tickets(),
        }
    }
}

/// Body of the consumable purchase call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyConsumableRequest {
    /// Item to buy.
    pub name: ItemName,
    /// Pay in tickets instead of gold.
    pub use_f_tickets: bool,
    /// Number of units.
    pub quantity: u32,
}

/// Body of the use-consumable call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseConsumableRequest {
    /// Character receiving the item.
    pub character_name: CharacterName,
    /// Item to consume.
    pub name: ItemName,
}

/// Body of the equip call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipRequest {
    /// Character being equipped.
    pub character_name: CharacterName,
    /// Slot being filled.
    #[serde(rename = "type")]
    pub slot: EquipmentSlot,
    /// Item from the inventory.
    pub name: ItemName,
}

/// Body of the recruit call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitRequest {
    /// Monster joining the party.
    pub monster_name: CharacterName,
    /// Monster leaving to make room.
    pub release_name: CharacterName,
}

/// Body of the release call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRequest {
    /// Monster leaving the party.
    pub name: CharacterName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_sends_unused_fields_as_null() {
        let json = serde_json::to_value(BattleCommand::attack(Some(1))).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "action_type": "attack",
                "target_index": 1,
                "item_name": null,
                "spell_name": null
            })
        );
    }

    #[test]
    fn spell_carries_name_and_target() {
        let command = BattleCommand::spell("Fireball", None);
        assert_eq!(command.action_type, ActionType::Spell);
        assert_eq!(command.spell_name, Some(SpellName::from("Fireball")));
        assert_eq!(command.target_index, None);
    }

    #[test]
    fn equipment_purchase_uses_type_key() {
        let request = BuyEquipmentRequest::new(
            EquipmentSlot::Weapon,
            ItemName::from("Iron Sword"),
            Currency::FTickets,
        );
        let json = serde_json::to_value(request).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({"type": "weapon", "name": "Iron Sword", "use_f_tickets": true})
        );
    }
}
