//! Enumeration types exchanged with the game server.
//!
//! Character types travel as the server's own labels; everything the client
//! sends (battle actions, equipment slots, purchase kinds) uses lowercase
//! identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Character type
// ---------------------------------------------------------------------------

/// Wire label the server uses for player characters.
pub const HUMAN_LABEL: &str = "人間";

/// Wire label the server uses for recruited or enemy monsters.
pub const MONSTER_LABEL: &str = "モンスター";

/// Whether a party member is a player character or a monster.
///
/// Labels the client does not recognize are kept verbatim in
/// [`CharacterType::Other`] so a snapshot serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterType {
    /// A player character. Cannot be released from the party.
    Human,
    /// A monster, either an enemy or a recruited party member.
    Monster,
    /// Any label outside the two known ones.
    Other(String),
}

impl CharacterType {
    /// The wire label for this character type.
    pub fn label(&self) -> &str {
        match self {
            Self::Human => HUMAN_LABEL,
            Self::Monster => MONSTER_LABEL,
            Self::Other(label) => label,
        }
    }

    /// Whether this is a monster (only monsters can be released).
    pub const fn is_monster(&self) -> bool {
        matches!(self, Self::Monster)
    }
}

impl From<String> for CharacterType {
    fn from(label: String) -> Self {
        match label.as_str() {
            HUMAN_LABEL => Self::Human,
            MONSTER_LABEL => Self::Monster,
            _ => Self::Other(label),
        }
    }
}

impl From<CharacterType> for String {
    fn from(kind: CharacterType) -> Self {
        match kind {
            CharacterType::Human => HUMAN_LABEL.to_owned(),
            CharacterType::Monster => MONSTER_LABEL.to_owned(),
            CharacterType::Other(label) => label,
        }
    }
}

// ---------------------------------------------------------------------------
// Battle actions
// ---------------------------------------------------------------------------

/// The kind of command a player character performs on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Physical attack against an enemy.
    Attack,
    /// Cast a named spell (damage or healing).
    Spell,
    /// Use a named inventory item.
    Item,
    /// Brace for the enemy turn.
    Defend,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Attack => "attack",
            Self::Spell => "spell",
            Self::Item => "item",
            Self::Defend => "defend",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Equipment and shop
// ---------------------------------------------------------------------------

/// An equipment slot on a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    /// Weapon slot (adds attack).
    Weapon,
    /// Armor slot (adds defense).
    Armor,
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => f.write_str("weapon"),
            Self::Armor => f.write_str("armor"),
        }
    }
}

/// What kind of shop item is being bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseKind {
    /// A weapon, bought through the equipment endpoint.
    Weapon,
    /// An armor piece, bought through the equipment endpoint.
    Armor,
    /// A consumable, bought through the consumable endpoint.
    Consumable,
}

impl PurchaseKind {
    /// The equipment slot for weapon and armor purchases.
    pub const fn equipment_slot(self) -> Option<EquipmentSlot> {
        match self {
            Self::Weapon => Some(EquipmentSlot::Weapon),
            Self::Armor => Some(EquipmentSlot::Armor),
            Self::Consumable => None,
        }
    }
}

impl fmt::Display for PurchaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => f.write_str("weapon"),
            Self::Armor => f.write_str("armor"),
            Self::Consumable => f.write_str("consumable"),
        }
    }
}

/// Which currency pays for a purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Pay the gold price.
    #[default]
    Gold,
    /// Pay the F-ticket price.
    FTickets,
}

impl Currency {
    /// The `use_f_tickets` flag sent to the server.
    pub const fn use_f_tickets(self) -> bool {
        matches!(self, Self::FTickets)
    }
}
