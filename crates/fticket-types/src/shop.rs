//! Shop catalog as listed by the server.
//!
//! Prices are fixed per item in both currencies. The gold equivalent of a
//! ticket price depends on the economic condition and is computed by the
//! valuation engine at presentation time, never stored here.

use serde::{Deserialize, Serialize};

use crate::names::ItemName;

/// Restore amount the server uses to mean "restore fully".
pub const FULL_RESTORE: u32 = 999;

/// Everything the shop sells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopCatalog {
    /// Weapons for sale.
    #[serde(default)]
    pub weapons: Vec<WeaponListing>,
    /// Armor for sale.
    #[serde(default)]
    pub armors: Vec<ArmorListing>,
    /// Consumables for sale.
    #[serde(default)]
    pub consumables: Vec<ConsumableListing>,
}

impl ShopCatalog {
    /// Whether the shop has nothing to sell.
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty() && self.armors.is_empty() && self.consumables.is_empty()
    }
}

/// Price of an item in both currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Price in gold.
    pub price_gold: u64,
    /// Price in F-tickets.
    pub price_f_tickets: u64,
}

/// A weapon for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponListing {
    /// Weapon name.
    pub name: ItemName,
    /// Attack bonus when equipped.
    pub attack_bonus: u32,
    /// Price in both currencies.
    #[serde(flatten)]
    pub price: Price,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Icon.
    #[serde(default)]
    pub emoji: Option<String>,
}

/// An armor piece for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorListing {
    /// Armor name.
    pub name: ItemName,
    /// Defense bonus when equipped.
    pub defense_bonus: u32,
    /// Price in both currencies.
    #[serde(flatten)]
    pub price: Price,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Icon.
    #[serde(default)]
    pub emoji: Option<String>,
}

/// A consumable for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumableListing {
    /// Item name.
    pub name: ItemName,
    /// Hit points restored ([`FULL_RESTORE`] restores fully).
    #[serde(default)]
    pub hp_restore: u32,
    /// Magic points restored ([`FULL_RESTORE`] restores fully).
    #[serde(default)]
    pub mp_restore: u32,
    /// Price in both currencies.
    #[serde(flatten)]
    pub price: Price,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Icon.
    #[serde(default)]
    pub emoji: Option<String>,
}
