//! Shared type definitions for the F-ticket RPG client.
//!
//! This crate mirrors the JSON exchanged with the game server. The server
//! owns every rule; these types only describe what it sends and what it
//! expects back.
//!
//! # Modules
//!
//! - [`names`] -- Type-safe string wrappers for character, item and spell names
//! - [`enums`] -- Enumeration types (character kinds, battle actions, slots, currencies)
//! - [`structs`] -- The [`GameState`] snapshot and its parts
//! - [`battle`] -- Battle snapshot, action report and battle result
//! - [`shop`] -- Shop catalog listings
//! - [`actions`] -- Request bodies for state-changing calls

pub mod actions;
pub mod battle;
pub mod enums;
pub mod names;
pub mod shop;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use actions::{
    BattleCommand, BuyConsumableRequest, BuyEquipmentRequest, EquipRequest, RecruitRequest,
    ReleaseRequest, StartRequest, UseConsumableRequest,
};
pub use battle::{ActionReport, BattleResult, BattleState, Combatant, Rewards};
pub use enums::{ActionType, CharacterType, Currency, EquipmentSlot, PurchaseKind};
pub use names::{CharacterName, ItemName, SpellName};
pub use shop::{ArmorListing, ConsumableListing, FULL_RESTORE, Price, ShopCatalog, WeaponListing};
pub use structs::{
    FTicketSystemState, FinancialKnowledge, GameState, MAX_PARTY_SIZE, OwnedArmor, OwnedWeapon,
    PartyMember, PlayerState,
};
