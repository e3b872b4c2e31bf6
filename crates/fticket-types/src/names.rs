//! Type-safe name wrappers around [`String`].
//!
//! The game server identifies characters, monsters and items by display
//! name. Wrapping each kind of name in its own newtype keeps a character
//! name from being passed where an item name is expected. All wrappers
//! serialize transparently as plain JSON strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generates a transparent newtype wrapper around [`String`].
macro_rules! define_name {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap a name.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the name is empty or only whitespace.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Return the inner [`String`].
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_name!(
    /// Name of a party member or combatant (player character or monster).
    CharacterName
);

define_name!(
    /// Name of a weapon, armor piece or consumable.
    ItemName
);

define_name!(
    /// Name of a spell known to a character.
    SpellName
);
