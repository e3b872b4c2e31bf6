//! Game session client for the F-ticket RPG server.
//!
//! The server owns every game rule. This crate keeps one local snapshot of
//! what the server last said, sends player actions, and renders the result
//! as text.
//!
//! # Architecture
//!
//! ```text
//! command line --> command --> GameSession --> GameApi --> HTTP JSON API
//!                                  |
//!                                  +--> ActionGates (one request per category)
//!                                  +--> SessionStore (generation-checked snapshot)
//!                                  |
//!                              display <-- fticket-economy (ticket valuation)
//! ```
//!
//! # Modules
//!
//! - [`api`] -- Typed HTTP transport and the response envelope
//! - [`command`] -- Parsing of player commands
//! - [`config`] -- Environment-based configuration
//! - [`display`] -- Plain-text views
//! - [`error`] -- Client error type
//! - [`gate`] -- In-flight request gates
//! - [`session`] -- Player operations
//! - [`store`] -- Snapshot store
//! - [`summary`] -- End-of-battle summary

pub mod api;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod gate;
pub mod session;
pub mod store;
pub mod summary;

pub use command::{Command, CommandError, parse_command};
pub use config::ClientConfig;
pub use error::ClientError;
pub use gate::ActionCategory;
pub use session::{
    ActionReceipt, AdventureStart, BattleTurn, GameSession, LoadoutOutcome, PlayedTurn,
};
pub use store::{SessionPhase, SessionSnapshot};
pub use summary::BattleSummary;
