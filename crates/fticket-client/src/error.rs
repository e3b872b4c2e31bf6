//! Error types for the game client.
//!
//! Uses `thiserror` for typed errors that surface through every session
//! operation: transport failures, undecodable responses, business
//! rejections from the server, in-flight gate refusals and configuration.

use crate::gate::ActionCategory;

/// Errors that can occur during a client operation.
///
/// None of them end the session. Local state is never modified when an
/// operation returns one of these.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be completed (connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with something other than the expected JSON.
    #[error("decode error: {0}")]
    Decode(String),

    /// The server rejected the request (`success: false`).
    #[error("rejected: {0}")]
    Rejected(String),

    /// Another request of the same category is still in flight.
    #[error("{0} request already in flight")]
    Busy(ActionCategory),

    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),
}

impl ClientError {
    /// Text to show the player.
    ///
    /// Rejections carry the server's message verbatim. Transport and decode
    /// failures are reported generically, the way the server's own front
    /// end reports them.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Transport(detail) | Self::Decode(detail) => {
                format!("An error occurred: {detail}")
            }
            Self::Busy(category) => {
                format!("Please wait, the previous {category} action is still running.")
            }
            Self::Config(detail) => format!("Configuration problem: {detail}"),
        }
    }

    /// Whether the server itself said no, as opposed to the request failing.
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
