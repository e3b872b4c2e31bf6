//! Configuration types for the game client.
//!
//! All configuration is loaded from environment variables. The client needs
//! to know where the game server lives, which name to start a session with
//! when none is given, how long to let the last battle message sit before
//! the battle is wrapped up, and optionally how long to wait on a request.

use std::time::Duration;

use crate::error::ClientError;

/// Server used when `FTICKET_SERVER_URL` is not set.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Player name used when `FTICKET_PLAYER_NAME` is not set.
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

/// Pause before end-of-battle handling, in milliseconds.
pub const DEFAULT_BATTLE_END_DELAY_MS: u64 = 1000;

/// Complete client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the game server, without a trailing slash.
    pub server_url: String,
    /// Name used for `start` when the player gives none.
    pub default_player_name: String,
    /// Delay between the final battle action and end-of-battle handling.
    pub battle_end_delay: Duration,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
            default_player_name: DEFAULT_PLAYER_NAME.to_owned(),
            battle_end_delay: Duration::from_millis(DEFAULT_BATTLE_END_DELAY_MS),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `server_url`, everything else default.
    pub fn for_server(server_url: &str) -> Self {
        Self {
            server_url: normalize_url(server_url),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `FTICKET_SERVER_URL` -- game server base URL (default `http://127.0.0.1:5000`)
    /// - `FTICKET_PLAYER_NAME` -- default player name (default `Adventurer`)
    /// - `FTICKET_BATTLE_END_DELAY_MS` -- end-of-battle delay (default 1000)
    /// - `FTICKET_REQUEST_TIMEOUT_MS` -- request timeout (default: none)
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = lookup("FTICKET_SERVER_URL")
            .map_or_else(|| DEFAULT_SERVER_URL.to_owned(), |url| normalize_url(&url));
        if server_url.is_empty() {
            return Err(ClientError::Config(
                "FTICKET_SERVER_URL must not be empty".to_owned(),
            ));
        }

        let default_player_name = lookup("FTICKET_PLAYER_NAME")
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_owned());

        let battle_end_delay_ms = parse_millis(&lookup, "FTICKET_BATTLE_END_DELAY_MS")?
            .unwrap_or(DEFAULT_BATTLE_END_DELAY_MS);

        let request_timeout =
            parse_millis(&lookup, "FTICKET_REQUEST_TIMEOUT_MS")?.map(Duration::from_millis);

        Ok(Self {
            server_url,
            default_player_name,
            battle_end_delay: Duration::from_millis(battle_end_delay_ms),
            request_timeout,
        })
    }

    /// Use a different end-of-battle delay.
    #[must_use]
    pub const fn with_battle_end_delay(mut self, delay: Duration) -> Self {
        self.battle_end_delay = delay;
        self
    }
}

/// Read an optional millisecond value.
fn parse_millis<F>(lookup: &F, name: &str) -> Result<Option<u64>, ClientError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|e| ClientError::Config(format!("invalid {name}: {e}")))
        })
        .transpose()
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).ok();
        assert_eq!(config, Some(ClientConfig::default()));
    }

    #[test]
    fn reads_every_variable() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("FTICKET_SERVER_URL", "http://game.local:8080/"),
            ("FTICKET_PLAYER_NAME", "  Rin "),
            ("FTICKET_BATTLE_END_DELAY_MS", "250"),
            ("FTICKET_REQUEST_TIMEOUT_MS", "5000"),
        ]))
        .ok();

        assert_eq!(
            config,
            Some(ClientConfig {
                server_url: "http://game.local:8080".to_owned(),
                default_player_name: "Rin".to_owned(),
                battle_end_delay: Duration::from_millis(250),
                request_timeout: Some(Duration::from_millis(5000)),
            })
        );
    }

    #[test]
    fn blank_player_name_uses_default() {
        let config = ClientConfig::from_lookup(lookup_from(&[("FTICKET_PLAYER_NAME", "   ")]));
        assert_eq!(
            config.map(|c| c.default_player_name).ok().as_deref(),
            Some(DEFAULT_PLAYER_NAME)
        );
    }

    #[test]
    fn invalid_delay_is_a_config_error() {
        let result =
            ClientConfig::from_lookup(lookup_from(&[("FTICKET_BATTLE_END_DELAY_MS", "soon")]));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn empty_server_url_is_rejected() {
        let result = ClientConfig::from_lookup(lookup_from(&[("FTICKET_SERVER_URL", " / ")]));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
