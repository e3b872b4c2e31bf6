//! HTTP transport for the game server API.
//!
//! Every call shares one envelope: a JSON object with `success`, a
//! `message` on failure and the call's payload on success. [`GameApi`]
//! sends the request, checks the envelope and decodes the payload, so the
//! session layer only ever sees typed replies or a [`ClientError`].
//!
//! The server keeps the game in its own session keyed by cookie, so the
//! underlying `reqwest` client is built with a cookie store.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use fticket_types::{
    ActionReport, BattleCommand, BattleResult, BattleState, BuyConsumableRequest,
    BuyEquipmentRequest, EquipRequest, FinancialKnowledge, GameState, RecruitRequest,
    ReleaseRequest, ShopCatalog, StartRequest, UseConsumableRequest,
};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Fallback rejection text for calls whose failure carries no message.
const REQUEST_FAILED: &str = "Request failed";

/// Fallback rejection text for battle actions.
const ACTION_FAILED: &str = "Action failed";

// ---------------------------------------------------------------------------
// Replies
// ---------------------------------------------------------------------------

/// Reply carrying a full replacement game state.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct StateReply {
    /// The new authoritative state.
    pub game_state: GameState,
    /// Server confirmation text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to the adventure call.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AdventureReply {
    /// The freshly generated encounter.
    pub battle_state: BattleState,
    /// State after the pre-battle heal (and any economy shift).
    #[serde(default)]
    pub game_state: Option<GameState>,
    /// Whether the economic condition changed on the way out.
    #[serde(default)]
    pub economy_changed: bool,
}

/// Reply to a battle action.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BattleActionReply {
    /// What the action did.
    #[serde(default)]
    pub result: ActionReport,
    /// Battle after the action and any enemy turn it triggered.
    pub battle_state: BattleState,
    /// Present once the battle is over.
    #[serde(default)]
    pub battle_result: Option<BattleResult>,
    /// Present once the battle is over.
    #[serde(default)]
    pub game_state: Option<GameState>,
}

#[derive(Debug, serde::Deserialize)]
struct BattleStateReply {
    battle_state: BattleState,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Typed client for the game server's JSON API.
#[derive(Debug, Clone)]
pub struct GameApi {
    client: reqwest::Client,
    base_url: String,
}

impl GameApi {
    /// Build a client for the configured server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            base_url: config.server_url.clone(),
        })
    }

    /// `POST /api/start`
    pub async fn start(&self, request: &StartRequest) -> Result<StateReply, ClientError> {
        self.post("/api/start", request, REQUEST_FAILED).await
    }

    /// `GET /api/status`
    pub async fn status(&self) -> Result<StateReply, ClientError> {
        self.get("/api/status", REQUEST_FAILED).await
    }

    /// `POST /api/adventure`
    pub async fn adventure(&self) -> Result<AdventureReply, ClientError> {
        self.post("/api/adventure", &serde_json::json!({}), REQUEST_FAILED)
            .await
    }

    /// `POST /api/battle/action`
    pub async fn battle_action(
        &self,
        command: &BattleCommand,
    ) -> Result<BattleActionReply, ClientError> {
        self.post("/api/battle/action", command, ACTION_FAILED).await
    }

    /// `GET /api/battle/state`
    pub async fn battle_state(&self) -> Result<BattleState, ClientError> {
        let reply: BattleStateReply = self.get("/api/battle/state", REQUEST_FAILED).await?;
        Ok(reply.battle_state)
    }

    /// `GET /api/shop/items`
    pub async fn shop_items(&self) -> Result<ShopCatalog, ClientError> {
        self.get("/api/shop/items", REQUEST_FAILED).await
    }

    /// `POST /api/shop/buy`
    pub async fn buy_equipment(
        &self,
        request: &BuyEquipmentRequest,
    ) -> Result<StateReply, ClientError> {
        self.post("/api/shop/buy", request, REQUEST_FAILED).await
    }

    /// `POST /api/shop/buy_consumable`
    pub async fn buy_consumable(
        &self,
        request: &BuyConsumableRequest,
    ) -> Result<StateReply, ClientError> {
        self.post("/api/shop/buy_consumable", request, REQUEST_FAILED)
            .await
    }

    /// `POST /api/use_consumable`
    pub async fn use_consumable(
        &self,
        request: &UseConsumableRequest,
    ) -> Result<StateReply, ClientError> {
        self.post("/api/use_consumable", request, REQUEST_FAILED)
            .await
    }

    /// `POST /api/equip`
    pub async fn equip(&self, request: &EquipRequest) -> Result<StateReply, ClientError> {
        self.post("/api/equip", request, REQUEST_FAILED).await
    }

    /// `POST /api/recruit_monster`
    pub async fn recruit_monster(
        &self,
        request: &RecruitRequest,
    ) -> Result<StateReply, ClientError> {
        self.post("/api/recruit_monster", request, REQUEST_FAILED)
            .await
    }

    /// `POST /api/release_monster`
    pub async fn release_monster(
        &self,
        request: &ReleaseRequest,
    ) -> Result<StateReply, ClientError> {
        self.post("/api/release_monster", request, REQUEST_FAILED)
            .await
    }

    /// `GET /api/financial_knowledge`
    pub async fn financial_knowledge(&self) -> Result<FinancialKnowledge, ClientError> {
        self.get("/api/financial_knowledge", REQUEST_FAILED).await
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let request = self.client.get(self.url(path));
        self.send("GET", path, request, fallback).await
    }

    async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.send("POST", path, request, fallback).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| {
            warn!(method, path, error = %e, "request did not complete");
            ClientError::Transport(e.to_string())
        })?;

        let status = response.status();
        debug!(method, path, status = status.as_u16(), "response received");

        let body: Value = response.json().await.map_err(|e| {
            warn!(method, path, status = status.as_u16(), error = %e, "response body is not JSON");
            ClientError::Decode(format!("{method} {path} returned {status}: {e}"))
        })?;

        open_envelope(body, fallback).inspect_err(|e| {
            if e.is_rejection() {
                warn!(method, path, reason = %e, "server rejected request");
            }
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Check the `success` flag and decode the payload.
fn open_envelope<T: DeserializeOwned>(body: Value, fallback: &str) -> Result<T, ClientError> {
    let success = body
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !success {
        return Err(ClientError::Rejected(rejection_message(&body, fallback)));
    }
    serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Extract the rejection reason from a failed envelope.
///
/// Most calls put it in `message`; battle actions nest it in
/// `result.message`.
fn rejection_message(body: &Value, fallback: &str) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            body.get("result")
                .and_then(|r| r.get("message"))
                .and_then(Value::as_str)
        })
        .map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}
