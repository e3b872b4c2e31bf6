//! Game session: every player-triggered operation.
//!
//! A [`GameSession`] owns the transport, the snapshot store and the
//! in-flight gates. Operations take `&self`, so a session can sit behind
//! an `Arc` and be driven from several tasks.
//!
//! Each state-changing operation follows the same steps:
//!
//! 1. Enter the gate for its category (or fail with `Busy`).
//! 2. Draw a generation from the store.
//! 3. Send the request.
//! 4. On success commit the reply under that generation. On failure leave
//!    the snapshot alone (the adventure call additionally closes the
//!    battle view).

use tracing::{debug, info, warn};

use fticket_economy::TicketValuation;
use fticket_types::{
    ActionReport, BattleCommand, BattleResult, BattleState, BuyConsumableRequest,
    BuyEquipmentRequest, CharacterName, Currency, EquipRequest, EquipmentSlot,
    FinancialKnowledge, GameState, ItemName, PurchaseKind, RecruitRequest, ReleaseRequest,
    ShopCatalog, StartRequest, UseConsumableRequest,
};

use crate::api::{GameApi, StateReply};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::gate::{ActionCategory, ActionGates};
use crate::store::{Generation, SessionPhase, SessionSnapshot, SessionStore, StateUpdate};
use crate::summary::BattleSummary;

/// Confirmation of a call that replaced the game state.
#[derive(Debug, Clone)]
pub struct ActionReceipt {
    /// Server confirmation text, if any.
    pub message: Option<String>,
    /// The state now held locally.
    pub game_state: GameState,
}

/// A freshly opened encounter.
#[derive(Debug, Clone)]
pub struct AdventureStart {
    /// The encounter.
    pub battle: BattleState,
    /// Whether the economy shifted on the way out.
    pub economy_changed: bool,
}

/// Outcome of one battle action.
#[derive(Debug, Clone)]
pub struct BattleTurn {
    /// What the action did.
    pub report: ActionReport,
    /// Battle after the action.
    pub battle: BattleState,
    /// Present when this action ended the battle.
    ///
    /// The battle stays open locally until the result is passed to
    /// [`GameSession::conclude_battle`]. [`GameSession::play_turn`] does
    /// both steps.
    pub result: Option<BattleResult>,
}

/// A battle action together with its end-of-battle handling.
#[derive(Debug, Clone)]
pub struct PlayedTurn {
    /// The action's outcome.
    pub turn: BattleTurn,
    /// Present when the action ended the battle and it has been concluded.
    pub summary: Option<BattleSummary>,
}

/// Per-slot outcome of [`GameSession::equip_loadout`].
///
/// A slot that was not selected stays `None`.
#[derive(Debug, Default)]
pub struct LoadoutOutcome {
    /// Weapon request outcome.
    pub weapon: Option<Result<ActionReceipt, ClientError>>,
    /// Armor request outcome.
    pub armor: Option<Result<ActionReceipt, ClientError>>,
}

impl LoadoutOutcome {
    /// Number of requests that were sent.
    pub fn requests_sent(&self) -> usize {
        usize::from(self.weapon.is_some()).saturating_add(usize::from(self.armor.is_some()))
    }
}

/// A connection to one game on the server.
#[derive(Debug)]
pub struct GameSession {
    api: GameApi,
    store: SessionStore,
    gates: ActionGates,
    config: ClientConfig,
}

impl GameSession {
    /// Create a session for the configured server. Nothing is sent yet.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let api = GameApi::new(&config)?;
        Ok(Self {
            api,
            store: SessionStore::new(),
            gates: ActionGates::default(),
            config,
        })
    }

    /// Configuration in use.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Clone of the local snapshot.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.store.snapshot().await
    }

    /// Current lifecycle phase.
    pub async fn phase(&self) -> SessionPhase {
        self.store.phase().await
    }

    /// Current game state, if any has been received.
    pub async fn game_state(&self) -> Option<GameState> {
        self.store.game_state().await
    }

    /// Open battle, if any.
    pub async fn battle_state(&self) -> Option<BattleState> {
        self.store.battle_state().await
    }

    /// Ticket valuation for the current economy.
    pub async fn valuation(&self) -> Option<TicketValuation> {
        self.store
            .game_state()
            .await
            .map(|g| TicketValuation::from_system(&g.f_ticket_system))
    }

    /// Whether a request of `category` is in flight.
    pub fn is_busy(&self, category: ActionCategory) -> bool {
        self.gates.is_busy(category)
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Start a new game. A blank name uses the configured default.
    pub async fn start_session(&self, player_name: &str) -> Result<ActionReceipt, ClientError> {
        let _pass = self.gates.enter(ActionCategory::Session)?;

        let trimmed = player_name.trim();
        let name = if trimmed.is_empty() {
            self.config.default_player_name.as_str()
        } else {
            trimmed
        };
        let request = StartRequest {
            name: CharacterName::from(name),
        };

        let generation = self.store.issue();
        let reply = self.api.start(&request).await?;
        self.store
            .commit(generation, StateUpdate::Started(reply.game_state.clone()))
            .await;

        info!(
            player = name,
            gold = reply.game_state.player.gold,
            f_tickets = reply.game_state.player.f_tickets,
            condition = %reply.game_state.f_ticket_system.current_condition,
            "session started"
        );
        Ok(ActionReceipt {
            message: reply.message,
            game_state: reply.game_state,
        })
    }

    /// Re-read the game state from the server.
    pub async fn refresh_status(&self) -> Result<GameState, ClientError> {
        let generation = self.store.issue();
        let reply = self.api.status().await?;
        self.store
            .commit(generation, StateUpdate::Game(reply.game_state.clone()))
            .await;
        debug!(gold = reply.game_state.player.gold, "status refreshed");
        Ok(reply.game_state)
    }

    /// The financial lesson for the current economy.
    pub async fn financial_knowledge(&self) -> Result<FinancialKnowledge, ClientError> {
        self.api.financial_knowledge().await
    }

    // -----------------------------------------------------------------------
    // Battle
    // -----------------------------------------------------------------------

    /// Set out for a new encounter.
    ///
    /// On failure any open battle view is closed.
    pub async fn begin_adventure(&self) -> Result<AdventureStart, ClientError> {
        let _pass = self.gates.enter(ActionCategory::Battle)?;

        let generation = self.store.issue();
        let reply = match self.api.adventure().await {
            Ok(reply) => reply,
            Err(e) => {
                self.store.commit(generation, StateUpdate::BattleClosed).await;
                return Err(e);
            }
        };

        self.store
            .commit(
                generation,
                StateUpdate::BattleOpened {
                    battle: reply.battle_state.clone(),
                    game: reply.game_state,
                },
            )
            .await;

        info!(
            enemies = reply.battle_state.enemy_party.len(),
            economy_changed = reply.economy_changed,
            "adventure started"
        );
        Ok(AdventureStart {
            battle: reply.battle_state,
            economy_changed: reply.economy_changed,
        })
    }

    /// Perform one battle action.
    pub async fn submit_battle_action(
        &self,
        command: &BattleCommand,
    ) -> Result<BattleTurn, ClientError> {
        let _pass = self.gates.enter(ActionCategory::Battle)?;

        let generation = self.store.issue();
        let reply = self.api.battle_action(command).await?;
        self.store
            .commit(
                generation,
                StateUpdate::BattleAdvanced {
                    battle: reply.battle_state.clone(),
                    game: reply.game_state,
                },
            )
            .await;

        debug!(
            action = %command.action_type,
            turn = reply.battle_state.turn,
            over = reply.battle_result.is_some(),
            "battle action resolved"
        );
        Ok(BattleTurn {
            report: reply.result,
            battle: reply.battle_state,
            result: reply.battle_result,
        })
    }

    /// Perform one battle action and, if it ends the battle, conclude it.
    pub async fn play_turn(&self, command: &BattleCommand) -> Result<PlayedTurn, ClientError> {
        let turn = self.submit_battle_action(command).await?;
        let summary = match &turn.result {
            Some(result) => Some(self.conclude_battle(result).await?),
            None => None,
        };
        Ok(PlayedTurn { turn, summary })
    }

    /// Re-read the open battle from the server.
    pub async fn fetch_battle_state(&self) -> Result<BattleState, ClientError> {
        let generation = self.store.issue();
        let battle = self.api.battle_state().await?;
        self.store
            .commit(
                generation,
                StateUpdate::BattleAdvanced {
                    battle: battle.clone(),
                    game: None,
                },
            )
            .await;
        Ok(battle)
    }

    /// Finish a battle after the configured delay.
    ///
    /// A victory refreshes the game state first. The battle view is closed
    /// either way. A failed refresh is logged and the summary is still
    /// produced, without pending recruits.
    pub async fn conclude_battle(
        &self,
        result: &BattleResult,
    ) -> Result<BattleSummary, ClientError> {
        let _pass = self.gates.enter(ActionCategory::Battle)?;

        if !self.config.battle_end_delay.is_zero() {
            tokio::time::sleep(self.config.battle_end_delay).await;
        }

        let roster = self.store.snapshot().await.battle_roster;
        let refreshed = if result.victory {
            match self.refresh_status().await {
                Ok(state) => Some(state),
                Err(e) => {
                    warn!(error = %e, "status refresh after victory failed");
                    None
                }
            }
        } else {
            None
        };

        let summary = BattleSummary::new(
            result,
            &roster,
            refreshed.as_ref().map(|g| g.player.party.as_slice()),
        );

        let generation = self.store.issue();
        self.store.commit(generation, StateUpdate::BattleClosed).await;

        info!(
            victory = summary.victory,
            gold = summary.rewards.gold,
            f_tickets = summary.rewards.f_tickets,
            recruited = summary.recruited.len(),
            pending = summary.pending_recruits.len(),
            "battle concluded"
        );
        Ok(summary)
    }

    // -----------------------------------------------------------------------
    // Shop
    // -----------------------------------------------------------------------

    /// The shop's current stock.
    pub async fn shop_catalog(&self) -> Result<ShopCatalog, ClientError> {
        self.api.shop_items().await
    }

    /// Buy one item.
    pub async fn purchase(
        &self,
        kind: PurchaseKind,
        item: ItemName,
        currency: Currency,
    ) -> Result<ActionReceipt, ClientError> {
        match kind.equipment_slot() {
            Some(slot) => {
                let _pass = self.gates.enter(ActionCategory::Shop)?;
                let request = BuyEquipmentRequest::new(slot, item, currency);
                let generation = self.store.issue();
                let reply = self.api.buy_equipment(&request).await?;
                info!(kind = %kind, item = %request.name, ?currency, "purchased");
                Ok(self.accept(generation, reply).await)
            }
            None => self.purchase_consumable(item, currency, 1).await,
        }
    }

    /// Buy `quantity` of a consumable.
    pub async fn purchase_consumable(
        &self,
        item: ItemName,
        currency: Currency,
        quantity: u32,
    ) -> Result<ActionReceipt, ClientError> {
        let _pass = self.gates.enter(ActionCategory::Shop)?;
        let request = BuyConsumableRequest {
            name: item,
            use_f_tickets: currency.use_f_tickets(),
            quantity,
        };
        let generation = self.store.issue();
        let reply = self.api.buy_consumable(&request).await?;
        info!(item = %request.name, quantity, ?currency, "purchased consumable");
        Ok(self.accept(generation, reply).await)
    }

    // -----------------------------------------------------------------------
    // Party
    // -----------------------------------------------------------------------

    /// Equip one owned item.
    pub async fn equip(
        &self,
        character: CharacterName,
        slot: EquipmentSlot,
        item: ItemName,
    ) -> Result<ActionReceipt, ClientError> {
        let _pass = self.gates.enter(ActionCategory::Party)?;
        self.send_equip(character, slot, item).await
    }

    /// Equip a weapon and/or armor, one request per selected slot.
    ///
    /// Blank item names count as not selected. The two requests succeed or
    /// fail independently.
    pub async fn equip_loadout(
        &self,
        character: &CharacterName,
        weapon: Option<ItemName>,
        armor: Option<ItemName>,
    ) -> Result<LoadoutOutcome, ClientError> {
        let weapon = weapon.filter(|w| !w.is_blank());
        let armor = armor.filter(|a| !a.is_blank());

        let _pass = self.gates.enter(ActionCategory::Party)?;
        let mut outcome = LoadoutOutcome::default();
        if let Some(item) = weapon {
            outcome.weapon = Some(
                self.send_equip(character.clone(), EquipmentSlot::Weapon, item)
                    .await,
            );
        }
        if let Some(item) = armor {
            outcome.armor = Some(
                self.send_equip(character.clone(), EquipmentSlot::Armor, item)
                    .await,
            );
        }
        Ok(outcome)
    }

    /// Use a consumable on a party member.
    pub async fn use_consumable(
        &self,
        character: CharacterName,
        item: ItemName,
    ) -> Result<ActionReceipt, ClientError> {
        let _pass = self.gates.enter(ActionCategory::Party)?;
        let request = UseConsumableRequest {
            character_name: character,
            name: item,
        };
        let generation = self.store.issue();
        let reply = self.api.use_consumable(&request).await?;
        Ok(self.accept(generation, reply).await)
    }

    /// Recruit a monster in exchange for releasing one from the party.
    ///
    /// Returns `Ok(None)` without sending anything unless both names are
    /// given.
    pub async fn recruit_with_release(
        &self,
        new_monster: CharacterName,
        released_monster: CharacterName,
    ) -> Result<Option<ActionReceipt>, ClientError> {
        if new_monster.is_blank() || released_monster.is_blank() {
            debug!("recruit skipped: both names are required");
            return Ok(None);
        }

        let _pass = self.gates.enter(ActionCategory::Party)?;
        let request = RecruitRequest {
            monster_name: new_monster,
            release_name: released_monster,
        };
        let generation = self.store.issue();
        let reply = self.api.recruit_monster(&request).await?;
        info!(
            recruited = %request.monster_name,
            released = %request.release_name,
            "monster recruited"
        );
        Ok(Some(self.accept(generation, reply).await))
    }

    /// Release a monster from the party.
    pub async fn release_monster(&self, name: CharacterName) -> Result<ActionReceipt, ClientError> {
        let _pass = self.gates.enter(ActionCategory::Party)?;
        let request = ReleaseRequest { name };
        let generation = self.store.issue();
        let reply = self.api.release_monster(&request).await?;
        info!(released = %request.name, "monster released");
        Ok(self.accept(generation, reply).await)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn send_equip(
        &self,
        character: CharacterName,
        slot: EquipmentSlot,
        item: ItemName,
    ) -> Result<ActionReceipt, ClientError> {
        let request = EquipRequest {
            character_name: character,
            slot,
            name: item,
        };
        let generation = self.store.issue();
        let reply = self.api.equip(&request).await?;
        debug!(character = %request.character_name, %slot, item = %request.name, "equipped");
        Ok(self.accept(generation, reply).await)
    }

    async fn accept(&self, generation: Generation, reply: StateReply) -> ActionReceipt {
        self.store
            .commit(generation, StateUpdate::Game(reply.game_state.clone()))
            .await;
        ActionReceipt {
            message: reply.message,
            game_state: reply.game_state,
        }
    }
}

