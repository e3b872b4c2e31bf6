//! Single-writer container for the local session snapshot.
//!
//! The snapshot is the only shared mutable state in the client. All writes
//! go through [`SessionStore::commit`]; readers get clones.
//!
//! Each state-replacing request draws a [`Generation`] before it is sent.
//! A reply is applied only if its generation is newer than the one that
//! produced the current value, tracked separately for the game state and
//! the battle state. Replies that arrive out of order therefore resolve to
//! the most recently issued request, never to whichever landed last.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use fticket_types::{BattleState, CharacterName, GameState};

/// Session lifecycle. There is no way back to `NotStarted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No successful start yet.
    #[default]
    NotStarted,
    /// A session has been started.
    InSession,
}

/// Issue order of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// What the client currently believes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Lifecycle phase.
    pub phase: SessionPhase,
    /// Latest game state, `None` until first populated.
    pub game_state: Option<GameState>,
    /// Open battle, if any.
    pub battle_state: Option<BattleState>,
    /// Party roster when the open battle began.
    pub battle_roster: Vec<CharacterName>,
}

/// A change to the snapshot.
#[derive(Debug, Clone)]
pub enum StateUpdate {
    /// A session start succeeded.
    Started(GameState),
    /// A call returned a full game state.
    Game(GameState),
    /// A new encounter began.
    BattleOpened {
        /// The encounter.
        battle: BattleState,
        /// Game state returned alongside it.
        game: Option<GameState>,
    },
    /// A battle action returned a new battle snapshot.
    BattleAdvanced {
        /// The new battle snapshot.
        battle: BattleState,
        /// Game state, present once the battle has ended.
        game: Option<GameState>,
    },
    /// The battle view is closed.
    BattleClosed,
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: SessionSnapshot,
    game_generation: Option<Generation>,
    battle_generation: Option<Generation>,
}

impl Inner {
    fn set_game(&mut self, generation: Generation, game: GameState) -> bool {
        if self.game_generation.is_some_and(|applied| generation <= applied) {
            debug!(generation = generation.0, "stale game state discarded");
            return false;
        }
        self.game_generation = Some(generation);
        self.snapshot.game_state = Some(game);
        true
    }

    fn set_battle(&mut self, generation: Generation, battle: Option<BattleState>) -> bool {
        if self.battle_generation.is_some_and(|applied| generation <= applied) {
            debug!(generation = generation.0, "stale battle state discarded");
            return false;
        }
        self.battle_generation = Some(generation);
        self.snapshot.battle_state = battle;
        true
    }
}

/// Owner of the session snapshot.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Inner>,
    issued: AtomicU64,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the generation for a request about to be sent.
    pub fn issue(&self) -> Generation {
        let previous = self.issued.fetch_add(1, Ordering::AcqRel);
        Generation(previous.saturating_add(1))
    }

    /// Apply an update produced by the request that drew `generation`.
    ///
    /// Returns whether anything changed.
    pub async fn commit(&self, generation: Generation, update: StateUpdate) -> bool {
        let mut inner = self.inner.write().await;
        match update {
            StateUpdate::Started(game) => {
                inner.snapshot.phase = SessionPhase::InSession;
                inner.set_game(generation, game)
            }
            StateUpdate::Game(game) => inner.set_game(generation, game),
            StateUpdate::BattleOpened { battle, game } => {
                let roster = game
                    .as_ref()
                    .or(inner.snapshot.game_state.as_ref())
                    .map(|g| g.player.party.iter().map(|m| m.name.clone()).collect())
                    .unwrap_or_default();
                let opened = inner.set_battle(generation, Some(battle));
                if opened {
                    inner.snapshot.battle_roster = roster;
                }
                let refreshed = game.is_some_and(|g| inner.set_game(generation, g));
                opened || refreshed
            }
            StateUpdate::BattleAdvanced { battle, game } => {
                let advanced = inner.set_battle(generation, Some(battle));
                let refreshed = game.is_some_and(|g| inner.set_game(generation, g));
                advanced || refreshed
            }
            StateUpdate::BattleClosed => inner.set_battle(generation, None),
        }
    }

    /// Clone of the whole snapshot.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().await.snapshot.clone()
    }

    /// Clone of the current game state.
    pub async fn game_state(&self) -> Option<GameState> {
        self.inner.read().await.snapshot.game_state.clone()
    }

    /// Clone of the open battle.
    pub async fn battle_state(&self) -> Option<BattleState> {
        self.inner.read().await.snapshot.battle_state.clone()
    }

    /// Current lifecycle phase.
    pub async fn phase(&self) -> SessionPhase {
        self.inner.read().await.snapshot.phase
    }
}
