//! In-flight gates, one per action category.
//!
//! A gate admits one request at a time. A trigger that arrives while the
//! category's request is still running is refused with
//! [`ClientError::Busy`] and never reaches the server. The pass returned on
//! entry reopens the gate when dropped, including when the owning future
//! is cancelled.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ClientError;

/// Logical grouping of state-changing requests that must not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    /// Session start.
    Session,
    /// Adventure, battle actions and battle conclusion.
    Battle,
    /// Shop purchases.
    Shop,
    /// Equip, consumable use, recruit and release.
    Party,
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Session => "session",
            Self::Battle => "battle",
            Self::Shop => "shop",
            Self::Party => "party",
        };
        f.write_str(name)
    }
}

/// A single busy flag.
#[derive(Debug, Default)]
pub struct ActionGate {
    busy: AtomicBool,
}

impl ActionGate {
    /// Enter the gate, or `None` if it is already held.
    pub fn try_enter(&self) -> Option<GatePass<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GatePass { gate: self })
    }

    /// Whether a request currently holds the gate.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Proof of entry; reopens the gate on drop.
#[derive(Debug)]
pub struct GatePass<'a> {
    gate: &'a ActionGate,
}

impl Drop for GatePass<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

/// The full set of gates used by a session.
#[derive(Debug, Default)]
pub struct ActionGates {
    session: ActionGate,
    battle: ActionGate,
    shop: ActionGate,
    party: ActionGate,
}

impl ActionGates {
    /// Enter the gate for `category`.
    pub fn enter(&self, category: ActionCategory) -> Result<GatePass<'_>, ClientError> {
        self.gate(category)
            .try_enter()
            .ok_or(ClientError::Busy(category))
    }

    /// Whether `category` has a request in flight.
    pub fn is_busy(&self, category: ActionCategory) -> bool {
        self.gate(category).is_busy()
    }

    const fn gate(&self, category: ActionCategory) -> &ActionGate {
        match category {
            ActionCategory::Session => &self.session,
            ActionCategory::Battle => &self.battle,
            ActionCategory::Shop => &self.shop,
            ActionCategory::Party => &self.party,
        }
    }
}
