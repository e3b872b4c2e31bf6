//! Economic valuation engine for F-tickets.
//!
//! An F-ticket's gold value moves with the economy. The server reports a
//! base value and the current condition; this crate turns the pair into
//! the value shown on the status line, used for shop price equivalents and
//! for the holdings total.
//!
//! # Valuation Rule
//!
//! ```text
//! unit_value = floor(base_value * multiplier(condition))
//! ```
//!
//! | Condition | Server label | Multiplier |
//! |-----------|--------------|------------|
//! | Boom | 好況 | 1.5 |
//! | Recovery | 回復 | 1.2 |
//! | Stable | 安定 | 1.0 |
//! | Recession | 不況 | 0.8 |
//! | Panic | 恐慌 | 0.5 |
//!
//! Any other label is valued at 1.0. Everything here is pure: no I/O, no
//! shared state.
//!
//! # Usage
//!
//! ```
//! use fticket_economy::{EconomicCondition, effective_ticket_value, effective_value_for_label};
//!
//! assert_eq!(effective_ticket_value(101, EconomicCondition::Panic), 50);
//! assert_eq!(effective_value_for_label(7, "不況"), 5);
//! assert_eq!(effective_value_for_label(42, "unknown"), 42);
//! ```

pub mod condition;
pub mod valuation;

// Re-export primary types at crate root.
pub use condition::{EconomicCondition, FALLBACK_MULTIPLIER, multiplier_for_label};
pub use valuation::{
    Holdings, PriceQuote, TicketValuation, effective_ticket_value, effective_value_for_label,
};
