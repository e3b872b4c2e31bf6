//! Ticket valuation: base value times condition multiplier, floored.
//!
//! All arithmetic uses [`Decimal`] so that 1.2x and 0.8x are exact; the
//! result is truncated toward zero. The truncation is observable in shop
//! prices (101 under Panic is worth 50, not 50.5 or 51) and must not
//! change.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use fticket_types::{FTicketSystemState, PlayerState, Price};

use crate::condition::{EconomicCondition, multiplier_for_label};

/// Gold value of one ticket under `condition`.
///
/// Computes `floor(base_value * multiplier)`. Values that would exceed
/// `u64::MAX` saturate.
pub fn effective_ticket_value(base_value: u64, condition: EconomicCondition) -> u64 {
    apply_multiplier(base_value, condition.multiplier())
}

/// Gold value of one ticket for a raw server condition label.
///
/// Unrecognized labels silently use a multiplier of 1.0, so the base value
/// passes through unchanged.
pub fn effective_value_for_label(base_value: u64, label: &str) -> u64 {
    apply_multiplier(base_value, multiplier_for_label(label))
}

fn apply_multiplier(base_value: u64, multiplier: Decimal) -> u64 {
    Decimal::from(base_value)
        .checked_mul(multiplier)
        .and_then(|value| value.floor().to_u64())
        .unwrap_or(u64::MAX)
}

// ---------------------------------------------------------------------------
// Valuation snapshot
// ---------------------------------------------------------------------------

/// Ticket valuation derived from one [`FTicketSystemState`].
///
/// Built fresh for every presentation and never cached beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketValuation {
    /// Parsed condition, `None` when the label was not recognized.
    pub condition: Option<EconomicCondition>,
    /// Raw server label.
    pub label: String,
    /// Base value before the multiplier.
    pub base_value: u64,
    /// Gold value of one ticket.
    pub unit_value: u64,
}

impl TicketValuation {
    /// Value the tickets described by a server snapshot.
    pub fn from_system(system: &FTicketSystemState) -> Self {
        let condition = EconomicCondition::from_label(&system.current_condition);
        Self {
            condition,
            label: system.current_condition.clone(),
            base_value: system.base_value,
            unit_value: effective_value_for_label(system.base_value, &system.current_condition),
        }
    }

    /// Multiplier in effect (1.0 for unrecognized labels).
    pub fn multiplier(&self) -> Decimal {
        multiplier_for_label(&self.label)
    }

    /// Gold equivalent of `tickets` tickets at the current unit value.
    pub const fn gold_equivalent(&self, tickets: u64) -> u64 {
        self.unit_value.saturating_mul(tickets)
    }

    /// Narrative description, empty for unrecognized labels.
    pub fn description(&self) -> &'static str {
        self.condition.map_or("", EconomicCondition::description)
    }

    /// Quote a shop price in both currencies plus the tickets' gold value.
    pub const fn quote(&self, price: &Price) -> PriceQuote {
        PriceQuote {
            gold: price.price_gold,
            f_tickets: price.price_f_tickets,
            f_tickets_in_gold: self.gold_equivalent(price.price_f_tickets),
        }
    }

    /// Holdings summary for a player.
    pub const fn holdings(&self, player: &PlayerState) -> Holdings {
        Holdings {
            gold: player.gold,
            f_tickets: player.f_tickets,
            f_tickets_in_gold: self.gold_equivalent(player.f_tickets),
        }
    }
}

/// A shop price with its ticket price expressed in gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    /// Gold price.
    pub gold: u64,
    /// Ticket price.
    pub f_tickets: u64,
    /// Gold value of the ticket price right now.
    pub f_tickets_in_gold: u64,
}

/// A player's money at the current valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holdings {
    /// Gold on hand.
    pub gold: u64,
    /// Tickets on hand.
    pub f_tickets: u64,
    /// Total gold value of the tickets on hand.
    pub f_tickets_in_gold: u64,
}

impl Holdings {
    /// Gold plus the tickets' gold value.
    pub const fn total(&self) -> u64 {
        self.gold.saturating_add(self.f_tickets_in_gold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exact ratio for each multiplier, for integer cross-checks.
    const fn ratio(condition: EconomicCondition) -> (u64, u64) {
        match condition {
            EconomicCondition::Boom => (3, 2),
            EconomicCondition::Recovery => (6, 5),
            EconomicCondition::Stable => (1, 1),
            EconomicCondition::Recession => (4, 5),
            EconomicCondition::Panic => (1, 2),
        }
    }

    fn system(label: &str, base_value: u64) -> FTicketSystemState {
        FTicketSystemState {
            current_condition: label.to_owned(),
            base_value,
        }
    }

    #[test]
    fn documented_examples() {
        assert_eq!(effective_ticket_value(100, EconomicCondition::Panic), 50);
        assert_eq!(effective_ticket_value(101, EconomicCondition::Panic), 50);
        assert_eq!(effective_ticket_value(10, EconomicCondition::Boom), 15);
        assert_eq!(effective_ticket_value(7, EconomicCondition::Recession), 5);
        assert_eq!(effective_ticket_value(50, EconomicCondition::Recovery), 60);
        assert_eq!(effective_ticket_value(0, EconomicCondition::Boom), 0);
    }

    #[test]
    fn matches_floor_of_exact_product() {
        for condition in EconomicCondition::ALL {
            let (num, den) = ratio(condition);
            for base in 0..=2_000_u64 {
                let expected = base * num / den;
                assert_eq!(
                    effective_ticket_value(base, condition),
                    expected,
                    "base {base} under {condition}"
                );
            }
        }
    }

    #[test]
    fn recovery_values_are_exact() {
        assert_eq!(effective_ticket_value(5, EconomicCondition::Recovery), 6);
        assert_eq!(effective_ticket_value(15, EconomicCondition::Recovery), 18);
    }

    #[test]
    fn unrecognized_label_passes_base_through() {
        for base in [0, 1, 7, 50, 101, u64::MAX] {
            assert_eq!(effective_value_for_label(base, "Hyperinflation"), base);
            assert_eq!(effective_value_for_label(base, ""), base);
        }
    }

    #[test]
    fn server_labels_apply_their_multiplier() {
        assert_eq!(effective_value_for_label(100, "恐慌"), 50);
        assert_eq!(effective_value_for_label(100, "好況"), 150);
        assert_eq!(effective_value_for_label(100, "Recession"), 80);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(effective_ticket_value(u64::MAX, EconomicCondition::Boom), u64::MAX);
        assert_eq!(
            effective_ticket_value(u64::MAX, EconomicCondition::Panic),
            u64::MAX / 2
        );
    }

    #[test]
    fn valuation_from_snapshot() {
        let valuation = TicketValuation::from_system(&system("不況", 50));
        assert_eq!(valuation.condition, Some(EconomicCondition::Recession));
        assert_eq!(valuation.unit_value, 40);
        assert_eq!(valuation.gold_equivalent(3), 120);
        assert_eq!(valuation.multiplier(), Decimal::new(8, 1));
        assert!(!valuation.description().is_empty());
    }

    #[test]
    fn valuation_of_unknown_condition() {
        let valuation = TicketValuation::from_system(&system("???", 50));
        assert_eq!(valuation.condition, None);
        assert_eq!(valuation.unit_value, 50);
        assert_eq!(valuation.description(), "");
    }

    #[test]
    fn quotes_ticket_prices_in_gold() {
        let valuation = TicketValuation::from_system(&system("好況", 51));
        // floor(51 * 1.5) = 76 per ticket
        let quote = valuation.quote(&Price {
            price_gold: 300,
            price_f_tickets: 4,
        });
        assert_eq!(
            quote,
            PriceQuote {
                gold: 300,
                f_tickets: 4,
                f_tickets_in_gold: 304,
            }
        );
    }

    #[test]
    fn holdings_total() {
        let valuation = TicketValuation::from_system(&system("恐慌", 50));
        let player: Option<PlayerState> = serde_json::from_value(serde_json::json!({
            "gold": 10, "f_tickets": 7
        }))
        .ok();
        let holdings = player.map(|p| valuation.holdings(&p));
        assert_eq!(
            holdings,
            Some(Holdings {
                gold: 10,
                f_tickets: 7,
                f_tickets_in_gold: 175,
            })
        );
        assert_eq!(holdings.map(|h| h.total()), Some(185));
    }
}
