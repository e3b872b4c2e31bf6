//! Economic conditions and their fixed ticket multipliers.
//!
//! The multiplier table is an exhaustive `match`, so adding or removing a
//! condition is a compile-time change. Labels the server sends that match
//! no condition are not an error: callers fall back to
//! [`FALLBACK_MULTIPLIER`].

use std::fmt;

use rust_decimal::Decimal;

/// Multiplier applied when the condition label is not recognized.
pub const FALLBACK_MULTIPLIER: Decimal = Decimal::ONE;

const BOOM_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
const RECOVERY_MULTIPLIER: Decimal = Decimal::from_parts(12, 0, 0, false, 1);
const STABLE_MULTIPLIER: Decimal = Decimal::ONE;
const RECESSION_MULTIPLIER: Decimal = Decimal::from_parts(8, 0, 0, false, 1);
const PANIC_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// One of the five macro-economic states that move the ticket value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EconomicCondition {
    /// Booming economy: tickets worth 1.5x.
    Boom,
    /// Recovering economy: tickets worth 1.2x.
    Recovery,
    /// Stable economy: tickets at face value.
    Stable,
    /// Recession: tickets worth 0.8x.
    Recession,
    /// Financial panic: tickets worth 0.5x.
    Panic,
}

impl EconomicCondition {
    /// Every condition, from strongest to weakest.
    pub const ALL: [Self; 5] = [
        Self::Boom,
        Self::Recovery,
        Self::Stable,
        Self::Recession,
        Self::Panic,
    ];

    /// Fixed multiplier applied to the ticket base value.
    pub const fn multiplier(self) -> Decimal {
        match self {
            Self::Boom => BOOM_MULTIPLIER,
            Self::Recovery => RECOVERY_MULTIPLIER,
            Self::Stable => STABLE_MULTIPLIER,
            Self::Recession => RECESSION_MULTIPLIER,
            Self::Panic => PANIC_MULTIPLIER,
        }
    }

    /// The label the game server uses on the wire.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boom => "好況",
            Self::Recovery => "回復",
            Self::Stable => "安定",
            Self::Recession => "不況",
            Self::Panic => "恐慌",
        }
    }

    /// English name of the condition.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boom => "Boom",
            Self::Recovery => "Recovery",
            Self::Stable => "Stable",
            Self::Recession => "Recession",
            Self::Panic => "Panic",
        }
    }

    /// Parse a condition from its server label or its English name.
    ///
    /// Matching is exact. Returns `None` for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label || c.name() == label)
    }

    /// Short narrative of what the condition does to ticket value.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Boom => "The economy is booming and F-tickets are gaining value.",
            Self::Recovery => "The economy is recovering and F-tickets are worth a little more.",
            Self::Stable => "The economy is stable and F-tickets hold their face value.",
            Self::Recession => "The economy is in recession and F-tickets are losing value.",
            Self::Panic => "A financial panic has sent F-ticket values tumbling.",
        }
    }
}

impl fmt::Display for EconomicCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Multiplier for a raw server label, falling back to 1.0 when unknown.
pub fn multiplier_for_label(label: &str) -> Decimal {
    EconomicCondition::from_label(label).map_or(FALLBACK_MULTIPLIER, EconomicCondition::multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_table() {
        assert_eq!(EconomicCondition::Boom.multiplier(), Decimal::new(15, 1));
        assert_eq!(EconomicCondition::Recovery.multiplier(), Decimal::new(12, 1));
        assert_eq!(EconomicCondition::Stable.multiplier(), Decimal::ONE);
        assert_eq!(EconomicCondition::Recession.multiplier(), Decimal::new(8, 1));
        assert_eq!(EconomicCondition::Panic.multiplier(), Decimal::new(5, 1));
    }

    #[test]
    fn every_multiplier_is_positive() {
        for condition in EconomicCondition::ALL {
            assert!(condition.multiplier() > Decimal::ZERO, "{condition}");
        }
    }

    #[test]
    fn parses_server_labels_and_names() {
        for condition in EconomicCondition::ALL {
            assert_eq!(EconomicCondition::from_label(condition.label()), Some(condition));
            assert_eq!(EconomicCondition::from_label(condition.name()), Some(condition));
        }
    }

    #[test]
    fn unknown_labels_are_not_parsed() {
        assert_eq!(EconomicCondition::from_label("boom"), None);
        assert_eq!(EconomicCondition::from_label(""), None);
        assert_eq!(EconomicCondition::from_label("バブル"), None);
    }

    #[test]
    fn unknown_label_uses_fallback_multiplier() {
        assert_eq!(multiplier_for_label("Hyperinflation"), FALLBACK_MULTIPLIER);
        assert_eq!(multiplier_for_label("恐慌"), Decimal::new(5, 1));
    }
}
