//! End-of-battle summary.

use std::collections::BTreeMap;

use fticket_types::{BattleResult, CharacterName, PartyMember, Rewards};

/// What the player is told once a battle ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSummary {
    /// Whether the party won.
    pub victory: bool,
    /// Gold and tickets awarded.
    pub rewards: Rewards,
    /// Every monster that asked to join.
    pub recruited: Vec<CharacterName>,
    /// Recruited monsters that are not in the party, because it was full.
    ///
    /// Each can still join through recruit-with-release.
    pub pending_recruits: Vec<CharacterName>,
}

impl BattleSummary {
    /// Build the summary for `result`.
    ///
    /// `roster` is the party as it was when the battle began and `party`
    /// the party after the post-battle refresh. Without a refreshed party
    /// nothing is reported as pending.
    pub fn new(
        result: &BattleResult,
        roster: &[CharacterName],
        party: Option<&[PartyMember]>,
    ) -> Self {
        let recruited: Vec<CharacterName> = result
            .recruited_monsters
            .iter()
            .map(|m| m.name.clone())
            .collect();
        let pending_recruits = party
            .map(|members| not_joined(&recruited, roster, members))
            .unwrap_or_default();

        Self {
            victory: result.victory,
            rewards: result.rewards,
            recruited,
            pending_recruits,
        }
    }

    /// Player-facing text.
    pub fn message(&self) -> String {
        if !self.victory {
            return "Your party was wiped out...".to_owned();
        }

        let gold = if self.rewards.gold < 0 {
            format!("Lost {} gold", self.rewards.gold.unsigned_abs())
        } else {
            format!("Earned {} gold", self.rewards.gold)
        };
        let mut lines = vec![
            "Victory!".to_owned(),
            format!("{gold} and {} F-tickets.", self.rewards.f_tickets),
        ];
        let joined = self.joined();
        if !joined.is_empty() {
            lines.push(format!("{} joined the party!", join_names(&joined)));
        }
        if !self.pending_recruits.is_empty() {
            lines.push(format!(
                "The party is full. {} can join if you release a monster.",
                join_names(&self.pending_recruits)
            ));
        }
        lines.join("\n")
    }

    /// Recruits that actually made it into the party.
    fn joined(&self) -> Vec<CharacterName> {
        let mut pending = self.pending_recruits.clone();
        let mut joined = Vec::new();
        for name in &self.recruited {
            match pending.iter().position(|p| p == name) {
                Some(index) => {
                    pending.swap_remove(index);
                }
                None => joined.push(name.clone()),
            }
        }
        joined
    }
}

/// Recruits not accounted for by growth of the party.
///
/// Compared as multisets: two recruits called "Slime" need two more
/// "Slime" members than the starting roster had.
fn not_joined(
    recruited: &[CharacterName],
    roster: &[CharacterName],
    party: &[PartyMember],
) -> Vec<CharacterName> {
    let mut before: BTreeMap<&CharacterName, usize> = BTreeMap::new();
    for name in roster {
        let count = before.entry(name).or_default();
        *count = count.saturating_add(1);
    }
    let mut joined: BTreeMap<&CharacterName, usize> = BTreeMap::new();
    for member in party {
        let count = joined.entry(&member.name).or_default();
        *count = count.saturating_add(1);
    }
    for (name, count) in &mut joined {
        *count = count.saturating_sub(before.get(name).copied().unwrap_or(0));
    }

    let mut pending = Vec::new();
    for name in recruited {
        match joined.get_mut(name) {
            Some(count) if *count > 0 => *count = count.saturating_sub(1),
            _ => pending.push(name.clone()),
        }
    }
    pending
}

fn join_names(names: &[CharacterName]) -> String {
    names
        .iter()
        .map(CharacterName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use fticket_types::CharacterType;

    use super::*;

    fn member(name: &str, kind: CharacterType) -> PartyMember {
        PartyMember {
            name: CharacterName::from(name),
            character_type: kind,
            hp: 10,
            max_hp: 10,
            mp: 0,
            max_mp: 0,
            attack: 5,
            defense: 5,
            level: 1,
            experience: 0,
            exp_needed: None,
            equipped_weapon: None,
            equipped_armor: None,
            emoji: None,
        }
    }

    fn victory(gold: i64, f_tickets: u64, recruits: &[&str]) -> BattleResult {
        BattleResult {
            victory: true,
            rewards: Rewards { gold, f_tickets },
            recruited_monsters: recruits
                .iter()
                .map(|n| member(n, CharacterType::Monster))
                .collect(),
        }
    }

    #[test]
    fn victory_message_names_rewards_and_recruits() {
        let summary = BattleSummary::new(&victory(50, 3, &["Slime"]), &[], None);
        let message = summary.message();
        assert!(message.contains("50"));
        assert!(message.contains('3'));
        assert!(message.contains("Slime"));
    }

    #[test]
    fn defeat_message() {
        let result = BattleResult {
            victory: false,
            rewards: Rewards::default(),
            recruited_monsters: Vec::new(),
        };
        let summary = BattleSummary::new(&result, &[], None);
        assert_eq!(summary.message(), "Your party was wiped out...");
    }

    #[test]
    fn recruit_that_joined_is_not_pending() {
        let roster = vec![CharacterName::from("Hero")];
        let party = vec![
            member("Hero", CharacterType::Human),
            member("Slime", CharacterType::Monster),
        ];
        let summary = BattleSummary::new(&victory(10, 0, &["Slime"]), &roster, Some(&party));
        assert!(summary.pending_recruits.is_empty());
    }

    #[test]
    fn recruit_turned_away_by_full_party_is_pending() {
        let roster: Vec<CharacterName> = ["Hero", "Slime", "Bat", "Goblin"]
            .into_iter()
            .map(CharacterName::from)
            .collect();
        let party: Vec<PartyMember> = roster
            .iter()
            .map(|n| member(n.as_str(), CharacterType::Monster))
            .collect();
        let summary = BattleSummary::new(&victory(10, 1, &["Slime"]), &roster, Some(&party));
        assert_eq!(summary.pending_recruits, vec![CharacterName::from("Slime")]);
        let message = summary.message();
        assert!(message.contains("release"));
        assert!(!message.contains("joined the party"));
    }

    #[test]
    fn only_recruits_that_fit_are_reported_as_joined() {
        let roster: Vec<CharacterName> = ["Hero", "Slime", "Bat"]
            .into_iter()
            .map(CharacterName::from)
            .collect();
        let mut party: Vec<PartyMember> = roster
            .iter()
            .map(|n| member(n.as_str(), CharacterType::Monster))
            .collect();
        party.push(member("Golem", CharacterType::Monster));
        let summary =
            BattleSummary::new(&victory(10, 0, &["Golem", "Imp"]), &roster, Some(&party));
        assert_eq!(summary.pending_recruits, vec![CharacterName::from("Imp")]);
        let message = summary.message();
        assert!(message.contains("Golem joined the party!"));
        assert!(!message.contains("Imp joined"));
        assert!(message.contains("Imp can join"));
    }

    #[test]
    fn negative_gold_reward_is_reported_as_a_loss() {
        let summary = BattleSummary::new(&victory(-42, 1, &[]), &[], None);
        let message = summary.message();
        assert!(message.contains("Lost 42 gold and 1 F-tickets."));
        assert!(!message.contains("-42"));
    }

    #[test]
    fn duplicate_names_are_counted() {
        let roster = vec![CharacterName::from("Hero"), CharacterName::from("Slime")];
        let party = vec![
            member("Hero", CharacterType::Human),
            member("Slime", CharacterType::Monster),
            member("Slime", CharacterType::Monster),
            member("Slime", CharacterType::Monster),
        ];
        let summary = BattleSummary::new(
            &victory(0, 0, &["Slime", "Slime", "Slime"]),
            &roster,
            Some(&party),
        );
        assert_eq!(summary.pending_recruits, vec![CharacterName::from("Slime")]);
    }
}
