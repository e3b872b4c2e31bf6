//! Plain-text views of the session snapshot.
//!
//! Every function here is pure: it takes server data (and, where prices or
//! holdings are shown, a [`TicketValuation`]) and returns text for stdout.

use fticket_economy::TicketValuation;
use fticket_types::{
    BattleState, FULL_RESTORE, FinancialKnowledge, GameState, ItemName, PartyMember, PlayerState,
    Price, ShopCatalog,
};

/// Battle log lines shown under the battle view.
const BATTLE_LOG_TAIL: usize = 5;

/// One-line status: area, gold, tickets, unit value and condition.
pub fn status_line(state: &GameState) -> String {
    let valuation = TicketValuation::from_system(&state.f_ticket_system);
    format!(
        "Area {} | {} G | {} F-tickets (1 = {} G) | Economy: {}",
        state.current_area,
        state.player.gold,
        state.player.f_tickets,
        valuation.unit_value,
        valuation.label,
    )
}

/// Shop catalog with gold price, ticket price and its gold equivalent.
pub fn shop(catalog: &ShopCatalog, valuation: &TicketValuation) -> String {
    if catalog.is_empty() {
        return "The shop has nothing for sale.".to_owned();
    }

    let mut lines = vec![format!("Shop (1 F-ticket = {} G)", valuation.unit_value)];
    if !catalog.weapons.is_empty() {
        lines.push("Weapons:".to_owned());
        for w in &catalog.weapons {
            lines.push(format!(
                "  {} (ATK +{}) {}",
                w.name,
                w.attack_bonus,
                price_tag(&w.price, valuation)
            ));
        }
    }
    if !catalog.armors.is_empty() {
        lines.push("Armor:".to_owned());
        for a in &catalog.armors {
            lines.push(format!(
                "  {} (DEF +{}) {}",
                a.name,
                a.defense_bonus,
                price_tag(&a.price, valuation)
            ));
        }
    }
    if !catalog.consumables.is_empty() {
        lines.push("Items:".to_owned());
        for c in &catalog.consumables {
            lines.push(format!(
                "  {} ({}) {}",
                c.name,
                restore_text(c.hp_restore, c.mp_restore),
                price_tag(&c.price, valuation)
            ));
        }
    }
    lines.join("\n")
}

fn price_tag(price: &Price, valuation: &TicketValuation) -> String {
    let quote = valuation.quote(price);
    format!(
        "{} G or {} F-tickets (~{} G)",
        quote.gold, quote.f_tickets, quote.f_tickets_in_gold
    )
}

fn restore_text(hp: u32, mp: u32) -> String {
    let amount = |n: u32| {
        if n >= FULL_RESTORE {
            "full".to_owned()
        } else {
            n.to_string()
        }
    };
    match (hp, mp) {
        (0, 0) => "no effect".to_owned(),
        (hp, 0) => format!("HP +{}", amount(hp)),
        (0, mp) => format!("MP +{}", amount(mp)),
        (hp, mp) => format!("HP +{} MP +{}", amount(hp), amount(mp)),
    }
}

/// Owned weapons, armor and consumables.
pub fn inventory(player: &PlayerState) -> String {
    let mut lines = vec!["Inventory:".to_owned()];
    for w in &player.inventory_weapons {
        lines.push(format!("  [weapon] {} (ATK +{})", w.name, w.attack_bonus));
    }
    for a in &player.inventory_armors {
        lines.push(format!("  [armor] {} (DEF +{})", a.name, a.defense_bonus));
    }
    for (name, count) in player.stocked_consumables() {
        lines.push(format!("  [item] {name} x{count}"));
    }
    if lines.len() == 1 {
        lines.push("  (empty)".to_owned());
    }
    lines.join("\n")
}

/// Party listing.
pub fn party(player: &PlayerState) -> String {
    let mut lines = vec![format!(
        "Party ({}/{}):",
        player.party.len(),
        fticket_types::MAX_PARTY_SIZE
    )];
    lines.extend(player.party.iter().map(member_line));
    lines.join("\n")
}

fn member_line(m: &PartyMember) -> String {
    let stats = format!(
        "  {}{} [{}] Lv{} HP {}/{} MP {}/{} ATK {} DEF {} EXP {}/{}",
        m.emoji.as_deref().map(|e| format!("{e} ")).unwrap_or_default(),
        m.name,
        m.character_type.label(),
        m.level,
        m.hp,
        m.max_hp,
        m.mp,
        m.max_mp,
        m.attack,
        m.defense,
        m.experience,
        m.experience_target(),
    );
    let gear: Vec<&str> = [&m.equipped_weapon, &m.equipped_armor]
        .into_iter()
        .flatten()
        .map(ItemName::as_str)
        .collect();
    if gear.is_empty() {
        stats
    } else {
        format!("{stats} | {}", gear.join(", "))
    }
}

/// Economy panel: condition, description, unit value and holdings.
pub fn economy(state: &GameState) -> String {
    let valuation = TicketValuation::from_system(&state.f_ticket_system);
    let holdings = valuation.holdings(&state.player);
    let mut lines = vec![format!("Economy: {}", valuation.label)];
    let description = valuation.description();
    if !description.is_empty() {
        lines.push(description.to_owned());
    }
    lines.push(format!(
        "1 F-ticket = {} G (base {} x {})",
        valuation.unit_value,
        valuation.base_value,
        valuation.multiplier()
    ));
    lines.push(format!(
        "Holdings: {} G + {} F-tickets (~{} G)",
        holdings.gold, holdings.f_tickets, holdings.f_tickets_in_gold
    ));
    lines.push(format!("Total value: {} G", holdings.total()));
    lines.join("\n")
}

/// Battle view: living enemies (numbered for targeting), the active
/// character and the latest log lines.
pub fn battle(state: &BattleState) -> String {
    let mut lines = vec![format!("Turn {}", state.turn), "Enemies:".to_owned()];
    for (number, enemy) in (1..).zip(state.living_enemies()) {
        lines.push(format!(
            "  {number}. {}{} Lv{} HP {}/{}",
            enemy.emoji.as_deref().map(|e| format!("{e} ")).unwrap_or_default(),
            enemy.name,
            enemy.level,
            enemy.hp,
            enemy.max_hp
        ));
    }
    lines.push("Party:".to_owned());
    for member in &state.player_party {
        let status = if member.is_alive { "" } else { " (down)" };
        lines.push(format!(
            "  {} HP {}/{} MP {}/{}{status}",
            member.name, member.hp, member.max_hp, member.mp, member.max_mp
        ));
    }
    if state.is_player_turn && !state.is_battle_over {
        if let Some(active) = state.active_combatant() {
            lines.push(format!("{}'s turn.", active.name));
        }
    }
    let skip = state.battle_log.len().saturating_sub(BATTLE_LOG_TAIL);
    lines.extend(state.battle_log.iter().skip(skip).map(|l| format!("> {l}")));
    lines.join("\n")
}

/// Financial knowledge panel.
pub fn knowledge(info: &FinancialKnowledge) -> String {
    let mut lines = vec![format!("Economy: {}", info.condition)];
    if let Some(value) = info.f_ticket_value {
        lines.push(format!("1 F-ticket = {value} G"));
    }
    lines.push(info.description.clone());
    lines.push(String::new());
    lines.push(info.knowledge.clone());
    lines.join("\n")
}
