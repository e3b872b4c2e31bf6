//! Parsing of the line-oriented player commands.
//!
//! One command per line. Arguments are separated by whitespace; a name
//! containing spaces can be wrapped in double quotes. Enemy numbers are
//! 1-based, matching the numbering in the battle view.

use fticket_types::{BattleCommand, CharacterName, Currency, ItemName, PurchaseKind};

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a game, optionally naming the hero.
    Start(Option<String>),
    /// Refresh and show the status line.
    Status,
    /// Set out for a battle.
    Adventure,
    /// Perform a battle action.
    Battle(BattleCommand),
    /// Show the shop.
    Shop,
    /// Buy an item.
    Buy {
        /// What is being bought.
        kind: PurchaseKind,
        /// Item name.
        item: ItemName,
        /// How to pay.
        currency: Currency,
    },
    /// Equip a weapon and/or armor on a character.
    Equip {
        /// Who to equip.
        character: CharacterName,
        /// Weapon to equip.
        weapon: Option<ItemName>,
        /// Armor to equip.
        armor: Option<ItemName>,
    },
    /// Use a consumable on a character.
    Use {
        /// Who receives the item.
        character: CharacterName,
        /// Item to use.
        item: ItemName,
    },
    /// Recruit a waiting monster, releasing another.
    Recruit {
        /// Monster to recruit.
        new_monster: CharacterName,
        /// Monster to release.
        release: CharacterName,
    },
    /// Release a monster from the party.
    Release(CharacterName),
    /// Show the party and inventory.
    Party,
    /// Show the economy panel.
    Economy,
    /// Show the financial lesson for the current economy.
    Knowledge,
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Blank line.
    #[error("no command given")]
    Empty,
    /// First word is not a command.
    #[error("unknown command `{0}` (type `help` for the list)")]
    Unknown(String),
    /// A required argument is missing.
    #[error("usage: {0}")]
    Usage(&'static str),
    /// An argument has the wrong form.
    #[error("invalid argument `{0}`")]
    Invalid(String),
    /// A quote was opened but never closed.
    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Command list shown by `help`.
pub const HELP: &str = "\
start [name]                         start a new game
status                               show gold, tickets and the ticket value
adventure                            set out for a battle
attack [n]                           attack enemy n
spell <name> [n]                     cast a spell, optionally at enemy n
item <name>                          use an item in battle
defend                               defend this turn
shop                                 list the shop's stock
buy <weapon|armor|item> <name> [gold|tickets]
equip <character> [weapon=<name>] [armor=<name>]
use <character> <item>               use a consumable outside battle
recruit <new> <release>              recruit a monster by releasing another
release <name>                       release a monster
party                                show the party and inventory
economy                              show the economy panel
knowledge                            show the financial lesson
help                                 show this list
quit                                 leave";

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let words = tokenize(line)?;
    let Some((head, args)) = words.split_first() else {
        return Err(CommandError::Empty);
    };

    let command = match head.to_lowercase().as_str() {
        "start" => Command::Start(optional_rest(args)),
        "status" => Command::Status,
        "adventure" | "adv" => Command::Adventure,
        "attack" => {
            let target = args.first().map(|a| enemy_index(a)).transpose()?;
            Command::Battle(BattleCommand::attack(target))
        }
        "spell" => {
            let name = args.first().ok_or(CommandError::Usage("spell <name> [n]"))?;
            let target = args.get(1).map(|a| enemy_index(a)).transpose()?;
            Command::Battle(BattleCommand::spell(name.as_str(), target))
        }
        "item" => {
            let name = required_rest(args, "item <name>")?;
            Command::Battle(BattleCommand::item(name))
        }
        "defend" => Command::Battle(BattleCommand::defend()),
        "shop" => Command::Shop,
        "buy" => parse_buy(args)?,
        "equip" => parse_equip(args)?,
        "use" => {
            let [character, item] = args else {
                return Err(CommandError::Usage("use <character> <item>"));
            };
            Command::Use {
                character: CharacterName::from(character.as_str()),
                item: ItemName::from(item.as_str()),
            }
        }
        "recruit" => {
            let [new_monster, release] = args else {
                return Err(CommandError::Usage("recruit <new> <release>"));
            };
            Command::Recruit {
                new_monster: CharacterName::from(new_monster.as_str()),
                release: CharacterName::from(release.as_str()),
            }
        }
        "release" => Command::Release(CharacterName::from(required_rest(
            args,
            "release <name>",
        )?)),
        "party" | "inventory" => Command::Party,
        "economy" => Command::Economy,
        "knowledge" => Command::Knowledge,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(head.clone())),
    };
    Ok(command)
}

const BUY_USAGE: &str = "buy <weapon|armor|item> <name> [gold|tickets]";

fn parse_buy(args: &[String]) -> Result<Command, CommandError> {
    let (kind, rest) = args.split_first().ok_or(CommandError::Usage(BUY_USAGE))?;
    let kind = match kind.to_lowercase().as_str() {
        "weapon" => PurchaseKind::Weapon,
        "armor" => PurchaseKind::Armor,
        "item" | "consumable" => PurchaseKind::Consumable,
        other => return Err(CommandError::Invalid(other.to_owned())),
    };

    let (currency, name_words) = match rest.split_last() {
        Some((last, init)) if !init.is_empty() => match currency(last) {
            Some(c) => (c, init),
            None => (Currency::Gold, rest),
        },
        _ => (Currency::Gold, rest),
    };
    if name_words.is_empty() {
        return Err(CommandError::Usage(BUY_USAGE));
    }

    Ok(Command::Buy {
        kind,
        item: ItemName::new(name_words.join(" ")),
        currency,
    })
}

const EQUIP_USAGE: &str = "equip <character> [weapon=<name>] [armor=<name>]";

fn parse_equip(args: &[String]) -> Result<Command, CommandError> {
    let (character, slots) = args.split_first().ok_or(CommandError::Usage(EQUIP_USAGE))?;
    let mut weapon = None;
    let mut armor = None;
    for slot in slots {
        let Some((key, value)) = slot.split_once('=') else {
            return Err(CommandError::Invalid(slot.clone()));
        };
        let value = ItemName::from(value);
        match key.to_lowercase().as_str() {
            "weapon" => weapon = Some(value),
            "armor" => armor = Some(value),
            _ => return Err(CommandError::Invalid(slot.clone())),
        }
    }
    if weapon.is_none() && armor.is_none() {
        return Err(CommandError::Usage(EQUIP_USAGE));
    }
    Ok(Command::Equip {
        character: CharacterName::from(character.as_str()),
        weapon,
        armor,
    })
}

fn currency(word: &str) -> Option<Currency> {
    match word.to_lowercase().as_str() {
        "gold" | "g" => Some(Currency::Gold),
        "tickets" | "ticket" | "f" => Some(Currency::FTickets),
        _ => None,
    }
}

/// 1-based enemy number to the server's 0-based index.
fn enemy_index(word: &str) -> Result<usize, CommandError> {
    word.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| CommandError::Invalid(word.to_owned()))
}

fn optional_rest(args: &[String]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}

fn required_rest(args: &[String], usage: &'static str) -> Result<String, CommandError> {
    optional_rest(args).ok_or(CommandError::Usage(usage))
}

/// Split a line into words, honoring double quotes.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if quoted {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
