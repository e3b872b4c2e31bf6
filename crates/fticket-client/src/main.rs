//! Command-line client for the F-ticket RPG server.
//!
//! Reads one command per line from stdin and prints the result to stdout.
//! Logs go to stderr so they never interleave with the game text.
//!
//! ```text
//! stdin --> parse_command --> GameSession --> server
//!                                  |
//!                                  v
//!                              display --> stdout
//! ```

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fticket_client::command::HELP;
use fticket_client::{ClientConfig, ClientError, Command, CommandError, GameSession, display};
use fticket_economy::TicketValuation;
use fticket_types::GameState;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// then runs the command loop until `quit` or end of input.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = ClientConfig::from_env().context("failed to load configuration")?;
    info!(
        server_url = config.server_url,
        default_player_name = config.default_player_name,
        battle_end_delay_ms = config.battle_end_delay.as_millis(),
        request_timeout_ms = config.request_timeout.map(|t| t.as_millis()),
        "configuration loaded"
    );

    let session = GameSession::new(config).context("failed to create game session")?;

    println!("F-Ticket RPG. Type `start [name]` to begin or `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match fticket_client::parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                let text = match execute(&session, command).await {
                    Ok(text) => text,
                    Err(e) => e.user_message(),
                };
                println!("{text}");
            }
            Err(CommandError::Empty) => {}
            Err(e) => println!("{e}"),
        }
    }

    info!("client exiting");
    Ok(())
}

async fn execute(session: &GameSession, command: Command) -> Result<String, ClientError> {
    let text = match command {
        Command::Start(name) => {
            let receipt = session.start_session(name.as_deref().unwrap_or("")).await?;
            with_message(receipt.message, display::status_line(&receipt.game_state))
        }
        Command::Status => display::status_line(&session.refresh_status().await?),
        Command::Adventure => {
            let start = session.begin_adventure().await?;
            let view = display::battle(&start.battle);
            if start.economy_changed {
                let label = session
                    .game_state()
                    .await
                    .map(|g| g.f_ticket_system.current_condition)
                    .unwrap_or_default();
                format!("The economy has shifted: {label}\n{view}")
            } else {
                view
            }
        }
        Command::Battle(action) => {
            let played = session.play_turn(&action).await?;
            let mut parts: Vec<String> = played.turn.report.message.into_iter().collect();
            match played.summary {
                Some(summary) => {
                    parts.push(summary.message());
                    if let Some(state) = session.game_state().await {
                        parts.push(display::status_line(&state));
                    }
                }
                None => parts.push(display::battle(&played.turn.battle)),
            }
            parts.join("\n")
        }
        Command::Shop => {
            let catalog = session.shop_catalog().await?;
            let valuation = match session.valuation().await {
                Some(valuation) => valuation,
                None => {
                    let state = session.refresh_status().await?;
                    TicketValuation::from_system(&state.f_ticket_system)
                }
            };
            display::shop(&catalog, &valuation)
        }
        Command::Buy {
            kind,
            item,
            currency,
        } => {
            let receipt = session.purchase(kind, item, currency).await?;
            with_message(receipt.message, display::status_line(&receipt.game_state))
        }
        Command::Equip {
            character,
            weapon,
            armor,
        } => {
            let outcome = session.equip_loadout(&character, weapon, armor).await?;
            [outcome.weapon, outcome.armor]
                .into_iter()
                .flatten()
                .map(|result| match result {
                    Ok(receipt) => receipt.message.unwrap_or_else(|| "Equipped.".to_owned()),
                    Err(e) => e.user_message(),
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Command::Use { character, item } => {
            let receipt = session.use_consumable(character, item).await?;
            with_message(receipt.message, display::party(&receipt.game_state.player))
        }
        Command::Recruit {
            new_monster,
            release,
        } => match session.recruit_with_release(new_monster, release).await? {
            Some(receipt) => {
                with_message(receipt.message, display::party(&receipt.game_state.player))
            }
            None => "Name both the monster to recruit and the one to release.".to_owned(),
        },
        Command::Release(name) => {
            let receipt = session.release_monster(name).await?;
            with_message(receipt.message, display::party(&receipt.game_state.player))
        }
        Command::Party => {
            let state = current_state(session).await?;
            format!(
                "{}\n{}",
                display::party(&state.player),
                display::inventory(&state.player)
            )
        }
        Command::Economy => display::economy(&current_state(session).await?),
        Command::Knowledge => display::knowledge(&session.financial_knowledge().await?),
        Command::Help => HELP.to_owned(),
        Command::Quit => String::new(),
    };
    Ok(text)
}

/// Local state if present, otherwise a fresh read from the server.
async fn current_state(session: &GameSession) -> Result<GameState, ClientError> {
    match session.game_state().await {
        Some(state) => Ok(state),
        None => session.refresh_status().await,
    }
}

fn with_message(message: Option<String>, body: String) -> String {
    match message {
        Some(message) => format!("{message}\n{body}"),
        None => body,
    }
}
