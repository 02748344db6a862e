//! Landclash - Entry Point
//!
//! Interactive console front end: builds a game from command-line arguments
//! and runs the blocking turn loop against the core crate. All text output
//! goes to stdout; diagnostics go to stderr via tracing.

use clap::Parser;
use landclash_core::{
    GameSettings, GameState, Player, PlayerId, SeededRng, TurnCommand, TurnReport,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "landclash", about = "A turn-based territory-conquest game")]
struct Args {
    /// Number of land parcels on the board.
    #[arg(long, default_value_t = 10)]
    lands: u32,

    /// Comma-separated player roster.
    #[arg(long, value_delimiter = ',', default_value = "Alice,Bob,Charlie,Diana")]
    players: Vec<String>,

    /// Seed for a reproducible game (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    // Diagnostics on stderr so stdout stays a clean game surface.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "landclash=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, lands = args.lands, "starting game");

    let mut rng = SeededRng::from_u64(seed);
    let settings = GameSettings::new(args.lands, args.players);
    let mut game = match GameState::new(settings, &mut rng) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut game, &mut rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("console error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Run the blocking turn loop until a winner emerges or stdin closes.
fn run(game: &mut GameState, rng: &mut SeededRng) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_game_state(game);
        print!("Enter attacker name, defender name, and land ID: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            tracing::info!("stdin closed, exiting");
            return Ok(());
        };
        let line = line?;

        let Some(cmd) = parse_command(&line) else {
            println!("Invalid input. Try again.");
            continue;
        };

        match game.submit_turn(&cmd, rng) {
            Ok(report) => {
                print_outcome(game, &report);
                if report.winner.is_some() {
                    return Ok(());
                }
            }
            Err(err) => {
                tracing::debug!(%err, "turn rejected");
                println!("Invalid input. Try again.");
            }
        }
    }
}

/// Print every owned land with its owner, in land order.
fn print_game_state(game: &GameState) {
    println!("Game State:");
    for (id, owner) in game.owned_lands() {
        println!("Land {id} owned by {owner}");
    }
}

/// Print the battle result and, when the game just ended, the winner.
fn print_outcome(game: &GameState, report: &TurnReport) {
    let name = |id: PlayerId| game.player(id).map_or("?", Player::name);
    let outcome = &report.outcome;
    if outcome.attacker_won {
        println!(
            "{} wins the battle for land {}!",
            name(outcome.winner),
            outcome.land
        );
    } else {
        println!(
            "{} defends land {} successfully!",
            name(outcome.winner),
            outcome.land
        );
    }
    if let Some(winner) = report.winner {
        println!("{} wins the game!", name(winner));
    }
}

/// Parse one turn line: attacker name, defender name, land id.
///
/// Anything other than exactly three whitespace-delimited tokens with a
/// numeric land id is invalid input.
fn parse_command(line: &str) -> Option<TurnCommand> {
    let mut tokens = line.split_whitespace();
    let attacker = tokens.next()?.to_string();
    let defender = tokens.next()?.to_string();
    let land = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(TurnCommand {
        attacker,
        defender,
        land,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_happy_path() {
        let cmd = parse_command("Alice Bob 3").unwrap();
        assert_eq!(cmd.attacker, "Alice");
        assert_eq!(cmd.defender, "Bob");
        assert_eq!(cmd.land, 3);
    }

    #[test]
    fn test_parse_command_tolerates_extra_whitespace() {
        let cmd = parse_command("  Alice\tBob   7 ").unwrap();
        assert_eq!(cmd.attacker, "Alice");
        assert_eq!(cmd.land, 7);
    }

    #[test]
    fn test_parse_command_rejects_malformed_lines() {
        assert!(parse_command("").is_none());
        assert!(parse_command("Alice Bob").is_none());
        assert!(parse_command("Alice Bob three").is_none());
        assert!(parse_command("Alice Bob 3 extra").is_none());
        assert!(parse_command("Alice Bob -1").is_none());
    }
}
