//! Padel Score - demo binary
//!
//! Plays a sequence of points through a scoreboard and prints the final
//! snapshot as JSON.
//!
//! ```bash
//! padel-score --format pro_set --points "1 1 1 1 2 -2 2"
//! RUST_LOG=padel_score=debug padel-score --setup match.json --points "1 2 1 1 1"
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use padel_score::{MatchFormat, MatchSetup, RemoteCommand, Scoreboard, Team};

#[derive(Parser)]
#[command(name = "padel-score")]
#[command(about = "Score a padel match from a point sequence", version)]
struct Args {
    /// Match format (one_set, pro_set, best_of_3_sets, best_of_3_super_tiebreak)
    #[arg(short, long)]
    format: Option<MatchFormat>,

    /// JSON setup file with format, team and player names
    #[arg(short, long)]
    setup: Option<PathBuf>,

    /// Whitespace separated tokens: 1 / 2 score a point, -1 / -2 take one back,
    /// r resets the game
    #[arg(short, long, default_value = "")]
    points: String,
}

fn parse_token(token: &str) -> Result<RemoteCommand> {
    let command = match token {
        "1" => RemoteCommand::ScorePoint { team: Team::One },
        "2" => RemoteCommand::ScorePoint { team: Team::Two },
        "-1" => RemoteCommand::RemovePoint { team: Team::One },
        "-2" => RemoteCommand::RemovePoint { team: Team::Two },
        "r" => RemoteCommand::ResetGame,
        other => bail!("Unknown point token: {other}"),
    };
    Ok(command)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("padel_score=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut setup = match &args.setup {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read setup {:?}", path))?;
            MatchSetup::from_json(&json)?
        }
        None => MatchSetup::default(),
    };
    if let Some(format) = args.format {
        setup.format = format;
    }

    info!(format = %setup.format, "starting match");
    let mut board = Scoreboard::new(setup);

    for token in args.points.split_whitespace() {
        let event = board.apply(parse_token(token)?);
        info!(token, ?event, "point");
    }

    let snapshot = board.snapshot()?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    println!();
    println!("Sets:      {}", snapshot.match_score);
    println!("Set score: {}", snapshot.current_set_score);
    println!(
        "Game:      {} - {}",
        snapshot.team1_display, snapshot.team2_display
    );
    println!("State root: {}", snapshot.state_root);

    Ok(())
}
