//! Live scoreboard demo CLI
//!
//! Runs a World Cup matchday against `sb_core`: registers ten teams,
//! starts five matches, sets their scores, and prints the ordered live
//! summary before finishing every match.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use clap::Parser;
use sb_core::{EntityStore, Match, Scoreboard, SharedStore, Team};

#[derive(Parser)]
#[command(name = "sb_cli")]
#[command(about = "Run a demo World Cup scoreboard session", long_about = None)]
struct Cli {
    /// Print the summary as JSON instead of formatted text
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The stores are created here and handed to the scoreboard explicitly;
    // any number of facades could be constructed over the same pair.
    let teams: SharedStore<Arc<Team>> = Arc::new(RwLock::new(EntityStore::new()));
    let matches: SharedStore<Match> = Arc::new(RwLock::new(EntityStore::new()));
    let scoreboard = Scoreboard::new(teams, matches);

    let fixtures = [
        ("Mexico", "Canada", (0, 5)),
        ("Spain", "Brazil", (10, 2)),
        ("Germany", "France", (2, 2)),
        ("Uruguay", "Italy", (6, 6)),
        ("Argentina", "Australia", (3, 1)),
    ];

    let mut match_ids = Vec::new();
    for (home, away, (home_score, away_score)) in fixtures {
        let m = scoreboard.add_match_by_names(home, away)?;
        scoreboard.start_match(m.id())?;
        scoreboard.update_score(m.id(), home_score, away_score)?;
        match_ids.push(m.id());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&scoreboard.summary_lines())?);
    } else {
        println!("Match Summary:");
        for line in scoreboard.summary_lines() {
            println!("{}", line);
        }
    }

    for id in match_ids {
        scoreboard.finish_match(id)?;
    }

    Ok(())
}
