//! arcade-runner: headless driver for the arcade management core.
//!
//! Boots the app the way the desktop shell would, runs a number of
//! leaderboard drift ticks, and prints the tabular views a UI would
//! render.
//!
//! Usage:
//!   arcade-runner --seed 12345 --ticks 10 --db arcade.db
//!   arcade-runner --config arcade.json --json

use anyhow::Result;
use arcade_core::{app::ArcadeApp, config::ArcadeConfig, players::PlayerRecord};
use std::env;

#[derive(serde::Serialize)]
struct JsonReport {
    standings: Vec<(String, i64)>,
    players: Vec<PlayerRecord>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ticks = parse_arg(&args, "--ticks", 5u64);
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str());
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str());
    let json = args.iter().any(|a| a == "--json");

    let mut config = match config_path {
        Some(path) => ArcadeConfig::load(path)?,
        None => ArcadeConfig::default(),
    };
    if let Some(db) = db {
        config.db_path = db.to_string();
    }

    if !json {
        println!("arcade-runner");
        println!("  seed:  {seed}");
        println!("  ticks: {ticks}");
        println!("  db:    {}", config.db_path);
        println!();
    }

    let mut app = if config.db_path == ":memory:" {
        ArcadeApp::in_memory(config, seed)?
    } else {
        ArcadeApp::open(config, seed)?
    };
    app.bootstrap()?;
    log::info!("bootstrap complete; {} players on the leaderboard", app.leaderboard.len());

    if json {
        for _ in 0..ticks {
            app.tick_leaderboard();
        }
        let report = JsonReport {
            standings: app.leaderboard.standings(),
            players: app.player_rows(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        app.leaderboard.save(&app.store)?;
        return Ok(());
    }

    println!("== Leaderboard drift ==");
    for _ in 0..ticks {
        if let Some((username, score)) = app.tick_leaderboard() {
            println!("  {username:<20} -> {score}");
        }
    }
    println!();

    println!("== Global leaderboard (top 10) ==");
    for (username, score) in app.leaderboard.standings().into_iter().take(10) {
        println!("  {username:<20} {score:>7}");
    }
    println!();

    println!("== Revenue by region ==");
    for region in app.store.region_names()? {
        let rows = app.revenue_report(&region)?;
        if rows.is_empty() {
            continue;
        }
        println!("  {region}:");
        for row in rows {
            println!(
                "    {:<12} machines={:<3} avg_cost={:>6.2} revenue=${:>9.2}",
                row.arcade_id, row.machine_count, row.avg_token_cost, row.total_revenue
            );
        }
    }
    println!();

    println!("== Player tracking ==");
    for player in app.player_rows().into_iter().take(20) {
        let crown = if player.is_winner() { " [winner]" } else { "" };
        println!(
            "  {:<20} score={:<6} revenue=${:<9.2} arcade={:<10} game={:<10} place={}{}",
            player.username,
            player.score,
            player.revenue,
            player.arcade,
            player.most_played_game,
            player.event_placement,
            crown
        );
    }

    app.leaderboard.save(&app.store)?;
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
