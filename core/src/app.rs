//! The application facade — what a UI (or the headless runner) talks to.
//!
//! Owns the store, the config, the leaderboard, the tick scheduler, and
//! one long-lived RNG stream per randomized subsystem. UI callbacks map
//! one-to-one onto methods here; nothing below this layer knows a
//! presentation layer exists.
//!
//! STARTUP ORDER (fixed, matching the historical flow):
//!   1. migrate the schema
//!   2. upsert the seed regions (idempotent)
//!   3. initialize the leaderboard (seed when empty, else load)
//!   4. synthesize the player roster once

use crate::{
    config::ArcadeConfig,
    error::ArcadeResult,
    leaderboard::Leaderboard,
    players::{self, PlayerRecord},
    revenue::{self, ArcadeRevenueRow},
    rng::{RngBank, SimRng, SubsystemSlot},
    scheduler::TickScheduler,
    store::ArcadeStore,
    types::Score,
};
use std::time::{Duration, Instant};

pub struct ArcadeApp {
    pub config: ArcadeConfig,
    pub store: ArcadeStore,
    pub leaderboard: Leaderboard,
    pub scheduler: TickScheduler,
    players: Vec<PlayerRecord>,
    leaderboard_rng: SimRng,
    revenue_rng: SimRng,
    players_rng: SimRng,
}

impl ArcadeApp {
    pub fn new(config: ArcadeConfig, seed: u64, store: ArcadeStore) -> Self {
        let bank = RngBank::new(seed);
        let scheduler = TickScheduler::new(Duration::from_secs(config.tick_interval_secs));
        Self {
            leaderboard: Leaderboard::new(),
            scheduler,
            players: Vec::new(),
            leaderboard_rng: bank.for_subsystem(SubsystemSlot::Leaderboard),
            revenue_rng: bank.for_subsystem(SubsystemSlot::Revenue),
            players_rng: bank.for_subsystem(SubsystemSlot::Players),
            config,
            store,
        }
    }

    /// Open the configured database file and wire up the app.
    pub fn open(config: ArcadeConfig, seed: u64) -> ArcadeResult<Self> {
        let store = ArcadeStore::open(&config.db_path)?;
        Ok(Self::new(config, seed, store))
    }

    /// In-memory app for tests.
    pub fn in_memory(config: ArcadeConfig, seed: u64) -> ArcadeResult<Self> {
        let store = ArcadeStore::in_memory()?;
        Ok(Self::new(config, seed, store))
    }

    /// Run the startup sequence documented above.
    pub fn bootstrap(&mut self) -> ArcadeResult<()> {
        self.store.migrate()?;
        for region in &self.config.seed_regions {
            self.store.add_region(region)?;
        }
        self.leaderboard
            .initialize(&self.store, &mut self.leaderboard_rng, &self.config)?;
        self.players = players::generate(&self.store, &self.leaderboard, &mut self.players_rng)?;
        Ok(())
    }

    // ── Leaderboard ──────────────────────────────────────────────

    /// Host-loop idle hook: runs a scheduled drift step when one is
    /// owed. Returns the perturbed entry, if any.
    pub fn on_idle(&mut self, now: Instant) -> Option<(String, Score)> {
        if self.scheduler.due(now) {
            self.tick_leaderboard()
        } else {
            None
        }
    }

    pub fn tick_leaderboard(&mut self) -> Option<(String, Score)> {
        self.leaderboard
            .tick(&mut self.leaderboard_rng, &self.config)
    }

    pub fn refresh_leaderboard(&mut self) -> ArcadeResult<Vec<(String, Score)>> {
        self.leaderboard
            .refresh(&self.store, &mut self.leaderboard_rng, &self.config)
    }

    pub fn reset_leaderboard(&mut self) -> ArcadeResult<Vec<(String, Score)>> {
        self.leaderboard
            .reset(&self.store, &mut self.leaderboard_rng, &self.config)
    }

    // ── Reports ──────────────────────────────────────────────────

    pub fn revenue_report(&mut self, region_name: &str) -> ArcadeResult<Vec<ArcadeRevenueRow>> {
        revenue::region_report(&self.store, &mut self.revenue_rng, &self.config, region_name)
    }

    /// The roster synthesized at bootstrap, in display order. It is not
    /// regenerated when the leaderboard moves; call
    /// `regenerate_players` to resynchronize.
    pub fn player_rows(&self) -> Vec<PlayerRecord> {
        players::by_revenue_desc(self.players.clone())
    }

    pub fn regenerate_players(&mut self) -> ArcadeResult<()> {
        self.players = players::generate(&self.store, &self.leaderboard, &mut self.players_rng)?;
        Ok(())
    }
}
