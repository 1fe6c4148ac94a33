//! Leaderboard simulator.
//!
//! Owns the username → score mapping as an explicit, injectable value
//! (no process-wide global). Scores drift under two perturbation
//! channels: the periodic tick (small deltas, one player) and the
//! manual refresh (larger deltas, several players, with replacement).
//! Every perturbation clamps the result to >= 0.

use crate::{
    config::ArcadeConfig,
    error::ArcadeResult,
    rng::SimRng,
    store::ArcadeStore,
    types::Score,
    usernames,
};
use log::{info, warn};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Leaderboard {
    scores: BTreeMap<String, Score>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the username pool when the persisted table is empty,
    /// otherwise load the persisted pairs, replacing any in-memory
    /// state.
    pub fn initialize(
        &mut self,
        store: &ArcadeStore,
        rng: &mut SimRng,
        config: &ArcadeConfig,
    ) -> ArcadeResult<()> {
        if store.leaderboard_count()? == 0 {
            self.reseed(rng, config);
            store.save_scores(&self.scores)?;
            info!("leaderboard seeded with {} players", self.scores.len());
        } else {
            self.scores = store.load_scores()?;
            info!("leaderboard loaded with {} players", self.scores.len());
        }
        Ok(())
    }

    /// One scheduled drift step: a single uniformly chosen player moves
    /// by a delta in the tick range, clamped at zero. Returns the
    /// affected (username, new score), or None when there is nothing to
    /// perturb.
    pub fn tick(&mut self, rng: &mut SimRng, config: &ArcadeConfig) -> Option<(String, Score)> {
        if self.scores.is_empty() {
            warn!("tick with empty leaderboard; nothing to perturb");
            return None;
        }
        let username = self.pick_username(rng);
        let delta = rng.int_between(config.tick_delta_min, config.tick_delta_max);
        let score = self.apply_delta(&username, delta);
        Some((username, score))
    }

    /// Manual refresh: persist the current state, then apply between
    /// `refresh_updates_min` and `refresh_updates_max` independent
    /// perturbations to uniformly chosen players — with replacement, so
    /// one player may move more than once. Returns the standings.
    pub fn refresh(
        &mut self,
        store: &ArcadeStore,
        rng: &mut SimRng,
        config: &ArcadeConfig,
    ) -> ArcadeResult<Vec<(String, Score)>> {
        store.save_scores(&self.scores)?;
        if self.scores.is_empty() {
            warn!("refresh with empty leaderboard; nothing to perturb");
            return Ok(Vec::new());
        }
        let updates = rng.int_between(config.refresh_updates_min, config.refresh_updates_max);
        for _ in 0..updates {
            let username = self.pick_username(rng);
            let delta = rng.int_between(config.refresh_delta_min, config.refresh_delta_max);
            self.apply_delta(&username, delta);
        }
        Ok(self.standings())
    }

    /// Drop every persisted entry and re-seed from scratch.
    pub fn reset(
        &mut self,
        store: &ArcadeStore,
        rng: &mut SimRng,
        config: &ArcadeConfig,
    ) -> ArcadeResult<Vec<(String, Score)>> {
        store.clear_leaderboard()?;
        self.reseed(rng, config);
        store.save_scores(&self.scores)?;
        info!("leaderboard reset with {} players", self.scores.len());
        Ok(self.standings())
    }

    /// Persist the current in-memory state.
    pub fn save(&self, store: &ArcadeStore) -> ArcadeResult<()> {
        store.save_scores(&self.scores)
    }

    /// Entries sorted by score descending. Ties keep username order,
    /// which is stable because the backing map is ordered.
    pub fn standings(&self) -> Vec<(String, Score)> {
        let mut rows: Vec<(String, Score)> = self
            .scores
            .iter()
            .map(|(u, s)| (u.clone(), *s))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }

    pub fn score(&self, username: &str) -> Option<Score> {
        self.scores.get(username).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn scores(&self) -> &BTreeMap<String, Score> {
        &self.scores
    }

    fn reseed(&mut self, rng: &mut SimRng, config: &ArcadeConfig) {
        self.scores = usernames::sample_usernames(rng, config.leaderboard_size)
            .into_iter()
            .map(|u| {
                let score = rng.int_between(config.initial_score_min, config.initial_score_max);
                (u.to_string(), score)
            })
            .collect();
    }

    fn pick_username(&self, rng: &mut SimRng) -> String {
        let names: Vec<&String> = self.scores.keys().collect();
        (*rng.choose(&names)).clone()
    }

    fn apply_delta(&mut self, username: &str, delta: Score) -> Score {
        let entry = self.scores.get_mut(username).expect("known username");
        *entry = (*entry + delta).max(0);
        *entry
    }
}
