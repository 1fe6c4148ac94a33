//! Application configuration.
//!
//! Everything tunable about the simulation lives here: the region seed
//! list, leaderboard sizing and perturbation ranges, and the revenue
//! draw bounds. Defaults reproduce the historical behavior; a JSON file
//! can override them for a deployment.

use crate::error::ArcadeResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Regions upserted at startup.
    pub seed_regions: Vec<String>,
    /// Number of usernames sampled when seeding the leaderboard.
    pub leaderboard_size: usize,
    /// Inclusive score range for freshly seeded entries.
    pub initial_score_min: i64,
    pub initial_score_max: i64,
    /// Inclusive delta range applied by the periodic tick.
    pub tick_delta_min: i64,
    pub tick_delta_max: i64,
    /// Inclusive delta range applied per manual-refresh perturbation.
    pub refresh_delta_min: i64,
    pub refresh_delta_max: i64,
    /// Inclusive count range of perturbations per manual refresh.
    pub refresh_updates_min: i64,
    pub refresh_updates_max: i64,
    /// Seconds between scheduled leaderboard ticks.
    pub tick_interval_secs: u64,
    /// Per-machine simulated revenue draw bounds, [lo, hi).
    pub revenue_draw_min: f64,
    pub revenue_draw_max: f64,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            db_path: "arcade_management.db".to_string(),
            seed_regions: vec![
                "North America".to_string(),
                "Europe East".to_string(),
                "Europe West".to_string(),
                "Asia".to_string(),
                "Other".to_string(),
            ],
            leaderboard_size: 50,
            initial_score_min: 1,
            initial_score_max: 50_000,
            tick_delta_min: -1_000,
            tick_delta_max: 1_000,
            refresh_delta_min: -5_000,
            refresh_delta_max: 5_000,
            refresh_updates_min: 3,
            refresh_updates_max: 8,
            tick_interval_secs: 30,
            revenue_draw_min: 50.00,
            revenue_draw_max: 1_200.00,
        }
    }
}

impl ArcadeConfig {
    /// Load overrides from a JSON file. Missing fields fall back to the
    /// defaults above.
    pub fn load(path: &str) -> ArcadeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
