//! Player-tracking generator.
//!
//! Derives a non-persistent player roster from the current leaderboard:
//! each player gets a randomly assigned arcade and most-played machine,
//! a revenue figure derived from their score, and a tournament
//! placement bucketed from the score. The roster is a point-in-time
//! synthesis — it is not refreshed when the leaderboard moves.

use crate::{
    error::ArcadeResult,
    leaderboard::Leaderboard,
    rng::SimRng,
    store::ArcadeStore,
    types::Score,
};
use log::warn;
use serde::{Deserialize, Serialize};

/// Placement is 64 at score 0 and improves one bucket per 781.25
/// points, bottoming out at 1 (the tournament winner).
const PLACEMENT_BUCKET: f64 = 781.25;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    pub username: String,
    pub score: Score,
    pub arcade: String,
    pub revenue: f64,
    pub most_played_game: String,
    pub event_placement: i64,
}

impl PlayerRecord {
    /// Flagged in the display with a winner marker.
    pub fn is_winner(&self) -> bool {
        self.event_placement == 1
    }
}

/// Tournament placement for a score: clamp(64 - floor(score / 781.25), 1, 64).
pub fn event_placement(score: Score) -> i64 {
    (64 - (score as f64 / PLACEMENT_BUCKET).floor() as i64).clamp(1, 64)
}

/// Build the derived roster from the leaderboard plus the known arcade
/// and machine id lists. With no arcades or no machines there is
/// nothing to assign, so the roster is empty (logged, not an error).
pub fn generate(
    store: &ArcadeStore,
    leaderboard: &Leaderboard,
    rng: &mut SimRng,
) -> ArcadeResult<Vec<PlayerRecord>> {
    let arcade_ids = store.arcade_ids()?;
    let machine_ids = store.machine_ids()?;
    if arcade_ids.is_empty() || machine_ids.is_empty() {
        warn!("no arcades or machines on file; player roster is empty");
        return Ok(Vec::new());
    }

    let players = leaderboard
        .scores()
        .iter()
        .map(|(username, &score)| {
            let arcade = rng.choose(&arcade_ids).clone();
            let divisor = rng.uniform_f64(1.0, 2.0);
            let revenue = round2(score as f64 / divisor * 0.25);
            let most_played_game = rng.choose(&machine_ids).clone();
            PlayerRecord {
                username: username.clone(),
                score,
                arcade,
                revenue,
                most_played_game,
                event_placement: event_placement(score),
            }
        })
        .collect();
    Ok(players)
}

/// Display order: revenue descending. Stable, so equal-revenue players
/// keep their roster (username) order.
pub fn by_revenue_desc(mut players: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    players.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(std::cmp::Ordering::Equal));
    players
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_spans_one_to_sixty_four() {
        assert_eq!(event_placement(0), 64);
        assert_eq!(event_placement(50_000), 1);
        for score in (0..=50_000).step_by(97) {
            let p = event_placement(score);
            assert!((1..=64).contains(&p), "score {score} gave placement {p}");
        }
    }

    #[test]
    fn placement_is_monotonically_non_increasing() {
        let mut last = 64;
        for score in 0..=50_000 {
            let p = event_placement(score);
            assert!(p <= last, "placement rose from {last} to {p} at score {score}");
            last = p;
        }
    }

    #[test]
    fn winner_threshold_matches_bucket_width() {
        // 63 full buckets put a player at placement 1.
        let threshold = (63.0 * PLACEMENT_BUCKET).ceil() as Score;
        assert_eq!(event_placement(threshold), 1);
        assert_eq!(event_placement(threshold - 1), 2);
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(1.2345), 1.23);
        assert_eq!(round2(1.238), 1.24);
    }
}
