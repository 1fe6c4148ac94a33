//! Shared primitive types used across the arcade core.

/// A leaderboard score. Clamped to >= 0 after every perturbation.
pub type Score = i64;

/// The surrogate row id SQLite assigns to a region.
pub type RegionId = i64;
