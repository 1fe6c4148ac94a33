//! arcade-core — the data and simulation layer of the arcade
//! management system.
//!
//! The store owns all SQL; the leaderboard, revenue, and player modules
//! own all randomness (through per-subsystem deterministic RNG
//! streams); the app facade wires them together for whatever front end
//! drives them.

pub mod app;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod model;
pub mod players;
pub mod revenue;
pub mod rng;
pub mod scheduler;
pub mod store;
pub mod types;
pub mod usernames;
