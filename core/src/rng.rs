//! Deterministic random number generation.
//!
//! RULE: Nothing in the core may call any platform RNG.
//! All randomness flows through SimRng instances derived from the
//! single master seed carried by the application.
//!
//! Each randomized subsystem gets its own RNG stream, seeded
//! deterministically from (master_seed XOR subsystem_index). Adding a
//! new subsystem never changes existing subsystems' streams.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single subsystem.
pub struct SimRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SimRng {
    /// Create a subsystem RNG from the master seed and a stable
    /// subsystem index. The index must never change once assigned.
    pub fn new(master_seed: u64, subsystem_index: u64) -> Self {
        let derived_seed = master_seed ^ (subsystem_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a float uniformly in [lo, hi).
    pub fn uniform_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Roll an integer uniformly in [lo, hi] inclusive.
    pub fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "lo must be <= hi");
        let span = (hi - lo) as u64 + 1;
        lo + self.next_u64_below(span) as i64
    }

    /// Pick one element of a slice uniformly at random.
    /// Panics on an empty slice — callers must check.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "choose() on empty slice");
        let idx = self.next_u64_below(items.len() as u64) as usize;
        &items[idx]
    }

    /// Sample `n` distinct indices from [0, len) without replacement.
    /// Partial Fisher-Yates over a scratch index vector.
    pub fn sample_indices(&mut self, len: usize, n: usize) -> Vec<usize> {
        assert!(n <= len, "cannot sample {n} from {len}");
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..n {
            let j = i + self.next_u64_below((len - i) as u64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(n);
        pool
    }
}

/// All subsystem RNGs for one process, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_subsystem(&self, slot: SubsystemSlot) -> SimRng {
        SimRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable subsystem slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every subsystem's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum SubsystemSlot {
    Leaderboard = 0,
    Revenue = 1,
    Players = 2,
    // Add new subsystems here — append only.
}

impl SubsystemSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Leaderboard => "leaderboard",
            Self::Revenue => "revenue",
            Self::Players => "players",
        }
    }
}
