//! Fixed player username pool.
//!
//! The leaderboard is seeded by sampling from this curated pool. The
//! historical pool carried a handful of accidental duplicates; they are
//! deduplicated here so sampling without replacement always yields
//! distinct usernames.

use crate::rng::SimRng;

/// Curated pool of 88 distinct usernames.
pub const USERNAME_POOL: &[&str] = &[
    "ByteMe", "CodeCracker", "DebugDiva", "PixelPioneer", "ScriptSage",
    "BitBard", "DataDancer", "LoopGuru", "StackSamurai", "CacheCow",
    "NullPointer", "SyntaxSleuth", "VariableVixen", "QuantumQuokka", "BinaryBard",
    "FunctionFreak", "ArrayAce", "CompileCaptain", "LogicLynx", "ByteBandit",
    "CodeCoyote", "DebugDynamo", "PixelPirate", "ScriptSorcerer", "BitBuster",
    "DataDruid", "LoopLegend", "StackSultan", "CacheChameleon", "NullNinja",
    "SyntaxSphinx", "VariableVortex", "BinaryBison", "FunctionFox", "ArrayArcher",
    "CompileCrusader", "LogicLlama", "ByteBison", "CodeCobra", "DebugDolphin",
    "PixelPuma", "ScriptShark", "BitBuffalo", "DataDragon", "LoopLynx",
    "StackStallion", "CacheCheetah", "NullNarwhal", "SyntaxSwan", "VariableViper",
    "QuantumQuail", "BinaryBeetle", "FunctionFalcon", "ArrayAntelope", "CompileCoyote",
    "LogicLobster", "ByteBadger", "CodeCaterpillar", "DebugDuck", "PixelPenguin",
    "ScriptSquirrel", "BitBear", "DataDolphin", "LoopLemur", "StackSparrow",
    "CacheCrane", "NullNewt", "SyntaxSeal", "VariableVulture", "BinaryBumblebee",
    "FunctionFerret", "ArrayAardvark", "CompileCrocodile", "LogicLion", "ByteBumblebee",
    "CodeChameleon", "DebugDingo", "PixelParrot", "ScriptSeahorse", "BitBison",
    "DataDingo", "StackStarling", "CacheCobra", "NullNighthawk", "SyntaxSparrow",
    "FunctionFrog", "ArrayArmadillo", "CompileCheetah",
];

/// Sample `n` distinct usernames from the pool without replacement.
pub fn sample_usernames(rng: &mut SimRng, n: usize) -> Vec<&'static str> {
    rng.sample_indices(USERNAME_POOL.len(), n)
        .into_iter()
        .map(|i| USERNAME_POOL[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, SubsystemSlot};

    #[test]
    fn pool_has_no_duplicates() {
        let mut sorted: Vec<&str> = USERNAME_POOL.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), USERNAME_POOL.len());
    }

    #[test]
    fn sample_yields_distinct_pool_members() {
        let mut rng = RngBank::new(42).for_subsystem(SubsystemSlot::Leaderboard);
        let picked = sample_usernames(&mut rng, 50);
        assert_eq!(picked.len(), 50);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 50, "sample must not repeat usernames");
        assert!(picked.iter().all(|u| USERNAME_POOL.contains(u)));
    }
}
