use super::ArcadeStore;
use crate::{error::ArcadeResult, types::Score};
use rusqlite::params;
use std::collections::BTreeMap;

impl ArcadeStore {
    // ── Leaderboard ───────────────────────────────────────────────

    pub fn leaderboard_count(&self) -> ArcadeResult<i64> {
        let count = self
            .conn()
            .query_row("SELECT COUNT(*) FROM leaderboard", [], |row| row.get(0))?;
        Ok(count)
    }

    /// All persisted (username, score) pairs.
    pub fn load_scores(&self) -> ArcadeResult<BTreeMap<String, Score>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT username, score FROM leaderboard")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(rows)
    }

    /// Upsert every entry. One statement per entry, matching the
    /// original snapshot behavior (no surrounding transaction).
    pub fn save_scores(&self, scores: &BTreeMap<String, Score>) -> ArcadeResult<()> {
        for (username, score) in scores {
            self.conn().execute(
                "INSERT OR REPLACE INTO leaderboard (username, score) VALUES (?1, ?2)",
                params![username, score],
            )?;
        }
        Ok(())
    }

    pub fn clear_leaderboard(&self) -> ArcadeResult<()> {
        self.conn().execute("DELETE FROM leaderboard", [])?;
        Ok(())
    }
}
