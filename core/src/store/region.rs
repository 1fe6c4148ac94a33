use super::ArcadeStore;
use crate::{error::ArcadeResult, types::RegionId};
use rusqlite::{params, OptionalExtension};

impl ArcadeStore {
    // ── Region ────────────────────────────────────────────────────

    /// Insert-or-ignore on the unique region name. Idempotent: seeding
    /// the same region list at every startup is safe.
    pub fn add_region(&self, name: &str) -> ArcadeResult<()> {
        self.conn()
            .execute("INSERT OR IGNORE INTO regions (name) VALUES (?1)", params![name])?;
        Ok(())
    }

    /// Resolve a region name to its surrogate id, if present.
    pub fn region_id(&self, name: &str) -> ArcadeResult<Option<RegionId>> {
        let id = self
            .conn()
            .query_row(
                "SELECT id FROM regions WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    /// All region names in storage order.
    pub fn region_names(&self) -> ArcadeResult<Vec<String>> {
        let mut stmt = self.conn().prepare("SELECT name FROM regions")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}
