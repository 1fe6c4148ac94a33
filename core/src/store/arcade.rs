use super::ArcadeStore;
use crate::error::ArcadeResult;
use log::{debug, warn};
use rusqlite::params;

impl ArcadeStore {
    // ── Arcade ────────────────────────────────────────────────────
    //
    // arcade_id is a natural key with no uniqueness constraint.
    // Update and delete affect every row whose key matches — zero,
    // one, or many — and report success either way.

    /// Insert an arcade under the named region. When the region does
    /// not exist the operation is a logged no-op, never an error.
    pub fn add_arcade(&self, arcade_id: &str, location: &str, region_name: &str) -> ArcadeResult<()> {
        match self.region_id(region_name)? {
            Some(region_id) => {
                self.conn().execute(
                    "INSERT INTO arcades (arcade_id, location, region_id) VALUES (?1, ?2, ?3)",
                    params![arcade_id, location, region_id],
                )?;
                debug!("arcade '{arcade_id}' added to region '{region_name}'");
            }
            None => {
                warn!("region '{region_name}' not found; arcade '{arcade_id}' not added");
            }
        }
        Ok(())
    }

    /// (arcade_id, location) pairs for a region, in storage order.
    pub fn arcades_in_region(&self, region_name: &str) -> ArcadeResult<Vec<(String, String)>> {
        let mut stmt = self.conn().prepare(
            "SELECT arcade_id, location FROM arcades
             WHERE region_id = (SELECT id FROM regions WHERE name = ?1)",
        )?;
        let rows = stmt
            .query_map(params![region_name], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// All arcade natural keys in storage order. Duplicates appear as
    /// many times as they are stored.
    pub fn arcade_ids(&self) -> ArcadeResult<Vec<String>> {
        let mut stmt = self.conn().prepare("SELECT arcade_id FROM arcades")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    pub fn update_arcade_location(&self, arcade_id: &str, new_location: &str) -> ArcadeResult<()> {
        self.conn().execute(
            "UPDATE arcades SET location = ?1 WHERE arcade_id = ?2",
            params![new_location, arcade_id],
        )?;
        Ok(())
    }

    pub fn delete_arcade(&self, arcade_id: &str) -> ArcadeResult<()> {
        self.conn().execute(
            "DELETE FROM arcades WHERE arcade_id = ?1",
            params![arcade_id],
        )?;
        Ok(())
    }
}
