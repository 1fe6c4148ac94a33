use super::ArcadeStore;
use crate::error::{ArcadeError, ArcadeResult};
use log::debug;
use rusqlite::params;

/// Token cost arrives as user-entered text. It is coerced at the
/// storage boundary; non-numeric input aborts the operation before any
/// row is written.
fn parse_token_cost(input: &str) -> ArcadeResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ArcadeError::InvalidTokenCost {
            input: input.to_string(),
        })
}

impl ArcadeStore {
    // ── Machine ───────────────────────────────────────────────────
    //
    // machine_id mirrors arcade_id: a non-unique natural key, with
    // multi-row update/delete semantics. The arcade_id column is a
    // by-name reference with no enforced relation; a machine may point
    // at an arcade id that matches zero or several arcade rows.

    pub fn add_machine(
        &self,
        machine_id: &str,
        machine_type: &str,
        token_cost: &str,
        arcade_id: &str,
    ) -> ArcadeResult<()> {
        let cost = parse_token_cost(token_cost)?;
        self.conn().execute(
            "INSERT INTO machines (machine_id, machine_type, token_cost, arcade_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![machine_id, machine_type, cost, arcade_id],
        )?;
        debug!("machine '{machine_id}' added to arcade '{arcade_id}'");
        Ok(())
    }

    /// (machine_id, machine_type, token_cost) rows for an arcade, in
    /// storage order.
    pub fn machines_in_arcade(
        &self,
        arcade_id: &str,
    ) -> ArcadeResult<Vec<(String, String, f64)>> {
        let mut stmt = self.conn().prepare(
            "SELECT machine_id, machine_type, token_cost FROM machines
             WHERE arcade_id = ?1",
        )?;
        let rows = stmt
            .query_map(params![arcade_id], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// All machine natural keys in storage order.
    pub fn machine_ids(&self) -> ArcadeResult<Vec<String>> {
        let mut stmt = self.conn().prepare("SELECT machine_id FROM machines")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    pub fn update_machine(
        &self,
        machine_id: &str,
        new_type: &str,
        new_cost: &str,
    ) -> ArcadeResult<()> {
        let cost = parse_token_cost(new_cost)?;
        self.conn().execute(
            "UPDATE machines SET machine_type = ?1, token_cost = ?2 WHERE machine_id = ?3",
            params![new_type, cost, machine_id],
        )?;
        Ok(())
    }

    pub fn delete_machine(&self, machine_id: &str) -> ArcadeResult<()> {
        self.conn().execute(
            "DELETE FROM machines WHERE machine_id = ?1",
            params![machine_id],
        )?;
        Ok(())
    }

    /// Per-arcade machine count and average token cost for a region,
    /// grouped by arcade natural key. Arcades with no machines report
    /// a count of 0 and a None average.
    pub fn arcade_machine_stats(
        &self,
        region_name: &str,
    ) -> ArcadeResult<Vec<(String, i64, Option<f64>)>> {
        let mut stmt = self.conn().prepare(
            "SELECT arcades.arcade_id, COUNT(machines.machine_id), AVG(machines.token_cost)
             FROM arcades
             LEFT JOIN machines ON arcades.arcade_id = machines.arcade_id
             WHERE arcades.region_id = (SELECT id FROM regions WHERE name = ?1)
             GROUP BY arcades.arcade_id",
        )?;
        let rows = stmt
            .query_map(params![region_name], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
