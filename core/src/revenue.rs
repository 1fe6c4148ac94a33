//! Revenue reporting — counts and averages from the store, plus the
//! simulated revenue figure.
//!
//! Total revenue is NOT derived from token cost or play counts. It is
//! synthesized per report: one uniform draw in the configured range for
//! every machine slot. Two reports over the same data will disagree;
//! that is the simulation, not a bug.

use crate::{
    config::ArcadeConfig,
    error::ArcadeResult,
    rng::SimRng,
    store::ArcadeStore,
};
use serde::Serialize;

/// One display row of the per-region revenue report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArcadeRevenueRow {
    pub arcade_id: String,
    pub machine_count: i64,
    /// 0.00 when the arcade has no machines (SQL AVG is NULL there).
    pub avg_token_cost: f64,
    pub total_revenue: f64,
}

/// Build the revenue report for one region: machine count and average
/// token cost per arcade from the store, simulated total revenue drawn
/// fresh for each machine slot.
pub fn region_report(
    store: &ArcadeStore,
    rng: &mut SimRng,
    config: &ArcadeConfig,
    region_name: &str,
) -> ArcadeResult<Vec<ArcadeRevenueRow>> {
    let stats = store.arcade_machine_stats(region_name)?;
    let rows = stats
        .into_iter()
        .map(|(arcade_id, machine_count, avg_token_cost)| {
            let total_revenue = (0..machine_count)
                .map(|_| rng.uniform_f64(config.revenue_draw_min, config.revenue_draw_max))
                .sum();
            ArcadeRevenueRow {
                arcade_id,
                machine_count,
                avg_token_cost: avg_token_cost.unwrap_or(0.00),
                total_revenue,
            }
        })
        .collect();
    Ok(rows)
}
