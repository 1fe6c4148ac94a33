//! In-memory object model of the arcade hierarchy.
//!
//! Revenue here is a plain mutable counter, defaulting to 0 and moved
//! only by explicit `update_revenue` calls. It is intentionally NOT
//! wired to the simulated figures in `revenue`; the two mechanisms
//! coexist, unconnected.

use crate::players::PlayerRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMachine {
    pub machine_id: String,
    pub machine_type: String,
    pub revenue: f64,
}

impl GameMachine {
    pub fn new(machine_id: impl Into<String>, machine_type: impl Into<String>) -> Self {
        Self {
            machine_id: machine_id.into(),
            machine_type: machine_type.into(),
            revenue: 0.0,
        }
    }

    pub fn update_revenue(&mut self, amount: f64) {
        self.revenue += amount;
    }
}

/// A scheduled arcade event (tournament night, launch party, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcadeEvent {
    pub event_id: String,
    pub name: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalArcade {
    pub arcade_id: String,
    pub location: String,
    pub machines: Vec<GameMachine>,
    pub players: Vec<PlayerRecord>,
    pub events: Vec<ArcadeEvent>,
}

impl LocalArcade {
    pub fn new(arcade_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            arcade_id: arcade_id.into(),
            location: location.into(),
            machines: Vec::new(),
            players: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn add_machine(&mut self, machine: GameMachine) {
        self.machines.push(machine);
    }

    pub fn add_player(&mut self, player: PlayerRecord) {
        self.players.push(player);
    }

    pub fn schedule_event(&mut self, event: ArcadeEvent) {
        self.events.push(event);
    }

    /// Sum of the machines' revenue counters.
    pub fn revenue(&self) -> f64 {
        self.machines.iter().map(|m| m.revenue).sum()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionalManager {
    pub region_name: String,
    pub arcades: Vec<LocalArcade>,
}

impl RegionalManager {
    pub fn new(region_name: impl Into<String>) -> Self {
        Self {
            region_name: region_name.into(),
            arcades: Vec::new(),
        }
    }

    pub fn add_arcade(&mut self, arcade: LocalArcade) {
        self.arcades.push(arcade);
    }

    pub fn region_revenue(&self) -> f64 {
        self.arcades.iter().map(|a| a.revenue()).sum()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalManager {
    pub regions: Vec<RegionalManager>,
}

impl GlobalManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_region(&mut self, region: RegionalManager) {
        self.regions.push(region);
    }

    pub fn global_revenue(&self) -> f64 {
        self.regions.iter().map(|r| r.region_revenue()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_defaults_to_zero_at_every_level() {
        let mut global = GlobalManager::new();
        let mut region = RegionalManager::new("Asia");
        let mut arcade = LocalArcade::new("A1", "Osaka");
        arcade.add_machine(GameMachine::new("M1", "Racer"));
        region.add_arcade(arcade);
        global.add_region(region);

        assert_eq!(global.global_revenue(), 0.0);
    }

    #[test]
    fn revenue_sums_bottom_up_after_explicit_updates() {
        let mut m1 = GameMachine::new("M1", "Racer");
        let mut m2 = GameMachine::new("M2", "Shooter");
        m1.update_revenue(10.5);
        m1.update_revenue(4.5);
        m2.update_revenue(5.0);

        let mut arcade = LocalArcade::new("A1", "Osaka");
        arcade.add_machine(m1);
        arcade.add_machine(m2);
        assert_eq!(arcade.revenue(), 20.0);

        let mut region = RegionalManager::new("Asia");
        region.add_arcade(arcade);
        region.add_arcade(LocalArcade::new("A2", "Kyoto"));
        assert_eq!(region.region_revenue(), 20.0);

        let mut global = GlobalManager::new();
        global.add_region(region);
        assert_eq!(global.global_revenue(), 20.0);
    }

    #[test]
    fn players_attach_to_the_arcade() {
        let mut arcade = LocalArcade::new("A1", "Osaka");
        arcade.add_player(PlayerRecord {
            username: "ByteMe".into(),
            score: 1_200,
            arcade: "A1".into(),
            revenue: 150.0,
            most_played_game: "M1".into(),
            event_placement: 63,
        });
        assert_eq!(arcade.players.len(), 1);
        assert!(!arcade.players[0].is_winner());
    }

    #[test]
    fn events_accumulate_on_the_arcade() {
        let mut arcade = LocalArcade::new("A1", "Osaka");
        arcade.schedule_event(ArcadeEvent {
            event_id: "E1".into(),
            name: "Tournament Night".into(),
            date: "2026-09-12".into(),
        });
        assert_eq!(arcade.events.len(), 1);
    }
}
