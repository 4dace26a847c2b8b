// ================================
// src/simulation.rs - sense / control / move loop
// ================================
use anyhow::Result;
use log::{debug, info};

use crate::{
    arena::Arena,
    config::SimConfig,
    control::FuzzyController,
    telemetry::Telemetry,
    vehicle::{DriveGains, Pose, Vehicle},
};

pub struct Simulation {
    arena: Arena,
    controller: FuzzyController,
    vehicle: Vehicle,
    gains: DriveGains,
    ray_offset_deg: f64,
    max_ticks: Option<u64>,
    outside: bool,
    tick: u64,
}

/// Result of one driver tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub telemetry: Telemetry,
    /// Set only on the tick the vehicle crosses out of the arena interior.
    pub left_arena: bool,
    /// `max_ticks` has been reached.
    pub finished: bool,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;

        let arena = Arena::rectangle(config.arena_width, config.arena_height);
        let start = Pose {
            x: config.start_x,
            y: config.start_y,
            heading_deg: config.start_heading_deg,
        };
        info!(
            "Simulation ready: {}x{} arena, {} wall cells, start ({}, {}) heading {}",
            arena.width(),
            arena.height(),
            arena.wall_count(),
            start.x,
            start.y,
            start.heading_deg
        );

        Ok(Self {
            arena,
            controller: FuzzyController::default(),
            vehicle: Vehicle::new(start),
            gains: DriveGains {
                turn_gain: config.turn_gain,
                speed_gain: config.speed_gain,
            },
            ray_offset_deg: config.ray_offset_deg,
            max_ticks: config.max_ticks,
            outside: false,
            tick: 0,
        })
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advances one tick.
    pub fn step(&mut self) -> Telemetry {
        // 1. sense
        let scan = self.arena.scan(&self.vehicle.pose, self.ray_offset_deg);

        // 2. fuzzy control
        let control = self.controller.calculate_scan(&scan);

        // 3. move
        self.vehicle.apply(&control, &self.gains);
        self.tick += 1;

        let telemetry = Telemetry {
            tick: self.tick,
            scan,
            control,
            pose: self.vehicle.pose,
        };
        debug!("{}", telemetry);
        telemetry
    }

    /// One step of the fixed-rate driver loop, with arena exit and
    /// `max_ticks` bookkeeping.
    pub fn advance(&mut self) -> TickOutcome {
        let telemetry = self.step();

        let inside = self.arena.contains(telemetry.pose.x, telemetry.pose.y);
        let left_arena = !inside && !self.outside;
        self.outside = !inside;

        TickOutcome {
            telemetry,
            left_arena,
            finished: self.max_ticks.is_some_and(|max| self.tick >= max),
        }
    }

    /// Steps `ticks` times and returns the last telemetry, if any.
    pub fn run(&mut self, ticks: u64) -> Option<Telemetry> {
        (0..ticks).map(|_| self.step()).last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_in_open_space() {
        let mut sim = Simulation::new(&SimConfig::default()).unwrap();
        let telemetry = sim.step();

        assert_eq!(telemetry.tick, 1);
        assert_eq!(telemetry.scan.distances(), (200, 200, 200));
        assert_eq!(telemetry.control.turn, 0.0);
        assert_eq!(telemetry.control.acceleration, 1.0);
        assert_eq!(telemetry.pose.x, 402.0);
        assert_eq!(telemetry.pose.y, 300.0);
        assert_eq!(sim.tick(), 1);
    }

    #[test]
    fn test_run_zero_ticks() {
        let mut sim = Simulation::new(&SimConfig::default()).unwrap();
        assert!(sim.run(0).is_none());
        assert_eq!(sim.tick(), 0);
    }

    #[test]
    fn test_advance_stops_at_max_ticks() {
        let config = SimConfig {
            max_ticks: Some(3),
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(&config).unwrap();
        assert!(!sim.advance().finished);
        assert!(!sim.advance().finished);
        let last = sim.advance();
        assert!(last.finished);
        assert_eq!(last.telemetry.tick, 3);
    }

    #[test]
    fn test_advance_never_finishes_without_limit() {
        let mut sim = Simulation::new(&SimConfig::default()).unwrap();
        assert!((0..50).all(|_| !sim.advance().finished));
    }

    #[test]
    fn test_left_arena_reported_once() {
        // one full-speed step carries the car through the east wall
        let config = SimConfig {
            speed_gain: 500.0,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(&config).unwrap();

        let first = sim.advance();
        assert_eq!(first.telemetry.pose.x, 900.0);
        assert!(first.left_arena);

        let second = sim.advance();
        assert!(!sim.arena().contains(second.telemetry.pose.x, second.telemetry.pose.y));
        assert!(!second.left_arena);
    }

    #[test]
    fn test_stays_inside_without_exit_report() {
        let mut sim = Simulation::new(&SimConfig::default()).unwrap();
        assert!((0..300).all(|_| !sim.advance().left_arena));
    }

    #[test]
    fn test_rejects_start_outside_arena() {
        let config = SimConfig {
            start_x: 900.0,
            ..SimConfig::default()
        };
        let err = Simulation::new(&config).err().unwrap();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SimConfig {
            arena_width: 0,
            ..SimConfig::default()
        };
        assert!(Simulation::new(&config).is_err());
    }
}
