// ================================
// src/lib.rs
// ================================
pub mod arena; // walls + ray casting
pub mod config;
pub mod control; // fuzzy rule base
pub mod fuzzy; // membership functions
pub mod simulation;
pub mod telemetry;
pub mod vehicle;

pub use config::SimConfig;
pub use control::{calculate_control, ControlOutput, FuzzyController};
pub use simulation::{Simulation, TickOutcome};
