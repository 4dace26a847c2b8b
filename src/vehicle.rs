// ================================
// src/vehicle.rs - vehicle pose and motion update
// ================================
use crate::control::ControlOutput;

/// Position in arena units, heading in degrees (0 = +x, 90 = +y).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
}

/// How strongly control outputs move the vehicle each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveGains {
    pub turn_gain: f64,
    pub speed_gain: f64,
}

impl Default for DriveGains {
    fn default() -> Self {
        Self {
            turn_gain: 2.0,
            speed_gain: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vehicle {
    pub pose: Pose,
    /// Displacement applied on the last update.
    pub speed: f64,
}

impl Vehicle {
    pub fn new(pose: Pose) -> Self {
        Self { pose, speed: 0.0 }
    }

    /// Turns first, then moves along the new heading.
    pub fn apply(&mut self, control: &ControlOutput, gains: &DriveGains) {
        self.pose.heading_deg += control.turn * gains.turn_gain;
        self.speed = gains.speed_gain * control.acceleration;

        let heading = self.pose.heading_deg.to_radians();
        self.pose.x += self.speed * heading.cos();
        self.pose.y += self.speed * heading.sin();
    }
}
