// ================================
// src/telemetry.rs - per-tick diagnostics
// ================================
use crate::{arena::RayScan, control::ControlOutput, fuzzy::Membership, vehicle::Pose};
use std::fmt;

/// What happened on one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    pub tick: u64,
    pub scan: RayScan,
    pub control: ControlOutput,
    /// Pose after the control was applied.
    pub pose: Pose,
}

impl Telemetry {
    /// Overlay text, one entry per display row.
    pub fn lines(&self) -> Vec<String> {
        let sides = [
            ("Left", self.scan.left.distance, &self.control.left),
            ("Center", self.scan.center.distance, &self.control.center),
            ("Right", self.scan.right.distance, &self.control.right),
        ];

        let mut lines = Vec::with_capacity(8);
        for (name, distance, membership) in sides {
            lines.push(format!("{} Distance: {:.2}", name, f64::from(distance)));
            lines.push(membership_line(name, membership));
        }
        lines.push(format!("Turn: {:.2}", self.control.turn));
        lines.push(format!("Acceleration: {:.2}", self.control.acceleration));
        lines
    }

    /// Headless ray overlay: each ray as a segment from the car to where it
    /// stopped.
    pub fn ray_lines(&self) -> Vec<String> {
        let names = ["Left", "Center", "Right"];
        names
            .iter()
            .zip(self.scan.rays())
            .map(|(name, ray)| {
                let (ex, ey) = ray.end();
                format!(
                    "{} Ray: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    name, ray.origin.0, ray.origin.1, ex, ey
                )
            })
            .collect()
    }
}

fn membership_line(name: &str, m: &Membership) -> String {
    format!(
        "{} Near: {:.2}, Medium: {:.2}, Far: {:.2}",
        name, m.near, m.medium, m.far
    )
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[tick {}] pos=({:.1}, {:.1}) heading={:.1} | {} | {}",
            self.tick,
            self.pose.x,
            self.pose.y,
            self.pose.heading_deg,
            self.lines().join(" | "),
            self.ray_lines().join(" | ")
        )
    }
}
