// ================================
// src/control.rs - fuzzy steering and speed law
// ================================
use crate::arena::RayScan;
use crate::fuzzy::{DistanceDomain, Membership};

// Rule weights. Tuned by hand, keep the signs and the 0.8 / -0.6 asymmetry.
const RIGHT_NEAR_WEIGHT: f64 = -1.0;
const RIGHT_MEDIUM_WEIGHT: f64 = 0.5;
const CENTER_NOT_FAR_WEIGHT: f64 = 0.8;

const LEFT_NEAR_WEIGHT: f64 = 1.0;
const LEFT_MEDIUM_WEIGHT: f64 = 0.5;
const LEFT_NOT_FAR_WEIGHT: f64 = -0.6;

const SLOW_DOWN_WEIGHT: f64 = -1.0;
const MODERATE_SPEED_WEIGHT: f64 = 0.8;
const SPEED_UP_WEIGHT: f64 = 1.0;

/// Clamped control pair plus the nine memberships it was derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlOutput {
    /// Steering in [-1, 1].
    pub turn: f64,
    /// Acceleration in [-1, 1].
    pub acceleration: f64,
    pub left: Membership,
    pub center: Membership,
    pub right: Membership,
}

/// Stateless fuzzy controller mapping three wall distances to a control pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FuzzyController {
    domain: DistanceDomain,
}

impl FuzzyController {
    pub fn new(domain: DistanceDomain) -> Self {
        Self { domain }
    }

    /// Evaluates the rule base for one set of readings.
    pub fn calculate(&self, left: f64, center: f64, right: f64) -> ControlOutput {
        let left = self.domain.fuzzify(left);
        let center = self.domain.fuzzify(center);
        let right = self.domain.fuzzify(right);

        let turn = Self::turn_value(&left, &center, &right).clamp(-1.0, 1.0);
        let acceleration = Self::acceleration_value(&center).clamp(-1.0, 1.0);

        ControlOutput {
            turn,
            acceleration,
            left,
            center,
            right,
        }
    }

    pub fn calculate_scan(&self, scan: &RayScan) -> ControlOutput {
        self.calculate(
            f64::from(scan.left.distance),
            f64::from(scan.center.distance),
            f64::from(scan.right.distance),
        )
    }

    fn turn_value(left: &Membership, center: &Membership, right: &Membership) -> f64 {
        let turn_left = RIGHT_NEAR_WEIGHT * right.near
            + RIGHT_MEDIUM_WEIGHT * right.medium
            + CENTER_NOT_FAR_WEIGHT * (1.0 - center.far);
        let turn_right = LEFT_NEAR_WEIGHT * left.near
            + LEFT_MEDIUM_WEIGHT * left.medium
            + LEFT_NOT_FAR_WEIGHT * (1.0 - left.far);

        turn_left + turn_right
    }

    fn acceleration_value(center: &Membership) -> f64 {
        let slow_down = SLOW_DOWN_WEIGHT * center.near;
        let moderate_speed = MODERATE_SPEED_WEIGHT * center.medium;
        let speed_up = SPEED_UP_WEIGHT * center.far;

        slow_down + moderate_speed + speed_up
    }
}

/// Runs the controller with the default distance domain.
pub fn calculate_control(left: f64, center: f64, right: f64) -> ControlOutput {
    FuzzyController::default().calculate(left, center, right)
}
