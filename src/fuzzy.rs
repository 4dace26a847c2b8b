// ================================
// src/fuzzy.rs - membership functions over the distance domain
// ================================

/// Direction in which a shoulder function changes between its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shoulder {
    /// 1 below `low`, 0 above `high`.
    Falling,
    /// 0 below `low`, 1 above `high`.
    Rising,
}

/// Piecewise-linear shoulder membership function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipFunction {
    pub low: f64,
    pub high: f64,
    pub shoulder: Shoulder,
}

impl MembershipFunction {
    pub const fn falling(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            shoulder: Shoulder::Falling,
        }
    }

    pub const fn rising(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            shoulder: Shoulder::Rising,
        }
    }

    /// Degree of truth of `d`, saturating at 0 and 1 outside the thresholds.
    pub fn evaluate(&self, d: f64) -> f64 {
        match self.shoulder {
            Shoulder::Falling => {
                if d <= self.low {
                    1.0
                } else if d >= self.high {
                    0.0
                } else {
                    (self.high - d) / (self.high - self.low)
                }
            }
            Shoulder::Rising => {
                if d <= self.low {
                    0.0
                } else if d >= self.high {
                    1.0
                } else {
                    (d - self.low) / (self.high - self.low)
                }
            }
        }
    }
}

/// Degrees of `near`, `medium` and `far` for one distance reading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Membership {
    pub near: f64,
    pub medium: f64,
    pub far: f64,
}

/// The three fuzzy sets over wall distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceDomain {
    pub near: MembershipFunction,
    pub medium: MembershipFunction,
    pub far: MembershipFunction,
}

impl DistanceDomain {
    // `medium` is a falling shoulder too, not a triangle.
    pub const NEAR: MembershipFunction = MembershipFunction::falling(0.0, 50.0);
    pub const MEDIUM: MembershipFunction = MembershipFunction::falling(40.0, 180.0);
    pub const FAR: MembershipFunction = MembershipFunction::rising(100.0, 200.0);

    pub fn fuzzify(&self, distance: f64) -> Membership {
        Membership {
            near: self.near.evaluate(distance),
            medium: self.medium.evaluate(distance),
            far: self.far.evaluate(distance),
        }
    }
}

impl Default for DistanceDomain {
    fn default() -> Self {
        Self {
            near: Self::NEAR,
            medium: Self::MEDIUM,
            far: Self::FAR,
        }
    }
}
