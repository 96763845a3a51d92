//! # Runway Wind Components
//!
//! ```text
//!            runway heading
//!                 ↑
//!        wind ↘   │
//!             θ ↘ │      headwind  = V cos θ
//!                ↘│      crosswind = |V sin θ|
//! ```
//!
//! θ is the smaller angle between wind direction and runway heading. The
//! crosswind side is taken from the raw clockwise difference before folding.

use serde::{Deserialize, Serialize};

use crate::units::{Degrees, Knots};

/// Which side of the nose the crosswind comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrosswindSide {
    Left,
    Right,
    /// Wind straight down the runway, either direction
    Center,
    /// Missing wind or runway input
    #[default]
    Undetermined,
}

impl CrosswindSide {
    pub fn display_name(&self) -> &'static str {
        match self {
            CrosswindSide::Left => "Left",
            CrosswindSide::Right => "Right",
            CrosswindSide::Center => "Center",
            CrosswindSide::Undetermined => "—",
        }
    }
}

/// Headwind and crosswind for a runway.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindComponents {
    /// Positive is a headwind, negative a tailwind
    pub headwind_kt: f64,
    /// Always non-negative; see `side`
    pub crosswind_kt: f64,
    pub side: CrosswindSide,
}

/// Magnetic heading of a runway designator (tens of degrees)
///
/// # Formula
/// heading = designator × 10
#[inline]
pub fn runway_heading(designator: i64) -> Degrees {
    Degrees(designator as f64 * 10.0)
}

/// Raw clockwise angle from runway heading to wind direction, in [0, 360)
#[inline]
pub fn raw_angle(wind_direction: Degrees, runway: Degrees) -> f64 {
    (wind_direction.0 - runway.0 + 360.0).rem_euclid(360.0)
}

/// Smaller angle between wind and runway, in [0, 180]
#[inline]
pub fn folded_angle(raw: f64) -> f64 {
    if raw > 180.0 {
        360.0 - raw
    } else {
        raw
    }
}

/// Headwind and crosswind components
///
/// # Formulas
/// - Δ = (wind − rwy + 360) mod 360, θ = Δ > 180 ? 360 − Δ : Δ
/// - HW = V cos θ
/// - XW = |V sin θ|, Right when 0 < Δ < 180, Left otherwise, Center when θ ∈ {0, 180}
pub fn wind_components(wind_direction: Degrees, wind_speed: Knots, runway: Degrees) -> WindComponents {
    let raw = raw_angle(wind_direction, runway);
    let angle = folded_angle(raw);
    let theta = Degrees(angle).to_radians();

    let side = if angle == 0.0 || angle == 180.0 {
        CrosswindSide::Center
    } else if raw > 0.0 && raw < 180.0 {
        CrosswindSide::Right
    } else {
        CrosswindSide::Left
    };

    WindComponents {
        headwind_kt: wind_speed.0 * theta.cos(),
        crosswind_kt: (wind_speed.0 * theta.sin()).abs(),
        side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quartering_headwind_from_right() {
        let w = wind_components(Degrees(240.0), Knots(12.0), runway_heading(18));
        assert_abs_diff_eq!(w.headwind_kt, 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(w.crosswind_kt, 10.392_304_845, epsilon = 1e-6);
        assert_eq!(w.side, CrosswindSide::Right);
    }

    #[test]
    fn test_wind_from_left() {
        let w = wind_components(Degrees(120.0), Knots(10.0), runway_heading(18));
        assert_eq!(w.side, CrosswindSide::Left);
        assert_abs_diff_eq!(w.headwind_kt, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_straight_down_runway() {
        let head = wind_components(Degrees(180.0), Knots(10.0), runway_heading(18));
        assert_eq!(head.side, CrosswindSide::Center);
        assert_abs_diff_eq!(head.headwind_kt, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(head.crosswind_kt, 0.0, epsilon = 1e-9);

        let tail = wind_components(Degrees(360.0), Knots(10.0), runway_heading(18));
        assert_eq!(tail.side, CrosswindSide::Center);
        assert_abs_diff_eq!(tail.headwind_kt, -10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wraparound() {
        // Runway 36, wind 010: 10° right of the nose
        let w = wind_components(Degrees(10.0), Knots(20.0), runway_heading(36));
        assert_eq!(w.side, CrosswindSide::Right);
        assert!(w.headwind_kt > 19.0);

        // Runway 01, wind 350: 20° left of the nose
        let w = wind_components(Degrees(350.0), Knots(20.0), runway_heading(1));
        assert_eq!(w.side, CrosswindSide::Left);
    }

    #[test]
    fn test_folded_angle() {
        assert_eq!(folded_angle(60.0), 60.0);
        assert_eq!(folded_angle(300.0), 60.0);
        assert_eq!(folded_angle(180.0), 180.0);
    }
}
