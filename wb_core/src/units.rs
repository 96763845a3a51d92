//! # Unit Types
//!
//! Type-safe wrappers for the units that appear on a weight & balance sheet.
//! These are plain `f64` newtypes so JSON stays clean (just numbers).
//!
//! ## US Customary / Aviation Units
//!
//! - Weight: pounds (lb)
//! - Arm: inches aft of datum (in)
//! - Moment: pound-inches (lb-in)
//! - Fuel: US gallons (gal), hours of flight (hr)
//! - Altitude: feet (ft)
//! - Altimeter setting: inches of mercury (inHg)
//! - Temperature: degrees Celsius (°C)
//! - Wind: knots (kt), degrees magnetic (°)
//!
//! ## Example
//!
//! ```rust
//! use wb_core::units::{Inches, InLb, Pounds};
//!
//! let moment: InLb = Pounds(170.0) * Inches(80.5);
//! assert_eq!(moment.0, 13_685.0);
//!
//! let arm = moment.arm_for(Pounds(170.0));
//! assert_eq!(arm, Some(Inches(80.5)));
//! assert_eq!(moment.arm_for(Pounds(0.0)), None);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Mass & Balance Units
// ============================================================================

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Arm in inches aft of datum
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Moment in pound-inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InLb(pub f64);

impl Mul<Inches> for Pounds {
    type Output = InLb;
    fn mul(self, rhs: Inches) -> InLb {
        InLb(self.0 * rhs.0)
    }
}

impl InLb {
    /// Arm of this moment for a given weight, `None` when the weight is zero
    /// or the quotient is not finite.
    pub fn arm_for(self, weight: Pounds) -> Option<Inches> {
        if weight.0 == 0.0 {
            return None;
        }
        let arm = self.0 / weight.0;
        arm.is_finite().then_some(Inches(arm))
    }
}

// ============================================================================
// Fuel Units
// ============================================================================

/// Fuel volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallons(pub f64);

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

impl Gallons {
    /// Weight of this volume at `lb_per_gal`
    pub fn weight(self, lb_per_gal: f64) -> Pounds {
        Pounds(self.0 * lb_per_gal)
    }
}

// ============================================================================
// Atmosphere & Wind Units
// ============================================================================

/// Altitude or elevation in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Altimeter setting in inches of mercury
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InHg(pub f64);

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Direction in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Speed in knots
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Knots(pub f64);

impl Degrees {
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Pounds);
impl_arithmetic!(Inches);
impl_arithmetic!(InLb);
impl_arithmetic!(Gallons);
impl_arithmetic!(Hours);
impl_arithmetic!(Feet);
impl_arithmetic!(InHg);
impl_arithmetic!(Celsius);
impl_arithmetic!(Degrees);
impl_arithmetic!(Knots);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_times_arm() {
        let m = Pounds(100.0) * Inches(95.0);
        assert_eq!(m, InLb(9500.0));
    }

    #[test]
    fn test_arm_for_zero_weight() {
        assert_eq!(InLb(9500.0).arm_for(Pounds(0.0)), None);
        assert_eq!(InLb(0.0).arm_for(Pounds(0.0)), None);
        assert_eq!(InLb(9500.0).arm_for(Pounds(100.0)), Some(Inches(95.0)));
    }

    #[test]
    fn test_gallons_to_pounds() {
        assert_eq!(Gallons(48.0).weight(6.0), Pounds(288.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Pounds(10.0);
        let b = Pounds(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let arm = Inches(80.5);
        let json = serde_json::to_string(&arm).unwrap();
        assert_eq!(json, "80.5");

        let roundtrip: Inches = serde_json::from_str(&json).unwrap();
        assert_eq!(arm, roundtrip);
    }
}
