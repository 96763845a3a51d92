//! # Weight & Balance Formulas
//!
//! ## Notation
//!
//! - `W` = Weight (lb)
//! - `A` = Arm aft of datum (in)
//! - `M` = Moment (lb-in)
//! - `ρ` = Fuel density (lb/gal)
//! - `r` = Fuel burn rate (gal/hr)
//!
//! Every function here is total: a zero denominator yields `None` (or 0 where
//! the caller needs a number), never `NaN` or `Infinity`.

use crate::units::{Gallons, Hours, InLb, Inches, Pounds};

/// Moment of a weight at an arm
///
/// # Formula
/// M = W × A
#[inline]
pub fn moment(weight: Pounds, arm: Inches) -> InLb {
    weight * arm
}

/// Arm (CG) of a moment about its weight
///
/// # Formula
/// A = M / W, undefined for W = 0
#[inline]
pub fn center_of_gravity(moment: InLb, weight: Pounds) -> Option<Inches> {
    moment.arm_for(weight)
}

/// Weight of a fuel load
///
/// # Formula
/// W = gal × ρ
#[inline]
pub fn fuel_weight(volume: Gallons, lb_per_gal: f64) -> Pounds {
    volume.weight(lb_per_gal)
}

/// Gallons burned in a given time
///
/// # Formula
/// gal = hr × r
#[inline]
pub fn burn_gallons(duration: Hours, gal_per_hr: f64) -> Gallons {
    Gallons(duration.0 * gal_per_hr)
}

/// Time needed to burn a given volume
///
/// # Formula
/// hr = gal / r, zero when r = 0
#[inline]
pub fn burn_hours(volume: Gallons, gal_per_hr: f64) -> Hours {
    if gal_per_hr == 0.0 {
        return Hours(0.0);
    }
    Hours(volume.0 / gal_per_hr)
}
