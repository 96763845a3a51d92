//! # Piper Archer (PA-28) Constants
//!
//! Loading stations, fuel figures, and CG envelope for the one airframe this
//! worksheet is built for. Values match the PA-28 weight & balance form.

use crate::units::{Gallons, Inches, Pounds};

/// Avgas density used to convert gallons to pounds
pub const FUEL_LB_PER_GAL: f64 = 6.0;

/// Planning fuel burn rate (gal/hr)
pub const FUEL_BURN_GAL_PER_HR: f64 = 11.0;

/// Forward CG limit (in aft of datum)
pub const ARM_MIN: Inches = Inches(82.0);

/// Aft CG limit (in aft of datum)
pub const ARM_MAX: Inches = Inches(93.0);

/// Maximum takeoff weight
pub const MAX_TAKEOFF_WEIGHT: Pounds = Pounds(2550.0);

/// Maximum landing weight
pub const MAX_LANDING_WEIGHT: Pounds = Pounds(2550.0);

/// Usable fuel capacity
pub const MAX_USABLE_FUEL: Gallons = Gallons(48.0);

/// Baggage compartment limit
pub const MAX_BAGGAGE: Pounds = Pounds(200.0);

/// A loading station with a fixed arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Row label on the loading form
    pub name: &'static str,
    /// Arm aft of datum
    pub arm: Inches,
}

pub const FRONT_SEATS: Station = Station { name: "Pilot & Front Pax", arm: Inches(80.5) };
pub const REAR_SEATS: Station = Station { name: "Rear Pax", arm: Inches(118.1) };
pub const FUEL: Station = Station { name: "Fuel", arm: Inches(95.0) };
pub const BAGGAGE: Station = Station { name: "Baggage", arm: Inches(142.8) };

/// Whether `arm` lies outside the CG envelope.
///
/// Only finite, positive arms are ever flagged; zero, negative, and
/// undetermined arms are left alone.
pub fn is_arm_out_of_range(arm: f64) -> bool {
    arm.is_finite() && arm > 0.0 && (arm < ARM_MIN.0 || arm > ARM_MAX.0)
}
