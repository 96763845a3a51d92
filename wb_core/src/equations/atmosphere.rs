//! # Altitude Formulas
//!
//! Rule-of-thumb pilot formulas, not the full standard-atmosphere model:
//!
//! - 1000 ft of pressure altitude per inHg below 29.92
//! - Standard lapse rate of 2 °C per 1000 ft from 15 °C at sea level
//! - 120 ft of density altitude per °C above ISA

use crate::units::{Celsius, Feet, InHg};

/// Standard sea-level pressure (inHg)
pub const STANDARD_ALTIMETER: InHg = InHg(29.92);

/// Feet of pressure altitude per inHg of altimeter setting
pub const FEET_PER_INHG: f64 = 1000.0;

/// ISA sea-level temperature (°C)
pub const ISA_SEA_LEVEL: Celsius = Celsius(15.0);

/// ISA lapse rate (°C per ft)
pub const ISA_LAPSE_PER_FT: f64 = -0.002;

/// Density altitude change per °C deviation from ISA
pub const FEET_PER_DEGREE: f64 = 120.0;

/// Pressure altitude from field elevation and altimeter setting
///
/// # Formula
/// PA = elev + (29.92 − alt) × 1000
///
/// Returns 0 when either input is zero: an absent altimeter would otherwise
/// produce a meaningless ~30,000 ft figure.
#[inline]
pub fn pressure_altitude(elevation: Feet, altimeter: InHg) -> Feet {
    if elevation.0 == 0.0 || altimeter.0 == 0.0 {
        return Feet(0.0);
    }
    Feet(elevation.0 + (STANDARD_ALTIMETER.0 - altimeter.0) * FEET_PER_INHG)
}

/// ISA temperature at a pressure altitude
///
/// # Formula
/// ISA = 15 + PA × (−2/1000)
#[inline]
pub fn isa_temperature(pressure_altitude: Feet) -> Celsius {
    Celsius(ISA_SEA_LEVEL.0 + pressure_altitude.0 * ISA_LAPSE_PER_FT)
}

/// Density altitude from pressure altitude and actual temperature
///
/// # Formula
/// DA = PA + (OAT − ISA) × 120
#[inline]
pub fn density_altitude(pressure_altitude: Feet, temperature: Celsius, isa: Celsius) -> Feet {
    Feet(pressure_altitude.0 + (temperature.0 - isa.0) * FEET_PER_DEGREE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pressure_altitude() {
        let pa = pressure_altitude(Feet(500.0), InHg(29.42));
        assert_abs_diff_eq!(pa.0, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pressure_altitude_high_setting() {
        let pa = pressure_altitude(Feet(500.0), InHg(30.12));
        assert_abs_diff_eq!(pa.0, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pressure_altitude_missing_inputs() {
        assert_eq!(pressure_altitude(Feet(0.0), InHg(29.42)), Feet(0.0));
        assert_eq!(pressure_altitude(Feet(500.0), InHg(0.0)), Feet(0.0));
    }

    #[test]
    fn test_isa_and_density_altitude() {
        let isa = isa_temperature(Feet(1000.0));
        assert_abs_diff_eq!(isa.0, 13.0, epsilon = 1e-9);

        let da = density_altitude(Feet(1000.0), Celsius(25.0), isa);
        assert_abs_diff_eq!(da.0, 2440.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cold_day_density_altitude_below_pressure_altitude() {
        let isa = isa_temperature(Feet(5000.0));
        let da = density_altitude(Feet(5000.0), Celsius(-10.0), isa);
        assert!(da.0 < 5000.0);
    }
}
