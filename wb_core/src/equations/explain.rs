//! # Formula Explanations
//!
//! Human-readable lines showing each altitude formula with its inputs
//! substituted, e.g. `Depart: 500 + (29.92 - 29.42) * 1000 = 1000 ft`.
//! When an input the formula needs is missing the line is a prompt instead,
//! so `NaN` never reaches the page.

use crate::units::{Celsius, Feet, InHg};

/// Shown in place of a substituted value that is missing or zero
pub const MISSING: &str = "—";

/// Format a value for substitution, or `None` when it is zero or not finite.
fn substituted(value: f64, digits: usize) -> Option<String> {
    if !value.is_finite() || value == 0.0 {
        None
    } else {
        Some(format!("{:.*}", digits, value))
    }
}

/// `<label>: <elev> + (29.92 - <alt>) * 1000 = <PA> ft`
pub fn pressure_altitude_line(label: &str, elevation: Option<Feet>, altimeter: Option<InHg>, result: Feet) -> String {
    let elev = elevation.and_then(|e| substituted(e.0, 0));
    let alt = altimeter.and_then(|a| substituted(a.0, 2));
    match (elev, alt) {
        (Some(elev), Some(alt)) => format!(
            "{}: {} + (29.92 - {}) * 1000 = {} ft",
            label,
            elev,
            alt,
            substituted(result.0, 0).unwrap_or_else(|| MISSING.to_string())
        ),
        _ => format!("{}: Enter elevation + altimeter", label),
    }
}

/// `<label>: 15 + <PA> * (-2/1000) = <ISA> °C`
pub fn isa_temperature_line(label: &str, pressure_altitude: Feet, result: Celsius) -> String {
    match substituted(pressure_altitude.0, 0) {
        Some(pa) => format!(
            "{}: 15 + {} * (-2/1000) = {} °C",
            label,
            pa,
            substituted(result.0, 1).unwrap_or_else(|| MISSING.to_string())
        ),
        None => format!("{}: Enter pressure altitude", label),
    }
}

/// `<label>: <PA> + (<OAT> - <ISA>) * 120 = <DA> ft`
///
/// The temperature is required to be entered, but an entered 0 °C is a real
/// temperature and is substituted as `0.0`.
pub fn density_altitude_line(
    label: &str,
    pressure_altitude: Feet,
    temperature: Option<Celsius>,
    isa: Celsius,
    result: Feet,
) -> String {
    let pa = substituted(pressure_altitude.0, 0);
    let oat = temperature.filter(|t| t.0.is_finite()).map(|t| format!("{:.1}", t.0));
    match (pa, oat) {
        (Some(pa), Some(oat)) => format!(
            "{}: {} + ({} - {:.1}) * 120 = {} ft",
            label,
            pa,
            oat,
            isa.0,
            substituted(result.0, 0).unwrap_or_else(|| MISSING.to_string())
        ),
        _ => format!("{}: Enter pressure alt + temp", label),
    }
}
