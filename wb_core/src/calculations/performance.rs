//! # Altitude & Performance
//!
//! Pressure altitude, ISA temperature, density altitude, and runway wind
//! components for one airport. Departure and arrival use the same
//! [`calculate`] and never look at each other.
//!
//! ## Example
//!
//! ```rust
//! use wb_core::calculations::performance::{calculate, AirportConditions};
//! use wb_core::equations::CrosswindSide;
//!
//! let klgb = AirportConditions {
//!     icao: "KLGB".to_string(),
//!     temperature_c: "25".into(),
//!     altimeter_inhg: "29.42".into(),
//!     elevation_ft: "500".into(),
//!     runway: "18".into(),
//!     wind_direction_deg: "240".into(),
//!     wind_speed_kt: "12".into(),
//! };
//!
//! let result = calculate("Depart", &klgb);
//! assert_eq!(result.pressure_altitude_ft.round(), 1000.0);
//! assert_eq!(result.density_altitude_ft.round(), 2440.0);
//! assert_eq!(result.wind.side, CrosswindSide::Right);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::atmosphere::{density_altitude, isa_temperature, pressure_altitude};
use crate::equations::explain;
use crate::equations::wind::{runway_heading, wind_components, WindComponents};
use crate::input::Entry;
use crate::units::{Celsius, Degrees, Feet, InHg, Knots};

/// Field and weather data for one airport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportConditions {
    /// ICAO identifier, upper-cased on entry
    pub icao: String,
    pub temperature_c: Entry,
    pub altimeter_inhg: Entry,
    pub elevation_ft: Entry,
    /// Runway designator in tens of degrees (e.g. "18", "27L")
    pub runway: Entry,
    pub wind_direction_deg: Entry,
    pub wind_speed_kt: Entry,
}

impl AirportConditions {
    pub fn set_icao(&mut self, text: &str) {
        self.icao = text.to_uppercase();
    }

    pub fn clear(&mut self) {
        *self = AirportConditions::default();
    }
}

/// Derived altitude and wind figures for one airport.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceResult {
    pub pressure_altitude_ft: f64,
    pub isa_temperature_c: f64,
    pub density_altitude_ft: f64,
    /// `None` when the runway designator has no leading integer
    pub runway_heading_deg: Option<f64>,
    pub wind: WindComponents,
    pub pressure_altitude_formula: String,
    pub isa_temperature_formula: String,
    pub density_altitude_formula: String,
}

/// Compute every performance figure for one airport. `label` prefixes the
/// formula lines ("Depart", "Arrive").
pub fn calculate(label: &str, airport: &AirportConditions) -> PerformanceResult {
    let elevation = Feet(airport.elevation_ft.value());
    let altimeter = InHg(airport.altimeter_inhg.value());
    let temperature = Celsius(airport.temperature_c.value());

    let pa = pressure_altitude(elevation, altimeter);
    let isa = isa_temperature(pa);
    let da = density_altitude(pa, temperature, isa);

    let runway = airport.runway.leading_integer().map(runway_heading);

    // A zero direction or speed counts as missing, same as blank
    let wind = match (
        airport.wind_direction_deg.nonzero(),
        airport.wind_speed_kt.nonzero(),
        runway,
    ) {
        (Some(dir), Some(speed), Some(rwy)) => wind_components(Degrees(dir), Knots(speed), rwy),
        _ => WindComponents::default(),
    };

    PerformanceResult {
        pressure_altitude_ft: pa.0,
        isa_temperature_c: isa.0,
        density_altitude_ft: da.0,
        runway_heading_deg: runway.map(|r| r.0),
        wind,
        pressure_altitude_formula: explain::pressure_altitude_line(
            label,
            airport.elevation_ft.number().map(Feet),
            airport.altimeter_inhg.number().map(InHg),
            pa,
        ),
        isa_temperature_formula: explain::isa_temperature_line(label, pa, isa),
        density_altitude_formula: explain::density_altitude_line(
            label,
            pa,
            airport.temperature_c.number().map(Celsius),
            isa,
            da,
        ),
    }
}
