//! # Worksheet
//!
//! The worksheet is the root container for one session: every typed input,
//! the sync markers, and the results computed from them.
//!
//! ## Structure
//!
//! ```text
//! Worksheet
//! ├── inputs: WorksheetInputs
//! │   ├── basic: BasicEmptyWeight (weight/arm/moment + last edited)
//! │   ├── loading: Loading (seats, fuel, baggage, allowance)
//! │   ├── fuel_burn: FuelBurnPair (hours/gallons + source)
//! │   ├── departure: AirportConditions
//! │   └── arrival: AirportConditions
//! └── result: WorksheetResult (recomputed after every edit)
//! ```
//!
//! Every edit goes through [`Worksheet::set`], which applies the field's sync
//! rule and then runs [`compute_all`] before returning, so
//! [`Worksheet::result`] is always final.
//!
//! ## Example
//!
//! ```rust
//! use wb_core::worksheet::{Field, Worksheet};
//!
//! let mut sheet = Worksheet::new();
//! sheet.set(Field::BasicWeight, "1500");
//! sheet.set(Field::BasicArm, "85");
//! sheet.set_named("front.weight", "340").unwrap();
//!
//! assert_eq!(sheet.inputs().basic.moment.text(), "127500.00");
//! assert_eq!(sheet.result().weight_balance.ramp.weight_lb, 1840.0);
//!
//! sheet.clear();
//! assert!(sheet.inputs().is_empty());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::calculations::advisories::{self, Advisory};
use crate::calculations::fuel_burn::FuelBurnPair;
use crate::calculations::performance::{self, AirportConditions, PerformanceResult};
use crate::calculations::weight_balance::{self, BasicEmptyWeight, Loading, TriangleField, WeightBalanceResult};
use crate::errors::{CalcError, CalcResult};
use crate::input::Entry;

// ============================================================================
// Field Catalogue
// ============================================================================

/// Departure or arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Airport {
    Departure,
    Arrival,
}

impl Airport {
    /// Label used on formula lines
    pub fn label(&self) -> &'static str {
        match self {
            Airport::Departure => "Depart",
            Airport::Arrival => "Arrive",
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Airport::Departure => "depart",
            Airport::Arrival => "arrive",
        }
    }
}

/// One input of an airport column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirportField {
    Icao,
    Temperature,
    Altimeter,
    Elevation,
    Runway,
    WindDirection,
    WindSpeed,
}

impl AirportField {
    pub const ALL: [AirportField; 7] = [
        AirportField::Icao,
        AirportField::Temperature,
        AirportField::Altimeter,
        AirportField::Elevation,
        AirportField::Runway,
        AirportField::WindDirection,
        AirportField::WindSpeed,
    ];

    fn suffix(&self) -> &'static str {
        match self {
            AirportField::Icao => "icao",
            AirportField::Temperature => "temp",
            AirportField::Altimeter => "altimeter",
            AirportField::Elevation => "elevation",
            AirportField::Runway => "runway",
            AirportField::WindDirection => "wind_dir",
            AirportField::WindSpeed => "wind_speed",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            AirportField::Icao => "ICAO code",
            AirportField::Temperature => "temperature (°C)",
            AirportField::Altimeter => "altimeter (inHg)",
            AirportField::Elevation => "field elevation (ft)",
            AirportField::Runway => "runway designator (e.g. 18)",
            AirportField::WindDirection => "wind direction (°)",
            AirportField::WindSpeed => "wind speed (kt)",
        }
    }
}

/// Every editable input on the worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    BasicWeight,
    BasicArm,
    BasicMoment,
    FrontSeats,
    RearSeats,
    FuelGallons,
    Baggage,
    FuelAllowance,
    FuelBurnHours,
    FuelBurnGallons,
    Airport(Airport, AirportField),
}

const LOADING_FIELDS: [Field; 10] = [
    Field::BasicWeight,
    Field::BasicArm,
    Field::BasicMoment,
    Field::FrontSeats,
    Field::RearSeats,
    Field::FuelGallons,
    Field::Baggage,
    Field::FuelAllowance,
    Field::FuelBurnHours,
    Field::FuelBurnGallons,
];

impl Field {
    /// All fields in form order
    pub fn all() -> Vec<Field> {
        let mut fields = LOADING_FIELDS.to_vec();
        for airport in [Airport::Departure, Airport::Arrival] {
            fields.extend(AirportField::ALL.iter().map(|f| Field::Airport(airport, *f)));
        }
        fields
    }

    /// Dotted name used on the command line and in logs
    pub fn name(&self) -> String {
        match self {
            Field::BasicWeight => "basic.weight".to_string(),
            Field::BasicArm => "basic.arm".to_string(),
            Field::BasicMoment => "basic.moment".to_string(),
            Field::FrontSeats => "front.weight".to_string(),
            Field::RearSeats => "rear.weight".to_string(),
            Field::FuelGallons => "fuel.gal".to_string(),
            Field::Baggage => "baggage.weight".to_string(),
            Field::FuelAllowance => "allowance.gal".to_string(),
            Field::FuelBurnHours => "burn.hr".to_string(),
            Field::FuelBurnGallons => "burn.gal".to_string(),
            Field::Airport(airport, field) => format!("{}.{}", airport.prefix(), field.suffix()),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Field::BasicWeight => "basic empty weight (lb)".to_string(),
            Field::BasicArm => "basic empty arm (in)".to_string(),
            Field::BasicMoment => "basic empty moment (lb-in)".to_string(),
            Field::FrontSeats => "pilot & front pax (lb)".to_string(),
            Field::RearSeats => "rear pax (lb)".to_string(),
            Field::FuelGallons => "fuel on board (gal, 48 usable)".to_string(),
            Field::Baggage => "baggage (lb, 200 max)".to_string(),
            Field::FuelAllowance => "taxi fuel allowance (gal)".to_string(),
            Field::FuelBurnHours => "fuel burn time (hr)".to_string(),
            Field::FuelBurnGallons => "fuel burn (gal)".to_string(),
            Field::Airport(airport, field) => format!("{} {}", airport.prefix(), field.description()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Field {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Field::all()
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| CalcError::unknown_field(s))
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Everything the user has typed, plus the sync markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorksheetInputs {
    pub basic: BasicEmptyWeight,
    pub loading: Loading,
    pub fuel_burn: FuelBurnPair,
    pub departure: AirportConditions,
    pub arrival: AirportConditions,
}

impl WorksheetInputs {
    pub fn airport(&self, airport: Airport) -> &AirportConditions {
        match airport {
            Airport::Departure => &self.departure,
            Airport::Arrival => &self.arrival,
        }
    }

    fn airport_mut(&mut self, airport: Airport) -> &mut AirportConditions {
        match airport {
            Airport::Departure => &mut self.departure,
            Airport::Arrival => &mut self.arrival,
        }
    }

    /// Current text of a field
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::BasicWeight => self.basic.weight.text(),
            Field::BasicArm => self.basic.arm.text(),
            Field::BasicMoment => self.basic.moment.text(),
            Field::FrontSeats => self.loading.front_seats_lb.text(),
            Field::RearSeats => self.loading.rear_seats_lb.text(),
            Field::FuelGallons => self.loading.fuel_gal.text(),
            Field::Baggage => self.loading.baggage_lb.text(),
            Field::FuelAllowance => self.loading.fuel_allowance_gal.text(),
            Field::FuelBurnHours => self.fuel_burn.hours.text(),
            Field::FuelBurnGallons => self.fuel_burn.gallons.text(),
            Field::Airport(airport, field) => {
                let a = self.airport(airport);
                match field {
                    AirportField::Icao => &a.icao,
                    AirportField::Temperature => a.temperature_c.text(),
                    AirportField::Altimeter => a.altimeter_inhg.text(),
                    AirportField::Elevation => a.elevation_ft.text(),
                    AirportField::Runway => a.runway.text(),
                    AirportField::WindDirection => a.wind_direction_deg.text(),
                    AirportField::WindSpeed => a.wind_speed_kt.text(),
                }
            }
        }
    }

    /// Whether every field is blank and every marker is at its default
    pub fn is_empty(&self) -> bool {
        *self == WorksheetInputs::default()
    }

    /// Apply one edit and the sync rule it triggers.
    fn apply(&mut self, field: Field, text: &str) {
        match field {
            Field::BasicWeight => self.basic.edit(TriangleField::Weight, text),
            Field::BasicArm => self.basic.edit(TriangleField::Arm, text),
            Field::BasicMoment => self.basic.edit(TriangleField::Moment, text),
            Field::FrontSeats => self.loading.front_seats_lb = Entry::from(text),
            Field::RearSeats => self.loading.rear_seats_lb = Entry::from(text),
            Field::FuelGallons => self.loading.fuel_gal = Entry::from(text),
            Field::Baggage => self.loading.baggage_lb = Entry::from(text),
            Field::FuelAllowance => self.loading.fuel_allowance_gal = Entry::from(text),
            Field::FuelBurnHours => self.fuel_burn.edit_hours(text),
            Field::FuelBurnGallons => self.fuel_burn.edit_gallons(text),
            Field::Airport(airport, field) => {
                let a = self.airport_mut(airport);
                match field {
                    AirportField::Icao => a.set_icao(text),
                    AirportField::Temperature => a.temperature_c = Entry::from(text),
                    AirportField::Altimeter => a.altimeter_inhg = Entry::from(text),
                    AirportField::Elevation => a.elevation_ft = Entry::from(text),
                    AirportField::Runway => a.runway = Entry::from(text),
                    AirportField::WindDirection => a.wind_direction_deg = Entry::from(text),
                    AirportField::WindSpeed => a.wind_speed_kt = Entry::from(text),
                }
            }
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Everything derived from a [`WorksheetInputs`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorksheetResult {
    pub weight_balance: WeightBalanceResult,
    pub departure: PerformanceResult,
    pub arrival: PerformanceResult,
    pub advisories: Vec<Advisory>,
}

impl WorksheetResult {
    pub fn performance(&self, airport: Airport) -> &PerformanceResult {
        match airport {
            Airport::Departure => &self.departure,
            Airport::Arrival => &self.arrival,
        }
    }
}

/// The whole derivation pipeline: a pure function of the inputs.
///
/// Weight & balance runs ramp → takeoff → landing; the two airports are
/// independent of it and of each other.
pub fn compute_all(inputs: &WorksheetInputs) -> WorksheetResult {
    trace!("recomputing worksheet");
    let weight_balance = weight_balance::calculate(&inputs.basic, &inputs.loading, &inputs.fuel_burn);
    let advisories = advisories::collect(&weight_balance);

    WorksheetResult {
        weight_balance,
        departure: performance::calculate(Airport::Departure.label(), &inputs.departure),
        arrival: performance::calculate(Airport::Arrival.label(), &inputs.arrival),
        advisories,
    }
}

// ============================================================================
// Session
// ============================================================================

/// One worksheet session: inputs plus the results derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    inputs: WorksheetInputs,
    result: WorksheetResult,
}

impl Worksheet {
    /// Create an empty worksheet.
    pub fn new() -> Self {
        Worksheet::from_inputs(WorksheetInputs::default())
    }

    /// Start from existing inputs (e.g. a JSON file). Sync rules are
    /// re-applied so the derived sibling fields agree with their sources.
    pub fn from_inputs(mut inputs: WorksheetInputs) -> Self {
        inputs.basic.sync();
        inputs.fuel_burn.sync();
        inputs.departure.icao = inputs.departure.icao.to_uppercase();
        inputs.arrival.icao = inputs.arrival.icao.to_uppercase();
        let result = compute_all(&inputs);
        Worksheet { inputs, result }
    }

    /// Start from a JSON document of [`WorksheetInputs`].
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let inputs: WorksheetInputs = serde_json::from_str(json)?;
        Ok(Worksheet::from_inputs(inputs))
    }

    pub fn inputs(&self) -> &WorksheetInputs {
        &self.inputs
    }

    /// Results for the current inputs; always up to date with the last edit.
    pub fn result(&self) -> &WorksheetResult {
        &self.result
    }

    /// Type `text` into `field`, apply its sync rule, and recompute.
    pub fn set(&mut self, field: Field, text: &str) {
        debug!(field = %field, text, "edit");
        self.inputs.apply(field, text);
        self.result = compute_all(&self.inputs);
    }

    /// Like [`Worksheet::set`], resolving the field from its dotted name.
    pub fn set_named(&mut self, name: &str, text: &str) -> CalcResult<()> {
        let field: Field = name.parse()?;
        self.set(field, text);
        Ok(())
    }

    /// Reset every field to blank and every marker to its default.
    pub fn clear(&mut self) {
        info!("clearing worksheet");
        self.inputs.basic.clear();
        self.inputs.loading = Loading::default();
        self.inputs.fuel_burn.clear();
        self.inputs.departure.clear();
        self.inputs.arrival.clear();
        self.result = compute_all(&self.inputs);
    }
}

impl Default for Worksheet {
    fn default() -> Self {
        Worksheet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::fuel_burn::FuelBurnSource;
    use crate::calculations::weight_balance::LastEdited;

    #[test]
    fn test_field_names_roundtrip() {
        let all = Field::all();
        assert_eq!(all.len(), 24);
        for field in all {
            let parsed: Field = field.name().parse().unwrap();
            assert_eq!(parsed, field);
        }
    }

    #[test]
    fn test_field_name_is_case_insensitive() {
        let field: Field = " Depart.Wind_Dir ".parse().unwrap();
        assert_eq!(field, Field::Airport(Airport::Departure, AirportField::WindDirection));
    }

    #[test]
    fn test_unknown_field() {
        let err = "nose.weight".parse::<Field>().unwrap_err();
        assert_eq!(err, CalcError::unknown_field("nose.weight"));

        let mut sheet = Worksheet::new();
        assert!(sheet.set_named("nose.weight", "10").is_err());
        assert!(sheet.inputs().is_empty());
    }

    #[test]
    fn test_edit_recomputes_immediately() {
        let mut sheet = Worksheet::new();
        sheet.set(Field::FrontSeats, "170");
        assert_eq!(sheet.result().weight_balance.ramp.weight_lb, 170.0);
        sheet.set(Field::FrontSeats, "");
        assert_eq!(sheet.result().weight_balance.ramp.weight_lb, 0.0);
        assert_eq!(sheet.result().weight_balance.ramp.arm_in, None);
    }

    #[test]
    fn test_blank_displays_as_typed() {
        let mut sheet = Worksheet::new();
        sheet.set(Field::Baggage, "abc");
        assert_eq!(sheet.inputs().text(Field::Baggage), "abc");
        assert_eq!(sheet.result().weight_balance.baggage.weight_lb, 0.0);
    }

    #[test]
    fn test_icao_uppercased() {
        let mut sheet = Worksheet::new();
        sheet.set_named("arrive.icao", "ksna").unwrap();
        assert_eq!(sheet.inputs().text(Field::Airport(Airport::Arrival, AirportField::Icao)), "KSNA");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut sheet = Worksheet::new();
        for field in Field::all() {
            sheet.set(field, "12");
        }
        sheet.set(Field::FuelBurnGallons, "22");
        assert_eq!(sheet.inputs().fuel_burn.source, FuelBurnSource::Gallons);

        sheet.clear();
        assert!(sheet.inputs().is_empty());
        assert_eq!(sheet.inputs().fuel_burn.source, FuelBurnSource::Hours);
        assert_eq!(sheet.inputs().basic.last_edited, LastEdited::None);
        assert_eq!(sheet, Worksheet::new());
    }

    #[test]
    fn test_from_json_applies_sync() {
        let json = r#"{
            "basic": { "weight": "1500", "arm": "85", "last_edited": "Arm" },
            "fuel_burn": { "hours": "2" },
            "departure": { "icao": "klgb", "elevation_ft": "60", "altimeter_inhg": "29.92" }
        }"#;
        let sheet = Worksheet::from_json(json).unwrap();
        assert_eq!(sheet.inputs().basic.moment.text(), "127500.00");
        assert_eq!(sheet.inputs().fuel_burn.gallons.text(), "22.00");
        assert_eq!(sheet.inputs().departure.icao, "KLGB");
        assert_eq!(sheet.result().weight_balance.landing.weight_lb, 1500.0 - 132.0);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Worksheet::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_result_serializes() {
        let mut sheet = Worksheet::new();
        sheet.set(Field::BasicWeight, "1500");
        let json = serde_json::to_string(sheet.result()).unwrap();
        assert!(json.contains("\"weight_balance\""));
        assert!(json.contains("\"density_altitude_formula\""));
    }
}
