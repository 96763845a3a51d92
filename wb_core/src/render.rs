//! # Text Sheet
//!
//! Plain-text rendering of a computed worksheet, used by the CLI and by the
//! export snapshot. Precision is fixed per quantity:
//!
//! | quantity                         | decimals |
//! |----------------------------------|----------|
//! | weights, altitudes               | 0        |
//! | temperatures, wind components    | 1        |
//! | arms, moments, fuel burn duals   | 2        |
//!
//! Typed inputs print as entered, with `—` for blank. Undefined arms print
//! as `—`. The basic empty arm and the three totals carry a `!` when they
//! fall outside the CG envelope.

use std::fmt;

use crate::aircraft::{self, ARM_MAX, ARM_MIN};
use crate::calculations::weight_balance::ItemLine;
use crate::equations::explain::MISSING;
use crate::input::Entry;
use crate::worksheet::{Airport, WorksheetInputs, WorksheetResult};

const AIRPORTS: [Airport; 2] = [Airport::Departure, Airport::Arrival];

/// Label column plus the three number columns
const TABLE_WIDTH: usize = 40 + 10 + 12 + 16;

/// Fixed-precision number with negative zero folded to zero.
fn fixed(value: f64, digits: usize) -> String {
    let s = format!("{:.*}", digits, value);
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

/// Arm column of a row. Only the basic empty row and the totals are checked
/// against the envelope; station arms are fixed.
fn arm_cell(line: &ItemLine, checked: bool) -> String {
    match line.arm_in {
        Some(arm) if checked && line.arm_out_of_range() => format!("{} !", fixed(arm, 2)),
        Some(arm) => fixed(arm, 2),
        None => MISSING.to_string(),
    }
}

fn typed(text: &str) -> &str {
    if text.trim().is_empty() {
        MISSING
    } else {
        text
    }
}

struct Sheet<'a> {
    inputs: &'a WorksheetInputs,
    result: &'a WorksheetResult,
}

impl Sheet<'_> {
    fn row(f: &mut fmt::Formatter<'_>, label: &str, weight: &str, arm: &str, moment: &str) -> fmt::Result {
        writeln!(f, "{:<40}{:>10}{:>12}{:>16}", label, weight, arm, moment)
    }

    /// Row whose weight was typed in; arm and moment are derived.
    fn station_row(f: &mut fmt::Formatter<'_>, label: &str, weight: &Entry, line: &ItemLine) -> fmt::Result {
        Self::row(f, label, typed(weight.text()), &arm_cell(line, false), &fixed(line.moment_lbin, 2))
    }

    /// Row derived from gallons; the gallons appear as typed in the label.
    fn fuel_row(f: &mut fmt::Formatter<'_>, label: &str, line: &ItemLine) -> fmt::Result {
        Self::row(f, label, &fixed(line.weight_lb, 0), &arm_cell(line, false), &fixed(line.moment_lbin, 2))
    }

    fn total_row(f: &mut fmt::Formatter<'_>, label: &str, line: &ItemLine) -> fmt::Result {
        Self::row(f, label, &fixed(line.weight_lb, 0), &arm_cell(line, true), &fixed(line.moment_lbin, 2))
    }

    fn weight_balance(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wb = &self.result.weight_balance;
        let basic = &self.inputs.basic;
        let loading = &self.inputs.loading;
        let burn = &self.inputs.fuel_burn;

        let basic_arm = if wb.basic.arm_out_of_range() {
            format!("{} !", basic.arm.text().trim())
        } else {
            typed(basic.arm.text()).to_string()
        };

        writeln!(f, "WEIGHT & BALANCE")?;
        Self::row(f, "Item", "Weight lb", "Arm in", "Moment lb-in")?;
        writeln!(f, "{}", "-".repeat(TABLE_WIDTH))?;
        Self::row(
            f,
            "Basic Empty Weight",
            typed(basic.weight.text()),
            &basic_arm,
            typed(basic.moment.text()),
        )?;
        Self::station_row(f, aircraft::FRONT_SEATS.name, &loading.front_seats_lb, &wb.front_seats)?;
        Self::station_row(f, aircraft::REAR_SEATS.name, &loading.rear_seats_lb, &wb.rear_seats)?;
        Self::fuel_row(f, &format!("Fuel ({} gal)", typed(loading.fuel_gal.text())), &wb.fuel.line)?;
        Self::station_row(f, aircraft::BAGGAGE.name, &loading.baggage_lb, &wb.baggage)?;
        Self::total_row(f, "Ramp Weight", &wb.ramp)?;
        Self::fuel_row(
            f,
            &format!("Less Fuel Allowance ({} gal)", typed(loading.fuel_allowance_gal.text())),
            &wb.fuel_allowance.line,
        )?;
        Self::total_row(f, "Takeoff Weight", &wb.takeoff)?;
        Self::fuel_row(
            f,
            &format!(
                "Less Fuel Burn ({} hr / {} gal)",
                typed(burn.hours.text()),
                typed(burn.gallons.text())
            ),
            &wb.fuel_burn.line,
        )?;
        Self::total_row(f, "Landing Weight", &wb.landing)?;
        writeln!(f, "CG envelope {}-{} in", fixed(ARM_MIN.0, 0), fixed(ARM_MAX.0, 0))
    }

    fn pair(f: &mut fmt::Formatter<'_>, label: &str, cells: [String; 2]) -> fmt::Result {
        let [depart, arrive] = cells;
        writeln!(f, "{:<24}{:>16}{:>16}", label, depart, arrive)
    }

    fn per_airport(&self, cell: impl Fn(&WorksheetInputs, &WorksheetResult, Airport) -> String) -> [String; 2] {
        AIRPORTS.map(|a| cell(self.inputs, self.result, a))
    }

    fn performance(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ALTITUDE & PERFORMANCE")?;
        Self::pair(f, "", AIRPORTS.map(|a| a.label().to_string()))?;
        writeln!(f, "{}", "-".repeat(56))?;
        Self::pair(f, "ICAO", self.per_airport(|i, _, a| typed(&i.airport(a).icao).to_string()))?;
        Self::pair(
            f,
            "Temperature °C",
            self.per_airport(|i, _, a| typed(i.airport(a).temperature_c.text()).to_string()),
        )?;
        Self::pair(
            f,
            "Altimeter inHg",
            self.per_airport(|i, _, a| typed(i.airport(a).altimeter_inhg.text()).to_string()),
        )?;
        Self::pair(
            f,
            "Elevation ft",
            self.per_airport(|i, _, a| typed(i.airport(a).elevation_ft.text()).to_string()),
        )?;
        Self::pair(f, "Runway", self.per_airport(|i, _, a| typed(i.airport(a).runway.text()).to_string()))?;
        Self::pair(
            f,
            "Wind",
            self.per_airport(|i, _, a| {
                let conditions = i.airport(a);
                format!(
                    "{}° @ {} kt",
                    typed(conditions.wind_direction_deg.text()),
                    typed(conditions.wind_speed_kt.text())
                )
            }),
        )?;
        Self::pair(
            f,
            "Pressure Altitude ft",
            self.per_airport(|_, r, a| fixed(r.performance(a).pressure_altitude_ft, 0)),
        )?;
        Self::pair(
            f,
            "ISA Temperature °C",
            self.per_airport(|_, r, a| fixed(r.performance(a).isa_temperature_c, 1)),
        )?;
        Self::pair(
            f,
            "Density Altitude ft",
            self.per_airport(|_, r, a| fixed(r.performance(a).density_altitude_ft, 0)),
        )?;
        Self::pair(f, "Headwind kt", self.per_airport(|_, r, a| fixed(r.performance(a).wind.headwind_kt, 1)))?;
        Self::pair(
            f,
            "Crosswind kt",
            self.per_airport(|_, r, a| {
                let wind = r.performance(a).wind;
                format!("{} {}", fixed(wind.crosswind_kt, 1), wind.side.display_name())
            }),
        )?;

        writeln!(f)?;
        for airport in AIRPORTS {
            let perf = self.result.performance(airport);
            writeln!(f, "PA  {}", perf.pressure_altitude_formula)?;
            writeln!(f, "ISA {}", perf.isa_temperature_formula)?;
            writeln!(f, "DA  {}", perf.density_altitude_formula)?;
        }
        Ok(())
    }

    fn advisories(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.result.advisories.is_empty() {
            return writeln!(f, "ADVISORIES: none");
        }
        writeln!(f, "ADVISORIES")?;
        for advisory in &self.result.advisories {
            writeln!(f, "  ! {}", advisory.message())?;
        }
        Ok(())
    }
}

impl fmt::Display for Sheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PA-28 ARCHER WEIGHT & BALANCE")?;
        writeln!(f)?;
        self.weight_balance(f)?;
        writeln!(f)?;
        self.performance(f)?;
        writeln!(f)?;
        self.advisories(f)
    }
}

/// Render the full worksheet as plain text.
pub fn render_sheet(inputs: &WorksheetInputs, result: &WorksheetResult) -> String {
    Sheet { inputs, result }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet::{AirportField, Field, Worksheet};

    fn loaded() -> Worksheet {
        let mut sheet = Worksheet::new();
        for (name, value) in [
            ("basic.weight", "1500"),
            ("basic.arm", "85"),
            ("front.weight", "340"),
            ("fuel.gal", "48"),
            ("burn.hr", "2"),
            ("depart.icao", "klgb"),
            ("depart.elevation", "500"),
            ("depart.altimeter", "29.42"),
            ("depart.temp", "25"),
            ("depart.runway", "18"),
            ("depart.wind_dir", "240"),
            ("depart.wind_speed", "12"),
        ] {
            sheet.set_named(name, value).unwrap();
        }
        sheet
    }

    fn render(sheet: &Worksheet) -> String {
        render_sheet(sheet.inputs(), sheet.result())
    }

    #[test]
    fn test_fixed_folds_negative_zero() {
        assert_eq!(fixed(-0.0, 0), "0");
        assert_eq!(fixed(-0.001, 1), "0.0");
        assert_eq!(fixed(-6.04, 1), "-6.0");
        assert_eq!(fixed(127_500.0, 2), "127500.00");
    }

    #[test]
    fn test_weight_balance_rows() {
        let text = render(&loaded());
        assert!(text.contains("Basic Empty Weight"));
        assert!(text.contains("127500.00"));
        assert!(text.contains("Fuel (48 gal)"));
        assert!(text.contains("Less Fuel Burn (2 hr / 22.00 gal)"));
    }

    #[test]
    fn test_performance_rows() {
        let text = render(&loaded());
        assert!(text.contains("KLGB"));
        assert!(text.contains("Depart: 500 + (29.92 - 29.42) * 1000 = 1000 ft"));
        assert!(text.contains("Depart: 1000 + (25.0 - 13.0) * 120 = 2440 ft"));
        assert!(text.contains("10.4 Right"));
        assert!(text.contains("Arrive: Enter elevation + altimeter"));
    }

    #[test]
    fn test_empty_sheet_uses_sentinels() {
        let text = render(&Worksheet::new());
        assert!(text.contains("ADVISORIES: none"));
        assert!(!text.contains("NaN"));
        assert!(!text.contains("inf"));
        let ramp = text.lines().find(|l| l.starts_with("Ramp Weight")).unwrap();
        assert!(ramp.contains(MISSING));
    }

    #[test]
    fn test_out_of_range_arm_marked() {
        let mut sheet = Worksheet::new();
        sheet.set(Field::BasicWeight, "1500");
        sheet.set(Field::BasicArm, "95");
        let text = render(&sheet);
        let basic = text.lines().find(|l| l.starts_with("Basic Empty Weight")).unwrap();
        assert!(basic.contains("95 !"));
        let ramp = text.lines().find(|l| l.starts_with("Ramp Weight")).unwrap();
        assert!(ramp.contains("95.00 !"));
        assert!(text.contains("Basic empty CG 95.00 in is outside 82-93 in"));
    }

    #[test]
    fn test_blank_airport_inputs_show_sentinel() {
        let mut sheet = Worksheet::new();
        sheet.set(Field::Airport(Airport::Arrival, AirportField::Runway), "27L");
        let text = render(&sheet);
        let runway = text.lines().find(|l| l.starts_with("Runway")).unwrap();
        assert!(runway.contains(MISSING));
        assert!(runway.contains("27L"));
    }

    #[test]
    fn test_station_rows_never_flagged() {
        assert!(!render(&Worksheet::new()).contains('!'));
        assert!(!render(&loaded()).contains('!'));
    }

    fn front_row(text: &str) -> String {
        let mut sheet = Worksheet::new();
        sheet.set(Field::FrontSeats, text);
        let rendered = render(&sheet);
        rendered
            .lines()
            .find(|l| l.starts_with(aircraft::FRONT_SEATS.name))
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_typed_inputs_shown_as_entered() {
        let blank = front_row("");
        let zero = front_row("0");
        let garbage = front_row("abc");
        assert_ne!(blank, zero);
        assert_ne!(zero, garbage);
        assert!(blank.contains(MISSING));
        assert!(zero.contains(" 0 "));
        assert!(garbage.contains("abc"));
    }

    #[test]
    fn test_blank_fuel_labels_use_sentinel() {
        let text = render(&Worksheet::new());
        assert!(text.contains("Fuel (— gal)"));
        assert!(text.contains("Less Fuel Allowance (— gal)"));
        assert!(text.contains("Less Fuel Burn (— hr / — gal)"));
    }

    #[test]
    fn test_table_columns_aligned() {
        let mut sheet = loaded();
        sheet.set(Field::FuelBurnGallons, "137.5");
        let text = render(&sheet);
        let table: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("Item"))
            .take_while(|l| !l.starts_with("CG envelope"))
            .collect();
        assert_eq!(table.len(), 12);
        for line in table {
            assert_eq!(line.chars().count(), TABLE_WIDTH, "misaligned: {}", line);
        }
    }
}
