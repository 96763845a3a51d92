//! # Weight & Balance
//!
//! Loading lines for the PA-28 form and the ramp → takeoff → landing totals.
//!
//! ## Basic empty weight
//!
//! The basic empty weight row is the only one where weight, arm, and moment
//! are all editable. Any two determine the third; which one gets recomputed
//! depends on the field edited last:
//!
//! | edited   | requires             | recomputes                       |
//! |----------|----------------------|----------------------------------|
//! | `weight` | weight ≠ 0           | moment from arm, else arm from moment |
//! | `arm`    | weight ≠ 0, arm ≠ 0  | moment = weight × arm            |
//! | `moment` | weight ≠ 0, moment ≠ 0 | arm = moment / weight          |
//!
//! Recomputed fields are written back as 2-decimal text. Nothing is cleared
//! when the weight is missing.
//!
//! ## Example
//!
//! ```rust
//! use wb_core::calculations::weight_balance::{BasicEmptyWeight, TriangleField};
//!
//! let mut basic = BasicEmptyWeight::default();
//! basic.edit(TriangleField::Weight, "1500");
//! basic.edit(TriangleField::Arm, "85");
//! assert_eq!(basic.moment.text(), "127500.00");
//!
//! basic.edit(TriangleField::Moment, "130000");
//! assert_eq!(basic.arm.text(), "86.67");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aircraft::{self, Station, FUEL_LB_PER_GAL};
use crate::calculations::advisories::ArmRow;
use crate::calculations::fuel_burn::FuelBurnPair;
use crate::equations::balance::{center_of_gravity, fuel_weight, moment};
use crate::input::{derived_entry, Entry};
use crate::units::{Gallons, InLb, Inches, Pounds};

// ============================================================================
// Basic Empty Weight
// ============================================================================

/// One corner of the weight/arm/moment triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangleField {
    Weight,
    Arm,
    Moment,
}

/// Which triangle field the user typed into most recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LastEdited {
    #[default]
    None,
    Weight,
    Arm,
    Moment,
}

impl From<TriangleField> for LastEdited {
    fn from(field: TriangleField) -> Self {
        match field {
            TriangleField::Weight => LastEdited::Weight,
            TriangleField::Arm => LastEdited::Arm,
            TriangleField::Moment => LastEdited::Moment,
        }
    }
}

/// Basic empty weight row with free entry in all three columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicEmptyWeight {
    #[serde(default)]
    pub weight: Entry,
    #[serde(default)]
    pub arm: Entry,
    #[serde(default)]
    pub moment: Entry,
    #[serde(default)]
    pub last_edited: LastEdited,
}

impl BasicEmptyWeight {
    /// Replace one field with typed text, then bring its siblings in line.
    pub fn edit(&mut self, field: TriangleField, text: impl Into<Entry>) {
        let text = text.into();
        match field {
            TriangleField::Weight => self.weight = text,
            TriangleField::Arm => self.arm = text,
            TriangleField::Moment => self.moment = text,
        }
        self.last_edited = field.into();
        self.sync();
    }

    /// Apply the last-edited rule once.
    pub fn sync(&mut self) {
        let Some(weight) = self.weight.nonzero() else {
            return;
        };

        match self.last_edited {
            LastEdited::None => {}
            LastEdited::Moment => {
                if let Some(m) = self.moment.nonzero() {
                    self.arm = derived_entry(m / weight);
                    debug!(arm = self.arm.text(), "basic arm from moment");
                }
            }
            LastEdited::Arm => {
                if let Some(a) = self.arm.nonzero() {
                    self.moment = derived_entry(weight * a);
                    debug!(moment = self.moment.text(), "basic moment from arm");
                }
            }
            LastEdited::Weight => {
                if !self.arm.is_blank() {
                    self.moment = derived_entry(weight * self.arm.value());
                    debug!(moment = self.moment.text(), "basic moment from new weight");
                } else if !self.moment.is_blank() {
                    self.arm = derived_entry(self.moment.value() / weight);
                    debug!(arm = self.arm.text(), "basic arm from new weight");
                }
            }
        }
    }

    /// Moment carried into the totals: weight × arm when both are present,
    /// the typed moment when only weight is, otherwise zero.
    pub fn effective_moment(&self) -> InLb {
        let weight = self.weight.value();
        let arm = self.arm.value();
        if weight != 0.0 && arm != 0.0 {
            moment(Pounds(weight), Inches(arm))
        } else if weight != 0.0 {
            InLb(self.moment.value())
        } else {
            InLb(0.0)
        }
    }

    pub fn line(&self) -> ItemLine {
        ItemLine {
            weight_lb: self.weight.value(),
            arm_in: self.arm.nonzero(),
            moment_lbin: self.effective_moment().0,
        }
    }

    pub fn clear(&mut self) {
        *self = BasicEmptyWeight::default();
    }
}

// ============================================================================
// Fixed-Arm Loading
// ============================================================================

/// Typed loading for the fixed-arm stations and the taxi fuel allowance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Loading {
    /// Pilot & front passenger (lb)
    pub front_seats_lb: Entry,
    /// Rear passengers (lb)
    pub rear_seats_lb: Entry,
    /// Fuel on board (gal)
    pub fuel_gal: Entry,
    /// Baggage (lb)
    pub baggage_lb: Entry,
    /// Taxi & run-up allowance (gal)
    pub fuel_allowance_gal: Entry,
}

/// Weight, arm, and moment of one row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemLine {
    pub weight_lb: f64,
    /// `None` when the arm is blank/zero or undefined
    pub arm_in: Option<f64>,
    pub moment_lbin: f64,
}

impl ItemLine {
    pub fn at_station(station: Station, weight: Pounds) -> Self {
        ItemLine {
            weight_lb: weight.0,
            arm_in: Some(station.arm.0),
            moment_lbin: moment(weight, station.arm).0,
        }
    }

    /// Combine a weight and moment into a total, with the CG as its arm.
    pub fn total(weight: Pounds, moment: InLb) -> Self {
        ItemLine {
            weight_lb: weight.0,
            arm_in: center_of_gravity(moment, weight).map(|a| a.0),
            moment_lbin: moment.0,
        }
    }

    /// Whether the arm lies outside the CG envelope. The envelope applies only
    /// to the rows in [`WeightBalanceResult::envelope_rows`]; station arms are
    /// fixed and sit outside it by construction.
    pub fn arm_out_of_range(&self) -> bool {
        self.arm_in.is_some_and(aircraft::is_arm_out_of_range)
    }

    fn weight(&self) -> Pounds {
        Pounds(self.weight_lb)
    }

    fn moment(&self) -> InLb {
        InLb(self.moment_lbin)
    }
}

/// A fuel row: the gallons as entered plus the derived weight line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelLine {
    pub gallons: f64,
    #[serde(flatten)]
    pub line: ItemLine,
}

impl FuelLine {
    pub fn new(gallons: Gallons) -> Self {
        FuelLine {
            gallons: gallons.0,
            line: ItemLine::at_station(aircraft::FUEL, fuel_weight(gallons, FUEL_LB_PER_GAL)),
        }
    }
}

// ============================================================================
// Totals
// ============================================================================

/// Every row of the weight & balance table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightBalanceResult {
    pub basic: ItemLine,
    pub front_seats: ItemLine,
    pub rear_seats: ItemLine,
    pub fuel: FuelLine,
    pub baggage: ItemLine,
    pub ramp: ItemLine,
    pub fuel_allowance: FuelLine,
    pub takeoff: ItemLine,
    pub fuel_burn: FuelLine,
    pub landing: ItemLine,
}

impl WeightBalanceResult {
    /// Rows checked against the CG envelope: basic empty and the three totals.
    pub fn envelope_rows(&self) -> [(ArmRow, &ItemLine); 4] {
        [
            (ArmRow::BasicEmpty, &self.basic),
            (ArmRow::Ramp, &self.ramp),
            (ArmRow::Takeoff, &self.takeoff),
            (ArmRow::Landing, &self.landing),
        ]
    }
}

/// Build every row and the three totals, in ramp → takeoff → landing order.
pub fn calculate(basic: &BasicEmptyWeight, loading: &Loading, burn: &FuelBurnPair) -> WeightBalanceResult {
    let basic_line = basic.line();
    let front = ItemLine::at_station(aircraft::FRONT_SEATS, Pounds(loading.front_seats_lb.value()));
    let rear = ItemLine::at_station(aircraft::REAR_SEATS, Pounds(loading.rear_seats_lb.value()));
    let fuel = FuelLine::new(Gallons(loading.fuel_gal.value()));
    let baggage = ItemLine::at_station(aircraft::BAGGAGE, Pounds(loading.baggage_lb.value()));

    let parts = [basic_line, front, rear, fuel.line, baggage];
    let ramp_weight = parts.iter().fold(Pounds(0.0), |acc, p| acc + p.weight());
    let ramp_moment = parts.iter().fold(InLb(0.0), |acc, p| acc + p.moment());
    let ramp = ItemLine::total(ramp_weight, ramp_moment);

    let allowance = FuelLine::new(Gallons(loading.fuel_allowance_gal.value()));
    let takeoff = ItemLine::total(
        ramp.weight() - allowance.line.weight(),
        ramp.moment() - allowance.line.moment(),
    );

    let fuel_burn = FuelLine::new(burn.gallons());
    let landing = ItemLine::total(
        takeoff.weight() - fuel_burn.line.weight(),
        takeoff.moment() - fuel_burn.line.moment(),
    );

    WeightBalanceResult {
        basic: basic_line,
        front_seats: front,
        rear_seats: rear,
        fuel,
        baggage,
        ramp,
        fuel_allowance: allowance,
        takeoff,
        fuel_burn,
        landing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn basic(weight: &str, arm: &str) -> BasicEmptyWeight {
        let mut b = BasicEmptyWeight::default();
        b.edit(TriangleField::Weight, weight);
        b.edit(TriangleField::Arm, arm);
        b
    }

    #[test]
    fn test_arm_edit_sets_moment() {
        let b = basic("1500", "85");
        assert_eq!(b.moment.text(), "127500.00");
        assert_eq!(b.last_edited, LastEdited::Arm);
    }

    #[test]
    fn test_moment_edit_sets_arm() {
        let mut b = BasicEmptyWeight::default();
        b.edit(TriangleField::Weight, "1600");
        b.edit(TriangleField::Moment, "140000");
        assert_eq!(b.arm.text(), "87.50");
    }

    #[test]
    fn test_weight_edit_prefers_arm() {
        let mut b = basic("1500", "85");
        b.edit(TriangleField::Weight, "1600");
        assert_eq!(b.moment.text(), "136000.00");
        assert_eq!(b.arm.text(), "85");
    }

    #[test]
    fn test_weight_edit_falls_back_to_moment() {
        let mut b = BasicEmptyWeight::default();
        b.edit(TriangleField::Moment, "136000");
        b.edit(TriangleField::Weight, "1600");
        assert_eq!(b.arm.text(), "85.00");
    }

    #[test]
    fn test_no_weight_leaves_siblings_alone() {
        let mut b = BasicEmptyWeight::default();
        b.edit(TriangleField::Arm, "85");
        b.edit(TriangleField::Moment, "99999");
        assert_eq!(b.arm.text(), "85");
        assert_eq!(b.moment.text(), "99999");

        let mut b = basic("1500", "85");
        b.edit(TriangleField::Weight, "");
        assert_eq!(b.arm.text(), "85");
        assert_eq!(b.moment.text(), "127500.00");
    }

    #[test]
    fn test_zero_moment_edit_is_ignored() {
        let mut b = basic("1500", "85");
        b.edit(TriangleField::Moment, "0");
        assert_eq!(b.arm.text(), "85");
    }

    #[test]
    fn test_effective_moment() {
        let b = basic("1500", "85");
        assert_relative_eq!(b.effective_moment().0, 127_500.0);

        let mut only_moment = BasicEmptyWeight::default();
        only_moment.moment = Entry::from("120000");
        assert_eq!(only_moment.effective_moment().0, 0.0);
        only_moment.weight = Entry::from("1400");
        assert_eq!(only_moment.effective_moment().0, 120_000.0);
    }

    #[test]
    fn test_fixed_stations() {
        let front = ItemLine::at_station(aircraft::FRONT_SEATS, Pounds(340.0));
        assert_relative_eq!(front.moment_lbin, 27_370.0);

        let fuel = FuelLine::new(Gallons(48.0));
        assert_eq!(fuel.line.weight_lb, 288.0);
        assert_relative_eq!(fuel.line.moment_lbin, 27_360.0);
    }

    #[test]
    fn test_totals_sequence() {
        let b = basic("1500", "85");
        let loading = Loading {
            front_seats_lb: "340".into(),
            rear_seats_lb: "150".into(),
            fuel_gal: "48".into(),
            baggage_lb: "50".into(),
            fuel_allowance_gal: "1".into(),
        };
        let mut burn = FuelBurnPair::default();
        burn.edit_hours("2");

        let r = calculate(&b, &loading, &burn);
        assert_relative_eq!(r.ramp.weight_lb, 2328.0);
        assert_relative_eq!(r.takeoff.weight_lb, r.ramp.weight_lb - 6.0);
        assert_relative_eq!(r.landing.weight_lb, r.takeoff.weight_lb - 132.0);

        let ramp_moment = 127_500.0 + 27_370.0 + 17_715.0 + 27_360.0 + 7_140.0;
        assert_relative_eq!(r.ramp.moment_lbin, ramp_moment, max_relative = 1e-12);
        assert_relative_eq!(r.ramp.arm_in.unwrap(), ramp_moment / 2328.0, max_relative = 1e-12);
        assert_relative_eq!(r.takeoff.moment_lbin, ramp_moment - 570.0, max_relative = 1e-12);
        assert!(!r.takeoff.arm_out_of_range());
    }

    #[test]
    fn test_empty_sheet_has_no_arms() {
        let r = calculate(&BasicEmptyWeight::default(), &Loading::default(), &FuelBurnPair::default());
        assert_eq!(r.ramp.weight_lb, 0.0);
        assert_eq!(r.ramp.arm_in, None);
        assert_eq!(r.takeoff.arm_in, None);
        assert_eq!(r.landing.arm_in, None);
        assert!(!r.ramp.arm_out_of_range());
    }

    #[test]
    fn test_zero_weight_with_moment_is_undefined_arm() {
        let line = ItemLine::total(Pounds(0.0), InLb(500.0));
        assert_eq!(line.arm_in, None);
    }

    #[test]
    fn test_envelope_rows_exclude_stations() {
        let r = calculate(&BasicEmptyWeight::default(), &Loading::default(), &FuelBurnPair::default());
        assert!(r.front_seats.arm_out_of_range());
        assert!(r.baggage.arm_out_of_range());
        assert!(r.envelope_rows().iter().all(|(_, line)| !line.arm_out_of_range()));

        let rows: Vec<ArmRow> = r.envelope_rows().iter().map(|(row, _)| *row).collect();
        assert_eq!(rows, vec![ArmRow::BasicEmpty, ArmRow::Ramp, ArmRow::Takeoff, ArmRow::Landing]);
    }
}
