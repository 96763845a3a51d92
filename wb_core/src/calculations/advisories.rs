//! # Advisories
//!
//! Limit notes shown beside the results. They never change a number and
//! never stop a calculation; an overweight or out-of-envelope sheet still
//! computes in full.

use serde::{Deserialize, Serialize};

use crate::aircraft::{ARM_MAX, ARM_MIN, MAX_BAGGAGE, MAX_LANDING_WEIGHT, MAX_TAKEOFF_WEIGHT, MAX_USABLE_FUEL};
use crate::calculations::weight_balance::{ItemLine, WeightBalanceResult};

/// Which row an arm advisory refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmRow {
    BasicEmpty,
    Ramp,
    Takeoff,
    Landing,
}

impl ArmRow {
    pub fn display_name(&self) -> &'static str {
        match self {
            ArmRow::BasicEmpty => "Basic empty",
            ArmRow::Ramp => "Ramp",
            ArmRow::Takeoff => "Takeoff",
            ArmRow::Landing => "Landing",
        }
    }
}

/// A limit the current loading exceeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Advisory {
    ArmOutOfRange { row: ArmRow, arm_in: f64 },
    FuelOverCapacity { gallons: f64 },
    BaggageOverLimit { weight_lb: f64 },
    TakeoffOverweight { weight_lb: f64 },
    LandingOverweight { weight_lb: f64 },
}

impl Advisory {
    pub fn message(&self) -> String {
        match self {
            Advisory::ArmOutOfRange { row, arm_in } => format!(
                "{} CG {:.2} in is outside {:.0}-{:.0} in",
                row.display_name(),
                arm_in,
                ARM_MIN.0,
                ARM_MAX.0
            ),
            Advisory::FuelOverCapacity { gallons } => {
                format!("Fuel {:.1} gal exceeds {:.0} gal usable", gallons, MAX_USABLE_FUEL.0)
            }
            Advisory::BaggageOverLimit { weight_lb } => {
                format!("Baggage {:.0} lb exceeds {:.0} lb", weight_lb, MAX_BAGGAGE.0)
            }
            Advisory::TakeoffOverweight { weight_lb } => {
                format!("Takeoff weight {:.0} lb exceeds MTOW {:.0} lb", weight_lb, MAX_TAKEOFF_WEIGHT.0)
            }
            Advisory::LandingOverweight { weight_lb } => {
                format!("Landing weight {:.0} lb exceeds MLW {:.0} lb", weight_lb, MAX_LANDING_WEIGHT.0)
            }
        }
    }
}

fn arm_advisory(row: ArmRow, line: &ItemLine) -> Option<Advisory> {
    if line.arm_out_of_range() {
        line.arm_in.map(|arm_in| Advisory::ArmOutOfRange { row, arm_in })
    } else {
        None
    }
}

/// Collect every advisory for a computed weight & balance table.
pub fn collect(wb: &WeightBalanceResult) -> Vec<Advisory> {
    let mut advisories: Vec<Advisory> = wb
        .envelope_rows()
        .into_iter()
        .filter_map(|(row, line)| arm_advisory(row, line))
        .collect();

    if wb.fuel.gallons > MAX_USABLE_FUEL.0 {
        advisories.push(Advisory::FuelOverCapacity { gallons: wb.fuel.gallons });
    }
    if wb.baggage.weight_lb > MAX_BAGGAGE.0 {
        advisories.push(Advisory::BaggageOverLimit { weight_lb: wb.baggage.weight_lb });
    }
    if wb.takeoff.weight_lb > MAX_TAKEOFF_WEIGHT.0 {
        advisories.push(Advisory::TakeoffOverweight { weight_lb: wb.takeoff.weight_lb });
    }
    if wb.landing.weight_lb > MAX_LANDING_WEIGHT.0 {
        advisories.push(Advisory::LandingOverweight { weight_lb: wb.landing.weight_lb });
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::weight_balance::FuelLine;
    use crate::units::Gallons;

    #[test]
    fn test_clean_sheet_has_no_advisories() {
        assert!(collect(&WeightBalanceResult::default()).is_empty());
    }

    #[test]
    fn test_arm_advisory() {
        let wb = WeightBalanceResult {
            ramp: ItemLine { weight_lb: 2000.0, arm_in: Some(94.0), moment_lbin: 188_000.0 },
            ..Default::default()
        };
        let advisories = collect(&wb);
        assert_eq!(advisories, vec![Advisory::ArmOutOfRange { row: ArmRow::Ramp, arm_in: 94.0 }]);
        assert_eq!(advisories[0].message(), "Ramp CG 94.00 in is outside 82-93 in");
    }

    #[test]
    fn test_limit_advisories() {
        let wb = WeightBalanceResult {
            fuel: FuelLine::new(Gallons(50.0)),
            baggage: ItemLine { weight_lb: 210.0, arm_in: Some(142.8), moment_lbin: 29_988.0 },
            takeoff: ItemLine { weight_lb: 2600.0, arm_in: Some(90.0), moment_lbin: 234_000.0 },
            landing: ItemLine { weight_lb: 2500.0, arm_in: Some(90.0), moment_lbin: 225_000.0 },
            ..Default::default()
        };
        let advisories = collect(&wb);
        assert_eq!(advisories.len(), 3);
        assert!(advisories.contains(&Advisory::FuelOverCapacity { gallons: 50.0 }));
        assert!(advisories.contains(&Advisory::BaggageOverLimit { weight_lb: 210.0 }));
        assert!(advisories.contains(&Advisory::TakeoffOverweight { weight_lb: 2600.0 }));
    }

    #[test]
    fn test_advisory_json_tag() {
        let json = serde_json::to_string(&Advisory::BaggageOverLimit { weight_lb: 210.0 }).unwrap();
        assert_eq!(json, r#"{"kind":"BaggageOverLimit","weight_lb":210.0}"#);
    }
}
