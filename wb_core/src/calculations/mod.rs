//! # Worksheet Calculations
//!
//! Each part of the worksheet follows the same pattern:
//!
//! - an input struct holding the typed text (JSON-serializable)
//! - a result struct holding the derived numbers (JSON-serializable)
//! - `calculate(...)`, a pure function from one to the other
//!
//! Two inputs also carry sync rules that rewrite a sibling field on edit:
//! the basic empty weight triangle and the fuel burn pair.
//!
//! ## Parts
//!
//! - [`weight_balance`] - loading rows and ramp/takeoff/landing totals
//! - [`fuel_burn`] - flight time / gallons pair
//! - [`performance`] - pressure and density altitude, wind components
//! - [`advisories`] - non-blocking limit notes

pub mod advisories;
pub mod fuel_burn;
pub mod performance;
pub mod weight_balance;

pub use advisories::{Advisory, ArmRow};
pub use fuel_burn::{FuelBurnPair, FuelBurnSource};
pub use performance::{AirportConditions, PerformanceResult};
pub use weight_balance::{BasicEmptyWeight, FuelLine, ItemLine, LastEdited, Loading, TriangleField, WeightBalanceResult};
