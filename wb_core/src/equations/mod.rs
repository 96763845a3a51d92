//! # Worksheet Equations
//!
//! Every formula the worksheet applies, kept in one place so each can be
//! checked against its source on its own:
//!
//! - [`balance`] - moments, CG, fuel weight and burn conversions
//! - [`atmosphere`] - pressure altitude, ISA temperature, density altitude
//! - [`wind`] - runway heading and headwind/crosswind components
//! - [`registry`] - equation metadata for the printed reference
//! - [`explain`] - substituted-value formula strings shown next to results
//!
//! ## Conventions
//!
//! - **Arms**: inches aft of datum, positive aft
//! - **Headwind**: positive into the nose, negative is a tailwind
//! - **Crosswind**: magnitude only, side reported separately

pub mod atmosphere;
pub mod balance;
pub mod explain;
pub mod registry;
pub mod wind;

pub use atmosphere::{density_altitude, isa_temperature, pressure_altitude};
pub use balance::{burn_gallons, burn_hours, center_of_gravity, fuel_weight, moment};
pub use wind::{runway_heading, wind_components, CrosswindSide, WindComponents};

pub use registry::{
    Equation,
    EquationCategory,
    EquationMetadata,
    Reference,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
