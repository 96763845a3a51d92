//! # wb_core - PA-28 Weight & Balance Engine
//!
//! `wb_core` computes the Piper Archer weight & balance form and the
//! departure/arrival altitude and wind figures from text typed into a
//! worksheet. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Never fails on numbers**: blank or garbage input counts as zero,
//!   undefined arms are `None`, missing formula inputs become prompts
//! - **Pure pipeline**: every edit re-runs [`worksheet::compute_all`]
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured errors at the outer surfaces only
//!
//! ## Quick Start
//!
//! ```rust
//! use wb_core::worksheet::Worksheet;
//! use wb_core::render::render_sheet;
//!
//! let mut sheet = Worksheet::new();
//! sheet.set_named("basic.weight", "1500").unwrap();
//! sheet.set_named("basic.arm", "85").unwrap();
//! sheet.set_named("front.weight", "340").unwrap();
//!
//! let takeoff = sheet.result().weight_balance.takeoff;
//! assert_eq!(takeoff.weight_lb, 1840.0);
//!
//! let text = render_sheet(sheet.inputs(), sheet.result());
//! assert!(text.contains("Takeoff Weight"));
//! ```
//!
//! ## Modules
//!
//! - [`worksheet`] - Inputs, field names, edits, and the compute pipeline
//! - [`calculations`] - Weight & balance, fuel burn, performance, advisories
//! - [`equations`] - Pure formulas and the equation registry
//! - [`aircraft`] - PA-28 stations and limits
//! - [`input`] - Typed-text entries
//! - [`units`] - Type-safe unit wrappers
//! - [`render`] - Plain-text sheet
//! - [`errors`] - Structured error types
//! - [`file_io`] - Export snapshots and JSON input files

pub mod aircraft;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod input;
pub mod render;
pub mod units;
pub mod worksheet;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::{export_sheet, load_inputs};
pub use render::render_sheet;
pub use worksheet::{compute_all, Field, Worksheet, WorksheetInputs, WorksheetResult};
