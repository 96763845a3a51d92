//! # Equation Registry
//!
//! Central registry of every formula the worksheet applies, with enough
//! metadata to print an audit reference.
//!
//! ## Usage
//!
//! ```rust
//! use wb_core::equations::registry::Equation;
//!
//! let meta = Equation::DensityAltitude.metadata();
//! assert!(meta.formula_plain.contains("120"));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source a formula is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Reference {
    /// Pilot's Operating Handbook for the PA-28 Archer
    Poh { section: &'static str },
    /// FAA Pilot's Handbook of Aeronautical Knowledge (FAA-H-8083-25)
    Phak { chapter: u8 },
    /// FAA Weight & Balance Handbook (FAA-H-8083-1)
    WeightBalanceHandbook { chapter: u8 },
    /// Plane trigonometry, no aviation-specific source
    Trigonometry,
}

impl Reference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            Reference::Poh { section } => format!("PA-28 POH Section {}", section),
            Reference::Phak { chapter } => format!("FAA-H-8083-25 Ch. {}", chapter),
            Reference::WeightBalanceHandbook { chapter } => format!("FAA-H-8083-1 Ch. {}", chapter),
            Reference::Trigonometry => "Trigonometry".to_string(),
        }
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Grouping used when printing the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    WeightAndBalance,
    Fuel,
    Altitude,
    Wind,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::WeightAndBalance => "Weight & Balance",
            EquationCategory::Fuel => "Fuel",
            EquationCategory::Altitude => "Altitude",
            EquationCategory::Wind => "Wind Components",
        }
    }

    /// Sort order in the reference (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::WeightAndBalance => 1,
            EquationCategory::Fuel => 2,
            EquationCategory::Altitude => 3,
            EquationCategory::Wind => 4,
        }
    }

    pub fn all() -> [EquationCategory; 4] {
        [
            EquationCategory::WeightAndBalance,
            EquationCategory::Fuel,
            EquationCategory::Altitude,
            EquationCategory::Wind,
        ]
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    pub reference: Reference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every formula used by the worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// M = W × A
    Moment,
    /// CG = ΣM / ΣW
    CenterOfGravity,
    /// W = gal × 6
    FuelWeight,
    /// gal = hr × 11
    FuelBurnGallons,
    /// hr = gal / 11
    FuelBurnHours,
    /// PA = elev + (29.92 − alt) × 1000
    PressureAltitude,
    /// ISA = 15 − 2 × PA/1000
    IsaTemperature,
    /// DA = PA + (OAT − ISA) × 120
    DensityAltitude,
    /// hdg = rwy × 10
    RunwayHeading,
    /// HW = V cos θ
    Headwind,
    /// XW = |V sin θ|
    Crosswind,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::Moment => EquationMetadata {
                name: "Moment",
                description: "Turning effect of a weight about the datum",
                formula_plain: "M = W * A",
                reference: Reference::WeightBalanceHandbook { chapter: 2 },
                variables: vec![
                    Variable::new("M", "Moment", "lb-in"),
                    Variable::new("W", "Weight", "lb"),
                    Variable::new("A", "Arm aft of datum", "in"),
                ],
                assumptions: vec!["Arms measured aft of the PA-28 datum"],
                category: EquationCategory::WeightAndBalance,
                source_module: "equations/balance.rs",
                source_function: "moment",
            },

            Equation::CenterOfGravity => EquationMetadata {
                name: "Center of Gravity",
                description: "Arm of the combined loading; undefined when total weight is zero",
                formula_plain: "CG = sum(M) / sum(W)",
                reference: Reference::WeightBalanceHandbook { chapter: 2 },
                variables: vec![
                    Variable::new("CG", "Center of gravity arm", "in"),
                    Variable::new("sum(M)", "Total moment", "lb-in"),
                    Variable::new("sum(W)", "Total weight", "lb"),
                ],
                assumptions: vec!["Envelope 82.0 to 93.0 in aft of datum"],
                category: EquationCategory::WeightAndBalance,
                source_module: "equations/balance.rs",
                source_function: "center_of_gravity",
            },

            Equation::FuelWeight => EquationMetadata {
                name: "Fuel Weight",
                description: "Weight of a fuel volume",
                formula_plain: "W = gal * 6",
                reference: Reference::Poh { section: "6" },
                variables: vec![
                    Variable::new("W", "Fuel weight", "lb"),
                    Variable::new("gal", "Fuel volume", "gal"),
                ],
                assumptions: vec!["100LL avgas at 6 lb/gal"],
                category: EquationCategory::Fuel,
                source_module: "equations/balance.rs",
                source_function: "fuel_weight",
            },

            Equation::FuelBurnGallons => EquationMetadata {
                name: "Fuel Burned",
                description: "Fuel burned over a planned flight time",
                formula_plain: "gal = hr * 11",
                reference: Reference::Poh { section: "5" },
                variables: vec![
                    Variable::new("gal", "Fuel burned", "gal"),
                    Variable::new("hr", "Flight time", "hr"),
                ],
                assumptions: vec!["Planning burn rate of 11 gal/hr"],
                category: EquationCategory::Fuel,
                source_module: "equations/balance.rs",
                source_function: "burn_gallons",
            },

            Equation::FuelBurnHours => EquationMetadata {
                name: "Flight Time",
                description: "Flight time that burns a given fuel volume",
                formula_plain: "hr = gal / 11",
                reference: Reference::Poh { section: "5" },
                variables: vec![
                    Variable::new("hr", "Flight time", "hr"),
                    Variable::new("gal", "Fuel burned", "gal"),
                ],
                assumptions: vec!["Planning burn rate of 11 gal/hr"],
                category: EquationCategory::Fuel,
                source_module: "equations/balance.rs",
                source_function: "burn_hours",
            },

            Equation::PressureAltitude => EquationMetadata {
                name: "Pressure Altitude",
                description: "Field elevation corrected to the standard pressure surface",
                formula_plain: "PA = elev + (29.92 - alt) * 1000",
                reference: Reference::Phak { chapter: 4 },
                variables: vec![
                    Variable::new("PA", "Pressure altitude", "ft"),
                    Variable::new("elev", "Field elevation", "ft"),
                    Variable::new("alt", "Altimeter setting", "inHg"),
                ],
                assumptions: vec!["1000 ft per inHg", "Reported as 0 when elevation or altimeter is missing"],
                category: EquationCategory::Altitude,
                source_module: "equations/atmosphere.rs",
                source_function: "pressure_altitude",
            },

            Equation::IsaTemperature => EquationMetadata {
                name: "ISA Temperature",
                description: "Standard temperature at a pressure altitude",
                formula_plain: "ISA = 15 + PA * (-2/1000)",
                reference: Reference::Phak { chapter: 4 },
                variables: vec![
                    Variable::new("ISA", "Standard temperature", "°C"),
                    Variable::new("PA", "Pressure altitude", "ft"),
                ],
                assumptions: vec!["Lapse rate 2 °C per 1000 ft"],
                category: EquationCategory::Altitude,
                source_module: "equations/atmosphere.rs",
                source_function: "isa_temperature",
            },

            Equation::DensityAltitude => EquationMetadata {
                name: "Density Altitude",
                description: "Pressure altitude corrected for non-standard temperature",
                formula_plain: "DA = PA + (OAT - ISA) * 120",
                reference: Reference::Phak { chapter: 4 },
                variables: vec![
                    Variable::new("DA", "Density altitude", "ft"),
                    Variable::new("PA", "Pressure altitude", "ft"),
                    Variable::new("OAT", "Outside air temperature", "°C"),
                    Variable::new("ISA", "Standard temperature", "°C"),
                ],
                assumptions: vec!["120 ft per °C deviation from standard"],
                category: EquationCategory::Altitude,
                source_module: "equations/atmosphere.rs",
                source_function: "density_altitude",
            },

            Equation::RunwayHeading => EquationMetadata {
                name: "Runway Heading",
                description: "Magnetic heading from a runway designator",
                formula_plain: "hdg = rwy * 10",
                reference: Reference::Phak { chapter: 14 },
                variables: vec![
                    Variable::new("hdg", "Runway heading", "deg"),
                    Variable::new("rwy", "Runway designator", "tens of deg"),
                ],
                assumptions: vec!["Leading integer of the designator is used (27L -> 27)"],
                category: EquationCategory::Wind,
                source_module: "equations/wind.rs",
                source_function: "runway_heading",
            },

            Equation::Headwind => EquationMetadata {
                name: "Headwind Component",
                description: "Wind component along the runway; negative is a tailwind",
                formula_plain: "HW = V * cos(theta)",
                reference: Reference::Trigonometry,
                variables: vec![
                    Variable::new("HW", "Headwind component", "kt"),
                    Variable::new("V", "Wind speed", "kt"),
                    Variable::new("theta", "Angle between wind and runway", "deg"),
                ],
                assumptions: vec!["theta folded into 0..180"],
                category: EquationCategory::Wind,
                source_module: "equations/wind.rs",
                source_function: "wind_components",
            },

            Equation::Crosswind => EquationMetadata {
                name: "Crosswind Component",
                description: "Wind component across the runway, with the side it comes from",
                formula_plain: "XW = |V * sin(theta)|",
                reference: Reference::Trigonometry,
                variables: vec![
                    Variable::new("XW", "Crosswind component", "kt"),
                    Variable::new("V", "Wind speed", "kt"),
                    Variable::new("theta", "Angle between wind and runway", "deg"),
                ],
                assumptions: vec!["Right when 0 < (wind - rwy) mod 360 < 180, Center at 0 or 180"],
                category: EquationCategory::Wind,
                source_module: "equations/wind.rs",
                source_function: "wind_components",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::Moment,
    Equation::CenterOfGravity,
    Equation::FuelWeight,
    Equation::FuelBurnGallons,
    Equation::FuelBurnHours,
    Equation::PressureAltitude,
    Equation::IsaTemperature,
    Equation::DensityAltitude,
    Equation::RunwayHeading,
    Equation::Headwind,
    Equation::Crosswind,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equation reference as markdown.
///
/// ```rust
/// use wb_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Equations Reference"));
/// assert!(markdown.contains("Density Altitude"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Archer W&B Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula the worksheet applies, with its source and assumptions.

---

"#,
    );

    let mut categories = EquationCategory::all();
    categories.sort_by_key(|c| c.sort_order());

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
