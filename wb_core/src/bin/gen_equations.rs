//! Generate EQUATIONS.md from the equation registry.
//!
//! Every formula the worksheet uses is listed with its variables, reference,
//! and the function that implements it.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations [OUTPUT]
//! ```
//!
//! Without `OUTPUT` the file is written to `wb_core/src/equations/EQUATIONS.md`
//! (relative to the workspace root).

use std::env;
use std::fs;
use std::path::PathBuf;

use wb_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

fn main() {
    let output_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("wb_core/src/equations/EQUATIONS.md"));

    println!("Generating EQUATIONS.md ({} equations)...", ALL_EQUATIONS.len());
    let markdown = generate_equations_markdown();

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
