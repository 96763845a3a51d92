//! # File I/O Module
//!
//! Two file operations sit at the edge of the engine:
//! - **Export**: write the rendered sheet as a dated text snapshot. The write
//!   is atomic (write `.tmp`, sync, rename) so a half-written sheet never
//!   appears under the final name.
//! - **Input files**: read a JSON [`WorksheetInputs`] document for the CLI.
//!
//! Exports are for printing or sharing; they are not read back.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use std::path::Path;
//! use wb_core::file_io::export_sheet;
//! use wb_core::render::render_sheet;
//! use wb_core::worksheet::Worksheet;
//!
//! let sheet = Worksheet::new();
//! let text = render_sheet(sheet.inputs(), sheet.result());
//! let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//!
//! let path = export_sheet(Path::new("."), date, &text)?;
//! assert!(path.ends_with("pa28-weight-balance-2025-03-14.txt"));
//! # Ok::<(), wb_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::errors::{CalcError, CalcResult};
use crate::worksheet::WorksheetInputs;

/// Stem shared by every exported sheet
pub const EXPORT_PREFIX: &str = "pa28-weight-balance";

/// File name of the sheet exported on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}-{}.txt", EXPORT_PREFIX, date.format("%Y-%m-%d"))
}

/// Write a rendered sheet into `dir`, replacing any export from the same day.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(CalcError::FileError)` - Directory or file could not be written
pub fn export_sheet(dir: &Path, date: NaiveDate, text: &str) -> CalcResult<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| CalcError::file_error("create directory", dir.display().to_string(), e.to_string()))?;

    let path = dir.join(export_file_name(date));
    let tmp_path = path.with_extension("txt.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(text.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, &path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), "exported worksheet");
    Ok(path)
}

/// Read worksheet inputs from a JSON file.
///
/// Missing sections and fields default to blank. Field values may be strings
/// or plain numbers; `null` is blank. Sync rules are not applied
/// here; pass the result to [`Worksheet::from_inputs`](crate::worksheet::Worksheet::from_inputs).
pub fn load_inputs(path: &Path) -> CalcResult<WorksheetInputs> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn test_dir(name: &str) -> PathBuf {
        let dir = temp_dir().join(format!("wb_core_test_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(date()), "pa28-weight-balance-2025-03-14.txt");
    }

    #[test]
    fn test_export_writes_and_replaces() {
        let dir = test_dir("export");
        let path = export_sheet(&dir, date(), "first").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        export_sheet(&dir, date(), "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!path.with_extension("txt.tmp").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_inputs() {
        let dir = test_dir("load");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("inputs.json");
        fs::write(&path, r#"{ "loading": { "front_seats_lb": "340" } }"#).unwrap();

        let inputs = load_inputs(&path).unwrap();
        assert_eq!(inputs.loading.front_seats_lb.text(), "340");
        assert!(inputs.basic.weight.is_blank());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_inputs_with_numbers() {
        let dir = test_dir("numbers");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("inputs.json");
        fs::write(
            &path,
            r#"{ "loading": { "front_seats_lb": 340, "fuel_gal": null },
                 "departure": { "altimeter_inhg": 29.92, "runway": "27L" } }"#,
        )
        .unwrap();

        let inputs = load_inputs(&path).unwrap();
        assert_eq!(inputs.loading.front_seats_lb.text(), "340");
        assert!(inputs.loading.fuel_gal.is_blank());
        assert_eq!(inputs.departure.altimeter_inhg.text(), "29.92");
        assert_eq!(inputs.departure.runway.text(), "27L");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_inputs(Path::new("/nonexistent/inputs.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = test_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        fs::write(&path, "{ nope").unwrap();

        let err = load_inputs(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_dir_all(&dir);
    }
}
