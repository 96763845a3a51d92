//! # Text Entries
//!
//! Every worksheet input is kept exactly as typed. An [`Entry`] knows whether
//! it is blank, what number it parses to, and what it coerces to for
//! arithmetic (blank and garbage both count as zero).
//!
//! ```rust
//! use wb_core::input::Entry;
//!
//! let blank = Entry::default();
//! let zero = Entry::from("0");
//! assert!(blank.is_blank());
//! assert!(!zero.is_blank());
//! assert_eq!(blank.value(), zero.value());
//!
//! assert_eq!(Entry::from("12.5").number(), Some(12.5));
//! assert_eq!(Entry::from("abc").value(), 0.0);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Raw text of a single input field.
///
/// Serializes as a JSON string. Deserializes from a string, a number (kept
/// as its JSON text), or `null` (blank), so hand-written input files may use
/// plain numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Entry(String);

/// Any JSON value an input file may hold for a field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawEntry>::deserialize(deserializer)? {
            Some(RawEntry::Text(text)) => Entry::new(text),
            Some(RawEntry::Number(n)) => Entry::new(n.to_string()),
            None => Entry::default(),
        })
    }
}

impl Entry {
    pub fn new(text: impl Into<String>) -> Self {
        Entry(text.into())
    }

    /// The text as typed
    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Parsed value, `None` for blank, unparsable, or non-finite text.
    pub fn number(&self) -> Option<f64> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Value for arithmetic: anything that is not a finite number is zero.
    pub fn value(&self) -> f64 {
        self.number().unwrap_or(0.0)
    }

    /// Value that is present and nonzero, the condition most sync rules
    /// require before they fire.
    pub fn nonzero(&self) -> Option<f64> {
        self.number().filter(|v| *v != 0.0)
    }

    /// Leading integer of the text (`"27L"` -> 27, `"09"` -> 9), used for
    /// runway designators.
    pub fn leading_integer(&self) -> Option<i64> {
        let trimmed = self.0.trim_start();
        let (sign, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let end = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(digits.len(), |(i, _)| i);
        digits[..end].parse::<i64>().ok().map(|n| sign * n)
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::new(text)
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Entry::new(text)
    }
}

/// Format a derived value for writing back into a sibling field: two
/// decimals, or blank when the value is exactly zero or not finite.
pub fn derived_entry(value: f64) -> Entry {
    if value == 0.0 || !value.is_finite() {
        Entry::default()
    } else {
        Entry::new(format!("{:.2}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_distinct_from_zero() {
        assert_eq!(Entry::default().number(), None);
        assert_eq!(Entry::from("0").number(), Some(0.0));
        assert_eq!(Entry::from("   ").number(), None);
        assert!(Entry::from("  ").is_blank());
    }

    #[test]
    fn test_permissive_parse() {
        assert_eq!(Entry::from(" 29.92 ").value(), 29.92);
        assert_eq!(Entry::from("1e3").value(), 1000.0);
        assert_eq!(Entry::from("-12").value(), -12.0);
        assert_eq!(Entry::from("12kt").value(), 0.0);
        assert_eq!(Entry::from("inf").value(), 0.0);
        assert_eq!(Entry::from("NaN").number(), None);
    }

    #[test]
    fn test_nonzero() {
        assert_eq!(Entry::from("0").nonzero(), None);
        assert_eq!(Entry::from("0.0").nonzero(), None);
        assert_eq!(Entry::from("3").nonzero(), Some(3.0));
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(Entry::from("18").leading_integer(), Some(18));
        assert_eq!(Entry::from("09").leading_integer(), Some(9));
        assert_eq!(Entry::from("27L").leading_integer(), Some(27));
        assert_eq!(Entry::from(" 4.5").leading_integer(), Some(4));
        assert_eq!(Entry::from("-3").leading_integer(), Some(-3));
        assert_eq!(Entry::from("").leading_integer(), None);
        assert_eq!(Entry::from("L").leading_integer(), None);
        assert_eq!(Entry::from("-").leading_integer(), None);
    }

    #[test]
    fn test_derived_entry() {
        assert_eq!(derived_entry(127_500.0).text(), "127500.00");
        assert_eq!(derived_entry(85.333_333).text(), "85.33");
        assert!(derived_entry(0.0).is_blank());
        assert!(derived_entry(f64::INFINITY).is_blank());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Entry::from("1500")).unwrap();
        assert_eq!(json, "\"1500\"");
    }

    #[test]
    fn test_deserializes_numbers_and_null() {
        assert_eq!(serde_json::from_str::<Entry>("\"27L\"").unwrap().text(), "27L");
        assert_eq!(serde_json::from_str::<Entry>("340").unwrap().text(), "340");
        assert_eq!(serde_json::from_str::<Entry>("29.92").unwrap().value(), 29.92);
        assert_eq!(serde_json::from_str::<Entry>("-5").unwrap().value(), -5.0);
        assert!(serde_json::from_str::<Entry>("null").unwrap().is_blank());
        assert!(serde_json::from_str::<Entry>("true").is_err());
    }
}
