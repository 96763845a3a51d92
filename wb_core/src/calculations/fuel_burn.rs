//! # Fuel Burn
//!
//! Planned fuel burn can be entered either as flight time or as gallons.
//! Whichever box was typed into last is authoritative and the other is
//! recomputed at 11 gal/hr. Clearing the authoritative box clears both.
//!
//! ```rust
//! use wb_core::calculations::fuel_burn::{FuelBurnPair, FuelBurnSource};
//!
//! let mut burn = FuelBurnPair::default();
//! burn.edit_hours("1.5");
//! assert_eq!(burn.gallons.text(), "16.50");
//!
//! burn.edit_gallons("22");
//! assert_eq!(burn.source, FuelBurnSource::Gallons);
//! assert_eq!(burn.hours.text(), "2.00");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aircraft::FUEL_BURN_GAL_PER_HR;
use crate::equations::balance::{burn_gallons, burn_hours};
use crate::input::{derived_entry, Entry};
use crate::units::{Gallons, Hours};

/// Which fuel burn box is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FuelBurnSource {
    #[default]
    Hours,
    Gallons,
}

/// Flight time and gallons for the planned burn, kept in step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelBurnPair {
    pub hours: Entry,
    pub gallons: Entry,
    pub source: FuelBurnSource,
}

impl FuelBurnPair {
    pub fn edit_hours(&mut self, text: impl Into<Entry>) {
        self.hours = text.into();
        self.source = FuelBurnSource::Hours;
        self.sync();
    }

    pub fn edit_gallons(&mut self, text: impl Into<Entry>) {
        self.gallons = text.into();
        self.source = FuelBurnSource::Gallons;
        self.sync();
    }

    /// Recompute the derived box from the authoritative one.
    pub fn sync(&mut self) {
        match self.source {
            FuelBurnSource::Hours => {
                self.gallons = match self.hours.nonzero() {
                    Some(hr) => derived_entry(burn_gallons(Hours(hr), FUEL_BURN_GAL_PER_HR).0),
                    None => Entry::default(),
                };
                debug!(gallons = self.gallons.text(), "fuel burn gallons from hours");
            }
            FuelBurnSource::Gallons => {
                self.hours = match self.gallons.nonzero() {
                    Some(gal) => derived_entry(burn_hours(Gallons(gal), FUEL_BURN_GAL_PER_HR).0),
                    None => Entry::default(),
                };
                debug!(hours = self.hours.text(), "fuel burn hours from gallons");
            }
        }
    }

    /// Gallons burned, as carried into the landing totals
    pub fn gallons(&self) -> Gallons {
        Gallons(self.gallons.value())
    }

    pub fn clear(&mut self) {
        *self = FuelBurnPair::default();
    }
}
