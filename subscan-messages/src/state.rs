use crate::{Decibels, Hertz, ScanDirection};

/// Current state of the scanner, published once per tick.
///
/// The formatting accessors produce the four fields the frontend shows;
/// they recompute from the raw values on every call.
#[derive(Debug, Clone)]
pub struct ScannerState {
    /// Tuned frequency
    pub frequency: Hertz,
    /// Last RSSI sample
    pub rssi: Decibels,
    /// Detection threshold
    pub sensitivity: Decibels,
    /// Sweep polarity
    pub scan_direction: ScanDirection,
    /// true while sweeping, false while locked on a signal
    pub scanning: bool,
}

impl ScannerState {
    /// Frequency in MHz with two decimals, e.g. `433.92`.
    pub fn frequency_str(&self) -> String {
        format!("{:.2}", self.frequency.as_mhz())
    }

    pub fn rssi_str(&self) -> String {
        format!("{:.2}", self.rssi.as_db())
    }

    pub fn sensitivity_str(&self) -> String {
        format!("{:.2}", self.sensitivity.as_db())
    }

    /// Scanning-state label shown by the frontend.
    pub fn scanning_str(&self) -> &'static str {
        if self.scanning { "Scanning..." } else { "Locked" }
    }
}
