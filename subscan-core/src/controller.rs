use anyhow::{Result, bail};
use log::{debug, error, info};

use subscan_messages::{Decibels, Hertz, ScanDirection, ScannerState};

use crate::band::{self, DEFAULT_FREQUENCY, DEFAULT_RSSI, DEFAULT_SENSITIVITY};
use crate::radio::RadioPort;

/// Owns the scan state and drives the per-tick lock/sweep decision.
///
/// All mutation goes through [`on_tick`](Self::on_tick) and the command
/// handlers; the frontend only ever sees cloned snapshots.
pub struct ScanController<R: RadioPort> {
    radio: R,
    state: ScannerState,
}

impl<R: RadioPort> ScanController<R> {
    /// Build a controller around `radio` and perform the initial tune.
    ///
    /// Fails when the device rejects the default frequency, which means the
    /// driver does not cover the expected sub-GHz band plan; running ticks
    /// in that situation would sweep blind.
    pub fn new(mut radio: R) -> Result<Self> {
        if !radio.is_frequency_valid(DEFAULT_FREQUENCY) {
            bail!("radio rejected default frequency {DEFAULT_FREQUENCY}");
        }
        radio.set_frequency(DEFAULT_FREQUENCY);
        radio.start_rx();
        Ok(Self {
            radio,
            state: ScannerState {
                frequency: DEFAULT_FREQUENCY,
                rssi: DEFAULT_RSSI,
                sensitivity: DEFAULT_SENSITIVITY,
                scan_direction: ScanDirection::Up,
                scanning: true,
            },
        })
    }

    /// Run one scheduling interval of the scan algorithm: sample RSSI,
    /// decide lock vs. sweep, advance and retune if still sweeping.
    pub fn on_tick(&mut self) {
        self.update_rssi();

        // Strict comparison: a signal sitting exactly at threshold does not
        // count as detected, so it flips the lock every tick. Preserved
        // source behavior (no hysteresis band).
        let signal_detected = self.state.rssi > self.state.sensitivity;

        if signal_detected {
            if self.state.scanning {
                self.state.scanning = false;
                info!(
                    "signal at {} ({}), scan locked",
                    self.state.frequency, self.state.rssi
                );
            }
        } else if !self.state.scanning {
            self.state.scanning = true;
            info!("signal below threshold, scan resumed");
        }

        if !self.state.scanning {
            return;
        }

        let candidate = band::step(self.state.frequency, self.state.scan_direction);
        let next = if self.radio.is_frequency_valid(candidate) {
            candidate
        } else {
            let corrected = band::wrap_candidate(candidate, self.state.scan_direction);
            if !self.radio.is_frequency_valid(corrected) {
                // The wrap table and the driver band plan disagree; the
                // table is derived from fixed hardware bounds and must
                // always yield a tunable value.
                error!("corrected frequency {corrected} still rejected by driver");
                debug_assert!(false, "band wrap produced an untunable frequency");
            }
            corrected
        };
        self.retune(next);
    }

    fn update_rssi(&mut self) {
        match self.radio.read_rssi() {
            Some(rssi) => self.state.rssi = rssi,
            None => {
                error!("radio device absent, using default RSSI");
                self.state.rssi = DEFAULT_RSSI;
            }
        }
    }

    /// Full stop/retune/restart sequence, mandatory on every frequency
    /// change. Skipping a step risks the receiver reporting stale RSSI for
    /// the new frequency.
    fn retune(&mut self, frequency: Hertz) {
        self.radio.flush_rx();
        self.radio.stop_rx();
        self.radio.idle();
        self.state.frequency = frequency;
        self.radio.set_frequency(frequency);
        self.radio.start_rx();
        debug!("retuned to {frequency}");
    }

    /// Invert the scanning/locked flag, overriding the automatic decision
    /// until the next tick's own evaluation runs.
    pub fn toggle_scanning(&mut self) {
        self.state.scanning = !self.state.scanning;
        info!("toggled scanning: {}", self.state.scanning);
    }

    pub fn increase_sensitivity(&mut self) {
        self.state.sensitivity.0 += 1.0;
        info!("increased sensitivity: {}", self.state.sensitivity);
    }

    pub fn decrease_sensitivity(&mut self) {
        self.state.sensitivity.0 -= 1.0;
        info!("decreased sensitivity: {}", self.state.sensitivity);
    }

    /// Takes effect on the next frequency advance.
    pub fn set_direction(&mut self, direction: ScanDirection) {
        self.state.scan_direction = direction;
        info!("scan direction set to {direction:?}");
    }

    pub fn frequency(&self) -> Hertz {
        self.state.frequency
    }

    pub fn rssi(&self) -> Decibels {
        self.state.rssi
    }

    pub fn sensitivity(&self) -> Decibels {
        self.state.sensitivity
    }

    pub fn scanning(&self) -> bool {
        self.state.scanning
    }

    /// Frequency in MHz with two decimals.
    pub fn frequency_str(&self) -> String {
        self.state.frequency_str()
    }

    pub fn rssi_str(&self) -> String {
        self.state.rssi_str()
    }

    pub fn sensitivity_str(&self) -> String {
        self.state.sensitivity_str()
    }

    pub fn scanning_str(&self) -> &'static str {
        self.state.scanning_str()
    }

    /// Cloned state for event publication; never cached by the caller.
    pub fn snapshot(&self) -> ScannerState {
        self.state.clone()
    }
}
