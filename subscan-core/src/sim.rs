use rand::RngExt as _;
use rand::SeedableRng;
use rand::rngs::StdRng;

use subscan_messages::{Decibels, Hertz};

use crate::band;
use crate::radio::RadioPort;

/// A transmitter the simulation makes audible at a fixed frequency.
#[derive(Debug, Clone, Copy)]
pub struct Beacon {
    pub frequency: Hertz,
    pub level: Decibels,
}

/// Host-side stand-in for the receiver hardware.
///
/// Frequency validity follows the CC1101 band plan. RSSI is the strongest
/// beacon within half a step of the tuned frequency, or the noise floor,
/// plus bounded jitter from a seeded RNG so runs reproduce.
pub struct SimRadio {
    beacons: Vec<Beacon>,
    noise_floor: Decibels,
    tuned: Hertz,
    rx_active: bool,
    rng: StdRng,
}

impl SimRadio {
    pub fn new(beacons: Vec<Beacon>, seed: u64) -> Self {
        Self {
            beacons,
            noise_floor: band::DEFAULT_RSSI,
            tuned: band::DEFAULT_FREQUENCY,
            rx_active: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_noise_floor(mut self, level: Decibels) -> Self {
        self.noise_floor = level;
        self
    }

    // ±1 dB
    fn jitter(&mut self) -> f32 {
        (self.rng.random::<f32>() - 0.5) * 2.0
    }
}

impl RadioPort for SimRadio {
    fn is_frequency_valid(&self, frequency: Hertz) -> bool {
        band::in_tunable_band(frequency)
    }

    fn set_frequency(&mut self, frequency: Hertz) {
        self.tuned = frequency;
    }

    fn start_rx(&mut self) {
        self.rx_active = true;
    }

    fn stop_rx(&mut self) {
        self.rx_active = false;
    }

    fn idle(&mut self) {}

    fn flush_rx(&mut self) {}

    fn read_rssi(&mut self) -> Option<Decibels> {
        if !self.rx_active {
            return None;
        }
        let tuned = self.tuned.as_hz();
        let heard = self
            .beacons
            .iter()
            .filter(|b| tuned.abs_diff(b.frequency.as_hz()) <= band::STEP / 2)
            .map(|b| b.level.as_db())
            .fold(None, |acc: Option<f32>, level| {
                Some(acc.map_or(level, |a| a.max(level)))
            });
        let base = heard.unwrap_or(self.noise_floor.as_db());
        Some(Decibels(base + self.jitter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subscan_messages::ScanDirection;

    fn beacon(hz: u32, db: f32) -> Beacon {
        Beacon {
            frequency: Hertz(hz),
            level: Decibels(db),
        }
    }

    #[test]
    fn validity_matches_band_plan() {
        let radio = SimRadio::new(vec![], 0);
        assert!(radio.is_frequency_valid(Hertz(433_920_000)));
        assert!(!radio.is_frequency_valid(Hertz(500_000_000)));
        assert!(!radio.is_frequency_valid(Hertz(299_990_000)));
    }

    #[test]
    fn no_rssi_until_rx_started() {
        let mut radio = SimRadio::new(vec![], 0);
        assert!(radio.read_rssi().is_none());
        radio.start_rx();
        assert!(radio.read_rssi().is_some());
        radio.stop_rx();
        assert!(radio.read_rssi().is_none());
    }

    #[test]
    fn beacon_within_half_step_is_heard() {
        let mut radio = SimRadio::new(vec![beacon(433_930_000, -60.0)], 0);
        radio.start_rx();

        radio.set_frequency(Hertz(433_930_000));
        let on = radio.read_rssi().unwrap().as_db();
        assert!(on > -62.0 && on < -58.0, "on-beacon rssi {on}");

        radio.set_frequency(Hertz(433_920_000));
        let off = radio.read_rssi().unwrap().as_db();
        assert!(off < -98.0, "off-beacon rssi {off}");
    }

    #[test]
    fn strongest_overlapping_beacon_wins() {
        let mut radio = SimRadio::new(
            vec![beacon(433_930_000, -70.0), beacon(433_933_000, -50.0)],
            0,
        );
        radio.start_rx();
        radio.set_frequency(Hertz(433_930_000));
        let rssi = radio.read_rssi().unwrap().as_db();
        assert!(rssi > -52.0, "expected the -50 dB beacon, got {rssi}");
    }

    #[test]
    fn noise_floor_is_configurable() {
        let mut radio = SimRadio::new(vec![], 0).with_noise_floor(Decibels(-90.0));
        radio.start_rx();
        let rssi = radio.read_rssi().unwrap().as_db();
        assert!(rssi > -91.5 && rssi < -88.5, "noise-floor rssi {rssi}");
    }

    #[test]
    fn seeded_runs_reproduce() {
        let mut a = SimRadio::new(vec![], 42);
        let mut b = SimRadio::new(vec![], 42);
        a.start_rx();
        b.start_rx();
        for _ in 0..16 {
            assert_eq!(a.read_rssi(), b.read_rssi());
        }
    }

    #[test]
    fn step_lands_on_beacon_frequency() {
        // A sweep moving in whole steps must be able to land exactly on a
        // step-aligned beacon.
        let b = beacon(433_930_000, -60.0);
        let next = band::step(Hertz(433_920_000), ScanDirection::Up);
        assert_eq!(next, b.frequency);
    }
}
