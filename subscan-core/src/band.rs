use subscan_messages::{Decibels, Hertz, ScanDirection};

pub const FREQ_MIN: Hertz = Hertz(300_000_000);
pub const FREQ_MAX: Hertz = Hertz(928_000_000);
/// Sweep step in Hz.
pub const STEP: u32 = 10_000;

pub const DEFAULT_FREQUENCY: Hertz = Hertz(433_920_000);
pub const DEFAULT_RSSI: Decibels = Decibels(-100.0);
pub const DEFAULT_SENSITIVITY: Decibels = Decibels(-85.0);

/// The CC1101 tunable sub-bands. The wrap table below must stay consistent
/// with this plan.
const BANDS: [(u32, u32); 3] = [
    (300_000_000, 348_000_000),
    (387_000_000, 464_000_000),
    (779_000_000, 928_000_000),
];

/// Whether `frequency` falls inside one of the tunable sub-bands.
pub fn in_tunable_band(frequency: Hertz) -> bool {
    let hz = frequency.as_hz();
    BANDS.iter().any(|&(lo, hi)| hz >= lo && hz <= hi)
}

/// One sweep step from `frequency`. Saturating so the candidate can never
/// leave the u32 domain, even transiently.
pub fn step(frequency: Hertz, direction: ScanDirection) -> Hertz {
    match direction {
        ScanDirection::Up => frequency.saturating_add(STEP),
        ScanDirection::Down => frequency.saturating_sub(STEP),
    }
}

/// Correct a candidate the device rejected as untunable, hopping over the
/// hardware gap in the direction of travel.
///
/// The breakpoints are a fixed hardware characteristic of the band plan
/// above, not a derived value. First matching rule wins; note the up/down
/// breakpoints are asymmetric because each snaps to the opposite edge of
/// the gap being crossed.
pub fn wrap_candidate(candidate: Hertz, direction: ScanDirection) -> Hertz {
    let hz = candidate.as_hz();
    match direction {
        ScanDirection::Up => {
            if hz < 387_000_000 {
                Hertz(387_000_000)
            } else if hz < 779_000_000 {
                Hertz(779_000_000)
            } else if candidate > FREQ_MAX {
                FREQ_MIN
            } else {
                candidate
            }
        }
        ScanDirection::Down => {
            if hz > 464_000_000 {
                Hertz(464_000_000)
            } else if hz > 348_000_000 {
                Hertz(348_000_000)
            } else if candidate < FREQ_MIN {
                FREQ_MAX
            } else {
                candidate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ScanDirection::{Down, Up};

    #[test]
    fn step_round_trips_inside_a_band() {
        for hz in [300_000_000, 433_920_000, 440_000_000, 900_000_000] {
            let f = Hertz(hz);
            assert_eq!(step(step(f, Up), Down), f);
            assert_eq!(step(step(f, Down), Up), f);
        }
    }

    #[test]
    fn wrap_up_snaps_to_next_band_floor() {
        assert_eq!(wrap_candidate(Hertz(386_999_999), Up), Hertz(387_000_000));
        assert_eq!(wrap_candidate(Hertz(348_010_000), Up), Hertz(387_000_000));
        assert_eq!(wrap_candidate(Hertz(464_010_000), Up), Hertz(779_000_000));
    }

    #[test]
    fn wrap_up_past_max_restarts_at_min() {
        assert_eq!(wrap_candidate(Hertz(929_000_000), Up), FREQ_MIN);
        assert_eq!(wrap_candidate(Hertz(928_010_000), Up), FREQ_MIN);
    }

    #[test]
    fn wrap_down_snaps_to_previous_band_ceiling() {
        assert_eq!(wrap_candidate(Hertz(465_000_000), Down), Hertz(464_000_000));
        assert_eq!(wrap_candidate(Hertz(778_990_000), Down), Hertz(464_000_000));
        assert_eq!(wrap_candidate(Hertz(386_990_000), Down), Hertz(348_000_000));
    }

    #[test]
    fn wrap_down_past_min_restarts_at_max() {
        assert_eq!(wrap_candidate(Hertz(299_000_000), Down), FREQ_MAX);
        assert_eq!(wrap_candidate(Hertz(299_990_000), Down), FREQ_MAX);
    }

    #[test]
    fn wrap_leaves_tunable_candidates_alone() {
        // Defensive fallthrough arms; a candidate the device accepts never
        // reaches wrap_candidate in practice.
        assert_eq!(wrap_candidate(Hertz(800_000_000), Up), Hertz(800_000_000));
        assert_eq!(wrap_candidate(Hertz(320_000_000), Down), Hertz(320_000_000));
    }

    #[test]
    fn wrap_always_lands_in_a_tunable_band() {
        for hz in (299_000_000u32..=930_000_000).step_by(1_000_000) {
            let up = wrap_candidate(Hertz(hz).saturating_add(STEP), Up);
            let down = wrap_candidate(Hertz(hz).saturating_sub(STEP), Down);
            if !in_tunable_band(Hertz(hz).saturating_add(STEP)) {
                assert!(in_tunable_band(up), "up wrap of {hz} -> {up}");
            }
            if !in_tunable_band(Hertz(hz).saturating_sub(STEP)) {
                assert!(in_tunable_band(down), "down wrap of {hz} -> {down}");
            }
        }
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert!(in_tunable_band(Hertz(300_000_000)));
        assert!(in_tunable_band(Hertz(348_000_000)));
        assert!(!in_tunable_band(Hertz(348_010_000)));
        assert!(in_tunable_band(Hertz(387_000_000)));
        assert!(in_tunable_band(Hertz(464_000_000)));
        assert!(!in_tunable_band(Hertz(500_000_000)));
        assert!(in_tunable_band(Hertz(779_000_000)));
        assert!(in_tunable_band(Hertz(928_000_000)));
        assert!(!in_tunable_band(Hertz(928_010_000)));
        assert!(!in_tunable_band(Hertz(299_990_000)));
    }
}
