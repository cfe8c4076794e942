/// Frequency in Hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hertz(pub u32);

impl std::fmt::Display for Hertz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

impl Hertz {
    pub const fn khz(khz: u32) -> Self {
        Self(khz * 1_000)
    }

    pub const fn mhz(mhz: u32) -> Self {
        Self(mhz * 1_000_000)
    }

    pub const fn as_hz(self) -> u32 {
        self.0
    }

    /// Fractional megahertz, for display.
    pub fn as_mhz(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    pub const fn saturating_add(self, delta: u32) -> Self {
        Self(self.0.saturating_add(delta))
    }

    pub const fn saturating_sub(self, delta: u32) -> Self {
        Self(self.0.saturating_sub(delta))
    }
}

impl From<u32> for Hertz {
    fn from(hz: u32) -> Self {
        Self(hz)
    }
}

impl From<Hertz> for u32 {
    fn from(hz: Hertz) -> Self {
        hz.0
    }
}

/// Signal level in decibels, as reported by the receiver RSSI register.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Decibels(pub f32);

impl std::fmt::Display for Decibels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} dB", self.0)
    }
}

impl Decibels {
    pub const fn as_db(self) -> f32 {
        self.0
    }
}

impl From<f32> for Decibels {
    fn from(db: f32) -> Self {
        Self(db)
    }
}

impl From<Decibels> for f32 {
    fn from(db: Decibels) -> Self {
        db.0
    }
}
