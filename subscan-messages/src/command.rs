/// Sweep polarity: which way the next frequency step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Up,
    Down,
}

/// Commands sent from the frontend to the scanner.
#[derive(Debug)]
pub enum Command {
    /// Invert the scanning/locked flag, overriding the automatic decision
    /// until the next tick's signal evaluation runs again.
    ToggleScanning,
    /// Raise the detection threshold by 1 dB.
    IncreaseSensitivity,
    /// Lower the detection threshold by 1 dB.
    DecreaseSensitivity,
    /// Change sweep polarity. Takes effect on the next frequency advance.
    SetDirection(ScanDirection),
    /// Stop the scanner and terminate the run loop.
    Stop,
}
