use crate::ScannerState;

/// Events sent from the scanner to the frontend.
#[derive(Debug)]
pub enum Event {
    /// Fresh state snapshot, published once per tick.
    StateSnapshot(ScannerState),
}
