use subscan_messages::{Decibels, Hertz};

/// Capability interface to the physical receiver (hardware driver, or
/// [`SimRadio`](crate::SimRadio) on a host).
///
/// The controller drives every frequency change through the fixed sequence
/// flush_rx → stop_rx → idle → set_frequency → start_rx. Device
/// acquisition and release stay with the driver; the controller only calls
/// these lifecycle operations.
pub trait RadioPort {
    /// Whether the device can tune to `frequency`. Pure query.
    fn is_frequency_valid(&self, frequency: Hertz) -> bool;

    /// Tune to `frequency`. Synchronous; assumed to succeed for a
    /// pre-validated frequency.
    fn set_frequency(&mut self, frequency: Hertz);

    /// Begin receiving on the tuned frequency.
    fn start_rx(&mut self);

    /// Stop receiving.
    fn stop_rx(&mut self);

    /// Put the receiver into the idle state between stop and retune.
    fn idle(&mut self);

    /// Discard buffered receive data before stopping.
    fn flush_rx(&mut self);

    /// Current signal strength, or `None` when no device is attached.
    fn read_rssi(&mut self) -> Option<Decibels>;
}
