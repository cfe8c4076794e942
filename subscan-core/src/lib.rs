mod band;
mod controller;
mod radio;
mod sim;

pub use band::{
    DEFAULT_FREQUENCY, DEFAULT_RSSI, DEFAULT_SENSITIVITY, FREQ_MAX, FREQ_MIN, STEP,
    in_tunable_band, step, wrap_candidate,
};
pub use controller::ScanController;
pub use radio::RadioPort;
pub use sim::{Beacon, SimRadio};

use anyhow::Result;
use flume::{Receiver, Sender};
use log::debug;
use std::time::Duration;

use subscan_messages::{Command, Event};

/// Default scheduling period between ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(10);

/// The scanner backend.
/// Owns the controller and processes frontend commands between ticks, so
/// ticks and commands are strictly serialized.
pub struct Scanner<R: RadioPort> {
    controller: ScanController<R>,
    cmd_rx: Receiver<Command>,
    event_tx: Sender<Event>,
    tick_period: Duration,
    should_exit: bool,
}

impl<R: RadioPort> Scanner<R> {
    /// Create a new Scanner around `radio`.
    /// Fails when the controller cannot validate the default frequency.
    pub fn new(radio: R, cmd_rx: Receiver<Command>, event_tx: Sender<Event>) -> Result<Self> {
        debug!("constructing scanner");
        Ok(Self {
            controller: ScanController::new(radio)?,
            cmd_rx,
            event_tx,
            tick_period: DEFAULT_TICK_PERIOD,
            should_exit: false,
        })
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Run the scan loop (blocking) until `Command::Stop` arrives or the
    /// command channel disconnects.
    pub fn run(mut self) -> Result<()> {
        while !self.should_exit {
            self.controller.on_tick();
            self.publish_state();
            self.process_command();
        }
        Ok(())
    }

    fn publish_state(&self) {
        // A lagging frontend drops frames; the tick never stalls on it.
        let _ = self
            .event_tx
            .try_send(Event::StateSnapshot(self.controller.snapshot()));
    }

    /// Wait up to one tick period for a command and apply it.
    fn process_command(&mut self) {
        let msg = self.cmd_rx.recv_timeout(self.tick_period);
        match msg {
            Ok(Command::Stop) | Err(flume::RecvTimeoutError::Disconnected) => {
                debug!("scanner stopping");
                self.should_exit = true;
            }
            Ok(Command::ToggleScanning) => self.controller.toggle_scanning(),
            Ok(Command::IncreaseSensitivity) => self.controller.increase_sensitivity(),
            Ok(Command::DecreaseSensitivity) => self.controller.decrease_sensitivity(),
            Ok(Command::SetDirection(direction)) => self.controller.set_direction(direction),
            Err(flume::RecvTimeoutError::Timeout) => {}
        }
    }
}
