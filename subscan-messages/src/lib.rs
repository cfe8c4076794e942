mod command;
mod event;
mod state;
mod units;

pub use command::{Command, ScanDirection};
pub use event::Event;
pub use state::ScannerState;
pub use units::{Decibels, Hertz};
