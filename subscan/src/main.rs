use subscan_core::{Beacon, Scanner, SimRadio};
use subscan_messages::{Command, Decibels, Event, Hertz, ScanDirection};

use anyhow::Context;
use log::LevelFilter;
use std::io::{BufRead, Write};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{:<5} | {} | {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .init();

    // Create flume channels for bidirectional communication
    let (cmd_tx, cmd_rx) = flume::unbounded();
    let (event_tx, event_rx) = flume::bounded(1);

    // Optional CLI argument: a simulated beacon frequency in MHz,
    // e.g. `subscan 433.95`
    let beacons = std::env::args()
        .nth(1)
        .map(|arg| -> anyhow::Result<Vec<Beacon>> {
            let mhz: f64 = arg
                .parse()
                .context("beacon frequency must be a number in MHz")?;
            Ok(vec![Beacon {
                frequency: Hertz((mhz * 1_000_000.0) as u32),
                level: Decibels(-60.0),
            }])
        })
        .transpose()?
        .unwrap_or_default();

    // Spawn scanner thread
    let scanner = Scanner::new(SimRadio::new(beacons, 7), cmd_rx, event_tx)?;
    let scanner_handle = std::thread::spawn(move || scanner.run());

    // stdin stands in for the device buttons:
    // o = toggle scanning, +/- = sensitivity, l/r = direction, q = quit
    let stdin_cmd_tx = cmd_tx.clone();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let cmd = match line.trim() {
                "o" => Command::ToggleScanning,
                "+" => Command::IncreaseSensitivity,
                "-" => Command::DecreaseSensitivity,
                "l" => Command::SetDirection(ScanDirection::Down),
                "r" => Command::SetDirection(ScanDirection::Up),
                "q" => Command::Stop,
                _ => continue,
            };
            let stop = matches!(cmd, Command::Stop);
            if stdin_cmd_tx.send(cmd).is_err() || stop {
                break;
            }
        }
    });

    // Print state lines on the main thread until the scanner exits and
    // drops its event sender.
    while let Ok(Event::StateSnapshot(state)) = event_rx.recv() {
        print!(
            "\rFreq: {} MHz  RSSI: {}  Sens: {}  {}    ",
            state.frequency_str(),
            state.rssi_str(),
            state.sensitivity_str(),
            state.scanning_str()
        );
        let _ = std::io::stdout().flush();
    }
    println!();

    scanner_handle
        .join()
        .map_err(|_| anyhow::anyhow!("Scanner thread panicked"))?
}
