// Launch Countdown Application
// Terminal display over the countdown engine

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use launch_countdown::models::time_left::TimeUnit;
use launch_countdown::services::engine::{CountdownConfig, CountdownTicker, Snapshot};
use launch_countdown::utils::format::format_unit;

/// One line per snapshot: the four units with labels, changed units marked.
fn render(snapshot: &Snapshot) {
    let line = TimeUnit::ALL
        .iter()
        .map(|unit| {
            let marker = if snapshot.unit_changed(*unit) { "*" } else { " " };
            format!("{}{marker} {}", format_unit(snapshot.current.unit(*unit)), unit.label())
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("{line}");
}

fn config_from_args() -> Result<CountdownConfig> {
    match std::env::args().nth(1) {
        Some(arg) => {
            let target = DateTime::parse_from_rfc3339(&arg)
                .with_context(|| format!("invalid target timestamp (expected RFC 3339): {arg}"))?
                .with_timezone(&Local);
            Ok(CountdownConfig::with_target(target))
        }
        None => Ok(CountdownConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Launch Countdown");

    let config = config_from_args()?;

    println!("WE'RE LAUNCHING SOON");

    let (snapshot_tx, mut snapshot_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut ticker = CountdownTicker::spawn(config, move |snapshot| {
        let _ = snapshot_tx.send(snapshot);
    });

    loop {
        tokio::select! {
            received = snapshot_rx.recv() => match received {
                Some(snapshot) => {
                    render(&snapshot);
                    if snapshot.current.is_zero() {
                        println!("LIFTOFF");
                        break;
                    }
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted, shutting down");
                break;
            }
        }
    }

    ticker.shutdown();
    Ok(())
}
