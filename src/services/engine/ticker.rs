use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

use super::models::{CountdownConfig, Snapshot};
use super::service::CountdownEngine;

/// Cadence of the recurring recomputation.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Drives a [`CountdownEngine`] on a fixed 1-second cadence.
///
/// The subscriber runs on a single spawned task, so snapshot deliveries are
/// strictly ordered and never overlap. Each tick reads the clock
/// independently; drift between intended and actual spacing is tolerated, not
/// corrected.
///
/// Must be created from within a tokio runtime.
pub struct CountdownTicker {
    shutdown: Option<watch::Sender<bool>>,
    handle: JoinHandle<()>,
}

impl CountdownTicker {
    /// Spawns a ticker over the wall clock. The construction snapshot is
    /// delivered to the subscriber before this returns; every later snapshot
    /// is delivered from the tick task.
    pub fn spawn<F>(config: CountdownConfig, subscriber: F) -> Self
    where
        F: FnMut(Snapshot) + Send + 'static,
    {
        Self::spawn_with_clock(config, Local::now, subscriber)
    }

    /// Same as [`spawn`](Self::spawn) with an injected clock, which tests use
    /// to run the ticker against a controlled notion of "now".
    pub fn spawn_with_clock<C, F>(config: CountdownConfig, clock: C, mut subscriber: F) -> Self
    where
        C: Fn() -> DateTime<Local> + Send + 'static,
        F: FnMut(Snapshot) + Send + 'static,
    {
        let mut engine = CountdownEngine::new(&config, clock());
        subscriber(engine.snapshot());

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            // interval_at: the construction snapshot already covered "now",
            // so the first timer fire belongs one period out.
            let mut interval = time::interval_at(time::Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => {
                        log::debug!("Countdown ticker stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        subscriber(engine.tick(clock()));
                    }
                }
            }
        });

        Self {
            shutdown: Some(shutdown_tx),
            handle,
        }
    }

    /// Halts the recurring tick. Idempotent: only the first call has any
    /// effect, and no snapshot is published after it.
    pub fn shutdown(&mut self) {
        if let Some(shutdown_tx) = self.shutdown.take() {
            let _ = shutdown_tx.send(true);
        }
    }

    /// Whether the tick task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
