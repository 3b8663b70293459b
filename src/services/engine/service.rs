use chrono::{DateTime, Local};

use crate::models::time_left::TimeLeft;

use super::models::{Anchor, CountdownConfig, EngineState, Snapshot};

/// Recomputes remaining time against an immutable anchor and tracks the
/// `(current, previous)` pair the presentation layer uses for change
/// detection.
///
/// The engine is pure with respect to time: every operation takes `now` as an
/// argument, so callers own the clock (the ticker passes the wall clock,
/// tests pass fixed instants).
pub struct CountdownEngine {
    anchor: Anchor,
    state: EngineState,
    current: TimeLeft,
    previous: TimeLeft,
}

impl CountdownEngine {
    /// Builds the engine and performs the first recompute synchronously, so
    /// the construction snapshot reflects real remaining time rather than a
    /// placeholder. `previous` is seeded equal to `current`.
    pub fn new(config: &CountdownConfig, now: DateTime<Local>) -> Self {
        let anchor = Anchor::from_config(config, now);
        let current = TimeLeft::from_total_seconds(anchor.remaining_at(now));
        let state = if current.is_zero() {
            EngineState::Expired
        } else {
            EngineState::Running
        };
        log::debug!(
            "Countdown engine created: anchor={:?}, remaining={}s, state={:?}",
            anchor,
            current.total_seconds(),
            state
        );
        Self {
            anchor,
            state,
            current,
            previous: current,
        }
    }

    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.current,
            previous: self.previous,
        }
    }

    /// Advances one tick: rotates `current` into `previous`, recomputes the
    /// remaining time at `now` and returns the fresh snapshot.
    ///
    /// Once the engine reaches zero it stays `Expired` and keeps emitting the
    /// zero value on every subsequent tick, even if the wall clock later
    /// steps backwards past the anchor.
    pub fn tick(&mut self, now: DateTime<Local>) -> Snapshot {
        self.previous = self.current;
        match self.state {
            EngineState::Running => {
                self.current = TimeLeft::from_total_seconds(self.anchor.remaining_at(now));
                if self.current.is_zero() {
                    self.state = EngineState::Expired;
                    log::info!("Countdown reached zero");
                }
            }
            EngineState::Expired => {
                self.current = TimeLeft::ZERO;
            }
        }
        self.snapshot()
    }
}
