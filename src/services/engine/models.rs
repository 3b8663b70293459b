use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::time_left::{TimeLeft, TimeUnit};

/// Initial span counted down when no target instant and no explicit initial
/// fields are supplied.
pub const DEFAULT_INITIAL_DAYS: u64 = 8;
pub const DEFAULT_INITIAL_HOURS: u32 = 23;
pub const DEFAULT_INITIAL_MINUTES: u32 = 55;
pub const DEFAULT_INITIAL_SECONDS: u32 = 41;

/// Construction inputs for a countdown engine.
///
/// A supplied `target` selects absolute mode and the initial fields are
/// ignored; otherwise the engine counts down the initial span (each field
/// falling back to its default) from the instant the engine is built.
#[derive(Debug, Clone, Default)]
pub struct CountdownConfig {
    pub target: Option<DateTime<Local>>,
    pub initial_days: Option<u64>,
    pub initial_hours: Option<u32>,
    pub initial_minutes: Option<u32>,
    pub initial_seconds: Option<u32>,
}

impl CountdownConfig {
    pub fn with_target(target: DateTime<Local>) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn with_initial(days: u64, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            target: None,
            initial_days: Some(days),
            initial_hours: Some(hours),
            initial_minutes: Some(minutes),
            initial_seconds: Some(seconds),
        }
    }

    /// Initial span with defaults applied to any omitted field.
    pub fn initial_time_left(&self) -> TimeLeft {
        TimeLeft::new(
            self.initial_days.unwrap_or(DEFAULT_INITIAL_DAYS),
            self.initial_hours.unwrap_or(DEFAULT_INITIAL_HOURS),
            self.initial_minutes.unwrap_or(DEFAULT_INITIAL_MINUTES),
            self.initial_seconds.unwrap_or(DEFAULT_INITIAL_SECONDS),
        )
    }
}

/// The countdown's reference point. Exactly one variant is chosen at engine
/// construction and stays fixed for the engine's lifetime; switching anchors
/// means building a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// Counts down to a fixed wall-clock instant.
    Absolute(DateTime<Local>),
    /// Counts down an initial span from a start instant captured once at
    /// construction.
    Relative {
        start: DateTime<Local>,
        initial: TimeLeft,
    },
}

impl Anchor {
    /// Selects the anchor variant for a config: absolute if a target is
    /// present, else relative anchored at `now`.
    pub fn from_config(config: &CountdownConfig, now: DateTime<Local>) -> Self {
        match config.target {
            Some(target) => Anchor::Absolute(target),
            None => Anchor::Relative {
                start: now,
                initial: config.initial_time_left(),
            },
        }
    }

    /// Whole seconds remaining at `now`, floored at zero.
    ///
    /// Relative mode always recomputes from the original span and the
    /// captured start instant; nothing is decremented in place, so late or
    /// missed ticks cannot drift from wall-clock time.
    pub fn remaining_at(&self, now: DateTime<Local>) -> u64 {
        match self {
            Anchor::Absolute(target) => {
                target.signed_duration_since(now).num_seconds().max(0) as u64
            }
            Anchor::Relative { start, initial } => {
                let elapsed = now.signed_duration_since(*start).num_seconds().max(0) as u64;
                initial.total_seconds().saturating_sub(elapsed)
            }
        }
    }
}

/// The `(current, previous)` pair published to the subscriber on every tick.
///
/// `previous` is the value that was current immediately before the latest
/// recomputation; at construction it is seeded equal to `current` so the
/// first frame reports no changed units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current: TimeLeft,
    pub previous: TimeLeft,
}

impl Snapshot {
    pub fn seeded(current: TimeLeft) -> Self {
        Self {
            current,
            previous: current,
        }
    }

    /// Whether this unit's value changed on the latest tick.
    pub fn unit_changed(&self, unit: TimeUnit) -> bool {
        self.current.unit(unit) != self.previous.unit(unit)
    }

    /// The units that changed on the latest tick, in render order.
    pub fn changed_units(&self) -> Vec<TimeUnit> {
        TimeUnit::ALL
            .into_iter()
            .filter(|unit| self.unit_changed(*unit))
            .collect()
    }
}

/// Engine lifecycle. `Expired` is terminal: ticking continues but the output
/// stays frozen at zero, and no transition back to `Running` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Running,
    Expired,
}
