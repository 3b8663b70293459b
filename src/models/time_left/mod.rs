// Remaining-time decomposition used by the countdown engine

use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// The four display units of a countdown, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    /// Uppercase label shown under each unit in the display.
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Days => "DAYS",
            TimeUnit::Hours => "HOURS",
            TimeUnit::Minutes => "MINUTES",
            TimeUnit::Seconds => "SECONDS",
        }
    }
}

/// A non-negative number of seconds decomposed into days, hours, minutes and
/// seconds. Values produced by [`TimeLeft::from_total_seconds`] keep
/// `hours < 24`, `minutes < 60` and `seconds < 60`; `days` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Builds a `TimeLeft` from raw field values. Construction inputs are not
    /// normalized; `total_seconds` is well defined either way.
    pub fn new(days: u64, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Decomposes a total second count using floor division and modulo only,
    /// so recombining via [`total_seconds`](Self::total_seconds) is exact.
    pub fn from_total_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
            seconds: (total % SECONDS_PER_MINUTE) as u32,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours as u64 * SECONDS_PER_HOUR
            + self.minutes as u64 * SECONDS_PER_MINUTE
            + self.seconds as u64
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Value of a single unit, widened to `u64` so all four units share a type.
    pub fn unit(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Days => self.days,
            TimeUnit::Hours => self.hours as u64,
            TimeUnit::Minutes => self.minutes as u64,
            TimeUnit::Seconds => self.seconds as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decomposes_with_floor_and_modulo() {
        assert_eq!(TimeLeft::from_total_seconds(0), TimeLeft::ZERO);
        assert_eq!(TimeLeft::from_total_seconds(59), TimeLeft::new(0, 0, 0, 59));
        assert_eq!(TimeLeft::from_total_seconds(60), TimeLeft::new(0, 0, 1, 0));
        assert_eq!(
            TimeLeft::from_total_seconds(3_661),
            TimeLeft::new(0, 1, 1, 1)
        );
        assert_eq!(
            TimeLeft::from_total_seconds(86_399),
            TimeLeft::new(0, 23, 59, 59)
        );
        assert_eq!(
            TimeLeft::from_total_seconds(86_400),
            TimeLeft::new(1, 0, 0, 0)
        );
    }

    #[test]
    fn recombines_exactly() {
        for total in [0, 1, 59, 60, 3_599, 3_600, 86_399, 86_400, 777_341] {
            assert_eq!(TimeLeft::from_total_seconds(total).total_seconds(), total);
        }
    }

    #[test]
    fn days_are_unbounded() {
        let far = TimeLeft::from_total_seconds(150 * SECONDS_PER_DAY + 61);
        assert_eq!(far.days, 150);
        assert_eq!(far.minutes, 1);
        assert_eq!(far.seconds, 1);
    }

    #[test]
    fn unit_accessor_matches_fields() {
        let time_left = TimeLeft::new(8, 23, 55, 41);
        assert_eq!(time_left.unit(TimeUnit::Days), 8);
        assert_eq!(time_left.unit(TimeUnit::Hours), 23);
        assert_eq!(time_left.unit(TimeUnit::Minutes), 55);
        assert_eq!(time_left.unit(TimeUnit::Seconds), 41);
    }

    #[test]
    fn labels_are_uppercase_render_order() {
        let labels: Vec<_> = TimeUnit::ALL.iter().map(|u| u.label()).collect();
        assert_eq!(labels, vec!["DAYS", "HOURS", "MINUTES", "SECONDS"]);
    }
}
