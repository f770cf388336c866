use time::{Duration, OffsetDateTime};

/// Remaining time split into the four display units.
///
/// Every field fits the two-digit sprite range: a negative remaining duration
/// clamps everything to zero and day counts saturate at 99 (the sprite set
/// covers exactly "00".."99").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeParts {
    /// Whole days remaining, saturating at 99.
    pub days: u8,
    /// Hours remaining, modulo 24.
    pub hours: u8,
    /// Minutes remaining, modulo 60.
    pub minutes: u8,
    /// Seconds remaining, modulo 60.
    pub seconds: u8,
}

impl TimeParts {
    /// All units at zero, the expired display.
    pub const ZERO: TimeParts = TimeParts {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a remaining duration into display units.
    pub fn from_remaining(remaining: Duration) -> Self {
        let total = remaining.whole_seconds();
        if total <= 0 {
            return Self::ZERO;
        }

        Self {
            days: (total / 86_400).min(99) as u8,
            hours: ((total / 3_600) % 24) as u8,
            minutes: ((total / 60) % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// Remaining time at `offset_secs` seconds after `now`.
    ///
    /// Frame `i` of a running animation uses `offset_secs = i`; each frame is
    /// computed independently from the absolute remaining time.
    pub fn at(end: OffsetDateTime, now: OffsetDateTime, offset_secs: i64) -> Self {
        Self::from_remaining(end - now - Duration::seconds(offset_secs))
    }

    /// Value displayed in the column for `unit`.
    pub fn for_unit(self, unit: crate::config::model::TimeUnit) -> u8 {
        use crate::config::model::TimeUnit;
        match unit {
            TimeUnit::Days => self.days,
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/countdown.rs"]
mod tests;
