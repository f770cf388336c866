use super::*;
use time::macros::datetime;

#[test]
fn ninety_seconds_decomposes_to_one_thirty() {
    let now = datetime!(2026-03-01 12:00:00 UTC);
    let end = now + Duration::seconds(90);

    let parts = TimeParts::at(end, now, 0);
    assert_eq!(
        parts,
        TimeParts {
            days: 0,
            hours: 0,
            minutes: 1,
            seconds: 30,
        }
    );

    // Frame 59 of a running animation sees 31 seconds remaining.
    let parts = TimeParts::at(end, now, 59);
    assert_eq!(
        parts,
        TimeParts {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 31,
        }
    );
}

#[test]
fn negative_remaining_clamps_to_zero() {
    let now = datetime!(2026-03-01 12:00:00 UTC);
    let end = now - Duration::seconds(5);
    assert_eq!(TimeParts::at(end, now, 0), TimeParts::ZERO);
    // An offset pushing past the end also clamps.
    assert_eq!(TimeParts::at(now + Duration::seconds(10), now, 30), TimeParts::ZERO);
}

#[test]
fn units_wrap_at_their_bases() {
    let remaining = Duration::seconds(2 * 86_400 + 23 * 3_600 + 59 * 60 + 59);
    assert_eq!(
        TimeParts::from_remaining(remaining),
        TimeParts {
            days: 2,
            hours: 23,
            minutes: 59,
            seconds: 59,
        }
    );
}

#[test]
fn day_counts_saturate_at_two_digits() {
    let remaining = Duration::seconds(150 * 86_400 + 3_600);
    let parts = TimeParts::from_remaining(remaining);
    assert_eq!(parts.days, 99);
    assert_eq!(parts.hours, 1);
}

#[test]
fn exact_zero_is_all_zeros() {
    assert_eq!(TimeParts::from_remaining(Duration::ZERO), TimeParts::ZERO);
}

#[test]
fn unit_accessor_matches_fields() {
    use crate::config::model::TimeUnit;
    let parts = TimeParts {
        days: 1,
        hours: 2,
        minutes: 3,
        seconds: 4,
    };
    assert_eq!(parts.for_unit(TimeUnit::Days), 1);
    assert_eq!(parts.for_unit(TimeUnit::Hours), 2);
    assert_eq!(parts.for_unit(TimeUnit::Minutes), 3);
    assert_eq!(parts.for_unit(TimeUnit::Seconds), 4);
}
