//! # Weekly volume trend
//!
//! Buckets a set log into Monday-start calendar weeks and derives the
//! week-over-week trend. A Sunday session belongs to the week begun the
//! *previous* Monday, it never opens a week of its own.
//!
//! Progressive overload is operationalized as the most recent week moving
//! strictly more volume than the week before it.

use std::collections::BTreeMap;

use time::{Date, Duration, PrimitiveDateTime};
use volume::{LoggedSet, VolumeSummary, total_volume};

const WEEK_LAST_DAY: Duration = Duration::days(6);

/// One calendar week's aggregate within a training log.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklyVolume {
    /// Monday of the containing week.
    pub week_start: Date,
    /// Sunday of the containing week.
    pub week_end: Date,
    pub summary: VolumeSummary,
    /// Volume change versus the chronologically previous entry, in
    /// percent. `None` for the first entry and whenever the previous
    /// week's volume is zero.
    pub percent_change: Option<f64>,
}

/// Monday of the week containing `date`.
fn week_of(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_monday()))
}

/// Bucket timestamped sets into calendar weeks, ascending by week start.
///
/// Weeks without any logged set produce no entry; gaps stay gaps, and
/// `percent_change` always compares against the previous *logged* week.
pub fn weekly_volume(
    sets: impl IntoIterator<Item = (PrimitiveDateTime, LoggedSet)>,
) -> Vec<WeeklyVolume> {
    let mut weeks = BTreeMap::<Date, Vec<LoggedSet>>::new();

    for (performed_at, set) in sets {
        weeks
            .entry(week_of(performed_at.date()))
            .or_default()
            .push(set);
    }

    let mut result = Vec::with_capacity(weeks.len());
    let mut previous_volume = None;

    for (week_start, sets) in weeks {
        let summary = total_volume(sets);

        let percent_change = match previous_volume {
            Some(previous) if previous > 0.0 => {
                Some((summary.volume - previous) / previous * 100.0)
            }
            _ => None,
        };

        previous_volume = Some(summary.volume);

        result.push(WeeklyVolume {
            week_start,
            week_end: week_start + WEEK_LAST_DAY,
            summary,
            percent_change,
        });
    }

    result
}

/// Whether the last week's volume strictly exceeds the week before it.
///
/// Entries are compared in array order; [`weekly_volume`] already yields
/// them chronologically. Equal volume is not overload, and fewer than two
/// weeks is no trend at all.
pub fn is_progressive_overload(weeks: &[WeeklyVolume]) -> bool {
    match weeks {
        [.., previous, last] => last.summary.volume > previous.summary.volume,
        _ => false,
    }
}

/// Arithmetic mean of weekly volume across all entries.
pub fn average_weekly_volume(weeks: &[WeeklyVolume]) -> f64 {
    if weeks.is_empty() {
        return 0.0;
    }

    weeks.iter().map(|this| this.summary.volume).sum::<f64>() / weeks.len() as f64
}
