//! Consecutive-day run detection over sparse date-keyed series.
//!
//! One generic algorithm backs every streak in the app: login streaks,
//! high-productivity streaks, and distraction-free streaks differ only in
//! their predicate. Runs count *calendar-adjacent* qualifying days; a
//! missing date in the sparse series breaks a run exactly like a day that
//! fails the predicate.

use chrono::NaiveDate;

use crate::stats::{DailySeries, DailyStat};

/// Length of the longest run of calendar-consecutive days satisfying
/// `predicate`.
///
/// Days failing the predicate reset the run *and* clear the adjacency
/// anchor, so a qualifying day after any gap starts a fresh run of 1.
pub fn longest_run<F>(series: &DailySeries, predicate: F) -> u32
where
    F: Fn(&DailyStat) -> bool,
{
    let mut max_run = 0u32;
    let mut current = 0u32;
    let mut anchor: Option<NaiveDate> = None;

    for (date, stat) in series.iter() {
        if predicate(stat) {
            current = match anchor {
                Some(prev) if prev.succ_opt() == Some(*date) => current + 1,
                _ => 1,
            };
            anchor = Some(*date);
            max_run = max_run.max(current);
        } else {
            current = 0;
            anchor = None;
        }
    }

    max_run
}

/// True iff the series shows a comeback: a gap of more than 7 calendar
/// days between adjacent recorded dates, followed by at least 3
/// calendar-consecutive recorded days starting at or after the gap's end.
///
/// Requires at least 10 recorded days before attempting detection, to
/// avoid false positives on sparse early data.
pub fn detect_comeback(series: &DailySeries) -> bool {
    let dates: Vec<NaiveDate> = series.dates().collect();
    if dates.len() < 10 {
        return false;
    }

    let Some(gap_end) = (1..dates.len())
        .find(|&i| (dates[i] - dates[i - 1]).num_days() > 7)
    else {
        return false;
    };

    let mut run = 1u32;
    for i in (gap_end + 1)..dates.len() {
        if dates[i - 1].succ_opt() == Some(dates[i]) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

/// Advance the live login streak for a login on `today`.
///
/// Returns the new streak count; the caller records `today` as the new
/// last-login date. First login starts at 1; a login exactly one day after
/// the last increments; a longer gap resets to 1; a same-day (or
/// clock-skewed earlier) login leaves the streak unchanged.
pub fn advance_login_streak(current: u32, last_login: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(last) = last_login else {
        return 1;
    };

    match (today - last).num_days() {
        1 => current + 1,
        d if d > 1 => 1,
        _ => current,
    }
}
