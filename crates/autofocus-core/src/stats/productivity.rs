//! Daily productivity scoring and trend classification.
//!
//! The daily score is an additive weighted sum with each term capped before
//! summation, so no single factor can dominate:
//!
//! - up to 40 points for focus time (4 hours saturates)
//! - up to 20 points for few distractions (0 blocks = max, 10+ = none)
//! - up to 20 points for completed sessions (5 saturates)
//! - up to 20 points for peak-hours work (4 hours saturates)
//!
//! Trend compares only the two most recent ISO weeks, with ±10% bands.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::clock::{month_key, week_key};

/// One day's raw counters plus the derived score.
///
/// All fields default to zero so sparse or older documents deserialize
/// without error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyStat {
    /// Focus minutes accumulated this day.
    pub focus_time: u32,
    /// Block events this day.
    pub blocked_count: u32,
    /// Focus sessions completed this day.
    pub sessions: u32,
    /// Hours worked during peak hours (09:00-17:00).
    pub peak_hours_work: u32,
    /// Derived productivity score, 0-100.
    pub productivity_score: u8,
}

/// Compute the 0-100 productivity score for one day.
pub fn daily_productivity(day: &DailyStat) -> u8 {
    let focus = (day.focus_time as f64 / 240.0).min(1.0) * 40.0;
    let distraction = ((10.0 - day.blocked_count as f64).max(0.0) / 10.0).min(1.0) * 20.0;
    let sessions = (day.sessions as f64 / 5.0).min(1.0) * 20.0;
    let peak = (day.peak_hours_work as f64 / 4.0).min(1.0) * 20.0;

    (focus + distraction + sessions + peak).round() as u8
}

/// Week-over-week productivity direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// Date-keyed daily buckets, ordered ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailySeries(BTreeMap<NaiveDate, DailyStat>);

impl DailySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyStat> {
        self.0.get(&date)
    }

    /// The day's bucket, created zeroed when absent.
    pub fn day_mut(&mut self, date: NaiveDate) -> &mut DailyStat {
        self.0.entry(date).or_default()
    }

    pub fn insert(&mut self, date: NaiveDate, stat: DailyStat) {
        self.0.insert(date, stat);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DailyStat)> {
        self.0.iter()
    }

    /// Recorded dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recent recorded day, if any.
    pub fn latest(&self) -> Option<(&NaiveDate, &DailyStat)> {
        self.0.iter().next_back()
    }

    /// Highest single-day block count in the series.
    pub fn max_daily_blocked(&self) -> u32 {
        self.0.values().map(|d| d.blocked_count).max().unwrap_or(0)
    }

    /// Average daily score per ISO week, keyed `YYYY-Www`. Key order is
    /// chronological (weeks are zero-padded).
    pub fn weekly_averages(&self) -> BTreeMap<String, f64> {
        self.grouped_averages(week_key)
    }

    /// Average daily score per calendar month, keyed `YYYY-MM`.
    pub fn monthly_averages(&self) -> BTreeMap<String, f64> {
        self.grouped_averages(month_key)
    }

    fn grouped_averages(&self, key_fn: impl Fn(NaiveDate) -> String) -> BTreeMap<String, f64> {
        let mut groups: BTreeMap<String, (f64, u32)> = BTreeMap::new();
        for (date, stat) in &self.0 {
            let entry = groups.entry(key_fn(*date)).or_insert((0.0, 0));
            entry.0 += daily_productivity(stat) as f64;
            entry.1 += 1;
        }
        groups
            .into_iter()
            .map(|(key, (sum, count))| (key, sum / count as f64))
            .collect()
    }

    /// Classify the week-over-week trend from the two most recent ISO
    /// weeks. Fewer than two weeks of data is `Stable`.
    pub fn trend(&self) -> Trend {
        let weekly = self.weekly_averages();
        let mut recent = weekly.values().rev();
        let (Some(latest), Some(previous)) = (recent.next(), recent.next()) else {
            return Trend::Stable;
        };

        if *latest > previous * 1.1 {
            Trend::Improving
        } else if *latest < previous * 0.9 {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }
}

impl FromIterator<(NaiveDate, DailyStat)> for DailySeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DailyStat)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
