//! Usage statistics: daily buckets, productivity scoring, trends, and the
//! focus-session history.
//!
//! The aggregate snapshot ([`StatsSnapshot`]) mirrors the persisted
//! document's `stats` object. Every counter treats an absent field as zero
//! (serde defaults) -- missing data is never an error here.

mod productivity;
mod sessions;

pub use productivity::{daily_productivity, DailySeries, DailyStat, Trend};
pub use sessions::{FocusSession, SessionHistory, SessionKind, MAX_SESSIONS};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated usage statistics, as persisted under the document's `stats`
/// key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSnapshot {
    /// Total block events, all time.
    pub blocked_count: u32,
    /// Total focus minutes, all time.
    pub total_focus_time: u32,
    /// Block events per domain.
    pub blocked_sites: BTreeMap<String, u32>,
    /// FIFO-capped session log.
    pub focus_sessions: SessionHistory,
    /// Per-day buckets keyed by ISO date.
    pub daily: DailySeries,
}

impl StatsSnapshot {
    /// Record one block event against `domain` on `date`.
    pub fn record_block(&mut self, domain: &str, date: NaiveDate) {
        self.blocked_count += 1;
        *self.blocked_sites.entry(domain.to_string()).or_insert(0) += 1;

        let day = self.daily.day_mut(date);
        day.blocked_count += 1;
        day.productivity_score = daily_productivity(day);
    }

    /// Record a completed focus session, updating totals and the session's
    /// daily bucket (focus time, session count, peak-hours work, score).
    pub fn record_session(&mut self, session: FocusSession) {
        let date = session.start_time.date();

        self.total_focus_time += session.duration;
        self.focus_sessions.push(session);

        let peak_hours = self.focus_sessions.peak_minutes_on(date) / 60;
        let day = self.daily.day_mut(date);
        day.focus_time += session.duration;
        day.sessions += 1;
        day.peak_hours_work = peak_hours;
        day.productivity_score = daily_productivity(day);
    }

    /// Total recorded sessions (bounded by the history cap).
    pub fn total_sessions(&self) -> u32 {
        self.focus_sessions.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session_at(y: i32, m: u32, d: u32, hour: u32, duration: u32) -> FocusSession {
        FocusSession {
            start_time: date(y, m, d).and_hms_opt(hour, 0, 0).unwrap(),
            duration,
            kind: SessionKind::Pomodoro,
        }
    }

    #[test]
    fn test_record_block_updates_totals_and_day() {
        let mut stats = StatsSnapshot::default();
        stats.record_block("youtube.com", date(2025, 1, 6));
        stats.record_block("youtube.com", date(2025, 1, 6));
        stats.record_block("reddit.com", date(2025, 1, 7));

        assert_eq!(stats.blocked_count, 3);
        assert_eq!(stats.blocked_sites["youtube.com"], 2);
        assert_eq!(stats.blocked_sites["reddit.com"], 1);
        assert_eq!(stats.daily.get(date(2025, 1, 6)).unwrap().blocked_count, 2);
        assert_eq!(stats.daily.get(date(2025, 1, 7)).unwrap().blocked_count, 1);
    }

    #[test]
    fn test_record_session_updates_daily_bucket() {
        let mut stats = StatsSnapshot::default();
        stats.record_session(session_at(2025, 1, 6, 10, 25));
        stats.record_session(session_at(2025, 1, 6, 14, 50));
        // Outside peak hours (09:00-17:00).
        stats.record_session(session_at(2025, 1, 6, 21, 60));

        let day = stats.daily.get(date(2025, 1, 6)).unwrap();
        assert_eq!(day.focus_time, 135);
        assert_eq!(day.sessions, 3);
        // 75 peak minutes -> 1 full hour.
        assert_eq!(day.peak_hours_work, 1);
        assert_eq!(stats.total_focus_time, 135);
        assert_eq!(stats.total_sessions(), 3);
        assert!(day.productivity_score > 0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        // A sparse document from an older version must still parse.
        let json = r#"{ "blockedCount": 7 }"#;
        let stats: StatsSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(stats.blocked_count, 7);
        assert_eq!(stats.total_focus_time, 0);
        assert!(stats.blocked_sites.is_empty());
        assert!(stats.daily.is_empty());
        assert_eq!(stats.focus_sessions.len(), 0);
    }
}
