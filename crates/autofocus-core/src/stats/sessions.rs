//! The focus-session log: a FIFO-capped history of completed sessions.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum sessions retained; the oldest is evicted first.
pub const MAX_SESSIONS: usize = 100;

/// Peak working hours window: sessions starting within 09:00-16:59 count
/// toward peak-hours work.
const PEAK_START_HOUR: u32 = 9;
const PEAK_END_HOUR: u32 = 17;

/// How a focus session was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Pomodoro,
    Manual,
}

/// A completed focus session. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    /// Local start time.
    pub start_time: NaiveDateTime,
    /// Duration in minutes.
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: SessionKind,
}

impl FocusSession {
    fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    fn is_weekend(&self) -> bool {
        matches!(self.start_time.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn in_peak_hours(&self) -> bool {
        (PEAK_START_HOUR..PEAK_END_HOUR).contains(&self.start_hour())
    }
}

/// Bounded append-only session log with oldest-first eviction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHistory(VecDeque<FocusSession>);

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a session, evicting the oldest entry at capacity.
    pub fn push(&mut self, session: FocusSession) {
        if self.0.len() == MAX_SESSIONS {
            self.0.pop_front();
        }
        self.0.push_back(session);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FocusSession> {
        self.0.iter()
    }

    /// Sessions that started strictly before `hour` (the "early bird"
    /// tally).
    pub fn sessions_before_hour(&self, hour: u32) -> u32 {
        self.0.iter().filter(|s| s.start_hour() < hour).count() as u32
    }

    /// Sessions that started at or after `hour` (the "night owl" tally).
    pub fn sessions_at_or_after_hour(&self, hour: u32) -> u32 {
        self.0.iter().filter(|s| s.start_hour() >= hour).count() as u32
    }

    /// Sessions started on a Saturday or Sunday.
    pub fn weekend_sessions(&self) -> u32 {
        self.0.iter().filter(|s| s.is_weekend()).count() as u32
    }

    /// Minutes of peak-hours focus recorded on `date`.
    pub fn peak_minutes_on(&self, date: NaiveDate) -> u32 {
        self.0
            .iter()
            .filter(|s| s.start_time.date() == date && s.in_peak_hours())
            .map(|s| s.duration)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(day: u32, hour: u32, duration: u32) -> FocusSession {
        FocusSession {
            start_time: NaiveDate::from_ymd_opt(2025, 1, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            duration,
            kind: SessionKind::Manual,
        }
    }

    #[test]
    fn test_fifo_eviction_at_cap() {
        let mut history = SessionHistory::new();
        for i in 0..(MAX_SESSIONS + 5) {
            history.push(session(1, 10, i as u32 + 1));
        }

        assert_eq!(history.len(), MAX_SESSIONS);
        // The five oldest (durations 1..=5) were evicted.
        assert_eq!(history.iter().next().unwrap().duration, 6);
        assert_eq!(history.iter().last().unwrap().duration, 105);
    }

    #[test]
    fn test_time_of_day_tallies() {
        let mut history = SessionHistory::new();
        history.push(session(6, 7, 25)); // early
        history.push(session(6, 8, 25)); // early
        history.push(session(6, 12, 25));
        history.push(session(6, 20, 25)); // evening
        history.push(session(6, 22, 25)); // evening

        assert_eq!(history.sessions_before_hour(9), 2);
        assert_eq!(history.sessions_at_or_after_hour(20), 2);
    }

    #[test]
    fn test_weekend_tally() {
        let mut history = SessionHistory::new();
        history.push(session(4, 10, 25)); // Saturday Jan 4
        history.push(session(5, 10, 25)); // Sunday Jan 5
        history.push(session(6, 10, 25)); // Monday Jan 6

        assert_eq!(history.weekend_sessions(), 2);
    }

    #[test]
    fn test_peak_minutes_per_date() {
        let mut history = SessionHistory::new();
        history.push(session(6, 9, 25)); // peak
        history.push(session(6, 16, 50)); // peak
        history.push(session(6, 17, 30)); // boundary: 17:00 is past peak
        history.push(session(7, 10, 40)); // other day

        assert_eq!(history.peak_minutes_on(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()), 75);
        assert_eq!(history.peak_minutes_on(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap()), 40);
    }

    #[test]
    fn test_wire_format_round_trip() {
        let s = session(6, 9, 25);
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["type"], "manual");
        assert_eq!(json["duration"], 25);

        let back: FocusSession = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
