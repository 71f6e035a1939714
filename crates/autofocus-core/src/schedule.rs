//! Blocking schedules: active weekdays plus named time-of-day windows.
//!
//! A schedule is consulted only in `scheduled` blocking mode. Matching is
//! inclusive on both window bounds and uses caller-local wall-clock time.
//! Windows cannot cross midnight (e.g. 22:00-02:00); that is a known
//! limitation of the model, not a parsing bug.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::clock::LocalMoment;
use crate::error::ValidationError;

/// Parse an `HH:MM` string into minutes since midnight.
pub fn parse_hhmm(s: &str) -> Result<u16, ValidationError> {
    let invalid = || ValidationError::InvalidTime(s.to_string());

    let (h, m) = s.split_once(':').ok_or_else(invalid)?;
    let hours: u16 = h.parse().map_err(|_| invalid())?;
    let minutes: u16 = m.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as `HH:MM`.
pub fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Serde adapter storing minutes-since-midnight as `"HH:MM"` strings, the
/// format the snapshot document uses.
mod hhmm {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(minutes: &u16, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*minutes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s).map_err(D::Error::custom)
    }
}

/// A named time-of-day range, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Display label ("Morning", "Afternoon", ...).
    #[serde(rename = "name")]
    pub label: String,
    /// Window start, minutes since midnight.
    #[serde(with = "hhmm")]
    pub start: u16,
    /// Window end, minutes since midnight. Must not precede `start`.
    #[serde(with = "hhmm")]
    pub end: u16,
}

impl TimeWindow {
    /// Build a window from `HH:MM` strings, validating order.
    pub fn new(label: &str, start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::from_minutes(label, parse_hhmm(start)?, parse_hhmm(end)?)
    }

    /// Build a window from minute offsets, validating order.
    pub fn from_minutes(label: &str, start: u16, end: u16) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidTimeWindow {
                start: format_hhmm(start),
                end: format_hhmm(end),
            });
        }
        Ok(Self {
            label: label.to_string(),
            start,
            end,
        })
    }

    /// Inclusive containment test. A malformed window (start > end, e.g.
    /// from a hand-edited document) simply never matches.
    pub fn contains(&self, minutes: u16) -> bool {
        minutes >= self.start && minutes <= self.end
    }
}

/// A weekly blocking schedule.
///
/// Serialized as the document's `scheduleSettings` object: `days` uses
/// 0..=6 with 0 = Sunday, `timeRanges` carries the windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub enabled: bool,
    /// Active weekdays, 0 = Sunday .. 6 = Saturday.
    #[serde(rename = "days")]
    pub active_days: BTreeSet<u8>,
    #[serde(rename = "timeRanges")]
    pub windows: Vec<TimeWindow>,
}

impl Schedule {
    /// True iff the schedule is enabled, `moment`'s weekday is active, and
    /// the time of day falls inside at least one window. An empty window
    /// list never matches.
    pub fn is_active_at(&self, moment: &LocalMoment) -> bool {
        if !self.enabled || !self.active_days.contains(&moment.weekday_index()) {
            return false;
        }
        self.windows.iter().any(|w| w.contains(moment.minutes))
    }
}

impl Default for Schedule {
    /// The install-time default: disabled, Monday-Friday, morning and
    /// afternoon work windows.
    fn default() -> Self {
        Self {
            enabled: false,
            active_days: (1..=5).collect(),
            windows: vec![
                TimeWindow {
                    label: "Morning".into(),
                    start: 9 * 60,
                    end: 12 * 60,
                },
                TimeWindow {
                    label: "Afternoon".into(),
                    start: 14 * 60,
                    end: 18 * 60,
                },
            ],
        }
    }
}
