//! The blocking decision engine.
//!
//! Given a domain and the current settings snapshot, decides whether the
//! navigation should be blocked right now. The precedence order is
//! load-bearing: the whitelist always wins over the blocklist, and the
//! schedule gates only the blocklist, never the whitelist.

use serde::{Deserialize, Serialize};

use crate::clock::LocalMoment;
use crate::schedule::Schedule;

/// Policy governing whether schedule constraints apply to the blocklist.
///
/// Only [`BlockingMode::Scheduled`] consults the schedule; every other mode
/// treats "should block now" as unconditionally true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockingMode {
    #[default]
    Standard,
    Scheduled,
    Strict,
    Pomodoro,
}

/// An ordered list of domain patterns (blocklist or whitelist).
///
/// Membership is substring containment: a domain matches an entry when the
/// domain string *contains* the entry. This is deliberately loose --
/// "amazon.com" matches "smile.amazon.com" but also
/// "notamazon.com.evil.test". Kept as-is for fidelity with the original
/// policy; see DESIGN.md for the stricter alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteList(Vec<String>);

impl SiteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `domain` contains any list entry.
    pub fn matches(&self, domain: &str) -> bool {
        self.0.iter().any(|entry| domain.contains(entry.as_str()))
    }

    /// Add an entry; returns false when it was already present.
    pub fn add(&mut self, entry: &str) -> bool {
        if self.0.iter().any(|e| e == entry) {
            return false;
        }
        self.0.push(entry.to_string());
        true
    }

    /// Remove an entry; returns false when it was absent.
    pub fn remove(&mut self, entry: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|e| e != entry);
        self.0.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SiteList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Why a decision came out the way it did. `block` alone carries the
/// contract; the reason feeds the notification sink and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// Blocking is globally disabled.
    Disabled,
    /// The domain matched a whitelist entry.
    Whitelisted,
    /// The domain matched the blocklist but the schedule is not active.
    OutsideSchedule,
    /// The domain matched the blocklist.
    Blocklisted,
    /// The domain matched neither list.
    NotListed,
}

/// Outcome of the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDecision {
    pub block: bool,
    pub reason: DecisionReason,
}

impl BlockDecision {
    fn allow(reason: DecisionReason) -> Self {
        Self {
            block: false,
            reason,
        }
    }

    fn block(reason: DecisionReason) -> Self {
        Self {
            block: true,
            reason,
        }
    }
}

/// Decide whether `domain` should be blocked right now.
///
/// Evaluation order, in strict precedence:
/// 1. Globally disabled -> allow.
/// 2. Whitelist match -> allow, regardless of the blocklist or schedule.
/// 3. Blocklist match, with the schedule active (or any mode other than
///    `Scheduled`) -> block.
/// 4. Otherwise -> allow.
pub fn decide(
    domain: &str,
    enabled: bool,
    whitelist: &SiteList,
    blocklist: &SiteList,
    mode: BlockingMode,
    schedule: &Schedule,
    moment: &LocalMoment,
) -> BlockDecision {
    if !enabled {
        return BlockDecision::allow(DecisionReason::Disabled);
    }
    if whitelist.matches(domain) {
        return BlockDecision::allow(DecisionReason::Whitelisted);
    }

    let schedule_active = mode != BlockingMode::Scheduled || schedule.is_active_at(moment);

    if blocklist.matches(domain) {
        if schedule_active {
            return BlockDecision::block(DecisionReason::Blocklisted);
        }
        return BlockDecision::allow(DecisionReason::OutsideSchedule);
    }

    BlockDecision::allow(DecisionReason::NotListed)
}
