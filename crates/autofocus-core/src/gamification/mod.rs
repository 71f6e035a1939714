//! XP, levels, badges, trophies, and challenges.
//!
//! [`GamificationState`] is the persisted progression record. Like the rest
//! of the library it is advanced by pure value-level operations: the caller
//! loads the document, calls [`GamificationState::login_tick`] and the
//! recording methods as events happen, runs [`GamificationState::apply_unlocks`]
//! afterwards, and persists the result.

mod badges;
mod challenges;
mod level;

pub use badges::{
    newly_earned_badges, newly_earned_trophies, BadgeCategory, BadgeDef, Condition, EarnedRecord,
    Rarity, StatsView, TrophyDef, BADGES, TROPHIES,
};
pub use challenges::{
    Cadence, ChallengeBoard, ChallengeInstance, ChallengeMetric, ChallengeTemplate,
    CHALLENGE_TEMPLATES,
};
pub use level::{level_for_xp, rank_for_score, LevelDef, ProductivityRank, LEVELS, PRODUCTIVITY_RANKS};

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::stats::StatsSnapshot;
use crate::streak::advance_login_streak;

/// The persisted progression record, as stored under the document's
/// `gamification` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GamificationState {
    /// Cumulative XP. The level is always derived, never stored.
    pub xp: u32,
    /// Current login streak in days.
    pub streak: u32,
    /// Date of the most recent login tick.
    pub last_login: Option<NaiveDate>,
    /// Earned badges, append-only, in earn order.
    pub achievements: Vec<EarnedRecord>,
    /// Earned trophies, append-only, in earn order.
    pub trophies: Vec<EarnedRecord>,
    /// Live daily/weekly challenges.
    pub challenges: ChallengeBoard,
}

/// What a login tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Streak after the tick.
    pub streak: u32,
    /// True when this tick moved the streak (first login of the day).
    pub streak_advanced: bool,
}

/// Everything newly unlocked by one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unlocks {
    pub badges: Vec<&'static BadgeDef>,
    pub trophies: Vec<&'static TrophyDef>,
    /// XP credited for the new badges and trophies combined.
    pub xp_gained: u32,
}

impl Unlocks {
    pub fn is_empty(&self) -> bool {
        self.badges.is_empty() && self.trophies.is_empty()
    }
}

impl GamificationState {
    /// Level band for the current XP total.
    pub fn level(&self) -> &'static LevelDef {
        level_for_xp(self.xp)
    }

    /// Process a login on `today`: advance the streak and rotate any
    /// challenge cadence whose period rolled over. Safe to call many times
    /// a day; only the first call per day moves anything.
    pub fn login_tick(&mut self, today: NaiveDate, rng: &mut impl Rng) -> LoginOutcome {
        let new_streak = advance_login_streak(self.streak, self.last_login, today);
        let advanced = self.last_login != Some(today);
        self.streak = new_streak;
        self.last_login = Some(today);
        self.challenges.reset_if_due(today, rng);
        LoginOutcome { streak: new_streak, streak_advanced: advanced }
    }

    /// Feed a metric event into the live challenges, crediting any XP they
    /// pay out. Returns the XP earned now.
    pub fn record_progress(&mut self, metric: ChallengeMetric, amount: u32) -> u32 {
        let earned = self.challenges.record_progress(metric, amount);
        self.xp += earned;
        earned
    }

    /// Evaluate badge and trophy conditions against `stats`, recording and
    /// crediting everything newly earned. Idempotent: a second call with
    /// the same inputs unlocks nothing.
    ///
    /// Badges are committed before trophies so a trophy gated on the badge
    /// count sees this pass's badges.
    pub fn apply_unlocks(&mut self, stats: &StatsSnapshot, today: NaiveDate) -> Unlocks {
        let earned_badges: BTreeSet<String> =
            self.achievements.iter().map(|r| r.id.clone()).collect();

        let badges = newly_earned_badges(&self.stats_view(stats), &earned_badges);
        let mut xp_gained = 0;
        for badge in &badges {
            self.achievements.push(EarnedRecord {
                id: badge.id.to_string(),
                date_earned: today,
            });
            xp_gained += badge.xp_reward;
        }

        let earned_trophies: BTreeSet<String> =
            self.trophies.iter().map(|r| r.id.clone()).collect();
        let trophies = newly_earned_trophies(&self.stats_view(stats), &earned_trophies);
        for trophy in &trophies {
            self.trophies.push(EarnedRecord {
                id: trophy.id.to_string(),
                date_earned: today,
            });
            xp_gained += trophy.xp_reward;
        }

        self.xp += xp_gained;
        Unlocks { badges, trophies, xp_gained }
    }

    /// Assemble the read-only view conditions evaluate against.
    pub fn stats_view<'a>(&self, stats: &'a StatsSnapshot) -> StatsView<'a> {
        let latest_score = stats
            .daily
            .latest()
            .map(|(_, day)| crate::stats::daily_productivity(day))
            .unwrap_or(0);
        StatsView {
            total_sessions: stats.total_sessions(),
            total_focus_minutes: stats.total_focus_time,
            total_blocked: stats.blocked_count,
            login_streak: self.streak,
            productivity_score: latest_score,
            daily_challenges_completed: self.challenges.daily_completed,
            weekly_challenges_completed: self.challenges.weekly_completed,
            badges_earned: self.achievements.len() as u32,
            series: &stats.daily,
            sessions: &stats.focus_sessions,
        }
    }
}
