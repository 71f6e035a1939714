//! Badge and trophy catalogs and their evaluator.
//!
//! Unlock conditions are plain data -- a tagged [`Condition`] enum
//! interpreted by one evaluator -- so the catalog is serializable and
//! testable instead of a table of opaque closures. Evaluation is a pure
//! scan in catalog order (which fixes notification order) and is
//! idempotent: an already-earned id is never re-emitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::stats::{daily_productivity, DailySeries, SessionHistory};
use crate::streak::{detect_comeback, longest_run};

/// A declarative unlock condition over the stats snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Total completed focus sessions.
    TotalSessions { at_least: u32 },
    /// Total accumulated focus minutes.
    TotalFocusMinutes { at_least: u32 },
    /// Current login streak length in days.
    LoginStreak { at_least: u32 },
    /// Total block events, all time.
    BlockedTotal { at_least: u32 },
    /// Highest single-day block count.
    MaxDailyBlocks { at_least: u32 },
    /// Today's productivity score.
    ProductivityScore { at_least: u8 },
    /// Longest run of days with a score at or above `threshold`.
    HighProductivityRun { threshold: u8, days: u32 },
    /// Longest run of days with zero block events.
    DistractionFreeRun { days: u32 },
    /// A return to activity after a long pause.
    Comeback,
    /// Sessions started before `hour`.
    SessionsBeforeHour { hour: u32, at_least: u32 },
    /// Sessions started at or after `hour`.
    SessionsAtOrAfterHour { hour: u32, at_least: u32 },
    /// Sessions started on a weekend.
    WeekendSessions { at_least: u32 },
    /// Daily challenges completed, all time.
    DailyChallengesCompleted { at_least: u32 },
    /// Weekly challenges completed, all time.
    WeeklyChallengesCompleted { at_least: u32 },
    /// Challenges of either cadence completed, all time.
    ChallengesCompleted { at_least: u32 },
    /// Standard badges earned so far.
    BadgesEarned { at_least: u32 },
}

/// Read-only snapshot of everything conditions can observe.
#[derive(Debug, Clone, Copy)]
pub struct StatsView<'a> {
    pub total_sessions: u32,
    pub total_focus_minutes: u32,
    pub total_blocked: u32,
    pub login_streak: u32,
    /// Productivity score of the most recent day, 0 when no data.
    pub productivity_score: u8,
    pub daily_challenges_completed: u32,
    pub weekly_challenges_completed: u32,
    pub badges_earned: u32,
    pub series: &'a DailySeries,
    pub sessions: &'a SessionHistory,
}

impl Condition {
    /// Interpret this condition against a stats view.
    pub fn holds(&self, view: &StatsView<'_>) -> bool {
        match *self {
            Condition::TotalSessions { at_least } => view.total_sessions >= at_least,
            Condition::TotalFocusMinutes { at_least } => view.total_focus_minutes >= at_least,
            Condition::LoginStreak { at_least } => view.login_streak >= at_least,
            Condition::BlockedTotal { at_least } => view.total_blocked >= at_least,
            Condition::MaxDailyBlocks { at_least } => view.series.max_daily_blocked() >= at_least,
            Condition::ProductivityScore { at_least } => view.productivity_score >= at_least,
            Condition::HighProductivityRun { threshold, days } => {
                longest_run(view.series, |d| daily_productivity(d) >= threshold) >= days
            }
            Condition::DistractionFreeRun { days } => {
                longest_run(view.series, |d| d.blocked_count == 0) >= days
            }
            Condition::Comeback => detect_comeback(view.series),
            Condition::SessionsBeforeHour { hour, at_least } => {
                view.sessions.sessions_before_hour(hour) >= at_least
            }
            Condition::SessionsAtOrAfterHour { hour, at_least } => {
                view.sessions.sessions_at_or_after_hour(hour) >= at_least
            }
            Condition::WeekendSessions { at_least } => {
                view.sessions.weekend_sessions() >= at_least
            }
            Condition::DailyChallengesCompleted { at_least } => {
                view.daily_challenges_completed >= at_least
            }
            Condition::WeeklyChallengesCompleted { at_least } => {
                view.weekly_challenges_completed >= at_least
            }
            Condition::ChallengesCompleted { at_least } => {
                view.daily_challenges_completed + view.weekly_challenges_completed >= at_least
            }
            Condition::BadgesEarned { at_least } => view.badges_earned >= at_least,
        }
    }
}

/// Badge grouping for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    Focus,
    Time,
    Streak,
    Block,
    Productivity,
    TimeOfDay,
    Challenge,
    Special,
}

/// A standard badge definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: BadgeCategory,
    pub icon: &'static str,
    pub condition: Condition,
    pub xp_reward: u32,
}

/// Trophy rarity, from least to most exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// A trophy: a major, rare achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophyDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    pub condition: Condition,
    pub xp_reward: u32,
}

/// The standard badge catalog. Order is the notification order.
pub const BADGES: &[BadgeDef] = &[
    // Focus sessions
    BadgeDef {
        id: "focus_starter",
        name: "First Steps",
        description: "Complete your first focus session",
        category: BadgeCategory::Focus,
        icon: "🏁",
        condition: Condition::TotalSessions { at_least: 1 },
        xp_reward: 20,
    },
    BadgeDef {
        id: "focus_regular",
        name: "Regular Focus",
        description: "Complete 10 focus sessions",
        category: BadgeCategory::Focus,
        icon: "⏱️",
        condition: Condition::TotalSessions { at_least: 10 },
        xp_reward: 50,
    },
    BadgeDef {
        id: "focus_expert",
        name: "Focus Expert",
        description: "Complete 50 focus sessions",
        category: BadgeCategory::Focus,
        icon: "⏳",
        condition: Condition::TotalSessions { at_least: 50 },
        xp_reward: 150,
    },
    BadgeDef {
        id: "focus_master",
        name: "Focus Master",
        description: "Complete 100 focus sessions",
        category: BadgeCategory::Focus,
        icon: "🧠",
        condition: Condition::TotalSessions { at_least: 100 },
        xp_reward: 300,
    },
    // Accumulated focus time
    BadgeDef {
        id: "time_hour",
        name: "One Focused Hour",
        description: "Accumulate 1 hour of focus time",
        category: BadgeCategory::Time,
        icon: "🕐",
        condition: Condition::TotalFocusMinutes { at_least: 60 },
        xp_reward: 20,
    },
    BadgeDef {
        id: "time_day",
        name: "A Day of Focus",
        description: "Accumulate 24 hours of focus time",
        category: BadgeCategory::Time,
        icon: "📅",
        condition: Condition::TotalFocusMinutes { at_least: 1440 },
        xp_reward: 100,
    },
    BadgeDef {
        id: "time_week",
        name: "A Week of Focus",
        description: "Accumulate 7 days of focus time",
        category: BadgeCategory::Time,
        icon: "📆",
        condition: Condition::TotalFocusMinutes { at_least: 10080 },
        xp_reward: 300,
    },
    // Login streaks
    BadgeDef {
        id: "streak_3",
        name: "On a Roll",
        description: "Keep a 3-day streak",
        category: BadgeCategory::Streak,
        icon: "🔥",
        condition: Condition::LoginStreak { at_least: 3 },
        xp_reward: 30,
    },
    BadgeDef {
        id: "streak_7",
        name: "Perfect Week",
        description: "Keep a 7-day streak",
        category: BadgeCategory::Streak,
        icon: "🔥🔥",
        condition: Condition::LoginStreak { at_least: 7 },
        xp_reward: 70,
    },
    BadgeDef {
        id: "streak_14",
        name: "Two Weeks Strong",
        description: "Keep a 14-day streak",
        category: BadgeCategory::Streak,
        icon: "🔥🔥🔥",
        condition: Condition::LoginStreak { at_least: 14 },
        xp_reward: 150,
    },
    BadgeDef {
        id: "streak_30",
        name: "Habit Formed",
        description: "Keep a 30-day streak",
        category: BadgeCategory::Streak,
        icon: "🔥💯",
        condition: Condition::LoginStreak { at_least: 30 },
        xp_reward: 300,
    },
    // Blocking
    BadgeDef {
        id: "block_first",
        name: "First Barrier",
        description: "Block your first distraction",
        category: BadgeCategory::Block,
        icon: "🛑",
        condition: Condition::BlockedTotal { at_least: 1 },
        xp_reward: 10,
    },
    BadgeDef {
        id: "block_10",
        name: "Focus Guardian",
        description: "Block 10 distraction attempts",
        category: BadgeCategory::Block,
        icon: "🛡️",
        condition: Condition::BlockedTotal { at_least: 10 },
        xp_reward: 30,
    },
    BadgeDef {
        id: "block_50",
        name: "Wall of Steel",
        description: "Block 50 distraction attempts",
        category: BadgeCategory::Block,
        icon: "🔒",
        condition: Condition::BlockedTotal { at_least: 50 },
        xp_reward: 100,
    },
    BadgeDef {
        id: "block_100",
        name: "Fortress",
        description: "Block 100 distraction attempts",
        category: BadgeCategory::Block,
        icon: "🏰",
        condition: Condition::BlockedTotal { at_least: 100 },
        xp_reward: 200,
    },
    BadgeDef {
        id: "block_strong",
        name: "Iron Resolve",
        description: "Block 100 distraction attempts in a single day",
        category: BadgeCategory::Block,
        icon: "⛔",
        condition: Condition::MaxDailyBlocks { at_least: 100 },
        xp_reward: 250,
    },
    // Productivity score
    BadgeDef {
        id: "productivity_bronze",
        name: "Bronze Productivity",
        description: "Reach a productivity score of 40",
        category: BadgeCategory::Productivity,
        icon: "🥉",
        condition: Condition::ProductivityScore { at_least: 40 },
        xp_reward: 30,
    },
    BadgeDef {
        id: "productivity_silver",
        name: "Silver Productivity",
        description: "Reach a productivity score of 65",
        category: BadgeCategory::Productivity,
        icon: "🥈",
        condition: Condition::ProductivityScore { at_least: 65 },
        xp_reward: 70,
    },
    BadgeDef {
        id: "productivity_gold",
        name: "Gold Productivity",
        description: "Reach a productivity score of 85",
        category: BadgeCategory::Productivity,
        icon: "🥇",
        condition: Condition::ProductivityScore { at_least: 85 },
        xp_reward: 150,
    },
    BadgeDef {
        id: "productivity_diamond",
        name: "Diamond Productivity",
        description: "Reach a productivity score of 95",
        category: BadgeCategory::Productivity,
        icon: "💎",
        condition: Condition::ProductivityScore { at_least: 95 },
        xp_reward: 250,
    },
    // Time of day
    BadgeDef {
        id: "early_bird",
        name: "Early Bird",
        description: "Complete 5 focus sessions before 9am",
        category: BadgeCategory::TimeOfDay,
        icon: "🌅",
        condition: Condition::SessionsBeforeHour { hour: 9, at_least: 5 },
        xp_reward: 50,
    },
    BadgeDef {
        id: "night_owl",
        name: "Night Owl",
        description: "Complete 5 focus sessions after 8pm",
        category: BadgeCategory::TimeOfDay,
        icon: "🦉",
        condition: Condition::SessionsAtOrAfterHour { hour: 20, at_least: 5 },
        xp_reward: 50,
    },
    BadgeDef {
        id: "weekend_warrior",
        name: "Weekend Warrior",
        description: "Complete 5 focus sessions on weekends",
        category: BadgeCategory::TimeOfDay,
        icon: "🏋️",
        condition: Condition::WeekendSessions { at_least: 5 },
        xp_reward: 50,
    },
    // Challenges
    BadgeDef {
        id: "challenge_daily",
        name: "Daily Challenger",
        description: "Complete 5 daily challenges",
        category: BadgeCategory::Challenge,
        icon: "📋",
        condition: Condition::DailyChallengesCompleted { at_least: 5 },
        xp_reward: 60,
    },
    BadgeDef {
        id: "challenge_weekly",
        name: "Weekly Challenger",
        description: "Complete 3 weekly challenges",
        category: BadgeCategory::Challenge,
        icon: "📊",
        condition: Condition::WeeklyChallengesCompleted { at_least: 3 },
        xp_reward: 90,
    },
    // Special
    BadgeDef {
        id: "perfectionist",
        name: "Perfectionist",
        description: "Keep a 90+ productivity score for 7 consecutive days",
        category: BadgeCategory::Special,
        icon: "💯",
        condition: Condition::HighProductivityRun { threshold: 90, days: 7 },
        xp_reward: 300,
    },
    BadgeDef {
        id: "comeback",
        name: "The Comeback",
        description: "Return after a week-long pause and stay active 3 days",
        category: BadgeCategory::Special,
        icon: "🔄",
        condition: Condition::Comeback,
        xp_reward: 100,
    },
];

/// The trophy catalog.
pub const TROPHIES: &[TrophyDef] = &[
    TrophyDef {
        id: "iron_will",
        name: "Iron Will",
        description: "Keep a 90+ productivity score for 30 consecutive days",
        icon: "🏆",
        rarity: Rarity::Rare,
        condition: Condition::HighProductivityRun { threshold: 90, days: 30 },
        xp_reward: 500,
    },
    TrophyDef {
        id: "time_lord",
        name: "Time Lord",
        description: "Accumulate 100 days of total focus time",
        icon: "⏳",
        rarity: Rarity::Epic,
        condition: Condition::TotalFocusMinutes { at_least: 144_000 },
        xp_reward: 750,
    },
    TrophyDef {
        id: "distractionless",
        name: "Distractionless",
        description: "Spend 7 consecutive days without a single distraction attempt",
        icon: "🛡️",
        rarity: Rarity::Rare,
        condition: Condition::DistractionFreeRun { days: 7 },
        xp_reward: 500,
    },
    TrophyDef {
        id: "challenge_master",
        name: "Challenge Master",
        description: "Complete 50 challenges in total",
        icon: "🏅",
        rarity: Rarity::Uncommon,
        condition: Condition::ChallengesCompleted { at_least: 50 },
        xp_reward: 300,
    },
    TrophyDef {
        id: "focus_grandmaster",
        name: "Focus Grandmaster",
        description: "Complete 1000 focus sessions",
        icon: "👑",
        rarity: Rarity::Legendary,
        condition: Condition::TotalSessions { at_least: 1000 },
        xp_reward: 1000,
    },
    TrophyDef {
        id: "year_streak",
        name: "Year of Fire",
        description: "Keep a 365-day streak",
        icon: "🔥👑",
        rarity: Rarity::Legendary,
        condition: Condition::LoginStreak { at_least: 365 },
        xp_reward: 1000,
    },
    TrophyDef {
        id: "collector",
        name: "Collector",
        description: "Earn every standard badge",
        icon: "🎖️",
        rarity: Rarity::Epic,
        condition: Condition::BadgesEarned { at_least: BADGES.len() as u32 },
        xp_reward: 750,
    },
];

/// A permanently-earned achievement record. Append-only; an id appears at
/// most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedRecord {
    pub id: String,
    pub date_earned: NaiveDate,
}

/// Badges whose conditions now hold and whose ids are not yet earned, in
/// catalog order.
pub fn newly_earned_badges(
    view: &StatsView<'_>,
    earned: &BTreeSet<String>,
) -> Vec<&'static BadgeDef> {
    BADGES
        .iter()
        .filter(|b| !earned.contains(b.id) && b.condition.holds(view))
        .collect()
}

/// Trophies whose conditions now hold and whose ids are not yet earned, in
/// catalog order.
pub fn newly_earned_trophies(
    view: &StatsView<'_>,
    earned: &BTreeSet<String>,
) -> Vec<&'static TrophyDef> {
    TROPHIES
        .iter()
        .filter(|t| !earned.contains(t.id) && t.condition.holds(view))
        .collect()
}
