//! # Auto-Focus Core Library
//!
//! This library provides the decision and progression logic for Auto-Focus,
//! a distraction-blocking productivity tool. All operations are pure,
//! synchronous computations over immutable state snapshots: the caller reads
//! a full document from storage, invokes the core, and writes back whatever
//! changed. The CLI binary is a thin harness over the same library.
//!
//! ## Architecture
//!
//! - **Schedule**: time-of-day/day-of-week window matching for scheduled
//!   blocking
//! - **Blocking**: the allow/block decision engine combining enable state,
//!   whitelist, blocklist, mode, and schedule
//! - **Stats**: daily productivity scoring, weekly/monthly aggregation,
//!   trend classification, and the capped focus-session history
//! - **Streak**: consecutive-day run detection over sparse date series
//! - **Gamification**: XP, levels, badge/trophy evaluation, and daily/weekly
//!   challenges
//! - **Storage**: the persisted JSON snapshot document and TOML configuration
//!
//! ## Key Components
//!
//! - [`decide`]: the blocking decision engine
//! - [`Schedule`]: active-window matching
//! - [`StatsSnapshot`]: accumulated usage statistics
//! - [`GamificationState`]: XP, streaks, achievements, challenges
//! - [`Document`]: the full persisted state snapshot

pub mod blocking;
pub mod clock;
pub mod error;
pub mod gamification;
pub mod schedule;
pub mod stats;
pub mod storage;
pub mod streak;

pub use blocking::{decide, BlockDecision, BlockingMode, DecisionReason, SiteList};
pub use clock::LocalMoment;
pub use error::{ConfigError, CoreError, Result, StorageError, ValidationError};
pub use gamification::{
    level_for_xp, ChallengeBoard, ChallengeInstance, Condition, GamificationState, LevelDef,
    Unlocks,
};
pub use schedule::{Schedule, TimeWindow};
pub use stats::{
    daily_productivity, DailySeries, DailyStat, FocusSession, SessionHistory, SessionKind,
    StatsSnapshot, Trend,
};
pub use storage::{Config, Document};
