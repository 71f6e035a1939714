//! Rotating daily and weekly challenges.
//!
//! A fixed template catalog is sampled (two per cadence) at each reset.
//! Daily challenges reset on any calendar-date change, weekly ones when
//! the ISO week changes. Resets are wholesale: unfinished progress is
//! discarded, not carried over.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How often a challenge rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
}

/// What a challenge measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeMetric {
    /// Minutes of completed focus time.
    FocusMinutes,
    /// Focus sessions completed.
    SessionsCompleted,
    /// Distraction attempts blocked.
    BlocksResisted,
}

/// A challenge blueprint in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ChallengeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cadence: Cadence,
    pub metric: ChallengeMetric,
    pub target: u32,
    pub xp_reward: u32,
}

/// Challenge templates. Two per cadence are live at any time.
pub const CHALLENGE_TEMPLATES: &[ChallengeTemplate] = &[
    ChallengeTemplate {
        id: "daily_focus_60",
        name: "Steady Hour",
        description: "Focus for 60 minutes today",
        cadence: Cadence::Daily,
        metric: ChallengeMetric::FocusMinutes,
        target: 60,
        xp_reward: 30,
    },
    ChallengeTemplate {
        id: "daily_focus_120",
        name: "Deep Dive",
        description: "Focus for 2 hours today",
        cadence: Cadence::Daily,
        metric: ChallengeMetric::FocusMinutes,
        target: 120,
        xp_reward: 50,
    },
    ChallengeTemplate {
        id: "daily_sessions_3",
        name: "Triple Play",
        description: "Complete 3 focus sessions today",
        cadence: Cadence::Daily,
        metric: ChallengeMetric::SessionsCompleted,
        target: 3,
        xp_reward: 30,
    },
    ChallengeTemplate {
        id: "daily_sessions_5",
        name: "High Five",
        description: "Complete 5 focus sessions today",
        cadence: Cadence::Daily,
        metric: ChallengeMetric::SessionsCompleted,
        target: 5,
        xp_reward: 50,
    },
    ChallengeTemplate {
        id: "daily_blocks_5",
        name: "Hold the Line",
        description: "Resist 5 distraction attempts today",
        cadence: Cadence::Daily,
        metric: ChallengeMetric::BlocksResisted,
        target: 5,
        xp_reward: 20,
    },
    ChallengeTemplate {
        id: "daily_blocks_10",
        name: "Gatekeeper",
        description: "Resist 10 distraction attempts today",
        cadence: Cadence::Daily,
        metric: ChallengeMetric::BlocksResisted,
        target: 10,
        xp_reward: 35,
    },
    ChallengeTemplate {
        id: "weekly_focus_600",
        name: "Ten Hour Week",
        description: "Focus for 10 hours this week",
        cadence: Cadence::Weekly,
        metric: ChallengeMetric::FocusMinutes,
        target: 600,
        xp_reward: 150,
    },
    ChallengeTemplate {
        id: "weekly_focus_900",
        name: "Marathon Week",
        description: "Focus for 15 hours this week",
        cadence: Cadence::Weekly,
        metric: ChallengeMetric::FocusMinutes,
        target: 900,
        xp_reward: 200,
    },
    ChallengeTemplate {
        id: "weekly_sessions_20",
        name: "Twenty Strong",
        description: "Complete 20 focus sessions this week",
        cadence: Cadence::Weekly,
        metric: ChallengeMetric::SessionsCompleted,
        target: 20,
        xp_reward: 150,
    },
    ChallengeTemplate {
        id: "weekly_blocks_40",
        name: "Weekly Warden",
        description: "Resist 40 distraction attempts this week",
        cadence: Cadence::Weekly,
        metric: ChallengeMetric::BlocksResisted,
        target: 40,
        xp_reward: 100,
    },
];

/// A live challenge with its accumulated progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeInstance {
    pub template_id: String,
    pub name: String,
    pub description: String,
    pub metric: ChallengeMetric,
    pub target: u32,
    pub progress: u32,
    pub completed: bool,
    pub xp_reward: u32,
}

impl ChallengeInstance {
    fn from_template(template: &ChallengeTemplate) -> Self {
        Self {
            template_id: template.id.to_string(),
            name: template.name.to_string(),
            description: template.description.to_string(),
            metric: template.metric,
            target: template.target,
            progress: 0,
            completed: false,
            xp_reward: template.xp_reward,
        }
    }

    /// Add progress; returns the XP earned if this crossed the target.
    /// Progress latches at the target and a completed challenge pays once.
    fn advance(&mut self, amount: u32) -> u32 {
        if self.completed {
            return 0;
        }
        self.progress = (self.progress + amount).min(self.target);
        if self.progress >= self.target {
            self.completed = true;
            self.xp_reward
        } else {
            0
        }
    }
}

/// Challenges live per cadence at any time.
const LIVE_PER_CADENCE: usize = 2;

/// The live challenge set plus reset bookkeeping and lifetime completion
/// counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeBoard {
    pub daily: Vec<ChallengeInstance>,
    pub weekly: Vec<ChallengeInstance>,
    pub last_daily_reset: NaiveDate,
    pub last_weekly_reset: NaiveDate,
    pub daily_completed: u32,
    pub weekly_completed: u32,
}

impl Default for ChallengeBoard {
    fn default() -> Self {
        // Epoch reset dates force a rotation on the first tick.
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
        Self {
            daily: Vec::new(),
            weekly: Vec::new(),
            last_daily_reset: epoch,
            last_weekly_reset: epoch,
            daily_completed: 0,
            weekly_completed: 0,
        }
    }
}

fn sample(cadence: Cadence, rng: &mut impl Rng) -> Vec<ChallengeInstance> {
    let mut pool: Vec<&ChallengeTemplate> = CHALLENGE_TEMPLATES
        .iter()
        .filter(|t| t.cadence == cadence)
        .collect();
    pool.shuffle(rng);
    pool.into_iter()
        .take(LIVE_PER_CADENCE)
        .map(ChallengeInstance::from_template)
        .collect()
}

fn same_iso_week(a: NaiveDate, b: NaiveDate) -> bool {
    let (aw, bw) = (a.iso_week(), b.iso_week());
    aw.year() == bw.year() && aw.week() == bw.week()
}

impl ChallengeBoard {
    /// Rotate any cadence whose period has rolled over since its last
    /// reset. Unfinished challenges are replaced, not carried.
    pub fn reset_if_due(&mut self, today: NaiveDate, rng: &mut impl Rng) {
        if self.last_daily_reset != today {
            self.daily = sample(Cadence::Daily, rng);
            self.last_daily_reset = today;
        }
        if !same_iso_week(self.last_weekly_reset, today) {
            self.weekly = sample(Cadence::Weekly, rng);
            self.last_weekly_reset = today;
        }
    }

    /// Feed a metric event into every live challenge tracking it. Returns
    /// the total XP earned by challenges completed right now.
    pub fn record_progress(&mut self, metric: ChallengeMetric, amount: u32) -> u32 {
        let mut earned = 0;
        for challenge in self.daily.iter_mut().filter(|c| c.metric == metric) {
            let xp = challenge.advance(amount);
            if xp > 0 {
                self.daily_completed += 1;
                earned += xp;
            }
        }
        for challenge in self.weekly.iter_mut().filter(|c| c.metric == metric) {
            let xp = challenge.advance(amount);
            if xp > 0 {
                self.weekly_completed += 1;
                earned += xp;
            }
        }
        earned
    }

    /// Lifetime completions across both cadences.
    pub fn total_completed(&self) -> u32 {
        self.daily_completed + self.weekly_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_tick_populates_both_cadences() {
        let mut board = ChallengeBoard::default();
        board.reset_if_due(date(2025, 1, 6), &mut rng());

        assert_eq!(board.daily.len(), 2);
        assert_eq!(board.weekly.len(), 2);
        assert_eq!(board.last_daily_reset, date(2025, 1, 6));
        for c in board.daily.iter() {
            assert!(c.template_id.starts_with("daily_"));
            assert_eq!(c.progress, 0);
            assert!(!c.completed);
        }
        for c in board.weekly.iter() {
            assert!(c.template_id.starts_with("weekly_"));
        }
    }

    #[test]
    fn test_same_day_tick_is_a_no_op() {
        let mut board = ChallengeBoard::default();
        board.reset_if_due(date(2025, 1, 6), &mut rng());
        board.record_progress(ChallengeMetric::FocusMinutes, 30);

        let before = board.clone();
        board.reset_if_due(date(2025, 1, 6), &mut rng());
        assert_eq!(board, before);
    }

    #[test]
    fn test_daily_rolls_over_weekly_holds_within_week() {
        let mut board = ChallengeBoard::default();
        // Monday and Tuesday of the same ISO week.
        board.reset_if_due(date(2025, 1, 6), &mut rng());
        let weekly_before = board.weekly.clone();

        board.reset_if_due(date(2025, 1, 7), &mut rng());
        assert_eq!(board.last_daily_reset, date(2025, 1, 7));
        assert_eq!(board.weekly, weekly_before);
    }

    #[test]
    fn test_weekly_rolls_over_on_new_iso_week() {
        let mut board = ChallengeBoard::default();
        board.reset_if_due(date(2025, 1, 12), &mut rng()); // Sunday, W02

        board.reset_if_due(date(2025, 1, 13), &mut rng()); // Monday, W03
        assert_eq!(board.last_weekly_reset, date(2025, 1, 13));
    }

    #[test]
    fn test_unfinished_progress_discarded_on_reset() {
        let mut board = ChallengeBoard::default();
        board.reset_if_due(date(2025, 1, 6), &mut rng());
        board.record_progress(ChallengeMetric::FocusMinutes, 45);

        board.reset_if_due(date(2025, 1, 7), &mut rng());
        assert!(board.daily.iter().all(|c| c.progress == 0 && !c.completed));
    }

    #[test]
    fn test_completion_pays_once_and_latches() {
        let mut board = ChallengeBoard {
            daily: vec![ChallengeInstance::from_template(&CHALLENGE_TEMPLATES[0])],
            ..Default::default()
        };

        assert_eq!(board.record_progress(ChallengeMetric::FocusMinutes, 30), 0);
        let earned = board.record_progress(ChallengeMetric::FocusMinutes, 45);
        assert_eq!(earned, 30);
        assert_eq!(board.daily[0].progress, 60);
        assert!(board.daily[0].completed);
        assert_eq!(board.daily_completed, 1);

        // Further events after completion earn nothing and move nothing.
        assert_eq!(board.record_progress(ChallengeMetric::FocusMinutes, 99), 0);
        assert_eq!(board.daily[0].progress, 60);
        assert_eq!(board.daily_completed, 1);
    }

    #[test]
    fn test_progress_routed_by_metric() {
        let mut board = ChallengeBoard {
            daily: vec![
                ChallengeInstance::from_template(&CHALLENGE_TEMPLATES[0]), // focus
                ChallengeInstance::from_template(&CHALLENGE_TEMPLATES[4]), // blocks
            ],
            ..Default::default()
        };

        board.record_progress(ChallengeMetric::BlocksResisted, 3);
        assert_eq!(board.daily[0].progress, 0);
        assert_eq!(board.daily[1].progress, 3);
    }

    #[test]
    fn test_sampling_is_deterministic_under_a_seeded_rng() {
        let mut a = ChallengeBoard::default();
        let mut b = ChallengeBoard::default();
        a.reset_if_due(date(2025, 1, 6), &mut Pcg32::seed_from_u64(42));
        b.reset_if_due(date(2025, 1, 6), &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_catalog_has_enough_templates_per_cadence() {
        let daily = CHALLENGE_TEMPLATES.iter().filter(|t| t.cadence == Cadence::Daily).count();
        let weekly = CHALLENGE_TEMPLATES.iter().filter(|t| t.cadence == Cadence::Weekly).count();
        assert!(daily >= LIVE_PER_CADENCE);
        assert!(weekly >= LIVE_PER_CADENCE);
    }
}
