//! Level bands and productivity ranks.
//!
//! Levels are derived, never stored: a pure lookup of cumulative XP against
//! an ordered band table. The top band is unbounded so any XP value
//! resolves to exactly one level.

use serde::Serialize;

/// One level band. `max_xp` is exclusive; `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDef {
    pub level: u8,
    pub name: &'static str,
    pub min_xp: u32,
    pub max_xp: Option<u32>,
    pub badge: &'static str,
}

/// The level table, ascending and contiguous.
pub const LEVELS: &[LevelDef] = &[
    LevelDef { level: 1, name: "Novice", min_xp: 0, max_xp: Some(100), badge: "🌱" },
    LevelDef { level: 2, name: "Apprentice", min_xp: 100, max_xp: Some(250), badge: "🌿" },
    LevelDef { level: 3, name: "Initiate", min_xp: 250, max_xp: Some(500), badge: "🍀" },
    LevelDef { level: 4, name: "Adept", min_xp: 500, max_xp: Some(1000), badge: "🌻" },
    LevelDef { level: 5, name: "Expert", min_xp: 1000, max_xp: Some(2000), badge: "🌲" },
    LevelDef { level: 6, name: "Master", min_xp: 2000, max_xp: Some(4000), badge: "🌳" },
    LevelDef { level: 7, name: "Grandmaster", min_xp: 4000, max_xp: Some(7000), badge: "🌴" },
    LevelDef { level: 8, name: "Legend", min_xp: 7000, max_xp: Some(10000), badge: "🌟" },
    LevelDef { level: 9, name: "Mythic", min_xp: 10000, max_xp: Some(15000), badge: "🌠" },
    LevelDef { level: 10, name: "Transcendent", min_xp: 15000, max_xp: None, badge: "👑" },
];

/// Look up the level band for an XP total. Total for any input: the final
/// band is unbounded, and the table start at 0 catches everything else.
pub fn level_for_xp(xp: u32) -> &'static LevelDef {
    LEVELS
        .iter()
        .find(|l| xp >= l.min_xp && l.max_xp.map_or(true, |max| xp < max))
        .unwrap_or(&LEVELS[0])
}

/// A productivity-score rank band. `max_score` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityRank {
    pub name: &'static str,
    pub min_score: u8,
    pub max_score: u8,
    pub icon: &'static str,
}

/// Rank bands over the 0-100 daily score (top band's bound of 101 keeps a
/// perfect 100 inside it).
pub const PRODUCTIVITY_RANKS: &[ProductivityRank] = &[
    ProductivityRank { name: "Bronze", min_score: 0, max_score: 40, icon: "🥉" },
    ProductivityRank { name: "Silver", min_score: 40, max_score: 65, icon: "🥈" },
    ProductivityRank { name: "Gold", min_score: 65, max_score: 85, icon: "🥇" },
    ProductivityRank { name: "Platinum", min_score: 85, max_score: 95, icon: "💎" },
    ProductivityRank { name: "Diamond", min_score: 95, max_score: 101, icon: "🏆" },
];

/// Rank band for a productivity score.
pub fn rank_for_score(score: u8) -> &'static ProductivityRank {
    PRODUCTIVITY_RANKS
        .iter()
        .find(|r| score >= r.min_score && score < r.max_score)
        .unwrap_or(&PRODUCTIVITY_RANKS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_xp(0).level, 1);
        assert_eq!(level_for_xp(99).level, 1);
        assert_eq!(level_for_xp(100).level, 2);
        assert_eq!(level_for_xp(14999).level, 9);
        assert_eq!(level_for_xp(15000).level, 10);
    }

    #[test]
    fn test_top_band_unbounded() {
        assert_eq!(level_for_xp(15001).level, 10);
        assert_eq!(level_for_xp(u32::MAX).level, 10);
    }

    #[test]
    fn test_table_is_contiguous() {
        for pair in LEVELS.windows(2) {
            assert_eq!(pair[0].max_xp, Some(pair[1].min_xp));
        }
        assert_eq!(LEVELS.last().unwrap().max_xp, None);
    }

    #[test]
    fn test_rank_bands() {
        assert_eq!(rank_for_score(0).name, "Bronze");
        assert_eq!(rank_for_score(39).name, "Bronze");
        assert_eq!(rank_for_score(40).name, "Silver");
        assert_eq!(rank_for_score(85).name, "Platinum");
        assert_eq!(rank_for_score(100).name, "Diamond");
    }
}
