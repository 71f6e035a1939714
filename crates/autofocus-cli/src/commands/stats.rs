use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::json;

use autofocus_core::gamification::rank_for_score;
use autofocus_core::stats::daily_productivity;
use autofocus_core::{Document, LocalMoment, StatsSnapshot};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Full stats snapshot
    Show,
    /// One day's stats and productivity score
    Day {
        /// ISO date (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },
    /// Weekly averages and the week-over-week trend
    Trend,
    /// Reset all statistics
    Reset,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::load()?;

    match action {
        StatsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&doc.stats)?);
        }
        StatsAction::Day { date } => {
            let date = match date {
                Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")?,
                None => LocalMoment::now().date,
            };
            let day = doc.stats.daily.get(date).copied().unwrap_or_default();
            let score = daily_productivity(&day);
            let rank = rank_for_score(score);
            let report = json!({
                "date": date.to_string(),
                "stats": day,
                "productivityScore": score,
                "rank": rank,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Trend => {
            let report = json!({
                "weeklyAverages": doc.stats.daily.weekly_averages(),
                "monthlyAverages": doc.stats.daily.monthly_averages(),
                "trend": doc.stats.daily.trend(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Reset => {
            doc.stats = StatsSnapshot::default();
            doc.save()?;
            println!("stats reset");
        }
    }
    Ok(())
}
