use clap::Subcommand;
use serde_json::json;

use autofocus_core::gamification::{BADGES, TROPHIES};
use autofocus_core::{Document, LocalMoment};

#[derive(Subcommand)]
pub enum GamifyAction {
    /// XP, level, streak, and achievement counts
    Status,
    /// Earned and available badges
    Badges,
    /// Live daily and weekly challenges
    Challenges,
    /// Run the daily login tick (streak + challenge rotation)
    Login,
}

pub fn run(action: GamifyAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::load()?;

    match action {
        GamifyAction::Status => {
            let gam = &doc.gamification;
            let report = json!({
                "xp": gam.xp,
                "level": gam.level(),
                "streak": gam.streak,
                "lastLogin": gam.last_login,
                "badges": gam.achievements.len(),
                "trophies": gam.trophies.len(),
                "challengesCompleted": gam.challenges.total_completed(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        GamifyAction::Badges => {
            let gam = &doc.gamification;
            let report = json!({
                "earned": gam.achievements,
                "earnedTrophies": gam.trophies,
                "available": BADGES.len(),
                "availableTrophies": TROPHIES.len(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        GamifyAction::Challenges => {
            println!(
                "{}",
                serde_json::to_string_pretty(&doc.gamification.challenges)?
            );
        }
        GamifyAction::Login => {
            let today = LocalMoment::now().date;
            let mut rng = rand::thread_rng();
            let outcome = doc.gamification.login_tick(today, &mut rng);
            let unlocks = doc.gamification.apply_unlocks(&doc.stats, today);
            doc.save()?;

            let report = json!({
                "streak": outcome.streak,
                "streakAdvanced": outcome.streak_advanced,
                "unlocks": unlocks,
                "xp": doc.gamification.xp,
                "level": doc.gamification.level(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
