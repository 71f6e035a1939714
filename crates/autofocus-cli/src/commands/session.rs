use clap::Subcommand;
use serde_json::json;

use autofocus_core::gamification::ChallengeMetric;
use autofocus_core::{Document, FocusSession, SessionKind};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record a completed focus session ending now
    Record {
        /// Session length in minutes
        minutes: u32,
        /// Session kind: "pomodoro" or "manual"
        #[arg(long, default_value = "manual")]
        kind: String,
    },
}

fn parse_kind(kind: &str) -> Result<SessionKind, Box<dyn std::error::Error>> {
    match kind {
        "pomodoro" => Ok(SessionKind::Pomodoro),
        "manual" => Ok(SessionKind::Manual),
        other => Err(format!("unknown session kind: {other}").into()),
    }
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SessionAction::Record { minutes, kind } => {
            if minutes == 0 {
                return Err("session length must be at least 1 minute".into());
            }
            let kind = parse_kind(&kind)?;
            let mut doc = Document::load()?;

            let now = chrono::Local::now().naive_local();
            let start_time = now - chrono::Duration::minutes(minutes as i64);
            let session = FocusSession {
                start_time,
                duration: minutes,
                kind,
            };
            let date = start_time.date();

            doc.stats.record_session(session);
            let mut rng = rand::thread_rng();
            doc.gamification.login_tick(date, &mut rng);
            let mut challenge_xp = doc
                .gamification
                .record_progress(ChallengeMetric::FocusMinutes, minutes);
            challenge_xp += doc
                .gamification
                .record_progress(ChallengeMetric::SessionsCompleted, 1);
            let unlocks = doc.gamification.apply_unlocks(&doc.stats, date);
            doc.save()?;

            let report = json!({
                "recorded": session,
                "challengeXp": challenge_xp,
                "unlocks": unlocks,
                "xp": doc.gamification.xp,
                "level": doc.gamification.level(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
