use clap::Subcommand;
use serde_json::json;

use autofocus_core::{Document, LocalMoment};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Show the current schedule
    Show,
    /// Enable scheduled blocking
    Enable,
    /// Disable scheduled blocking
    Disable,
    /// Report whether the schedule is active right now
    Check,
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::load()?;

    match action {
        ScheduleAction::Show => {
            println!("{}", serde_json::to_string_pretty(&doc.schedule_settings)?);
        }
        ScheduleAction::Enable => {
            doc.schedule_settings.enabled = true;
            doc.save()?;
            println!("schedule enabled");
        }
        ScheduleAction::Disable => {
            doc.schedule_settings.enabled = false;
            doc.save()?;
            println!("schedule disabled");
        }
        ScheduleAction::Check => {
            let moment = LocalMoment::now();
            let active = doc.schedule_settings.is_active_at(&moment);
            let report = json!({
                "date": moment.iso_date(),
                "active": active,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
