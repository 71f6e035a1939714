use serde_json::json;

use autofocus_core::gamification::ChallengeMetric;
use autofocus_core::{decide, Document, LocalMoment};

pub fn run(domain: &str, record: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::load()?;
    let moment = LocalMoment::now();

    let decision = decide(
        domain,
        doc.enabled,
        &doc.whitelist,
        &doc.blocked_sites,
        doc.settings.blocking_mode,
        &doc.schedule_settings,
        &moment,
    );

    // --record mirrors what the browser extension does on a blocked
    // navigation: count the block, feed challenge progress, re-evaluate
    // unlocks.
    if record && decision.block {
        doc.stats.record_block(domain, moment.date);
        let challenge_xp = doc
            .gamification
            .record_progress(ChallengeMetric::BlocksResisted, 1);
        let unlocks = doc.gamification.apply_unlocks(&doc.stats, moment.date);
        doc.save()?;

        let report = json!({
            "decision": decision,
            "challengeXp": challenge_xp,
            "unlocks": unlocks,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}
