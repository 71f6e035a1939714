//! Integration tests for the blocking decision path.
//!
//! Exercises the decision engine through the persisted document types, the
//! way the CLI drives it: seed a document, resolve a moment, decide, record
//! the block.

use chrono::{NaiveDate, Weekday};
use proptest::prelude::*;

use autofocus_core::{decide, BlockingMode, DecisionReason, Document, LocalMoment};

fn monday_morning() -> LocalMoment {
    // Monday 2025-01-06, 10:00.
    LocalMoment::new(
        Weekday::Mon,
        10 * 60,
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
    )
}

fn decide_doc(doc: &Document, domain: &str, moment: &LocalMoment) -> autofocus_core::BlockDecision {
    decide(
        domain,
        doc.enabled,
        &doc.whitelist,
        &doc.blocked_sites,
        doc.settings.blocking_mode,
        &doc.schedule_settings,
        moment,
    )
}

#[test]
fn test_fresh_document_blocks_seeded_sites() {
    let doc = Document::default();
    let moment = monday_morning();

    assert!(decide_doc(&doc, "youtube.com", &moment).block);
    assert!(decide_doc(&doc, "www.reddit.com", &moment).block);
    assert!(!decide_doc(&doc, "docs.google.com", &moment).block);
    assert!(!decide_doc(&doc, "example.org", &moment).block);
}

#[test]
fn test_disable_overrides_everything() {
    let mut doc = Document::default();
    doc.enabled = false;

    let decision = decide_doc(&doc, "youtube.com", &monday_morning());
    assert!(!decision.block);
    assert_eq!(decision.reason, DecisionReason::Disabled);
}

#[test]
fn test_scheduled_mode_full_path() {
    let mut doc = Document::default();
    doc.settings.blocking_mode = BlockingMode::Scheduled;
    doc.schedule_settings.enabled = true;

    // Default windows: 09:00-12:00 and 14:00-18:00, Mon-Fri.
    let in_window = monday_morning();
    assert!(decide_doc(&doc, "youtube.com", &in_window).block);

    let lunch = LocalMoment::new(Weekday::Mon, 13 * 60, in_window.date);
    let lunch_decision = decide_doc(&doc, "youtube.com", &lunch);
    assert!(!lunch_decision.block);
    assert_eq!(lunch_decision.reason, DecisionReason::OutsideSchedule);

    let weekend = LocalMoment::new(
        Weekday::Sat,
        10 * 60,
        NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
    );
    assert!(!decide_doc(&doc, "youtube.com", &weekend).block);
}

#[test]
fn test_recording_blocks_updates_stats() {
    let mut doc = Document::default();
    let moment = monday_morning();

    for _ in 0..3 {
        let decision = decide_doc(&doc, "youtube.com", &moment);
        assert!(decision.block);
        doc.stats.record_block("youtube.com", moment.date);
    }

    assert_eq!(doc.stats.blocked_count, 3);
    assert_eq!(doc.stats.blocked_sites["youtube.com"], 3);
    assert_eq!(doc.stats.daily.get(moment.date).unwrap().blocked_count, 3);
}

proptest! {
    // The whitelist wins for every domain, mode, and moment.
    #[test]
    fn prop_whitelist_always_wins(
        minutes in 0u16..1440,
        mode_idx in 0usize..4,
    ) {
        let modes = [
            BlockingMode::Standard,
            BlockingMode::Scheduled,
            BlockingMode::Strict,
            BlockingMode::Pomodoro,
        ];
        let mut doc = Document::default();
        doc.settings.blocking_mode = modes[mode_idx];
        doc.whitelist.add("youtube.com");

        let moment = LocalMoment::new(
            Weekday::Mon,
            minutes,
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
        );
        let decision = decide_doc(&doc, "youtube.com", &moment);
        prop_assert!(!decision.block);
        prop_assert_eq!(decision.reason, DecisionReason::Whitelisted);
    }

    // Disabled never blocks, whatever the lists say.
    #[test]
    fn prop_disabled_never_blocks(domain in "[a-z]{1,12}\\.(com|org|net)") {
        let mut doc = Document::default();
        doc.enabled = false;
        doc.blocked_sites.add(&domain);

        let decision = decide_doc(&doc, &domain, &monday_morning());
        prop_assert!(!decision.block);
    }
}
