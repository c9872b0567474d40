use std::io::Cursor;

use assert_matches::assert_matches;
use soundtrack::{
    app::{App, Outcome},
    catalog::{Catalog, PresetInfo},
    command::Command,
    config::SoundtrackConfig,
    notifier::RecordingNotifier,
    session::SessionTracker,
    SoundtrackError,
};

fn preset(description: &str) -> PresetInfo {
    PresetInfo {
        description: description.to_string(),
        duration: "45 minutes".to_string(),
        bpm_range: "60-90".to_string(),
        characteristics: vec![],
    }
}

// Headless run of the documented two-preset scenario through the tracker alone
#[test]
fn select_then_reject_unknown_keeps_active_preset() {
    let catalog = Catalog::from_entries(vec![
        ("deep_focus".to_string(), preset("focus")),
        ("debugging".to_string(), preset("debug")),
    ])
    .unwrap();
    let mut tracker = SessionTracker::new(catalog, vec![]);

    let selected = tracker.select_preset("debugging").unwrap();
    assert_eq!(selected.info.description, "debug");
    assert_eq!(tracker.active_preset(), Some("debugging"));

    assert_matches!(
        tracker.select_preset("nonexistent"),
        Err(SoundtrackError::UnknownPreset(key)) if key == "nonexistent"
    );
    assert_eq!(tracker.active_preset(), Some("debugging"));
}

#[test]
fn bundled_config_drives_one_shot_and_menu() {
    let config =
        SoundtrackConfig::from_json(include_str!("../data/genesis-block-soundtrack.json")).unwrap();
    let mut app = App::new(config, RecordingNotifier::new());

    assert_eq!(app.run_command(Command::parse("init")).unwrap(), Outcome::Done);
    assert_eq!(app.tracker().active_preset(), Some("initialization"));

    // menu: list states, pick the last one, show guidelines, exit
    app.run_interactive(Cursor::new("3\n4\n5\n5\n0\n")).unwrap();
    assert_eq!(app.tracker().active_preset(), Some("deployment"));

    let notifier = app.into_notifier();
    let out = notifier.output();
    assert!(out.contains("🚀 ENTERING INITIALIZATION MODE"));
    assert!(out.contains("🚢 ENTERING DEPLOYMENT MODE"));
    assert!(out.contains("📋 USAGE GUIDELINES"));
    assert!(notifier.opened.is_empty());
}
