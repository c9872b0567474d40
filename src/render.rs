use chrono::{DateTime, Local};
use itertools::Itertools;

use crate::catalog::{title_for_key, Preset};
use crate::command::{MenuChoice, PRESET_ALIASES};
use crate::config::{Playlist, PrimaryAnthem};
use crate::icon::PresetIcon;

const WIDE_RULE: usize = 60;
const NARROW_RULE: usize = 40;

fn rule(width: usize) -> String {
    "=".repeat(width)
}

pub fn header() -> String {
    [
        String::new(),
        rule(WIDE_RULE),
        "🎵 GENESIS BLOCK SOUNDTRACK SYSTEM 🎵".to_string(),
        rule(WIDE_RULE),
        "Match the track to the task.".to_string(),
        "Use the audio environment to manage your cognitive state.".to_string(),
        rule(WIDE_RULE),
        String::new(),
    ]
    .join("\n")
}

pub fn anthem(anthem: &PrimaryAnthem) -> String {
    format!(
        "🎸 PRIMARY ANTHEM\n   {} - {}\n   Duration: {}\n   Purpose: {}\n   ▸ {}\n",
        anthem.artist, anthem.track, anthem.duration, anthem.purpose, anthem.youtube_url
    )
}

pub fn playlist(playlist: &Playlist) -> String {
    format!(
        "📻 OPERATIONAL PLAYLIST\n   Name: {}\n   Platform: {}\n   ▸ {}\n",
        playlist.name, playlist.platform, playlist.url
    )
}

pub fn preset_list(presets: &[(usize, &Preset)]) -> String {
    let mut out = String::from("🧠 COGNITIVE STATES\n\n");
    if presets.is_empty() {
        out.push_str("   (no cognitive states configured)\n");
        return out;
    }
    for (position, preset) in presets {
        out.push_str(&format!(
            "{} [{}] {}\n      {}\n      Duration: {}\n      BPM Range: {}\n\n",
            PresetIcon::for_key(&preset.key),
            position,
            preset.title(),
            preset.info.description,
            preset.info.duration,
            preset.info.bpm_range
        ));
    }
    out
}

pub fn activation(preset: &Preset) -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "{} ENTERING {} MODE",
            PresetIcon::for_key(&preset.key),
            preset.title()
        ),
        rule(NARROW_RULE),
        format!("Description: {}", preset.info.description),
        format!("Recommended Duration: {}", preset.info.duration),
        format!("BPM Range: {}", preset.info.bpm_range),
    ];
    if !preset.info.characteristics.is_empty() {
        lines.push(format!(
            "Characteristics: {}",
            preset.info.characteristics.iter().join(", ")
        ));
    }
    lines.push(String::new());
    lines.push("✅ Cognitive state activated!".to_string());
    lines.push("🎧 Remember to use noise-cancelling headphones for maximum immersion".to_string());
    lines.join("\n")
}

pub fn guidelines(guidelines: &[String]) -> String {
    let body = guidelines.iter().map(|g| format!("  ▸ {g}")).join("\n");
    format!("📋 USAGE GUIDELINES\n\n{body}\n")
}

pub fn recommendation(artist: &str) -> String {
    format!(
        "🎤 ARTIST RECOMMENDATION: {artist}\n   Try searching for '{artist}' on your preferred music platform\n"
    )
}

/// Compact "how long ago" label for the menu status line
pub fn elapsed_since(started_at: DateTime<Local>, now: DateTime<Local>) -> String {
    let secs = (now - started_at).num_seconds().max(0);
    match secs {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{}m ago", secs / 60),
        _ => format!("{}h {}m ago", secs / 3600, (secs % 3600) / 60),
    }
}

pub fn menu(active: Option<(&str, DateTime<Local>)>, now: DateTime<Local>) -> String {
    let mut lines = vec![String::new(), "🎮 COMMAND MENU".to_string()];
    if let Some((key, started_at)) = active {
        lines.push(format!(
            "{} Active: {} (since {}, {})",
            PresetIcon::for_key(key),
            title_for_key(key),
            started_at.format("%H:%M:%S"),
            elapsed_since(started_at, now)
        ));
    }
    lines.push(rule(NARROW_RULE));
    for (digit, _, label) in MenuChoice::ENTRIES {
        lines.push(format!("[{digit}] {label}"));
    }
    lines.push(rule(NARROW_RULE));
    lines.join("\n")
}

pub fn farewell() -> String {
    "\n🎵 Exiting Genesis Block Soundtrack System\nRemember: We can make the world stop.\n"
        .to_string()
}

pub fn help(program: &str) -> String {
    let mut out = format!(
        "\n📖 GENESIS BLOCK SOUNDTRACK CLI\n{}\nUsage: {program} [--config <path>] [command]\n\nCommands:\n",
        rule(NARROW_RULE)
    );
    let fixed = [
        ("anthem", "Show primary anthem"),
        ("playlist", "Show operational playlist"),
        ("states", "List cognitive states"),
        ("guidelines", "Show usage guidelines"),
        ("recommend", "Get artist recommendation"),
        ("open-playlist", "Open playlist in browser"),
        ("open-anthem", "Open anthem in browser"),
        ("web", "Open web player"),
        ("help", "Show this help message"),
    ];
    for (word, text) in fixed {
        out.push_str(&format!("  {word:<15}- {text}\n"));
    }

    out.push_str("\nCognitive states:\n");
    for (key, aliases) in &PRESET_ALIASES.iter().chunk_by(|(_, key)| *key) {
        let words = aliases.map(|(alias, _)| *alias).join(", ");
        out.push_str(&format!(
            "  {words:<30}- Enter {} mode\n",
            title_for_key(key).to_lowercase()
        ));
    }
    out.push_str("\nNo arguments: Interactive menu\n");
    out
}
