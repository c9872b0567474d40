use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::command::{Command, MenuChoice};
use crate::config::{Playlist, PrimaryAnthem, SoundtrackConfig};
use crate::error::{Result, SoundtrackError};
use crate::notifier::Notifier;
use crate::render;
use crate::session::{Clock, SessionTracker, SystemClock};

pub const WEB_PLAYER_FILE: &str = "soundtrack-player.html";

/// How a one-shot command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Unrecognized,
}

/// Owns the loaded configuration, the session tracker and the output sink
/// for the lifetime of one process.
pub struct App<N: Notifier, C: Clock = SystemClock> {
    anthem: PrimaryAnthem,
    playlist: Playlist,
    guidelines: Vec<String>,
    tracker: SessionTracker<C>,
    notifier: N,
    web_player: PathBuf,
    program: String,
}

impl<N: Notifier> App<N, SystemClock> {
    pub fn new(config: SoundtrackConfig, notifier: N) -> Self {
        Self::with_clock(config, notifier, SystemClock)
    }
}

impl<N: Notifier, C: Clock> App<N, C> {
    pub fn with_clock(config: SoundtrackConfig, notifier: N, clock: C) -> Self {
        let SoundtrackConfig {
            primary_anthem,
            operational_playlist,
            cognitive_states,
            recommended_artists,
            usage_guidelines,
        } = config;
        Self {
            anthem: primary_anthem,
            playlist: operational_playlist,
            guidelines: usage_guidelines,
            tracker: SessionTracker::with_clock(cognitive_states, recommended_artists, clock),
            notifier,
            web_player: PathBuf::from(WEB_PLAYER_FILE),
            program: "soundtrack".to_string(),
        }
    }

    /// Places the web player next to the configuration file
    pub fn with_config_dir(mut self, config_path: &Path) -> Self {
        let dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.web_player = dir.join(WEB_PLAYER_FILE);
        self
    }

    pub fn with_program_name(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn tracker(&self) -> &SessionTracker<C> {
        &self.tracker
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    pub fn run_command(&mut self, command: Command) -> Result<Outcome> {
        tracing::debug!(?command, "dispatching command");
        if command.shows_header() {
            self.notifier.show(&render::header())?;
        }

        match command {
            Command::Anthem => self.show_anthem()?,
            Command::Playlist => self.show_playlist()?,
            Command::States => self.list_states()?,
            Command::Guidelines => self.show_guidelines()?,
            Command::Recommend => self.recommend()?,
            Command::OpenPlaylist => self.open_playlist()?,
            Command::OpenAnthem => self.open_anthem()?,
            Command::Web => self.open_web_player()?,
            Command::Enter(key) => self.enter_state(&key)?,
            Command::Help => self.notifier.show(&render::help(&self.program))?,
            Command::Unrecognized(text) => {
                if let Some(key) = self.catalog_key_for(&text) {
                    self.notifier.show(&render::header())?;
                    self.enter_state(&key)?;
                    return Ok(Outcome::Done);
                }
                self.notifier.warn(&format!("❌ Unknown command: {text}"))?;
                self.notifier
                    .show(&format!("Use '{} help' for available commands", self.program))?;
                return Ok(Outcome::Unrecognized);
            }
        }
        Ok(Outcome::Done)
    }

    /// Numbered menu loop. Ends on `0` or when input runs out.
    pub fn run_interactive<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        self.notifier.show(&render::header())?;

        loop {
            let active = self
                .tracker
                .active_preset()
                .zip(self.tracker.started_at());
            self.notifier.show(&render::menu(active, self.tracker.now()))?;

            let Some(line) = self.prompt(&mut input, "\nSelect option: ")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                MenuChoice::ShowAnthem => self.show_anthem()?,
                MenuChoice::ShowPlaylist => self.show_playlist()?,
                MenuChoice::ListStates => self.list_states()?,
                MenuChoice::SetState => {
                    self.list_states()?;
                    let Some(answer) = self.prompt(&mut input, "Select state number: ")? else {
                        break;
                    };
                    self.set_state_by_number(&answer)?;
                }
                MenuChoice::ShowGuidelines => self.show_guidelines()?,
                MenuChoice::Recommend => self.recommend()?,
                MenuChoice::OpenPlaylist => self.open_playlist()?,
                MenuChoice::OpenAnthem => self.open_anthem()?,
                MenuChoice::OpenWebPlayer => self.open_web_player()?,
                MenuChoice::Exit => {
                    self.notifier.show(&render::farewell())?;
                    return Ok(());
                }
                MenuChoice::Invalid => {
                    self.notifier.warn("❌ Invalid option. Please try again.")?
                }
            }
        }

        self.notifier.show(&render::farewell())?;
        Ok(())
    }

    /// Catalog key named by a word outside the alias table, as written or
    /// with hyphens turned into underscores
    fn catalog_key_for(&self, word: &str) -> Option<String> {
        let word = word.trim();
        let catalog = self.tracker.catalog();
        [word.to_string(), word.replace('-', "_")]
            .into_iter()
            .find(|candidate| catalog.contains(candidate))
    }

    fn prompt<R: BufRead>(&mut self, input: &mut R, question: &str) -> Result<Option<String>> {
        self.notifier.show(question)?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn set_state_by_number(&mut self, answer: &str) -> Result<()> {
        let Ok(number) = answer.parse::<usize>() else {
            return self.notifier.warn("❌ Please enter a valid number");
        };
        let key = match self.tracker.catalog().by_position(number) {
            Some(preset) => preset.key.clone(),
            None => return self.notifier.warn("❌ Invalid state number"),
        };
        self.enter_state(&key)
    }

    fn show_anthem(&mut self) -> Result<()> {
        self.notifier.show(&render::anthem(&self.anthem))
    }

    fn show_playlist(&mut self) -> Result<()> {
        self.notifier.show(&render::playlist(&self.playlist))
    }

    fn list_states(&mut self) -> Result<()> {
        let text = render::preset_list(&self.tracker.list_presets());
        self.notifier.show(&text)
    }

    fn show_guidelines(&mut self) -> Result<()> {
        self.notifier.show(&render::guidelines(&self.guidelines))
    }

    fn recommend(&mut self) -> Result<()> {
        match self.tracker.recommend_random() {
            Ok(artist) => {
                let text = render::recommendation(artist);
                self.notifier.show(&text)
            }
            Err(err @ SoundtrackError::EmptyList) => {
                self.notifier.warn(&format!("❌ No recommendations: {err}"))
            }
            Err(err) => Err(err),
        }
    }

    fn enter_state(&mut self, key: &str) -> Result<()> {
        match self.tracker.select_preset(key) {
            Ok(preset) => {
                let text = render::activation(preset);
                self.notifier.show(&text)
            }
            Err(err @ SoundtrackError::UnknownPreset(_)) => {
                self.notifier.warn(&format!("❌ {err}"))
            }
            Err(err) => Err(err),
        }
    }

    fn open_playlist(&mut self) -> Result<()> {
        self.notifier.show("🌐 Opening playlist in browser...")?;
        let url = self.playlist.url.clone();
        self.open(&url)
    }

    fn open_anthem(&mut self) -> Result<()> {
        self.notifier.show("🌐 Opening primary anthem in browser...")?;
        let url = self.anthem.youtube_url.clone();
        self.open(&url)
    }

    fn open_web_player(&mut self) -> Result<()> {
        self.notifier.show("🌐 Opening web player...")?;
        let path = std::path::absolute(&self.web_player).unwrap_or_else(|_| self.web_player.clone());
        self.open(&file_url(&path.to_string_lossy()))
    }

    fn open(&mut self, url: &str) -> Result<()> {
        match self.notifier.open_url(url) {
            Err(err @ SoundtrackError::Browser { .. }) => self.notifier.warn(&format!("❌ {err}")),
            other => other,
        }
    }
}

/// `file://` URL for a local path. Windows separators become `/` and drive
/// paths get the extra leading slash (`C:\\x` is `file:///C:/x`).
pub fn file_url(path: &str) -> String {
    let path = path.replace('\\', "/");
    if path.starts_with('/') {
        format!("file://{path}")
    } else {
        format!("file:///{path}")
    }
}
