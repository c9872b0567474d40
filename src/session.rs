use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, Preset};
use crate::error::{Result, SoundtrackError};

/// Source of the current time for session timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Which preset is active and since when. Overwritten on every selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub active_preset: Option<String>,
    pub started_at: Option<DateTime<Local>>,
}

/// Single-slot "last selection wins" register over a loaded catalog
#[derive(Debug)]
pub struct SessionTracker<C: Clock = SystemClock> {
    catalog: Catalog,
    artists: Vec<String>,
    session: Session,
    clock: C,
}

impl SessionTracker<SystemClock> {
    pub fn new(catalog: Catalog, artists: Vec<String>) -> Self {
        Self::with_clock(catalog, artists, SystemClock)
    }
}

impl<C: Clock> SessionTracker<C> {
    pub fn with_clock(catalog: Catalog, artists: Vec<String>, clock: C) -> Self {
        Self {
            catalog,
            artists,
            session: Session::default(),
            clock,
        }
    }

    /// Activates `key`, returning its metadata. Unknown keys leave the session untouched.
    pub fn select_preset(&mut self, key: &str) -> Result<&Preset> {
        let preset = self
            .catalog
            .get(key)
            .ok_or_else(|| SoundtrackError::UnknownPreset(key.to_string()))?;

        let now = self.clock.now();
        tracing::debug!(preset = key, started_at = %now, "cognitive state activated");
        self.session = Session {
            active_preset: Some(preset.key.clone()),
            started_at: Some(now),
        };
        Ok(preset)
    }

    /// Catalog entries with their 1-based menu positions, in config order
    pub fn list_presets(&self) -> Vec<(usize, &Preset)> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(idx, preset)| (idx + 1, preset))
            .collect()
    }

    pub fn recommend_random(&self) -> Result<&str> {
        self.recommend_with(&mut rand::thread_rng())
    }

    pub fn recommend_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        self.artists
            .choose(rng)
            .map(String::as_str)
            .ok_or(SoundtrackError::EmptyList)
    }

    pub fn active_preset(&self) -> Option<&str> {
        self.session.active_preset.as_deref()
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.session.started_at
    }

    /// Current time as seen by the session clock
    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
