use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{Result, SoundtrackError};

pub const CONFIG_FILE_NAME: &str = "genesis-block-soundtrack.json";
pub const CONFIG_ENV_VAR: &str = "SOUNDTRACK_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrimaryAnthem {
    pub artist: String,
    pub track: String,
    pub duration: String,
    pub purpose: String,
    #[serde(alias = "url")]
    pub youtube_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub platform: String,
    pub url: String,
}

/// Everything the soundtrack menu reads from its configuration file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SoundtrackConfig {
    pub primary_anthem: PrimaryAnthem,
    pub operational_playlist: Playlist,
    pub cognitive_states: Catalog,
    #[serde(default)]
    pub recommended_artists: Vec<String>,
    #[serde(default)]
    pub usage_guidelines: Vec<String>,
}

#[derive(Deserialize)]
struct ConfigFile {
    genesis_block: SoundtrackConfig,
}

impl SoundtrackConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<ConfigFile>(json).map(|file| file.genesis_block)
    }
}

pub trait ConfigSource {
    fn load(&self) -> Result<SoundtrackConfig>;
}

#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    /// Resolves the config path: explicit path, then the working directory,
    /// then the platform config directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "using explicit config path");
            return Self { path };
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Self { path: local };
        }

        if let Some(pd) = ProjectDirs::from("", "", "genesis-soundtrack") {
            let candidate = pd.config_dir().join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "using platform config path");
                return Self { path: candidate };
            }
        }

        Self { path: local }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<SoundtrackConfig> {
        let unavailable = |reason: String| SoundtrackError::ConfigurationUnavailable {
            path: self.path.clone(),
            reason,
        };

        let text = fs::read_to_string(&self.path).map_err(|e| unavailable(e.to_string()))?;
        let config = SoundtrackConfig::from_json(&text).map_err(|e| unavailable(e.to_string()))?;

        tracing::info!(
            path = %self.path.display(),
            states = config.cognitive_states.len(),
            "loaded soundtrack configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    const SAMPLE: &str = include_str!("../data/genesis-block-soundtrack.json");

    #[test]
    fn bundled_sample_parses() {
        let cfg = SoundtrackConfig::from_json(SAMPLE).unwrap();
        let keys: Vec<&str> = cfg.cognitive_states.keys().collect();
        assert_eq!(
            keys,
            vec![
                "initialization",
                "deep_focus",
                "flow_state",
                "debugging",
                "deployment"
            ]
        );
        assert!(!cfg.recommended_artists.is_empty());
        assert!(!cfg.usage_guidelines.is_empty());
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, SAMPLE).unwrap();

        let cfg = FileConfigSource::with_path(&path).load().unwrap();
        assert_eq!(cfg.operational_playlist.platform, "Spotify");
    }

    #[test]
    fn missing_file_is_configuration_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = FileConfigSource::with_path(&path).load().unwrap_err();
        assert_matches!(err, SoundtrackError::ConfigurationUnavailable { path: p, .. } if p == path);
    }

    #[test]
    fn malformed_json_is_configuration_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ \"genesis_block\": [").unwrap();
        let err = FileConfigSource::with_path(&path).load().unwrap_err();
        assert_matches!(err, SoundtrackError::ConfigurationUnavailable { .. });
    }

    #[test]
    fn anthem_accepts_plain_url_field() {
        let json = r#"{"genesis_block": {
            "primary_anthem": {"artist": "a", "track": "t", "duration": "d", "purpose": "p", "url": "https://example.com"},
            "operational_playlist": {"name": "n", "platform": "p", "url": "u"},
            "cognitive_states": {}
        }}"#;
        let cfg = SoundtrackConfig::from_json(json).unwrap();
        assert_eq!(cfg.primary_anthem.youtube_url, "https://example.com");
        assert!(cfg.cognitive_states.is_empty());
        assert!(cfg.recommended_artists.is_empty());
    }

    #[test]
    fn explicit_path_wins_resolution() {
        let source = FileConfigSource::resolve(Some(PathBuf::from("/tmp/custom.json")));
        assert_eq!(source.path(), Path::new("/tmp/custom.json"));
    }
}
