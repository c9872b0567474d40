use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Descriptive metadata for one cognitive-state preset, as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetInfo {
    pub description: String,
    pub duration: String,
    pub bpm_range: String,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// A preset paired with the key it is catalogued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub key: String,
    pub info: PresetInfo,
}

impl Preset {
    /// Key formatted for headings: `deep_focus` becomes `DEEP FOCUS`
    pub fn title(&self) -> String {
        title_for_key(&self.key)
    }
}

pub fn title_for_key(key: &str) -> String {
    key.to_uppercase().replace('_', " ")
}

/// Ordered preset catalog. Keys are unique and keep the order of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    presets: Vec<Preset>,
}

impl Catalog {
    /// Builds a catalog, rejecting the first duplicated key
    pub fn from_entries<I>(entries: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (String, PresetInfo)>,
    {
        let mut presets: Vec<Preset> = Vec::new();
        for (key, info) in entries {
            if presets.iter().any(|p| p.key == key) {
                return Err(format!("duplicate cognitive state '{key}'"));
            }
            presets.push(Preset { key, info });
        }
        Ok(Self { presets })
    }

    pub fn get(&self, key: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Looks up a preset by its 1-based menu position
    pub fn by_position(&self, position: usize) -> Option<&Preset> {
        position
            .checked_sub(1)
            .and_then(|idx| self.presets.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of cognitive state names to their descriptions")
            }

            // MapAccess yields entries in document order
            fn visit_map<A>(self, mut map: A) -> Result<Catalog, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, info)) = map.next_entry::<String, PresetInfo>()? {
                    entries.push((key, info));
                }
                Catalog::from_entries(entries).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
