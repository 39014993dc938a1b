use crate::error::Result;
use crate::i18n::Language;
use crate::view::ViewBinder;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// A two-valued preference persisted under a fixed storage key.
pub trait Preference: Copy + Default + fmt::Display + FromStr<Err = String> {
    const KEY: &'static str;
}

impl Preference for Theme {
    const KEY: &'static str = "theme";
}

impl Preference for Language {
    const KEY: &'static str = "language";
}

/// Absent or unrecognised stored values fall back to the default.
pub fn get_preference<P: Preference>(view: &impl ViewBinder) -> P {
    match view.storage_get(P::KEY) {
        None => P::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(key = P::KEY, "ignoring stored preference: {e}");
            P::default()
        }),
    }
}

/// Persists only; applying the value to the page is the caller's job.
pub fn set_preference<P: Preference>(view: &mut impl ViewBinder, value: P) {
    if let Err(e) = view.storage_set(P::KEY, &value.to_string()) {
        tracing::warn!(key = P::KEY, "failed to persist preference: {e}");
    }
}

/// Durable key/value store backed by a TOML file, rewritten on every set.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(path: PathBuf) -> Self {
        let values = match Self::read(&path) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(path = %path.display(), "starting with empty preferences: {e}");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn read(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| crate::error::FolioError::Storage(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
