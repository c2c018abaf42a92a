use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bs_app::{RectI32, StartMode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to read preset file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write preset file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed preset file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize presets")]
    Serialize(#[source] serde_yaml::Error),
}

/// Preset file contents before each entry is checked.
type RawPresets = BTreeMap<String, serde_yaml::Value>;

/// Preset name → region mapping.
///
/// Stored as a YAML mapping of `name: [x1, y1, x2, y2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presets {
    entries: BTreeMap<String, (i32, i32, i32, i32)>,
}

impl Presets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<RectI32> {
        self.entries.get(name).copied().map(RectI32::from)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RectI32)> {
        self.entries
            .iter()
            .map(|(name, region)| (name.as_str(), RectI32::from(*region)))
    }

    /// Decide whether `name` can skip the selection overlay.
    ///
    /// An empty name always routes to the overlay, as does a name with no stored region.
    pub fn route(&self, name: &str) -> StartMode {
        if name.is_empty() {
            return StartMode::Interactive;
        }
        match self.get(name) {
            Some(region) => StartMode::Direct(region),
            None => StartMode::Interactive,
        }
    }

    /// Keep the entries that hold four integers; warn about and skip the rest.
    fn from_raw(path: &Path, raw: RawPresets) -> Self {
        let mut entries = BTreeMap::new();
        for (name, value) in raw {
            match serde_yaml::from_value::<(i32, i32, i32, i32)>(value) {
                Ok(region) => {
                    entries.insert(name, region);
                }
                Err(e) => log::warn!("skipping preset '{name}' in {}: {e}", path.display()),
            }
        }
        Self { entries }
    }
}

fn parse_raw(path: &Path, content: &str) -> Result<RawPresets, PresetError> {
    if content.trim().is_empty() {
        return Ok(RawPresets::new());
    }

    // A document that is just `null`/`~` deserializes to None.
    let raw: Option<RawPresets> =
        serde_yaml::from_str(content).map_err(|source| PresetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(raw.unwrap_or_default())
}

/// File-backed preset store.
///
/// Every save rewrites the whole file. Writers are not coordinated; the last one wins.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all presets. A missing file is an empty set, not an error.
    pub fn load(&self) -> Result<Presets, PresetError> {
        Ok(Presets::from_raw(&self.path, self.read_raw()?))
    }

    fn read_raw(&self) -> Result<RawPresets, PresetError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("preset file {} not found", self.path.display());
                return Ok(RawPresets::new());
            }
            Err(source) => {
                return Err(PresetError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        parse_raw(&self.path, &content)
    }

    /// Store `name → region`, keeping every other entry in the file as written.
    pub fn save(&self, name: &str, region: RectI32) -> Result<(), PresetError> {
        let mut raw = self.read_raw()?;
        let value = serde_yaml::to_value(region.to_tuple()).map_err(PresetError::Serialize)?;
        raw.insert(name.to_string(), value);

        let yaml = serde_yaml::to_string(&raw).map_err(PresetError::Serialize)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| PresetError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, yaml).map_err(|source| PresetError::Write {
            path: self.path.clone(),
            source,
        })?;

        log::info!(
            "saved preset '{name}' ({}, {}, {}, {}) to {}",
            region.left,
            region.top,
            region.right,
            region.bottom,
            self.path.display()
        );
        Ok(())
    }
}
