//! Persistence behind an injected key-value interface.
//!
//! Values are stored as JSON under fixed keys. [`UserDataStore`] layers typed
//! accessors on top: a missing key reads as `None` (or an empty list), and a
//! blob that no longer parses is logged and treated the same way.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::assessment::AssessmentResult;
use crate::careers::{CareerRecommendation, SkillGap};
use crate::profile::UserProfile;

pub const PROFILE_KEY: &str = "careerAI_profile";
pub const ASSESSMENT_KEY: &str = "careerAI_assessment";
pub const RECOMMENDATIONS_KEY: &str = "careerAI_recommendations";
pub const SKILL_GAPS_KEY: &str = "careerAI_skillGaps";
pub const LANGUAGE_KEY: &str = "careerAI_language";
pub const THEME_KEY: &str = "careerAI_theme";

pub const DEFAULT_LANGUAGE: &str = "en";

const ALL_KEYS: [&str; 6] = [
    PROFILE_KEY,
    ASSESSMENT_KEY,
    RECOMMENDATIONS_KEY,
    SKILL_GAPS_KEY,
    LANGUAGE_KEY,
    THEME_KEY,
];

/// Minimal JSON blob store keyed by string.
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn save(&self, key: &str, value: Value) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid store key '{0}'")]
    InvalidKey(String),
    #[error("failed to access '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("stored value for '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Value>>, StoreError> {
        self.values
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.guard()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.guard()?.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.guard()?.remove(key);
        Ok(())
    }
}

/// One pretty-printed `<key>.json` file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    key: key.to_string(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let io_error = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.root).map_err(io_error)?;
        let encoded = serde_json::to_vec_pretty(&value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        fs::write(&path, encoded).map_err(io_error)?;
        debug!(key, path = %path.display(), "value persisted");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Typed view over the keys the application persists for one user.
#[derive(Debug, Clone)]
pub struct UserDataStore<S> {
    store: S,
}

impl<S: KeyValueStore> UserDataStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.read(PROFILE_KEY)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.write(PROFILE_KEY, profile)
    }

    pub fn assessment(&self) -> Result<Option<AssessmentResult>, StoreError> {
        self.read(ASSESSMENT_KEY)
    }

    pub fn save_assessment(&self, result: &AssessmentResult) -> Result<(), StoreError> {
        self.write(ASSESSMENT_KEY, result)
    }

    pub fn recommendations(&self) -> Result<Vec<CareerRecommendation>, StoreError> {
        Ok(self.read(RECOMMENDATIONS_KEY)?.unwrap_or_default())
    }

    pub fn save_recommendations(
        &self,
        recommendations: &[CareerRecommendation],
    ) -> Result<(), StoreError> {
        self.write(RECOMMENDATIONS_KEY, &recommendations)
    }

    pub fn skill_gaps(&self) -> Result<Vec<SkillGap>, StoreError> {
        Ok(self.read(SKILL_GAPS_KEY)?.unwrap_or_default())
    }

    pub fn save_skill_gaps(&self, gaps: &[SkillGap]) -> Result<(), StoreError> {
        self.write(SKILL_GAPS_KEY, &gaps)
    }

    pub fn language(&self) -> Result<String, StoreError> {
        Ok(self
            .read::<String>(LANGUAGE_KEY)?
            .filter(|code| !code.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()))
    }

    pub fn set_language(&self, code: &str) -> Result<(), StoreError> {
        self.write(LANGUAGE_KEY, &code.trim())
    }

    pub fn theme(&self) -> Result<Theme, StoreError> {
        Ok(self.read(THEME_KEY)?.unwrap_or_default())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.write(THEME_KEY, &theme)
    }

    /// Forget everything stored for the user.
    pub fn clear(&self) -> Result<(), StoreError> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let value = match self.store.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(None),
            Err(StoreError::Corrupt { key, source }) => {
                warn!(%key, error = %source, "discarding unreadable stored value");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        match serde_json::from_value(value) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(err) => {
                warn!(key, error = %err, "stored value has an unexpected shape; ignoring it");
                Ok(None)
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_value(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.save(key, encoded)
    }
}
