use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::value::{SettingScalar, SettingValue};

pub const SETTING_TRANSLATION: &str = "translation";
pub const SETTING_OPEN_LAST_FILE: &str = "open-last-file";
pub const SETTING_PREVIEW_DELAY: &str = "preview-delay";
pub const SETTING_LAST_FILE: &str = "last-file";
pub const SETTING_LAST_FILES: &str = "last-files";
pub const SETTING_FIND_REPLACE_FIND_TEXT: &str = "fr-find-text";
pub const SETTING_FIND_REPLACE_REPLACE: &str = "fr-replace";
pub const SETTING_FIND_REPLACE_REPLACE_TEXT: &str = "fr-replace-text";
pub const SETTING_FIND_REPLACE_FORWARD: &str = "fr-forward";
pub const SETTING_FIND_REPLACE_CASE_SENSITIVE: &str = "fr-case-sensitive";
pub const SETTING_FIND_REPLACE_WHOLE_WORDS: &str = "fr-whole-words";
pub const SETTING_FIND_REPLACE_REGEXP: &str = "fr-regexp";

/// Bundled interface translations: locale code to display name.
const TRANSLATIONS: &[(&str, &str)] = &[
    ("en", "English"),
    ("ru", "Русский"),
    ("zh_CN", "中文（简体）"),
];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize settings {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write settings {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to prepare directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Whether a write flushes to the backing file before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Flush synchronously before the call returns.
    Immediate,
    /// Leave the flush to a later `sync()` or to the drop-time flush.
    Deferred,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    global: BTreeMap<String, SettingValue>,
    #[serde(default)]
    settings: BTreeMap<String, SettingValue>,
}

/// Typed key/value store over a namespaced JSON document.
/// （以命名空間 JSON 文件為後端的型別化鍵值儲存。）
///
/// Constructed explicitly by the application root and passed to whichever
/// component needs preferences. Lookups never fail: a missing key falls
/// back to the registered default for that key, then to the scalar's zero
/// value. The in-memory default table is rebuilt each run and is never
/// persisted.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    document: SettingsDocument,
    defaults: HashMap<String, SettingValue>,
    dirty: bool,
}

impl SettingsStore {
    /// Loads the store from `path`; a missing file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                document: SettingsDocument::default(),
                defaults: HashMap::new(),
                dirty: false,
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        let document: SettingsDocument =
            serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            document,
            defaults: HashMap::new(),
            dirty: false,
        })
    }

    /// Merges default values into the in-memory table. Later calls add or
    /// overwrite individual keys; the table is never replaced wholesale.
    pub fn register_defaults<I, K>(&mut self, defaults: I)
    where
        I: IntoIterator<Item = (K, SettingValue)>,
        K: Into<String>,
    {
        for (key, value) in defaults {
            self.defaults.insert(key.into(), value);
        }
    }

    /// Returns the value of `key`: the persisted value if present, the
    /// registered default otherwise, the scalar's zero value failing both.
    pub fn get<T: SettingScalar>(&self, key: &str) -> T {
        if let Some(value) = self.document.settings.get(key) {
            if let Some(typed) = T::from_value(value) {
                return typed;
            }
        }
        self.defaults
            .get(key)
            .and_then(T::from_value)
            .unwrap_or_else(T::zero)
    }

    /// Returns the persisted value of `key`, or `default` verbatim when
    /// absent. The registered default table is bypassed.
    pub fn get_or<T: SettingScalar>(&self, key: &str, default: T) -> T {
        match self.document.settings.get(key).and_then(T::from_value) {
            Some(value) => value,
            None => default,
        }
    }

    /// Writes `value` under `key` in the settings namespace. The new value
    /// is visible to reads immediately; `sync` controls when it reaches
    /// the backing file.
    pub fn set<T: SettingScalar>(
        &mut self,
        key: impl Into<String>,
        value: T,
        sync: SyncMode,
    ) -> Result<(), SettingsError> {
        self.document.settings.insert(key.into(), value.into_value());
        self.apply_sync(sync)
    }

    /// Writes `value` under `key` in the top-level global namespace.
    pub fn set_global<T: SettingScalar>(
        &mut self,
        key: impl Into<String>,
        value: T,
        sync: SyncMode,
    ) -> Result<(), SettingsError> {
        self.document.global.insert(key.into(), value.into_value());
        self.apply_sync(sync)
    }

    /// Reports whether a persisted value exists under `key`. A leading
    /// `/` addresses the top-level global namespace (marker stripped);
    /// any other key addresses the settings namespace.
    pub fn contains(&self, key: &str) -> bool {
        match key.strip_prefix('/') {
            Some(global_key) => self.document.global.contains_key(global_key),
            None => self.document.settings.contains_key(key),
        }
    }

    /// Removes `key` from the settings namespace; absent keys are not an
    /// error.
    pub fn remove(&mut self, key: &str, sync: SyncMode) -> Result<(), SettingsError> {
        if self.document.settings.remove(key).is_none() {
            return Ok(());
        }
        self.apply_sync(sync)
    }

    /// Flushes any pending state to the backing file.
    pub fn sync(&mut self) -> Result<(), SettingsError> {
        self.flush()?;
        self.dirty = false;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn apply_sync(&mut self, sync: SyncMode) -> Result<(), SettingsError> {
        match sync {
            SyncMode::Immediate => self.sync(),
            SyncMode::Deferred => {
                self.dirty = true;
                Ok(())
            }
        }
    }

    fn flush(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = serde_json::to_string_pretty(&self.document).map_err(|source| {
            SettingsError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, payload.as_bytes()).map_err(|source| SettingsError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl Drop for SettingsStore {
    fn drop(&mut self) {
        // Deferred writes get a best-effort flush; a failing backend
        // leaves the session in-memory only.
        if self.dirty {
            if let Err(err) = self.flush() {
                log::warn!(
                    "could not flush deferred settings to {}: {err}",
                    self.path.display()
                );
            }
        }
    }
}

/// Available interface translations, fixed at build time.
pub fn translations() -> &'static [(&'static str, &'static str)] {
    TRANSLATIONS
}
