use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::{SkeletonError, ThemePalette, ThemeStore, FALLBACK_THEME};

/// Storage key the active theme name is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "skeleton-theme";

/// Theme settings from the `[theme]` table.
///
/// Every field defaults so a missing or partial file still yields a
/// working configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Palette used when nothing has been persisted yet.
    #[serde(default = "default_theme")]
    pub default: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Whether the active name is written back to storage.
    #[serde(default = "default_persist")]
    pub persist: bool,
    /// Custom palettes keyed by name. A built-in name replaces that palette.
    #[serde(default)]
    pub palettes: BTreeMap<String, ThemePalette>,
}

fn default_theme() -> String {
    FALLBACK_THEME.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_persist() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: default_theme(),
            storage_key: default_storage_key(),
            persist: default_persist(),
            palettes: BTreeMap::new(),
        }
    }
}

/// Top-level config file structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SkeletonConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SkeletonConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, SkeletonError> {
        let config: SkeletonConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path` and parse it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SkeletonError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Read `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), theme = %config.theme.default, "loaded skeleton config");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "using default skeleton config");
                SkeletonConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SkeletonError> {
        if self.theme.default.trim().is_empty() {
            return Err(SkeletonError::invalid("theme.default", "must not be empty"));
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(SkeletonError::invalid("theme.storage_key", "must not be empty"));
        }
        for (name, palette) in &self.theme.palettes {
            if name.trim().is_empty() {
                return Err(SkeletonError::invalid("theme.palettes", "palette name must not be empty"));
            }
            if let Some(field) = palette.first_empty_field() {
                return Err(SkeletonError::invalid(
                    format!("theme.palettes.{name}.{field}"),
                    "color must not be empty",
                ));
            }
        }
        Ok(())
    }

    /// A store with the built-ins, the configured palettes, and `active`
    /// (or the configured default) selected.
    pub fn build_store(&self, active: Option<&str>) -> ThemeStore {
        let mut store = ThemeStore::with_active(active.unwrap_or(self.theme.default.as_str()));
        for (name, palette) in &self.theme.palettes {
            store.register(name.clone(), palette.clone());
        }
        store
    }
}
