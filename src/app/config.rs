use crate::domain::page::Profile;
use crate::i18n::Language;
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub confirm_delay_ms: u64,
    pub scroll_delay_ms: u64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            confirm_delay_ms: 1000,
            scroll_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// Global palette toggle, e.g. "ctrl+k".
    pub palette_hotkey: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            palette_hotkey: "ctrl+k".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub language: Language,
    pub theme: PaletteType,
    pub keys: KeyConfig,
    pub palette: PaletteConfig,
    pub profile: Profile,
}

impl AppConfig {
    /// Reads the user config, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load() -> Self {
        let Some(path) = get_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring config: {err:#}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("portico");
        path.push("config.toml");
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
language = "en"
theme = "nord"

[palette]
confirm_delay_ms = 1500

[profile]
email = "me@example.org"
cv_url = "https://example.org/cv.pdf"
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.theme, PaletteType::Nord);
        assert_eq!(config.palette.confirm_delay_ms, 1500);
        assert_eq!(config.palette.scroll_delay_ms, 100);
        assert_eq!(config.keys.palette_hotkey, "ctrl+k");
        assert_eq!(config.profile.email, "me@example.org");
        assert_eq!(
            config.profile.cv_url.as_deref(),
            Some("https://example.org/cv.pdf")
        );
        assert_eq!(config.profile.name, Profile::default().name);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language = 42").unwrap();
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_empty_config_is_default() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(AppConfig::load_from(file.path()).unwrap(), AppConfig::default());
    }
}
