use super::config::AppConfig;
use super::dispatch::DispatchTiming;
use super::keymap::{hotkey_label, parse_hotkey, KeyMap};
use crate::domain::command::CommandGroup;
use crate::domain::page::{PageModel, Profile, Section};
use crate::i18n::{Language, Strings};
use std::sync::Arc;
use std::time::Instant;

pub mod command_palette;
pub mod error;

// Re-exports
pub use command_palette::{
    CommandPalette, CommandPaletteState, Lifecycle, PaletteGroupView, PaletteRow, PaletteView,
};
pub use error::{ErrorSeverity, ErrorState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,         // Reading the page
    CommandPalette, // Palette overlay has the keyboard
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub scroll: usize,
    pub viewport_height: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Host data (source of the command catalog) ---
    pub profile: Profile,
    pub language: Language,

    // --- UI State ---
    pub page: PageState,
    pub palette: CommandPalette,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub timing: DispatchTiming,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let keymap = KeyMap::from_config(&config.keys);
        // Hotkey fallback shows as a footer warning
        let last_error = parse_hotkey(&config.keys.palette_hotkey)
            .is_none()
            .then(|| {
                ErrorState::new(
                    format!(
                        "invalid palette_hotkey '{}', using {}",
                        config.keys.palette_hotkey,
                        hotkey_label(&keymap.palette_hotkey)
                    ),
                    ErrorSeverity::Warning,
                )
            });
        Self {
            last_error,
            profile: config.profile.clone(),
            language: config.language,
            keymap: Arc::new(keymap),
            timing: DispatchTiming::from(&config.palette),
            palette_type: config.theme,
            theme: crate::theme::Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    /// Derived from the palette's lifecycle so the two can never disagree.
    #[must_use]
    pub fn mode(&self) -> AppMode {
        if self.palette.is_open() {
            AppMode::CommandPalette
        } else {
            AppMode::Normal
        }
    }

    #[must_use]
    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    /// Command catalog for the current host state. Rebuilt on every call.
    #[must_use]
    pub fn registry(&self) -> Vec<CommandGroup> {
        super::command_palette::build_registry(
            self.strings(),
            &self.profile,
            self.palette.copied(),
        )
    }

    /// Catalog as it looks right after an open: transient flags cleared.
    #[must_use]
    pub fn fresh_registry(&self) -> Vec<CommandGroup> {
        super::command_palette::build_registry(self.strings(), &self.profile, false)
    }

    #[must_use]
    pub fn page_model(&self) -> PageModel {
        PageModel::build(&self.profile, self.strings())
    }

    #[must_use]
    pub fn active_section(&self) -> Section {
        self.page_model().section_at(self.page.scroll)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            profile: Profile::default(),
            language: Language::default(),
            page: PageState::default(),
            palette: CommandPalette::default(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            timing: DispatchTiming::default(),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::KeyConfig;

    #[test]
    fn test_invalid_hotkey_warns_on_startup() {
        let config = AppConfig {
            keys: KeyConfig {
                palette_hotkey: "shift+k".to_string(),
            },
            ..AppConfig::default()
        };
        let state = AppState::new(&config);
        let warning = state.last_error.unwrap();
        assert_eq!(warning.severity, ErrorSeverity::Warning);
        assert_eq!(warning.message, "invalid palette_hotkey 'shift+k', using Ctrl+K");
        assert_eq!(warning.suggestions.len(), 1);
    }

    #[test]
    fn test_valid_config_starts_clean() {
        assert!(AppState::new(&AppConfig::default()).last_error.is_none());
    }
}
