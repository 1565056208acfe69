use super::action::Action;
use super::config::KeyConfig;
use crate::domain::page::Section;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    /// Toggles the palette from any mode.
    pub palette_hotkey: KeyEvent,
    // Page bindings; the palette handles its own keys and PgUp/PgDn
    // depend on the viewport
    pub global: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let palette_hotkey = parse_hotkey(&config.palette_hotkey).unwrap_or_else(|| {
            tracing::warn!(hotkey = %config.palette_hotkey, "invalid hotkey, using ctrl+k");
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)
        });

        let mut global = HashMap::new();
        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(key(KeyCode::Char('j')), Action::ScrollDown(1));
        global.insert(key(KeyCode::Down), Action::ScrollDown(1));
        global.insert(key(KeyCode::Char('k')), Action::ScrollUp(1));
        global.insert(key(KeyCode::Up), Action::ScrollUp(1));
        global.insert(key(KeyCode::Home), Action::ScrollToSection(Section::Home));
        global.insert(key(KeyCode::Char('1')), Action::ScrollToSection(Section::Home));
        global.insert(key(KeyCode::Char('2')), Action::ScrollToSection(Section::Projects));
        global.insert(key(KeyCode::Char('3')), Action::ScrollToSection(Section::Stack));
        global.insert(key(KeyCode::Char('4')), Action::ScrollToSection(Section::Contact));
        global.insert(key(KeyCode::Char(':')), Action::OpenPalette);
        global.insert(key(KeyCode::Char('l')), Action::ToggleLanguage);
        global.insert(key(KeyCode::Char('t')), Action::CycleTheme);
        global.insert(key(KeyCode::Esc), Action::DismissError);

        Self {
            palette_hotkey,
            global,
        }
    }

    #[must_use]
    pub fn is_palette_hotkey(&self, event: &KeyEvent) -> bool {
        normalize(event.code) == self.palette_hotkey.code
            && event.modifiers == self.palette_hotkey.modifiers
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        // Terminals report kind/state bits we do not bind on
        let lookup = KeyEvent::new(event.code, event.modifiers);
        if let Some(action) = self.global.get(&lookup) {
            return Some(action.clone());
        }
        // Shifted punctuation arrives with SHIFT set on some terminals
        if event.modifiers == KeyModifiers::SHIFT {
            return self
                .global
                .get(&KeyEvent::new(event.code, KeyModifiers::empty()))
                .cloned();
        }
        None
    }
}

/// Parses "ctrl+k", "alt+p", "ctrl+shift+p" style bindings. The last segment
/// must be a single character.
#[must_use]
pub fn parse_hotkey(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut code = None;
    for part in spec.split('+').map(str::trim) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" | "meta" | "option" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            "super" | "cmd" => modifiers.insert(KeyModifiers::SUPER),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next(), code) {
                    (Some(c), None, None) => code = Some(KeyCode::Char(c)),
                    _ => return None,
                }
            }
        }
    }
    // Shift alone still types a character into the query
    if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) {
        return None;
    }
    code.map(|c| KeyEvent::new(c, modifiers))
}

/// Display form of a hotkey, e.g. "Ctrl+K".
#[must_use]
pub fn hotkey_label(event: &KeyEvent) -> String {
    let mut parts = Vec::new();
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if event.modifiers.contains(KeyModifiers::SUPER) {
        parts.push("Cmd".to_string());
    }
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }
    match event.code {
        KeyCode::Char(c) => parts.push(c.to_ascii_uppercase().to_string()),
        other => parts.push(format!("{other:?}")),
    }
    parts.join("+")
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}
