use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::header::{target_at, HeaderTarget};
use crate::components::modals::command_palette::{hit_test, PaletteHit};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
        // The hotkey works from any mode
        if app_state.keymap.is_palette_hotkey(key) {
            return Some(Action::TogglePalette);
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    match app_state.mode() {
        AppMode::CommandPalette => match event {
            Event::Key(key) => map_palette_key(key),
            Event::Mouse(mouse) => {
                let view = app_state.palette.view(&app_state.registry())?;
                match mouse.kind {
                    MouseEventKind::ScrollDown => Some(Action::PaletteNext),
                    MouseEventKind::ScrollUp => Some(Action::PalettePrev),
                    MouseEventKind::Moved => match hit_test(area, &view, mouse.column, mouse.row) {
                        PaletteHit::Row(index) if view.selected != Some(index) => {
                            Some(Action::PaletteHover(index))
                        }
                        _ => None,
                    },
                    MouseEventKind::Down(MouseButton::Left) => {
                        match hit_test(area, &view, mouse.column, mouse.row) {
                            PaletteHit::Row(index) => Some(Action::PaletteClick(index)),
                            PaletteHit::Inside => None,
                            // Backdrop
                            PaletteHit::Outside => Some(Action::ClosePalette),
                        }
                    }
                    _ => None,
                }
            }
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => match key.code {
                KeyCode::PageDown => Some(Action::ScrollDown(page_step(app_state))),
                KeyCode::PageUp => Some(Action::ScrollUp(page_step(app_state))),
                _ => app_state.keymap.get_action(key),
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::ScrollDown(1)),
                MouseEventKind::ScrollUp => Some(Action::ScrollUp(1)),
                MouseEventKind::Down(MouseButton::Left) => {
                    let header = ui::get_layout(area).header;
                    match target_at(app_state, header, mouse.column, mouse.row)? {
                        HeaderTarget::Section(section) => Some(Action::ScrollToSection(section)),
                        HeaderTarget::Search => Some(Action::OpenPalette),
                    }
                }
                _ => None,
            },
            _ => None,
        },
    }
}

fn map_palette_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::ClosePalette),
        KeyCode::Down => Some(Action::PaletteNext),
        KeyCode::Up => Some(Action::PalettePrev),
        KeyCode::Enter => Some(Action::PaletteActivate),
        KeyCode::Backspace => Some(Action::PaletteBackspace),
        KeyCode::Char(c) if (KeyModifiers::SHIFT).contains(key.modifiers) => {
            Some(Action::PaletteInput(c))
        }
        _ => None,
    }
}

fn page_step(app_state: &AppState) -> u16 {
    app_state.page.viewport_height.saturating_sub(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{AppConfig, KeyConfig};
    use crate::components::modals::command_palette::palette_layout;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseEvent};

    const SIZE: Size = Size {
        width: 100,
        height: 30,
    };

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn open_state() -> AppState {
        let mut state = AppState::default();
        state.palette.open(&state.fresh_registry());
        state
    }

    #[test]
    fn test_hotkey_toggles_in_both_modes() {
        let ctrl_k = key(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(
            map_event_to_action(ctrl_k.clone(), &AppState::default(), SIZE),
            Some(Action::TogglePalette)
        );
        assert_eq!(
            map_event_to_action(ctrl_k, &open_state(), SIZE),
            Some(Action::TogglePalette)
        );
    }

    #[test]
    fn test_shift_only_hotkey_keeps_query_input() {
        let mut state = AppState::new(&AppConfig {
            keys: KeyConfig {
                palette_hotkey: "shift+k".to_string(),
            },
            ..AppConfig::default()
        });
        state.palette.open(&state.fresh_registry());
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('K'), KeyModifiers::SHIFT), &state, SIZE),
            Some(Action::PaletteInput('K'))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('k'), KeyModifiers::CONTROL), &state, SIZE),
            Some(Action::TogglePalette)
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        });
        assert_eq!(map_event_to_action(release, &AppState::default(), SIZE), None);
    }

    #[test]
    fn test_palette_captures_printable_keys() {
        let state = open_state();
        // 'q' quits on the page but is query text inside the palette
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q'), KeyModifiers::empty()), &state, SIZE),
            Some(Action::PaletteInput('q'))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('G'), KeyModifiers::SHIFT), &state, SIZE),
            Some(Action::PaletteInput('G'))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('x'), KeyModifiers::ALT), &state, SIZE),
            None
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc, KeyModifiers::empty()), &state, SIZE),
            Some(Action::ClosePalette)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter, KeyModifiers::empty()), &state, SIZE),
            Some(Action::PaletteActivate)
        );
    }

    #[test]
    fn test_page_keys() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q'), KeyModifiers::empty()), &state, SIZE),
            Some(Action::Quit)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::PageDown, KeyModifiers::empty()), &state, SIZE),
            Some(Action::ScrollDown(1))
        );
    }

    #[test]
    fn test_palette_mouse() {
        let state = open_state();
        let view = state.palette.view(&state.registry()).unwrap();
        let layout = palette_layout(Rect::new(0, 0, SIZE.width, SIZE.height), &view);
        let x = layout.results.x + 2;
        let second_row = layout.results.y + 2;

        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Moved, x, second_row), &state, SIZE),
            Some(Action::PaletteHover(1))
        );
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), x, second_row),
                &state,
                SIZE
            ),
            Some(Action::PaletteClick(1))
        );
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 0, SIZE.height - 1),
                &state,
                SIZE
            ),
            Some(Action::ClosePalette)
        );
    }

    #[test]
    fn test_header_click_opens_palette() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), SIZE.width - 2, 0),
                &state,
                SIZE
            ),
            Some(Action::OpenPalette)
        );
    }
}
