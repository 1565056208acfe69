use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
    ui::page_viewport_height,
};
use crate::theme::Theme;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(2);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ScrollDown(n) => {
            let max_scroll = max_scroll(state);
            state.page.scroll = state
                .page
                .scroll
                .saturating_add(usize::from(*n))
                .min(max_scroll);
            UpdateResult::Handled(None)
        }
        Action::ScrollUp(n) => {
            state.page.scroll = state.page.scroll.saturating_sub(usize::from(*n));
            UpdateResult::Handled(None)
        }
        Action::ScrollToSection(section) => {
            let offset = state.page_model().offset_of(*section);
            state.page.scroll = offset.min(max_scroll(state));
            tracing::debug!(section = section.id(), offset, "scrolled to section");
            UpdateResult::Handled(None)
        }
        Action::ToggleLanguage => {
            state.language = state.language.toggled();
            // Labels changed under an open palette; keep its selection in range
            let registry = state.registry();
            state.palette.sync(&registry);
            let max_scroll = max_scroll(state);
            state.page.scroll = state.page.scroll.min(max_scroll);
            set_status(state, format!("Language: {}", state.language.code()));
            UpdateResult::Handled(None)
        }
        Action::CycleTheme => {
            state.palette_type = state.palette_type.next();
            state.theme = Theme::from_palette_type(state.palette_type);
            set_status(state, format!("Theme: {}", state.palette_type.label()));
            UpdateResult::Handled(None)
        }
        Action::DismissError => {
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::Resize(width, height) => {
            state.page.viewport_height = page_viewport_height(Rect::new(0, 0, *width, *height));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Clears a status message once it has been shown long enough.
pub fn expire_status(state: &mut AppState, now: Instant) {
    if state.status_clear_time.is_some_and(|t| now >= t) {
        state.status_message = None;
        state.status_clear_time = None;
    }
}

// The last row may scroll up to the top of the viewport
fn max_scroll(state: &AppState) -> usize {
    state.page_model().len().saturating_sub(1)
}

fn set_status(state: &mut AppState, message: String) {
    state.status_message = Some(message);
    state.status_clear_time = Some(Instant::now() + STATUS_TTL);
}
