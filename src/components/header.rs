use crate::app::keymap::hotkey_label;
use crate::app::state::AppState;
use crate::domain::page::Section;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTarget {
    Section(Section),
    Search,
}

/// Clickable regions of the header row, left to right.
#[must_use]
pub fn header_targets(state: &AppState, area: Rect) -> Vec<(Rect, HeaderTarget)> {
    let strings = state.strings();
    let mut targets = Vec::new();
    let mut x = area.x + logo_text(state).chars().count() as u16 + 1;

    for section in Section::all() {
        let width = nav_text(section.label(strings)).chars().count() as u16;
        if x + width > area.right() {
            break;
        }
        targets.push((Rect::new(x, area.y, width, 1), HeaderTarget::Section(*section)));
        x += width + 1;
    }

    let search = search_text(state);
    let search_width = Span::raw(search.as_str()).width() as u16;
    if x + search_width <= area.right() {
        targets.push((
            Rect::new(area.right() - search_width, area.y, search_width, 1),
            HeaderTarget::Search,
        ));
    }
    targets
}

#[must_use]
pub fn target_at(state: &AppState, area: Rect, column: u16, row: u16) -> Option<HeaderTarget> {
    header_targets(state, area)
        .into_iter()
        .find(|(rect, _)| crate::components::modals::helpers::contains(*rect, column, row))
        .map(|(_, target)| target)
}

fn logo_text(state: &AppState) -> String {
    format!(" {} ", state.profile.name)
}

fn nav_text(label: &str) -> String {
    format!(" {label} ")
}

fn search_text(state: &AppState) -> String {
    format!(
        " {} {}  {} ",
        glyphs::SEARCH,
        state.strings().search_button,
        hotkey_label(&state.keymap.palette_hotkey)
    )
}

pub struct Header<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(vec![
            Span::styled(logo_text(self.state), self.theme.header_logo),
            Span::raw(" "),
        ]))
        .style(self.theme.header)
        .render(area, buf);

        let active = self.state.active_section();
        let strings = self.state.strings();
        for (rect, target) in header_targets(self.state, area) {
            let (text, style) = match target {
                HeaderTarget::Section(section) => (
                    nav_text(section.label(strings)),
                    if section == active {
                        self.theme.header_active
                    } else {
                        self.theme.header_item
                    },
                ),
                HeaderTarget::Search => (search_text(self.state), self.theme.header_button),
            };
            buf.set_stringn(rect.x, rect.y, text, usize::from(rect.width), style);
        }
    }
}
