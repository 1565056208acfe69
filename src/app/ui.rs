use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::command_palette::CommandPaletteModal;
use crate::components::modals::helpers::dim_area;
use crate::components::page::PageView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

/// Rows of page text visible inside the body border.
#[must_use]
pub fn page_viewport_height(area: Rect) -> u16 {
    get_layout(area).body.height.saturating_sub(2)
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }
    let theme = &app_state.theme;
    let layout = get_layout(f.area());

    // --- Header ---
    if layout.header.width > 0 && layout.header.height > 0 {
        f.render_widget(
            Header {
                state: app_state,
                theme,
            },
            layout.header,
        );
    }

    // --- Body ---
    if layout.body.width > 0 && layout.body.height > 0 {
        let strings = app_state.strings();
        let (border, title_style) = if app_state.mode() == AppMode::Normal {
            (theme.border_focus, theme.header_active)
        } else {
            (theme.border, theme.header_item)
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    app_state.active_section().label(strings).to_uppercase(),
                    title_style,
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(layout.body);
        f.render_widget(block, layout.body);

        let model = app_state.page_model();
        f.render_widget(
            PageView {
                model: &model,
                scroll: app_state.page.scroll,
                theme,
            },
            inner,
        );
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    // --- Palette overlay ---
    if let Some(view) = app_state.palette.view(&app_state.registry()) {
        let area = f.area();
        dim_area(f.buffer_mut(), area);
        f.render_widget(
            CommandPaletteModal {
                theme,
                strings: app_state.strings(),
                view: &view,
                frame_count: app_state.frame_count,
            },
            area,
        );
    }
}
