use crate::app::state::PaletteView;
use crate::i18n::Strings;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{contains, draw_drop_shadow};

// Borders, query, separator, legend
const CHROME_HEIGHT: u16 = 5;
const MAX_WIDTH: u16 = 72;

/// One line of the results area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLine {
    Group(usize),
    Item { group: usize, row: usize },
    Spacer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub separator: Rect,
    pub results: Rect,
    pub legend: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteHit {
    /// Flattened index of the row under the pointer.
    Row(usize),
    Inside,
    Outside,
}

#[must_use]
pub fn result_lines(view: &PaletteView) -> Vec<ResultLine> {
    let mut lines = Vec::new();
    for (g, group) in view.groups.iter().enumerate() {
        if g > 0 {
            lines.push(ResultLine::Spacer);
        }
        lines.push(ResultLine::Group(g));
        lines.extend((0..group.rows.len()).map(|row| ResultLine::Item { group: g, row }));
    }
    lines
}

/// Modal geometry within `area`. Input mapping uses the same function as
/// rendering so clicks land on what was drawn.
#[must_use]
pub fn palette_layout(area: Rect, view: &PaletteView) -> PaletteLayout {
    let width = ((u32::from(area.width) * 3 / 5) as u16)
        .max(area.width.min(40))
        .min(MAX_WIDTH);
    let content = if view.is_empty() {
        2
    } else {
        result_lines(view).len() as u16
    };
    let max_height = ((u32::from(area.height) * 3 / 5) as u16).max(area.height.min(8));
    let height = content
        .saturating_add(CHROME_HEIGHT)
        .min(max_height)
        .min(area.height);
    let top = ((u32::from(area.height) * 15 / 100) as u16).min(area.height - height);

    let modal = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + top,
        width,
        height,
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Legend
        ])
        .split(modal.inner(Margin::new(1, 1)));

    PaletteLayout {
        modal,
        query: chunks[0],
        separator: chunks[1],
        results: chunks[2],
        legend: chunks[3],
    }
}

/// First result line to draw so the selected row stays visible.
#[must_use]
pub fn scroll_offset(lines: &[ResultLine], view: &PaletteView, height: u16) -> usize {
    let height = usize::from(height);
    let Some(selected) = view.selected else {
        return 0;
    };
    let position = lines.iter().position(|line| match line {
        ResultLine::Item { group, row } => view.groups[*group].rows[*row].index == selected,
        _ => false,
    });
    match position {
        Some(pos) if height > 0 && pos >= height => pos + 1 - height,
        _ => 0,
    }
}

#[must_use]
pub fn hit_test(area: Rect, view: &PaletteView, column: u16, row: u16) -> PaletteHit {
    let layout = palette_layout(area, view);
    if !contains(layout.modal, column, row) {
        return PaletteHit::Outside;
    }
    if contains(layout.results, column, row) {
        let lines = result_lines(view);
        let offset = scroll_offset(&lines, view, layout.results.height);
        let line = offset + usize::from(row - layout.results.y);
        if let Some(ResultLine::Item { group, row }) = lines.get(line) {
            return PaletteHit::Row(view.groups[*group].rows[*row].index);
        }
    }
    PaletteHit::Inside
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub strings: &'a Strings,
    pub view: &'a PaletteView,
    pub frame_count: u64,
}

impl CommandPaletteModal<'_> {
    fn render_query(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            format!(" {} ", glyphs::SEARCH),
            self.theme.border_focus,
        )];
        if self.view.query.is_empty() {
            spans.push(Span::styled(self.strings.palette_placeholder, self.theme.dimmed));
        } else {
            spans.push(Span::styled(&self.view.query, self.theme.palette_query));
        }
        // Half-second blink on the 250 ms tick
        if (self.frame_count / 2) % 2 == 0 {
            spans.push(Span::styled(glyphs::CURSOR, self.theme.border_focus));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let esc = Span::styled(" Esc ", self.theme.footer_segment_key);
        let esc_width = esc.width() as u16;
        if area.width > esc_width + 10 {
            buf.set_span(area.right() - esc_width, area.y, &esc, esc_width);
        }
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        if self.view.is_empty() {
            let no_results = Line::from(Span::styled(
                format!("  {}", self.strings.palette_no_results),
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            buf.set_line(area.x, area.y, &no_results, area.width);
            return;
        }

        let lines = result_lines(self.view);
        let offset = scroll_offset(&lines, self.view, area.height);
        for (y, line) in (area.top()..area.bottom()).zip(lines.iter().skip(offset)) {
            match line {
                ResultLine::Group(g) => {
                    let label = self.view.groups[*g].label.to_uppercase();
                    buf.set_string(area.x + 1, y, label, self.theme.palette_group);
                }
                ResultLine::Item { group, row } => {
                    let row = &self.view.groups[*group].rows[*row];
                    let style = if row.selected {
                        self.theme.list_selected
                    } else if row.highlighted {
                        self.theme.palette_confirmed
                    } else {
                        self.theme.list_item
                    };
                    let row_area = Rect::new(area.x, y, area.width, 1);
                    buf.set_style(
                        row_area,
                        if row.selected { style } else { self.theme.modal },
                    );
                    let text = Line::from(vec![
                        Span::styled(if row.selected { " > " } else { "   " }, style),
                        Span::styled(format!("{} ", glyphs::icon(row.icon)), style),
                        Span::styled(row.label.as_str(), style),
                    ]);
                    buf.set_line(area.x, y, &text, area.width);
                    if row.selected && area.width > 4 {
                        buf.set_string(area.right() - 3, y, glyphs::POINTER, style);
                    }
                }
                ResultLine::Spacer => {}
            }
        }
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let hints = Line::from(vec![
            Span::styled(format!(" {} ", glyphs::ARROWS), self.theme.footer_segment_key),
            Span::styled(format!(" {}  ", self.strings.palette_navigate), self.theme.dimmed),
            Span::styled(format!(" {} ", glyphs::RETURN), self.theme.footer_segment_key),
            Span::styled(format!(" {}", self.strings.palette_select), self.theme.dimmed),
        ]);
        let hints_width = hints.width() as u16;
        buf.set_line(area.x, area.y, &hints, area.width);

        // A failed command replaces the tagline until the next activation
        let (right, style) = match &self.view.failure {
            Some(failure) => (format!(" {failure} "), self.theme.status_error),
            None => (self.strings.palette_footer.to_string(), self.theme.dimmed),
        };
        let right_width = Span::raw(right.as_str()).width() as u16;
        if area.width > hints_width + right_width + 1 {
            buf.set_string(area.right() - right_width, area.y, right, style);
        } else if self.view.failure.is_some() {
            buf.set_stringn(area.x, area.y, right, usize::from(area.width), style);
        }
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = palette_layout(area, self.view);
        if layout.modal.width < 3 || layout.modal.height < 3 {
            return;
        }

        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!(" {} ", self.strings.palette_title),
                    self.theme.header_active,
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.modal);
        block.render(layout.modal, buf);

        self.render_query(layout.query, buf);

        let separator = glyphs::SEPARATOR.repeat(usize::from(layout.separator.width));
        buf.set_string(
            layout.separator.x,
            layout.separator.y,
            separator,
            self.theme.border,
        );

        self.render_results(layout.results, buf);
        self.render_legend(layout.legend, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::CommandPalette;
    use crate::domain::filter::tests::sample_registry;
    use crate::i18n::EN;
    use ratatui::{backend::TestBackend, Terminal};

    fn view_for(query: &str) -> PaletteView {
        let registry = sample_registry();
        let mut palette = CommandPalette::default();
        palette.open(&registry);
        palette.set_query(&registry, query);
        palette.view(&registry).unwrap()
    }

    fn render(view: &PaletteView, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    CommandPaletteModal {
                        theme: &Theme::default(),
                        strings: &EN,
                        view,
                        frame_count: 0,
                    },
                    f.area(),
                );
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_result_lines_separate_groups() {
        let view = view_for("");
        let lines = result_lines(&view);
        assert_eq!(lines[0], ResultLine::Group(0));
        assert_eq!(lines[5], ResultLine::Spacer);
        assert_eq!(lines[6], ResultLine::Group(1));
        assert_eq!(lines.len(), 1 + 4 + 1 + 1 + 3);
    }

    #[test]
    fn test_renders_groups_and_rows() {
        let text = render(&view_for(""), 100, 40);
        assert!(text.contains("NAVIGATION"));
        assert!(text.contains("ACTIONS"));
        assert!(text.contains("GitHub"));
        assert!(text.contains("Copy Email"));
    }

    #[test]
    fn test_renders_no_results() {
        let view = view_for("zzz");
        assert!(view.is_empty());
        let text = render(&view, 100, 40);
        assert!(text.contains("No results found."));
    }

    #[test]
    fn test_hit_test_matches_rendered_rows() {
        let area = Rect::new(0, 0, 100, 40);
        let view = view_for("");
        let layout = palette_layout(area, &view);
        // First line is the group header, second the first item
        let x = layout.results.x + 2;
        assert_eq!(
            hit_test(area, &view, x, layout.results.y),
            PaletteHit::Inside
        );
        assert_eq!(
            hit_test(area, &view, x, layout.results.y + 1),
            PaletteHit::Row(0)
        );
        // Group header + 4 items + spacer + group header
        assert_eq!(
            hit_test(area, &view, x, layout.results.y + 7),
            PaletteHit::Row(4)
        );
        assert_eq!(hit_test(area, &view, 0, 0), PaletteHit::Outside);
    }

    #[test]
    fn test_selected_row_stays_visible() {
        let registry = sample_registry();
        let mut palette = CommandPalette::default();
        palette.open(&registry);
        palette.move_prev(); // Wraps to the last row
        let view = palette.view(&registry).unwrap();
        let lines = result_lines(&view);
        let offset = scroll_offset(&lines, &view, 3);
        assert_eq!(offset, lines.len() - 3);
        assert_eq!(scroll_offset(&lines, &view, 40), 0);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let view = view_for("");
        for (w, h) in [(1, 1), (2, 2), (5, 3), (10, 4), (20, 6)] {
            render(&view, w, h);
            let _ = hit_test(Rect::new(0, 0, w, h), &view, 0, 0);
        }
    }
}
