use crate::domain::page::{PageLine, PageModel};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct PageView<'a> {
    pub model: &'a PageModel,
    pub scroll: usize,
    pub theme: &'a Theme,
}

impl PageView<'_> {
    fn line(&self, line: &PageLine) -> Line<'static> {
        let theme = self.theme;
        match line {
            PageLine::Title(text) => Line::from(Span::styled(format!("  {text}"), theme.page_title)),
            PageLine::Heading(text) => Line::from(vec![
                Span::styled("  ## ", theme.dimmed),
                Span::styled(text.clone(), theme.page_heading),
            ]),
            PageLine::Text(text) => Line::from(Span::styled(format!("  {text}"), theme.page_text)),
            PageLine::Bullet(text) => Line::from(vec![
                Span::styled("  • ", theme.page_bullet),
                Span::styled(text.clone(), theme.page_text),
            ]),
            PageLine::Link { label, url } => Line::from(vec![
                Span::styled(format!("  {label} "), theme.page_badge),
                Span::styled(url.clone(), theme.page_link),
            ]),
            PageLine::Blank => Line::default(),
        }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .model
            .lines()
            .skip(self.scroll)
            .take(usize::from(area.height))
            .map(|line| self.line(line))
            .collect();

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::NONE))
            .style(self.theme.header)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::{Profile, Section};
    use crate::i18n::EN;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_scroll_starts_at_section() {
        let model = PageModel::build(&Profile::default(), &EN);
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    PageView {
                        model: &model,
                        scroll: model.offset_of(Section::Stack),
                        theme: &Theme::default(),
                    },
                    f.area(),
                );
            })
            .unwrap();
        let first_row: String = terminal.backend().buffer().content()[..60]
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(first_row.contains(EN.stack_title));
    }
}
