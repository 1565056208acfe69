use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub header_button: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub page_title: Style,
    pub page_badge: Style,
    pub page_heading: Style,
    pub page_text: Style,
    pub page_bullet: Style,
    pub page_link: Style,

    pub modal: Style,
    pub palette_group: Style,
    pub palette_query: Style,
    pub palette_confirmed: Style,

    pub highlight: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }

    /// Next palette in `all()`, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        let pos = all.iter().position(|p| *p == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.border),
            border_focus: Style::default().fg(p.accent),

            status_ready: Style::default()
                .bg(p.success)
                .fg(p.deep)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.accent)
                .fg(p.deep)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.warning)
                .fg(p.deep)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.danger)
                .fg(p.deep)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.deep)
                .add_modifier(Modifier::BOLD),
            header_active: Style::default()
                .bg(p.success)
                .fg(p.deep)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface).fg(p.text),
            header_button: Style::default().bg(p.surface_raised).fg(p.subtle),
            header: Style::default().bg(p.background).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.background).fg(p.text),
            footer_group_name: Style::default().fg(p.muted).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.deep).fg(p.muted),

            page_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            page_badge: Style::default().fg(p.success).add_modifier(Modifier::ITALIC),
            page_heading: Style::default().fg(p.heading).add_modifier(Modifier::BOLD),
            page_text: Style::default().fg(p.subtle),
            page_bullet: Style::default().fg(p.bullet),
            page_link: Style::default()
                .fg(p.link)
                .add_modifier(Modifier::UNDERLINED),

            modal: Style::default().bg(p.panel).fg(p.text),
            palette_group: Style::default()
                .fg(p.label)
                .add_modifier(Modifier::BOLD),
            palette_query: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            palette_confirmed: Style::default().fg(p.success).add_modifier(Modifier::BOLD),

            highlight: Style::default().bg(p.surface).add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .bg(p.accent)
                .fg(p.deep)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.faint).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_palette() {
        let mut t = PaletteType::default();
        let mut seen = vec![t];
        for _ in 1..PaletteType::all().len() {
            t = t.next();
            seen.push(t);
        }
        assert_eq!(seen, PaletteType::all());
        assert_eq!(t.next(), PaletteType::default());
    }
}
