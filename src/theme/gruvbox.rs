use super::palette::Palette;
use ratatui::style::Color;

/// Gruvbox dark, using the bright accent row.
pub const GRUVBOX: Palette = Palette {
    deep: Color::Rgb(29, 32, 33),           // bg0_h
    panel: Color::Rgb(50, 48, 47),          // bg0_s
    background: Color::Rgb(40, 40, 40),     // bg0
    surface: Color::Rgb(60, 56, 54),        // bg1
    surface_raised: Color::Rgb(80, 73, 69), // bg2
    border: Color::Rgb(102, 92, 84),        // bg3

    text: Color::Rgb(235, 219, 178),
    subtle: Color::Rgb(213, 196, 161),
    muted: Color::Rgb(189, 174, 147),
    label: Color::Rgb(146, 131, 116),
    faint: Color::Rgb(124, 111, 100),

    accent: Color::Rgb(131, 165, 152),
    link: Color::Rgb(142, 192, 124),
    heading: Color::Rgb(211, 134, 155),
    bullet: Color::Rgb(254, 128, 25),

    success: Color::Rgb(184, 187, 38),
    warning: Color::Rgb(250, 189, 47),
    danger: Color::Rgb(251, 73, 52),
};
