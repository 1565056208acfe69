use super::palette::Palette;
use ratatui::style::Color;

/// Catppuccin Mocha.
pub const CATPPUCCIN_MOCHA: Palette = Palette {
    deep: Color::Rgb(17, 17, 27),           // crust
    panel: Color::Rgb(24, 24, 37),          // mantle
    background: Color::Rgb(30, 30, 46),     // base
    surface: Color::Rgb(49, 50, 68),        // surface0
    surface_raised: Color::Rgb(69, 71, 90), // surface1
    border: Color::Rgb(88, 91, 112),        // surface2

    text: Color::Rgb(205, 214, 244),
    subtle: Color::Rgb(186, 194, 222),
    muted: Color::Rgb(166, 173, 200),
    label: Color::Rgb(127, 132, 156),
    faint: Color::Rgb(108, 112, 134),

    accent: Color::Rgb(137, 180, 250), // blue
    link: Color::Rgb(116, 199, 236),   // sapphire
    heading: Color::Rgb(203, 166, 247), // mauve
    bullet: Color::Rgb(250, 179, 135), // peach

    success: Color::Rgb(166, 227, 161),
    warning: Color::Rgb(249, 226, 175),
    danger: Color::Rgb(243, 139, 168),
};
