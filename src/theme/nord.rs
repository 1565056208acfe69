use super::palette::Palette;
use ratatui::style::Color;

/// Nord: polar night backgrounds, snow storm text, frost accents and
/// aurora for state.
pub const NORD: Palette = Palette {
    deep: Color::Rgb(36, 41, 51),
    panel: Color::Rgb(59, 66, 82),          // nord1
    background: Color::Rgb(46, 52, 64),     // nord0
    surface: Color::Rgb(67, 76, 94),        // nord2
    surface_raised: Color::Rgb(76, 86, 106), // nord3
    border: Color::Rgb(76, 86, 106),

    text: Color::Rgb(236, 239, 244),   // nord6
    subtle: Color::Rgb(229, 233, 240), // nord5
    muted: Color::Rgb(216, 222, 233),  // nord4
    label: Color::Rgb(129, 161, 193),  // nord9
    faint: Color::Rgb(97, 110, 136),

    accent: Color::Rgb(136, 192, 208),  // nord8
    link: Color::Rgb(143, 188, 187),    // nord7
    heading: Color::Rgb(180, 142, 173), // nord15
    bullet: Color::Rgb(208, 135, 112),  // nord12

    success: Color::Rgb(163, 190, 140), // nord14
    warning: Color::Rgb(235, 203, 139), // nord13
    danger: Color::Rgb(191, 97, 106),   // nord11
};
