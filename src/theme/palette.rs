use ratatui::style::Color;

/// The colors a theme is derived from, named by the role they play on the
/// page rather than by the source scheme's own names.
pub struct Palette {
    // Backgrounds, lightest last
    pub deep: Color,
    pub panel: Color,
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,

    // Foregrounds
    pub text: Color,
    pub subtle: Color,
    pub muted: Color,
    pub label: Color,
    pub faint: Color,

    pub accent: Color,
    pub link: Color,
    pub heading: Color,
    pub bullet: Color,

    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}
