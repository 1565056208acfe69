use crate::domain::command::Icon;

pub const SEARCH: &str = "⌕";
pub const POINTER: &str = "→";
pub const RETURN: &str = "↵";
pub const ARROWS: &str = "↑↓";
pub const CURSOR: &str = "▏";
pub const SEPARATOR: &str = "─";

#[must_use]
pub fn icon(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "⌂",
        Icon::Projects => "▣",
        Icon::Stack => "≡",
        Icon::Mail => "✉",
        Icon::FileText => "▤",
        Icon::GitHub => "◆",
        Icon::LinkedIn => "◼",
        Icon::Copy => "⧉",
        Icon::Check => "✓",
    }
}
