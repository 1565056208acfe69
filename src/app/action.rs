use crate::app::command::Command;
use crate::domain::page::Section;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Page ---
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollToSection(Section), // Also the callback of a palette navigation
    ToggleLanguage,
    CycleTheme,
    DismissError,

    // --- Command Palette ---
    TogglePalette,           // Global hotkey
    OpenPalette,             // Header search button
    ClosePalette,            // Esc / backdrop click
    PaletteInput(char),      // Printable character
    PaletteBackspace,        // Drop last query character
    PaletteNext,             // Down
    PalettePrev,             // Up
    PaletteHover(usize),     // Pointer over a row
    PaletteActivate,         // Enter
    PaletteClick(usize),     // Click on a row

    // --- Async Results ---
    ConfirmationElapsed(u64), // Deferred close for a palette generation
}
