use portico::app::state::{AppState, ErrorSeverity, ErrorState};
use portico::app::ui;
use portico::i18n::Language;
use ratatui::{backend::TestBackend, Terminal};

fn draw_all_sizes(app_state: &AppState) {
    for width in 0..100 {
        for height in 0..50 {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            let _ = terminal.draw(|f| {
                ui::draw(f, app_state);
            });
        }
    }
}

fn main() {
    for language in [Language::Es, Language::En] {
        let mut app_state = AppState {
            language,
            ..AppState::default()
        };

        // Page only
        draw_all_sizes(&app_state);

        // Palette open with every row
        let registry = app_state.fresh_registry();
        app_state.palette.open(&registry);
        draw_all_sizes(&app_state);

        // Empty result set
        app_state.palette.set_query(&registry, "zzzz");
        draw_all_sizes(&app_state);

        // Last row selected, so the result list has to scroll
        app_state.palette.set_query(&registry, "");
        app_state.palette.move_prev();
        draw_all_sizes(&app_state);
        app_state.palette.close();

        // Also test with an error message
        app_state.last_error = Some(ErrorState::new(
            "command 'github' failed: opening https://github.com/jane: No such file or directory, which is long enough to overflow narrow footers",
            ErrorSeverity::Error,
        ));
        draw_all_sizes(&app_state);
    }

    println!("Layout verification completed successfully!");
}
