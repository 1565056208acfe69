use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    dispatch,
    state::{AppState, ErrorSeverity, ErrorState},
};
use crate::domain::effects::EffectRunner;

pub fn update(state: &mut AppState, action: &Action, effects: &dyn EffectRunner) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            let registry = state.fresh_registry();
            state.palette.toggle(&registry);
            UpdateResult::Handled(None)
        }
        Action::OpenPalette => {
            let registry = state.fresh_registry();
            state.palette.open(&registry);
            UpdateResult::Handled(None)
        }
        Action::ClosePalette => {
            state.palette.close();
            UpdateResult::Handled(None)
        }
        Action::PaletteInput(c) => {
            let registry = state.registry();
            state.palette.push_char(&registry, *c);
            UpdateResult::Handled(None)
        }
        Action::PaletteBackspace => {
            let registry = state.registry();
            state.palette.pop_char(&registry);
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            state.palette.move_next();
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            state.palette.move_prev();
            UpdateResult::Handled(None)
        }
        Action::PaletteHover(index) => {
            if let Err(err) = state.palette.set_index(*index) {
                tracing::debug!("hover ignored: {err}");
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteActivate => {
            let registry = state.registry();
            let cmd = dispatch::activate_current(
                &mut state.palette,
                &registry,
                effects,
                &state.timing,
            );
            after_activation(state, cmd)
        }
        Action::PaletteClick(index) => {
            let registry = state.registry();
            let cmd = dispatch::activate_index(
                &mut state.palette,
                &registry,
                *index,
                effects,
                &state.timing,
            );
            after_activation(state, cmd)
        }
        Action::ConfirmationElapsed(generation) => {
            if !state.palette.close_if_current(*generation) {
                tracing::debug!(generation, "stale confirmation timer ignored");
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

// The copied flag changes the catalog, so re-derive the selection bounds
// and surface any failure in the footer.
fn after_activation(state: &mut AppState, cmd: Option<Command>) -> UpdateResult {
    let registry = state.registry();
    state.palette.sync(&registry);
    if let Some(failure) = state
        .palette
        .session()
        .and_then(|session| session.last_failure.as_ref())
    {
        state.last_error = Some(ErrorState::new(failure.to_string(), ErrorSeverity::Error));
    }
    UpdateResult::Handled(cmd)
}
