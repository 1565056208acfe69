use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use crate::domain::effects::EffectRunner;
use std::time::Instant;

/// Applies `action` to `state`. Effects run synchronously through `effects`;
/// anything that has to happen later comes back as a `Command`.
pub fn update(state: &mut AppState, action: Action, effects: &dyn EffectRunner) -> Option<Command> {
    if let UpdateResult::Handled(cmd) = features::palette::update(state, &action, effects) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::navigation::update(state, &action) {
        return cmd;
    }

    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            features::navigation::expire_status(state, Instant::now());
        }
        Action::Quit => {
            state.should_quit = true;
        }
        other => {
            tracing::debug!(?other, "unhandled action");
        }
    }
    None
}
