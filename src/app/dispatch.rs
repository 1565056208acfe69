use super::command::Command;
use super::config::PaletteConfig;
use super::state::CommandPalette;
use crate::domain::command::{CommandDefinition, CommandGroup, CommandKind, ConfirmableEffect};
use crate::domain::effects::EffectRunner;
use crate::domain::error::PaletteError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchTiming {
    /// Gap between closing the overlay and scrolling to a section.
    pub scroll_delay: Duration,
    /// How long a confirmation label stays up before the palette closes.
    pub confirm_delay: Duration,
}

impl Default for DispatchTiming {
    fn default() -> Self {
        Self::from(&PaletteConfig::default())
    }
}

impl From<&PaletteConfig> for DispatchTiming {
    fn from(config: &PaletteConfig) -> Self {
        Self {
            scroll_delay: Duration::from_millis(config.scroll_delay_ms),
            confirm_delay: Duration::from_millis(config.confirm_delay_ms),
        }
    }
}

/// Runs `command` and drives the palette towards closed.
///
/// Navigation closes right away and leaves the scroll to the runtime.
/// External links close once the link was handed off. Confirmable actions
/// flip the confirmation flag and arm a deferred close. A failing effect
/// leaves the palette open and untouched apart from the recorded failure.
pub fn activate(
    palette: &mut CommandPalette,
    command: &CommandDefinition,
    effects: &dyn EffectRunner,
    timing: &DispatchTiming,
) -> Option<Command> {
    let session = palette.session()?;
    if session.closing {
        tracing::debug!(command = %command.id, "palette is closing, activation ignored");
        return None;
    }
    palette.clear_failure();
    tracing::info!(command = %command.id, "activating command");

    match &command.kind {
        CommandKind::Navigate { target } => {
            palette.close();
            Some(Command::ScrollToSection {
                section: *target,
                delay: timing.scroll_delay,
            })
        }
        CommandKind::ExternalLink { url } => {
            match effects.open_url(url) {
                Ok(()) => {
                    palette.close();
                }
                Err(err) => fail(palette, command, &err),
            }
            None
        }
        CommandKind::ConfirmableAction(effect) => {
            let result = match effect {
                ConfirmableEffect::CopyToClipboard { text } => effects.copy_to_clipboard(text),
            };
            match result {
                Ok(()) => {
                    palette.confirm();
                    Some(Command::DeferredClose {
                        generation: palette.generation(),
                        delay: timing.confirm_delay,
                    })
                }
                Err(err) => {
                    fail(palette, command, &err);
                    None
                }
            }
        }
    }
}

/// Enter: activate whatever is selected.
pub fn activate_current(
    palette: &mut CommandPalette,
    registry: &[CommandGroup],
    effects: &dyn EffectRunner,
    timing: &DispatchTiming,
) -> Option<Command> {
    let command = palette.current_item(registry)?;
    activate(palette, &command, effects, timing)
}

/// Click: select the row under the pointer, then activate it.
pub fn activate_index(
    palette: &mut CommandPalette,
    registry: &[CommandGroup],
    index: usize,
    effects: &dyn EffectRunner,
    timing: &DispatchTiming,
) -> Option<Command> {
    // The confirmed row keeps the selection until the palette closes
    if palette.session()?.closing {
        tracing::debug!(index, "palette is closing, click ignored");
        return None;
    }
    if let Err(err) = palette.set_index(index) {
        tracing::debug!("click ignored: {err}");
        return None;
    }
    activate_current(palette, registry, effects, timing)
}

fn fail(palette: &mut CommandPalette, command: &CommandDefinition, err: &anyhow::Error) {
    let failure = PaletteError::CommandExecutionFailed {
        command_id: command.id.clone(),
        reason: format!("{err:#}"),
    };
    tracing::warn!("{failure}");
    palette.record_failure(failure);
}
