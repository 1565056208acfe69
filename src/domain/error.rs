/// Failure categories surfaced by the command palette.
///
/// An empty result set is deliberately absent: it is a valid filter outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// A pointer or caller asked for an index outside the visible list.
    #[error("selection index {index} is out of range for {len} visible commands")]
    OutOfRangeSelection { index: usize, len: usize },

    /// A command's effect failed. The palette stays open.
    #[error("command '{command_id}' failed: {reason}")]
    CommandExecutionFailed { command_id: String, reason: String },
}
