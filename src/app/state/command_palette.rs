use crate::domain::command::{CommandDefinition, CommandGroup, Icon};
use crate::domain::error::PaletteError;
use crate::domain::filter::{filter_groups, flatten, visible_len};
use crate::domain::selection::Selection;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    Closed,
    Open,
}

/// Transient state of one open cycle. Dropped on close.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandPaletteState {
    pub query: String,
    pub selection: Selection,
    pub copied: bool,  // Confirmation label is showing
    pub closing: bool, // A deferred close is pending
    pub last_failure: Option<PaletteError>,
}

/// Open/closed controller for the command palette.
///
/// Every operation takes the registry it should work against; the host
/// rebuilds it from its own data, so labels that depend on transient state
/// are never stale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandPalette {
    session: Option<CommandPaletteState>,
    generation: u64,
}

impl CommandPalette {
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        if self.session.is_some() {
            Lifecycle::Open
        } else {
            Lifecycle::Closed
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&CommandPaletteState> {
        self.session.as_ref()
    }

    /// Identifies the current open cycle. Bumped on every `Closed -> Open`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn copied(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.copied)
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.query.as_str())
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.selection.index())
    }

    /// Returns `true` if this call opened the palette.
    pub fn open(&mut self, registry: &[CommandGroup]) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.generation = self.generation.wrapping_add(1);
        self.session = Some(CommandPaletteState {
            selection: Selection::new(visible_len(registry, "")),
            ..Default::default()
        });
        tracing::info!(generation = self.generation, "command palette opened");
        true
    }

    /// Returns `true` if this call closed the palette.
    pub fn close(&mut self) -> bool {
        if self.session.take().is_none() {
            return false;
        }
        tracing::info!(generation = self.generation, "command palette closed");
        true
    }

    pub fn toggle(&mut self, registry: &[CommandGroup]) -> Lifecycle {
        if self.is_open() {
            self.close();
        } else {
            self.open(registry);
        }
        self.lifecycle()
    }

    /// Close requested by a timer armed during `generation`. Ignored when that
    /// cycle is already over.
    pub fn close_if_current(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "stale close ignored");
            return false;
        }
        self.close()
    }

    pub fn set_query(&mut self, registry: &[CommandGroup], query: impl Into<String>) {
        if let Some(session) = &mut self.session {
            session.query = query.into();
            let len = visible_len(registry, &session.query);
            session.selection.reset(len);
            tracing::debug!(query = %session.query, visible = len, "palette query changed");
        }
    }

    pub fn push_char(&mut self, registry: &[CommandGroup], c: char) {
        if let Some(query) = self.query() {
            let mut query = query.to_string();
            query.push(c);
            self.set_query(registry, query);
        }
    }

    pub fn pop_char(&mut self, registry: &[CommandGroup]) {
        if let Some(query) = self.query() {
            let mut query = query.to_string();
            if query.pop().is_some() {
                self.set_query(registry, query);
            }
        }
    }

    pub fn move_next(&mut self) {
        if let Some(session) = &mut self.session {
            session.selection.move_next();
        }
    }

    pub fn move_prev(&mut self) {
        if let Some(session) = &mut self.session {
            session.selection.move_prev();
        }
    }

    pub fn set_index(&mut self, index: usize) -> Result<(), PaletteError> {
        match &mut self.session {
            Some(session) => session.selection.set_index(index),
            None => Err(PaletteError::OutOfRangeSelection { index, len: 0 }),
        }
    }

    /// Re-derives the visible count after the registry changed under an
    /// unchanged query.
    pub fn sync(&mut self, registry: &[CommandGroup]) {
        if let Some(session) = &mut self.session {
            let len = visible_len(registry, &session.query);
            session.selection.refresh(len);
        }
    }

    #[must_use]
    pub fn current_item(&self, registry: &[CommandGroup]) -> Option<CommandDefinition> {
        let session = self.session.as_ref()?;
        let index = session.selection.index()?;
        let filtered = filter_groups(registry, &session.query);
        flatten(&filtered).get(index).map(|c| (*c).clone())
    }

    pub(crate) fn confirm(&mut self) {
        if let Some(session) = &mut self.session {
            session.copied = true;
            session.closing = true;
        }
    }

    pub(crate) fn record_failure(&mut self, failure: PaletteError) {
        if let Some(session) = &mut self.session {
            session.last_failure = Some(failure);
        }
    }

    pub(crate) fn clear_failure(&mut self) {
        if let Some(session) = &mut self.session {
            session.last_failure = None;
        }
    }

    /// Everything the modal needs to draw itself, or `None` while closed.
    #[must_use]
    pub fn view(&self, registry: &[CommandGroup]) -> Option<PaletteView> {
        let session = self.session.as_ref()?;
        let selected = session.selection.index();
        let filtered = filter_groups(registry, &session.query);

        let mut index = 0;
        let groups = filtered
            .iter()
            .map(|group| PaletteGroupView {
                label: group.label.clone(),
                rows: group
                    .items
                    .iter()
                    .map(|item| {
                        let row = PaletteRow {
                            index,
                            id: item.id.clone(),
                            label: item.label.clone(),
                            icon: item.icon,
                            selected: selected == Some(index),
                            highlighted: item.highlight,
                        };
                        index += 1;
                        row
                    })
                    .collect(),
            })
            .collect();

        Some(PaletteView {
            query: session.query.clone(),
            groups,
            selected,
            failure: session.last_failure.as_ref().map(ToString::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRow {
    pub index: usize, // Position in the flattened list
    pub id: String,
    pub label: String,
    pub icon: Icon,
    pub selected: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteGroupView {
    pub label: String,
    pub rows: Vec<PaletteRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteView {
    pub query: String,
    pub groups: Vec<PaletteGroupView>,
    pub selected: Option<usize>,
    pub failure: Option<String>,
}

impl PaletteView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::tests::sample_registry;

    fn open_palette() -> (CommandPalette, Vec<CommandGroup>) {
        let registry = sample_registry();
        let mut palette = CommandPalette::default();
        assert!(palette.open(&registry));
        (palette, registry)
    }

    #[test]
    fn test_open_resets_session() {
        let (mut palette, registry) = open_palette();
        palette.set_query(&registry, "co");
        palette.move_next();
        palette.confirm();
        palette.close();

        assert!(palette.open(&registry));
        let session = palette.session().unwrap();
        assert_eq!(session.query, "");
        assert_eq!(session.selection.index(), Some(0));
        assert_eq!(session.selection.len(), 7);
        assert!(!session.copied);
        assert!(!session.closing);
    }

    #[test]
    fn test_close_discards_session() {
        let (mut palette, registry) = open_palette();
        palette.set_query(&registry, "git");
        assert!(palette.close());
        assert_eq!(palette.lifecycle(), Lifecycle::Closed);
        assert!(palette.session().is_none());
        assert_eq!(palette.query(), None);
        assert!(palette.view(&registry).is_none());
    }

    #[test]
    fn test_lifecycle_is_idempotent() {
        let (mut palette, registry) = open_palette();
        palette.set_query(&registry, "o");
        palette.move_next();
        let before = palette.clone();

        assert!(!palette.open(&registry));
        assert!(!palette.open(&registry));
        assert_eq!(palette, before);

        assert!(palette.close());
        let closed = palette.clone();
        assert!(!palette.close());
        assert!(!palette.close());
        assert_eq!(palette, closed);
    }

    #[test]
    fn test_toggle_matches_single_direction_calls() {
        let registry = sample_registry();
        let mut palette = CommandPalette::default();
        assert_eq!(palette.toggle(&registry), Lifecycle::Open);
        assert_eq!(palette.generation(), 1);
        assert_eq!(palette.toggle(&registry), Lifecycle::Closed);
        assert_eq!(palette.toggle(&registry), Lifecycle::Open);
        assert_eq!(palette.generation(), 2);
    }

    #[test]
    fn test_query_change_resets_selection() {
        let (mut palette, registry) = open_palette();
        palette.move_next();
        palette.move_next();
        palette.move_prev();
        palette.move_next();
        assert_eq!(palette.selected_index(), Some(2));

        palette.push_char(&registry, 'o');
        assert_eq!(palette.selected_index(), Some(0));

        palette.move_next();
        palette.pop_char(&registry);
        assert_eq!(palette.selected_index(), Some(0));
        assert_eq!(palette.query(), Some(""));
    }

    #[test]
    fn test_current_item_follows_filtered_list() {
        let (mut palette, registry) = open_palette();
        palette.set_query(&registry, "in");
        // LinkedIn only ("in" is not in "Contact" or "Home")
        assert_eq!(palette.current_item(&registry).unwrap().id, "linkedin");

        palette.set_query(&registry, "gi");
        palette.move_next();
        assert_eq!(palette.current_item(&registry).unwrap().id, "github");
    }

    #[test]
    fn test_empty_result_has_no_selection() {
        let (mut palette, registry) = open_palette();
        palette.set_query(&registry, "nothing here");
        palette.move_next();
        palette.move_prev();

        assert_eq!(palette.selected_index(), None);
        assert!(palette.current_item(&registry).is_none());
        assert!(palette.set_index(0).is_err());
        assert!(palette.view(&registry).unwrap().is_empty());
    }

    #[test]
    fn test_set_index_rejects_out_of_range() {
        let (mut palette, registry) = open_palette();
        palette.set_index(5).unwrap();
        assert_eq!(
            palette.set_index(7),
            Err(PaletteError::OutOfRangeSelection { index: 7, len: 7 })
        );
        assert_eq!(palette.selected_index(), Some(5));
        assert_eq!(palette.current_item(&registry).unwrap().id, "linkedin");
    }

    #[test]
    fn test_stale_generation_does_not_close() {
        let (mut palette, registry) = open_palette();
        let first = palette.generation();
        palette.close();
        palette.open(&registry);

        assert!(!palette.close_if_current(first));
        assert!(palette.is_open());
        assert!(palette.close_if_current(palette.generation()));
        assert!(!palette.close_if_current(palette.generation()));
    }

    #[test]
    fn test_view_marks_selection_and_flattened_indices() {
        let (mut palette, registry) = open_palette();
        palette.move_prev();
        let view = palette.view(&registry).unwrap();

        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.row_count(), 7);
        let indices: Vec<usize> = view
            .groups
            .iter()
            .flat_map(|g| g.rows.iter().map(|r| r.index))
            .collect();
        assert_eq!(indices, (0..7).collect::<Vec<_>>());
        let selected: Vec<&str> = view
            .groups
            .iter()
            .flat_map(|g| g.rows.iter())
            .filter(|r| r.selected)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(selected, vec!["email"]);
    }
}
