use super::error::PaletteError;

/// Cursor over the flattened list of visible commands.
///
/// `index < len` holds whenever `len > 0`. With nothing visible there is no
/// selection and every movement is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn move_next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn move_prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Explicit placement (pointer hover). Out-of-range requests are rejected
    /// and leave the cursor where it was.
    pub fn set_index(&mut self, index: usize) -> Result<(), PaletteError> {
        if index >= self.len {
            return Err(PaletteError::OutOfRangeSelection {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    /// The visible list was recomputed for a new query: back to the top.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
    }

    /// The visible list changed shape without a query change (labels were
    /// re-derived). The cursor stays put while it is still in range.
    pub fn refresh(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}
