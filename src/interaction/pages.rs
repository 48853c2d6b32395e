use crate::error::{PageError, Result};
use crate::geometry::TurnDirection;

use super::events::TurnEvent;

/// Page count and current page index.
///
/// The index is always inside `[0, page_count - 1]`, or `0` when there are no
/// pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    page_count: usize,
    current_index: usize,
}

impl PageState {
    /// Creates a page state positioned on the first page.
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            current_index: 0,
        }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Jumps to `index`.
    ///
    /// # Errors
    ///
    /// Returns `PageError::IndexOutOfRange` if `index` is not a valid page.
    pub fn set_current_index(&mut self, index: usize) -> Result<()> {
        if index >= self.page_count {
            return Err(PageError::IndexOutOfRange {
                index,
                page_count: self.page_count,
            }
            .into());
        }
        self.current_index = index;
        Ok(())
    }

    /// Replaces the page count and returns to the first page.
    pub fn reset(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.current_index = 0;
    }

    /// The page a turn in `direction` would land on, if it exists.
    #[must_use]
    pub fn target(&self, direction: TurnDirection) -> Option<usize> {
        match direction {
            TurnDirection::Forward => {
                let next = self.current_index + 1;
                (next < self.page_count).then_some(next)
            }
            TurnDirection::Backward => self.current_index.checked_sub(1),
        }
    }

    /// Completes a turn in `direction`.
    ///
    /// Moves the index by one page, or leaves it alone at a boundary and
    /// reports `FirstPage`/`LastPage` instead.
    pub fn advance(&mut self, direction: TurnDirection) -> TurnEvent {
        match (self.target(direction), direction) {
            (Some(index), TurnDirection::Forward) => {
                self.current_index = index;
                TurnEvent::PageNext
            }
            (Some(index), TurnDirection::Backward) => {
                self.current_index = index;
                TurnEvent::PagePrevious
            }
            (None, TurnDirection::Forward) => TurnEvent::LastPage,
            (None, TurnDirection::Backward) => TurnEvent::FirstPage,
        }
    }
}
