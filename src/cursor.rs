//! Position tracking for the removing cursors of [OrderedSmallMap](crate::OrderedSmallMap)
//! and [OrderedSmallSet](crate::OrderedSmallSet).
//!
//! A cursor walks over live indices, not over a snapshot. The length is re-read on every step,
//! so removing the current item shifts the remaining items down and the cursor rewinds by one.
use std::error::Error;
use std::fmt;

/// Misuse of the remove-current protocol of a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// nothing was produced yet, or the cursor ran past the end
    NoCurrent,
    /// the current item was already removed
    AlreadyRemoved,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::NoCurrent => write!(f, "remove called before the cursor produced an item"),
            CursorError::AlreadyRemoved => {
                write!(f, "remove called twice without producing the next item")
            }
        }
    }
}

impl Error for CursorError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Current {
    Fresh,
    Produced(usize),
    Removed,
}

#[derive(Debug, Clone)]
pub(crate) struct CursorState {
    next: usize,
    current: Current,
}

impl CursorState {
    pub(crate) fn new() -> Self {
        Self {
            next: 0,
            current: Current::Fresh,
        }
    }

    pub(crate) fn has_next(&self, len: usize) -> bool {
        self.next < len
    }

    /// index of the item to produce next, if any
    pub(crate) fn advance(&mut self, len: usize) -> Option<usize> {
        if self.next < len {
            let index = self.next;
            self.next += 1;
            self.current = Current::Produced(index);
            Some(index)
        } else {
            self.current = Current::Fresh;
            None
        }
    }

    /// index of the item to remove. The caller must remove it, since the cursor is rewound onto it.
    pub(crate) fn take_current(&mut self) -> Result<usize, CursorError> {
        match self.current {
            Current::Produced(index) => {
                self.next = index;
                self.current = Current::Removed;
                Ok(index)
            }
            Current::Removed => Err(CursorError::AlreadyRemoved),
            Current::Fresh => Err(CursorError::NoCurrent),
        }
    }
}
