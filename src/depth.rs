//! Recursion budget for nested container types.

use crate::error::{Error, Result};

/// Bounds how deep decode code may recurse into nested containers.
///
/// The budget counts nesting depth, not element count. It exists to keep
/// attacker-controlled nesting from exhausting the stack, independent of any
/// per-collection length limits.
#[derive(Debug, Clone)]
pub(crate) struct DepthGuard {
    remaining: usize,
}

impl DepthGuard {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            remaining: max_depth,
        }
    }

    /// Claims one level of the budget before descending into a container.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MaxDepthExceeded`] when the budget is exhausted.
    /// This is terminal: the caller should abort the whole decode.
    pub(crate) fn enter(&mut self) -> Result<()> {
        match self.remaining.checked_sub(1) {
            Some(rest) => {
                self.remaining = rest;
                Ok(())
            }
            None => Err(Error::MaxDepthExceeded),
        }
    }

    /// Returns one level of the budget after leaving a container.
    ///
    /// Callers must pair every successful [`Self::enter`] with exactly one
    /// `exit`, including on failure paths. The guard cannot detect an
    /// unmatched call from the inside.
    pub(crate) fn exit(&mut self) {
        self.remaining += 1;
    }
}
