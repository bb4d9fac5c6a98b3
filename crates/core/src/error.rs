//! Grid engine errors.

use thiserror::Error;

/// Failures the grid engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no empty cell. Routine at the end of a game; callers
    /// decide whether to swallow or propagate it.
    #[error("no empty cells")]
    NoEmptyCell,

    /// The weighted-selection walk fell off the end of the spawn table.
    /// Cannot happen while the weight-sum invariant holds; if it ever
    /// surfaces it is a programming defect, not a game state.
    #[error("failed to pick a value to add")]
    SpawnSelection,
}
