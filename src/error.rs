pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors that can occur while building a [`Puzzle`](crate::puzzle::Puzzle).
///
/// Solving itself never fails with an `Error`: an unsolvable puzzle is an
/// ordinary `None` result, not an error condition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("puzzle structure has no rows")]
    EmptyStructure,

    #[error("row {row} of the puzzle structure is {found} cells wide, expected {expected}")]
    RaggedStructure {
        row: usize,
        expected: usize,
        found: usize,
    },
}
