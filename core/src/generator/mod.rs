use crate::*;
pub use random::*;

mod random;

/// Picks which cells of a freshly cleared board become prizes.
pub trait PrizeGenerator {
    /// Returns `prizes` distinct indices of cells that are currently hidden, in placement order.
    fn generate(self, board: &[CellState], prizes: CellCount) -> alloc::vec::Vec<CellIndex>;
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Placement {
    /// Draw any cell, retry when it was already picked or is not hidden.
    #[default]
    Rejection,
    /// Shuffle the hidden cells and keep the first ones.
    Shuffle,
}
