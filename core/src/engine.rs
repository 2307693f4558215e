use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// The grid of cookie cells and every rule that changes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGame {
    size: Coord2,
    cells: Array2<CellState>,
    labels: Array2<Option<u8>>,
    status: GameStatus,
    wrong_cell: Option<CellIndex>,
}

impl GridGame {
    /// An all-hidden board of `(cols, rows)` cells.
    ///
    /// A zero dimension is clamped to 1.
    pub fn new(size: Coord2) -> Self {
        let size = (size.0.max(1), size.1.max(1));
        Self {
            size,
            cells: Array2::default(size.to_nd_index()),
            labels: Array2::default(size.to_nd_index()),
            status: Default::default(),
            wrong_cell: None,
        }
    }

    pub fn with_orientation(orientation: Orientation) -> Self {
        Self::new(orientation.size())
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn cols(&self) -> Coord {
        self.size.0
    }

    pub fn rows(&self) -> Coord {
        self.size.1
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Cell of the losing click, drawn with the "wrong" marker.
    pub fn wrong_cell(&self) -> Option<CellIndex> {
        self.wrong_cell
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < usize::from(self.total_cells()) {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<CellState> {
        let index = self.validate_index(index)?;
        Ok(self.cells[self.nd(index)])
    }

    /// Count shown on a revealed cell, `None` when the cell shows no number.
    pub fn label_at(&self, index: CellIndex) -> Result<Option<u8>> {
        let index = self.validate_index(index)?;
        Ok(self.labels[self.nd(index)])
    }

    pub fn iter_neighbors(&self, index: CellIndex) -> impl Iterator<Item = CellIndex> + use<> {
        let size = self.size;
        NeighborIter::new(index_to_coords(index, size), size)
            .map(move |coords| coords_to_index(coords, size))
    }

    /// Resets every cell to hidden and forgets the previous outcome.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Hidden);
        self.labels.fill(None);
        self.status = GameStatus::Active;
        self.wrong_cell = None;
    }

    /// Clears the board and seeds one prize per column.
    pub fn new_game(&mut self, generator: impl PrizeGenerator) -> Vec<CellIndex> {
        self.clear();

        let board = self.save();
        let placed = generator.generate(&board, CellCount::from(self.cols()));
        for &index in &placed {
            let nd = self.nd(index);
            self.cells[nd] = CellState::Prize;
        }

        log::debug!("New game on {:?} board with {} prizes", self.size, placed.len());
        placed
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealReport> {
        use CellState::*;

        let index = self.validate_index(index)?;
        self.check_not_finished()?;

        match self.cells[self.nd(index)] {
            Revealed => {
                let outcome = match self.flip_flag(index)? {
                    FlagOutcome::Won => RevealOutcome::Won,
                    _ => RevealOutcome::NoChange,
                };
                Ok(RevealReport::new(outcome, Vec::new()))
            }
            Prize | Flagged => {
                log::debug!("Losing click on cell {}", index);
                self.wrong_cell = Some(index);
                self.status = GameStatus::Lost;
                Ok(RevealReport::new(RevealOutcome::HitPrize, Vec::new()))
            }
            Hidden => {
                let revealed = self.flood_fill(index);
                let outcome = match self.test_game_over() {
                    GameOverCheck::Won => RevealOutcome::Won,
                    GameOverCheck::NotOver => RevealOutcome::Revealed,
                };
                Ok(RevealReport::new(outcome, revealed))
            }
        }
    }

    pub fn flip_flag(&mut self, index: CellIndex) -> Result<FlagOutcome> {
        use CellState::*;

        let index = self.validate_index(index)?;
        self.check_not_finished()?;

        let nd = self.nd(index);
        let changed = match self.cells[nd] {
            Prize => {
                self.cells[nd] = Flagged;
                true
            }
            Flagged => {
                self.cells[nd] = Prize;
                true
            }
            Hidden | Revealed => false,
        };

        Ok(match (self.test_game_over(), changed) {
            (GameOverCheck::Won, _) => FlagOutcome::Won,
            (GameOverCheck::NotOver, true) => FlagOutcome::Changed,
            (GameOverCheck::NotOver, false) => FlagOutcome::NoChange,
        })
    }

    /// Declares the game won once nothing is hidden and every prize is flagged.
    pub fn test_game_over(&mut self) -> GameOverCheck {
        if !self.is_complete() {
            return GameOverCheck::NotOver;
        }

        if !self.status.is_finished() {
            log::debug!("All prizes found");
            self.status = GameStatus::Won;
        }
        GameOverCheck::Won
    }

    pub fn is_complete(&self) -> bool {
        !self.cells.iter().any(|state| state.is_pending())
    }

    /// State of every cell in index order.
    pub fn save(&self) -> Vec<CellState> {
        self.cells.iter().copied().collect()
    }

    pub fn save_tags(&self) -> Vec<u8> {
        self.cells.iter().map(|state| state.tag()).collect()
    }

    /// Replaces every cell state and recomputes the labels; a list of the wrong length is rejected untouched.
    pub fn restore(&mut self, states: &[CellState]) -> Result<()> {
        let expected = usize::from(self.total_cells());
        if states.len() != expected {
            return Err(GameError::MalformedState(StateDefect::WrongLength {
                expected,
                actual: states.len(),
            }));
        }

        for (index, &state) in states.iter().enumerate() {
            let nd = self.nd(index);
            self.cells[nd] = state;
        }
        self.refresh_all_labels();

        self.wrong_cell = None;
        self.status = if self.is_complete() {
            GameStatus::Won
        } else {
            GameStatus::Active
        };
        log::debug!("Restored {} cells, status {:?}", expected, self.status);
        Ok(())
    }

    pub fn restore_tags(&mut self, tags: &[u8]) -> Result<()> {
        let expected = usize::from(self.total_cells());
        if tags.len() != expected {
            return Err(GameError::MalformedState(StateDefect::WrongLength {
                expected,
                actual: tags.len(),
            }));
        }
        let states = states_from_tags(tags)?;
        self.restore(&states)
    }

    /// Applies a single authoritative cell state from a peer, without cascading.
    pub fn remote_update(&mut self, index: CellIndex, state: CellState) -> Result<()> {
        let index = self.validate_index(index)?;

        let nd = self.nd(index);
        self.cells[nd] = state;
        self.refresh_label(index);
        for neighbor in self.iter_neighbors(index) {
            self.refresh_label(neighbor);
        }

        log::trace!("Remote update of cell {} to {:?}", index, state);
        Ok(())
    }

    /// Switches to a board with the same number of cells, keeping every state by index.
    pub fn reconfigure(&mut self, size: Coord2) -> Result<()> {
        if mult(size.0, size.1) != self.total_cells() {
            return Err(GameError::GridSizeMismatch);
        }
        if size == self.size {
            return Ok(());
        }

        let states = self.save();
        let (status, wrong_cell) = (self.status, self.wrong_cell);

        self.size = size;
        self.cells = Array2::default(size.to_nd_index());
        self.labels = Array2::default(size.to_nd_index());
        self.restore(&states)?;

        self.status = status;
        self.wrong_cell = wrong_cell;
        log::debug!("Reconfigured board to {:?}", size);
        Ok(())
    }

    fn count_prize_neighbors(&self, index: CellIndex) -> u8 {
        self.iter_neighbors(index)
            .filter(|&neighbor| self.cells[self.nd(neighbor)].holds_prize())
            .count()
            .try_into()
            .unwrap_or(u8::MAX)
    }

    /// Reveals from `start` outwards, stopping at numbered cells.
    ///
    /// Returns the cells that went from hidden to revealed, in visiting order.
    fn flood_fill(&mut self, start: CellIndex) -> Vec<CellIndex> {
        self.flood_fill_with(start, VecDeque::pop_front)
    }

    /// Flood fill drawing the next cell from the work-list with `next`.
    fn flood_fill_with(
        &mut self,
        start: CellIndex,
        next: fn(&mut VecDeque<CellIndex>) -> Option<CellIndex>,
    ) -> Vec<CellIndex> {
        let mut revealed = Vec::new();
        let mut visited = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);

        while let Some(index) = next(&mut to_visit) {
            let nd = self.nd(index);
            let previous = self.cells[nd];
            if !matches!(previous, CellState::Hidden | CellState::Revealed) {
                log::trace!("Skipping cell {}", index);
                continue;
            }

            self.cells[nd] = CellState::Revealed;
            if previous == CellState::Hidden {
                revealed.push(index);
            }

            let count = self.count_prize_neighbors(index);
            if count > 0 {
                self.labels[nd] = Some(count);
                continue;
            }

            self.labels[nd] = None;
            for neighbor in self.iter_neighbors(index) {
                if visited.insert(neighbor) {
                    to_visit.push_back(neighbor);
                }
            }
        }

        log::trace!("Flood fill from {} revealed {:?}", start, revealed);
        revealed
    }

    fn refresh_label(&mut self, index: CellIndex) {
        let nd = self.nd(index);
        self.labels[nd] = match self.cells[nd] {
            CellState::Revealed => Some(self.count_prize_neighbors(index)).filter(|&n| n > 0),
            _ => None,
        };
    }

    fn refresh_all_labels(&mut self) {
        for index in 0..usize::from(self.total_cells()) {
            self.refresh_label(index);
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn nd(&self, index: CellIndex) -> [usize; 2] {
        index_to_coords(index, self.size).to_nd_index()
    }
}
