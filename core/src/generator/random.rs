use alloc::vec::Vec;

use super::*;

/// Uniformly random prize placement over the hidden cells of a board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPrizeGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomPrizeGenerator {
    pub fn new(seed: u64, placement: Placement) -> Self {
        Self { seed, placement }
    }
}

impl PrizeGenerator for RandomPrizeGenerator {
    fn generate(self, board: &[CellState], prizes: CellCount) -> Vec<CellIndex> {
        use rand::prelude::*;

        let free_cells = board
            .iter()
            .filter(|&&state| state == CellState::Hidden)
            .count();

        let mut wanted = usize::from(prizes);
        if wanted > free_cells {
            log::warn!(
                "Board too small, requested {} prizes but only {} hidden cells",
                wanted,
                free_cells
            );
            wanted = free_cells;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let placed = match self.placement {
            Placement::Rejection => {
                let mut placed: Vec<CellIndex> = Vec::with_capacity(wanted);
                while placed.len() < wanted {
                    let index = rng.random_range(0..board.len());
                    if board[index] != CellState::Hidden || placed.contains(&index) {
                        log::trace!("Rejected prize candidate {}", index);
                        continue;
                    }
                    placed.push(index);
                }
                placed
            }
            Placement::Shuffle => {
                let mut candidates: Vec<CellIndex> = board
                    .iter()
                    .enumerate()
                    .filter(|(_, state)| **state == CellState::Hidden)
                    .map(|(index, _)| index)
                    .collect();
                candidates.shuffle(&mut rng);
                candidates.truncate(wanted);
                candidates
            }
        };

        log::debug!("Placed {} prizes: {:?}", placed.len(), placed);
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec;

    fn distinct(indices: &[CellIndex]) -> usize {
        indices.iter().collect::<BTreeSet<_>>().len()
    }

    #[test]
    fn rejection_places_distinct_hidden_cells() {
        let board = vec![CellState::Hidden; 70];

        let placed = RandomPrizeGenerator::new(7, Placement::Rejection).generate(&board, 10);

        assert_eq!(placed.len(), 10);
        assert_eq!(distinct(&placed), 10);
        assert!(placed.iter().all(|&index| index < 70));
    }

    #[test]
    fn never_picks_non_hidden_cells() {
        let mut board = vec![CellState::Revealed; 20];
        board[3] = CellState::Hidden;
        board[11] = CellState::Hidden;
        board[19] = CellState::Hidden;

        for placement in [Placement::Rejection, Placement::Shuffle] {
            let mut placed = RandomPrizeGenerator::new(42, placement).generate(&board, 3);
            placed.sort_unstable();
            assert_eq!(placed, [3, 11, 19]);
        }
    }

    #[test]
    fn oversized_request_is_clamped() {
        let mut board = vec![CellState::Revealed; 9];
        board[4] = CellState::Hidden;

        let placed = RandomPrizeGenerator::new(1, Placement::Rejection).generate(&board, 5);

        assert_eq!(placed, [4]);
    }

    #[test]
    fn same_seed_same_layout() {
        let board = vec![CellState::Hidden; 70];

        let first = RandomPrizeGenerator::new(99, Placement::Shuffle).generate(&board, 7);
        let second = RandomPrizeGenerator::new(99, Placement::Shuffle).generate(&board, 7);

        assert_eq!(first, second);
        assert_eq!(distinct(&first), 7);
    }
}
