/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for prize counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, or a board size `(cols, rows)`.
pub type Coord2 = (Coord, Coord);

/// Row-major position of a cell, `x + y * cols`.
pub type CellIndex = usize;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Boards are stored as `[row, column]` so that the standard layout matches cell indices.
    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub const fn index_to_coords(index: CellIndex, size: Coord2) -> Coord2 {
    let cols = size.0 as CellIndex;
    ((index % cols) as Coord, (index / cols) as Coord)
}

pub const fn coords_to_index(coords: Coord2, size: Coord2) -> CellIndex {
    coords.0 as CellIndex + coords.1 as CellIndex * size.0 as CellIndex
}

// NW, W, SW, N, S, NE, E, SE
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_follow_fixed_order() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(
            neighbors,
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn corner_neighbors_skip_out_of_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (10, 7)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);

        let neighbors: Vec<_> = NeighborIter::new((9, 6), (10, 7)).collect();
        assert_eq!(neighbors, [(8, 5), (8, 6), (9, 5)]);
    }

    #[test]
    fn index_round_trips_through_coords() {
        let size = (10, 7);
        assert_eq!(index_to_coords(23, size), (3, 2));
        assert_eq!(coords_to_index((3, 2), size), 23);
        assert_eq!(index_to_coords(69, size), (9, 6));
    }
}
