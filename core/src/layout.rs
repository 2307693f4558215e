use serde::{Deserialize, Serialize};

use crate::*;

/// Nominal dot size in pixels before scaling to the viewport.
pub const DOT_SIZE: u32 = 40;

const LONG_SIDE: Coord = 10;
const SHORT_SIDE: Coord = 7;

/// Drawable area the host gives to the board, toolbar already excluded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// 10 columns by 7 rows.
    Landscape,
    /// 7 columns by 10 rows.
    Portrait,
}

impl Orientation {
    pub const fn from_viewport(viewport: Viewport) -> Self {
        if viewport.width < viewport.height {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    /// Board size as `(cols, rows)`.
    pub const fn size(self) -> Coord2 {
        match self {
            Self::Landscape => (LONG_SIDE, SHORT_SIDE),
            Self::Portrait => (SHORT_SIDE, LONG_SIDE),
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Landscape
    }
}

/// Pixel placement of the dots for one viewport.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    size: Coord2,
    dot_size: u32,
    space: u32,
    x_offset: i32,
}

impl BoardLayout {
    pub fn new(viewport: Viewport) -> Self {
        let size = Orientation::from_viewport(viewport).size();
        let (cols, rows) = (u32::from(size.0), u32::from(size.1));

        let fit = |extent: u32, count: u32| extent as f32 / (count * DOT_SIZE) as f32 / 1.2;
        let scale = fit(viewport.width, cols).min(fit(viewport.height, rows));

        let dot_size = (DOT_SIZE as f32 * scale) as u32;
        let space = dot_size / 5;
        let board_width = cols * dot_size + cols.saturating_sub(1) * space;
        let x_offset = (viewport.width as i32 - board_width as i32) / 2;

        Self {
            size,
            dot_size,
            space,
            x_offset,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        if self.size.0 < self.size.1 {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn dot_size(&self) -> u32 {
        self.dot_size
    }

    /// Top-left pixel of the dot at `index`.
    pub fn position(&self, index: CellIndex) -> (i32, i32) {
        let (x, y) = index_to_coords(index, self.size);
        let stride = (self.dot_size + self.space) as i32;
        (self.x_offset + i32::from(x) * stride, i32::from(y) * stride)
    }

    /// Index of the dot under the given pixel, if any.
    pub fn hit_test(&self, (px, py): (i32, i32)) -> Option<CellIndex> {
        let total = CellIndex::from(mult(self.size.0, self.size.1));
        (0..total).find(|&index| {
            let (left, top) = self.position(index);
            let extent = self.dot_size as i32;
            (left..left + extent).contains(&px) && (top..top + extent).contains(&py)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_follows_aspect_ratio() {
        assert_eq!(
            Orientation::from_viewport(Viewport::new(1200, 825)),
            Orientation::Landscape
        );
        assert_eq!(
            Orientation::from_viewport(Viewport::new(825, 1200)),
            Orientation::Portrait
        );
        assert_eq!(Orientation::Landscape.size(), (10, 7));
        assert_eq!(Orientation::Portrait.size(), (7, 10));
    }

    #[test]
    fn landscape_layout_is_centered() {
        // width limited: 1250 / (10 * 40 * 1.2) ~ 2.6
        let layout = BoardLayout::new(Viewport::new(1250, 900));

        assert_eq!(layout.dot_size(), 104);
        assert_eq!(layout.position(0), (15, 0));
        assert_eq!(layout.position(1), (139, 0));
        assert_eq!(layout.position(10), (15, 124));
    }

    #[test]
    fn hit_test_finds_dot_and_misses_gaps() {
        let layout = BoardLayout::new(Viewport::new(1250, 900));

        assert_eq!(layout.hit_test((20, 5)), Some(0));
        assert_eq!(layout.hit_test((144, 129)), Some(11));
        assert_eq!(layout.hit_test((124, 5)), None);
        assert_eq!(layout.hit_test((0, 0)), None);
    }
}
