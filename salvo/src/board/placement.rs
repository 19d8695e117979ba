// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Ship placements: straight runs of cells, either horizontal or vertical.

use std::{fmt, ops::Range};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Coordinate, InputError};

/// Direction a ship extends from its start cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Along a row, towards higher columns.
    Horizontal,
    /// Along a column, towards higher rows.
    Vertical,
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Region occupied by a single ship. Row and column ranges are half-open; one of them
/// always spans exactly one index and the other at least two.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    rows: Range<usize>,
    cols: Range<usize>,
}

impl Placement {
    /// Construct a placement of `len` cells starting at `start` and extending in the
    /// given direction. Fails with [`InputError::InvalidOrientation`] if `len < 2`.
    /// The placement may extend beyond any particular board; that is checked when it
    /// is placed.
    pub fn new(start: Coordinate, orientation: Orientation, len: usize) -> Result<Self, InputError> {
        if len < 2 {
            return Err(InputError::InvalidOrientation);
        }
        Ok(match orientation {
            Orientation::Horizontal => Self {
                rows: start.row..start.row + 1,
                cols: start.col..start.col + len,
            },
            Orientation::Vertical => Self {
                rows: start.row..start.row + len,
                cols: start.col..start.col + 1,
            },
        })
    }

    /// Construct the placement covering both end cells, given in either order. Fails
    /// with [`InputError::InvalidOrientation`] unless the ends share exactly one of
    /// row or column.
    pub fn from_span(a: Coordinate, b: Coordinate) -> Result<Self, InputError> {
        if (a.row == b.row) == (a.col == b.col) {
            return Err(InputError::InvalidOrientation);
        }
        Ok(Self {
            rows: a.row.min(b.row)..a.row.max(b.row) + 1,
            cols: a.col.min(b.col)..a.col.max(b.col) + 1,
        })
    }

    /// Pick a placement for a ship of length `len` uniformly: the orientation first,
    /// then the start cell among every start from which the ship fits on a board of
    /// side `board_size`.
    ///
    /// Panics if `len < 2` or `len > board_size`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize, board_size: usize) -> Self {
        assert!(
            len >= 2 && len <= board_size,
            "cannot fit a ship of length {} on a board of size {}",
            len,
            board_size
        );
        let orientation: Orientation = rng.gen();
        let (max_row, max_col) = match orientation {
            Orientation::Horizontal => (board_size - 1, board_size - len),
            Orientation::Vertical => (board_size - len, board_size - 1),
        };
        let start = Coordinate::new(rng.gen_range(0, max_row + 1), rng.gen_range(0, max_col + 1));
        match Self::new(start, orientation, len) {
            Ok(placement) => placement,
            Err(_) => unreachable!(),
        }
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// Direction of the placement.
    pub fn orientation(&self) -> Orientation {
        if self.rows.len() == 1 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Top-left cell of the placement.
    pub fn start(&self) -> Coordinate {
        Coordinate::new(self.rows.start, self.cols.start)
    }

    /// Bottom-right cell of the placement.
    pub fn end(&self) -> Coordinate {
        Coordinate::new(self.rows.end - 1, self.cols.end - 1)
    }

    /// Half-open range of rows covered.
    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Half-open range of columns covered.
    pub fn cols(&self) -> Range<usize> {
        self.cols.clone()
    }

    /// True if every cell lies on a board of side `size`.
    pub fn fits(&self, size: usize) -> bool {
        self.rows.end <= size && self.cols.end <= size
    }

    /// The bounding box grown by one cell in every direction, clamped to a board of
    /// side `size` on both the low and the high side.
    pub fn buffer(&self, size: usize) -> (Range<usize>, Range<usize>) {
        let grow = |r: &Range<usize>| r.start.saturating_sub(1)..(r.end + 1).min(size);
        (grow(&self.rows), grow(&self.cols))
    }

    /// Iterate the cells covered.
    pub fn cells(&self) -> impl '_ + Iterator<Item = Coordinate> {
        let cols = self.cols.clone();
        self.rows
            .clone()
            .flat_map(move |row| cols.clone().map(move |col| Coordinate::new(row, col)))
    }
}

impl fmt::Display for Placement {
    /// Formats as the span a player would type, e.g. `1A-1D`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn buffer_clamps_both_edges() {
        let top_left = Placement::new(Coordinate::new(0, 0), Orientation::Horizontal, 3).unwrap();
        assert_eq!(top_left.buffer(10), (0..2, 0..4));

        let bottom_right = Placement::new(Coordinate::new(9, 8), Orientation::Horizontal, 2).unwrap();
        assert_eq!(bottom_right.buffer(10), (8..10, 7..10));
    }

    #[test]
    fn span_must_be_straight_and_long() {
        let c = Coordinate::new;
        assert_eq!(
            Placement::from_span(c(4, 2), c(4, 2)),
            Err(InputError::InvalidOrientation)
        );
        assert_eq!(
            Placement::from_span(c(0, 0), c(2, 2)),
            Err(InputError::InvalidOrientation)
        );
        let reversed = Placement::from_span(c(3, 5), c(0, 5)).unwrap();
        assert_eq!(reversed.start(), c(0, 5));
        assert_eq!(reversed.len(), 4);
        assert_eq!(reversed.orientation(), Orientation::Vertical);
    }

    #[test]
    fn random_reaches_last_fitting_anchor() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_edge = false;
        for _ in 0..2000 {
            let p = Placement::random(&mut rng, 4, 5);
            assert!(p.fits(5));
            assert_eq!(p.len(), 4);
            seen_edge |= p.end().row == 4 || p.end().col == 4;
        }
        assert!(seen_edge);
    }
}
