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
//! Cell storage shared between [`BoardSetup`] and [`Board`].

use std::{
    fmt,
    ops::{Index, IndexMut, Range},
};

use crate::board::Coordinate;

/// State of a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Nothing here and nothing fired at it.
    Empty,
    /// Occupied by a ship which has not been hit here.
    Ship,
    /// Occupied by a ship which has been hit here.
    Hit,
    /// Fired at, nothing here.
    Water,
}

impl Cell {
    /// True if the cell has already been fired at.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Water)
    }

    /// Symbol used when printing this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Water => 'w',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(self.symbol().encode_utf8(&mut buf))
    }
}

/// Square grid of cells stored in row-major order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Side length of the grid.
    size: usize,
    /// Cells that make up this grid.
    cells: Box<[Cell]>,
}

impl Grid {
    /// Construct a grid of `size * size` empty cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size].into_boxed_slice(),
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    fn linearize(&self, coord: &Coordinate) -> Option<usize> {
        if coord.in_bounds(self.size) {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Get the cell at the given [`Coordinate`], or `None` if it is off the grid.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.linearize(&coord).map(|i| self.cells[i])
    }

    /// Overwrite the cell at the given [`Coordinate`].
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) {
        self[coord] = cell;
    }

    /// Get a view of the cells within the given row and column ranges. Ranges are
    /// clipped to the grid.
    pub fn region(&self, rows: Range<usize>, cols: Range<usize>) -> Region<'_> {
        let clip = |r: Range<usize>| r.start.min(self.size)..r.end.min(self.size);
        Region {
            grid: self,
            rows: clip(rows),
            cols: clip(cols),
        }
    }

    /// Iterate the rows of the grid, each as a slice of cells.
    pub fn rows(&self) -> impl '_ + Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Count the cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Cell {
        match self.linearize(&coord) {
            Some(i) => &self.cells[i],
            None => panic!("{:?} is out of bounds for a grid of size {}", coord, self.size),
        }
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Cell {
        match self.linearize(&coord) {
            Some(i) => &mut self.cells[i],
            None => panic!("{:?} is out of bounds for a grid of size {}", coord, self.size),
        }
    }
}

/// Read-only rectangular view into a [`Grid`].
#[derive(Debug, Clone)]
pub struct Region<'a> {
    grid: &'a Grid,
    rows: Range<usize>,
    cols: Range<usize>,
}

impl<'a> Region<'a> {
    /// Iterate the coordinates and states of every cell in the region.
    pub fn iter(&self) -> impl 'a + Iterator<Item = (Coordinate, Cell)> {
        let grid = self.grid;
        let cols = self.cols.clone();
        self.rows.clone().flat_map(move |row| {
            cols.clone().map(move |col| {
                let coord = Coordinate::new(row, col);
                (coord, grid[coord])
            })
        })
    }

    /// True if no cell in the region is anything but [`Cell::Empty`].
    pub fn all_empty(&self) -> bool {
        self.iter().all(|(_, cell)| cell == Cell::Empty)
    }

    /// Number of cells covered by the region.
    pub fn len(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// True if the region covers no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
