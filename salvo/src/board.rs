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
//! Types that make up the game board.

use log::{debug, trace};

pub use self::{
    coordinate::{column_letter, column_name, Coordinate},
    errors::{CannotPlaceReason, CannotShootReason, InputError},
    grid::{Cell, Grid, Region},
    placement::{Orientation, Placement},
    setup::BoardSetup,
};

mod coordinate;
mod errors;
mod grid;
pub mod notation;
mod placement;
mod setup;

/// A single participant's board during combat. Ships can no longer be added; cells
/// only move from [`Cell::Ship`] to [`Cell::Hit`] or from [`Cell::Empty`] to
/// [`Cell::Water`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Cells of the board.
    grid: Grid,

    /// Number of [`Cell::Ship`] cells which have not been hit yet.
    remaining: usize,
}

impl Board {
    /// Start combat on the grid left by a finished setup.
    fn from_grid(grid: Grid) -> Self {
        let remaining = grid.count(Cell::Ship);
        debug!("board ready with {} ship cells", remaining);
        Board { grid, remaining }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Get the cell at the given coordinate, or `None` if it is off the board.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord)
    }

    /// True if the given cell is on the board and has already been fired at.
    pub fn is_resolved(&self, coord: Coordinate) -> bool {
        self.get(coord).map_or(false, Cell::is_resolved)
    }

    /// Number of ship cells which have not been hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.remaining
    }

    /// True once every ship cell has been hit.
    pub fn defeated(&self) -> bool {
        self.remaining == 0
    }

    /// Fire at the given cell. Returns `Ok(true)` if a ship was hit and `Ok(false)`
    /// for a miss. Cells which are off the board or were already fired at are refused
    /// and the board is left untouched.
    pub fn fire(&mut self, target: Coordinate) -> Result<bool, CannotShootReason> {
        let cell = match self.grid.get(target) {
            None => return Err(CannotShootReason::OutOfBounds { size: self.size() }),
            Some(cell) if cell.is_resolved() => return Err(CannotShootReason::AlreadyResolved),
            Some(cell) => cell,
        };
        let hit = cell == Cell::Ship;
        if hit {
            self.grid[target] = Cell::Hit;
            self.remaining -= 1;
        } else {
            self.grid[target] = Cell::Water;
        }
        trace!("fire at {}: hit={} remaining={}", target, hit, self.remaining);
        Ok(hit)
    }

    /// Render the board into rows of cells. Unless `reveal_ships` is set, ship cells
    /// which have not been hit are shown as [`Cell::Empty`].
    pub fn render(&self, reveal_ships: bool) -> Vec<Vec<Cell>> {
        self.grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&cell| match cell {
                        Cell::Ship if !reveal_ships => Cell::Empty,
                        other => other,
                    })
                    .collect()
            })
            .collect()
    }

    /// Get the redacted view of this board that an opponent is allowed to see.
    pub fn guess_view(&self) -> GuessView<'_> {
        GuessView { board: self }
    }
}

/// Read-only view of an opponent's [`Board`] which hides ships that have not been hit.
#[derive(Debug, Copy, Clone)]
pub struct GuessView<'a> {
    board: &'a Board,
}

impl<'a> GuessView<'a> {
    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Get the visible state of a cell, or `None` if it is off the board.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.board.get(coord).map(|cell| match cell {
            Cell::Ship => Cell::Empty,
            other => other,
        })
    }

    /// True if the cell has already been fired at.
    pub fn is_resolved(&self, coord: Coordinate) -> bool {
        self.board.is_resolved(coord)
    }

    /// Iterate the cells that have not been fired at yet.
    pub fn unresolved(&self) -> impl 'a + Iterator<Item = Coordinate> {
        let board = self.board;
        let size = board.size();
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
            .filter(move |&coord| !board.is_resolved(coord))
    }

    /// Render the visible cells, the same as [`Board::render`] without revealing ships.
    pub fn render(&self) -> Vec<Vec<Cell>> {
        self.board.render(false)
    }
}
