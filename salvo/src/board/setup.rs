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
//! Implements the setup phase of the board.

use log::debug;

use crate::board::{Board, CannotPlaceReason, Cell, Coordinate, Grid, Orientation, Placement};

/// Setup phase for a [`Board`]. Allows placing ships and does not allow shooting.
///
/// Ships must keep a one-cell buffer from each other, including diagonally.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    /// Grid that ships are being placed into.
    grid: Grid,

    /// Placements made so far, in order.
    placements: Vec<Placement>,
}

impl BoardSetup {
    /// Begin setup with an empty board of side `size`.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            placements: Vec::new(),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Get the cell at the given coordinate, or `None` if it is off the board.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord)
    }

    /// Ships placed so far.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Check if the placement could be made, without making it.
    pub fn check_placement(&self, placement: &Placement) -> Result<(), CannotPlaceReason> {
        let size = self.size();
        if !placement.fits(size) {
            return Err(CannotPlaceReason::OutOfBounds);
        }
        let (rows, cols) = placement.buffer(size);
        if self.grid.region(rows, cols).all_empty() {
            Ok(())
        } else {
            Err(CannotPlaceReason::OverlapOrAdjacency)
        }
    }

    /// Place a ship, marking its cells as [`Cell::Ship`], or report why it can't be
    /// placed. The board is unchanged on error.
    pub fn place(&mut self, placement: Placement) -> Result<(), CannotPlaceReason> {
        self.check_placement(&placement)?;
        debug!("placed ship at {}", placement);
        self.mark(placement);
        Ok(())
    }

    fn mark(&mut self, placement: Placement) {
        for coord in placement.cells() {
            self.grid[coord] = Cell::Ship;
        }
        self.placements.push(placement);
    }

    /// Search for a layout of ships with the given lengths on top of the ships already
    /// placed, backtracking until every ship is down. Candidate placements are tried
    /// in row-major order, horizontal before vertical, starting from the candidate at
    /// `offset` and wrapping around. Returns `None` if the ships can't all be placed.
    ///
    /// Runs of equal lengths are treated as interchangeable, so passing the lengths
    /// sorted keeps the search small.
    pub fn arrange(&self, lengths: &[usize], offset: usize) -> Option<BoardSetup> {
        let size = self.size();
        let candidates = size * size * 2;
        if candidates == 0 {
            return if lengths.is_empty() { Some(self.clone()) } else { None };
        }
        self.arrange_from(lengths, offset % candidates, 0)
    }

    fn arrange_from(&self, lengths: &[usize], offset: usize, first: usize) -> Option<BoardSetup> {
        let (&len, rest) = match lengths.split_first() {
            Some(split) => split,
            None => return Some(self.clone()),
        };
        let size = self.size();
        let candidates = size * size * 2;
        for k in first..candidates {
            let index = (offset + k) % candidates;
            let cell = index / 2;
            let orientation = if index % 2 == 0 {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let placement = Placement::new(Coordinate::new(cell / size, cell % size), orientation, len).ok()?;
            if self.check_placement(&placement).is_err() {
                continue;
            }
            let mut next = self.clone();
            next.mark(placement);
            // The next ship of the same length only tries later candidates.
            let next_first = match rest.first() {
                Some(&next_len) if next_len == len => k + 1,
                _ => 0,
            };
            if let Some(done) = next.arrange_from(rest, offset, next_first) {
                return Some(done);
            }
        }
        None
    }

    /// Place a ship if it fits on the board and neither it nor the buffer around it
    /// touches another ship. Returns true if the ship was placed.
    pub fn validate_placement(&mut self, placement: &Placement) -> bool {
        self.place(placement.clone()).is_ok()
    }

    /// Render the setup grid into rows of cells.
    pub fn render(&self) -> Vec<Vec<Cell>> {
        self.grid.rows().map(|row| row.to_vec()).collect()
    }

    /// Finish setup. Fails, returning self, if no ship has been placed.
    pub fn start(self) -> Result<Board, Self> {
        if self.placements.is_empty() {
            Err(self)
        } else {
            Ok(Board::from_grid(self.grid))
        }
    }
}
