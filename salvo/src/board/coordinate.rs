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
use std::{convert::TryFrom, fmt};

/// The coordinates of a cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Zero-based row, displayed as a 1-based number.
    pub row: usize,
    /// Zero-based column, displayed as a letter.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if this coordinate lies on a board with the given side length.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    /// Formats the coordinate the way players type it, e.g. `(2, 1)` is `3B`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.row + 1, column_name(self.col))
    }
}

/// Letter used for the column with the given zero-based index, or `None` past `Z`.
pub fn column_letter(col: usize) -> Option<char> {
    u8::try_from(col)
        .ok()
        .filter(|&col| col < 26)
        .map(|col| (b'A' + col) as char)
}

/// Name of the column with the given zero-based index: its letter, or the 1-based
/// column number in brackets for columns past `Z`.
pub fn column_name(col: usize) -> String {
    match column_letter(col) {
        Some(letter) => letter.to_string(),
        None => format!("[{}]", col + 1),
    }
}
