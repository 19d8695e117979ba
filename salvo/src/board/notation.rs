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
//! Text notation for cells and spans: a 1-based row number followed by a column
//! letter, e.g. `10B`, and two of those joined by a dash for ship placements, e.g.
//! `1A-1D`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::{Coordinate, InputError, Placement};

/// Matcher for a single cell. Column letters are ASCII only, so case folding can't
/// admit letters like the Kelvin sign.
static CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)\s*(?P<row>[0-9]{1,2})\s*(?P<col>(?-u:[a-z]))\s*$").unwrap());

/// Matcher for a span between two cells.
static SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?xi)\s*
        (?P<row1>[0-9]{1,2})\s*(?P<col1>(?-u:[a-z]))\s*
        -\s*
        (?P<row2>[0-9]{1,2})\s*(?P<col2>(?-u:[a-z]))\s*$",
    )
    .unwrap()
});

/// Convert the matched row and column text into a coordinate on a board of `size`.
fn to_coordinate(row: &str, col: &str, size: usize) -> Result<Coordinate, InputError> {
    // At most two digits, so this always parses.
    let row: usize = row.parse().map_err(|_| InputError::MalformedCoordinate)?;
    let col = col
        .bytes()
        .next()
        .map(|b| (b.to_ascii_uppercase() - b'A') as usize)
        .ok_or(InputError::MalformedCoordinate)?;
    if row == 0 {
        return Err(InputError::OutOfBounds { size });
    }
    let coord = Coordinate::new(row - 1, col);
    if coord.in_bounds(size) {
        Ok(coord)
    } else {
        Err(InputError::OutOfBounds { size })
    }
}

/// Parse a single target cell such as `3B` on a board of side `size`.
pub fn parse_target(text: &str, size: usize) -> Result<Coordinate, InputError> {
    let caps = CELL
        .captures(text)
        .ok_or(InputError::MalformedCoordinate)?;
    to_coordinate(&caps["row"], &caps["col"], size)
}

/// Parse a ship placement such as `1A-1D` for a ship of `expected` cells on a board of
/// side `size`.
///
/// Checks are made in order: the shape of the text, that both ends are on the board,
/// that the span is straight and longer than one cell, and finally its length.
pub fn parse_span(text: &str, expected: usize, size: usize) -> Result<Placement, InputError> {
    let caps = SPAN
        .captures(text)
        .ok_or(InputError::MalformedCoordinate)?;
    let from = to_coordinate(&caps["row1"], &caps["col1"], size)?;
    let to = to_coordinate(&caps["row2"], &caps["col2"], size)?;
    let placement = Placement::from_span(from, to)?;
    if placement.len() != expected {
        return Err(InputError::WrongLength {
            expected,
            actual: placement.len(),
        });
    }
    Ok(placement)
}
