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
//! Errors used by the [`BoardSetup`], the [`Board`] and the text notation.

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a line of player input could not be turned into a placement or a target.
/// Every variant is recoverable: the input is reported back and asked for again.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InputError {
    /// The text does not look like a coordinate or span at all.
    #[error("use the row number and the column letter, e.g. 1A or 1A-1D")]
    MalformedCoordinate,
    /// A row or column lies outside the board.
    #[error("row must be between 1 and {size} and column between A and {last}", last = crate::board::column_name(.size.saturating_sub(1)))]
    OutOfBounds { size: usize },
    /// The span is diagonal or covers a single cell.
    #[error("a ship must be longer than one cell and placed horizontally or vertically")]
    InvalidOrientation,
    /// The span does not cover as many cells as the ship being placed.
    #[error("this ship should have size {expected}, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    /// The ship would touch or overlap another ship.
    #[error("leave at least one square between ships")]
    OverlapOrAdjacency,
    /// The target has already been fired at.
    #[error("{0} has already been fired at")]
    AlreadyResolved(Coordinate),
}

/// Reason why a ship could not be placed on a [`BoardSetup`].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the placement lies outside the board.
    #[error("the placement does not fit on the board")]
    OutOfBounds,
    /// The placement, or the one-cell buffer around it, touches another ship.
    #[error("the placement overlaps or touches another ship")]
    OverlapOrAdjacency,
}

/// Reason why a cell could not be fired at.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The target is not on the board, which has side `size`.
    #[error("the target is outside the board of size {size}")]
    OutOfBounds { size: usize },
    /// The target has already been hit or missed.
    #[error("the target cell was already fired at")]
    AlreadyResolved,
}

impl CannotShootReason {
    /// Convert into the error reported to a player who fired at `target`.
    pub fn into_input_error(self, target: Coordinate) -> InputError {
        match self {
            CannotShootReason::OutOfBounds { size } => InputError::OutOfBounds { size },
            CannotShootReason::AlreadyResolved => InputError::AlreadyResolved(target),
        }
    }
}

impl CannotPlaceReason {
    /// Convert into the error reported to a player, who placed on a board of `size`.
    pub fn into_input_error(self, size: usize) -> InputError {
        match self {
            CannotPlaceReason::OutOfBounds => InputError::OutOfBounds { size },
            CannotPlaceReason::OverlapOrAdjacency => InputError::OverlapOrAdjacency,
        }
    }
}
