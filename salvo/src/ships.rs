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
//! Fleet composition: how many ships of which length each participant places.

use std::fmt;

use thiserror::Error;

use crate::board::BoardSetup;

/// Some number of ships sharing one length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipSpec {
    /// How many ships of this length.
    pub count: usize,
    /// Number of cells in each ship.
    pub length: usize,
}

impl ShipSpec {
    /// Construct a [`ShipSpec`] for `count` ships of `length` cells.
    pub const fn new(count: usize, length: usize) -> Self {
        Self { count, length }
    }
}

impl From<(usize, usize)> for ShipSpec {
    /// Construct a [`ShipSpec`] from a `(count, length)` pair.
    fn from((count, length): (usize, usize)) -> Self {
        Self::new(count, length)
    }
}

/// Reason why a fleet was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// No ships at all.
    #[error("the fleet has no ships")]
    Empty,
    /// A spec with a count of zero.
    #[error("ship spec {0} has a count of zero")]
    ZeroCount(usize),
    /// Ships must cover at least two cells.
    #[error("ships must be at least 2 long, got {0}")]
    TooShort(usize),
    /// A ship is longer than the board.
    #[error("a ship of length {length} does not fit on a board of size {size}")]
    TooLong { length: usize, size: usize },
    /// The ships and their buffers could never all fit on the board.
    #[error("the fleet is too large for a board of size {0}")]
    Crowded(usize),
}

/// The ordered list of [`ShipSpec`]s that every participant must place.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Fleet(Vec<ShipSpec>);

impl Fleet {
    /// The standard fleet: one ship of 4, two of 3 and three of 2.
    pub const STANDARD: [ShipSpec; 3] = [ShipSpec::new(1, 4), ShipSpec::new(2, 3), ShipSpec::new(3, 2)];

    /// Construct a fleet from its specs. Every spec needs a count of at least one and
    /// a length of at least two.
    pub fn new<I>(specs: I) -> Result<Self, FleetError>
    where
        I: IntoIterator,
        I::Item: Into<ShipSpec>,
    {
        let specs: Vec<ShipSpec> = specs.into_iter().map(Into::into).collect();
        if specs.is_empty() {
            return Err(FleetError::Empty);
        }
        for (i, spec) in specs.iter().enumerate() {
            if spec.count == 0 {
                return Err(FleetError::ZeroCount(i));
            }
            if spec.length < 2 {
                return Err(FleetError::TooShort(spec.length));
            }
        }
        Ok(Fleet(specs))
    }

    /// The specs making up this fleet.
    pub fn specs(&self) -> &[ShipSpec] {
        &self.0
    }

    /// Keep only the first `n` specs, but always at least one.
    pub fn truncated(&self, n: usize) -> Self {
        Fleet(self.0[..n.max(1).min(self.0.len())].to_vec())
    }

    /// Length of every ship in placement order: each spec in turn, repeated `count`
    /// times.
    pub fn lengths(&self) -> impl '_ + Iterator<Item = usize> {
        self.0
            .iter()
            .flat_map(|spec| std::iter::repeat(spec.length).take(spec.count))
    }

    /// Total number of ships.
    pub fn ship_count(&self) -> usize {
        self.0.iter().map(|spec| spec.count).sum()
    }

    /// Total number of ship cells.
    pub fn total_cells(&self) -> usize {
        self.0.iter().map(|spec| spec.count * spec.length).sum()
    }

    /// Check that this fleet can be placed on a board of side `size`.
    ///
    /// Growing every ship by one cell to the right and one down gives disjoint
    /// rectangles inside a board one larger on each side, so the fleet can only fit if
    /// their total area does. Fleets passing that test are laid out with
    /// [`BoardSetup::arrange`] to be sure.
    pub fn fits(&self, size: usize) -> Result<(), FleetError> {
        if let Some(length) = self.lengths().find(|&length| length > size) {
            return Err(FleetError::TooLong { length, size });
        }
        let area: usize = self
            .0
            .iter()
            .map(|spec| spec.count * (spec.length + 1) * 2)
            .sum();
        if area > (size + 1) * (size + 1) {
            return Err(FleetError::Crowded(size));
        }
        if BoardSetup::new(size).arrange(&self.sorted_lengths(), 0).is_none() {
            return Err(FleetError::Crowded(size));
        }
        Ok(())
    }

    /// Length of every ship, longest first.
    pub fn sorted_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.lengths().collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Fleet(Self::STANDARD.to_vec())
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for spec in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}x{}", spec.count, spec.length)?;
        }
        Ok(())
    }
}
