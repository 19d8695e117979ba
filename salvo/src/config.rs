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
//! Game settings shared by both participants.

use thiserror::Error;

use crate::{
    retry::Retry,
    ships::{Fleet, FleetError},
};

/// Side length of the standard board.
pub const DEFAULT_BOARD_SIZE: usize = 10;
/// Smallest supported board.
pub const MIN_BOARD_SIZE: usize = 2;
/// Largest supported board; columns are named by a single letter.
pub const MAX_BOARD_SIZE: usize = 26;

/// Error returned when building an invalid [`GameConfig`].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// Board size outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[error("board size must be between {min} and {max}, got {0}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    BoardSize(usize),
    /// The fleet can't be placed on the board.
    #[error(transparent)]
    Fleet(#[from] FleetError),
}

/// Board size and fleet used by both participants, plus how hard automated placement
/// tries before giving up. A config only exists if the fleet can be laid out on the
/// board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    board_size: usize,
    fleet: Fleet,
    placement_attempts: Retry,
}

impl GameConfig {
    /// Construct a config, checking that the board size is supported and that the
    /// fleet can be placed on it.
    pub fn new(board_size: usize, fleet: Fleet) -> Result<Self, ConfigError> {
        if board_size < MIN_BOARD_SIZE || board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize(board_size));
        }
        fleet.fits(board_size)?;
        Ok(Self {
            board_size,
            fleet,
            placement_attempts: Retry::Unbounded,
        })
    }

    /// Limit the number of times automated placement may start the fleet over.
    pub fn with_placement_attempts(mut self, attempts: Retry) -> Self {
        self.placement_attempts = attempts;
        self
    }

    /// Side length of both boards.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Fleet each participant places.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Attempts allowed for placing the whole fleet automatically. Each attempt
    /// starts from an empty board.
    pub fn placement_attempts(&self) -> Retry {
        self.placement_attempts
    }
}

impl Default for GameConfig {
    /// The standard game: a 10x10 board with the standard fleet.
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: Fleet::default(),
            placement_attempts: Retry::Unbounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::ShipSpec;

    #[test]
    fn validates_board_size() {
        assert_eq!(
            GameConfig::new(27, Fleet::default()),
            Err(ConfigError::BoardSize(27))
        );
        assert_eq!(
            GameConfig::new(1, Fleet::default()),
            Err(ConfigError::BoardSize(1))
        );
    }

    #[test]
    fn validates_fleet_against_board() {
        assert_eq!(
            GameConfig::new(3, Fleet::default()),
            Err(ConfigError::Fleet(FleetError::TooLong { length: 4, size: 3 }))
        );
        let small = Fleet::new(vec![ShipSpec::new(1, 2)]).unwrap();
        assert_eq!(
            GameConfig::new(4, Fleet::new(vec![ShipSpec::new(3, 3)]).unwrap()),
            Err(ConfigError::Fleet(FleetError::Crowded(4)))
        );
        let config = GameConfig::new(4, small).unwrap();
        assert_eq!(config.board_size(), 4);
        assert_eq!(config.placement_attempts(), Retry::Unbounded);
    }
}
