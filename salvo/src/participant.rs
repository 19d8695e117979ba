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
//! Participants and the strategies that make their decisions.
//!
//! A [`Participant`] owns a name, a [`Board`] and a boxed [`Strategy`]. The strategy
//! places the fleet when the participant is created and picks targets during the
//! game. Which kind of strategy is in play is exposed through
//! [`Strategy::kind`] so callers never have to inspect types.

use std::io;

use thiserror::Error;

use crate::{
    board::{Board, BoardSetup, CannotShootReason, Coordinate, GuessView},
    config::GameConfig,
    retry::{Retry, RetryError},
};

pub use self::{
    automated::Automated,
    driven::{Driven, Operator, Request, Script},
};

mod automated;
mod driven;

/// Which kind of strategy drives a participant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParticipantKind {
    /// Decisions are made at random, without prompting anyone.
    Automated,
    /// Decisions come from outside, e.g. a person at a console or a script.
    Driven,
}

/// Error returned when a strategy can't come up with a decision.
#[derive(Debug, Error)]
pub enum DecisionError {
    /// The input source ran out before a valid decision was read.
    #[error("input ended before a decision was made")]
    InputClosed,
    /// Reading input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    /// A bounded retry ran out of attempts.
    #[error("no valid decision after {attempts} attempts")]
    Exhausted { attempts: usize },
}

impl From<RetryError<DecisionError>> for DecisionError {
    fn from(err: RetryError<DecisionError>) -> Self {
        match err {
            RetryError::Exhausted { attempts } => DecisionError::Exhausted { attempts },
            RetryError::Aborted(err) => err,
        }
    }
}

/// Source of a participant's decisions.
pub trait Strategy {
    /// Which kind of strategy this is.
    fn kind(&self) -> ParticipantKind;

    /// Produce a board with the whole fleet from `config` placed on it.
    fn place_fleet(&mut self, config: &GameConfig) -> Result<Board, DecisionError>;

    /// Choose a cell to fire at on the opponent's board. The engine asks again if
    /// the cell was already fired at.
    fn choose_target(&mut self, opponent: GuessView) -> Result<Coordinate, DecisionError>;

    /// Called when the engine refused the last target.
    fn target_rejected(&mut self, _target: Coordinate, _reason: CannotShootReason) {}
}

/// Place every ship of the fleet in order on an empty board, asking `choose` for each
/// ship's placement. `choose` gets the setup so far and the ship's length and returns
/// `Ok(true)` once it has placed the ship. Each ship gets `attempts` tries.
fn place_each<F>(
    config: &GameConfig,
    attempts: Retry,
    mut choose: F,
) -> Result<Board, RetryError<DecisionError>>
where
    F: FnMut(&mut BoardSetup, usize) -> Result<bool, DecisionError>,
{
    let mut setup = BoardSetup::new(config.board_size());
    for length in config.fleet().lengths() {
        attempts.run(|_| {
            choose(&mut setup, length).map(|placed| if placed { Some(()) } else { None })
        })?;
    }
    match setup.start() {
        Ok(board) => Ok(board),
        // Fleets always have at least one ship.
        Err(_) => unreachable!(),
    }
}

/// A player in the game: a name, the board they defend and the strategy making their
/// decisions.
pub struct Participant {
    name: String,
    board: Board,
    strategy: Box<dyn Strategy>,
}

impl Participant {
    /// Create a participant, letting the strategy place the fleet described by
    /// `config`.
    pub fn new<S>(name: impl Into<String>, mut strategy: S, config: &GameConfig) -> Result<Self, DecisionError>
    where
        S: Strategy + 'static,
    {
        let board = strategy.place_fleet(config)?;
        Ok(Self::with_board(name, strategy, board))
    }

    /// Create a participant with an already placed board.
    pub fn with_board<S>(name: impl Into<String>, strategy: S, board: Board) -> Self
    where
        S: Strategy + 'static,
    {
        Self {
            name: name.into(),
            board,
            strategy: Box::new(strategy),
        }
    }

    /// The participant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of the participant's strategy.
    pub fn kind(&self) -> ParticipantKind {
        self.strategy.kind()
    }

    /// The participant's own board, including unhit ships.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn strategy_mut(&mut self) -> &mut dyn Strategy {
        &mut *self.strategy
    }
}

impl std::fmt::Debug for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("board", &self.board)
            .finish()
    }
}

