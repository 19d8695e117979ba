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
use std::{collections::VecDeque, io};

use log::trace;

use crate::{
    board::{
        notation, Board, BoardSetup, CannotShootReason, Coordinate, GuessView, InputError, Placement,
    },
    config::GameConfig,
    participant::{place_each, DecisionError, ParticipantKind, Strategy},
    retry::Retry,
};

/// What a [`Driven`] strategy is asking its [`Operator`] for.
#[derive(Debug, Copy, Clone)]
pub enum Request<'a> {
    /// A span for the next ship, e.g. `1A-1D`.
    Placement {
        /// Length of the ship to place.
        length: usize,
        /// Board with the ships placed so far.
        setup: &'a BoardSetup,
    },
    /// A cell to fire at, e.g. `3B`.
    Target {
        /// What is known about the opponent's board.
        opponent: GuessView<'a>,
    },
}

/// Supplies lines of text to a [`Driven`] strategy and is told when they are
/// rejected.
pub trait Operator {
    /// Read the line answering `request`. Returns `Ok(None)` when there is no more
    /// input.
    fn read_line(&mut self, request: Request) -> io::Result<Option<String>>;

    /// The last line was rejected for the given reason and will be asked for again.
    fn rejected(&mut self, error: InputError);

    /// A ship was placed.
    fn placed(&mut self, _setup: &BoardSetup, _placement: &Placement) {}
}

/// Strategy whose decisions are read as text from an [`Operator`]. Invalid lines are
/// reported to the operator and asked for again.
#[derive(Debug, Clone)]
pub struct Driven<O> {
    operator: O,
}

impl<O: Operator> Driven<O> {
    /// Construct a strategy reading from the given operator.
    pub fn new(operator: O) -> Self {
        Self { operator }
    }

    /// The operator supplying input.
    pub fn operator(&self) -> &O {
        &self.operator
    }

    /// Extract the operator.
    pub fn into_operator(self) -> O {
        self.operator
    }

    /// Read one line, treating the end of input as an error.
    fn read(&mut self, request: Request) -> Result<String, DecisionError> {
        self.operator
            .read_line(request)?
            .ok_or(DecisionError::InputClosed)
    }
}

impl<O: Operator> Strategy for Driven<O> {
    fn kind(&self) -> ParticipantKind {
        ParticipantKind::Driven
    }

    fn place_fleet(&mut self, config: &GameConfig) -> Result<Board, DecisionError> {
        let size = config.board_size();
        let board = place_each(config, Retry::Unbounded, |setup, length| {
            let line = self.read(Request::Placement { length, setup })?;
            let result = notation::parse_span(&line, length, size).and_then(|placement| {
                setup
                    .place(placement.clone())
                    .map(|()| placement)
                    .map_err(|reason| reason.into_input_error(size))
            });
            match result {
                Ok(placement) => {
                    self.operator.placed(setup, &placement);
                    Ok(true)
                }
                Err(err) => {
                    trace!("rejected placement {:?}: {}", line, err);
                    self.operator.rejected(err);
                    Ok(false)
                }
            }
        })?;
        Ok(board)
    }

    fn choose_target(&mut self, opponent: GuessView) -> Result<Coordinate, DecisionError> {
        let size = opponent.size();
        let target = Retry::Unbounded.run(|_| -> Result<_, DecisionError> {
            let line = self.read(Request::Target { opponent })?;
            match notation::parse_target(&line, size) {
                Ok(coord) => Ok(Some(coord)),
                Err(err) => {
                    trace!("rejected target {:?}: {}", line, err);
                    self.operator.rejected(err);
                    Ok(None)
                }
            }
        })?;
        Ok(target)
    }

    fn target_rejected(&mut self, target: Coordinate, reason: CannotShootReason) {
        self.operator.rejected(reason.into_input_error(target));
    }
}

/// [`Operator`] that answers from a fixed list of lines and records every rejection.
#[derive(Debug, Clone, Default)]
pub struct Script {
    lines: VecDeque<String>,
    rejections: Vec<InputError>,
}

impl Script {
    /// Construct a script answering with `lines`, in order.
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            rejections: Vec::new(),
        }
    }

    /// Rejections reported so far, oldest first.
    pub fn rejections(&self) -> &[InputError] {
        &self.rejections
    }

    /// Number of lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Operator for Script {
    fn read_line(&mut self, _request: Request) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn rejected(&mut self, error: InputError) {
        self.rejections.push(error);
    }
}
