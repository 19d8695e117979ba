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
use log::{debug, trace};
use rand::Rng;

use crate::{
    board::{Board, BoardSetup, Coordinate, GuessView, Placement},
    config::GameConfig,
    participant::{place_each, DecisionError, ParticipantKind, Strategy},
    retry::{Retry, RetryError},
};

/// Fleet attempts made with random placements before laying the fleet out with a
/// search instead.
const RANDOM_FLEET_ATTEMPTS: usize = 64;

/// Strategy that places ships and picks targets uniformly at random.
///
/// Ships are placed one at a time. A ship which finds no room after a try per
/// candidate placement sends the whole fleet back to an empty board. It doesn't
/// remember where it has fired; repeated targets are refused by the engine and simply
/// drawn again.
#[derive(Debug, Clone)]
pub struct Automated<R> {
    rng: R,
}

impl<R: Rng> Automated<R> {
    /// Construct an automated strategy drawing from the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for Automated<R> {
    fn kind(&self) -> ParticipantKind {
        ParticipantKind::Automated
    }

    fn place_fleet(&mut self, config: &GameConfig) -> Result<Board, DecisionError> {
        let rng = &mut self.rng;
        let size = config.board_size();
        let per_ship = Retry::AtMost(2 * size * size);
        let board = config
            .placement_attempts()
            .run(|attempt| -> Result<_, DecisionError> {
                if attempt >= RANDOM_FLEET_ATTEMPTS {
                    return Ok(arranged(config, &mut *rng));
                }
                let placed = place_each(config, per_ship, |setup, length| {
                    let placement = Placement::random(&mut *rng, length, size);
                    let placed = setup.validate_placement(&placement);
                    trace!("random placement {} accepted={}", placement, placed);
                    Ok(placed)
                });
                match placed {
                    Ok(board) => Ok(Some(board)),
                    Err(RetryError::Exhausted { attempts }) => {
                        debug!(
                            "fleet attempt {} found no room after {} tries, starting over",
                            attempt, attempts
                        );
                        Ok(None)
                    }
                    Err(RetryError::Aborted(err)) => Err(err),
                }
            })?;
        Ok(board)
    }

    fn choose_target(&mut self, opponent: GuessView) -> Result<Coordinate, DecisionError> {
        let size = opponent.size();
        Ok(Coordinate::new(
            self.rng.gen_range(0, size),
            self.rng.gen_range(0, size),
        ))
    }
}

/// Lay out the whole fleet with [`BoardSetup::arrange`], starting the search at a
/// random candidate.
fn arranged<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Option<Board> {
    let size = config.board_size();
    let offset = rng.gen_range(0, 2 * size * size);
    let setup = BoardSetup::new(size).arrange(&config.fleet().sorted_lengths(), offset)?;
    debug!("fleet laid out by search from candidate {}", offset);
    setup.start().ok()
}
