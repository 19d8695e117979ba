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
//! The turn engine: two participants take turns firing at each other's boards until
//! one fleet is fully hit.
//!
//! A turn lasts as long as the active player keeps hitting. A miss passes the turn to
//! the opponent, and the hit which takes the opponent's last ship cell ends the game.
//! Targets which were already fired at are refused before they reach the board and
//! the active player chooses again.

use log::{debug, trace};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

use crate::{
    board::{CannotShootReason, Coordinate},
    participant::{DecisionError, Participant},
    retry::Retry,
};

/// Identifies one of the two seats in the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl Distribution<Player> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        if rng.gen() {
            Player::P1
        } else {
            Player::P2
        }
    }
}

/// How the player taking the first turn is decided.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FirstTurn {
    /// The given player starts.
    Player(Player),
    /// Either player, with equal chance.
    Random,
}

/// State of the turn engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnState {
    /// The player is choosing a target.
    AwaitingTurn(Player),
    /// The player's shot is being resolved.
    Resolving(Player),
    /// The player has hit every ship cell of the opponent. Terminal.
    GameOver(Player),
}

/// Result of a single resolved shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// Nothing was hit; the turn passes to the opponent.
    Miss,
    /// A ship was hit and the opponent still has ship cells left.
    Hit,
    /// The opponent's last ship cell was hit.
    Victory,
}

impl ShotOutcome {
    /// True for hits, including the winning one.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Everything that happened in one resolved shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShotReport {
    /// Player who fired.
    pub shooter: Player,
    /// Cell fired at on the opponent's board.
    pub target: Coordinate,
    /// Outcome of the shot.
    pub outcome: ShotOutcome,
    /// Ship cells the opponent has left after the shot.
    pub remaining: usize,
}

/// Error returned by [`Game::step`] and [`Game::run`].
#[derive(Debug, Error)]
pub enum GameError {
    /// A participant couldn't make a decision.
    #[error("{player:?} could not decide: {source}")]
    Decision {
        player: Player,
        #[source]
        source: DecisionError,
    },
    /// The game has already been won.
    #[error("the game is already over, {winner:?} won")]
    AlreadyOver { winner: Player },
    /// The participants' boards differ in size.
    #[error("boards must be the same size, got {p1} and {p2}")]
    MismatchedBoards { p1: usize, p2: usize },
}

/// Hooks for presenting the game as it is played. All methods default to doing
/// nothing.
pub trait Observer {
    /// A shot was resolved. The game already reflects the shot.
    fn shot(&mut self, _game: &Game, _report: &ShotReport) {}

    /// A target was refused and the player has to choose again.
    fn target_rejected(&mut self, _player: Player, _target: Coordinate, _reason: CannotShootReason) {}
}

impl Observer for () {}

/// A game between two participants.
#[derive(Debug)]
pub struct Game {
    /// Participants indexed by [`Player`].
    participants: [Participant; 2],

    /// Current state of the turn engine.
    state: TurnState,

    /// Resolved shots fired by each player.
    shots: [usize; 2],
}

impl Game {
    /// Start a game where `first` takes the first turn. Fails if the participants'
    /// boards are not the same size.
    pub fn new(p1: Participant, p2: Participant, first: Player) -> Result<Self, GameError> {
        let (size1, size2) = (p1.board().size(), p2.board().size());
        if size1 != size2 {
            return Err(GameError::MismatchedBoards {
                p1: size1,
                p2: size2,
            });
        }
        debug!("{:?} ({}) goes first", first, [&p1, &p2][first.index()].name());
        Ok(Self {
            participants: [p1, p2],
            state: TurnState::AwaitingTurn(first),
            shots: [0; 2],
        })
    }

    /// Start a game, deciding who goes first with the given random source if needed.
    pub fn with_first_turn<R: Rng + ?Sized>(
        p1: Participant,
        p2: Participant,
        first: FirstTurn,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let first = match first {
            FirstTurn::Player(player) => player,
            FirstTurn::Random => rng.gen(),
        };
        Self::new(p1, p2, first)
    }

    /// Current state of the turn engine.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The player whose turn it is, or `None` once the game is over.
    pub fn current(&self) -> Option<Player> {
        match self.state {
            TurnState::AwaitingTurn(player) | TurnState::Resolving(player) => Some(player),
            TurnState::GameOver(_) => None,
        }
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            TurnState::GameOver(player) => Some(player),
            _ => None,
        }
    }

    /// Get the participant in the given seat.
    pub fn participant(&self, player: Player) -> &Participant {
        &self.participants[player.index()]
    }

    /// Number of resolved shots the given player has fired.
    pub fn shots(&self, player: Player) -> usize {
        self.shots[player.index()]
    }

    /// Split the participants into the given player and their opponent.
    fn split(&mut self, player: Player) -> (&mut Participant, &mut Participant) {
        let [p1, p2] = &mut self.participants;
        match player {
            Player::P1 => (p1, p2),
            Player::P2 => (p2, p1),
        }
    }

    /// Resolve one shot by the current player without reporting to an observer.
    pub fn step(&mut self) -> Result<ShotReport, GameError> {
        self.step_observed(&mut ())
    }

    /// Resolve one shot by the current player: ask for targets until one has not been
    /// fired at yet, fire, then hand the turn on according to the outcome.
    pub fn step_observed<O>(&mut self, observer: &mut O) -> Result<ShotReport, GameError>
    where
        O: Observer + ?Sized,
    {
        let player = match self.state {
            TurnState::GameOver(winner) => return Err(GameError::AlreadyOver { winner }),
            TurnState::AwaitingTurn(player) | TurnState::Resolving(player) => player,
        };
        let (shooter, opponent) = self.split(player);

        let target = Retry::Unbounded
            .run(|_| -> Result<_, DecisionError> {
                let target = shooter
                    .strategy_mut()
                    .choose_target(opponent.board().guess_view())?;
                let refused = match opponent.board().get(target) {
                    None => Some(CannotShootReason::OutOfBounds { size: opponent.board().size() }),
                    Some(cell) if cell.is_resolved() => Some(CannotShootReason::AlreadyResolved),
                    Some(_) => None,
                };
                match refused {
                    None => Ok(Some(target)),
                    Some(reason) => {
                        trace!("{:?} target {} refused: {}", player, target, reason);
                        shooter.strategy_mut().target_rejected(target, reason);
                        observer.target_rejected(player, target, reason);
                        Ok(None)
                    }
                }
            })
            .map_err(|err| GameError::Decision {
                player,
                source: DecisionError::from(err),
            })?;

        self.state = TurnState::Resolving(player);
        trace!("{:?} -> {:?}", TurnState::AwaitingTurn(player), self.state);

        let (_, opponent) = self.split(player);
        let hit = match opponent.board_mut().fire(target) {
            Ok(hit) => hit,
            // Target was checked against the board above.
            Err(_) => unreachable!(),
        };
        let remaining = opponent.board().remaining_ship_cells();
        let (outcome, next) = match (hit, remaining) {
            (false, _) => (ShotOutcome::Miss, TurnState::AwaitingTurn(player.opponent())),
            (true, 0) => (ShotOutcome::Victory, TurnState::GameOver(player)),
            (true, _) => (ShotOutcome::Hit, TurnState::AwaitingTurn(player)),
        };
        self.shots[player.index()] += 1;
        self.state = next;
        trace!("{:?} -> {:?}", TurnState::Resolving(player), next);
        debug!("{:?} fired at {}: {:?}, {} left", player, target, outcome, remaining);

        let report = ShotReport {
            shooter: player,
            target,
            outcome,
            remaining,
        };
        observer.shot(self, &report);
        Ok(report)
    }

    /// Play until one player wins, reporting every shot to `observer`. Returns the
    /// winner.
    pub fn run<O>(&mut self, observer: &mut O) -> Result<Player, GameError>
    where
        O: Observer + ?Sized,
    {
        loop {
            if let TurnState::GameOver(winner) = self.state {
                debug!("game over, {:?} won", winner);
                return Ok(winner);
            }
            self.step_observed(observer)?;
        }
    }
}
