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
//! Engine for a two-player, turn-based grid battle game.
//!
//! The engine is split into phases the same way a game is played:
//!
//! [`board::BoardSetup`] holds a grid while ships are being placed. Once the fleet is
//! down it is converted into a [`board::Board`], which only allows shots.
//!
//! [`participant`] provides the two kinds of players, an automated one driven by a
//! random source and a driven one fed with lines of text, and [`game`] runs the turn
//! engine between them.
//!
//! Presentation is not part of this crate. Boards can be rendered into rows of
//! [`board::Cell`]s and the engine reports every shot to an injected
//! [`game::Observer`].

pub mod board;
pub mod config;
pub mod game;
pub mod participant;
pub mod retry;
pub mod ships;

pub use crate::{
    board::{Board, BoardSetup, Cell, Coordinate, GuessView, InputError, Orientation, Placement},
    config::GameConfig,
    game::{FirstTurn, Game, GameError, Observer, Player, ShotOutcome, ShotReport, TurnState},
    participant::{Automated, DecisionError, Driven, Participant, ParticipantKind, Strategy},
    ships::{Fleet, ShipSpec},
};
