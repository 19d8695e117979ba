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

use std::{collections::HashSet, sync::mpsc, thread, time::Duration};

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use salvo::{
    board::CannotShootReason,
    participant::Script,
    retry::Retry,
    ships::ShipSpec,
    Automated, Board, BoardSetup, Cell, Coordinate, DecisionError, Driven, Fleet, GameConfig,
    InputError, Participant, ParticipantKind, Strategy,
};

fn config(size: usize, specs: &[(usize, usize)]) -> GameConfig {
    let fleet = Fleet::new(specs.iter().map(|&(count, length)| ShipSpec::new(count, length))).unwrap();
    GameConfig::new(size, fleet).unwrap()
}

/// Lengths of the groups of ship cells touching each other, including diagonally.
/// Panics if a group is not a straight line.
fn ship_groups(board: &Board) -> Vec<usize> {
    let size = board.size();
    let rendered = board.render(true);
    let mut seen = HashSet::new();
    let mut lengths = Vec::new();
    for row in 0..size {
        for col in 0..size {
            if rendered[row][col] != Cell::Ship || !seen.insert((row, col)) {
                continue;
            }
            let mut group = vec![(row, col)];
            let mut i = 0;
            while i < group.len() {
                let (r, c) = group[i];
                for nr in r.saturating_sub(1)..(r + 2).min(size) {
                    for nc in c.saturating_sub(1)..(c + 2).min(size) {
                        if rendered[nr][nc] == Cell::Ship && seen.insert((nr, nc)) {
                            group.push((nr, nc));
                        }
                    }
                }
                i += 1;
            }
            let straight = group.iter().all(|&(r, _)| r == group[0].0)
                || group.iter().all(|&(_, c)| c == group[0].1);
            assert!(straight, "ship cells {:?} are not in a line", group);
            lengths.push(group.len());
        }
    }
    lengths.sort();
    lengths
}

#[test]
fn kinds_are_tagged() {
    let automated = Automated::new(StdRng::seed_from_u64(1));
    let driven = Driven::new(Script::default());
    assert_eq!(automated.kind(), ParticipantKind::Automated);
    assert_eq!(driven.kind(), ParticipantKind::Driven);

    let config = GameConfig::default();
    let participant = Participant::new("Computer", automated, &config).unwrap();
    assert_eq!(participant.name(), "Computer");
    assert_eq!(participant.kind(), ParticipantKind::Automated);
    assert_eq!(participant.board().remaining_ship_cells(), config.fleet().total_cells());
}

#[test]
fn driven_placement_recovers_from_every_error() {
    let config = config(10, &[(1, 3), (1, 2)]);
    let mut driven = Driven::new(Script::new(vec![
        "banana", "11A-11C", "1A-1A", "1A-1D", "1a-1c", "2A-2B", "3A-3B",
    ]));
    let board = driven.place_fleet(&config).unwrap();

    assert_eq!(
        driven.operator().rejections(),
        &[
            InputError::MalformedCoordinate,
            InputError::OutOfBounds { size: 10 },
            InputError::InvalidOrientation,
            InputError::WrongLength {
                expected: 3,
                actual: 4
            },
            InputError::OverlapOrAdjacency,
        ]
    );
    assert_eq!(driven.operator().remaining(), 0);
    assert_eq!(board.remaining_ship_cells(), 5);
    assert_eq!(ship_groups(&board), vec![2, 3]);
    assert_eq!(board.get(Coordinate::new(0, 2)), Some(Cell::Ship));
    assert_eq!(board.get(Coordinate::new(2, 1)), Some(Cell::Ship));
}

#[test]
fn driven_placement_fails_when_input_ends() {
    let config = config(10, &[(2, 2)]);
    let mut driven = Driven::new(Script::new(vec!["1A-1B", "1C-1D"]));
    match driven.place_fleet(&config) {
        Err(DecisionError::InputClosed) => {}
        other => panic!("expected InputClosed, got {:?}", other),
    }
    assert_eq!(driven.operator().rejections(), &[InputError::OverlapOrAdjacency]);
}

#[test]
fn driven_targets_are_parsed_and_rejections_forwarded() {
    let mut setup = BoardSetup::new(5);
    assert!(setup.validate_placement(&salvo::board::notation::parse_span("1A-2A", 2, 5).unwrap()));
    let board = setup.start().unwrap();

    let mut driven = Driven::new(Script::new(vec!["6A", "A1", "2e"]));
    let target = driven.choose_target(board.guess_view()).unwrap();
    assert_eq!(target, Coordinate::new(1, 4));
    driven.target_rejected(target, CannotShootReason::AlreadyResolved);
    assert_eq!(
        driven.operator().rejections(),
        &[
            InputError::OutOfBounds { size: 5 },
            InputError::MalformedCoordinate,
            InputError::AlreadyResolved(Coordinate::new(1, 4)),
        ]
    );
    match driven.choose_target(board.guess_view()) {
        Err(DecisionError::InputClosed) => {}
        other => panic!("expected InputClosed, got {:?}", other),
    }
}

#[test]
fn target_refusals_carry_the_board_size() {
    let mut driven = Driven::new(Script::default());
    driven.target_rejected(Coordinate::new(7, 0), CannotShootReason::OutOfBounds { size: 6 });
    driven.target_rejected(Coordinate::new(2, 3), CannotShootReason::AlreadyResolved);
    assert_eq!(
        driven.operator().rejections(),
        &[
            InputError::OutOfBounds { size: 6 },
            InputError::AlreadyResolved(Coordinate::new(2, 3)),
        ]
    );
}

#[test]
fn automated_placement_finishes_on_tight_boards() {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let cases = [
            config(6, &[(1, 4), (2, 3), (3, 2)]),
            config(4, &[(4, 2)]),
            config(3, &[(2, 2)]),
        ];
        for config in &cases {
            assert_eq!(config.placement_attempts(), Retry::Unbounded);
            for seed in 0..25 {
                let board = Automated::new(StdRng::seed_from_u64(seed))
                    .place_fleet(config)
                    .unwrap();
                let mut expected: Vec<usize> = config.fleet().lengths().collect();
                expected.sort();
                assert_eq!(ship_groups(&board), expected);
            }
        }
        let _ = tx.send(());
    });
    rx.recv_timeout(Duration::from_secs(60))
        .expect("automated placement did not finish");
}

#[test]
fn automated_targets_stay_on_the_board() {
    let board = Automated::new(StdRng::seed_from_u64(3))
        .place_fleet(&config(6, &[(1, 2)]))
        .unwrap();
    let mut automated = Automated::new(StdRng::seed_from_u64(4));
    for _ in 0..500 {
        let target = automated.choose_target(board.guess_view()).unwrap();
        assert!(target.in_bounds(6));
    }
}

#[test]
fn bounded_automated_placement_reports_exhaustion() {
    let config = GameConfig::default().with_placement_attempts(Retry::AtMost(0));
    match Automated::new(StdRng::seed_from_u64(5)).place_fleet(&config) {
        Err(DecisionError::Exhausted { attempts: 0 }) => {}
        other => panic!("expected Exhausted, got {:?}", other),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn automated_fleet_keeps_ships_apart(seed in any::<u64>()) {
        let config = GameConfig::default();
        let board = Automated::new(StdRng::seed_from_u64(seed)).place_fleet(&config).unwrap();
        let mut expected: Vec<usize> = config.fleet().lengths().collect();
        expected.sort();
        prop_assert_eq!(ship_groups(&board), expected);
        prop_assert_eq!(board.remaining_ship_cells(), 16);
    }
}
