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

use salvo::{
    board::{notation, CannotPlaceReason, CannotShootReason},
    Board, BoardSetup, Cell, Coordinate, Orientation, Placement,
};

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

fn ship(row: usize, col: usize, orientation: Orientation, len: usize) -> Placement {
    Placement::new(c(row, col), orientation, len).unwrap()
}

fn started(setup: BoardSetup) -> Board {
    match setup.start() {
        Ok(board) => board,
        Err(_) => panic!("setup had no ships"),
    }
}

#[test]
fn placing_marks_only_the_ship_cells() {
    let mut setup = BoardSetup::new(10);
    assert!(setup.validate_placement(&ship(2, 3, Orientation::Vertical, 3)));
    for row in 0..10 {
        for col in 0..10 {
            let expected = if col == 3 && (2..5).contains(&row) {
                Cell::Ship
            } else {
                Cell::Empty
            };
            assert_eq!(setup.get(c(row, col)), Some(expected), "({}, {})", row, col);
        }
    }
    assert_eq!(setup.placements().len(), 1);
}

#[test]
fn ships_need_a_one_cell_buffer() {
    let mut setup = BoardSetup::new(10);
    assert!(setup.validate_placement(&ship(4, 4, Orientation::Horizontal, 3)));

    // Overlap, side contact and diagonal contact are all refused.
    assert!(!setup.validate_placement(&ship(3, 5, Orientation::Vertical, 2)));
    assert!(!setup.validate_placement(&ship(5, 4, Orientation::Horizontal, 2)));
    assert!(!setup.validate_placement(&ship(5, 7, Orientation::Horizontal, 2)));
    assert!(!setup.validate_placement(&ship(2, 3, Orientation::Vertical, 2)));
    assert_eq!(
        setup.place(ship(4, 7, Orientation::Vertical, 2)),
        Err(CannotPlaceReason::OverlapOrAdjacency)
    );

    // One free cell in between is enough.
    assert!(setup.validate_placement(&ship(6, 4, Orientation::Horizontal, 3)));
    assert!(setup.validate_placement(&ship(2, 8, Orientation::Vertical, 2)));
    assert_eq!(setup.placements().len(), 3);
}

#[test]
fn buffer_is_clamped_at_the_far_edges() {
    let mut setup = BoardSetup::new(10);
    assert!(setup.validate_placement(&ship(9, 8, Orientation::Horizontal, 2)));
    assert!(setup.validate_placement(&ship(0, 9, Orientation::Vertical, 4)));
    assert!(setup.validate_placement(&ship(7, 0, Orientation::Vertical, 3)));
    assert!(!setup.validate_placement(&ship(7, 8, Orientation::Vertical, 2)));
}

#[test]
fn placement_off_the_board_is_refused() {
    let mut setup = BoardSetup::new(5);
    assert_eq!(
        setup.place(ship(0, 3, Orientation::Horizontal, 3)),
        Err(CannotPlaceReason::OutOfBounds)
    );
    assert_eq!(
        setup.check_placement(&ship(4, 0, Orientation::Vertical, 2)),
        Err(CannotPlaceReason::OutOfBounds)
    );
    assert!(setup.placements().is_empty());
}

#[test]
fn start_requires_a_ship() {
    let setup = BoardSetup::new(10);
    assert!(setup.start().is_err());
}

#[test]
fn fire_resolves_cells() {
    let mut setup = BoardSetup::new(10);
    setup.place(ship(0, 0, Orientation::Horizontal, 2)).unwrap();
    let mut board = started(setup);
    assert_eq!(board.remaining_ship_cells(), 2);

    assert_eq!(board.fire(c(0, 0)), Ok(true));
    assert_eq!(board.get(c(0, 0)), Some(Cell::Hit));
    assert_eq!(board.fire(c(5, 5)), Ok(false));
    assert_eq!(board.get(c(5, 5)), Some(Cell::Water));
    assert_eq!(board.remaining_ship_cells(), 1);
    assert!(!board.defeated());

    assert_eq!(board.fire(c(0, 1)), Ok(true));
    assert!(board.defeated());
}

#[test]
fn resolved_and_outside_cells_are_refused() {
    let mut setup = BoardSetup::new(4);
    setup.place(ship(1, 1, Orientation::Vertical, 2)).unwrap();
    let mut board = started(setup);
    board.fire(c(1, 1)).unwrap();
    board.fire(c(0, 0)).unwrap();
    let before = board.clone();

    assert_eq!(board.fire(c(1, 1)), Err(CannotShootReason::AlreadyResolved));
    assert_eq!(board.fire(c(0, 0)), Err(CannotShootReason::AlreadyResolved));
    assert_eq!(board.fire(c(4, 0)), Err(CannotShootReason::OutOfBounds { size: 4 }));
    assert_eq!(board, before);
}

#[test]
fn render_hides_ships_unless_revealed() {
    let mut setup = BoardSetup::new(6);
    setup.place(ship(1, 1, Orientation::Horizontal, 3)).unwrap();
    let mut board = started(setup);
    board.fire(c(1, 2)).unwrap();
    board.fire(c(4, 4)).unwrap();

    let hidden = board.render(false);
    assert!(hidden.iter().flatten().all(|&cell| cell != Cell::Ship));
    assert_eq!(hidden[1][1], Cell::Empty);
    assert_eq!(hidden[1][2], Cell::Hit);
    assert_eq!(hidden[4][4], Cell::Water);
    assert_eq!(board.guess_view().render(), hidden);

    let revealed = board.render(true);
    assert_eq!(revealed[1][1], Cell::Ship);
    assert_eq!(revealed[1][3], Cell::Ship);
    assert_eq!(revealed[1][2], Cell::Hit);
}

#[test]
fn guess_view_redacts_ships() {
    let mut setup = BoardSetup::new(5);
    setup.place(ship(0, 0, Orientation::Vertical, 2)).unwrap();
    let mut board = started(setup);
    board.fire(c(0, 0)).unwrap();

    let view = board.guess_view();
    assert_eq!(view.get(c(0, 0)), Some(Cell::Hit));
    assert_eq!(view.get(c(1, 0)), Some(Cell::Empty));
    assert_eq!(view.get(c(5, 0)), None);
    assert!(view.is_resolved(c(0, 0)));
    assert_eq!(view.unresolved().count(), 24);
}

#[test]
fn two_cell_ship_scenario() {
    let placement = notation::parse_span("1A-1B", 2, 10).unwrap();
    let mut setup = BoardSetup::new(10);
    assert!(setup.validate_placement(&placement));
    assert_eq!(setup.get(c(0, 0)), Some(Cell::Ship));
    assert_eq!(setup.get(c(0, 1)), Some(Cell::Ship));

    let mut board = started(setup);
    assert_eq!(board.fire(notation::parse_target("1A", 10).unwrap()), Ok(true));
    assert_eq!(board.remaining_ship_cells(), 1);
    assert_eq!(board.fire(notation::parse_target("1B", 10).unwrap()), Ok(true));
    assert_eq!(board.remaining_ship_cells(), 0);
    assert!(board.defeated());
}

#[test]
fn arrange_finds_a_layout_when_one_exists() {
    let lengths = [4, 3, 3, 2, 2, 2];
    for offset in 0..72 {
        let setup = match BoardSetup::new(6).arrange(&lengths, offset) {
            Some(setup) => setup,
            None => panic!("no layout from offset {}", offset),
        };
        let mut placed: Vec<usize> = setup.placements().iter().map(Placement::len).collect();
        placed.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(placed, lengths);
        // Every placement still passes the buffer check against the others.
        for (i, p) in setup.placements().iter().enumerate() {
            let mut others = BoardSetup::new(6);
            for (j, q) in setup.placements().iter().enumerate() {
                if i != j {
                    others.place(q.clone()).unwrap();
                }
            }
            assert_eq!(others.check_placement(p), Ok(()));
        }
    }
}

#[test]
fn arrange_reports_impossible_fleets() {
    assert!(BoardSetup::new(4).arrange(&[3, 3, 3], 0).is_none());
    assert!(BoardSetup::new(5).arrange(&[4, 4, 3, 3], 11).is_none());

    // Ships already on the board are kept.
    let mut setup = BoardSetup::new(4);
    setup.place(ship(0, 0, Orientation::Horizontal, 4)).unwrap();
    let done = setup.arrange(&[4], 0).unwrap();
    assert_eq!(done.placements().len(), 2);
    assert_eq!(done.placements()[0], ship(0, 0, Orientation::Horizontal, 4));
    assert!(setup.arrange(&[4, 4], 0).is_none());
}

#[test]
fn wide_boards_display_numbered_columns() {
    let mut setup = BoardSetup::new(40);
    let placement = ship(0, 30, Orientation::Horizontal, 3);
    assert_eq!(placement.to_string(), "1[31]-1[33]");
    assert!(setup.validate_placement(&placement));
    assert_eq!(c(0, 25).to_string(), "1Z");
    assert_eq!(c(0, 26).to_string(), "1[27]");
}

#[test]
fn cells_display_as_symbols() {
    let row: String = [Cell::Empty, Cell::Ship, Cell::Hit, Cell::Water]
        .iter()
        .map(|cell| cell.to_string())
        .collect();
    assert_eq!(row, ".SXw");
    assert_eq!(c(9, 1).to_string(), "10B");
    assert_eq!(ship(0, 0, Orientation::Horizontal, 4).to_string(), "1A-1D");
}
