use battleship_board::{
    AdjacencyRule, Board, BoardConfig, BoardError, Cell, FireResult, Placement, BOARD_SIZE, HIT,
    SHIP, SUNK, TOTAL_SHIP_CELLS, WATER,
};

fn fleet() -> Vec<Placement> {
    vec![
        Placement::cell((0, 0)),
        Placement::cell((0, 2)),
        Placement::cell((0, 4)),
        Placement::cell((0, 6)),
        Placement::new((2, 0), (2, 1)),
        Placement::new((2, 3), (2, 4)),
        Placement::new((2, 6), (2, 7)),
        Placement::new((4, 0), (4, 2)),
        Placement::new((4, 4), (4, 6)),
        Placement::new((6, 0), (6, 3)),
    ]
}

fn quiet() -> BoardConfig {
    BoardConfig::new().with_echo(false)
}

#[test]
fn test_example_scenario() {
    let mut board = Board::new(&fleet()).unwrap();
    assert_eq!(board.fire(0, 0).unwrap(), FireResult::Sunk);
    assert_eq!(board.fire(9, 9).unwrap(), FireResult::Miss);
    assert_eq!(board.shots_fired(), 2);
}

#[test]
fn test_grid_covers_every_deck_once() {
    let board = Board::with_config(&fleet(), quiet()).unwrap();
    let n = BOARD_SIZE as usize;
    let mut occupied = 0;
    for r in 0..n {
        for c in 0..n {
            if let Some(ship) = board.ship_at(r, c).unwrap() {
                assert!(ship.contains(r, c));
                occupied += 1;
            }
        }
    }
    assert_eq!(occupied, TOTAL_SHIP_CELLS);
    assert_eq!(board.occupancy().count_ones(), TOTAL_SHIP_CELLS);
    assert_eq!(board.ships().len(), 10);
}

#[test]
fn test_hit_until_sunk() {
    let mut board = Board::with_config(&fleet(), quiet()).unwrap();
    for c in 0..3 {
        assert_eq!(board.fire(6, c).unwrap(), FireResult::Hit);
        assert_eq!(board.cell(6, c).unwrap(), Cell::Hit);
    }
    assert_eq!(board.cell(6, 3).unwrap(), Cell::Ship);
    assert_eq!(board.fire(6, 3).unwrap(), FireResult::Sunk);
    for c in 0..4 {
        assert_eq!(board.cell(6, c).unwrap(), Cell::Sunk);
    }
    // re-firing a sunk ship keeps reporting it sunk
    assert_eq!(board.fire(6, 1).unwrap(), FireResult::Sunk);
    assert_eq!(board.ships_remaining(), 9);
}

#[test]
fn test_refire_hit_is_idempotent() {
    let mut board = Board::with_config(&fleet(), quiet()).unwrap();
    assert_eq!(board.fire(4, 4).unwrap(), FireResult::Hit);
    assert_eq!(board.fire(4, 4).unwrap(), FireResult::Hit);
    let ship = board.ship_at(4, 4).unwrap().unwrap();
    assert_eq!(ship.hits(), 1);
    assert!(!ship.is_sunk());
}

#[test]
fn test_miss_leaves_ships_untouched() {
    let mut board = Board::with_config(&fleet(), quiet()).unwrap();
    let before = board.render();
    assert_eq!(board.fire(8, 8).unwrap(), FireResult::Miss);
    assert_eq!(board.fire(8, 8).unwrap(), FireResult::Miss);
    assert_eq!(board.render(), before);
    assert!(board.ships().iter().all(|s| s.hits() == 0));
    assert!(board.was_fired(8, 8).unwrap());
    assert!(!board.was_fired(8, 9).unwrap());
}

#[test]
fn test_fire_out_of_bounds() {
    let mut board = Board::with_config(&fleet(), quiet()).unwrap();
    assert_eq!(
        board.fire(10, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        board.cell(3, 12).unwrap_err(),
        BoardError::OutOfBounds { row: 3, col: 12 }
    );
    assert_eq!(board.shots_fired(), 0);
}

#[test]
fn test_render_symbols() {
    let mut board = Board::with_config(&fleet(), quiet()).unwrap();
    board.fire(0, 0).unwrap();
    board.fire(2, 0).unwrap();

    let text = board.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(text.ends_with('\n'));

    let first = format!(" {s} ", s = SUNK)
        + &format!(" {w} ", w = WATER)
        + &format!(" {s} ", s = SHIP);
    assert!(lines[0].starts_with(&first));
    assert!(lines[2].starts_with(&format!(" {} ", HIT)));
    assert_eq!(lines[9], format!(" {} ", WATER).repeat(10));
    assert_eq!(format!("{}\n", board), text);
}

#[test]
fn test_all_sunk() {
    let mut board = Board::with_config(&fleet(), quiet()).unwrap();
    for p in fleet() {
        for (r, c) in p.cells() {
            board.fire(r, c).unwrap();
        }
    }
    assert!(board.all_sunk());
    assert_eq!(board.ships_remaining(), 0);
    assert_eq!(board.shots_fired(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_reversed_placement_builds_same_ship() {
    let mut placements = fleet();
    placements[9] = Placement::new((6, 3), (6, 0));
    let board = Board::with_config(&placements, quiet()).unwrap();
    let ship = board.ship_at(6, 2).unwrap().unwrap();
    assert_eq!(ship.start(), (6, 0));
    assert_eq!(ship.end(), (6, 3));
}

#[test]
fn test_config_is_kept() {
    let config = quiet().with_adjacency(AdjacencyRule::Endpoints);
    let board = Board::with_config(&fleet(), config).unwrap();
    assert_eq!(board.config(), config);
}
