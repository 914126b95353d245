use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, BoardError, CellState, Orientation, Placement, ShotResult, FLEET, NUM_SHIPS,
    TOTAL_SHIP_CELLS,
};

#[test]
fn test_can_place_after_manual_placement() {
    let mut board = Board::new(10);
    let destroyer = 4;
    board.place(destroyer, 0, 0, Orientation::Horizontal).unwrap();

    assert!(!board.can_place(destroyer, 0, 0, Orientation::Horizontal));
    assert!(!board.can_place(destroyer, 0, 1, Orientation::Horizontal));
    assert!(board.can_place(destroyer, 0, 2, Orientation::Horizontal));
}

#[test]
fn test_count_legal_placements_empty_board() {
    let board = Board::new(10);
    // n * (n - length + 1) * 2 for every class
    assert_eq!(board.count_legal_placements(0), 10 * 6 * 2);
    assert_eq!(board.count_legal_placements(4), 10 * 9 * 2);
    assert_eq!(board.count_legal_placements(4), 180);
}

#[test]
fn test_place_rejects_out_of_bounds_runs() {
    let mut board = Board::new(10);
    assert_eq!(
        board.place(0, 0, 6, Orientation::Horizontal).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 6 }
    );
    assert_eq!(
        board.place(0, 6, 0, Orientation::Vertical).unwrap_err(),
        BoardError::OutOfBounds { row: 6, col: 0 }
    );
}

#[test]
fn test_place_rejects_overlap_and_double_placement() {
    let mut board = Board::new(10);
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(
        board.place(1, 0, 2, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        board.place(0, 5, 5, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
}

#[test]
fn test_remove_restores_empty_cells() {
    let mut board = Board::new(10);
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    assert!(!board.can_place(1, 0, 2, Orientation::Vertical));

    board.remove(0).unwrap();
    assert!(board.placement(0).is_none());
    assert!(board.can_place(1, 0, 2, Orientation::Vertical));
    assert_eq!(board.remove(0).unwrap_err(), BoardError::ShipNotPlaced);
}

#[test]
fn test_random_place_rejects_impossible_ship() {
    let mut board = Board::new(4);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        board.random_place(&mut rng, 0).unwrap_err(),
        BoardError::ShipDoesNotFit { length: 5, n: 4 }
    );
    assert!(Board::generate(4, &mut rng).is_err());
}

#[test]
fn test_generate_places_whole_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::generate(10, &mut rng).unwrap();

    assert_eq!(board.live_ship_cells(), TOTAL_SHIP_CELLS);
    for ship in 0..NUM_SHIPS {
        let placement = board.placement(ship).expect("ship placed");
        for (r, c) in placement.cells(FLEET[ship].length()) {
            assert_eq!(board.cell(r, c).unwrap(), CellState::Ship(ship));
        }
    }
}

#[test]
fn test_cell_codes_contract() {
    let mut board = Board::new(6);
    let codes = board.cell_codes();
    assert!(codes.iter().all(|row| row.iter().all(|&code| code == 0)));

    board.place(4, 2, 1, Orientation::Horizontal).unwrap();
    let codes = board.cell_codes();
    assert_eq!(codes[2][1], 5);
    assert_eq!(codes[2][2], 5);
    assert_eq!(codes[2][3], 0);
}

#[test]
fn test_record_and_mark_resolved() {
    let mut observed = Board::new(10);
    observed.record(3, 3, ShotResult::Hit).unwrap();
    observed.record(3, 4, ShotResult::Miss).unwrap();
    assert_eq!(observed.cell(3, 3).unwrap(), CellState::Hit);
    assert_eq!(observed.cell(3, 4).unwrap(), CellState::Miss);
    assert_eq!(
        observed.record(3, 3, ShotResult::Hit).unwrap_err(),
        BoardError::AlreadyRecorded { row: 3, col: 3 }
    );

    observed.record(0, 0, ShotResult::Hit).unwrap();
    observed.record(0, 1, ShotResult::Hit).unwrap();
    observed
        .mark_resolved(4, Placement::new(0, 0, Orientation::Horizontal))
        .unwrap();
    assert_eq!(observed.cell(0, 0).unwrap(), CellState::Ship(4));
    assert_eq!(observed.cell(0, 1).unwrap(), CellState::Ship(4));
    assert_eq!(
        observed.record(0, 0, ShotResult::Hit).unwrap_err(),
        BoardError::AlreadyRecorded { row: 0, col: 0 }
    );
}

#[test]
fn test_fleet_arrangement_counts() {
    let mut board = Board::new(10);
    assert_eq!(board.count_fleet_arrangements(&[]).unwrap(), 1);
    assert_eq!(
        board.count_fleet_arrangements(&[4]).unwrap(),
        board.count_legal_placements(4)
    );

    let mut small = Board::new(5);
    let carrier_spots = small.count_legal_placements(0);
    let destroyer_spots = small.count_legal_placements(4);
    let joint = small.count_fleet_arrangements(&[0, 4]).unwrap();
    assert!(joint > 0);
    // overlap pruning must cost some of the cross product
    assert!(joint < carrier_spots * destroyer_spots);
    // backtracking leaves the board untouched
    assert!(small.placement(0).is_none());
    assert_eq!(small.live_ship_cells(), 0);
}

#[test]
fn test_draws_until_same_layout_with_replayed_rng() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::generate(5, &mut rng).unwrap();

    // a fresh rng with the same seed redraws the identical layout first try
    let mut replay = SmallRng::seed_from_u64(42);
    assert_eq!(board.draws_until_same_layout(&mut replay).unwrap(), 1);
}

#[test]
fn test_same_layout_compares_ledgers() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::generate(10, &mut rng).unwrap();
    assert!(board.same_layout(&board.clone()));

    let mut other_rng = SmallRng::seed_from_u64(43);
    let other = Board::generate(10, &mut other_rng).unwrap();
    assert!(!board.same_layout(&other));
}
