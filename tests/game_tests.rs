use seabattle::{
    Board, BoardError, Game, GameStatus, Orientation, ShotResult,
};

fn two_ship_board() -> Board {
    let mut board = Board::new(10);
    board.place(0, 0, 0, Orientation::Horizontal).unwrap();
    board.place(4, 9, 8, Orientation::Horizontal).unwrap();
    board
}

#[test]
fn test_shoot_empty_is_miss_and_leaves_rest_unchanged() {
    let mut game = Game::new(two_ship_board());
    let before = game.board().cell_codes();

    assert_eq!(game.shoot(5, 5).unwrap(), ShotResult::Miss);

    let after = game.board().cell_codes();
    for r in 0..10 {
        for c in 0..10 {
            if (r, c) == (5, 5) {
                assert_eq!(after[r][c], -2);
            } else {
                assert_eq!(after[r][c], before[r][c]);
            }
        }
    }
}

#[test]
fn test_sinking_one_ship_is_not_victory() {
    let mut game = Game::new(two_ship_board());

    assert_eq!(game.shoot(9, 8).unwrap(), ShotResult::Hit);
    assert!(!game.is_sunk(4).unwrap());
    assert_eq!(game.shoot(9, 9).unwrap(), ShotResult::Hit);

    assert!(game.is_sunk(4).unwrap());
    assert_eq!(game.first_sunk(&[0, 4]).unwrap(), Some(4));
    assert!(!game.victory());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_victory_flips_exactly_on_last_ship_cell() {
    let mut game = Game::new(two_ship_board());
    game.shoot(9, 8).unwrap();
    game.shoot(9, 9).unwrap();

    for col in 0..5 {
        assert!(!game.victory());
        assert_eq!(game.shoot(0, col).unwrap(), ShotResult::Hit);
    }
    assert!(game.victory());
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_double_shot_fails_loudly() {
    let mut game = Game::new(two_ship_board());
    game.shoot(5, 5).unwrap();
    assert_eq!(
        game.shoot(5, 5).unwrap_err(),
        BoardError::AlreadyShot { row: 5, col: 5 }
    );
    game.shoot(0, 0).unwrap();
    assert_eq!(
        game.shoot(0, 0).unwrap_err(),
        BoardError::AlreadyShot { row: 0, col: 0 }
    );
}

#[test]
fn test_reset_restores_unplayed_layout() {
    let mut game = Game::new(two_ship_board());
    let fresh = game.board().cell_codes();

    game.shoot(0, 0).unwrap();
    game.shoot(9, 8).unwrap();
    game.shoot(9, 9).unwrap();
    game.shoot(5, 5).unwrap();
    assert!(game.is_sunk(4).unwrap());

    game.reset();
    assert_eq!(game.board().cell_codes(), fresh);
    assert!(!game.is_sunk(4).unwrap());
    assert!(!game.victory());
}

#[test]
fn test_is_sunk_requires_a_placement() {
    let game = Game::new(Board::new(5));
    assert_eq!(game.is_sunk(0).unwrap_err(), BoardError::ShipNotPlaced);
}
