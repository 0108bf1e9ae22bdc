use battleship::{
    generate, Board, BoardPreset, Coordinate, GameConfig, GameStatus, GuessEngine, GuessResult,
    Orientation, Placement, ShipKind,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// 4x4 board with one small ship at A1-A2.
fn single_small_ship() -> GuessEngine {
    let mut board = Board::empty(4, 4).unwrap();
    board
        .place(Placement::new(ShipKind::Small, 2, 0, 0, Orientation::Horizontal))
        .unwrap();
    GuessEngine::new(board)
}

#[test]
fn test_win_after_last_ship_cell() {
    let mut engine = single_small_ship();
    assert_eq!(engine.status(), GameStatus::InProgress);

    assert_eq!(engine.resolve_guess(Coordinate::new(0, 0)), GuessResult::Hit);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.remaining_ship_cells(), 1);

    assert_eq!(engine.resolve_guess(Coordinate::new(0, 1)), GuessResult::Hit);
    assert_eq!(engine.status(), GameStatus::Won);
    assert!(engine.is_over());
    assert_eq!(engine.shots(), 2);
    assert_eq!(engine.hits(), 2);
    assert_eq!(engine.misses(), 0);
}

#[test]
fn test_no_guesses_after_win() {
    let mut engine = single_small_ship();
    engine.resolve_guess(Coordinate::new(0, 0));
    engine.resolve_guess(Coordinate::new(0, 1));
    let before = engine.board().clone();

    assert_eq!(engine.resolve_guess(Coordinate::new(3, 3)), GuessResult::GameOver);
    assert_eq!(engine.resolve_text("d4"), GuessResult::GameOver);
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.shots(), 2);

    // exiting a won game keeps the win
    engine.exit();
    assert_eq!(engine.status(), GameStatus::Won);
}

#[test]
fn test_repeat_guess_is_idempotent() {
    let mut engine = single_small_ship();
    assert_eq!(engine.resolve_guess(Coordinate::new(0, 0)), GuessResult::Hit);
    let after_first = engine.board().clone();
    assert_eq!(
        engine.resolve_guess(Coordinate::new(0, 0)),
        GuessResult::AlreadyGuessed
    );
    assert_eq!(engine.board(), &after_first);

    assert_eq!(engine.resolve_guess(Coordinate::new(2, 2)), GuessResult::Miss);
    assert_eq!(
        engine.resolve_guess(Coordinate::new(2, 2)),
        GuessResult::AlreadyGuessed
    );
    assert_eq!(engine.shots(), 2);
}

#[test]
fn test_out_of_bounds_is_invalid() {
    let mut board = Board::empty(5, 5).unwrap();
    board
        .place(Placement::new(ShipKind::Large, 1, 4, 2, Orientation::Horizontal))
        .unwrap();
    let before = board.clone();
    let mut engine = GuessEngine::new(board);

    assert_eq!(engine.resolve_guess(Coordinate::new(5, 0)), GuessResult::Invalid);
    assert_eq!(engine.resolve_guess(Coordinate::new(0, 5)), GuessResult::Invalid);
    assert_eq!(engine.resolve_guess(Coordinate::new(5, 5)), GuessResult::Invalid);
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.shots(), 0);
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_miss_marks_cell_without_winning() {
    let mut engine = single_small_ship();
    let water = Coordinate::new(3, 3);
    assert_eq!(engine.resolve_guess(water), GuessResult::Miss);
    assert!(engine.board().get(water).unwrap().hit());
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.misses(), 1);
    assert_eq!(engine.remaining_ship_cells(), 2);
}

#[test]
fn test_shipless_board_starts_won() {
    let mut rng = SmallRng::seed_from_u64(4);
    let board = generate(&mut rng, 4, 4, &[]).unwrap();
    let mut engine = GuessEngine::new(board);
    assert_eq!(engine.status(), GameStatus::Won);
    // no miss can be the guess that wins
    assert_eq!(engine.resolve_guess(Coordinate::new(0, 0)), GuessResult::GameOver);
    assert!(!engine.board().get(Coordinate::new(0, 0)).unwrap().hit());
    assert_eq!(engine.shots(), 0);
}

#[test]
fn test_resolve_text() {
    let mut engine = single_small_ship();
    assert_eq!(engine.resolve_text(" a1 "), GuessResult::Hit);
    assert_eq!(engine.resolve_text("A1"), GuessResult::AlreadyGuessed);
    assert_eq!(engine.resolve_text("C3"), GuessResult::Miss);
    // row letter beyond the board, unreadable column, column past the edge
    assert_eq!(engine.resolve_text("E1"), GuessResult::Invalid);
    assert_eq!(engine.resolve_text("Bx"), GuessResult::Invalid);
    assert_eq!(engine.resolve_text("B0"), GuessResult::Invalid);
    assert_eq!(engine.resolve_text("B5"), GuessResult::Invalid);
    assert_eq!(engine.resolve_text(""), GuessResult::Invalid);
    assert_eq!(engine.shots(), 2);
    assert_eq!(engine.resolve_text("a2"), GuessResult::Hit);
    assert_eq!(engine.status(), GameStatus::Won);
}

#[test]
fn test_exit_is_terminal() {
    let mut engine = single_small_ship();
    engine.resolve_guess(Coordinate::new(0, 0));
    engine.exit();
    assert_eq!(engine.status(), GameStatus::Exited);
    assert_eq!(engine.resolve_guess(Coordinate::new(0, 1)), GuessResult::GameOver);
    assert_eq!(engine.status(), GameStatus::Exited);
    assert_eq!(engine.remaining_ship_cells(), 1);
}

#[test]
fn test_into_board_keeps_hits() {
    let mut engine = single_small_ship();
    engine.resolve_guess(Coordinate::new(1, 1));
    let board = engine.into_board();
    assert!(board.get(Coordinate::new(1, 1)).unwrap().hit());
    assert!(!board.get(Coordinate::new(0, 0)).unwrap().hit());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn won_exactly_when_last_ship_cell_hit(seed in any::<u64>(), size in 4usize..=6) {
        let preset = BoardPreset::from_size(size).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = GameConfig::from_preset(preset, false).generate(&mut rng).unwrap();
        let total = board.ship_cell_count();
        let mut engine = GuessEngine::new(board);

        let mut hits = 0;
        while !engine.is_over() {
            let c = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
            match engine.resolve_guess(c) {
                GuessResult::Hit => hits += 1,
                GuessResult::Miss | GuessResult::AlreadyGuessed => {}
                other => prop_assert!(false, "unexpected {:?}", other),
            }
            prop_assert_eq!(engine.status() == GameStatus::Won, hits == total);
        }
        prop_assert_eq!(engine.hits(), total);
        prop_assert!(engine.board().all_ships_sunk());
    }
}
