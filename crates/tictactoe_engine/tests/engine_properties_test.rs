//! Behavioral properties of the tic-tac-toe engine.

use tictactoe_engine::rules::{self, Verdict};
use tictactoe_engine::{
    Board, Coordinate, GameEngine, GameOutcome, Marker, MoveError, MoveOutcome, Player, PlayerId,
    PlayerRegistry,
};

/// Small deterministic generator so sampled games are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

/// Plays random legal moves until the game ends, checking each step with `check`.
fn play_random_game(seed: u64, mut check: impl FnMut(&GameEngine, Coordinate)) -> GameEngine {
    let mut rng = Lcg(seed);
    let mut engine = GameEngine::default();
    loop {
        let empty: Vec<_> = engine.board_snapshot().empty_cells().collect();
        let at = empty[rng.next(empty.len())];
        let result = engine.attempt_move(at.row as i32, at.column as i32);
        check(&engine, at);
        match result.expect("empty cell is always playable") {
            MoveOutcome::Continued(_) => {}
            MoveOutcome::Finished(_) => return engine,
        }
    }
}

#[test]
fn test_out_of_range_coordinates_illegal_for_all_sizes() {
    for size in 1..=5usize {
        let board = Board::with_size(size, size).unwrap();
        let n = size as i32;
        for k in -2..n + 2 {
            let in_range = (0..n).contains(&k);
            assert_eq!(board.is_move_legal(k, 0), in_range, "row {k} size {size}");
            assert_eq!(board.is_move_legal(0, k), in_range, "column {k} size {size}");
        }
    }
}

#[test]
fn test_turn_alternates_only_on_applied_moves() {
    for seed in 0..50 {
        let mut rng = Lcg(seed);
        let mut engine = GameEngine::default();
        for _ in 0..30 {
            let before = engine.active_player().clone();
            let row = rng.next(5) as i32 - 1;
            let column = rng.next(5) as i32 - 1;
            match engine.attempt_move(row, column) {
                Ok(MoveOutcome::Continued(next)) => {
                    assert_ne!(next, before);
                    assert_eq!(engine.active_player(), &next);
                }
                Ok(MoveOutcome::Finished(_)) => break,
                Err(e) => {
                    assert!(e.is_invalid_move());
                    assert_eq!(engine.active_player(), &before);
                }
            }
        }
    }
}

#[test]
fn test_occupied_cells_never_overwritten() {
    for seed in 0..100 {
        let mut seen: Vec<(Coordinate, PlayerId)> = Vec::new();
        play_random_game(seed, |engine, at| {
            let snapshot = engine.board_snapshot();
            let owner = snapshot.cell(at).and_then(|c| c.owner()).expect("just played");
            seen.push((at, owner));
            for (earlier, who) in &seen {
                assert_eq!(snapshot.cell(*earlier).and_then(|c| c.owner()), Some(*who));
            }
        });
    }
}

#[test]
fn test_restricted_evaluation_matches_full_scan() {
    for seed in 0..500 {
        play_random_game(seed, |engine, at| {
            let snapshot = engine.board_snapshot();
            assert_eq!(
                rules::evaluate_through(&snapshot, at),
                rules::evaluate(&snapshot),
                "seed {seed} at {at}"
            );
        });
    }
}

#[test]
fn test_new_game_round_trip() {
    let fresh = GameEngine::default();
    for seed in 0..20 {
        let mut engine = play_random_game(seed, |_, _| {});
        engine.start_new_game();
        assert_eq!(engine.board_snapshot(), fresh.board_snapshot());
        assert_eq!(engine.active_player(), fresh.active_player());
        assert_eq!(engine.current_outcome(), GameOutcome::InProgress);
    }
}

#[test]
fn test_scenario_empty_board_in_progress() {
    let engine = GameEngine::default();
    assert_eq!(rules::evaluate(&engine.board_snapshot()), Verdict::InProgress);
    assert_eq!(engine.current_outcome(), GameOutcome::InProgress);
}

#[test]
fn test_scenario_top_row_win() {
    let mut engine = GameEngine::default();
    for (row, column) in [(0, 0), (2, 0), (0, 1), (2, 2)] {
        assert!(matches!(
            engine.attempt_move(row, column),
            Ok(MoveOutcome::Continued(_))
        ));
    }
    let result = engine.attempt_move(0, 2).unwrap();

    let MoveOutcome::Finished(GameOutcome::Won { player, line }) = result else {
        panic!("expected a win, got {result:?}");
    };
    assert_eq!(*player.id(), PlayerId::First);
    assert_eq!(
        line.cells(),
        &[Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)]
    );
}

#[test]
fn test_scenario_full_board_draw() {
    // X O X / X O O / O X X with the first player on X.
    let registry = PlayerRegistry::new("A", Marker::X, "B", Marker::O).unwrap();
    let mut engine = GameEngine::new(registry);
    let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
    let mut last = None;
    for (row, column) in moves {
        last = Some(engine.attempt_move(row, column).unwrap());
    }

    assert_eq!(last, Some(MoveOutcome::Finished(GameOutcome::Draw)));
    assert_eq!(rules::evaluate(&engine.board_snapshot()), Verdict::Draw);
}

#[test]
fn test_scenario_repeat_center_rejected() {
    let mut engine = GameEngine::default();
    engine.attempt_move(1, 1).unwrap();
    let after_first = engine.board_snapshot();

    assert_eq!(
        engine.attempt_move(1, 1),
        Err(MoveError::CellOccupied(Coordinate::new(1, 1)))
    );
    assert_eq!(engine.board_snapshot(), after_first);

    engine.attempt_move(0, 0).unwrap();
    let after_second = engine.board_snapshot();
    assert_eq!(
        engine.attempt_move(1, 1),
        Err(MoveError::CellOccupied(Coordinate::new(1, 1)))
    );
    assert_eq!(engine.board_snapshot(), after_second);
}

#[test]
fn test_custom_players_and_board() {
    let registry = PlayerRegistry::new("Ada", Marker::new('#').unwrap(), "Grace", Marker::X).unwrap();
    let mut engine = GameEngine::with_board_size(registry, 4, 4).unwrap();

    for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)] {
        assert!(matches!(
            engine.attempt_move(row, column),
            Ok(MoveOutcome::Continued(_))
        ));
    }
    let result = engine.attempt_move(0, 3).unwrap();
    let winner = result_winner(&result).expect("four in a row");
    assert_eq!(winner.name(), "Ada");
    assert_eq!(winner.marker().symbol(), '#');
}

fn result_winner(result: &MoveOutcome) -> Option<&Player> {
    match result {
        MoveOutcome::Finished(outcome) => outcome.winner(),
        MoveOutcome::Continued(_) => None,
    }
}

#[test]
fn test_view_serializes_for_renderers() {
    let mut engine = GameEngine::default();
    engine.attempt_move(0, 0).unwrap();
    let json = serde_json::to_value(engine.view()).unwrap();

    assert_eq!(json["active_player"]["name"], "Player 2");
    assert_eq!(json["active_player"]["marker"], "X");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["cells"][0]["marker"]["Placed"], "O");
    assert_eq!(json["board"]["cells"][0]["owner"], "First");
}
