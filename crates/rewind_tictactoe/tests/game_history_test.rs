//! End-to-end tests for the game history through the public API.

use rewind_tictactoe::{
    DisplayOrder, GameHistory, GameStatus, HistoryError, MAX_SNAPSHOTS, MoveOutcome, Player,
    Position, evaluate, is_draw,
};

fn play(indices: &[usize]) -> GameHistory {
    let mut game = GameHistory::new();
    for &i in indices {
        assert!(game.apply_index(i).is_played(), "move {i} should be legal");
    }
    game
}

fn descriptions(game: &GameHistory) -> Vec<String> {
    game.moves().into_iter().map(|m| m.description).collect()
}

#[test]
fn test_top_row_win() {
    let game = play(&[0, 4, 1, 3, 2]);

    let eval = evaluate(game.current_board());
    assert_eq!(eval.winner, Some(Player::X));
    assert_eq!(
        eval.line,
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(game.status().to_string(), "Winner: X");
    assert!(game.is_over());
}

#[test]
fn test_full_board_draw() {
    // X: 0, 1, 5, 6, 8 / O: 2, 3, 4, 7
    let game = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(game.len(), MAX_SNAPSHOTS);
    assert_eq!(evaluate(game.current_board()).winner, None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "It's a draw");
    assert!(game.is_over());
    assert!(is_draw(game.current_board()));
}

#[test]
fn test_rewound_draw_still_reports_draw() {
    let mut game = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    game.jump_to(5).unwrap();

    assert_eq!(game.current(), 5);
    assert_eq!(game.len(), MAX_SNAPSHOTS);
    assert!(!is_draw(game.current_board()));
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "It's a draw");
    assert!(game.is_over());
}

#[test]
fn test_turns_alternate_with_position() {
    let mut game = GameHistory::new();
    for (p, cell) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        let expected = if p % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.next_player(), expected);
        match game.apply_index(cell) {
            MoveOutcome::Played { player, .. } => assert_eq!(player, expected),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}

#[test]
fn test_status_while_in_progress() {
    let game = play(&[4]);
    assert_eq!(game.status().to_string(), "Next player: O");
    assert!(!game.is_over());
}

#[test]
fn test_legal_move_grows_history_by_one() {
    let mut game = play(&[0, 4]);
    let len = game.len();
    assert!(game.apply_index(8).is_played());
    assert_eq!(game.len(), len + 1);
    assert_eq!(game.current(), game.len() - 1);
}

#[test]
fn test_illegal_moves_leave_history_alone() {
    let mut game = play(&[0, 4]);
    assert_eq!(game.apply_index(0), MoveOutcome::CellOccupied(Position::TopLeft));
    assert_eq!((game.len(), game.current()), (3, 2));

    let mut won = play(&[0, 4, 1, 3, 2]);
    assert_eq!(won.apply_index(8), MoveOutcome::GameOver);
    assert_eq!((won.len(), won.current()), (6, 5));
}

#[test]
fn test_rewind_then_move_discards_future() {
    let mut game = play(&[0, 4, 8, 2]);
    assert_eq!(game.len(), 5);

    game.jump_to(2).unwrap();
    assert_eq!(game.len(), 5, "jumping never truncates");
    assert_eq!(game.next_player(), Player::X);

    assert!(game.apply_index(6).is_played());
    assert_eq!(game.len(), 4);
    assert_eq!(game.current(), 3);
    assert!(game.current_board().is_empty(Position::BottomRight));
}

#[test]
fn test_rewinding_a_won_game_allows_new_moves() {
    let mut game = play(&[0, 4, 1, 3, 2]);
    game.jump_to(4).unwrap();

    assert_eq!(game.status().to_string(), "Next player: X");
    assert!(game.apply_index(8).is_played());
    assert_eq!(game.len(), 6);
    assert_eq!(evaluate(game.current_board()).winner, None);
}

#[test]
fn test_jump_out_of_range_rejected() {
    let mut game = play(&[0]);
    assert_eq!(
        game.jump_to(2),
        Err(HistoryError::PositionOutOfRange {
            requested: 2,
            len: 2
        })
    );
    assert_eq!(game.current(), 1);
}

#[test]
fn test_move_list_descriptions() {
    let mut game = GameHistory::new();
    assert_eq!(descriptions(&game), vec!["Starting the game"]);

    game.apply_move(Position::TopRight);
    game.apply_move(Position::Center);
    assert_eq!(
        descriptions(&game),
        vec![
            "Go to game start",
            "Go to move #1 > (1, 3)",
            "You are at move #2 > (2, 2)",
        ]
    );

    game.jump_to(0).unwrap();
    assert_eq!(
        descriptions(&game),
        vec![
            "You are at the start",
            "Go to move #1 > (1, 3)",
            "Go to move #2 > (2, 2)",
        ]
    );
}

#[test]
fn test_only_current_entry_is_marked() {
    let mut game = play(&[0, 4, 8]);
    game.jump_to(1).unwrap();

    let current: Vec<usize> = game
        .moves()
        .iter()
        .filter(|m| m.is_current)
        .map(|m| m.position)
        .collect();
    assert_eq!(current, vec![1]);
}

#[test]
fn test_toggle_order_reverses_list_only() {
    let mut game = play(&[0, 4, 8]);
    game.jump_to(1).unwrap();
    let ascending = game.moves();
    let board = game.current_board().clone();

    game.toggle_order();
    assert_eq!(game.order(), DisplayOrder::Descending);

    let mut descending = game.moves();
    descending.reverse();
    assert_eq!(descending, ascending);
    assert_eq!(game.current(), 1);
    assert_eq!(game.len(), 4);
    assert_eq!(game.current_board(), &board);
}

#[test]
fn test_order_toggle_disabled_on_fresh_game() {
    let mut game = GameHistory::new();
    assert!(!game.can_toggle_order());
    game.apply_index(4);
    assert!(game.can_toggle_order());
}

#[test]
fn test_move_entry_serializes_for_renderers() {
    let game = play(&[2]);
    let json = serde_json::to_value(game.moves()).unwrap();

    assert_eq!(json[1]["position"], 1);
    assert_eq!(json[1]["description"], "You are at move #1 > (1, 3)");
    assert_eq!(json[1]["is_current"], true);
}

#[test]
fn test_deserialize_round_trips_played_history() {
    let mut game = play(&[4, 0, 8]);
    game.toggle_order();
    game.jump_to(1).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let loaded: GameHistory = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded, game);
    assert_eq!(loaded.status().to_string(), "Next player: O");
}

#[test]
fn test_deserialize_rejects_empty_history() {
    let json = r#"{"snapshots":[],"current":3,"order":"Ascending"}"#;

    let err = serde_json::from_str::<GameHistory>(json).unwrap_err();

    assert!(err.to_string().contains("Invalid history"), "{err}");
}

#[test]
fn test_deserialize_rejects_dangling_current() {
    let mut json = serde_json::to_value(play(&[4])).unwrap();
    json["current"] = serde_json::json!(7);

    assert!(serde_json::from_value::<GameHistory>(json).is_err());
}

#[test]
fn test_deserialize_rejects_skipped_turn() {
    let game = play(&[4, 0]);
    let mut json = serde_json::to_value(&game).unwrap();
    // Drop the first move so O appears to have played first.
    json["snapshots"].as_array_mut().unwrap().remove(1);
    json["current"] = serde_json::json!(1);

    assert!(serde_json::from_value::<GameHistory>(json).is_err());
}
