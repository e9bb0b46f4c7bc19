//! Tests for the minimax search engine.

use strictly_minimax::{Board, Mark, Outcome, Position, best_move, minimax, rules::evaluate};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn test_immediate_win_beats_blocking() {
    // X X _ / O O _ / _ _ _ with X to move.
    let result = minimax(&board("XX. OO. ..."), Mark::X);
    assert_eq!(result.best, Some(Position::TopRight));
    assert_eq!(result.score, 5);
}

#[test]
fn test_forced_win_detected() {
    // X owns two of the top row; O's marks share no line.
    let result = minimax(&board("XX. O.. ..O"), Mark::X);
    assert_eq!(result.index(), Some(2));
    assert!(result.score > 0);
}

#[test]
fn test_blocks_opponent_threat() {
    // O threatens the middle row; X has no line of its own to finish.
    let result = minimax(&board("X.. OO. ..X"), Mark::X);
    assert_eq!(result.best, Some(Position::MiddleRight));
}

#[test]
fn test_search_for_o_is_symmetric() {
    let result = minimax(&board("OO. XX. ..."), Mark::O);
    assert_eq!(result.index(), Some(2));
    assert_eq!(result.score, 5);
}

#[test]
fn test_lost_position_scores_negative() {
    // X has a fork on 3 and 7; whatever O does, X wins on the next move.
    let result = minimax(&board("X.O .O. X.X"), Mark::O);
    assert!(result.score < 0);
    assert_eq!(result.score, -(10 - 7));
}

#[test]
fn test_deterministic() {
    let b = board("X.. .O. ...");
    let first = minimax(&b, Mark::X);
    for _ in 0..3 {
        assert_eq!(minimax(&b, Mark::X), first);
    }
}

#[test]
fn test_input_board_unchanged() {
    for s in ["XX. OO. ...", "X.. .O. ...", "...  ... ..."] {
        let b = board(s);
        let before = b.clone();
        minimax(&b, Mark::O);
        minimax(&b, Mark::X);
        assert_eq!(b, before);
    }
}

#[test]
fn test_empty_board_is_a_draw_with_perfect_play() {
    let result = minimax(&Board::new(), Mark::X);
    assert_eq!(result.score, 0);
    // Every opening is a draw, so the tie-break picks the lowest index.
    assert_eq!(result.best, Some(Position::TopLeft));
    assert_eq!(result.nodes, 549_946);
}

#[test]
fn test_optimal_self_play_draws() {
    let mut b = Board::new();
    let mut to_move = Mark::X;
    while !evaluate(&b).is_terminal() {
        let pos = best_move(&b, to_move).unwrap();
        b.place(pos.to_index(), to_move).unwrap();
        to_move = to_move.opponent();
    }
    assert_eq!(evaluate(&b), Outcome::Draw);
    assert!(b.is_full());
}

#[test]
fn test_optimal_self_play_draws_from_every_opening() {
    for opening in Position::ALL {
        let mut b = Board::new();
        b.place(opening.to_index(), Mark::X).unwrap();
        let mut to_move = Mark::O;
        while !evaluate(&b).is_terminal() {
            let pos = best_move(&b, to_move).unwrap();
            b.place(pos.to_index(), to_move).unwrap();
            to_move = to_move.opponent();
        }
        assert_eq!(evaluate(&b), Outcome::Draw, "opening at {}", opening);
    }
}
