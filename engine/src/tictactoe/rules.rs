use super::board::{Board, get_available_moves, is_valid_move};
use super::error::EngineError;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::check_win;

/// X moves first and turns alternate, so the side with fewer marks is to move.
pub fn current_player(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

pub fn legal_actions(board: &Board) -> Vec<Position> {
    get_available_moves(board)
}

pub fn apply_action(board: &Board, action: Position) -> Result<Board, EngineError> {
    if !is_valid_move(board, action) {
        return Err(EngineError::InvalidMove {
            row: action.row,
            col: action.col,
        });
    }
    Ok(board.with_mark(action, current_player(board)))
}

pub fn winner(board: &Board) -> Option<Mark> {
    check_win(board)
}

pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Meaningful only for terminal boards; anything without a winner scores 0.
pub fn outcome(board: &Board) -> i32 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        _ => 0,
    }
}

pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        _ if board.is_full() => GameStatus::Draw,
        _ => GameStatus::InProgress,
    }
}
