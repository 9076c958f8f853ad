use serde::{Deserialize, Serialize};

use crate::session_rng::SessionRng;
use super::board::Board;
use super::rules::{apply_action, current_player, is_terminal, legal_actions, outcome};
use super::types::{Mark, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Minimax,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Position,
    /// Backed-up value of `best_move`: +1 X wins, -1 O wins, 0 draw.
    pub value: i32,
    pub nodes_visited: u64,
}

pub fn calculate_move(bot_type: BotType, board: &Board, rng: &mut SessionRng) -> Option<Position> {
    match bot_type {
        BotType::Minimax => best_move(board),
        BotType::Random => random_move(board, rng),
    }
}

pub fn random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    if is_terminal(board) {
        return None;
    }
    let available_moves = legal_actions(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn best_move(board: &Board) -> Option<Position> {
    analyze(board).map(|report| report.best_move)
}

/// Exhaustive minimax from `board`. Actions are tried in row-major order and
/// only a strict improvement replaces the current best, so the earliest
/// optimal action wins ties.
pub fn analyze(board: &Board) -> Option<SearchReport> {
    if is_terminal(board) {
        return None;
    }

    let maximizing = current_player(board) == Mark::X;
    let mut nodes_visited = 1;
    let mut best: Option<(Position, i32)> = None;

    for action in legal_actions(board) {
        let Ok(next) = apply_action(board, action) else {
            continue;
        };
        let score = minimax(&next, !maximizing, &mut nodes_visited);

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((action, score));
        }
    }

    best.map(|(best_move, value)| SearchReport {
        best_move,
        value,
        nodes_visited,
    })
}

pub fn value(board: &Board, maximizing: bool) -> i32 {
    let mut nodes_visited = 0;
    minimax(board, maximizing, &mut nodes_visited)
}

fn minimax(board: &Board, is_maximizing: bool, nodes_visited: &mut u64) -> i32 {
    *nodes_visited += 1;

    if is_terminal(board) {
        return outcome(board);
    }

    let successors = legal_actions(board)
        .into_iter()
        .filter_map(|action| apply_action(board, action).ok());

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for next in successors {
            max_eval = max_eval.max(minimax(&next, false, nodes_visited));
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for next in successors {
            min_eval = min_eval.min(minimax(&next, true, nodes_visited));
        }
        min_eval
    }
}
