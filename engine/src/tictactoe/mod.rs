mod board;
mod bot_controller;
mod error;
mod rules;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{BotType, SearchReport, analyze, best_move, calculate_move, random_move, value};
pub use error::EngineError;
pub use rules::{apply_action, current_player, is_terminal, legal_actions, outcome, status, winner};
pub use types::{BOARD_SIZE, CELL_COUNT, GameStatus, Mark, Position};
pub use win_detector::{WinningLine, check_win, check_win_with_line};
