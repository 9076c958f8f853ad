use super::board::Board;
use super::types::{Mark, Position};

const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

/// X is checked before O, so a board where both own a line reports X.
pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for mark in [Mark::X, Mark::O] {
        for line in &WINNING_LINES {
            if is_line_owned(board, line, mark) {
                let (start_row, start_col) = line[0];
                let (end_row, end_col) = line[2];
                return Some(WinningLine::new(
                    mark,
                    Position::new(start_row, start_col),
                    Position::new(end_row, end_col),
                ));
            }
        }
    }
    None
}

fn is_line_owned(board: &Board, line: &[(usize, usize); 3], mark: Mark) -> bool {
    let cells = board.cells();
    line.iter().all(|&(row, col)| cells[row][col] == mark)
}
