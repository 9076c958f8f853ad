use std::fmt;
use std::str::FromStr;

use super::error::EngineError;
use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Position};

/// Immutable 3x3 grid. Transitions go through the rules module and always
/// produce a fresh copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn initial() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// No turn-count validation is performed.
    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Mark, EngineError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(EngineError::OutOfRange { row, col })
    }

    pub fn cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == mark).count())
            .sum()
    }

    pub fn empty_count(&self) -> usize {
        self.count(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub(crate) fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[pos.row][pos.col] = mark;
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// Empty cells in row-major order. Search tie-breaking depends on this order.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::with_capacity(CELL_COUNT);
    for (row, cells) in board.cells.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn is_valid_move(board: &Board, pos: Position) -> bool {
    matches!(board.cell(pos.row, pos.col), Ok(Mark::Empty))
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| EngineError::InvalidBoard {
            text: text.to_string(),
            reason,
        };

        let mut marks = Vec::with_capacity(CELL_COUNT);
        for c in text.chars().filter(|c| !matches!(c, '/' | '\n' | '\r')) {
            let mark = Mark::from_char(c)
                .ok_or_else(|| invalid(format!("unexpected character '{}'", c)))?;
            marks.push(mark);
        }

        if marks.len() != CELL_COUNT {
            return Err(invalid(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                marks.len()
            )));
        }

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, mark) in marks.into_iter().enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE] = mark;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::initial();
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.count(Mark::X), 0);
        assert_eq!(board.count(Mark::O), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::initial();
        assert_eq!(
            board.cell(3, 0),
            Err(EngineError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.cell(0, 7),
            Err(EngineError::OutOfRange { row: 0, col: 7 })
        );
        assert_eq!(board.cell(2, 2), Ok(Mark::Empty));
    }

    #[test]
    fn test_available_moves_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let moves = get_available_moves(&board);
        assert_eq!(
            moves,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_is_valid_move() {
        let board: Board = "X........".parse().unwrap();
        assert!(!is_valid_move(&board, Position::new(0, 0)));
        assert!(is_valid_move(&board, Position::new(0, 1)));
        assert!(!is_valid_move(&board, Position::new(3, 1)));
    }

    #[test]
    fn test_parse_accepts_separators_and_aliases() {
        let board: Board = "x_0\n...\nXO.".parse().unwrap();
        assert_eq!(board.cell(0, 0), Ok(Mark::X));
        assert_eq!(board.cell(0, 1), Ok(Mark::Empty));
        assert_eq!(board.cell(0, 2), Ok(Mark::O));
        assert_eq!(board.cell(2, 1), Ok(Mark::O));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let result = "XO".parse::<Board>();
        assert!(matches!(result, Err(EngineError::InvalidBoard { .. })));
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let result = "XOZ......".parse::<Board>();
        assert!(matches!(result, Err(EngineError::InvalidBoard { .. })));
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let text = board.to_string();
        assert_eq!(text, "XO.\n.X.\n..O");
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_from_cells_matches_parsed() {
        let board = Board::from_cells([
            [Mark::X, Mark::Empty, Mark::O],
            [Mark::Empty, Mark::X, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::Empty],
        ]);
        assert_eq!(board, "X.O/.X./...".parse::<Board>().unwrap());
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.empty_count(), 6);
    }

    #[test]
    fn test_with_mark_copies() {
        let board = Board::initial();
        let next = board.with_mark(Position::new(1, 1), Mark::X);
        assert_eq!(board.cell(1, 1), Ok(Mark::Empty));
        assert_eq!(next.cell(1, 1), Ok(Mark::X));
    }
}
