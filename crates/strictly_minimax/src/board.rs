//! 3x3 grid storage and mark placement.

use crate::error::BoardError;
use crate::position::{CELLS, Position, SIDE};
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order. The grid never changes size; a new
/// game gets a fresh board rather than clearing this one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, rejecting indices outside 0-8.
    pub fn get(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidIndex(index))
    }

    /// True iff `index` is on the board and nobody has played there.
    pub fn is_empty_cell(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// True iff no mark has been placed yet.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Empty positions in increasing index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|pos| self.cell(*pos).is_empty())
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Places `mark` at `index`.
    ///
    /// Fails without touching the board if the index is out of range or the
    /// cell is already occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<Position, BoardError> {
        let pos = Position::try_from(index)?;
        if !self.cell(pos).is_empty() {
            debug!(%pos, "Rejected placement on occupied square");
            return Err(BoardError::OccupiedCell(pos));
        }
        self.set(pos, Cell::Occupied(mark));
        Ok(pos)
    }

    /// Overwrites a cell unconditionally. Search uses this to play and undo.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their index so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..SIDE {
            for col in 0..SIDE {
                let index = row * SIDE + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => char::from_digit(index as u32, 10).unwrap_or('?'),
                    Cell::Occupied(mark) => mark.symbol(),
                };
                result.push(symbol);
                if col < SIDE - 1 {
                    result.push('|');
                }
            }
            if row < SIDE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Compact nine-character form, `.` for empty cells.
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.mark().map_or('.', Mark::symbol))
            .collect()
    }
}

/// Parses the compact form.
///
/// `X`/`O` (any case) are marks; `.`, `_`, `-` and digits are empty cells.
/// Whitespace, `|` and `/` are ignored so `"XX.|OO.|..."` also parses.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;
        for ch in s.chars() {
            let cell = match ch {
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                'x' | 'X' => Cell::Occupied(Mark::X),
                'o' | 'O' => Cell::Occupied(Mark::O),
                '.' | '_' | '-' => Cell::Empty,
                c if c.is_ascii_digit() => Cell::Empty,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            let pos = Position::from_index(index).ok_or(ParseBoardError::WrongLength(index + 1))?;
            board.set(pos, cell);
            index += 1;
        }
        if index != CELLS {
            return Err(ParseBoardError::WrongLength(index));
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is neither a mark nor an empty-cell marker.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// The text did not describe exactly nine cells.
    #[display("Board must have exactly 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}
