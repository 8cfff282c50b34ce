//! Board model
//!
//! A validated 8×8 grid of [`PieceKind`]. Row 0 is the top of the rendered
//! image (the notation's first segment, rank 8), column 0 is the left edge.
//! The only way to obtain a `Board` is through [`notation::parse`]
//! (directly or via `str::parse`), so no partial or malformed grid is
//! representable.
//!
//! [`notation::parse`]: crate::notation::parse

use std::fmt;
use std::str::FromStr;

use crate::notation::{self, NotationError};
use crate::piece::PieceKind;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A fixed 8×8 grid of pieces, indexed by `(row, column)`.
///
/// Created fresh per request by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[PieceKind; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Assemble a board from already-validated rows. Parser-only.
    pub(crate) fn from_squares(squares: [[PieceKind; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// The piece on the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[must_use]
    pub fn piece_at(&self, row: usize, col: usize) -> PieceKind {
        self.squares[row][col]
    }

    /// Re-serialize the grid to canonical notation.
    ///
    /// Row-major, consecutive `Empty` cells collapsed into a single maximal
    /// digit run, so an all-empty row is always `"8"` (never `"44"`).
    /// Parsing the result reproduces an identical board.
    #[must_use]
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for (row, squares) in self.squares.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut blanks = 0u8;
            for piece in squares {
                match piece.symbol() {
                    Some(symbol) => {
                        if blanks > 0 {
                            out.push(char::from(b'0' + blanks));
                            blanks = 0;
                        }
                        out.push(symbol);
                    }
                    None => blanks += 1,
                }
            }
            if blanks > 0 {
                out.push(char::from(b'0' + blanks));
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}
