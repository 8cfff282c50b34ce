//! Notation parsing and validation
//!
//! Turns a raw piece-placement string (`"rnbqkbnr/pppppppp/8/..."`) into a
//! [`Board`], or rejects it with the single failure kind
//! [`NotationError::InvalidNotation`].
//!
//! # Two-pass validation
//!
//! Validation runs in two distinct passes:
//!
//! 1. **Structural**: exactly 8 `/`-separated segments, each 1-8 characters,
//!    each character a piece letter or a digit `1`-`8`.
//! 2. **Expansion**: each segment is expanded left to right (a letter is one
//!    cell, a digit `d` is `d` empty cells) and must come out to exactly
//!    8 cells.
//!
//! The structural pass alone is not sufficient: `"88/8/8/8/8/8/8/8"` passes
//! it (first segment is 2 valid characters) but expands to 16 cells and is
//! only rejected by the second pass. Both passes report the same uniform
//! failure; callers only learn that the input was rejected.

use thiserror::Error;

use crate::board::{Board, BOARD_SIZE};
use crate::piece::PieceKind;

/// Validation failure for a piece-placement string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The input failed structural or row-expansion validation.
    ///
    /// Deliberately carries no sub-reason; the message is the stable,
    /// user-visible rejection text.
    #[error("Invalid FEN")]
    InvalidNotation,
}

/// Parse and validate a piece-placement string into a [`Board`].
///
/// # Errors
///
/// Returns [`NotationError::InvalidNotation`] for any input that is not
/// exactly 8 rows of exactly 8 expanded cells. No partial board is ever
/// returned.
pub fn parse(input: &str) -> Result<Board, NotationError> {
    let segments: Vec<&str> = input.split('/').collect();

    // Pass 1: structural shape. Cheap rejection of malformed separators,
    // out-of-range digits, and characters outside the vocabulary.
    if segments.len() != BOARD_SIZE {
        return Err(NotationError::InvalidNotation);
    }
    for segment in &segments {
        let length = segment.chars().count();
        if length == 0 || length > BOARD_SIZE {
            return Err(NotationError::InvalidNotation);
        }
        if !segment.chars().all(is_notation_char) {
            return Err(NotationError::InvalidNotation);
        }
    }

    // Pass 2: expand each row and require exactly 8 cells. Digits that
    // survive pass 1 can still overflow the row (e.g. "88").
    let mut squares = [[PieceKind::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, segment) in segments.iter().enumerate() {
        let mut col = 0usize;
        for ch in segment.chars() {
            match PieceKind::from_symbol(ch) {
                Some(piece) => {
                    if col >= BOARD_SIZE {
                        return Err(NotationError::InvalidNotation);
                    }
                    squares[row][col] = piece;
                    col += 1;
                }
                None => {
                    // Pass 1 guarantees a digit 1-8 here; each digit is its
                    // own run of blanks, and blanks need no writes.
                    let run = ch.to_digit(10).ok_or(NotationError::InvalidNotation)?;
                    col += run as usize;
                }
            }
        }
        if col != BOARD_SIZE {
            return Err(NotationError::InvalidNotation);
        }
    }

    Ok(Board::from_squares(squares))
}

/// Whether a character may appear in a segment: piece letter or digit 1-8.
fn is_notation_char(ch: char) -> bool {
    PieceKind::from_symbol(ch).is_some() || matches!(ch, '1'..='8')
}
