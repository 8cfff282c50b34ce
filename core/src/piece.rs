//! Piece vocabulary
//!
//! The closed set of values a board cell can hold, plus the fixed
//! bidirectional mapping to the case-sensitive notation letters
//! (`PNBRQK` for white, `pnbrqk` for black). Both directions are
//! exhaustive matches, so adding a variant without extending the
//! vocabulary fails to compile.

use std::fmt;

/// What occupies a single board cell.
///
/// Value type with no identity: `Empty`, or one (color, piece-type) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Nothing on the cell.
    Empty,
    /// White pawn (`P`).
    WhitePawn,
    /// White knight (`N`).
    WhiteKnight,
    /// White bishop (`B`).
    WhiteBishop,
    /// White rook (`R`).
    WhiteRook,
    /// White queen (`Q`).
    WhiteQueen,
    /// White king (`K`).
    WhiteKing,
    /// Black pawn (`p`).
    BlackPawn,
    /// Black knight (`n`).
    BlackKnight,
    /// Black bishop (`b`).
    BlackBishop,
    /// Black rook (`r`).
    BlackRook,
    /// Black queen (`q`).
    BlackQueen,
    /// Black king (`k`).
    BlackKing,
}

impl PieceKind {
    /// The twelve non-empty kinds, in a fixed order.
    ///
    /// The order is the sprite-slot order used by
    /// [`PieceSet`](crate::assets::PieceSet).
    pub const PIECES: [PieceKind; 12] = [
        PieceKind::WhitePawn,
        PieceKind::WhiteKnight,
        PieceKind::WhiteBishop,
        PieceKind::WhiteRook,
        PieceKind::WhiteQueen,
        PieceKind::WhiteKing,
        PieceKind::BlackPawn,
        PieceKind::BlackKnight,
        PieceKind::BlackBishop,
        PieceKind::BlackRook,
        PieceKind::BlackQueen,
        PieceKind::BlackKing,
    ];

    /// Look up the piece for a notation letter.
    ///
    /// Returns `None` for anything outside the twelve-letter vocabulary,
    /// including digits.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'P' => Some(PieceKind::WhitePawn),
            'N' => Some(PieceKind::WhiteKnight),
            'B' => Some(PieceKind::WhiteBishop),
            'R' => Some(PieceKind::WhiteRook),
            'Q' => Some(PieceKind::WhiteQueen),
            'K' => Some(PieceKind::WhiteKing),
            'p' => Some(PieceKind::BlackPawn),
            'n' => Some(PieceKind::BlackKnight),
            'b' => Some(PieceKind::BlackBishop),
            'r' => Some(PieceKind::BlackRook),
            'q' => Some(PieceKind::BlackQueen),
            'k' => Some(PieceKind::BlackKing),
            _ => None,
        }
    }

    /// The notation letter for this piece, or `None` for `Empty`.
    #[must_use]
    pub fn symbol(self) -> Option<char> {
        match self {
            PieceKind::Empty => None,
            PieceKind::WhitePawn => Some('P'),
            PieceKind::WhiteKnight => Some('N'),
            PieceKind::WhiteBishop => Some('B'),
            PieceKind::WhiteRook => Some('R'),
            PieceKind::WhiteQueen => Some('Q'),
            PieceKind::WhiteKing => Some('K'),
            PieceKind::BlackPawn => Some('p'),
            PieceKind::BlackKnight => Some('n'),
            PieceKind::BlackBishop => Some('b'),
            PieceKind::BlackRook => Some('r'),
            PieceKind::BlackQueen => Some('q'),
            PieceKind::BlackKing => Some('k'),
        }
    }

    /// Whether this is the `Empty` cell value.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, PieceKind::Empty)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Empty => "empty",
            PieceKind::WhitePawn => "white pawn",
            PieceKind::WhiteKnight => "white knight",
            PieceKind::WhiteBishop => "white bishop",
            PieceKind::WhiteRook => "white rook",
            PieceKind::WhiteQueen => "white queen",
            PieceKind::WhiteKing => "white king",
            PieceKind::BlackPawn => "black pawn",
            PieceKind::BlackKnight => "black knight",
            PieceKind::BlackBishop => "black bishop",
            PieceKind::BlackRook => "black rook",
            PieceKind::BlackQueen => "black queen",
            PieceKind::BlackKing => "black king",
        };
        f.write_str(name)
    }
}
