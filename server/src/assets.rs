//! Embedded piece sprites
//!
//! The twelve piece images ship inside the binary (`include_bytes!` on the
//! files under `static/`) and are decoded into a validated
//! [`PieceSet`] once, before the listener binds. Any failure here aborts
//! startup: the server never serves requests without its full piece set.

use fenboard_core::{AssetError, PieceKind, PieceSet};

/// Decode the bundled sprites into a complete [`PieceSet`].
pub fn load() -> Result<PieceSet, AssetError> {
    PieceSet::from_png_bytes(&[
        (
            PieceKind::WhitePawn,
            include_bytes!("../static/pawn_white.png").as_slice(),
        ),
        (
            PieceKind::WhiteKnight,
            include_bytes!("../static/knight_white.png").as_slice(),
        ),
        (
            PieceKind::WhiteBishop,
            include_bytes!("../static/bishop_white.png").as_slice(),
        ),
        (
            PieceKind::WhiteRook,
            include_bytes!("../static/rook_white.png").as_slice(),
        ),
        (
            PieceKind::WhiteQueen,
            include_bytes!("../static/queen_white.png").as_slice(),
        ),
        (
            PieceKind::WhiteKing,
            include_bytes!("../static/king_white.png").as_slice(),
        ),
        (
            PieceKind::BlackPawn,
            include_bytes!("../static/pawn_black.png").as_slice(),
        ),
        (
            PieceKind::BlackKnight,
            include_bytes!("../static/knight_black.png").as_slice(),
        ),
        (
            PieceKind::BlackBishop,
            include_bytes!("../static/bishop_black.png").as_slice(),
        ),
        (
            PieceKind::BlackRook,
            include_bytes!("../static/rook_black.png").as_slice(),
        ),
        (
            PieceKind::BlackQueen,
            include_bytes!("../static/queen_black.png").as_slice(),
        ),
        (
            PieceKind::BlackKing,
            include_bytes!("../static/king_black.png").as_slice(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_assets_load() {
        let pieces = load().expect("bundled sprites must decode and validate");
        for piece in PieceKind::PIECES {
            assert!(
                pieces.sprite(piece).is_some(),
                "bundled set covers {piece}"
            );
        }
    }
}
