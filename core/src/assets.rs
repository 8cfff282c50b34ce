//! Piece sprite set
//!
//! The read-only store of piece images consumed by the renderer. A
//! [`PieceSet`] holds exactly twelve decoded 64×64 RGBA sprites, one per
//! non-empty [`PieceKind`], and is validated completely at construction so
//! the renderer never has a failure path. Construction happens once at
//! process start; afterwards the set is shared by reference across request
//! tasks (it is `Sync` and never mutated).

use image::RgbaImage;
use thiserror::Error;

use crate::piece::PieceKind;
use crate::render::TILE_SIZE;

/// Errors raised while decoding and validating piece sprites.
///
/// All of these are startup-time conditions: a server must refuse to serve
/// without its full piece set.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A sprite's bytes were not a decodable image.
    #[error("failed to decode sprite for {piece}: {source}")]
    Decode {
        /// The piece whose sprite failed to decode.
        piece: PieceKind,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// A sprite decoded to something other than one tile.
    #[error("sprite for {piece} is {width}x{height}, expected {TILE_SIZE}x{TILE_SIZE}")]
    Dimensions {
        /// The piece whose sprite has the wrong size.
        piece: PieceKind,
        /// Decoded width in pixels.
        width: u32,
        /// Decoded height in pixels.
        height: u32,
    },

    /// No sprite was supplied for a piece.
    #[error("no sprite supplied for {piece}")]
    Missing {
        /// The piece without a sprite.
        piece: PieceKind,
    },

    /// Two sprites were supplied for the same piece.
    #[error("duplicate sprite supplied for {piece}")]
    Duplicate {
        /// The piece supplied more than once.
        piece: PieceKind,
    },

    /// A sprite was supplied for the empty cell, which has no image.
    #[error("a sprite was supplied for the empty cell")]
    EmptySprite,
}

/// The read-only collection of twelve piece sprites.
#[derive(Debug)]
pub struct PieceSet {
    // Indexed by position in `PieceKind::PIECES`; construction guarantees
    // one validated sprite per slot.
    sprites: Vec<RgbaImage>,
}

impl PieceSet {
    /// Decode PNG bytes into a complete, validated sprite set.
    ///
    /// `sources` may list the twelve pieces in any order but must cover each
    /// exactly once. Every sprite must decode to exactly
    /// [`TILE_SIZE`]×[`TILE_SIZE`] pixels; the alpha channel is preserved
    /// for compositing.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetError`] for an undecodable, mis-sized, missing,
    /// duplicated, or `Empty`-keyed sprite.
    pub fn from_png_bytes(sources: &[(PieceKind, &[u8])]) -> Result<Self, AssetError> {
        let mut slots: Vec<Option<RgbaImage>> = Vec::new();
        slots.resize_with(PieceKind::PIECES.len(), || None);

        for &(piece, bytes) in sources {
            let Some(index) = sprite_index(piece) else {
                return Err(AssetError::EmptySprite);
            };
            if slots[index].is_some() {
                return Err(AssetError::Duplicate { piece });
            }

            let decoded = image::load_from_memory(bytes)
                .map_err(|source| AssetError::Decode { piece, source })?;
            let sprite = decoded.to_rgba8();

            let (width, height) = sprite.dimensions();
            if width != TILE_SIZE || height != TILE_SIZE {
                return Err(AssetError::Dimensions {
                    piece,
                    width,
                    height,
                });
            }

            slots[index] = Some(sprite);
        }

        let mut sprites = Vec::with_capacity(PieceKind::PIECES.len());
        for (piece, slot) in PieceKind::PIECES.iter().zip(slots) {
            match slot {
                Some(sprite) => sprites.push(sprite),
                None => return Err(AssetError::Missing { piece: *piece }),
            }
        }

        Ok(Self { sprites })
    }

    /// The sprite for a piece, or `None` for `Empty`.
    ///
    /// Total over the twelve non-empty kinds by construction.
    #[must_use]
    pub fn sprite(&self, piece: PieceKind) -> Option<&RgbaImage> {
        sprite_index(piece).map(|index| &self.sprites[index])
    }
}

/// Slot index of a piece in `PieceKind::PIECES` order; `None` for `Empty`.
///
/// Exhaustive over the closed variant set, so a new piece kind cannot be
/// added without choosing its slot.
fn sprite_index(piece: PieceKind) -> Option<usize> {
    match piece {
        PieceKind::Empty => None,
        PieceKind::WhitePawn => Some(0),
        PieceKind::WhiteKnight => Some(1),
        PieceKind::WhiteBishop => Some(2),
        PieceKind::WhiteRook => Some(3),
        PieceKind::WhiteQueen => Some(4),
        PieceKind::WhiteKing => Some(5),
        PieceKind::BlackPawn => Some(6),
        PieceKind::BlackKnight => Some(7),
        PieceKind::BlackBishop => Some(8),
        PieceKind::BlackRook => Some(9),
        PieceKind::BlackQueen => Some(10),
        PieceKind::BlackKing => Some(11),
    }
}
