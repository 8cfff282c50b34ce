//! Board renderer
//!
//! Deterministic rasterization of a [`Board`] into a 512×512 RGBA canvas:
//! an 8×8 checkerboard of 64×64 tiles filling the canvas exactly, with
//! piece sprites composited source-over onto their tiles. Identical board
//! and sprites always produce a byte-identical canvas. Rendering is total
//! over valid input and does no logging; timing and diagnostics belong to
//! the HTTP layer.

use std::io::Cursor;

use image::{imageops, ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

use crate::assets::PieceSet;
use crate::board::{Board, BOARD_SIZE};

/// Edge length of the rendered canvas in pixels.
pub const CANVAS_SIZE: u32 = 512;

/// Edge length of one board tile (and one piece sprite) in pixels.
pub const TILE_SIZE: u32 = 64;

/// Light squares: the untouched opaque white background.
const LIGHT_TILE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Dark squares: opaque dark gray.
const DARK_TILE: Rgba<u8> = Rgba([0x4f, 0x4f, 0x4f, 0xff]);

/// Rasterize a board onto a fresh [`CANVAS_SIZE`]×[`CANVAS_SIZE`] canvas.
///
/// Tile `(row, col)` is painted dark when `(row + col)` is even, so the
/// top-left tile is dark; odd-parity tiles keep the white background.
/// Non-empty cells get their sprite composited source-over, letting
/// transparent sprite pixels show the tile color through.
#[must_use]
pub fn render(board: &Board, pieces: &PieceSet) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, LIGHT_TILE);
    let dark_tile = RgbaImage::from_pixel(TILE_SIZE, TILE_SIZE, DARK_TILE);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let x = col as i64 * i64::from(TILE_SIZE);
            let y = row as i64 * i64::from(TILE_SIZE);

            if (row + col) % 2 == 0 {
                imageops::replace(&mut canvas, &dark_tile, x, y);
            }

            if let Some(sprite) = pieces.sprite(board.piece_at(row, col)) {
                imageops::overlay(&mut canvas, sprite, x, y);
            }
        }
    }

    canvas
}

/// Failure while PNG-encoding a rendered canvas.
///
/// Not expected for an in-memory writer; surfaced as a typed error rather
/// than a panic.
#[derive(Debug, Error)]
#[error("failed to encode PNG: {0}")]
pub struct PngEncodeError(#[from] image::ImageError);

/// Encode a rendered canvas as PNG bytes for the response body.
///
/// # Errors
///
/// Returns [`PngEncodeError`] if the encoder reports a failure.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, PngEncodeError> {
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    /// A sprite set of solid opaque tiles, one distinct red value per piece,
    /// each with a transparent top-left quadrant to exercise compositing.
    fn test_pieces() -> PieceSet {
        let encoded: Vec<(PieceKind, Vec<u8>)> = PieceKind::PIECES
            .iter()
            .enumerate()
            .map(|(index, &piece)| {
                let mut sprite = RgbaImage::from_pixel(
                    TILE_SIZE,
                    TILE_SIZE,
                    Rgba([100 + index as u8, 0, 200, 255]),
                );
                for y in 0..TILE_SIZE / 2 {
                    for x in 0..TILE_SIZE / 2 {
                        sprite.put_pixel(x, y, Rgba([0, 0, 0, 0]));
                    }
                }
                let bytes = encode_png(&sprite).expect("in-memory PNG encoding");
                (piece, bytes)
            })
            .collect();
        let sources: Vec<(PieceKind, &[u8])> = encoded
            .iter()
            .map(|(piece, bytes)| (*piece, bytes.as_slice()))
            .collect();
        PieceSet::from_png_bytes(&sources).expect("test sprites are valid")
    }

    fn empty_board() -> Board {
        "8/8/8/8/8/8/8/8".parse().expect("empty board is valid")
    }

    /// Center pixel of a tile.
    fn tile_center(canvas: &RgbaImage, row: usize, col: usize) -> Rgba<u8> {
        let x = col as u32 * TILE_SIZE + TILE_SIZE / 2;
        let y = row as u32 * TILE_SIZE + TILE_SIZE / 2;
        *canvas.get_pixel(x, y)
    }

    #[test]
    fn test_canvas_dimensions() {
        let canvas = render(&empty_board(), &test_pieces());
        assert_eq!(canvas.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
    }

    #[test]
    fn test_checkerboard_parity() {
        let canvas = render(&empty_board(), &test_pieces());

        let mut dark_tiles = 0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pixel = tile_center(&canvas, row, col);
                if (row + col) % 2 == 0 {
                    assert_eq!(pixel, DARK_TILE, "tile ({row},{col}) should be dark");
                    dark_tiles += 1;
                } else {
                    assert_eq!(pixel, LIGHT_TILE, "tile ({row},{col}) should be light");
                }
            }
        }
        assert_eq!(dark_tiles, 32, "exactly half the tiles are dark");
    }

    #[test]
    fn test_top_left_tile_is_dark() {
        let canvas = render(&empty_board(), &test_pieces());
        assert_eq!(*canvas.get_pixel(0, 0), DARK_TILE);
    }

    #[test]
    fn test_tiles_fill_canvas_exactly() {
        // Corner pixels of the outermost tiles are still tile-colored, so
        // there is no margin or border anywhere.
        let canvas = render(&empty_board(), &test_pieces());
        assert_eq!(*canvas.get_pixel(CANVAS_SIZE - 1, 0), LIGHT_TILE);
        assert_eq!(*canvas.get_pixel(0, CANVAS_SIZE - 1), LIGHT_TILE);
        assert_eq!(*canvas.get_pixel(CANVAS_SIZE - 1, CANVAS_SIZE - 1), DARK_TILE);
    }

    #[test]
    fn test_sprite_composited_on_occupied_tile() {
        let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
            .parse()
            .expect("starting position is valid");
        let pieces = test_pieces();
        let canvas = render(&board, &pieces);

        // Opaque bottom-right sprite quadrant covers the (0,0) tile.
        let x = 3 * TILE_SIZE / 4;
        let y = 3 * TILE_SIZE / 4;
        let sprite = pieces
            .sprite(PieceKind::BlackRook)
            .expect("black rook has a sprite");
        assert_eq!(canvas.get_pixel(x, y), sprite.get_pixel(x, y));

        // Transparent top-left sprite quadrant lets the dark tile through
        // on the (0,0) tile.
        assert_eq!(*canvas.get_pixel(TILE_SIZE / 4, TILE_SIZE / 4), DARK_TILE);
    }

    #[test]
    fn test_empty_tiles_unchanged_by_pieces_elsewhere() {
        let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
            .parse()
            .expect("starting position is valid");
        let canvas = render(&board, &test_pieces());

        for row in 2..6 {
            for col in 0..BOARD_SIZE {
                let expected = if (row + col) % 2 == 0 {
                    DARK_TILE
                } else {
                    LIGHT_TILE
                };
                assert_eq!(tile_center(&canvas, row, col), expected);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let board: Board = "r3k2r/8/8/3qQ3/8/8/8/R3K2R"
            .parse()
            .expect("position is valid");
        let pieces = test_pieces();

        let first = render(&board, &pieces);
        let second = render(&board, &pieces);
        assert_eq!(first.as_raw(), second.as_raw(), "raw buffers are identical");

        let first_png = encode_png(&first).expect("encoding succeeds");
        let second_png = encode_png(&second).expect("encoding succeeds");
        assert_eq!(first_png, second_png, "PNG bytes are identical");
    }

    #[test]
    fn test_encoded_png_round_trips() {
        let canvas = render(&empty_board(), &test_pieces());
        let png = encode_png(&canvas).expect("encoding succeeds");

        let decoded = image::load_from_memory(&png)
            .expect("encoded bytes decode")
            .to_rgba8();
        assert_eq!(decoded.as_raw(), canvas.as_raw());
    }
}
