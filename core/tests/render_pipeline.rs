//! End-to-end pipeline tests: notation in, PNG bytes out.
//!
//! These exercise the full parse → render → encode path the server runs per
//! request, using synthetic sprites so no bundled assets are needed.

use image::{Rgba, RgbaImage};

use fenboard_core::{
    encode_png, parse, render, Board, NotationError, PieceKind, PieceSet, CANVAS_SIZE, TILE_SIZE,
};

/// Build a sprite set of solid opaque tiles, one blue value per piece.
fn synthetic_pieces() -> PieceSet {
    let encoded: Vec<(PieceKind, Vec<u8>)> = PieceKind::PIECES
        .iter()
        .enumerate()
        .map(|(index, &piece)| {
            let sprite = RgbaImage::from_pixel(
                TILE_SIZE,
                TILE_SIZE,
                Rgba([0, 0, 40 + index as u8, 255]),
            );
            let bytes = encode_png(&sprite).expect("in-memory PNG encoding");
            (piece, bytes)
        })
        .collect();
    let sources: Vec<(PieceKind, &[u8])> = encoded
        .iter()
        .map(|(piece, bytes)| (*piece, bytes.as_slice()))
        .collect();
    PieceSet::from_png_bytes(&sources).expect("synthetic sprites are valid")
}

#[test]
fn test_pipeline_produces_png_of_fixed_size() {
    let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        .parse()
        .expect("starting position is valid");
    let canvas = render(&board, &synthetic_pieces());
    let png = encode_png(&canvas).expect("encoding succeeds");

    let decoded = image::load_from_memory(&png).expect("body is a decodable PNG");
    assert_eq!(decoded.width(), CANVAS_SIZE);
    assert_eq!(decoded.height(), CANVAS_SIZE);
}

#[test]
fn test_pipeline_is_deterministic_end_to_end() {
    let pieces = synthetic_pieces();
    let notation = "r1bk3r/p2pBpNp/n4n2/1p1NP2P/6P1/3P4/P1P1K3/q5b1";

    let first = encode_png(&render(&parse(notation).expect("valid"), &pieces))
        .expect("encoding succeeds");
    let second = encode_png(&render(&parse(notation).expect("valid"), &pieces))
        .expect("encoding succeeds");
    assert_eq!(first, second, "identical input produces identical bytes");
}

#[test]
fn test_equivalent_notations_render_identically() {
    // "44" and "8" expand to the same row, so the canvases match even
    // though the strings differ.
    let pieces = synthetic_pieces();
    let a = render(&parse("44/8/8/8/8/8/8/8").expect("valid"), &pieces);
    let b = render(&parse("8/8/8/8/8/8/8/8").expect("valid"), &pieces);
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn test_invalid_notation_never_reaches_rendering() {
    for input in [
        "",
        "8/8/8/8/8/8/8",
        "9/8/8/8/8/8/8/8",
        "88/8/8/8/8/8/8/8",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN",
    ] {
        assert_eq!(
            parse(input).expect_err("input is invalid"),
            NotationError::InvalidNotation,
            "input {input:?}"
        );
    }
}

#[test]
fn test_round_trip_law_on_expanded_grid() {
    for input in [
        "8/8/8/8/8/8/8/8",
        "44/44/44/44/44/44/44/44",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "7k/8/8/8/8/8/8/K7",
    ] {
        let board = parse(input).expect("input is valid");
        let reparsed = parse(&board.to_notation()).expect("canonical form is valid");
        assert_eq!(board, reparsed, "round trip of {input}");
    }
}
