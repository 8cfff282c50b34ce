//! fenboard core - board notation parsing and chessboard rasterization
//!
//! This crate holds everything about fenboard that is not HTTP plumbing: the
//! piece vocabulary, the board model, the notation validator, the piece
//! sprite set, and the renderer. It has no dependency on any server
//! framework and can be exercised entirely from tests.
//!
//! # Architecture
//!
//! ```text
//! raw notation string
//!         │
//!         ▼
//! ┌───────────────────┐      ┌──────────────────┐
//! │ notation::parse   │─────▶│      Board       │
//! │ (two-pass check)  │      │ (8×8 PieceKind)  │
//! └───────────────────┘      └────────┬─────────┘
//!                                     │
//!                 ┌───────────────────┤
//!                 ▼                   ▼
//!         ┌──────────────┐   ┌────────────────┐
//!         │   PieceSet   │──▶│ render::render │──▶ 512×512 RGBA canvas
//!         │ (12 sprites) │   └────────────────┘        │
//!         └──────────────┘                             ▼
//!                                              render::encode_png
//! ```
//!
//! # Key Types
//!
//! - [`PieceKind`]: what occupies a single cell (empty, or color × type)
//! - [`Board`]: a validated 8×8 grid, only constructible through parsing
//! - [`PieceSet`]: the read-only store of twelve 64×64 piece sprites
//! - [`NotationError`]: the single validation failure kind
//!
//! # Quick Start
//!
//! ```no_run
//! use fenboard_core::{encode_png, render, Board, PieceSet};
//!
//! # fn load_sprites() -> PieceSet { unimplemented!() }
//! let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
//!     .parse()
//!     .expect("starting position is valid");
//!
//! let sprites: PieceSet = load_sprites();
//! let canvas = render(&board, &sprites);
//! let png = encode_png(&canvas).expect("in-memory PNG encoding");
//! ```
//!
//! Parsing and rendering are pure and touch no shared mutable state, so
//! concurrent requests need no synchronization beyond sharing the
//! [`PieceSet`] by reference.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assets;
pub mod board;
pub mod notation;
pub mod piece;
pub mod render;

pub use assets::{AssetError, PieceSet};
pub use board::{Board, BOARD_SIZE};
pub use notation::{parse, NotationError};
pub use piece::PieceKind;
pub use render::{encode_png, render, PngEncodeError, CANVAS_SIZE, TILE_SIZE};
