//! HTTP surface
//!
//! One endpoint: `GET /render?board=<notation>`.
//!
//! - 200: `Content-Type: image/png`, `X-Processing-Time: <elapsed>`,
//!   body = PNG-encoded 512×512 board image
//! - 400: plain-text `Invalid FEN` when the notation is rejected
//!
//! The handler is a thin shell around the core pipeline (parse → render →
//! encode). The piece sprites are injected as shared read-only state, so
//! concurrent requests need no synchronization.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::{error, info, warn};

use fenboard_core::{encode_png, render, Board, PieceSet};

/// Elapsed-time response header, e.g. `X-Processing-Time: 1.234ms`.
const PROCESSING_TIME_HEADER: HeaderName = HeaderName::from_static("x-processing-time");

/// Query parameters for `GET /render`.
#[derive(Debug, Deserialize)]
struct RenderParams {
    /// Piece-placement notation. An absent parameter is treated as the
    /// empty string, which fails validation.
    #[serde(default)]
    board: String,
}

/// Build the application router around a loaded sprite set.
pub fn router(pieces: Arc<PieceSet>) -> Router {
    Router::new()
        .route("/render", get(render_board))
        .with_state(pieces)
}

/// `GET /render` handler: validate, rasterize, encode.
async fn render_board(
    State(pieces): State<Arc<PieceSet>>,
    Query(params): Query<RenderParams>,
) -> Response {
    let start = Instant::now();

    let board: Board = match params.board.parse() {
        Ok(board) => board,
        Err(e) => {
            warn!(notation = %params.board, "Rejected board notation");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    let canvas = render(&board, &pieces);
    let png = match encode_png(&canvas) {
        Ok(png) => png,
        Err(e) => {
            error!(error = %e, "PNG encoding failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response();
        }
    };

    let elapsed = start.elapsed();
    info!(elapsed = ?elapsed, "Rendered board");

    (
        [
            (header::CONTENT_TYPE, String::from("image/png")),
            (PROCESSING_TIME_HEADER, format!("{elapsed:?}")),
        ],
        png,
    )
        .into_response()
}
