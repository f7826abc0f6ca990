//! # Analysis Service Module
//!
//! Placeholder for a richer remote analysis backend. The frontend may post a
//! snippet here before falling back to its own local resolution.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/analyze`**:
//!     - **Handler**: `process::process`
//!     - **Description**: Accepts an `AnalyzeRequest` (snippet + locale). Empty
//!       snippets answer `400 Bad Request`, snippets the validator screens out
//!       answer `422 Unprocessable Entity`, everything else answers
//!       `503 Service Unavailable`. Bodies are always an `AnalyzeResponse`,
//!       including for malformed or oversized JSON when the app registers
//!       `json_config()`.

mod process;

use actix_web::error::InternalError;
use actix_web::web::{post, scope, JsonConfig};
use actix_web::{HttpResponse, ResponseError, Scope};
use common::requests::AnalyzeResponse;
use log::warn;

const API_PATH: &str = "/api/analyze";
const MAX_BODY_BYTES: usize = 1024 * 1024; // 1 MB

/// JSON extractor settings that answer payload errors with a `Rejected` body.
pub fn json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| {
            warn!("analyze payload refused: {}", err);
            let response = HttpResponse::build(err.status_code()).json(AnalyzeResponse::Rejected {
                reason: err.to_string(),
            });
            InternalError::from_response(err, response).into()
        })
}

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(process::process))
}
