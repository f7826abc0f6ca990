//! Client for the remote analysis endpoint.
//!
//! Snippets are screened locally before anything leaves the page. When remote
//! analysis is switched off the call short-circuits without a request.

use gloo_net::http::Request;

use common::error::ValidationError;
use common::model::explanation::Explanation;
use common::requests::{AnalyzeRequest, AnalyzeResponse};

const ANALYZE_URL: &str = "/api/analyze";

#[derive(Debug)]
pub enum RemoteError {
    /// The snippet was screened out locally and never sent.
    Screened(ValidationError),
    Disabled,
    Unavailable(String),
    Transport(String),
}

pub async fn request_remote_analysis(
    request: AnalyzeRequest,
    enabled: bool,
) -> Result<Explanation, RemoteError> {
    if !enabled {
        return Err(RemoteError::Disabled);
    }
    common::validate::validate_for_remote(&request.snippet).map_err(RemoteError::Screened)?;

    let response = Request::post(ANALYZE_URL)
        .json(&request)
        .map_err(|e| RemoteError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| RemoteError::Transport(e.to_string()))?;

    match response
        .json::<AnalyzeResponse>()
        .await
        .map_err(|e| RemoteError::Transport(e.to_string()))?
    {
        AnalyzeResponse::Explained { explanation } => Ok(explanation),
        AnalyzeResponse::Unavailable { reason } | AnalyzeResponse::Rejected { reason } => {
            Err(RemoteError::Unavailable(reason))
        }
    }
}
