//! Wire types for the remote analysis endpoint (`POST /api/analyze`).

use serde::{Deserialize, Serialize};

use crate::model::explanation::Explanation;
use crate::model::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub snippet: String,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalyzeResponse {
    Explained { explanation: Explanation },
    /// The analysis backend is not available; clients resolve locally.
    Unavailable { reason: String },
    /// The snippet was screened out before analysis.
    Rejected { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_is_tagged_by_status() {
        let json = serde_json::to_value(AnalyzeResponse::Unavailable {
            reason: "offline".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["reason"], "offline");
    }
}
