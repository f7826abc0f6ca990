use serde::{Deserialize, Serialize};

use crate::model::category::Category;
use crate::model::explanation::Explanation;

/// Outcome of explaining one submitted snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The trimmed snippet as submitted.
    pub snippet: String,
    pub category: Category,
    pub explanation: Explanation,
}
