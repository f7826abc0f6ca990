//! Explanation records and the keys that identify them.
//!
//! `ExplanationRecord` is the static, per-locale catalog entry. `Explanation`
//! is its owned counterpart handed to the UI and carried over the wire by the
//! remote analysis stub.

use serde::{Deserialize, Serialize};

/// Identifies one entry of the explanation catalog.
///
/// Fine-grained keys come first; the last group are the category-level
/// fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKey {
    TextWrap,
    BackgroundColor,
    TextColor,
    FontSize,
    Padding,
    Margin,
    Display,
    BorderRadius,
    Opacity,
    Width,
    Height,
    Button,
    Div,
    Paragraph,
    Heading,
    EventListener,
    QuerySelector,
    InnerHtml,
    TextContent,
    IfStatement,
    Variable,
    Fetch,
    JsonData,
    GenericStylesheet,
    GenericMarkup,
    GenericScript,
    /// Shared "no pattern detected" answer for unrecognized snippets.
    NoPattern,
}

/// A statically defined explanation for one `(locale, PatternKey)` pair.
#[derive(Debug, PartialEq, Eq)]
pub struct ExplanationRecord {
    /// What the construct does.
    pub summary: &'static str,
    /// What the user's code accomplished.
    pub narrative: &'static str,
    pub tips: &'static [&'static str],
    /// Canonical runnable example used to seed the "try it yourself" editor.
    pub example: &'static str,
    pub produces_visible_artifact: bool,
}

/// Owned explanation shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub pattern: PatternKey,
    pub summary: String,
    pub narrative: String,
    pub tips: Vec<String>,
    pub example: String,
    pub produces_visible_artifact: bool,
}

impl ExplanationRecord {
    pub fn to_explanation(&self, pattern: PatternKey) -> Explanation {
        Explanation {
            pattern,
            summary: self.summary.to_string(),
            narrative: self.narrative.to_string(),
            tips: self.tips.iter().map(|tip| tip.to_string()).collect(),
            example: self.example.to_string(),
            produces_visible_artifact: self.produces_visible_artifact,
        }
    }
}
