//! Runtime knobs for the explainer UI.

use serde::{Deserialize, Serialize};

use crate::model::locale::Locale;

/// Re-render policy for the "try it yourself" editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LivePreview {
    /// Re-render on every edit.
    Immediate,
    /// Re-render once edits pause for `millis`.
    Debounced { millis: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainerConfig {
    /// Artificial delay between submit and results, standing in for a backend
    /// round-trip.
    pub analysis_delay_ms: u32,
    pub live_preview: LivePreview,
    /// Attempt the remote analysis endpoint over HTTP. When off, the remote
    /// stub answers "unavailable" without a request.
    pub remote_analysis: bool,
    pub default_locale: Locale,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 800,
            live_preview: LivePreview::Immediate,
            remote_analysis: false,
            default_locale: Locale::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ExplainerConfig =
            serde_json::from_str(r#"{"live_preview": {"mode": "debounced", "millis": 250}}"#).unwrap();
        assert_eq!(config.live_preview, LivePreview::Debounced { millis: 250 });
        assert_eq!(config.analysis_delay_ms, 800);
        assert_eq!(config.default_locale, Locale::En);
    }
}
