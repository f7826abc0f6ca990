//! Snippet classification.
//!
//! `classify` walks `CLASSIFICATION_RULES` top to bottom and returns the
//! category of the first rule whose test accepts the snippet. The order is
//! the whole algorithm: strict data shape, then angle-bracket markup, then
//! network-call tokens, then general script tokens, then stylesheet
//! punctuation and finally the loose hyphen/colon catch-all.

use log::debug;

use crate::model::category::Category;

/// One step of the ordered decision list.
pub struct ClassificationRule {
    pub category: Category,
    pub test: fn(&str) -> bool,
}

const REMOTE_CALL_TOKENS: [&str; 4] = ["fetch(", ".then(", "async", "await"];

const SCRIPT_TOKENS: [&str; 9] = [
    "function",
    "=>",
    "const",
    "let",
    "var",
    "addEventListener",
    "querySelector",
    "if (",
    "if(",
];

pub static CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        category: Category::DataInterchange,
        test: is_data_document,
    },
    ClassificationRule {
        category: Category::Markup,
        test: |s| s.contains('<') && s.contains('>'),
    },
    ClassificationRule {
        category: Category::RemoteCall,
        test: |s| REMOTE_CALL_TOKENS.iter().any(|token| s.contains(token)),
    },
    ClassificationRule {
        category: Category::Script,
        test: |s| SCRIPT_TOKENS.iter().any(|token| s.contains(token)),
    },
    ClassificationRule {
        category: Category::Stylesheet,
        test: looks_like_stylesheet_rules,
    },
    // Intentionally loose: anything with a hyphen or colon left over is
    // treated as a stylesheet.
    ClassificationRule {
        category: Category::Stylesheet,
        test: |s| s.contains('-') || s.contains(':'),
    },
];

/// Assigns a category to `snippet`. Never fails; falls back to
/// `Category::Unrecognized`.
pub fn classify(snippet: &str) -> Category {
    CLASSIFICATION_RULES
        .iter()
        .enumerate()
        .find(|(_, rule)| (rule.test)(snippet))
        .map(|(step, rule)| {
            debug!("classified as {} at step {}", rule.category, step + 1);
            rule.category
        })
        .unwrap_or(Category::Unrecognized)
}

/// True when the snippet is a single well-formed JSON object or array.
/// Bare scalars (`42`, `"text"`, `true`) do not count.
pub fn is_data_document(snippet: &str) -> bool {
    matches!(
        serde_json::from_str::<serde_json::Value>(snippet),
        Ok(serde_json::Value::Object(_) | serde_json::Value::Array(_))
    )
}

/// Colon-terminated declarations inside braces with statement terminators.
pub fn looks_like_stylesheet_rules(snippet: &str) -> bool {
    snippet.contains(':') && snippet.contains(';') && snippet.contains('{') && snippet.contains('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_rule_is_stylesheet() {
        assert_eq!(classify("div { background-color: yellow; }"), Category::Stylesheet);
    }

    #[test]
    fn angle_brackets_are_markup() {
        assert_eq!(classify("<button>Click Me</button>"), Category::Markup);
    }

    #[test]
    fn json_object_is_data() {
        assert_eq!(classify(r#"{"name": "John", "age": 30}"#), Category::DataInterchange);
        assert_eq!(classify("[1, 2, {\"a\": null}]"), Category::DataInterchange);
    }

    #[test]
    fn json_scalars_are_not_data() {
        assert!(!is_data_document("42"));
        assert!(!is_data_document("\"just text\""));
        assert_eq!(classify("true"), Category::Unrecognized);
    }

    #[test]
    fn fetch_beats_arrow_syntax() {
        let snippet = "fetch('/api').then(r => r.json())";
        assert_eq!(classify(snippet), Category::RemoteCall);
    }

    #[test]
    fn await_alone_is_remote_call() {
        assert_eq!(classify("await load()"), Category::RemoteCall);
    }

    #[test]
    fn script_tokens_before_stylesheet_punctuation() {
        assert_eq!(classify("const x = { a: 1 };"), Category::Script);
        assert_eq!(classify("if(x) { y(); }"), Category::Script);
        assert_eq!(classify("el.addEventListener('click', go)"), Category::Script);
    }

    #[test]
    fn markup_beats_script_tokens() {
        assert_eq!(classify("<script>const a = 1;</script>"), Category::Markup);
    }

    #[test]
    fn loose_catch_all_takes_hyphens_and_colons() {
        assert_eq!(classify("well-known"), Category::Stylesheet);
        assert_eq!(classify("key: value"), Category::Stylesheet);
    }

    #[test]
    fn plain_words_are_unrecognized() {
        assert_eq!(classify("hello world"), Category::Unrecognized);
        assert_eq!(classify(""), Category::Unrecognized);
    }

    #[test]
    fn classification_is_deterministic() {
        let samples = [
            "p { color: red; }",
            "<p>hi</p>",
            "{\"a\": 1}",
            "fetch(url)",
            "function f() {}",
            "plain",
        ];
        for sample in samples {
            let first = classify(sample);
            for _ in 0..3 {
                assert_eq!(classify(sample), first);
            }
            assert!(Category::ALL.contains(&first));
        }
    }
}
