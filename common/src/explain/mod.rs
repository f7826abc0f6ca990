//! Explanation resolution.
//!
//! `resolve` tests the snippet against `PATTERN_RULES` in order and answers
//! with the first matching record. When nothing matches it falls back to the
//! category-level record, and for `Category::Unrecognized` to the shared
//! "no pattern detected" answer that echoes the snippet back as its example.
//!
//! Predicates are plain substring tests (two use a regex). More specific
//! tests sit above broader ones, so a snippet with a `background-color`
//! declaration never reaches the generic stylesheet record.

pub mod catalog;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::category::Category;
use crate::model::explanation::{Explanation, PatternKey};
use crate::model::locale::Locale;

/// A fine-grained predicate paired with the catalog entry it selects.
pub struct PatternRule {
    pub key: PatternKey,
    pub matches: fn(&str) -> bool,
}

static DISPLAY_DECLARATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"display\s*:").unwrap());
static HEADING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<h[1-6]").unwrap());

pub static PATTERN_RULES: &[PatternRule] = &[
    // stylesheet properties
    PatternRule {
        key: PatternKey::TextWrap,
        matches: |s| s.contains("text-wrap"),
    },
    PatternRule {
        key: PatternKey::BackgroundColor,
        matches: |s| s.contains("background-color"),
    },
    PatternRule {
        key: PatternKey::TextColor,
        matches: |s| s.contains("color:") && !s.contains("background"),
    },
    PatternRule {
        key: PatternKey::FontSize,
        matches: |s| s.contains("font-size"),
    },
    PatternRule {
        key: PatternKey::Padding,
        matches: |s| s.contains("padding"),
    },
    PatternRule {
        key: PatternKey::Margin,
        matches: |s| s.contains("margin"),
    },
    PatternRule {
        key: PatternKey::Display,
        matches: |s| DISPLAY_DECLARATION.is_match(s),
    },
    PatternRule {
        key: PatternKey::BorderRadius,
        matches: |s| s.contains("border-radius"),
    },
    PatternRule {
        key: PatternKey::Opacity,
        matches: |s| s.contains("opacity"),
    },
    PatternRule {
        key: PatternKey::Width,
        matches: |s| s.contains("width") && s.contains(':'),
    },
    PatternRule {
        key: PatternKey::Height,
        matches: |s| s.contains("height") && s.contains(':'),
    },
    // markup elements
    PatternRule {
        key: PatternKey::Button,
        matches: |s| s.contains("<button"),
    },
    PatternRule {
        key: PatternKey::Div,
        matches: |s| s.contains("<div"),
    },
    PatternRule {
        key: PatternKey::Paragraph,
        matches: |s| s.contains("<p"),
    },
    PatternRule {
        key: PatternKey::Heading,
        matches: |s| HEADING_TAG.is_match(s),
    },
    // script constructs
    PatternRule {
        key: PatternKey::EventListener,
        matches: |s| s.contains("addEventListener"),
    },
    PatternRule {
        key: PatternKey::QuerySelector,
        matches: |s| s.contains("querySelector"),
    },
    PatternRule {
        key: PatternKey::InnerHtml,
        matches: |s| s.contains("innerHTML"),
    },
    PatternRule {
        key: PatternKey::TextContent,
        matches: |s| s.contains("textContent"),
    },
    PatternRule {
        key: PatternKey::IfStatement,
        matches: |s| s.contains("if (") || s.contains("if("),
    },
    PatternRule {
        key: PatternKey::Variable,
        matches: |s| {
            (s.contains("const ") || s.contains("let ") || s.contains("var ")) && s.contains('=')
        },
    },
    // network
    PatternRule {
        key: PatternKey::Fetch,
        matches: |s| s.contains("fetch("),
    },
];

/// Category-level record used when no fine-grained rule matches.
pub fn fallback_key(category: Category) -> PatternKey {
    match category {
        Category::DataInterchange => PatternKey::JsonData,
        Category::Stylesheet => PatternKey::GenericStylesheet,
        Category::Markup => PatternKey::GenericMarkup,
        Category::Script => PatternKey::GenericScript,
        Category::RemoteCall => PatternKey::Fetch,
        Category::Unrecognized => PatternKey::NoPattern,
    }
}

/// Picks the catalog key for `snippet` without materializing the record.
pub fn match_pattern(snippet: &str, category: Category) -> PatternKey {
    PATTERN_RULES
        .iter()
        .find(|rule| (rule.matches)(snippet))
        .map(|rule| rule.key)
        .unwrap_or_else(|| fallback_key(category))
}

/// Resolves the explanation shown for `snippet`.
///
/// Pure function of its inputs and the static catalog; never fails.
pub fn resolve(snippet: &str, category: Category, locale: Locale) -> Explanation {
    let key = match_pattern(snippet, category);
    debug!("resolved {} snippet to {:?} ({})", category, key, locale.code());

    match catalog::record(locale, key) {
        Some(record) => record.to_explanation(key),
        None => no_pattern(snippet, locale),
    }
}

/// The shared "no recognized code patterns" answer.
pub fn no_pattern(snippet: &str, locale: Locale) -> Explanation {
    let ui = locale.ui();
    Explanation {
        pattern: PatternKey::NoPattern,
        summary: ui.no_code_detected.to_string(),
        narrative: ui.no_code_detected.to_string(),
        tips: Vec::new(),
        example: snippet.to_string(),
        produces_visible_artifact: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    fn key_of(snippet: &str) -> PatternKey {
        resolve(snippet, classify(snippet), Locale::En).pattern
    }

    #[test]
    fn background_fill_beats_generic_stylesheet() {
        let snippet = "div { background-color: yellow; }";
        let explanation = resolve(snippet, classify(snippet), Locale::En);
        assert_eq!(explanation.pattern, PatternKey::BackgroundColor);
        assert!(explanation.produces_visible_artifact);
        assert!(explanation.example.contains("background-color: yellow"));
    }

    #[test]
    fn button_markup_resolves_to_button() {
        let explanation = resolve("<button>Click Me</button>", Category::Markup, Locale::En);
        assert_eq!(explanation.pattern, PatternKey::Button);
        assert_eq!(explanation.example, "<button>Click Me</button>");
    }

    #[test]
    fn json_object_resolves_to_data_record() {
        let explanation = resolve(r#"{"name": "John", "age": 30}"#, Category::DataInterchange, Locale::En);
        assert_eq!(explanation.pattern, PatternKey::JsonData);
        assert!(!explanation.produces_visible_artifact);
    }

    #[test]
    fn text_color_skipped_when_background_present() {
        assert_eq!(key_of("p { color: red; background: blue; }"), PatternKey::GenericStylesheet);
        assert_eq!(key_of("p { color: red; }"), PatternKey::TextColor);
    }

    #[test]
    fn rule_order_is_respected() {
        assert_eq!(key_of("p { text-wrap: balance; background-color: red; }"), PatternKey::TextWrap);
        assert_eq!(key_of("div { padding: 4px; margin: 2px; }"), PatternKey::Padding);
        assert_eq!(key_of("div { display : grid; }"), PatternKey::Display);
        assert_eq!(key_of("<h3>Title</h3>"), PatternKey::Heading);
        assert_eq!(key_of("<div><button>Go</button></div>"), PatternKey::Button);
        assert_eq!(key_of("let total = 1;"), PatternKey::Variable);
        assert_eq!(key_of("if (ready) { go(); }"), PatternKey::IfStatement);
    }

    #[test]
    fn category_fallbacks() {
        assert_eq!(key_of("<span>hi</span>"), PatternKey::GenericMarkup);
        assert_eq!(key_of("function go() { run(); }"), PatternKey::GenericScript);
        assert_eq!(key_of("a { border: none; }"), PatternKey::GenericStylesheet);
        assert_eq!(key_of("await load()"), PatternKey::Fetch);
    }

    #[test]
    fn fetch_with_arrow_resolves_to_fetch() {
        let snippet = "fetch('/data').then(r => r.json())";
        assert_eq!(classify(snippet), Category::RemoteCall);
        assert_eq!(key_of(snippet), PatternKey::Fetch);
    }

    #[test]
    fn unrecognized_echoes_snippet() {
        let explanation = resolve("hello world", Category::Unrecognized, Locale::Es);
        assert_eq!(explanation.pattern, PatternKey::NoPattern);
        assert_eq!(explanation.example, "hello world");
        assert!(explanation.tips.is_empty());
        assert_eq!(explanation.summary, Locale::Es.ui().no_code_detected);
    }

    #[test]
    fn resolution_is_idempotent() {
        let snippet = "const button = document.querySelector('button');";
        let first = resolve(snippet, classify(snippet), Locale::Es);
        let second = resolve(snippet, classify(snippet), Locale::Es);
        assert_eq!(first, second);
    }

    #[test]
    fn every_key_has_both_locales() {
        let keys = PATTERN_RULES
            .iter()
            .map(|rule| rule.key)
            .chain(Category::ALL.into_iter().map(fallback_key))
            .filter(|key| *key != PatternKey::NoPattern);
        for key in keys {
            let en = catalog::record(Locale::En, key).expect("english record");
            let es = catalog::record(Locale::Es, key).expect("spanish record");
            assert_eq!(en.produces_visible_artifact, es.produces_visible_artifact);
            assert_eq!(en.tips.len(), es.tips.len());
            assert_ne!(en.summary, es.summary);
        }
    }
}
