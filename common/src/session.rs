//! Session context: the active locale and the last analysis.
//!
//! The owner of the UI loop holds one `Session`. Explaining a snippet
//! classifies and resolves it; switching locale re-resolves the stored
//! snippet with its stored category.

use log::debug;

use crate::classifier::classify;
use crate::error::ExplainError;
use crate::explain::resolve;
use crate::model::analysis::Analysis;
use crate::model::explanation::Explanation;
use crate::model::locale::Locale;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    locale: Locale,
    last: Option<Analysis>,
}

/// Numbers asynchronous results so that only the latest one is applied.
///
/// Each `issue` hands out a new ticket and makes every earlier ticket stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequence {
    latest: u32,
}

impl Sequence {
    pub fn issue(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    /// Makes every outstanding ticket stale without handing out a new one.
    pub fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        ticket == self.latest
    }
}

/// Trims `input` and rejects it when nothing is left.
pub fn normalize_snippet(input: &str) -> Result<String, ExplainError> {
    let snippet = input.trim();
    if snippet.is_empty() {
        return Err(ExplainError::EmptySnippet);
    }
    Ok(snippet.to_string())
}

impl Session {
    pub fn new(locale: Locale) -> Self {
        Self { locale, last: None }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn last(&self) -> Option<&Analysis> {
        self.last.as_ref()
    }

    /// Classifies and explains `input`, remembering the result.
    ///
    /// A `remote` explanation, when present, replaces the local resolution.
    pub fn explain(
        &mut self,
        input: &str,
        remote: Option<Explanation>,
    ) -> Result<&Analysis, ExplainError> {
        let snippet = normalize_snippet(input)?;
        let category = classify(&snippet);
        let explanation = remote.unwrap_or_else(|| resolve(&snippet, category, self.locale));
        debug!("explained snippet as {} / {:?}", category, explanation.pattern);

        Ok(self.last.insert(Analysis {
            snippet,
            category,
            explanation,
        }))
    }

    /// Changes the locale and re-resolves the last analysis, if any, without
    /// classifying it again.
    pub fn switch_locale(&mut self, locale: Locale) -> Option<&Analysis> {
        self.locale = locale;
        let analysis = self.last.as_mut()?;
        analysis.explanation = resolve(&analysis.snippet, analysis.category, locale);
        Some(analysis)
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::Category;
    use crate::model::explanation::PatternKey;

    #[test]
    fn empty_input_is_rejected() {
        let mut session = Session::default();
        assert_eq!(session.explain("   \n\t", None), Err(ExplainError::EmptySnippet));
        assert!(session.last().is_none());
    }

    #[test]
    fn explain_stores_trimmed_snippet() {
        let mut session = Session::new(Locale::En);
        let analysis = session.explain("  <button>Click Me</button>\n", None).unwrap();
        assert_eq!(analysis.snippet, "<button>Click Me</button>");
        assert_eq!(analysis.category, Category::Markup);
        assert_eq!(analysis.explanation.pattern, PatternKey::Button);
    }

    #[test]
    fn locale_switch_keeps_category_and_rule() {
        let mut session = Session::new(Locale::En);
        let english = session
            .explain("div { background-color: yellow; }", None)
            .unwrap()
            .clone();

        let spanish = session.switch_locale(Locale::Es).unwrap().clone();
        assert_eq!(session.locale(), Locale::Es);
        assert_eq!(spanish.category, english.category);
        assert_eq!(spanish.explanation.pattern, english.explanation.pattern);
        assert_ne!(spanish.explanation.summary, english.explanation.summary);
    }

    #[test]
    fn locale_switch_without_history_only_changes_locale() {
        let mut session = Session::new(Locale::En);
        assert!(session.switch_locale(Locale::Es).is_none());
        assert_eq!(session.locale(), Locale::Es);
    }

    #[test]
    fn remote_explanation_takes_precedence() {
        let mut session = Session::new(Locale::En);
        let remote = crate::explain::no_pattern("custom", Locale::En);
        let analysis = session.explain("p { color: red; }", Some(remote.clone())).unwrap();
        assert_eq!(analysis.explanation, remote);
        assert_eq!(analysis.category, Category::Stylesheet);
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut requests = Sequence::default();
        let first = requests.issue();
        let second = requests.issue();
        assert_ne!(first, second);
        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
    }

    #[test]
    fn debounced_edits_apply_once() {
        let mut generations = Sequence::default();
        let pending: Vec<u32> = (0..3).map(|_| generations.issue()).collect();
        let applied: Vec<u32> = pending
            .into_iter()
            .filter(|generation| generations.is_current(*generation))
            .collect();
        assert_eq!(applied.len(), 1);
        assert!(generations.is_current(applied[0]));
    }

    #[test]
    fn invalidate_drops_in_flight_ticket() {
        let mut requests = Sequence::default();
        let in_flight = requests.issue();
        requests.invalidate();
        assert!(!requests.is_current(in_flight));
        let next = requests.issue();
        assert!(requests.is_current(next));
    }
}
