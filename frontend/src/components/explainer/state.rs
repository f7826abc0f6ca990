//! Component state for the code explainer.
//!
//! Holds the session (locale and last analysis), the raw input, the
//! "try it yourself" copy with its preview document, and the bookkeeping that
//! keeps asynchronous results in order.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::config::ExplainerConfig;
use common::error::ExplainError;
use common::session::{Sequence, Session};

pub struct ExplainerComponent {
    pub session: Session,

    pub config: ExplainerConfig,

    /// Raw content of the input textarea, untrimmed.
    pub input: String,

    /// Editable copy of the example shown under "Try it yourself".
    pub try_it: String,

    /// MD5 of the example as seeded. Differs from the hash of `try_it` once
    /// the user edits it.
    pub example_md5: Option<String>,

    /// Current `srcdoc` of the sandboxed preview frame.
    pub preview: AttrValue,

    /// True between submit and the matching `AnalysisReady`.
    pub loading: bool,

    pub error: Option<ExplainError>,

    /// Tickets for submissions. Results carrying a stale ticket are dropped.
    pub requests: Sequence,

    /// Tickets for debounced preview refreshes.
    pub preview_generations: Sequence,

    pub try_it_ref: NodeRef,

    pub error_sheet_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ExplainerComponent {
    pub fn new(config: ExplainerConfig) -> Self {
        Self {
            session: Session::new(config.default_locale),
            config,
            input: String::new(),
            try_it: String::new(),
            example_md5: None,
            preview: AttrValue::default(),
            loading: false,
            error: None,
            requests: Sequence::default(),
            preview_generations: Sequence::default(),
            try_it_ref: Default::default(),
            error_sheet_ref: Default::default(),
            loaded: false,
        }
    }

    /// Returns to the empty input page. Pending results and debounced
    /// refreshes become stale.
    ///
    /// Returns true when an error was showing and its sheet must be closed.
    pub fn start_new_snippet(&mut self) -> bool {
        self.session.clear();
        self.requests.invalidate();
        self.preview_generations.invalidate();
        self.loading = false;
        self.input.clear();
        self.try_it.clear();
        self.example_md5 = None;
        self.preview = AttrValue::default();
        self.error.take().is_some()
    }

    /// Grows the "try it" textarea to its `scrollHeight` so it never shows
    /// an inner scrollbar.
    pub fn resize_textarea(&self) {
        if let Some(textarea) = self.try_it_ref.cast::<HtmlTextAreaElement>() {
            if let Ok(html_elem) = textarea.clone().dyn_into::<HtmlElement>() {
                let style = html_elem.style();
                let _ = style.set_property("height", "auto");
                let scroll_height = textarea.scroll_height();
                let _ = style.set_property("height", &format!("{}px", scroll_height));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snippet_clears_input_results_and_error() {
        let mut component = ExplainerComponent::new(ExplainerConfig::default());
        component.input = "<p>Hi</p>".to_string();
        let in_flight = component.requests.issue();
        component.session.explain(&component.input.clone(), None).unwrap();
        component.try_it = "<p>edited</p>".to_string();
        component.error = Some(ExplainError::EmptySnippet);
        component.loading = true;

        assert!(component.start_new_snippet());
        assert!(component.input.is_empty());
        assert!(component.try_it.is_empty());
        assert!(component.session.last().is_none());
        assert!(component.error.is_none());
        assert!(!component.loading);
        assert!(!component.requests.is_current(in_flight));

        assert!(!component.start_new_snippet());
    }
}
