use common::model::explanation::Explanation;
use common::model::locale::Locale;

#[derive(Clone)]
pub enum Msg {
    UpdateInput(String),
    Explain,
    /// Result of the submission numbered `request`. Stale numbers are ignored.
    AnalysisReady {
        request: u32,
        snippet: String,
        remote: Option<Explanation>,
    },
    SetLocale(Locale),
    EditTryIt(String),
    /// Debounced re-render; only the latest `generation` is honored.
    RefreshPreview(u32),
    ResetTryIt,
    AutoResize,
    DismissError,
    NewSnippet,
}
