use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse code-kind label assigned to a snippet by the classifier.
///
/// The set is closed: every snippet maps to exactly one variant, with
/// `Unrecognized` standing in when no heuristic fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Markup,
    Stylesheet,
    Script,
    DataInterchange,
    RemoteCall,
    Unrecognized,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Markup,
        Category::Stylesheet,
        Category::Script,
        Category::DataInterchange,
        Category::RemoteCall,
        Category::Unrecognized,
    ];

    /// Short machine label, stable across locales.
    pub fn label(self) -> &'static str {
        match self {
            Category::Markup => "html",
            Category::Stylesheet => "css",
            Category::Script => "javascript",
            Category::DataInterchange => "json",
            Category::RemoteCall => "fetch",
            Category::Unrecognized => "generic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
