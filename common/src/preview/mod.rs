//! Preview documents for the sandboxed result frame.
//!
//! Every function here returns a complete, self-contained HTML document meant
//! for an `<iframe sandbox srcdoc>`; the caller replaces the whole frame
//! content on each call.
//!
//! Markup and stylesheet snippets are embedded verbatim so the user sees their
//! own code run. Only the plain-text fallback escapes its input.

use std::fmt::Write;

use crate::error::PreviewError;
use crate::model::locale::Locale;

/// Placeholder body the stylesheet strategy styles.
pub const PLACEHOLDER_BODY: &str = "<p>Hello World!</p>";

const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";

/// How a snippet gets embedded in the preview document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Embedding {
    /// Injected as body markup.
    Markup,
    /// Injected as a `<style>` block over `PLACEHOLDER_BODY`.
    Stylesheet,
    /// Escaped inside a `<pre>` block.
    PlainText,
}

/// A finished preview document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument(String);

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Picks the embedding for the text as it is now, independent of any earlier
/// classification.
pub fn detect_embedding(snippet: &str) -> Embedding {
    let is_markup = snippet.contains('<') && snippet.contains('>');
    if is_markup {
        Embedding::Markup
    } else if snippet.contains(':') && snippet.contains(';') && snippet.contains('{') {
        Embedding::Stylesheet
    } else {
        Embedding::PlainText
    }
}

/// Builds the preview for `snippet`.
///
/// When `produces_visible_artifact` is false the snippet is ignored and the
/// localized "no visual output" document is returned.
pub fn render(
    snippet: &str,
    produces_visible_artifact: bool,
    locale: Locale,
) -> Result<RenderedDocument, PreviewError> {
    if !produces_visible_artifact {
        return render_no_visual_output(locale);
    }

    let mut doc = String::with_capacity(snippet.len() + 512);
    match detect_embedding(snippet) {
        Embedding::Markup => {
            open_document(&mut doc, "margin: 20px;", "")?;
            write!(doc, "{}", snippet)?;
        }
        Embedding::Stylesheet => {
            open_document(&mut doc, "margin: 0;", snippet)?;
            write!(doc, "{}", PLACEHOLDER_BODY)?;
        }
        Embedding::PlainText => {
            open_document(&mut doc, "margin: 20px;", "")?;
            write!(doc, "<pre>{}</pre>", escape_html(snippet))?;
        }
    }
    close_document(&mut doc)?;
    Ok(RenderedDocument(doc))
}

/// The informational document shown for categories without a visual result.
pub fn render_no_visual_output(locale: Locale) -> Result<RenderedDocument, PreviewError> {
    let ui = locale.ui();
    let mut doc = String::new();
    open_document(
        &mut doc,
        "margin: 20px; color: #666;",
        ".message-box { background-color: #e8f4f8; border: 1px solid #3498db; border-radius: 8px; padding: 20px; max-width: 100%; }\n\
         .message-box h3 { color: #3498db; margin-top: 0; }\n\
         .message-box p { line-height: 1.6; color: #555; margin-bottom: 0; }",
    )?;
    write!(
        doc,
        "<div class=\"message-box\"><h3>ℹ️ {}</h3><p>{}</p></div>",
        escape_html(ui.no_visual_output_title),
        escape_html(ui.no_visual_output)
    )?;
    close_document(&mut doc)?;
    Ok(RenderedDocument(doc))
}

/// Static error document used when building a preview fails. Infallible so it
/// can always stand in for a failed render.
pub fn render_error(message: &str) -> RenderedDocument {
    RenderedDocument(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>\n\
         body {{ margin: 20px; font-family: {FONT_STACK}; background-color: #f5f5f5; }}\n\
         .error-box {{ background-color: #ffe8e8; border: 1px solid #ff6b6b; border-radius: 8px; padding: 20px; color: #c92a2a; }}\n\
         </style>\n</head>\n<body>\n<div class=\"error-box\"><strong>Error:</strong> {}</div>\n</body>\n</html>\n",
        escape_html(message)
    ))
}

fn open_document(doc: &mut String, body_rules: &str, extra_styles: &str) -> Result<(), PreviewError> {
    write!(
        doc,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>\n\
         body {{ {body_rules} font-family: {FONT_STACK}; background-color: #f5f5f5; }}\n\
         {extra_styles}\n</style>\n</head>\n<body>\n"
    )?;
    Ok(())
}

fn close_document(doc: &mut String) -> Result<(), PreviewError> {
    write!(doc, "\n</body>\n</html>\n")?;
    Ok(())
}

/// Escapes `&`, `<`, `>`, `"` and `'` for safe inclusion in HTML text.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(doc: &RenderedDocument) -> &str {
        let text = doc.as_str();
        let start = text.find("<body>").expect("body open") + "<body>".len();
        let end = text.rfind("</body>").expect("body close");
        &text[start..end]
    }

    #[test]
    fn stylesheet_is_applied_to_placeholder() {
        let doc = render("div { background-color: yellow; }", true, Locale::En).unwrap();
        assert!(doc.as_str().contains("div { background-color: yellow; }"));
        assert!(body_of(&doc).contains(PLACEHOLDER_BODY));
    }

    #[test]
    fn markup_is_embedded_verbatim() {
        let doc = render("<button>Click Me</button>", true, Locale::En).unwrap();
        assert_eq!(body_of(&doc).trim(), "<button>Click Me</button>");
    }

    #[test]
    fn invisible_categories_get_the_info_message() {
        let doc = render(r#"{"name": "John"}"#, false, Locale::En).unwrap();
        assert!(doc.as_str().contains(Locale::En.ui().no_visual_output_title));
        assert!(!doc.as_str().contains("John"));

        let doc = render("<b>x</b>", false, Locale::Es).unwrap();
        assert!(doc.as_str().contains(Locale::Es.ui().no_visual_output_title));
    }

    #[test]
    fn plain_text_fallback_escapes_everything() {
        let snippet = "a & b \"quoted\" 'single'";
        let doc = render(snippet, true, Locale::En).unwrap();
        let body = body_of(&doc);
        assert_eq!(
            body.trim(),
            "<pre>a &amp; b &quot;quoted&quot; &#039;single&#039;</pre>"
        );
    }

    #[test]
    fn plain_text_never_leaks_raw_specials() {
        let snippet = "x > 1 && y 'q' \"w\"";
        assert_eq!(detect_embedding("1 > 2"), Embedding::PlainText);
        let doc = render(snippet, true, Locale::En).unwrap();
        let body = body_of(&doc).trim();
        let inner = body
            .strip_prefix("<pre>")
            .and_then(|rest| rest.strip_suffix("</pre>"))
            .expect("pre block");
        assert!(!inner.contains(['<', '>', '"', '\'']));
        assert!(!inner.replace("&amp;", "").replace("&lt;", "").replace("&gt;", "").replace("&quot;", "").replace("&#039;", "").contains('&'));
    }

    #[test]
    fn embedding_detection_ignores_original_category() {
        assert_eq!(detect_embedding("<p>hi</p>"), Embedding::Markup);
        assert_eq!(detect_embedding("p { color: red; }"), Embedding::Stylesheet);
        assert_eq!(detect_embedding("color: red"), Embedding::PlainText);
        assert_eq!(detect_embedding("<style>p { color: red; }</style>"), Embedding::Markup);
    }

    #[test]
    fn error_document_escapes_message() {
        let doc = render_error("bad <thing>");
        assert!(doc.as_str().contains("bad &lt;thing&gt;"));
        assert!(doc.as_str().contains("error-box"));
    }
}
