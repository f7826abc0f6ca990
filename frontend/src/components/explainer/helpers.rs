//! Utility functions for the explainer component.
//!
//! - **User Feedback**: temporary "toast" notifications.
//! - **Hashing**: MD5 fingerprints for the "modified" marker on the try-it editor.
//! - **Preview**: building the sandboxed document, falling back to an error
//!   document when rendering fails.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::AttrValue;

use common::model::locale::Locale;
use common::preview::{render, render_error};

/// Shows `message` at the bottom of the page for three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Renders `snippet` into a preview document for the frame's `srcdoc`.
///
/// A rendering failure is logged and replaced by the localized error document.
pub fn render_preview_document(
    snippet: &str,
    produces_visible_artifact: bool,
    locale: Locale,
) -> AttrValue {
    match render(snippet, produces_visible_artifact, locale) {
        Ok(doc) => AttrValue::from(doc.into_string()),
        Err(err) => {
            gloo_console::error!(format!("preview rendering failed: {}", err));
            AttrValue::from(render_error(locale.ui().preview_error).into_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_changes_with_any_edit() {
        let seeded = compute_md5("<p>Hello</p>");
        assert_eq!(seeded, compute_md5("<p>Hello</p>"));
        assert_ne!(seeded, compute_md5("<p>Hello!</p>"));
        assert_eq!(seeded.len(), 32);
    }
}
