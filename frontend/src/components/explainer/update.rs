//! Update function for the explainer component.
//!
//! Elm-style: receives the current `ExplainerComponent` state, the `Context`,
//! and a `Msg`, mutates the state and returns whether the view should
//! re-render.
//!
//! Key behaviors
//! - Submitting validates the trimmed input, then waits the configured delay
//!   (and the remote stub) before resolving. Only the latest submission is shown.
//! - Switching locale re-resolves the stored analysis without re-classifying.
//! - Editing the "try it" copy re-renders the preview, either at once or after
//!   a pause, according to `LivePreview`.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::config::LivePreview;
use common::requests::AnalyzeRequest;
use common::session::normalize_snippet;

use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{compute_md5, render_preview_document, show_toast};
use super::messages::Msg;
use super::remote::{request_remote_analysis, RemoteError};
use super::state::ExplainerComponent;

pub fn update(
    component: &mut ExplainerComponent,
    ctx: &Context<ExplainerComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateInput(value) => {
            component.input = value;
            true
        }
        Msg::Explain => {
            let snippet = match normalize_snippet(&component.input) {
                Ok(snippet) => snippet,
                Err(err) => {
                    component.error = Some(err);
                    open_top_sheet(component.error_sheet_ref.clone());
                    return true;
                }
            };

            component.loading = true;
            let request = component.requests.issue();
            let delay = component.config.analysis_delay_ms;
            let enabled = component.config.remote_analysis;
            let locale = component.session.locale();
            let link = ctx.link().clone();

            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                let analyze = AnalyzeRequest {
                    snippet: snippet.clone(),
                    locale,
                };
                let remote = match request_remote_analysis(analyze, enabled).await {
                    Ok(explanation) => Some(explanation),
                    Err(RemoteError::Disabled) => None,
                    Err(RemoteError::Screened(reason)) => {
                        gloo_console::warn!(format!("snippet not sent for analysis: {}", reason));
                        show_toast(locale.ui().remote_skipped);
                        None
                    }
                    Err(RemoteError::Unavailable(reason)) => {
                        gloo_console::log!(format!("remote analysis unavailable: {}", reason));
                        None
                    }
                    Err(RemoteError::Transport(err)) => {
                        gloo_console::error!(format!("remote analysis failed: {}", err));
                        None
                    }
                };
                link.send_message(Msg::AnalysisReady {
                    request,
                    snippet,
                    remote,
                });
            });
            true
        }
        Msg::AnalysisReady {
            request,
            snippet,
            remote,
        } => {
            if !component.requests.is_current(request) {
                return false;
            }
            component.loading = false;
            match component.session.explain(&snippet, remote) {
                Ok(analysis) => {
                    let example = analysis.explanation.example.clone();
                    seed_try_it(component, example);
                }
                Err(err) => {
                    component.error = Some(err);
                    open_top_sheet(component.error_sheet_ref.clone());
                }
            }
            true
        }
        Msg::SetLocale(locale) => {
            if locale == component.session.locale() {
                return false;
            }
            if let Some(analysis) = component.session.switch_locale(locale) {
                let example = analysis.explanation.example.clone();
                seed_try_it(component, example);
            }
            true
        }
        Msg::EditTryIt(text) => {
            component.try_it = text;
            match component.config.live_preview {
                LivePreview::Immediate => refresh_preview(component),
                LivePreview::Debounced { millis } => {
                    let generation = component.preview_generations.issue();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        TimeoutFuture::new(millis).await;
                        link.send_message(Msg::RefreshPreview(generation));
                    });
                }
            }
            true
        }
        Msg::RefreshPreview(generation) => {
            if !component.preview_generations.is_current(generation) {
                return false;
            }
            refresh_preview(component);
            true
        }
        Msg::ResetTryIt => {
            let Some(example) = component
                .session
                .last()
                .map(|analysis| analysis.explanation.example.clone())
            else {
                return false;
            };
            seed_try_it(component, example);
            true
        }
        Msg::AutoResize => {
            component.resize_textarea();
            false
        }
        Msg::DismissError => {
            component.error = None;
            close_top_sheet(component.error_sheet_ref.clone());
            true
        }
        Msg::NewSnippet => {
            if component.start_new_snippet() {
                close_top_sheet(component.error_sheet_ref.clone());
            }
            true
        }
    }
}

/// Replaces the "try it" copy with a fresh `example` and re-renders the preview.
fn seed_try_it(component: &mut ExplainerComponent, example: String) {
    component.example_md5 = Some(compute_md5(&example));
    component.try_it = example;
    refresh_preview(component);
}

/// The visible-artifact flag comes from the last explanation; the embedding is
/// re-detected from the edited text.
fn refresh_preview(component: &mut ExplainerComponent) {
    let visible = component
        .session
        .last()
        .is_some_and(|analysis| analysis.explanation.produces_visible_artifact);
    component.preview =
        render_preview_document(&component.try_it, visible, component.session.locale());
}
