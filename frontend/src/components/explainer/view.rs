//! View rendering for the explainer component.
//!
//! Before the first analysis the page shows a single large input. Afterwards
//! the input collapses into a compact strip above the result cards: the code,
//! its function, what happened, tips, an editable example and the sandboxed
//! visual result. Every label comes from the active locale's `UiText`.

use web_sys::{HtmlTextAreaElement, InputEvent, KeyboardEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::analysis::Analysis;

use super::dialogs::error::error_dialog;
use super::dialogs::loading::loading_overlay;
use super::helpers::compute_md5;
use super::messages::Msg;
use super::state::ExplainerComponent;
use crate::components::locale::LocaleSelector;
use crate::results_grid::ResultsGrid;

pub fn view(component: &ExplainerComponent, ctx: &Context<ExplainerComponent>) -> Html {
    let link = ctx.link();
    let ui = component.session.locale().ui();

    html! {
        <div class="explainer-root">
            <header class="app-header">
                <h1>{ ui.app_title }</h1>
                <LocaleSelector
                    current={component.session.locale()}
                    on_select={link.callback(Msg::SetLocale)}
                />
            </header>

            {
                match component.session.last() {
                    Some(analysis) => html! {
                        <>
                            { build_compact_input(component, link) }
                            { build_results(component, analysis, link) }
                        </>
                    },
                    None => build_input_section(component, link),
                }
            }

            { loading_overlay(component) }
            { error_dialog(component, link) }
        </div>
    }
}

fn input_handlers(link: &Scope<ExplainerComponent>) -> (Callback<InputEvent>, Callback<KeyboardEvent>) {
    let oninput = link.callback(|e: InputEvent| {
        Msg::UpdateInput(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });
    let onkeydown = link.batch_callback(|e: KeyboardEvent| {
        if (e.ctrl_key() || e.meta_key()) && e.key() == "Enter" {
            e.prevent_default();
            vec![Msg::Explain]
        } else {
            vec![]
        }
    });
    (oninput, onkeydown)
}

fn build_input_section(component: &ExplainerComponent, link: &Scope<ExplainerComponent>) -> Html {
    let ui = component.session.locale().ui();
    let (oninput, onkeydown) = input_handlers(link);

    html! {
        <section class="input-section">
            <h2>{ ui.enter_your_code }</h2>
            <textarea
                class="code-input"
                rows="12"
                spellcheck="false"
                placeholder={ui.placeholder_text}
                value={component.input.clone()}
                {oninput}
                {onkeydown}
            />
            <button
                class="explain-button"
                disabled={component.loading}
                onclick={link.callback(|_| Msg::Explain)}
            >
                { ui.explain_code }
            </button>
        </section>
    }
}

fn build_compact_input(component: &ExplainerComponent, link: &Scope<ExplainerComponent>) -> Html {
    let ui = component.session.locale().ui();
    let (oninput, onkeydown) = input_handlers(link);

    html! {
        <section class="compact-input">
            <textarea
                class="code-input compact"
                rows="3"
                spellcheck="false"
                placeholder={ui.placeholder_text}
                value={component.input.clone()}
                {oninput}
                {onkeydown}
            />
            <div class="compact-actions">
                <button
                    class="explain-button"
                    disabled={component.loading}
                    onclick={link.callback(|_| Msg::Explain)}
                >
                    { ui.explain }
                </button>
                <button class="text-button" onclick={link.callback(|_| Msg::NewSnippet)}>
                    { ui.new_snippet }
                </button>
            </div>
        </section>
    }
}

fn build_results(
    component: &ExplainerComponent,
    analysis: &Analysis,
    link: &Scope<ExplainerComponent>,
) -> Html {
    let ui = component.session.locale().ui();
    let explanation = &analysis.explanation;

    html! {
        <ResultsGrid columns={2}>
            { card(ui.the_code, html! { <pre class="code-block">{ analysis.snippet.clone() }</pre> }) }
            { card(ui.function, html! { <p class="summary">{ explanation.summary.clone() }</p> }) }
            { card(ui.what_happened, html! { <p>{ explanation.narrative.clone() }</p> }) }
            {
                card(ui.tips, html! {
                    <ul class="tips">
                        { for explanation.tips.iter().map(|tip| html! { <li>{ tip.clone() }</li> }) }
                    </ul>
                })
            }
            { card(ui.try_it_yourself, build_try_it(component, link)) }
            {
                card(ui.visual_result, html! {
                    <iframe
                        class="preview-frame"
                        title={ui.visual_result}
                        sandbox="allow-scripts"
                        srcdoc={component.preview.clone()}
                    />
                })
            }
        </ResultsGrid>
    }
}

fn build_try_it(component: &ExplainerComponent, link: &Scope<ExplainerComponent>) -> Html {
    let ui = component.session.locale().ui();
    let modified = component.example_md5.as_deref() != Some(compute_md5(&component.try_it).as_str());

    html! {
        <div class="try-it">
            <textarea
                class="code-input try-it-editor"
                ref={component.try_it_ref.clone()}
                spellcheck="false"
                value={component.try_it.clone()}
                oninput={link.batch_callback(|e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    vec![Msg::EditTryIt(value), Msg::AutoResize]
                })}
            />
            <div class="try-it-actions">
                {
                    if modified {
                        html! { <span class="modified-marker" title={ui.modified}>{ "●" }</span> }
                    } else {
                        html! {}
                    }
                }
                <button
                    class="text-button"
                    disabled={!modified}
                    onclick={link.callback(|_| Msg::ResetTryIt)}
                >
                    { ui.reset_example }
                </button>
            </div>
        </div>
    }
}

fn card(title: &'static str, body: Html) -> Html {
    html! {
        <div class="result-card">
            <h3>{ title }</h3>
            { body }
        </div>
    }
}
