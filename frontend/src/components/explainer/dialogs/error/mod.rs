use common::error::ExplainError;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::explainer::Msg::DismissError;
use crate::components::explainer::ExplainerComponent;
use crate::tops_sheet::top_sheet::TopSheet;

/// Sheet reporting a rejected submission. Always mounted so it can slide in.
pub fn error_dialog(component: &ExplainerComponent, link: &Scope<ExplainerComponent>) -> Html {
    let ui = component.session.locale().ui();
    let message = match component.error {
        Some(ExplainError::EmptySnippet) => ui.empty_code_error,
        None => "",
    };

    html! {
        <TopSheet node_ref={component.error_sheet_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;display:flex;justify-content:center;z-index:9999;">
                <div class="error-card" style="margin-top:24px;padding:16px 24px;background:#fff;border-left:4px solid #d32f2f;border-radius:4px;box-shadow:0 4px 16px rgba(0,0,0,0.2);min-width:280px;">
                    <h3 style="margin:0 0 8px 0;color:#d32f2f;">{ ui.error_title }</h3>
                    <p style="margin:0 0 12px 0;">{ message }</p>
                    <button class="text-button" onclick={link.callback(|_| DismissError)}>
                        { ui.dismiss }
                    </button>
                </div>
            </div>
        </TopSheet>
    }
}
