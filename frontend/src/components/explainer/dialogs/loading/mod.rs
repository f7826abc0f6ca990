use yew::prelude::*;

use crate::components::explainer::ExplainerComponent;

/// Full-page overlay shown while an analysis is pending.
pub fn loading_overlay(component: &ExplainerComponent) -> Html {
    if !component.loading {
        return html! {};
    }
    let ui = component.session.locale().ui();

    html! {
        <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;display:flex;align-items:center;justify-content:center;background:rgba(255,255,255,0.85);z-index:9998;">
            <div style="background:transparent;padding:24px;border-radius:8px;display:flex;flex-direction:column;align-items:center;">
                <div class="spin" style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"></div>
                <div style="margin-top:12px;color:#000;">{ ui.analyzing_code }</div>
            </div>
            <style>{r#"
                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
            "#}</style>
        </div>
    }
}
