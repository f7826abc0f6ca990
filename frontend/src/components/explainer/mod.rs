//! Code explainer: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ExplainerProps`, `ExplainerComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Log readiness once on first render.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod remote;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ExplainerProps;
pub use state::ExplainerComponent;

impl Component for ExplainerComponent {
    type Message = Msg;
    type Properties = ExplainerProps;

    fn create(ctx: &Context<Self>) -> Self {
        ExplainerComponent::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            gloo_console::log!(format!(
                "code explainer ready (locale {})",
                self.session.locale()
            ));
        }
    }
}
