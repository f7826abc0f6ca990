//! Locale picker shown in the page header.
//!
//! A button displays the active locale code; clicking it opens a small menu
//! listing every `Locale`. Picking one closes the menu and notifies the parent.

use common::model::locale::Locale;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocaleSelectorProps {
    pub current: Locale,
    pub on_select: Callback<Locale>,
}

pub enum LocaleMsg {
    ToggleMenu,
    Pick(Locale),
}

pub struct LocaleSelector {
    open: bool,
}

impl Component for LocaleSelector {
    type Message = LocaleMsg;
    type Properties = LocaleSelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { open: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LocaleMsg::ToggleMenu => {
                self.open = !self.open;
                true
            }
            LocaleMsg::Pick(locale) => {
                self.open = false;
                ctx.props().on_select.emit(locale);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let current = ctx.props().current;

        html! {
            <div class="locale-selector" style="position:relative;">
                <button class="locale-button" onclick={link.callback(|_| LocaleMsg::ToggleMenu)}>
                    { current.to_string() }
                </button>
                {
                    if self.open {
                        html! {
                            <ul class="locale-menu" style="position:absolute;right:0;top:100%;margin:4px 0 0 0;padding:4px 0;list-style:none;background:#fff;border:1px solid #ddd;border-radius:4px;box-shadow:0 2px 8px rgba(0,0,0,0.15);z-index:100;">
                                { for Locale::ALL.iter().copied().map(|locale| {
                                    let class = if locale == current { "locale-option active" } else { "locale-option" };
                                    html! {
                                        <li
                                            class={class}
                                            style="padding:6px 16px;cursor:pointer;"
                                            onclick={link.callback(move |_| LocaleMsg::Pick(locale))}
                                        >
                                            { locale.to_string() }
                                        </li>
                                    }
                                }) }
                            </ul>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
