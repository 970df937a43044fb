use dioxus::prelude::*;

use crate::domain::LivePriceState;
use crate::ui::theme;

#[component]
pub fn LivePriceCell(state: LivePriceState, on_fetch: EventHandler<()>) -> Element {
    let fetching = matches!(state, LivePriceState::Fetching);
    let lines = state.lines();
    rsx! {
        div {
            class: "live-prices-container text-xs",
            if state.button_visible() {
                button {
                    class: "live-price-btn {theme::BTN_SMALL}",
                    disabled: fetching,
                    onclick: move |_| on_fetch.call(()),
                    "{state.button_label()}"
                }
            }
            if !lines.is_empty() {
                ul { class: "space-y-0.5",
                    for line in lines {
                        li { class: "font-semibold text-slate-200", "{line}" }
                    }
                }
            }
            if let Some(message) = state.error_text() {
                p { class: "text-danger", "{message}" }
            }
        }
    }
}
