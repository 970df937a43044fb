use dioxus::prelude::*;

use crate::ui::theme;

/// Shown when the clipboard refuses the sale message.
#[component]
pub fn ManualCopyPanel(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-slate-950/80 px-4",
            div {
                class: "w-full max-w-lg space-y-4 {theme::PANEL} bg-slate-900 p-6 shadow-2xl",
                h3 { class: "text-lg font-semibold text-rose-200", "Failed to copy the message" }
                p { class: "text-sm text-slate-400", "Please copy it manually:" }
                textarea {
                    class: "h-40 w-full {theme::INPUT}",
                    readonly: true,
                    value: "{message}",
                }
                div { class: "flex justify-end",
                    button {
                        class: theme::BTN_SECONDARY,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
