use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, id: Option<String>) -> Element {
    rsx! {
        div {
            class: "{theme::PANEL} p-4 shadow-sm",
            h3 { class: theme::LABEL, "{title}" }
            p { id, class: "mt-2 text-2xl font-semibold text-slate-100", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::TEXT_MUTED}", "{desc}" }
            }
        }
    }
}
