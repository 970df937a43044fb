use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{AppSettings, CollectionState, HostData},
    ui::{components::image_rotator::ImageRotator, theme},
};

#[component]
pub fn HomePage() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let host = use_context::<Signal<HostData>>();
    let collection = use_context::<Signal<CollectionState>>();
    let nav = use_navigator();

    let images = host.with(|data| data.rotating_images.clone());
    let interval = settings.with(AppSettings::rotation_interval);
    let (card_count, subtotal) =
        collection.with(|state| (state.rows().len(), state.subtotal_label()));

    rsx! {
        div { class: "grid items-center gap-10 md:grid-cols-2",
            section { class: "space-y-4",
                h2 { class: theme::HEADING, "Your trading card ledger" }
                p { class: theme::TEXT_MUTED,
                    "{card_count} cards tracked, worth {subtotal} at your recorded prices."
                }
                div { class: "flex gap-3",
                    button {
                        class: theme::BTN_PRIMARY,
                        onclick: move |_| { nav.push(Route::Collection {}); },
                        "View Collection"
                    }
                    button {
                        class: theme::BTN_SECONDARY,
                        onclick: move |_| { nav.push(Route::Expenses {}); },
                        "Expenses"
                    }
                }
            }
            ImageRotator { images, interval }
        }
    }
}
