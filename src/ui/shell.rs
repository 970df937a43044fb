use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::NavState;
use crate::util::version::{version_label, APP_NAME};

const NAV_LINKS: [(&str, Route); 4] = [
    ("Home", Route::Home {}),
    ("Collection", Route::Collection {}),
    ("Expenses", Route::Expenses {}),
    ("Settings", Route::Settings {}),
];

#[component]
pub fn Shell(children: Element) -> Element {
    let mut menu = use_signal(NavState::default);
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let state = menu();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between",
                    h1 { class: "text-xl font-semibold tracking-tight text-amber-300", "{APP_NAME}" }
                    button {
                        id: "hamburger-menu",
                        class: state.hamburger_class(),
                        aria_label: "Toggle navigation",
                        aria_expanded: state.is_open(),
                        onclick: move |_| menu.with_mut(NavState::toggle),
                        span { class: "bar" }
                    }
                }
            }

            div {
                id: "overlay",
                class: state.overlay_class(),
                aria_hidden: !state.is_open(),
                nav {
                    ul {
                        for (idx, (label, route)) in NAV_LINKS.into_iter().enumerate() {
                            NavItem {
                                key: "{label}",
                                class: state.item_class(idx),
                                active: route == current_route,
                                label,
                                // Choosing a destination also closes the overlay.
                                onclick: move |_| {
                                    menu.with_mut(NavState::toggle);
                                    nav.push(route.clone());
                                },
                            }
                        }
                    }
                }
            }

            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 pb-8 text-xs text-slate-600",
                "{APP_NAME} {version_label()}"
            }
        }
    }
}

#[component]
fn NavItem(class: String, active: bool, label: &'static str, onclick: EventHandler<()>) -> Element {
    let text_class = if active {
        "text-amber-300"
    } else {
        "text-slate-100 hover:text-amber-200"
    };

    rsx! {
        li {
            class: "{class}",
            button {
                class: "{text_class}",
                onclick: move |_| onclick.call(()),
                "{label}"
            }
        }
    }
}
