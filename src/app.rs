use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    domain::{AppSettings, CollectionState, HostData},
    infra::host::load_host_data,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CollectionPage, ExpensesPage, HomePage, SettingsPage},
        shell::Shell,
    },
    util::{assets, persistence::load_settings},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/collection")]
    Collection {},
    #[route("/expenses")]
    Expenses {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let settings = use_signal(load_settings);
    use_context_provider(|| settings);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let host = use_signal(HostData::default);
    use_context_provider(|| host);

    // Built once the host data arrives; every table handler goes through it.
    let collection = use_signal(CollectionState::default);
    use_context_provider(|| collection);

    let _page_data = use_future(move || load_page_data(settings, host, collection, toasts));

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Loads host data and rebuilds the collection table from it.
pub async fn load_page_data(
    settings: Signal<AppSettings>,
    mut host: Signal<HostData>,
    mut collection: Signal<CollectionState>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let snapshot = settings.peek().clone();
    match load_host_data(&snapshot).await {
        Ok(data) => {
            let rows = data.table_rows();
            let skipped = data.rows.len() - rows.len();
            info!("collection ready with {} rows", rows.len());
            if skipped > 0 {
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    format!("Skipped {skipped} card rows with unreadable prices."),
                );
            }
            collection.set(CollectionState::new(rows, snapshot.mailing_fee));
            host.set(data);
        }
        Err(err) => {
            warn!("failed to load collection data: {err}");
            push_toast(
                toasts,
                ToastKind::Error,
                format!("Failed to load collection data: {err}"),
            );
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Collection() -> Element {
    rsx! { Shell { CollectionPage {} } }
}

#[component]
pub fn Expenses() -> Element {
    rsx! { Shell { ExpensesPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
