use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    app::load_page_data,
    domain::{AppSettings, CollectionState, HostData, SettingsForm},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::persistence::save_settings,
};

#[component]
pub fn SettingsPage() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let host = use_context::<Signal<HostData>>();
    let collection = use_context::<Signal<CollectionState>>();

    let mut form = use_signal(|| SettingsForm::from(&*settings.peek()));

    let on_apply = move |_| match form.with(SettingsForm::parse) {
        Ok(next) => {
            let reload = settings.peek().snapshot_path != next.snapshot_path;
            store_settings(settings, collection, toasts, next, "Saved settings.");
            if reload {
                spawn(load_page_data(settings, host, collection, toasts));
            }
        }
        Err(message) => push_toast(toasts, ToastKind::Error, message),
    };

    let on_reset = move |_| {
        let defaults = AppSettings::default();
        let reload = settings.peek().snapshot_path.is_some();
        form.set(SettingsForm::from(&defaults));
        store_settings(
            settings,
            collection,
            toasts,
            defaults,
            "Restored default settings.",
        );
        if reload {
            spawn(load_page_data(settings, host, collection, toasts));
        }
    };

    let on_reload = move |_| {
        info!("reloading collection data on request");
        push_toast(toasts, ToastKind::Info, "Reloading collection data...");
        spawn(load_page_data(settings, host, collection, toasts));
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::PANEL} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Sale Message" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    SettingsField {
                        label: "Mailing fee (SGD)",
                        value: form.with(|f| f.mailing_fee.clone()),
                        oninput: move |value| form.with_mut(|f| f.mailing_fee = value),
                    }
                    SettingsField {
                        label: "Contact number",
                        value: form.with(|f| f.contact_phone.clone()),
                        oninput: move |value| form.with_mut(|f| f.contact_phone = value),
                    }
                    SettingsField {
                        label: "Contact name",
                        value: form.with(|f| f.contact_name.clone()),
                        oninput: move |value| form.with_mut(|f| f.contact_name = value),
                    }
                }
            }

            section {
                class: "{theme::PANEL} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Data Sources" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    SettingsField {
                        label: "Price server URL",
                        value: form.with(|f| f.price_server_url.clone()),
                        oninput: move |value| form.with_mut(|f| f.price_server_url = value),
                    }
                    SettingsField {
                        label: "Collection snapshot (JSON, optional)",
                        value: form.with(|f| f.snapshot_path.clone()),
                        oninput: move |value| form.with_mut(|f| f.snapshot_path = value),
                    }
                    SettingsField {
                        label: "Image rotation (seconds)",
                        value: form.with(|f| f.rotation_interval_secs.clone()),
                        oninput: move |value| form.with_mut(|f| f.rotation_interval_secs = value),
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: theme::BTN_PRIMARY, onclick: on_apply, "Apply" }
                    button { class: theme::BTN_SECONDARY, onclick: on_reset, "Reset Defaults" }
                }
            }

            section {
                class: "{theme::PANEL} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Data Controls" }
                p { class: "mt-2 text-sm text-slate-400",
                    "Reload the collection to discard divisor edits and fetched live prices."
                }
                button { class: "mt-3 {theme::BTN_SECONDARY}", onclick: on_reload, "Reload Collection" }
            }
        }
    }
}

#[component]
fn SettingsField(label: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { class: theme::LABEL, "{label}" }
            input {
                class: "mt-1 w-full {theme::INPUT}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

fn store_settings(
    mut settings: Signal<AppSettings>,
    mut collection: Signal<CollectionState>,
    toasts: Signal<Vec<ToastMessage>>,
    next: AppSettings,
    success: &str,
) {
    let fee = next.mailing_fee;
    if let Err(err) = save_settings(&next) {
        warn!("failed to persist settings: {err}");
        push_toast(
            toasts,
            ToastKind::Warning,
            format!("Settings applied but not saved: {err}"),
        );
    } else {
        push_toast(toasts, ToastKind::Success, success.to_string());
    }
    settings.set(next);
    collection.with_mut(|state| state.set_mailing_fee(fee));
}
