use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::{
    domain::{AppSettings, CollectionState, DivisorOutcome, HostData},
    infra::{clipboard::copy_text, live_price::LivePriceClient},
    ui::{
        components::{
            bar_chart::BarChart,
            card_table::{CardRow, CardTable},
            kpi_card::KpiCard,
            manual_copy::ManualCopyPanel,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn CollectionPage() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let host = use_context::<Signal<HostData>>();
    let mut collection = use_context::<Signal<CollectionState>>();
    let mut manual_copy = use_signal(|| None::<String>);

    let (rows, subtotal, mailing_total, mailing, glyph) = collection.with(|state| {
        let rows = state
            .rows()
            .iter()
            .map(|row| CardRow::new(row, state.live_price(&row.id)))
            .collect::<Vec<_>>();
        (
            rows,
            state.subtotal_label(),
            state.total_with_mailing_label(),
            state.mailing(),
            state.sort_state().glyph(),
        )
    });
    let card_count = rows.len();
    let (chart_labels, chart_values) =
        host.with(|data| (data.card_names.clone(), data.card_values.clone()));
    let fee_label = format!("Include mailing fee (${:.2})", mailing.fee);

    let on_generate = move |_| {
        let message = collection.with(|state| state.sale_message(&settings.peek().contact));
        spawn(async move {
            match copy_text(&message).await {
                Ok(()) => push_toast(
                    toasts,
                    ToastKind::Success,
                    "Sale message copied to clipboard!",
                ),
                Err(err) => {
                    warn!("falling back to manual copy: {err}");
                    manual_copy.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Cards".to_string(),
                    value: card_count.to_string(),
                    description: Some("Rows in your collection".to_string()),
                    id: None,
                }
                KpiCard {
                    title: "Subtotal".to_string(),
                    value: subtotal,
                    description: Some("Sum of every row's total".to_string()),
                    id: Some("subtotalPriceSgd".to_string()),
                }
                if let Some(total) = mailing_total {
                    KpiCard {
                        title: "With Mailing".to_string(),
                        value: total,
                        description: None,
                        id: Some("totalWithMailing".to_string()),
                    }
                }
            }

            section { class: "flex flex-wrap items-center justify-between gap-4",
                label { class: "flex items-center gap-2 text-sm text-slate-300",
                    input {
                        id: "mailingFeeCheckbox",
                        r#type: "checkbox",
                        checked: mailing.enabled,
                        onchange: move |evt| {
                            let enabled = evt.checked();
                            collection.with_mut(|state| state.set_mailing(enabled));
                        },
                    }
                    "{fee_label}"
                }
                button {
                    id: "generateMessageBtn",
                    class: theme::BTN_PRIMARY,
                    onclick: on_generate,
                    "Generate Sale Message"
                }
            }

            CardTable {
                rows,
                sort_glyph: glyph,
                on_sort: move |_| collection.with_mut(CollectionState::activate_sort),
                on_divisor: move |(row_id, input): (String, String)| {
                    let outcome = collection.with_mut(|state| state.set_divisor(&row_id, &input));
                    if outcome == Some(DivisorOutcome::Recomputed) {
                        debug!("row {row_id} divided by {input}");
                    }
                },
                on_live_price: move |row_id: String| request_live_price(collection, settings, row_id),
            }

            BarChart {
                title: "Card Values in Your Collection".to_string(),
                series_label: "Current Card Value (SGD)".to_string(),
                labels: chart_labels,
                values: chart_values,
            }

            if let Some(message) = manual_copy() {
                ManualCopyPanel {
                    message,
                    on_close: move |_| manual_copy.set(None),
                }
            }
        }
    }
}

/// Starts one lookup for the row; repeat clicks are ignored once it left `Idle`.
fn request_live_price(
    mut collection: Signal<CollectionState>,
    settings: Signal<AppSettings>,
    row_id: String,
) {
    let Some(key) = collection.with_mut(|state| state.begin_live_price(&row_id)) else {
        return;
    };
    let base = settings.peek().price_server_url.clone();

    spawn(async move {
        let result = match LivePriceClient::new(&base) {
            Ok(client) => client.get_live_price(&key).await,
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            warn!("live price lookup for {key} failed: {err}");
        }
        collection.with_mut(|state| state.resolve_live_price(&row_id, result));
    });
}
