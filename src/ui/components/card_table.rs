use dioxus::prelude::*;

use super::live_price_cell::LivePriceCell;
use crate::domain::{LivePriceState, Row};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct CardRow {
    pub id: String,
    pub name: String,
    pub set_name: Option<String>,
    pub card_number: Option<String>,
    pub rarity: Option<String>,
    pub quantity: u32,
    pub original_price: String,
    pub takes_divisor: bool,
    pub divisor_input: String,
    pub unit_price: String,
    pub total: String,
    pub live_price: LivePriceState,
}

impl CardRow {
    pub fn new(row: &Row, live_price: LivePriceState) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            set_name: row.set_name.clone(),
            card_number: row.card_number.clone(),
            rarity: row.rarity.clone(),
            quantity: row.quantity,
            original_price: row.original_price_display(),
            takes_divisor: row.currency.is_foreign(),
            divisor_input: row.divisor_input().to_string(),
            unit_price: row.unit_price_display().to_string(),
            total: row.total_display(),
            live_price,
        }
    }
}

#[component]
pub fn CardTable(
    rows: Vec<CardRow>,
    sort_glyph: &'static str,
    on_sort: EventHandler<()>,
    on_divisor: EventHandler<(String, String)>,
    on_live_price: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: theme::TABLE_CONTAINER,
            table {
                id: "cardTable",
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: theme::TABLE_HEADER,
                    tr {
                        th { class: "px-4 py-3 font-medium", "Card" }
                        th { class: "px-4 py-3 font-medium", "Set" }
                        th { class: "px-4 py-3 font-medium", "Number" }
                        th { class: "px-4 py-3 font-medium", "Rarity" }
                        th { class: "px-4 py-3 font-medium text-right", "Qty" }
                        th { class: "px-4 py-3 font-medium text-right", "Price Paid" }
                        th { class: "px-4 py-3 font-medium text-right", "Price per Unit (¥)" }
                        th { class: "px-4 py-3 font-medium", "Live Price" }
                        th {
                            id: "sortPriceSgd",
                            class: "sortable-header px-4 py-3 font-medium text-right hover:text-slate-300",
                            onclick: move |_| on_sort.call(()),
                            "Total (SGD) "
                            span { id: "sortIcon", "{sort_glyph}" }
                        }
                    }
                }
                tbody {
                    class: theme::TABLE_DIVIDER,
                    for row in rows {
                        CardRowView {
                            key: "{row.id}",
                            row,
                            on_divisor,
                            on_live_price,
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::TEXT_MUTED}",
                                colspan: "9",
                                "No cards in this collection yet."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CardRowView(
    row: CardRow,
    on_divisor: EventHandler<(String, String)>,
    on_live_price: EventHandler<String>,
) -> Element {
    let divisor_id = row.id.clone();
    let fetch_id = row.id.clone();
    rsx! {
        tr {
            class: "hover:bg-slate-800/40",
            td { class: "px-4 py-3 font-medium text-slate-100", "{row.name}" }
            td { class: "px-4 py-3 text-slate-400", {row.set_name.clone().unwrap_or_default()} }
            td { class: "px-4 py-3 text-slate-400", {row.card_number.clone().unwrap_or_default()} }
            td { class: "px-4 py-3 text-slate-400", {row.rarity.clone().unwrap_or_default()} }
            td { class: "px-4 py-3 text-right text-slate-300", "{row.quantity}" }
            td { class: "px-4 py-3 text-right text-slate-300", "{row.original_price}" }
            td {
                class: "px-4 py-3 text-right text-slate-300",
                if row.takes_divisor {
                    div { class: "flex items-center justify-end gap-2",
                        span { class: "text-xs {theme::TEXT_MUTED}", "÷" }
                        input {
                            class: "divisor-input-yen {theme::INPUT_SMALL}",
                            r#type: "number",
                            step: "any",
                            min: "0",
                            placeholder: "rate",
                            value: "{row.divisor_input}",
                            oninput: move |evt: FormEvent| on_divisor.call((divisor_id.clone(), evt.value())),
                        }
                        span { class: "result-span-yen w-14 text-xs", "{row.unit_price}" }
                    }
                } else {
                    span { class: theme::TEXT_MUTED, "—" }
                }
            }
            td {
                class: "px-4 py-3",
                LivePriceCell {
                    state: row.live_price.clone(),
                    on_fetch: move |_| on_live_price.call(fetch_id.clone()),
                }
            }
            td { class: "total-price-sgd-cell px-4 py-3 text-right font-semibold text-slate-100", "{row.total}" }
        }
    }
}
