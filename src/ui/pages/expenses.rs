use dioxus::prelude::*;

use crate::{
    domain::{
        subtotal::{format_sgd_total, sum_amounts},
        HostData,
    },
    ui::{components::pie_chart::PieChart, theme},
};

#[component]
pub fn ExpensesPage() -> Element {
    let host = use_context::<Signal<HostData>>();
    let (labels, values) =
        host.with(|data| (data.expense_labels.clone(), data.expense_values.clone()));
    let total = sum_amounts(values.iter().copied().filter(|v| v.is_finite() && *v > 0.0));
    let lines = labels
        .iter()
        .cloned()
        .zip(values.iter().copied())
        .collect::<Vec<_>>();

    rsx! {
        div { class: "grid gap-6 lg:grid-cols-2",
            PieChart {
                title: "Expense Breakdown".to_string(),
                labels,
                values,
            }
            section { class: "{theme::PANEL} p-4",
                h3 { class: "mb-3 text-sm font-semibold text-slate-200", "Categories" }
                if lines.is_empty() {
                    p { class: theme::TEXT_MUTED, "No expenses recorded." }
                } else {
                    ul { class: "space-y-2 text-sm",
                        for (label, value) in lines {
                            li { class: "flex justify-between",
                                span { class: "text-slate-300", "{label}" }
                                span { class: "text-slate-100", "{format_sgd_total(value)}" }
                            }
                        }
                    }
                    p { class: "mt-4 flex justify-between border-t border-slate-800 pt-3 text-sm font-semibold",
                        span { "Total" }
                        span { "{format_sgd_total(total)}" }
                    }
                }
            }
        }
    }
}
