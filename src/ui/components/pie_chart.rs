use dioxus::prelude::*;

use crate::domain::chart::{PieChart as PieGeometry, PIE_CENTER, PIE_RADIUS};
use crate::domain::row::format_amount;
use crate::ui::theme;

#[component]
pub fn PieChart(title: String, labels: Vec<String>, values: Vec<f64>) -> Element {
    let chart = PieGeometry::new(&labels, &values);
    let size = PIE_CENTER * 2.0;
    let view_box = format!("0 0 {size} {size}");

    rsx! {
        section {
            id: "expenseChart",
            class: "{theme::PANEL} p-4",
            h3 { class: "mb-3 text-sm font-semibold text-slate-200", "{title}" }
            if chart.is_empty() {
                p { class: "py-10 text-center text-sm {theme::TEXT_MUTED}", "No expenses recorded yet." }
            } else {
                div { class: "flex flex-wrap items-center gap-6",
                    svg {
                        class: "h-64 w-64",
                        view_box: "{view_box}",
                        for slice in chart.slices.iter() {
                            if slice.is_full_circle() {
                                circle {
                                    class: "chart-slice",
                                    cx: "{PIE_CENTER}",
                                    cy: "{PIE_CENTER}",
                                    r: "{PIE_RADIUS}",
                                    fill: slice.color,
                                }
                            } else {
                                path { class: "chart-slice", d: slice.path(), fill: slice.color }
                            }
                        }
                    }
                    ul { class: "space-y-1 text-xs text-slate-300",
                        for slice in chart.slices.iter() {
                            li { class: "flex items-center gap-2",
                                span {
                                    class: "inline-block h-3 w-3 rounded-sm",
                                    style: "background-color: {slice.color}",
                                }
                                span { "{slice.label}" }
                                span { class: theme::TEXT_MUTED,
                                    {format!("${} ({:.1}%)", format_amount(slice.value), slice.percent)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
