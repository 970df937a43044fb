use dioxus::prelude::*;

use crate::domain::chart::{
    BarChart as BarGeometry, BAR_AXIS_GUTTER, BAR_LABEL_GUTTER, BAR_VIEW_HEIGHT, BAR_VIEW_WIDTH,
};
use crate::ui::theme;

#[component]
pub fn BarChart(title: String, series_label: String, labels: Vec<String>, values: Vec<f64>) -> Element {
    let chart = BarGeometry::new(&labels, &values);
    let view_box = format!("0 0 {BAR_VIEW_WIDTH} {BAR_VIEW_HEIGHT}");
    let label_y = BAR_VIEW_HEIGHT - BAR_LABEL_GUTTER + 16.0;
    let tick_x = BAR_AXIS_GUTTER - 6.0;

    rsx! {
        section {
            id: "collectionValueChart",
            class: "{theme::PANEL} p-4",
            header { class: "mb-3 flex items-center justify-between",
                h3 { class: "text-sm font-semibold text-slate-200", "{title}" }
                span { class: "flex items-center gap-2 text-xs {theme::TEXT_MUTED}",
                    span { class: "inline-block h-2 w-4 rounded-sm bg-teal-400/60" }
                    "{series_label}"
                }
            }
            if chart.is_empty() {
                p { class: "py-10 text-center text-sm {theme::TEXT_MUTED}", "No card values to chart yet." }
            } else {
                svg {
                    class: "h-72 w-full",
                    view_box: "{view_box}",
                    preserve_aspect_ratio: "none",
                    for tick in chart.ticks.iter() {
                        g {
                            line {
                                class: "chart-grid",
                                x1: "{BAR_AXIS_GUTTER}",
                                x2: "{BAR_VIEW_WIDTH}",
                                y1: "{tick.y}",
                                y2: "{tick.y}",
                            }
                            text {
                                class: "chart-axis-label",
                                x: "{tick_x}",
                                y: tick.label_y(),
                                text_anchor: "end",
                                {format!("{:.0}", tick.value)}
                            }
                        }
                    }
                    for bar in chart.bars.iter() {
                        g {
                            rect {
                                class: "chart-bar",
                                x: "{bar.x}",
                                y: "{bar.y}",
                                width: "{bar.width}",
                                height: "{bar.height}",
                            }
                            text {
                                class: "chart-axis-label",
                                x: bar.center_x(),
                                y: "{label_y}",
                                text_anchor: "middle",
                                "{bar.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
