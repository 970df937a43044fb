//! SVG geometry for the valuation bar chart and the expense pie chart.
//!
//! Both charts are computed once from the label/value arrays supplied by the
//! host page and rendered as plain SVG. Missing arrays give empty charts.

use std::f64::consts::PI;

pub const BAR_VIEW_WIDTH: f64 = 640.0;
pub const BAR_VIEW_HEIGHT: f64 = 320.0;
/// Left gutter reserved for axis labels.
pub const BAR_AXIS_GUTTER: f64 = 48.0;
/// Bottom gutter reserved for category labels.
pub const BAR_LABEL_GUTTER: f64 = 40.0;
pub const BAR_TICKS: usize = 5;

pub const PIE_RADIUS: f64 = 120.0;
pub const PIE_CENTER: f64 = 130.0;

const PALETTE: [&str; 8] = [
    "#4bc0c0", "#ff6384", "#36a2eb", "#ffce56", "#9966ff", "#ff9f40", "#8dd17e", "#c9cbcf",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn pair_series(labels: &[String], values: &[f64]) -> Vec<(String, f64)> {
    labels
        .iter()
        .zip(values.iter())
        .map(|(label, value)| {
            let value = if value.is_finite() && *value > 0.0 {
                *value
            } else {
                0.0
            };
            (label.clone(), value)
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

impl Tick {
    /// Baseline for the axis label, nudged down to sit on the grid line.
    pub fn label_y(&self) -> f64 {
        self.y + 4.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
    pub axis_max: f64,
}

impl BarChart {
    pub fn new(labels: &[String], values: &[f64]) -> Self {
        let series = pair_series(labels, values);
        let max = series.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        let axis_max = nice_ceiling(max);
        let plot_height = BAR_VIEW_HEIGHT - BAR_LABEL_GUTTER;
        let plot_width = BAR_VIEW_WIDTH - BAR_AXIS_GUTTER;

        let slot = if series.is_empty() {
            0.0
        } else {
            plot_width / series.len() as f64
        };
        let bars = series
            .into_iter()
            .enumerate()
            .map(|(idx, (label, value))| {
                let height = value / axis_max * plot_height;
                Bar {
                    label,
                    value,
                    x: BAR_AXIS_GUTTER + slot * idx as f64 + slot * 0.15,
                    y: plot_height - height,
                    width: slot * 0.7,
                    height,
                }
            })
            .collect();

        let ticks = (0..=BAR_TICKS)
            .map(|step| {
                let value = axis_max * step as f64 / BAR_TICKS as f64;
                Tick {
                    value,
                    y: plot_height - value / axis_max * plot_height,
                }
            })
            .collect();

        Self {
            bars,
            ticks,
            axis_max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Rounds up to 1, 2, 5 or 10 times a power of ten; never below 1.
fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    (step * magnitude).max(1.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl Slice {
    /// True when this slice is the whole pie; arcs cannot draw a full turn.
    pub fn is_full_circle(&self) -> bool {
        (self.end_angle - self.start_angle) >= 2.0 * PI - 1e-9
    }

    pub fn path(&self) -> String {
        let (x1, y1) = polar(self.start_angle);
        let (x2, y2) = polar(self.end_angle);
        let large_arc = if self.end_angle - self.start_angle > PI { 1 } else { 0 };
        format!(
            "M {c:.2} {c:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z",
            c = PIE_CENTER,
            r = PIE_RADIUS,
        )
    }
}

// Angles start at twelve o'clock and run clockwise.
fn polar(angle: f64) -> (f64, f64) {
    (
        PIE_CENTER + PIE_RADIUS * angle.sin(),
        PIE_CENTER - PIE_RADIUS * angle.cos(),
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieChart {
    pub slices: Vec<Slice>,
    pub total: f64,
}

impl PieChart {
    pub fn new(labels: &[String], values: &[f64]) -> Self {
        let series = pair_series(labels, values);
        let total: f64 = series.iter().map(|(_, v)| v).sum();
        let mut slices = Vec::with_capacity(series.len());
        let mut cursor = 0.0;

        if total > 0.0 {
            for (idx, (label, value)) in series.into_iter().enumerate() {
                let sweep = value / total * 2.0 * PI;
                slices.push(Slice {
                    label,
                    value,
                    percent: value / total * 100.0,
                    start_angle: cursor,
                    end_angle: cursor + sweep,
                    color: palette_color(idx),
                });
                cursor += sweep;
            }
        }

        Self { slices, total }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_arrays_render_empty_charts() {
        let bar = BarChart::new(&[], &[]);
        assert!(bar.is_empty());
        assert_eq!(bar.axis_max, 1.0);
        assert_eq!(bar.ticks.len(), BAR_TICKS + 1);

        let pie = PieChart::new(&labels(&["Sleeves"]), &[]);
        assert!(pie.is_empty());
    }

    #[test]
    fn bars_begin_at_zero_and_scale_to_axis() {
        let chart = BarChart::new(&labels(&["Luffy", "Zoro", "Nami"]), &[40.0, 80.0, -3.0]);
        assert_eq!(chart.axis_max, 100.0);
        let plot_height = BAR_VIEW_HEIGHT - BAR_LABEL_GUTTER;

        let zoro = &chart.bars[1];
        assert!((zoro.height - 0.8 * plot_height).abs() < 1e-9);
        assert!((zoro.y + zoro.height - plot_height).abs() < 1e-9);

        let nami = &chart.bars[2];
        assert_eq!(nami.value, 0.0);
        assert_eq!(nami.height, 0.0);

        assert_eq!(chart.ticks.first().map(|t| t.value), Some(0.0));
        assert_eq!(chart.ticks.last().map(|t| t.y), Some(0.0));
    }

    #[test]
    fn nice_ceiling_steps() {
        assert_eq!(nice_ceiling(0.4), 1.0);
        assert_eq!(nice_ceiling(13.0), 20.0);
        assert_eq!(nice_ceiling(42.0), 50.0);
        assert_eq!(nice_ceiling(500.0), 500.0);
        assert_eq!(nice_ceiling(501.0), 1000.0);
    }

    #[test]
    fn pie_slices_cover_the_circle() {
        let pie = PieChart::new(&labels(&["Sleeves", "Shipping", "Grading"]), &[10.0, 15.0, 75.0]);
        assert_eq!(pie.total, 100.0);
        assert_eq!(pie.slices.len(), 3);
        assert!((pie.slices[2].percent - 75.0).abs() < 1e-9);
        assert!((pie.slices[2].end_angle - 2.0 * PI).abs() < 1e-9);
        assert!(pie.slices[2].path().contains(" 0 1 1 "));
        assert!(pie.slices[1].path().contains(" 0 0 1 "));
        assert!(pie.slices[0].path().starts_with("M 130.00 130.00 L 130.00 10.00"));
        assert!(!pie.slices[0].is_full_circle());
    }

    #[test]
    fn single_category_is_a_full_circle() {
        let pie = PieChart::new(&labels(&["Sleeves"]), &[12.0]);
        assert!(pie.slices[0].is_full_circle());
    }

    #[test]
    fn zero_total_pie_is_empty() {
        let pie = PieChart::new(&labels(&["A", "B"]), &[0.0, f64::NAN]);
        assert!(pie.is_empty());
    }
}
