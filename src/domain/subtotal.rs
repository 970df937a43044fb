use serde::{Deserialize, Serialize};

use super::row::{format_amount, Row, DISPLAY_CURRENCY};

pub const DEFAULT_MAILING_FEE: f64 = 3.50;

/// Optional flat surcharge added on top of the subtotal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MailingFee {
    pub enabled: bool,
    pub fee: f64,
}

impl Default for MailingFee {
    fn default() -> Self {
        Self {
            enabled: false,
            fee: DEFAULT_MAILING_FEE,
        }
    }
}

impl MailingFee {
    /// Amount due for `subtotal`, fee included when enabled.
    pub fn apply(&self, subtotal: f64) -> f64 {
        if self.enabled {
            subtotal + self.fee
        } else {
            subtotal
        }
    }

    /// Combined total label, hidden while the fee is off.
    pub fn total_label(&self, subtotal: f64) -> Option<String> {
        self.enabled.then(|| format_sgd_total(subtotal + self.fee))
    }
}

/// Sums every row total that parsed as a number; the rest contribute nothing.
pub fn sum_derived_totals<'a, I>(rows: I) -> f64
where
    I: IntoIterator<Item = &'a Row>,
{
    sum_amounts(rows.into_iter().filter_map(Row::derived_total))
}

/// Plain sum starting from `+0.0`, so an empty input never prints as `-0.00`.
pub fn sum_amounts<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, value| acc + value)
}

pub fn format_sgd_total(value: f64) -> String {
    format!("${} {DISPLAY_CURRENCY}", format_amount(value))
}
