//! Page controller for the collection table.
//!
//! Holds the rows, the sort toggle, the mailing fee and each row's live price
//! state. Every mutation recomputes the subtotal before returning, so the
//! stored value always equals the sum of the rows' derived totals.

use std::collections::HashMap;

use super::{
    live_price::{LivePriceOutcome, LivePriceState},
    message::{sale_message, ContactDetails},
    row::{DivisorOutcome, Row, RowId},
    sort::SortState,
    subtotal::{format_sgd_total, sum_derived_totals, MailingFee},
};

#[derive(Clone, Debug, Default)]
pub struct CollectionState {
    rows: Vec<Row>,
    sort: SortState,
    mailing: MailingFee,
    subtotal: f64,
    live_prices: HashMap<RowId, LivePriceState>,
}

impl CollectionState {
    pub fn new(rows: Vec<Row>, mailing_fee: f64) -> Self {
        let mut state = Self {
            rows,
            mailing: MailingFee {
                enabled: false,
                fee: mailing_fee,
            },
            ..Self::default()
        };
        state.recalculate_subtotal();
        state
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn subtotal_label(&self) -> String {
        format_sgd_total(self.subtotal)
    }

    pub fn mailing(&self) -> MailingFee {
        self.mailing
    }

    /// Subtotal plus fee, or `None` while the fee box is unchecked.
    pub fn total_with_mailing_label(&self) -> Option<String> {
        self.mailing.total_label(self.subtotal)
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_mailing(&mut self, enabled: bool) {
        self.mailing.enabled = enabled;
        self.recalculate_subtotal();
    }

    pub fn set_mailing_fee(&mut self, fee: f64) {
        self.mailing.fee = fee;
        self.recalculate_subtotal();
    }

    /// Applies a divisor edit to one row. Unknown ids change nothing.
    pub fn set_divisor(&mut self, row_id: &str, input: &str) -> Option<DivisorOutcome> {
        let outcome = self
            .rows
            .iter_mut()
            .find(|row| row.id == row_id)
            .map(|row| row.apply_divisor(input));
        self.recalculate_subtotal();
        outcome
    }

    pub fn activate_sort(&mut self) {
        self.sort.activate(&mut self.rows);
    }

    pub fn sale_message(&self, contact: &ContactDetails) -> String {
        sale_message(self.subtotal, &self.mailing, contact)
    }

    pub fn live_price(&self, row_id: &str) -> LivePriceState {
        self.live_prices.get(row_id).cloned().unwrap_or_default()
    }

    /// Marks a row as fetching and returns the lookup key to request.
    ///
    /// Returns `None` when the row is unknown or already left `Idle`.
    pub fn begin_live_price(&mut self, row_id: &str) -> Option<String> {
        let key = self.row(row_id)?.lookup_key().to_string();
        let state = self.live_prices.entry(row_id.to_string()).or_default();
        state.begin().then_some(key)
    }

    pub fn resolve_live_price<E>(&mut self, row_id: &str, result: Result<LivePriceOutcome, E>) {
        if let Some(state) = self.live_prices.get_mut(row_id) {
            state.resolve(result);
        }
    }

    fn recalculate_subtotal(&mut self) {
        self.subtotal = sum_derived_totals(&self.rows);
    }
}
