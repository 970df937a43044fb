//! Typed view over one collection table row.
//!
//! Rows arrive as loosely typed JSON from the host page. Everything is parsed
//! once in [`Row::try_from`] so later code never sees a `NaN`.

use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Identifier of a row as supplied by the server.
pub type RowId = String;

/// Display currency of every derived total.
pub const DISPLAY_CURRENCY: &str = "SGD";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Sgd,
    Jpy,
    Other(String),
}

impl Currency {
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() || code.eq_ignore_ascii_case("SGD") {
            Currency::Sgd
        } else if code.eq_ignore_ascii_case("JPY") {
            Currency::Jpy
        } else {
            Currency::Other(code.to_ascii_uppercase())
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Currency::Sgd => "SGD",
            Currency::Jpy => "JPY",
            Currency::Other(code) => code,
        }
    }

    /// Only yen rows take a unit divisor.
    pub fn is_foreign(&self) -> bool {
        matches!(self, Currency::Jpy)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("row {id}: original price `{raw}` is not a number")]
    InvalidPrice { id: String, raw: String },
    #[error("row {id}: quantity {quantity} is negative")]
    NegativeQuantity { id: String, quantity: i64 },
}

/// Row as it comes off the wire.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawRow {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    pub set_name: Option<String>,
    pub card_number: Option<String>,
    pub rarity: Option<String>,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: Option<i64>,
    #[serde(alias = "purchase_price_original", deserialize_with = "lenient_number")]
    pub original_price: Option<String>,
    #[serde(alias = "original_currency")]
    pub currency: Option<String>,
    #[serde(alias = "total_price_sgd", deserialize_with = "lenient_number")]
    pub total_sgd: Option<String>,
}

/// What a divisor edit did to the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivisorOutcome {
    Ignored,
    Reset,
    Recomputed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub name: String,
    pub set_name: Option<String>,
    pub card_number: Option<String>,
    pub rarity: Option<String>,
    pub quantity: u32,
    pub original_price: f64,
    pub currency: Currency,
    baseline_total: Option<f64>,
    derived_total: Option<f64>,
    divisor_input: String,
    unit_price_display: String,
}

impl TryFrom<RawRow> for Row {
    type Error = RowError;

    fn try_from(raw: RawRow) -> Result<Self, Self::Error> {
        let price_text = raw.original_price.unwrap_or_default();
        let original_price = if price_text.trim().is_empty() {
            0.0
        } else {
            parse_number(&price_text).ok_or_else(|| RowError::InvalidPrice {
                id: raw.id.clone(),
                raw: price_text.clone(),
            })?
        };

        let quantity = match raw.quantity {
            Some(q) if q < 0 => {
                return Err(RowError::NegativeQuantity {
                    id: raw.id,
                    quantity: q,
                })
            }
            Some(q) => u32::try_from(q).unwrap_or(u32::MAX),
            None => 1,
        };

        let baseline_total = raw.total_sgd.as_deref().and_then(parse_number);

        Ok(Row {
            id: raw.id,
            name: raw.name,
            set_name: non_empty(raw.set_name),
            card_number: non_empty(raw.card_number),
            rarity: non_empty(raw.rarity),
            quantity,
            original_price,
            currency: Currency::from_code(raw.currency.as_deref().unwrap_or_default()),
            baseline_total,
            derived_total: baseline_total,
            divisor_input: String::new(),
            unit_price_display: format_amount(0.0),
        })
    }
}

impl Row {
    /// Current total in the display currency; also the sort key.
    pub fn derived_total(&self) -> Option<f64> {
        self.derived_total
    }

    pub fn divisor_input(&self) -> &str {
        &self.divisor_input
    }

    pub fn unit_price_display(&self) -> &str {
        &self.unit_price_display
    }

    /// Key used for `/get_live_price/{key}`.
    pub fn lookup_key(&self) -> &str {
        self.card_number.as_deref().unwrap_or(&self.id)
    }

    pub fn total_display(&self) -> String {
        match self.derived_total {
            Some(total) => format!("${}", format_amount(total)),
            None => "n/a".to_string(),
        }
    }

    pub fn original_price_display(&self) -> String {
        match self.currency {
            Currency::Jpy => format!("¥{}", format_yen(self.original_price)),
            _ => format!("{} {}", format_amount(self.original_price), self.currency),
        }
    }

    /// Recomputes the derived total from a user-typed divisor.
    ///
    /// Anything that is not a positive finite number restores the baseline.
    pub fn apply_divisor(&mut self, input: &str) -> DivisorOutcome {
        if !self.currency.is_foreign() {
            return DivisorOutcome::Ignored;
        }
        self.divisor_input = input.to_string();

        match parse_number(input).filter(|divisor| *divisor > 0.0) {
            Some(divisor) => {
                let total = self.original_price / divisor;
                self.derived_total = Some(total);
                self.unit_price_display = format_amount(total);
                DivisorOutcome::Recomputed
            }
            None => {
                self.derived_total = self.baseline_total;
                self.unit_price_display = format_amount(0.0);
                DivisorOutcome::Reset
            }
        }
    }
}

/// Parses a user or server supplied number, rejecting `NaN` and infinities.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Fixed-point amount with two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Whole yen print without decimals, fractional yen keep them.
pub fn format_yen(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Row {
        let raw: RawRow = serde_json::from_value(value).expect("raw row should deserialize");
        Row::try_from(raw).expect("row should validate")
    }

    fn yen_row() -> Row {
        row(json!({
            "id": 7,
            "name": "Monkey.D.Luffy",
            "card_number": "OP01-024",
            "original_price": 1000,
            "currency": "JPY",
            "total_sgd": "8.75"
        }))
    }

    #[test]
    fn divisor_recomputes_yen_total() {
        let mut row = yen_row();
        assert_eq!(row.apply_divisor("200"), DivisorOutcome::Recomputed);
        assert_eq!(row.derived_total(), Some(5.0));
        assert_eq!(row.unit_price_display(), "5.00");
        assert_eq!(row.total_display(), "$5.00");
    }

    #[test]
    fn zero_or_blank_divisor_resets_to_baseline() {
        let mut row = yen_row();
        row.apply_divisor("200");

        assert_eq!(row.apply_divisor("0"), DivisorOutcome::Reset);
        assert_eq!(row.derived_total(), Some(8.75));
        assert_eq!(row.unit_price_display(), "0.00");

        row.apply_divisor("125");
        assert_eq!(row.apply_divisor("   "), DivisorOutcome::Reset);
        assert_eq!(row.derived_total(), Some(8.75));

        assert_eq!(row.apply_divisor("abc"), DivisorOutcome::Reset);
        assert_eq!(row.apply_divisor("-4"), DivisorOutcome::Reset);
        assert_eq!(row.derived_total(), Some(8.75));
    }

    #[test]
    fn domestic_rows_ignore_divisor() {
        let mut row = row(json!({
            "id": "3",
            "name": "Nami",
            "original_price": 12.5,
            "currency": "sgd",
            "total_sgd": 12.5
        }));
        assert_eq!(row.apply_divisor("2"), DivisorOutcome::Ignored);
        assert_eq!(row.derived_total(), Some(12.5));
        assert_eq!(row.divisor_input(), "");
    }

    #[test]
    fn non_numeric_total_has_no_derived_value() {
        let row = row(json!({ "id": 1, "name": "Zoro", "total_sgd": "n/a" }));
        assert_eq!(row.derived_total(), None);
        assert_eq!(row.total_display(), "n/a");
        assert_eq!(row.currency, Currency::Sgd);
        assert_eq!(row.quantity, 1);
    }

    #[test]
    fn invalid_original_price_is_rejected() {
        let raw: RawRow =
            serde_json::from_value(json!({ "id": 9, "original_price": "lots" })).unwrap();
        let err = Row::try_from(raw).unwrap_err();
        assert!(matches!(err, RowError::InvalidPrice { .. }));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let raw: RawRow = serde_json::from_value(json!({ "id": 9, "quantity": -2 })).unwrap();
        assert_eq!(
            Row::try_from(raw).unwrap_err(),
            RowError::NegativeQuantity {
                id: "9".into(),
                quantity: -2
            }
        );
    }

    #[test]
    fn lookup_key_prefers_card_number() {
        assert_eq!(yen_row().lookup_key(), "OP01-024");
        let bare = row(json!({ "id": 42, "card_number": "" }));
        assert_eq!(bare.lookup_key(), "42");
    }

    #[test]
    fn server_aliases_are_accepted() {
        let row = row(json!({
            "id": 5,
            "purchase_price_original": "450",
            "original_currency": "jpy",
            "total_price_sgd": 4.2
        }));
        assert_eq!(row.currency, Currency::Jpy);
        assert_eq!(row.original_price, 450.0);
        assert_eq!(row.original_price_display(), "¥450");
        assert_eq!(row.derived_total(), Some(4.2));
    }

    #[test]
    fn yen_formatting() {
        assert_eq!(format_yen(500.0), "500");
        assert_eq!(format_yen(499.5), "499.5");
    }
}
