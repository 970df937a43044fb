use std::cmp::Ordering;

use super::row::Row;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Toggle state behind the clickable total-price header.
///
/// `next` is the order the following click applies; the glyph mirrors it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    next: SortDirection,
}

impl SortState {
    pub fn glyph(&self) -> &'static str {
        match self.next {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    /// Orders `rows` by total in the pending direction, then flips it.
    pub fn activate(&mut self, rows: &mut [Row]) {
        sort_rows(rows, self.next);
        self.next = self.next.flipped();
    }
}

pub fn sort_rows(rows: &mut [Row], direction: SortDirection) {
    rows.sort_by(|a, b| compare_totals(a.derived_total(), b.derived_total(), direction));
}

// Rows without a total sink to the bottom either way.
fn compare_totals(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(av), Some(bv)) => match direction {
            SortDirection::Ascending => av.partial_cmp(&bv).unwrap_or(Ordering::Equal),
            SortDirection::Descending => bv.partial_cmp(&av).unwrap_or(Ordering::Equal),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::RawRow;
    use serde_json::json;

    fn rows(totals: &[serde_json::Value]) -> Vec<Row> {
        totals
            .iter()
            .enumerate()
            .map(|(idx, total)| {
                let raw: RawRow =
                    serde_json::from_value(json!({ "id": idx, "total_sgd": total })).unwrap();
                Row::try_from(raw).unwrap()
            })
            .collect()
    }

    fn totals(rows: &[Row]) -> Vec<Option<f64>> {
        rows.iter().map(Row::derived_total).collect()
    }

    #[test]
    fn header_toggles_between_ascending_and_descending() {
        let mut rows = rows(&[json!(30), json!(10), json!(20)]);
        let mut state = SortState::default();
        assert_eq!(state.glyph(), "▲");

        state.activate(&mut rows);
        assert_eq!(totals(&rows), vec![Some(10.0), Some(20.0), Some(30.0)]);
        assert_eq!(state.glyph(), "▼");

        state.activate(&mut rows);
        assert_eq!(totals(&rows), vec![Some(30.0), Some(20.0), Some(10.0)]);
        assert_eq!(state.glyph(), "▲");
    }

    #[test]
    fn rows_without_totals_go_last() {
        let mut rows = rows(&[json!("n/a"), json!(5), json!(1)]);
        sort_rows(&mut rows, SortDirection::Ascending);
        assert_eq!(totals(&rows), vec![Some(1.0), Some(5.0), None]);
        sort_rows(&mut rows, SortDirection::Descending);
        assert_eq!(totals(&rows), vec![Some(5.0), Some(1.0), None]);
    }
}
