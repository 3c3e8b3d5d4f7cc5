use chrono::NaiveDate;

use super::Row;

/// Inclusive date interval over a designated row attribute.
/// Both bounds unset means "no filter". Nothing enforces start <= end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Unset both bounds. Idempotent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn admits(&self, date: Option<NaiveDate>) -> bool {
        if !self.is_active() {
            return true;
        }
        // Rows without a parseable date never satisfy an active bound.
        let Some(d) = date else {
            return false;
        };
        if let Some(start) = self.start {
            if d < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if d > end {
                return false;
            }
        }
        true
    }
}

/// Calendar date of an attribute value: `YYYY-MM-DD`, with or without a
/// trailing time suffix (RFC 3339 timestamps included).
pub fn parse_row_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Keep rows whose `date_key` attribute falls inside `range`.
pub fn filter_by_date(rows: Vec<Row>, date_key: &str, range: DateRange) -> Vec<Row> {
    if !range.is_active() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            let date = row
                .get(date_key)
                .and_then(|v| v.as_str())
                .and_then(parse_row_date);
            range.admits(date)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_core::row_from_value;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            row_from_value(json!({ "id": "a", "created_at": "2024-01-15" })),
            row_from_value(json!({ "id": "b", "created_at": "2024-02-01T08:30:00Z" })),
            row_from_value(json!({ "id": "c", "created_at": "sin fecha" })),
        ]
    }

    #[test]
    fn inactive_range_keeps_everything() {
        let out = filter_by_date(rows(), "created_at", DateRange::default());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn january_range_includes_mid_january_and_excludes_february() {
        let range = DateRange {
            start: Some(day(2024, 1, 1)),
            end: Some(day(2024, 1, 31)),
        };
        let out = filter_by_date(rows(), "created_at", range);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].get("id").and_then(|v| v.as_str()), Some("a"));
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = DateRange {
            start: Some(day(2024, 1, 15)),
            end: Some(day(2024, 1, 15)),
        };
        let out = filter_by_date(rows(), "created_at", range);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn single_bound_applies_alone() {
        let range = DateRange {
            start: Some(day(2024, 2, 1)),
            end: None,
        };
        let out = filter_by_date(rows(), "created_at", range);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].get("id").and_then(|v| v.as_str()), Some("b"));
    }

    #[test]
    fn unparseable_dates_are_excluded_while_filtering() {
        let range = DateRange {
            start: Some(day(2000, 1, 1)),
            end: Some(day(2100, 1, 1)),
        };
        let out = filter_by_date(rows(), "created_at", range);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut range = DateRange {
            start: Some(day(2024, 1, 1)),
            end: Some(day(2024, 1, 31)),
        };
        range.clear();
        let once = range;
        range.clear();
        assert_eq!(range, once);
        assert!(!range.is_active());
        assert_eq!(filter_by_date(rows(), "created_at", range).len(), 3);
    }
}
