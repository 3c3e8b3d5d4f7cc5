use super::{value_text, Row};

/// Case-insensitive substring match of `query` against the string form of
/// every attribute value. An empty query keeps the sequence untouched.
///
/// Used only by list views with date filtering disabled; the two filter
/// modes are mutually exclusive per view.
pub fn filter_by_query(rows: Vec<Row>, query: &str) -> Vec<Row> {
    if query.is_empty() {
        return rows;
    }
    let needle = query.to_lowercase();
    rows.into_iter()
        .filter(|row| {
            row.values()
                .any(|v| value_text(v).to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_core::row_from_value;
    use serde_json::json;

    fn rows() -> Vec<Row> {
        vec![
            row_from_value(json!({ "name": "María González", "age": 34 })),
            row_from_value(json!({ "name": "Pedro Páez", "age": 61 })),
        ]
    }

    #[test]
    fn empty_query_returns_the_full_collection() {
        assert_eq!(filter_by_query(rows(), "").len(), 2);
    }

    #[test]
    fn partial_substring_matches_case_insensitively() {
        let out = filter_by_query(rows(), "gonz");
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].get("name").and_then(|v| v.as_str()),
            Some("María González")
        );
    }

    #[test]
    fn any_attribute_value_is_searched() {
        assert_eq!(filter_by_query(rows(), "61").len(), 1);
    }

    #[test]
    fn no_match_yields_an_empty_sequence() {
        assert!(filter_by_query(rows(), "zzz").is_empty());
    }
}
