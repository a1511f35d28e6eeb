//! Default query-fragment derivation.
//!
//! Selected range items become an Elasticsearch `bool` query: one inclusive
//! `range` clause per item (boost 2.0), OR-combined with
//! `minimum_should_match: 1` (boost 1.0). An empty selection derives no
//! fragment at all, which downstream reads as "no filter applied".

use serde_json::{json, Value};

use crate::selection::RangeItem;

/// Derive the default disjunctive range fragment over `data_field`.
/// Returns `None` when nothing is selected.
pub fn range_query(data_field: &str, items: &[RangeItem]) -> Option<Value> {
    if items.is_empty() {
        return None;
    }

    let clauses: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "range": {
                    data_field: {
                        "gte": item.start,
                        "lte": item.end,
                        "boost": 2.0,
                    }
                }
            })
        })
        .collect();

    Some(json!({
        "bool": {
            "should": clauses,
            "minimum_should_match": 1,
            "boost": 1.0,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_derives_none() {
        assert_eq!(range_query("price", &[]), None);
    }

    #[test]
    fn test_single_item_fragment() {
        let items = vec![RangeItem::new("A", 1.0, 5.0)];
        let query = range_query("price", &items).expect("fragment");

        assert_eq!(
            query,
            json!({
                "bool": {
                    "should": [{
                        "range": {
                            "price": { "gte": 1.0, "lte": 5.0, "boost": 2.0 }
                        }
                    }],
                    "minimum_should_match": 1,
                    "boost": 1.0,
                }
            })
        );
    }

    #[test]
    fn test_clause_per_item_in_selection_order() {
        let items = vec![
            RangeItem::new("cheap", 0.0, 10.0),
            RangeItem::new("mid", 10.0, 50.0),
        ];
        let query = range_query("rating", &items).expect("fragment");
        let should = query["bool"]["should"].as_array().expect("should array");
        assert_eq!(should.len(), 2);
        assert_eq!(should[0]["range"]["rating"]["gte"], json!(0.0));
        assert_eq!(should[1]["range"]["rating"]["lte"], json!(50.0));
    }
}
