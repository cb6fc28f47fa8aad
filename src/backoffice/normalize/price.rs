use serde_json::Value;
use crate::backoffice::model::price::{PriceEntry, PriceMap};
use crate::backoffice::normalize::collection::elements;
use crate::backoffice::normalize::shape::normalize;

/// Fold a price payload into an `id -> price` map. Entries with a zero id or a price
/// that is not a number are left out.
pub(crate) fn build_price_map(payload: Option<&Value>, tuple_keys: &[&str]) -> PriceMap {
    elements(payload)
        .iter()
        .filter_map(|item| normalize::<PriceEntry>(item, tuple_keys))
        .filter(|entry| entry.id != 0)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use crate::backoffice::normalize::APPETIZER_PRICES;

    fn prices(payload: Value) -> PriceMap {
        build_price_map(Some(&payload), APPETIZER_PRICES.tuple_keys)
    }

    #[test]
    fn mixed_shapes() {
        let map = prices(json!([
            {"fn_GetAppetizerPrices": "(3,$5.00)"},
            [{"Id": 8, "Price": 7.5}],
            "(9,\"$1,234.50\")",
        ]));
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(3), Some(5.0));
        assert_eq!(map.get(8), Some(7.5));
        assert_eq!(map.get(9), Some(1234.5));
    }

    #[test]
    fn invalid_entries_are_excluded() {
        let map = prices(json!([
            {"id": 1, "price": "call us"},
            {"id": 0, "price": 3.0},
            {"price": 4.0},
            {"fn_GetAppetizerPrices": "(2)"},
            {"id": 5, "cost": "$2.25"},
        ]));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(1), None);
        assert_eq!(map.get(5), Some(2.25));
    }

    #[test]
    fn later_duplicate_wins() {
        let map = prices(json!({"data": [{"id": 1, "price": 1.0}, {"id": 1, "price": 2.0}]}));
        assert_eq!(map.get(1), Some(2.0));
    }

    #[test]
    fn missing_payload_is_empty() {
        assert!(build_price_map(None, APPETIZER_PRICES.tuple_keys).is_empty());
    }
}
