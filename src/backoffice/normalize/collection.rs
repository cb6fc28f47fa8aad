use serde_json::Value;
use crate::backoffice::normalize::shape::{normalize, Canonical};

/// Keys a list may be wrapped under, probed in this order.
pub(crate) const CONTAINER_KEYS: [&str; 4] = ["data", "items", "results", "rows"];

/// The element list of a payload: the payload itself when it is an array, the first
/// array found under a container key, or nothing.
pub(crate) fn elements(payload: Option<&Value>) -> &[Value] {
    match payload {
        Some(Value::Array(items)) => items,
        Some(Value::Object(object)) => CONTAINER_KEYS
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    }
}

/// Normalize every element, keeping input order and dropping the ones with no result.
pub(crate) fn normalize_all<T: Canonical>(payload: Option<&Value>, tuple_keys: &[&str]) -> Vec<T> {
    elements(payload)
        .iter()
        .filter_map(|item| normalize(item, tuple_keys))
        .collect()
}

/// Normalize a detail payload: the first usable element of a list, or the payload
/// itself when it is a single record.
pub(crate) fn normalize_one<T: Canonical>(payload: Option<&Value>, tuple_keys: &[&str]) -> Option<T> {
    let payload = payload?;
    if is_collection(payload) {
        return elements(Some(payload))
            .iter()
            .find_map(|item| normalize(item, tuple_keys));
    }
    normalize(payload, tuple_keys)
}

fn is_collection(payload: &Value) -> bool {
    match payload {
        Value::Array(_) => true,
        Value::Object(object) => CONTAINER_KEYS
            .iter()
            .any(|key| object.get(*key).is_some_and(Value::is_array)),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use crate::backoffice::model::ingredient::Ingredient;
    use crate::backoffice::model::item::MenuItem;
    use crate::backoffice::normalize::{INGREDIENT, PIZZA_SIZES};

    fn sizes(payload: Value) -> Vec<MenuItem> {
        normalize_all(Some(&payload), PIZZA_SIZES.tuple_keys)
    }

    #[test]
    fn bare_array() {
        let out = sizes(json!([
            {"fn_GetPizzaSizes": "(1,\"Small\")"},
            {"fn_GetPizzaSizes": "(2,\"Large\")"},
        ]));
        let ids: Vec<_> = out.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn wrapped_array() {
        assert_eq!(sizes(json!({"data": [{"id": 1, "name": "Small"}]})).len(), 1);
        assert_eq!(sizes(json!({"rows": ["(3,\"Medium\")"]})).len(), 1);
        assert_eq!(sizes(json!({"data": "oops", "items": [{"id": 1}]})).len(), 1);
    }

    #[test]
    fn absent_or_unknown_payload_is_empty() {
        assert!(normalize_all::<MenuItem>(None, PIZZA_SIZES.tuple_keys).is_empty());
        assert!(sizes(json!(null)).is_empty());
        assert!(sizes(json!("(1,\"Small\")")).is_empty());
        assert!(sizes(json!({"sizes": [{"id": 1}]})).is_empty());
    }

    #[test]
    fn drops_bad_elements_and_keeps_order() {
        let input = json!([
            "(1,\"Small\")",
            "(2)",
            null,
            {"Id": 3, "Description": "Large"},
            42,
            {"name": "no id"},
            [{"id": 4, "name": "Family"}],
        ]);
        let out = sizes(input.clone());
        assert!(out.len() <= input.as_array().unwrap().len());
        let ids: Vec<_> = out.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn detail_payload_as_record_or_list() {
        let keys = INGREDIENT.tuple_keys;
        let single = json!({"ingredientid": 7, "description": "Flour"});
        assert_eq!(normalize_one::<Ingredient>(Some(&single), keys).unwrap().ingredientid, 7);

        let listed = json!([null, {"fn_GetIngredient": "(7,\"Flour\",50)"}]);
        let flour = normalize_one::<Ingredient>(Some(&listed), keys).unwrap();
        assert_eq!(flour.packsize, 50);

        let wrapped = json!({"data": []});
        assert!(normalize_one::<Ingredient>(Some(&wrapped), keys).is_none());
        assert!(normalize_one::<Ingredient>(None, keys).is_none());
    }
}
