use serde::Serialize;

/// A selectable menu entry: pizza size, topping or appetizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MenuItem {
    pub id: i64,
    pub description: String,
}
