//! Turns heterogeneous api payloads into canonical records.
//!
//! Normalization never fails loudly: an element that cannot be understood is dropped and
//! a field that cannot be parsed takes its default.

pub(crate) mod coerce;
pub(crate) mod collection;
pub(crate) mod price;
pub(crate) mod schema;
pub(crate) mod shape;
pub(crate) mod tuple;

/// An endpoint together with the keys its legacy rows are wrapped under.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Source {
    pub endpoint: &'static str,
    pub tuple_keys: &'static [&'static str],
}

pub(crate) const APPETIZERS: Source = Source {
    endpoint: "/appetizers",
    tuple_keys: &["fn_GetAppetizers"],
};

pub(crate) const APPETIZER_PRICES: Source = Source {
    endpoint: "/appetizerprices",
    tuple_keys: &["fn_GetAppetizerPrices"],
};

pub(crate) const PIZZA_SIZES: Source = Source {
    endpoint: "/pizzasizes",
    tuple_keys: &["fn_GetPizzaSizes"],
};

pub(crate) const TOPPINGS: Source = Source {
    endpoint: "/toppings",
    tuple_keys: &["fn_GetToppings"],
};

pub(crate) const INGREDIENTS: Source = Source {
    endpoint: "/ingredients",
    tuple_keys: &["fn_GetIngredients"],
};

/// Detail rows come back under either key depending on the api version.
pub(crate) const INGREDIENT: Source = Source {
    endpoint: "/ingredient",
    tuple_keys: &["fn_GetIngredient", "fn_GetIngredients"],
};
