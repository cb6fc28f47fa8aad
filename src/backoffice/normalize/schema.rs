//! Positional tuple schemas and property aliases of every canonical record.

use serde_json::{Map, Value};
use crate::backoffice::model::ingredient::Ingredient;
use crate::backoffice::model::item::MenuItem;
use crate::backoffice::model::price::PriceEntry;
use crate::backoffice::normalize::coerce::{
    decimal_of, flag_of, int_of, parse_decimal, parse_flag, parse_int, text_of, unquote,
};
use crate::backoffice::normalize::shape::{lookup, Canonical};

const ID: &[&str] = &["id", "Id", "ID"];
const DESCRIPTION: &[&str] = &["description", "Description", "name", "Name"];

const PRICE_ID: &[&str] = &["id", "Id", "ID", "appetizerId", "AppetizerId"];
const PRICE: &[&str] = &["price", "Price", "cost", "Cost"];

const INGREDIENT_ID: &[&str] = &[
    "ingredientid", "ingredientId", "IngredientId", "IngredientID", "id", "Id", "ID",
];
const PACK_SIZE: &[&str] = &["packsize", "packSize", "PackSize"];
const PACK_TYPE: &[&str] = &["packtype", "packType", "PackType"];
const SMALL_SERVING: &[&str] = &["smallserving", "smallServing", "SmallServing"];
const LARGE_SERVING: &[&str] = &["largeserving", "largeServing", "LargeServing"];
const KING_KOLD_PRICE: &[&str] = &["kingkoldprice", "kingKoldPrice", "KingKoldPrice"];
const PIQUA_PIZZA_SUPPLY: &[&str] = &["piquapizzasupply", "piquaPizzaSupply", "PiquaPizzaSupply"];
const TOPPING: &[&str] = &["topping", "Topping", "isTopping", "IsTopping"];
const APPETIZER: &[&str] = &["appetizer", "Appetizer", "isAppetizer", "IsAppetizer"];

/// `(id, description)`
impl Canonical for MenuItem {
    const MIN_FIELDS: usize = 2;

    fn from_fields(fields: &[String]) -> Option<Self> {
        Some(Self {
            id: parse_int(&fields[0])?,
            description: unquote(&fields[1]).to_string(),
        })
    }

    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        Some(Self {
            id: lookup(object, ID).and_then(int_of)?,
            description: lookup(object, DESCRIPTION)
                .and_then(text_of)
                .unwrap_or_default(),
        })
    }
}

/// `(id, price)`; a price that is not a number makes the entry unusable.
impl Canonical for PriceEntry {
    const MIN_FIELDS: usize = 2;

    fn from_fields(fields: &[String]) -> Option<Self> {
        Some(Self {
            id: parse_int(&fields[0])?,
            price: parse_decimal(&fields[1])?,
        })
    }

    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        Some(Self {
            id: lookup(object, PRICE_ID).and_then(int_of)?,
            price: lookup(object, PRICE).and_then(decimal_of)?,
        })
    }
}

/// `(ingredientid, description, packsize, packtype, smallserving, largeserving,
/// kingkoldprice, piquapizzasupply, topping, appetizer)`; trailing fields may be absent.
impl Canonical for Ingredient {
    const MIN_FIELDS: usize = 2;

    fn from_fields(fields: &[String]) -> Option<Self> {
        let field = |i: usize| fields.get(i).map(String::as_str);
        let decimal = |i: usize| field(i).and_then(parse_decimal).unwrap_or_default();
        Some(Self {
            ingredientid: parse_int(&fields[0])?,
            description: unquote(&fields[1]).to_string(),
            packsize: field(2).and_then(parse_int).unwrap_or_default(),
            packtype: field(3).map(unquote).unwrap_or_default().to_string(),
            smallserving: decimal(4),
            largeserving: decimal(5),
            kingkoldprice: decimal(6),
            piquapizzasupply: decimal(7),
            topping: field(8).is_some_and(parse_flag),
            appetizer: field(9).is_some_and(parse_flag),
        })
    }

    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        let text = |aliases: &[&str]| lookup(object, aliases).and_then(text_of).unwrap_or_default();
        let decimal = |aliases: &[&str]| lookup(object, aliases).and_then(decimal_of).unwrap_or_default();
        let flag = |aliases: &[&str]| lookup(object, aliases).is_some_and(flag_of);
        Some(Self {
            ingredientid: lookup(object, INGREDIENT_ID).and_then(int_of)?,
            description: text(DESCRIPTION),
            packsize: lookup(object, PACK_SIZE).and_then(int_of).unwrap_or_default(),
            packtype: text(PACK_TYPE),
            smallserving: decimal(SMALL_SERVING),
            largeserving: decimal(LARGE_SERVING),
            kingkoldprice: decimal(KING_KOLD_PRICE),
            piquapizzasupply: decimal(PIQUA_PIZZA_SUPPLY),
            topping: flag(TOPPING),
            appetizer: flag(APPETIZER),
        })
    }
}
