use serde::Serialize;

/// Canonical ingredient row. Missing numbers are 0 and missing flags are false.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct Ingredient {
    pub ingredientid: i64,
    pub description: String,
    pub packsize: i64,
    pub packtype: String,
    pub smallserving: f64,
    pub largeserving: f64,
    pub kingkoldprice: f64,
    pub piquapizzasupply: f64,
    pub topping: bool,
    pub appetizer: bool,
}

/// Body of `POST /updateingredient`.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct IngredientUpdate {
    #[serde(rename = "IngredientId")]
    pub ingredient_id: i64,
    #[serde(rename = "inDescription")]
    pub description: String,
    #[serde(rename = "inPackSize")]
    pub pack_size: i64,
    #[serde(rename = "inPackType")]
    pub pack_type: String,
    #[serde(rename = "inSmallServing")]
    pub small_serving: f64,
    #[serde(rename = "inLargeServing")]
    pub large_serving: f64,
    #[serde(rename = "inKingKoldPrice")]
    pub king_kold_price: f64,
    #[serde(rename = "inPiquaPizzaSupply")]
    pub piqua_pizza_supply: f64,
    #[serde(rename = "inTopping")]
    pub topping: bool,
    #[serde(rename = "inAppetizer")]
    pub appetizer: bool,
}

impl From<&Ingredient> for IngredientUpdate {
    fn from(i: &Ingredient) -> Self {
        Self {
            ingredient_id: i.ingredientid,
            description: i.description.clone(),
            pack_size: i.packsize,
            pack_type: i.packtype.clone(),
            small_serving: i.smallserving,
            large_serving: i.largeserving,
            king_kold_price: i.kingkoldprice,
            piqua_pizza_supply: i.piquapizzasupply,
            topping: i.topping,
            appetizer: i.appetizer,
        }
    }
}

/// Field edits requested for an ingredient; `None` keeps the current value.
#[derive(Debug, Default)]
pub(crate) struct IngredientEdit {
    pub description: Option<String>,
    pub pack_size: Option<i64>,
    pub pack_type: Option<String>,
    pub small_serving: Option<f64>,
    pub large_serving: Option<f64>,
    pub king_kold_price: Option<f64>,
    pub piqua_pizza_supply: Option<f64>,
    pub topping: Option<bool>,
    pub appetizer: Option<bool>,
}

impl IngredientEdit {
    pub fn apply(self, mut ingredient: Ingredient) -> Ingredient {
        if let Some(v) = self.description {
            ingredient.description = v;
        }
        if let Some(v) = self.pack_size {
            ingredient.packsize = v;
        }
        if let Some(v) = self.pack_type {
            ingredient.packtype = v;
        }
        if let Some(v) = self.small_serving {
            ingredient.smallserving = v;
        }
        if let Some(v) = self.large_serving {
            ingredient.largeserving = v;
        }
        if let Some(v) = self.king_kold_price {
            ingredient.kingkoldprice = v;
        }
        if let Some(v) = self.piqua_pizza_supply {
            ingredient.piquapizzasupply = v;
        }
        if let Some(v) = self.topping {
            ingredient.topping = v;
        }
        if let Some(v) = self.appetizer {
            ingredient.appetizer = v;
        }
        ingredient
    }
}
