use std::collections::BTreeSet;
use derive_more::{Display, Error};
use serde::Serialize;
use crate::backoffice::model::price::PriceMap;

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum DraftError {
    #[display("At least one order is required")]
    LastLine,
    #[display("Please select an appetizer for all orders")]
    UnselectedItem,
    #[display("Please select a pizza size")]
    NoSize,
    #[display("quantity must be at least 1")]
    InvalidQuantity,
    #[display("order line not found")]
    UnknownLine,
}

/// One appetizer line of an order being entered. `local_id` only correlates UI actions
/// and is never sent.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OrderDraftLine {
    pub local_id: f64,
    pub item_id: Option<i64>,
    pub quantity: u32,
}

impl OrderDraftLine {
    fn new() -> Self {
        Self {
            local_id: rand::random(),
            item_id: None,
            quantity: 1,
        }
    }
}

/// Appetizer order being entered. Always holds at least one line.
#[derive(Debug, Clone)]
pub(crate) struct OrderDraft {
    pub order_date: String,
    lines: Vec<OrderDraftLine>,
}

impl OrderDraft {
    pub fn new(order_date: String) -> Self {
        Self {
            order_date,
            lines: vec![OrderDraftLine::new()],
        }
    }

    pub fn lines(&self) -> &[OrderDraftLine] {
        &self.lines
    }

    /// Append an empty line and return its local id.
    pub fn add_line(&mut self) -> f64 {
        let line = OrderDraftLine::new();
        let id = line.local_id;
        self.lines.push(line);
        id
    }

    pub fn remove_line(&mut self, local_id: f64) -> Result<(), DraftError> {
        if self.lines.len() == 1 {
            return Err(DraftError::LastLine);
        }
        let before = self.lines.len();
        self.lines.retain(|l| l.local_id != local_id);
        match self.lines.len() == before {
            true => Err(DraftError::UnknownLine),
            false => Ok(()),
        }
    }

    pub fn select_item(&mut self, local_id: f64, item_id: i64) -> Result<(), DraftError> {
        self.line_mut(local_id)?.item_id = Some(item_id);
        Ok(())
    }

    pub fn set_quantity(&mut self, local_id: f64, quantity: u32) -> Result<(), DraftError> {
        if quantity < 1 {
            return Err(DraftError::InvalidQuantity);
        }
        self.line_mut(local_id)?.quantity = quantity;
        Ok(())
    }

    /// Sum of price times quantity over the lines whose item has a known price.
    pub fn total(&self, prices: &PriceMap) -> f64 {
        self.lines
            .iter()
            .filter_map(|l| {
                l.item_id
                    .and_then(|id| prices.get(id))
                    .map(|price| price * f64::from(l.quantity))
            })
            .sum()
    }

    pub fn submission(&self, prices: &PriceMap) -> Result<AppetizerOrderSubmission, DraftError> {
        let items = self
            .lines
            .iter()
            .map(|l| {
                l.item_id
                    .map(|id| OrderItem { ingredientid: id, quantity: l.quantity })
                    .ok_or(DraftError::UnselectedItem)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AppetizerOrderSubmission {
            appetizerorderdate: self.order_date.clone(),
            items,
            ordertotal: self.total(prices),
        })
    }

    pub fn reset(&mut self, order_date: String) {
        *self = Self::new(order_date);
    }

    fn line_mut(&mut self, local_id: f64) -> Result<&mut OrderDraftLine, DraftError> {
        self.lines
            .iter_mut()
            .find(|l| l.local_id == local_id)
            .ok_or(DraftError::UnknownLine)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct OrderItem {
    pub ingredientid: i64,
    pub quantity: u32,
}

/// Body of `POST /insertappetizerorder`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AppetizerOrderSubmission {
    pub appetizerorderdate: String,
    pub items: Vec<OrderItem>,
    pub ordertotal: f64,
}

/// Pizza order being entered: one size and any number of toppings.
#[derive(Debug, Clone)]
pub(crate) struct PizzaOrderDraft {
    pub order_date: String,
    pub size: Option<i64>,
    toppings: BTreeSet<i64>,
}

impl PizzaOrderDraft {
    pub fn new(order_date: String) -> Self {
        Self {
            order_date,
            size: None,
            toppings: BTreeSet::new(),
        }
    }

    pub fn select_size(&mut self, size_id: i64) {
        self.size = Some(size_id);
    }

    /// Flip a topping on or off, returning whether it is now selected.
    pub fn toggle_topping(&mut self, topping_id: i64) -> bool {
        if self.toppings.remove(&topping_id) {
            return false;
        }
        self.toppings.insert(topping_id)
    }

    pub fn has_topping(&self, topping_id: i64) -> bool {
        self.toppings.contains(&topping_id)
    }

    pub fn submission(&self) -> Result<PizzaOrderSubmission, DraftError> {
        let sizeid = self.size.ok_or(DraftError::NoSize)?;
        Ok(PizzaOrderSubmission {
            sizeid,
            toppingids: self.toppings.iter().copied().collect(),
            orderdate: self.order_date.clone(),
        })
    }

    pub fn reset(&mut self, order_date: String) {
        *self = Self::new(order_date);
    }
}

/// Body of `POST /insertpizzaorder`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PizzaOrderSubmission {
    pub sizeid: i64,
    pub toppingids: Vec<i64>,
    pub orderdate: String,
}
