pub(crate) mod config;
pub(crate) mod ingredient;
pub(crate) mod item;
pub(crate) mod notice;
pub(crate) mod order;
pub(crate) mod price;
