use std::collections::BTreeMap;

/// One `id -> price` pair as served by the appetizer price endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PriceEntry {
    pub id: i64,
    pub price: f64,
}

/// Prices keyed by menu item id. Later entries for the same id win.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct PriceMap(BTreeMap<i64, f64>);

impl PriceMap {
    pub fn get(&self, id: i64) -> Option<f64> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, entry: PriceEntry) {
        self.0.insert(entry.id, entry.price);
    }
}

impl FromIterator<PriceEntry> for PriceMap {
    fn from_iter<I: IntoIterator<Item = PriceEntry>>(iter: I) -> Self {
        let mut map = PriceMap::default();
        iter.into_iter().for_each(|entry| map.insert(entry));
        map
    }
}
