//! Shape detection for a single response element.

use serde_json::{Map, Value};
use crate::backoffice::normalize::tuple;

/// Structural form of one response element, decided before any field is read.
#[derive(Debug, PartialEq)]
pub(crate) enum Shape<'a> {
    /// A legacy `( ... )` row, either bare or under one of the source's tuple keys.
    TupleEncoded(&'a str),
    /// A property object whose field names vary in casing and naming.
    AliasedObject(&'a Map<String, Value>),
    Unrecognized,
}

impl<'a> Shape<'a> {
    /// Precedence: array unwrap, tuple key, bare string, property object.
    pub(crate) fn detect(item: &'a Value, tuple_keys: &[&str]) -> Self {
        let item = match item {
            Value::Array(entries) if !entries.is_empty() => &entries[0],
            other => other,
        };
        match item {
            Value::Object(object) => match lookup(object, tuple_keys) {
                Some(Value::String(raw)) => Shape::TupleEncoded(raw),
                Some(_) => Shape::Unrecognized,
                None => Shape::AliasedObject(object),
            },
            Value::String(raw) => Shape::TupleEncoded(raw),
            _ => Shape::Unrecognized,
        }
    }
}

/// A canonical record that can be built from either shape.
pub(crate) trait Canonical: Sized {
    /// Fields a tuple row needs before it is considered usable.
    const MIN_FIELDS: usize;

    fn from_fields(fields: &[String]) -> Option<Self>;

    fn from_object(object: &Map<String, Value>) -> Option<Self>;
}

/// Normalize one element, or `None` when no shape produced usable data.
pub(crate) fn normalize<T: Canonical>(item: &Value, tuple_keys: &[&str]) -> Option<T> {
    match Shape::detect(item, tuple_keys) {
        Shape::TupleEncoded(raw) => {
            tuple::decode_at_least(raw, T::MIN_FIELDS).and_then(|fields| T::from_fields(&fields))
        }
        Shape::AliasedObject(object) => T::from_object(object),
        Shape::Unrecognized => None,
    }
}

/// First alias that is present and not null.
pub(crate) fn lookup<'a>(object: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .find_map(|alias| object.get(*alias).filter(|v| !v.is_null()))
}
