//! Query parameter building.
//!
//! Request structs use plain scalars where the zero value means "not set":
//! an empty string, `0` or `0.0` is never sent. A caller therefore cannot ask
//! for `offset=0` or `radius=0` explicitly; the upstream defaults apply instead.
//! Booleans are the exception and are always sent.

use std::collections::BTreeMap;

use serde::Serialize;

/// A scalar that can be written as a query string value.
///
/// Returns `None` when the value is its type's zero value and should be left out.
pub trait QueryValue {
    fn to_query_value(&self) -> Option<String>;
}

impl QueryValue for str {
    fn to_query_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> Option<String> {
        self.as_str().to_query_value()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

macro_rules! numeric_query_value {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> Option<String> {
                    (*self != $zero).then(|| self.to_string())
                }
            }
        )*
    };
}

numeric_query_value!(u32 => 0, i64 => 0, f64 => 0.0);

/// Filtered, ordered set of query parameters for one request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<&'static str, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` under `key` unless it is a zero value
    pub fn insert<V: QueryValue + ?Sized>(&mut self, key: &'static str, value: &V) -> &mut Self {
        if let Some(value) = value.to_query_value() {
            self.0.insert(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
