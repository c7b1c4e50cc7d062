//! The HAL "one object or an array of objects" convention.
//!
//! Both `_links` relations and `_embedded` relations carry either a single
//! object or an array of them. Parsing always coerces to a sequence; rendering
//! collapses a one-element sequence back to a single value.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Either a single value or an ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Exactly one value, rendered without a surrounding array.
    Single(T),
    /// Zero or more values in order.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Collapse a sequence: one element becomes `Single`, anything else `Many`.
    #[must_use]
    pub fn collapse(mut items: Vec<T>) -> Self {
        if items.len() == 1
            && let Some(item) = items.pop()
        {
            return OneOrMany::Single(item);
        }
        OneOrMany::Many(items)
    }

    /// Number of values held.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::Single(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into an ordered vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Single(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<'a> OneOrMany<&'a JsonValue> {
    /// Coerce a tree value: arrays are taken element-wise, anything else is a
    /// one-element sequence.
    #[must_use]
    pub fn from_value(value: &'a JsonValue) -> Self {
        match value {
            JsonValue::Array(items) => OneOrMany::Many(items.iter().collect()),
            other => OneOrMany::Single(other),
        }
    }
}

impl<T: Into<JsonValue>> From<OneOrMany<T>> for JsonValue {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Single(item) => item.into(),
            OneOrMany::Many(items) => JsonValue::Array(items.into_iter().map(Into::into).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collapse() {
        assert_eq!(OneOrMany::collapse(vec![1]), OneOrMany::Single(1));
        assert_eq!(OneOrMany::collapse(vec![1, 2]), OneOrMany::Many(vec![1, 2]));
        assert_eq!(OneOrMany::<i32>::collapse(vec![]), OneOrMany::Many(vec![]));
    }

    #[test]
    fn test_from_value_coerces_object() {
        let value = json!({"href": "/a"});
        let coerced = OneOrMany::from_value(&value);
        assert_eq!(coerced.len(), 1);
        assert_eq!(coerced.into_vec(), vec![&value]);
    }

    #[test]
    fn test_from_value_keeps_array_order() {
        let value = json!([{"href": "/a"}, {"href": "/b"}]);
        let items = OneOrMany::from_value(&value).into_vec();
        assert_eq!(items[0]["href"], "/a");
        assert_eq!(items[1]["href"], "/b");
    }

    #[test]
    fn test_into_json() {
        let single: JsonValue = OneOrMany::collapse(vec![json!(1)]).into();
        assert_eq!(single, json!(1));

        let many: JsonValue = OneOrMany::collapse(vec![json!(1), json!(2)]).into();
        assert_eq!(many, json!([1, 2]));
    }

    #[test]
    fn test_serialize_untagged() {
        let single = serde_json::to_value(OneOrMany::Single("x")).unwrap();
        assert_eq!(single, json!("x"));
        let many = serde_json::to_value(OneOrMany::Many(vec!["x", "y"])).unwrap();
        assert_eq!(many, json!(["x", "y"]));
    }
}
