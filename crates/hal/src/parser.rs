//! Tree to representation.
//!
//! The parser does not validate. It picks out the pieces of a JSON tree that
//! match HAL expectations and ignores everything else: a `curies` entry
//! without a string `name` and `href`, or a link without `href`, is skipped.
//!
//! ```
//! use serde_json::json;
//!
//! let representation = hal::parse(&json!({
//!     "_links": {"self": {"href": "/a"}},
//!     "n": 1,
//!     "_embedded": {"sub": {"_links": {"self": {"href": "/b"}}, "m": 2}}
//! }));
//!
//! assert_eq!(representation.link().map(hal::Link::href), Some("/a"));
//! assert_eq!(representation.representations_for("sub").len(), 1);
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as JsonValue};

use crate::link::{Link, LinkOptions};
use crate::one_or_many::OneOrMany;
use crate::representation::Representation;

/// Parse a JSON tree into a new representation.
///
/// Never fails. A root that is not an object yields an empty representation.
#[must_use]
pub fn parse(value: &JsonValue) -> Representation {
    let mut representation = Representation::new();
    match value {
        JsonValue::Object(object) => parse_object(&mut representation, object),
        _ => tracing::trace!("root is not an object, nothing to parse"),
    }
    tracing::debug!(
        links = representation.links().len(),
        properties = representation.properties().len(),
        embedded = representation.representations().count(),
        "parsed representation"
    );
    representation
}

fn parse_object(representation: &mut Representation, object: &Map<String, JsonValue>) {
    if let Some(links_value) = object.get(Representation::LINKS) {
        if let Some(links_object) = links_value.as_object() {
            parse_curies(representation, links_object);
            parse_links(representation, links_object);
        } else {
            tracing::trace!("`_links` is not an object, ignoring");
        }
    }

    // Properties live at the root, next to `_links` and `_embedded`.
    for (name, value) in object {
        if name == Representation::LINKS || name == Representation::EMBEDDED {
            continue;
        }
        representation.with_property(name.clone(), value.clone());
    }

    if let Some(embedded) = object.get(Representation::EMBEDDED).and_then(JsonValue::as_object) {
        for (rel, children) in embedded {
            for child in OneOrMany::from_value(children).into_vec() {
                let Some(child_object) = child.as_object() else {
                    tracing::trace!(rel = %rel, "embedded element is not an object, skipping");
                    continue;
                };
                let mut child_representation = Representation::new();
                parse_object(&mut child_representation, child_object);
                representation.with_representation(rel.clone(), child_representation);
            }
        }
    }
}

/// Register a name-space for each `curies` entry that has string `name` and
/// `href`. The `href` is a template holding the `{rel}` placeholder.
fn parse_curies(representation: &mut Representation, links_object: &Map<String, JsonValue>) {
    let Some(curies) = links_object.get(Link::CURIES_REL) else {
        return;
    };
    for curie in OneOrMany::from_value(curies).into_vec() {
        let Some(curie) = curie.as_object() else {
            continue;
        };
        let name = curie.get(Link::NAME).and_then(JsonValue::as_str);
        let reference = curie.get(Link::HREF).and_then(JsonValue::as_str);
        match (name, reference) {
            (Some(name), Some(reference)) => {
                representation.with_namespace(name, reference);
            }
            _ => tracing::trace!(?curie, "curie needs string name and href, skipping"),
        }
    }
}

/// Append a link for each element under every relation except `curies`.
///
/// Attributes come from the link element itself.
fn parse_links(representation: &mut Representation, links_object: &Map<String, JsonValue>) {
    for (rel, link_values) in links_object {
        if rel == Link::CURIES_REL {
            continue;
        }
        for link_value in OneOrMany::from_value(link_values).into_vec() {
            let Some(link_object) = link_value.as_object() else {
                tracing::trace!(rel = %rel, "link is not an object, skipping");
                continue;
            };
            let Some(href) = attribute(link_object, Link::HREF) else {
                tracing::trace!(rel = %rel, "link has no href, skipping");
                continue;
            };
            let options = LinkOptions {
                name: attribute(link_object, Link::NAME),
                title: attribute(link_object, Link::TITLE),
                hreflang: attribute(link_object, Link::HREFLANG),
                profile: attribute(link_object, Link::PROFILE),
            };
            representation.with_link(Link::with_options(rel.clone(), href, options));
        }
    }
}

/// String form of a present, non-falsy attribute. `null` and `false` count as
/// absent.
fn attribute(object: &Map<String, JsonValue>, key: &str) -> Option<String> {
    match object.get(key)? {
        JsonValue::Null | JsonValue::Bool(false) => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl<'de> Deserialize<'de> for Representation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(|value| parse(&value))
    }
}
