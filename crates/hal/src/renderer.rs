//! Representation to tree.
//!
//! Output keys follow construction order: `_links`, then the properties, then
//! `_embedded`. A relation with one link or one embedded resource renders as
//! an object; more than one renders as an array.
//!
//! Name-spaces render as `curies` links, ahead of the representation's own
//! links, and only at the outermost level.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::link::{Link, LinkOptions};
use crate::one_or_many::OneOrMany;
use crate::representation::Representation;

/// Render a top-level representation as a JSON tree.
#[must_use]
pub fn render(representation: &Representation) -> JsonValue {
    tracing::debug!(
        links = representation.links().len(),
        namespaces = representation.namespace_manager().len(),
        "rendering representation"
    );
    JsonValue::Object(render_representation(representation, false))
}

fn render_representation(
    representation: &Representation,
    embedded: bool,
) -> Map<String, JsonValue> {
    let mut object = Map::new();

    let curies: Vec<Link> = if embedded {
        Vec::new()
    } else {
        representation
            .namespace_manager()
            .iter()
            .map(|(name, reference)| {
                Link::with_options(Link::CURIES_REL, reference, LinkOptions::new().name(name))
            })
            .collect()
    };

    if !curies.is_empty() || !representation.links().is_empty() {
        let links = curies.iter().chain(representation.links());
        object.insert(Representation::LINKS.to_string(), JsonValue::Object(render_links(links)));
    }

    for (name, value) in representation.properties() {
        object.insert(name.clone(), value.clone());
    }

    if !representation.representations_for_rel().is_empty() {
        let mut embedded_object = Map::new();
        for (rel, children) in representation.representations_for_rel() {
            let rendered: Vec<JsonValue> = children
                .iter()
                .map(|child| JsonValue::Object(render_representation(child, true)))
                .collect();
            embedded_object.insert(rel.clone(), OneOrMany::collapse(rendered).into());
        }
        object.insert(Representation::EMBEDDED.to_string(), JsonValue::Object(embedded_object));
    }

    object
}

/// Group links by relation, keeping first-seen relation order.
fn render_links<'a>(links: impl Iterator<Item = &'a Link>) -> Map<String, JsonValue> {
    let mut links_for_rel: Vec<(&str, Vec<JsonValue>)> = Vec::new();
    for link in links {
        let rendered = render_link(link);
        match links_for_rel.iter_mut().find(|(rel, _)| *rel == link.rel()) {
            Some((_, group)) => group.push(rendered),
            None => links_for_rel.push((link.rel(), vec![rendered])),
        }
    }

    links_for_rel
        .into_iter()
        .map(|(rel, group)| (rel.to_string(), OneOrMany::collapse(group).into()))
        .collect()
}

/// A link renders as its attributes only; the relation is the key it sits
/// under.
fn render_link(link: &Link) -> JsonValue {
    let mut object = Map::new();
    object.insert(Link::HREF.to_string(), JsonValue::from(link.href()));
    for (key, value) in link.optional_attributes() {
        object.insert(key.to_string(), JsonValue::from(value));
    }
    JsonValue::Object(object)
}

impl Serialize for Representation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        render(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_representation() {
        let mut embedded = Representation::new();
        embedded
            .with_property("hello", "world")
            .with_link(Link::new(Link::SELF_REL, "http://localhost:9292/sub"));

        let mut representation = Representation::new();
        representation
            .with_namespace("ns", "http://localhost:9292/{rel}")
            .with_link(Link::new(Link::SELF_REL, "http://localhost:9292/self"))
            .with_property("value", 123)
            .with_property("array", json!([1, 2, 3]))
            .with_representation("sub", embedded);

        assert_eq!(
            render(&representation),
            json!({
                "_links": {
                    "curies": {"href": "http://localhost:9292/{rel}", "name": "ns"},
                    "self": {"href": "http://localhost:9292/self"}
                },
                "value": 123,
                "array": [1, 2, 3],
                "_embedded": {
                    "sub": {
                        "_links": {"self": {"href": "http://localhost:9292/sub"}},
                        "hello": "world"
                    }
                }
            })
        );
    }

    #[test]
    fn test_key_order() {
        let mut representation = Representation::new();
        representation
            .with_representation("child", Representation::new())
            .with_property("z", 1)
            .with_property("a", 2)
            .with_link(Link::new(Link::SELF_REL, "/"));
        let rendered = render(&representation);
        let keys: Vec<_> = rendered.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["_links", "z", "a", "_embedded"]);
    }

    #[test]
    fn test_links_single_vs_many() {
        let mut representation = Representation::new();
        representation
            .with_link(Link::new("item", "/1"))
            .with_link(Link::new(Link::SELF_REL, "/"))
            .with_link(Link::new("item", "/2"));
        let rendered = render(&representation);
        assert_eq!(rendered["_links"]["self"], json!({"href": "/"}));
        assert_eq!(rendered["_links"]["item"], json!([{"href": "/1"}, {"href": "/2"}]));
        let rels: Vec<_> = rendered["_links"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(rels, ["item", "self"]);
    }

    #[test]
    fn test_optional_attributes() {
        let mut representation = Representation::new();
        representation.with_link_to(
            "item",
            "/1",
            LinkOptions::new().name("one").title("One").hreflang("en").profile("/p"),
        );
        assert_eq!(
            render(&representation)["_links"]["item"],
            json!({"href": "/1", "name": "one", "title": "One", "hreflang": "en", "profile": "/p"})
        );
    }

    #[test]
    fn test_embedded_single_vs_many() {
        let mut representation = Representation::new();
        representation
            .with_representation("item", Representation::new())
            .with_representation("item", Representation::new())
            .with_representation("author", Representation::new());
        let rendered = render(&representation);
        assert_eq!(rendered["_embedded"]["item"], json!([{}, {}]));
        assert_eq!(rendered["_embedded"]["author"], json!({}));
    }

    #[test]
    fn test_embedded_namespaces_not_rendered() {
        let mut child = Representation::new();
        child.with_namespace("inner", "http://inner/{rel}");
        let mut representation = Representation::new();
        representation.with_representation("child", child);
        assert_eq!(render(&representation), json!({"_embedded": {"child": {}}}));
    }

    #[test]
    fn test_namespaces_alone_render_links() {
        let mut representation = Representation::new();
        representation
            .with_namespace("a", "http://a/{rel}")
            .with_namespace("b", "http://b/{rel}");
        assert_eq!(
            render(&representation),
            json!({"_links": {"curies": [
                {"href": "http://a/{rel}", "name": "a"},
                {"href": "http://b/{rel}", "name": "b"}
            ]}})
        );
        assert!(representation.links().is_empty());
    }

    #[test]
    fn test_reserved_property_cannot_replace_links() {
        let mut representation = Representation::new();
        representation
            .with_link(Link::new(Link::SELF_REL, "/real"))
            .with_property(Representation::LINKS, json!({"self": {"href": "/fake"}}));
        assert_eq!(render(&representation), json!({"_links": {"self": {"href": "/real"}}}));
    }

    #[test]
    fn test_empty_representation() {
        assert_eq!(render(&Representation::new()), json!({}));
    }

    #[test]
    fn test_empty_href() {
        let mut representation = Representation::new();
        representation.with_link(Link::new("empty", ""));
        assert_eq!(render(&representation)["_links"]["empty"], json!({"href": ""}));
    }

    #[test]
    fn test_serialize() {
        let mut representation = Representation::new();
        representation.with_link(Link::new(Link::SELF_REL, "/x")).with_property("v", 1);
        assert_eq!(
            serde_json::to_string(&representation).unwrap(),
            r#"{"_links":{"self":{"href":"/x"}},"v":1}"#
        );
    }
}
