//! HAL representations.
//!
//! A representation is a resource: links, properties and embedded
//! sub-representations, plus the CURIE name-spaces used to abbreviate link
//! relations. Builder methods take `&mut self` and answer `&mut Self` so calls
//! chain.
//!
//! ```
//! use hal::{Link, Representation};
//!
//! let mut author = Representation::new();
//! author.with_link(Link::new(Link::SELF_REL, "/people/1"));
//!
//! let mut post = Representation::new();
//! post.with_namespace("doc", "http://example.com/rels/{rel}")
//!     .with_link(Link::new(Link::SELF_REL, "/posts/1"))
//!     .with_link(Link::new("doc:comments", "/posts/1/comments"))
//!     .with_property("title", "Hello")
//!     .with_representation("author", author);
//!
//! assert_eq!(post.link().map(Link::href), Some("/posts/1"));
//! assert_eq!(
//!     post.link_for("http://example.com/rels/comments").map(Link::href),
//!     Some("/posts/1/comments")
//! );
//! assert_eq!(post.representations().count(), 1);
//! ```

use serde_json::{Map, Value as JsonValue};

use crate::link::{Link, LinkOptions};
use crate::namespace::NamespaceManager;

/// A resource with links, properties and embedded resources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Representation {
    namespace_manager: NamespaceManager,
    links: Vec<Link>,
    properties: Map<String, JsonValue>,
    /// Embedded children by relation, relations in first-insertion order.
    representations_for_rel: Vec<(String, Vec<Representation>)>,
}

impl Representation {
    /// Key of the links object in a rendered representation.
    pub const LINKS: &'static str = "_links";
    /// Key of the embedded resources object in a rendered representation.
    pub const EMBEDDED: &'static str = "_embedded";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- name-spaces ---

    /// Register a CURIE name-space on this representation.
    pub fn with_namespace(
        &mut self,
        name: impl Into<String>,
        reference: impl Into<String>,
    ) -> &mut Self {
        self.namespace_manager.with_namespace(name, reference);
        self
    }

    #[must_use]
    pub fn namespace_manager(&self) -> &NamespaceManager {
        &self.namespace_manager
    }

    /// Copy of the (name, template) pairs.
    #[must_use]
    pub fn namespaces(&self) -> Vec<(String, String)> {
        self.namespace_manager.namespaces()
    }

    // --- links ---

    /// Append a link. Links sharing a relation are kept, in order.
    pub fn with_link(&mut self, link: Link) -> &mut Self {
        self.links.push(link);
        self
    }

    /// Append a new link built from its attributes.
    pub fn with_link_to(
        &mut self,
        rel: impl Into<String>,
        href: impl Into<String>,
        options: LinkOptions,
    ) -> &mut Self {
        self.with_link(Link::with_options(rel, href, options))
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The first `self` link.
    ///
    /// Matches the relation literally; name-spaces are not consulted.
    #[must_use]
    pub fn link(&self) -> Option<&Link> {
        self.links.iter().find(|link| link.rel() == Link::SELF_REL)
    }

    /// The first link matching a reference or relation; see
    /// [`Representation::links_for`].
    #[must_use]
    pub fn link_for(&self, href_or_rel: &str) -> Option<&Link> {
        self.links_for(href_or_rel).next()
    }

    /// Links selected by expanded reference or by relation.
    ///
    /// An expanded reference matching a registered name-space is compacted to
    /// its CURIE first; otherwise the argument is taken as the relation.
    pub fn links_for(&self, href_or_rel: &str) -> impl Iterator<Item = &Link> {
        let rel = self
            .namespace_manager
            .curie(href_or_rel)
            .unwrap_or_else(|| href_or_rel.to_string());
        self.links.iter().filter(move |link| link.rel() == rel)
    }

    // --- properties ---

    /// Set a property, overwriting in place if the name exists.
    ///
    /// Values should be JSON primitives or arrays of them; this is not
    /// enforced. The names [`Self::LINKS`] and [`Self::EMBEDDED`] are reserved
    /// for rendering and are ignored.
    pub fn with_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> &mut Self {
        let name = name.into();
        if Self::is_reserved(&name) {
            tracing::debug!(name = %name, "reserved property name, ignoring");
            return self;
        }
        self.properties.insert(name, value.into());
        self
    }

    #[inline]
    fn is_reserved(name: &str) -> bool {
        name == Self::LINKS || name == Self::EMBEDDED
    }

    #[must_use]
    pub fn properties(&self) -> &Map<String, JsonValue> {
        &self.properties
    }

    /// Property value, or `None` when absent.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&JsonValue> {
        self.properties.get(name)
    }

    /// Property value, or `default` when absent.
    #[must_use]
    pub fn value_for<'a>(&'a self, name: &str, default: &'a JsonValue) -> &'a JsonValue {
        self.properties.get(name).unwrap_or(default)
    }

    // --- embedded representations ---

    /// Embed `representation` under `rel`, after any already there.
    pub fn with_representation(
        &mut self,
        rel: impl Into<String>,
        representation: Representation,
    ) -> &mut Self {
        let rel = rel.into();
        match self.representations_for_rel.iter_mut().find(|(r, _)| *r == rel) {
            Some((_, children)) => children.push(representation),
            None => self.representations_for_rel.push((rel, vec![representation])),
        }
        self
    }

    /// Every embedded representation, relation by relation.
    pub fn representations(&self) -> impl Iterator<Item = &Representation> {
        self.representations_for_rel
            .iter()
            .flat_map(|(_, children)| children.iter())
    }

    /// Embedded representations under one relation.
    #[must_use]
    pub fn representations_for(&self, rel: &str) -> &[Representation] {
        self.representations_for_rel
            .iter()
            .find(|(r, _)| r == rel)
            .map(|(_, children)| children.as_slice())
            .unwrap_or_default()
    }

    /// (relation, children) pairs in relation insertion order.
    #[must_use]
    pub fn representations_for_rel(&self) -> &[(String, Vec<Representation>)] {
        &self.representations_for_rel
    }
}
