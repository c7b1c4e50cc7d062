//! Links between a representation and other resources.
//!
//! Every link has a relation and a hypertext reference. Four more attributes
//! are optional: `name`, `title`, `hreflang` and `profile`. A representation
//! may carry several links sharing one relation.
//!
//! Links stay mutable until [`Link::lock`] is called. After that every setter
//! and every `*_mut` accessor answers [`Error::Immutable`].
//!
//! ```
//! use hal::{Link, LinkOptions};
//!
//! let mut link = Link::with_options("item", "/orders/1", LinkOptions::new().title("First order"));
//! link.set_hreflang(Some("en".into())).unwrap();
//! link.lock();
//! assert!(link.set_rel("other").is_err());
//! ```

use crate::error::{Error, Result};

/// Optional link attributes, by name.
///
/// Positional construction fills the slots in the fixed order `name`, `title`,
/// `hreflang`, `profile`; see [`LinkOptions::positional`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    pub name: Option<String>,
    pub title: Option<String>,
    pub hreflang: Option<String>,
    pub profile: Option<String>,
}

impl LinkOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill slots in order `name`, `title`, `hreflang`, `profile`.
    ///
    /// Values beyond the fourth are ignored.
    pub fn positional<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = values.into_iter().map(Into::into);
        Self {
            name: values.next(),
            title: values.next(),
            hreflang: values.next(),
            profile: values.next(),
        }
    }

    /// Fill the slots still empty in `self` from `other`.
    ///
    /// A slot already set wins over the same slot in `other`.
    #[must_use]
    pub fn or(self, other: LinkOptions) -> Self {
        Self {
            name: self.name.or(other.name),
            title: self.title.or(other.title),
            hreflang: self.hreflang.or(other.hreflang),
            profile: self.profile.or(other.profile),
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    #[must_use]
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

/// A relation-to-reference edge of a representation.
#[derive(Debug, Clone, Eq)]
pub struct Link {
    rel: String,
    href: String,
    name: Option<String>,
    title: Option<String>,
    hreflang: Option<String>,
    profile: Option<String>,
    locked: bool,
}

impl Link {
    // Required attribute names.
    pub const REL: &'static str = "rel";
    pub const HREF: &'static str = "href";

    // Optional attribute names.
    pub const NAME: &'static str = "name";
    pub const TITLE: &'static str = "title";
    pub const HREFLANG: &'static str = "hreflang";
    pub const PROFILE: &'static str = "profile";

    /// Required attribute names followed by optional ones.
    pub const ATTRIBUTE_NAMES: [&'static str; 6] = [
        Self::REL,
        Self::HREF,
        Self::NAME,
        Self::TITLE,
        Self::HREFLANG,
        Self::PROFILE,
    ];

    /// Relation of the link to the representation's own source.
    pub const SELF_REL: &'static str = "self";

    /// Relation under which name-spaces appear in rendered `_links`. The link
    /// `name` is the name-space name and its `href` the template.
    pub const CURIES_REL: &'static str = "curies";

    /// Create a mutable link with no optional attributes.
    #[must_use]
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self::with_options(rel, href, LinkOptions::default())
    }

    /// Create a mutable link with optional attributes.
    #[must_use]
    pub fn with_options(
        rel: impl Into<String>,
        href: impl Into<String>,
        options: LinkOptions,
    ) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            name: options.name,
            title: options.title,
            hreflang: options.hreflang,
            profile: options.profile,
            locked: false,
        }
    }

    /// Make the link and all of its attributes immutable. Locking is one-way.
    pub fn lock(&mut self) -> &mut Self {
        self.locked = true;
        self
    }

    /// Builder form of [`Link::lock`].
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    fn check(&self, field: &'static str) -> Result<()> {
        if self.locked {
            return Err(Error::Immutable { field });
        }
        Ok(())
    }

    // --- required attributes ---

    #[must_use]
    pub fn rel(&self) -> &str {
        &self.rel
    }

    /// The reference may be a full URL or only part of one, e.g. a path.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// # Errors
    ///
    /// Returns `Error::Immutable` if the link is locked.
    pub fn set_rel(&mut self, rel: impl Into<String>) -> Result<()> {
        self.check(Self::REL)?;
        self.rel = rel.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::Immutable` if the link is locked.
    pub fn set_href(&mut self, href: impl Into<String>) -> Result<()> {
        self.check(Self::HREF)?;
        self.href = href.into();
        Ok(())
    }

    /// Mutable access to the relation string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Immutable` if the link is locked.
    pub fn rel_mut(&mut self) -> Result<&mut String> {
        self.check(Self::REL)?;
        Ok(&mut self.rel)
    }

    /// Mutable access to the reference string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Immutable` if the link is locked.
    pub fn href_mut(&mut self) -> Result<&mut String> {
        self.check(Self::HREF)?;
        Ok(&mut self.href)
    }

    // --- optional attributes ---

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// ISO 639-1 code of the linked resource's language.
    #[must_use]
    pub fn hreflang(&self) -> Option<&str> {
        self.hreflang.as_deref()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// # Errors
    ///
    /// Returns `Error::Immutable` if the link is locked.
    pub fn set_name(&mut self, name: Option<String>) -> Result<()> {
        self.check(Self::NAME)?;
        self.name = name;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::Immutable` if the link is locked.
    pub fn set_title(&mut self, title: Option<String>) -> Result<()> {
        self.check(Self::TITLE)?;
        self.title = title;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::Immutable` if the link is locked.
    pub fn set_hreflang(&mut self, hreflang: Option<String>) -> Result<()> {
        self.check(Self::HREFLANG)?;
        self.hreflang = hreflang;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Error::Immutable` if the link is locked.
    pub fn set_profile(&mut self, profile: Option<String>) -> Result<()> {
        self.check(Self::PROFILE)?;
        self.profile = profile;
        Ok(())
    }

    /// Mutable access to a present optional attribute, selected by its name
    /// (one of [`Link::NAME`], [`Link::TITLE`], [`Link::HREFLANG`],
    /// [`Link::PROFILE`]). Answers `Ok(None)` for absent or unknown attributes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Immutable` if the link is locked.
    pub fn attr_mut(&mut self, attr: &str) -> Result<Option<&mut String>> {
        let (field, slot) = match attr {
            Self::NAME => (Self::NAME, &mut self.name),
            Self::TITLE => (Self::TITLE, &mut self.title),
            Self::HREFLANG => (Self::HREFLANG, &mut self.hreflang),
            Self::PROFILE => (Self::PROFILE, &mut self.profile),
            _ => return Ok(None),
        };
        if self.locked {
            return Err(Error::Immutable { field });
        }
        Ok(slot.as_mut())
    }

    /// The optional attributes as (name, value) pairs, present ones only, in
    /// fixed order.
    pub fn optional_attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let values = [
            self.name.as_deref(),
            self.title.as_deref(),
            self.hreflang.as_deref(),
            self.profile.as_deref(),
        ];
        // Skip `rel` and `href`.
        Self::ATTRIBUTE_NAMES
            .into_iter()
            .skip(2)
            .zip(values)
            .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

// Lock state is not part of a link's value.
impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.rel == other.rel
            && self.href == other.href
            && self.name == other.name
            && self.title == other.title
            && self.hreflang == other.hreflang
            && self.profile == other.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> Link {
        Link::new("rel", "/path")
    }

    #[test]
    fn test_new() {
        let link = link();
        assert_eq!(link.rel(), "rel");
        assert_eq!(link.href(), "/path");
        assert_eq!(link.name(), None);
        assert!(!link.is_locked());

        let options = LinkOptions::new().name("other_name");
        let other = Link::with_options("other_rel", "/other_path", options);
        assert_eq!(other.name(), Some("other_name"));
    }

    #[test]
    fn test_positional_options() {
        let options = LinkOptions::positional(["n", "t", "en"]);
        assert_eq!(options.name.as_deref(), Some("n"));
        assert_eq!(options.title.as_deref(), Some("t"));
        assert_eq!(options.hreflang.as_deref(), Some("en"));
        assert_eq!(options.profile, None);
    }

    #[test]
    fn test_positional_wins_over_named() {
        let named = LinkOptions::new().name("named").profile("p");
        let options = LinkOptions::positional(["positional"]).or(named);
        assert_eq!(options.name.as_deref(), Some("positional"));
        assert_eq!(options.profile.as_deref(), Some("p"));
    }

    #[test]
    fn test_mutates() {
        let mut link = link();
        link.set_rel("otherRel").unwrap();
        assert_eq!(link.rel(), "otherRel");
        link.href_mut().unwrap().push_str("/more");
        assert_eq!(link.href(), "/path/more");
    }

    #[test]
    fn test_lock_rejects_reassignment() {
        let mut link = link();
        link.lock();
        assert_eq!(link.set_rel("frozenRel"), Err(Error::Immutable { field: "rel" }));
        assert_eq!(link.set_href("/x"), Err(Error::Immutable { field: "href" }));
        assert!(link.set_name(Some("n".into())).is_err());
        assert!(link.set_title(None).is_err());
        assert!(link.set_hreflang(None).is_err());
        assert!(link.set_profile(None).is_err());
        assert_eq!(link.rel(), "rel");
    }

    #[test]
    fn test_lock_rejects_string_mutation() {
        let mut link = Link::with_options("rel", "/path", LinkOptions::new().title("t")).locked();
        assert!(link.rel_mut().is_err());
        assert!(matches!(link.href_mut(), Err(Error::Immutable { field: "href" })));
        assert!(matches!(link.attr_mut(Link::TITLE), Err(Error::Immutable { field: "title" })));
        assert_eq!(link.href(), "/path");
    }

    #[test]
    fn test_attr_mut_unlocked() {
        let mut link = Link::with_options("rel", "/path", LinkOptions::new().title("t"));
        link.attr_mut(Link::TITLE).unwrap().unwrap().push('!');
        assert_eq!(link.title(), Some("t!"));
        assert!(link.attr_mut(Link::NAME).unwrap().is_none());
        assert!(link.attr_mut("bogus").unwrap().is_none());
    }

    #[test]
    fn test_optional_attributes_in_order() {
        let link = Link::with_options("r", "/h", LinkOptions::new().profile("p").name("n"));
        let attrs: Vec<_> = link.optional_attributes().collect();
        assert_eq!(attrs, [("name", "n"), ("profile", "p")]);

        let full = Link::with_options("r", "/h", LinkOptions::positional(["n", "t", "l", "p"]));
        let keys: Vec<_> = full.optional_attributes().map(|(key, _)| key).collect();
        assert_eq!(keys, &Link::ATTRIBUTE_NAMES[2..]);
    }

    #[test]
    fn test_eq_ignores_lock() {
        assert_eq!(link(), link().locked());
    }
}
