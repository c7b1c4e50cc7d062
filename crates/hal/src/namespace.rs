//! Compact URI (CURIE) name-spaces.
//!
//! A name-space pairs a name with a reference template containing the
//! [`NamespaceManager::REL`] placeholder. The manager translates in both
//! directions: expanded reference to `name:arg`, and `name:arg` back to the
//! expanded reference.
//!
//! ```
//! use hal::NamespaceManager;
//!
//! let mut manager = NamespaceManager::new();
//! manager.with_namespace("ns", "http://localhost/{rel}/to");
//!
//! assert_eq!(manager.curie("http://localhost/path/to").as_deref(), Some("ns:path"));
//! assert_eq!(manager.href("ns:arg").as_deref(), Some("http://localhost/arg/to"));
//! ```

/// Ordered registry of CURIE name-spaces.
///
/// Templates are not checked for uniqueness. When more than one template
/// matches a reference, the first one registered wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceManager {
    /// (name, template) pairs in registration order.
    refs: Vec<(String, String)>,
}

impl NamespaceManager {
    /// Placeholder substituted by the CURIE argument.
    pub const REL: &'static str = "{rel}";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a name-space.
    ///
    /// Replacing keeps the original registration position. The template should
    /// contain [`Self::REL`]; this is not checked.
    pub fn with_namespace(
        &mut self,
        name: impl Into<String>,
        reference: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        let reference = reference.into();
        match self.refs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = reference,
            None => self.refs.push((name, reference)),
        }
        self
    }

    /// Copy of the registered (name, template) pairs, in registration order.
    #[must_use]
    pub fn namespaces(&self) -> Vec<(String, String)> {
        self.refs.clone()
    }

    /// Template registered under `name`.
    #[must_use]
    pub fn reference(&self, name: &str) -> Option<&str> {
        self.refs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r.as_str())
    }

    /// Iterate (name, template) pairs without copying.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.refs.iter().map(|(n, r)| (n.as_str(), r.as_str()))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Compact an expanded reference to `name:arg`.
    ///
    /// Returns `None` when no template matches.
    #[must_use]
    pub fn curie(&self, href: &str) -> Option<String> {
        self.refs.iter().find_map(|(name, reference)| {
            let (left, right) = reference.split_once(Self::REL)?;
            if href.len() < left.len() + right.len() {
                return None;
            }
            let arg = href.strip_prefix(left)?.strip_suffix(right)?;
            Some(format!("{name}:{arg}"))
        })
    }

    /// Expand a `name:arg` CURIE to its full reference.
    ///
    /// Splits at the first colon, so the argument may itself contain colons.
    /// Returns `None` if there is no colon or the name is not registered.
    #[must_use]
    pub fn href(&self, curie: &str) -> Option<String> {
        let (name, arg) = curie.split_once(':')?;
        self.reference(name)
            .map(|reference| reference.replacen(Self::REL, arg, 1))
    }
}
