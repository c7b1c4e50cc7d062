//! Hypertext Application Language (HAL) representations.
//!
//! A [`Representation`] holds links, properties and embedded representations.
//! [`parse`] builds one from an already-decoded JSON tree and [`render`] turns
//! one back into a tree. Decoding and encoding JSON text is left to the caller.
//!
//! ```
//! use hal::{Link, Representation};
//! use serde_json::json;
//!
//! let tree = json!({
//!     "_links": {"self": {"href": "/a"}},
//!     "n": 1,
//!     "_embedded": {"sub": {"_links": {"self": {"href": "/b"}}, "m": 2}}
//! });
//!
//! let representation: Representation = hal::parse(&tree);
//! assert_eq!(representation.link().map(Link::href), Some("/a"));
//! assert_eq!(hal::render(&representation), tree);
//! ```

pub mod error;
pub mod link;
pub mod namespace;
pub mod one_or_many;
pub mod parser;
pub mod renderer;
pub mod representation;

pub use error::{Error, Result};
pub use link::{Link, LinkOptions};
pub use namespace::NamespaceManager;
pub use one_or_many::OneOrMany;
pub use parser::parse;
pub use renderer::render;
pub use representation::Representation;
