//! Tag name resolution.

use html2vecty_core::{Package, QualifiedName};

use crate::tables::element_constructor;

/// Constructor used for tags with no dedicated `elem` function.
pub const CUSTOM_TAG_CONSTRUCTOR: &str = "Tag";

/// A tag name mapped to the call that builds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub constructor: QualifiedName,
    /// The literal tag name, passed as first argument to the generic constructor.
    pub literal: Option<String>,
}

/// Resolve a tag name to its constructor.
///
/// Unknown tags fall back to `vecty.Tag("name", ...)`.
pub fn resolve_tag(tag: &str) -> ResolvedTag {
    match element_constructor(tag) {
        Some(function) => ResolvedTag {
            constructor: QualifiedName::new(Package::Elem, function),
            literal: None,
        },
        None => ResolvedTag {
            constructor: QualifiedName::new(Package::Vecty, CUSTOM_TAG_CONSTRUCTOR),
            literal: Some(tag.to_string()),
        },
    }
}
