//! Translation options.

use html2vecty_core::Package;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default limit on element nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options controlling tree building and Go emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslateOptions {
    /// Package clause of the generated file.
    pub package_name: String,
    /// Variable name used when the markup has exactly one root.
    pub single_root_name: String,
    /// Variable name used when the markup has several roots.
    pub multi_root_name: String,
    /// Import path -> alias for every package the output may reference.
    pub import_aliases: IndexMap<String, String>,
    /// Maximum element nesting depth.
    pub max_depth: usize,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            package_name: "main".to_string(),
            single_root_name: "Element".to_string(),
            multi_root_name: "Elements".to_string(),
            import_aliases: Package::ALL
                .iter()
                .map(|p| (p.import_path().to_string(), p.default_alias().to_string()))
                .collect(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TranslateOptions {
    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    /// Override the alias used for one package.
    pub fn with_alias(mut self, package: Package, alias: impl Into<String>) -> Self {
        self.import_aliases
            .insert(package.import_path().to_string(), alias.into());
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aliases() {
        let options = TranslateOptions::default();
        assert_eq!(options.import_aliases.len(), 5);
        assert_eq!(
            options.import_aliases.get("github.com/gopherjs/vecty/prop"),
            Some(&"prop".to_string())
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options: TranslateOptions =
            serde_json::from_str(r#"{"packageName": "views", "maxDepth": 8}"#).unwrap();
        assert_eq!(options.package_name, "views");
        assert_eq!(options.max_depth, 8);
        assert_eq!(options.single_root_name, "Element");
        assert_eq!(options.import_aliases.len(), 5);
    }

    #[test]
    fn test_with_alias_replaces_in_place() {
        let options = TranslateOptions::default().with_alias(Package::Vecty, "v");
        assert_eq!(options.import_aliases.len(), 5);
        assert_eq!(options.import_aliases[0], "v");
    }
}
