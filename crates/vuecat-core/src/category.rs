//! Directory conventions for the source tree.
//!
//! Every top-level directory under the source root is a category. Component
//! categories hold one directory per component (`index.js` plus an optional
//! `template.html`); every other category holds plain `*.js` files.

use std::fmt;

/// Extension of script files picked up from plain categories.
pub const SCRIPT_EXTENSION: &str = "js";

/// Script file inside a component directory.
pub const COMPONENT_SCRIPT: &str = "index.js";

/// Optional template file inside a component directory.
pub const COMPONENT_TEMPLATE: &str = "template.html";

/// Name of the component-pair category.
pub const COMPONENTS: &str = "components";

/// Default category names in concatenation order.
pub const DEFAULT_CATEGORY_NAMES: [&str; 6] = [
    COMPONENTS,
    "directives",
    "filters",
    "mixins",
    "partials",
    "transitions",
];

/// How a category lays out its units on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// `<category>/<name>.js`
    Plain,
    /// `<category>/<name>/index.js` + optional `<category>/<name>/template.html`
    ComponentPair,
}

/// A named directory convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    name: String,
    kind: CategoryKind,
}

impl Category {
    /// Build a category, deriving its kind from the conventional name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = if name == COMPONENTS {
            CategoryKind::ComponentPair
        } else {
            CategoryKind::Plain
        };
        Self { name, kind }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The default ordered category list.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORY_NAMES
        .iter()
        .map(|name| Category::named(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let names: Vec<_> = default_categories()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["components", "directives", "filters", "mixins", "partials", "transitions"]
        );
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(Category::named("components").kind(), CategoryKind::ComponentPair);
        assert_eq!(Category::named("filters").kind(), CategoryKind::Plain);
        assert_eq!(Category::named("widgets").kind(), CategoryKind::Plain);
    }
}
