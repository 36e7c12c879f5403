//! Per-category include / exclude filters.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Sentinel selecting every item of a category.
pub const ALL: &str = "all";

/// Which items of a category a filter targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The whole category.
    All,
    /// Only these item names (file base-names or component names), in order.
    Items(Vec<String>),
}

impl Selection {
    pub fn items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Items(items.into_iter().map(Into::into).collect())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether `item` is selected.
    pub fn contains(&self, item: &str) -> bool {
        match self {
            Self::All => true,
            Self::Items(items) => items.iter().any(|i| i == item),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
enum SelectionRepr {
    /// The literal string "all"
    Keyword(String),
    /// Item names
    List(Vec<String>),
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(ALL),
            Self::Items(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SelectionRepr::deserialize(deserializer)? {
            SelectionRepr::Keyword(k) if k == ALL => Ok(Self::All),
            SelectionRepr::Keyword(k) => Err(serde::de::Error::custom(format!(
                "expected \"{ALL}\" or a list of names, got \"{k}\""
            ))),
            SelectionRepr::List(items) => Ok(Self::Items(items)),
        }
    }
}

impl JsonSchema for Selection {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "Selection".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        SelectionRepr::json_schema(generator)
    }
}

/// Mapping from category name to a [`Selection`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CategoryFilter(BTreeMap<String, Selection>);

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the selection for a category.
    pub fn with(mut self, category: impl Into<String>, selection: Selection) -> Self {
        self.0.insert(category.into(), selection);
        self
    }

    pub fn get(&self, category: &str) -> Option<&Selection> {
        self.0.get(category)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Selection)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Selection)> for CategoryFilter {
    fn from_iter<T: IntoIterator<Item = (String, Selection)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_deserialize() {
        let all: Selection = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, Selection::All);

        let items: Selection = serde_json::from_str(r#"["b", "a"]"#).unwrap();
        assert_eq!(items, Selection::items(["b", "a"]));

        assert!(serde_json::from_str::<Selection>("\"some\"").is_err());
    }

    #[test]
    fn test_selection_serialize() {
        assert_eq!(serde_json::to_string(&Selection::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::to_string(&Selection::items(["x"])).unwrap(),
            "[\"x\"]"
        );
    }

    #[test]
    fn test_filter_from_json() {
        let filter: CategoryFilter =
            serde_json::from_str(r#"{"filters": "all", "components": ["greeting"]}"#).unwrap();
        assert!(filter.get("filters").unwrap().is_all());
        assert!(filter.get("components").unwrap().contains("greeting"));
        assert!(!filter.get("components").unwrap().contains("other"));
        assert!(filter.get("mixins").is_none());
    }
}
