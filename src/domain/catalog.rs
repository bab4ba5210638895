//! Catalog index over the static item collection.
//!
//! The [`Catalog`] is built once at startup, validated, and never mutated. It
//! exposes the items in source order and the derived category list, which
//! always starts with the [`ALL_CATEGORIES`] sentinel.

use crate::domain::error::{GamedeckError, Result};
use crate::domain::item::{Item, ItemId};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Sentinel category that matches every item.
pub const ALL_CATEGORIES: &str = "All";

/// Immutable, validated item collection with its derived category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    categories: Vec<String>,
    positions: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Builds a catalog from items in source order.
    ///
    /// # Errors
    ///
    /// Returns [`GamedeckError::Catalog`] if the collection is empty, an id is
    /// duplicated, or an item has a blank `id`, `title`, `category` or
    /// `embed_url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamedeck::{Catalog, Item};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Item::new(1, "Speed Run", "Racing", "https://example.com/1"),
    ///     Item::new(2, "Block Puzzle", "Puzzle", "https://example.com/2"),
    ///     Item::new(3, "Drift King", "Racing", "https://example.com/3"),
    /// ])?;
    /// assert_eq!(catalog.categories(), ["All", "Racing", "Puzzle"]);
    /// # Ok::<(), gamedeck::GamedeckError>(())
    /// ```
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_new", item_count = items.len()).entered();

        if items.is_empty() {
            return Err(GamedeckError::Catalog("catalog contains no items".to_string()));
        }

        let mut positions = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            Self::validate_item(item)?;
            if positions.insert(item.id.clone(), position).is_some() {
                return Err(GamedeckError::Catalog(format!("duplicate item id: {}", item.id)));
            }
        }

        let categories = Self::derive_categories(&items);

        tracing::debug!(
            item_count = items.len(),
            category_count = categories.len(),
            "catalog indexed"
        );

        Ok(Self {
            items,
            categories,
            positions,
        })
    }

    /// Parses a JSON array of items and builds a catalog from it.
    ///
    /// # Errors
    ///
    /// Returns [`GamedeckError::Parse`] for malformed JSON or missing fields, and
    /// the errors of [`Catalog::new`] for invalid content.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`GamedeckError::Io`] if the file cannot be read, plus the errors
    /// of [`Catalog::from_json_str`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// All items in source order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// `"All"` followed by the distinct item categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.positions.get(id).map(|&position| &self.items[position])
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.positions.contains_key(id)
    }

    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn validate_item(item: &Item) -> Result<()> {
        let blank = [
            ("id", item.id.as_str()),
            ("title", item.title.as_str()),
            ("category", item.category.as_str()),
            ("embedUrl", item.embed_url.as_str()),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        match blank {
            Some((field, _)) => Err(GamedeckError::Catalog(format!(
                "item {:?} has a blank {field}",
                item.id.as_str()
            ))),
            None => Ok(()),
        }
    }

    fn derive_categories(items: &[Item]) -> Vec<String> {
        let mut seen = HashSet::new();
        seen.insert(ALL_CATEGORIES);

        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in items {
            if seen.insert(item.category.as_str()) {
                categories.push(item.category.clone());
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str, category: &str) -> Item {
        Item::new(id, title, category, format!("https://play.example.com/{id}"))
    }

    #[test]
    fn items_keep_source_order() {
        let catalog = Catalog::new(vec![
            item(3, "Gamma", "Arcade"),
            item(1, "Alpha", "Puzzle"),
            item(2, "Beta", "Arcade"),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let catalog = Catalog::new(vec![
            item(1, "A", "Racing"),
            item(2, "B", "Puzzle"),
            item(3, "C", "Racing"),
            item(4, "D", "Action"),
        ])
        .unwrap();

        assert_eq!(catalog.categories(), ["All", "Racing", "Puzzle", "Action"]);
    }

    #[test]
    fn literal_all_category_does_not_duplicate_sentinel() {
        let catalog = Catalog::new(vec![item(1, "A", "All"), item(2, "B", "Puzzle")]).unwrap();
        assert_eq!(catalog.categories(), ["All", "Puzzle"]);
    }

    #[test]
    fn categories_are_case_sensitive() {
        let catalog = Catalog::new(vec![item(1, "A", "puzzle"), item(2, "B", "Puzzle")]).unwrap();
        assert_eq!(catalog.categories(), ["All", "puzzle", "Puzzle"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![item(1, "A", "X"), item(1, "B", "Y")]).unwrap_err();
        assert!(matches!(err, GamedeckError::Catalog(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn rejects_empty_collection() {
        assert!(matches!(Catalog::new(vec![]), Err(GamedeckError::Catalog(_))));
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut blank_title = item(1, "A", "X");
        blank_title.title = "   ".to_string();
        assert!(Catalog::new(vec![blank_title]).is_err());

        let mut blank_url = item(2, "B", "X");
        blank_url.embed_url = String::new();
        assert!(Catalog::new(vec![blank_url]).is_err());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(vec![item(1, "A", "X"), item(2, "B", "Y")]).unwrap();

        assert_eq!(catalog.get(&ItemId::from(2)).map(|i| i.title.as_str()), Some("B"));
        assert!(catalog.contains(&ItemId::from("1")));
        assert!(!catalog.contains(&ItemId::from(9)));
        assert!(catalog.has_category("Y"));
        assert!(!catalog.has_category("y"));
    }

    #[test]
    fn from_json_str_reports_missing_fields() {
        let err = Catalog::from_json_str(r#"[{"id": 1, "title": "A"}]"#).unwrap_err();
        assert!(matches!(err, GamedeckError::Parse(_)));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"title":"Speed Run","description":"","category":"Racing","thumbnail":"","iframeUrl":"https://p/1"}]"#,
        )
        .unwrap();

        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, GamedeckError::Io(_)));
    }
}
