//! Catalog item domain model.
//!
//! An [`Item`] is one embeddable game: display metadata plus the URL that the
//! viewer hands to whatever surface shows third-party content. Items are
//! immutable once loaded.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier of a catalog item.
///
/// Catalog files in the wild use both numeric and string ids, so deserialization
/// accepts either and normalizes integers to their decimal string form. Any
/// integer that fits in `i64` or `u64` is accepted; fractional numbers are not.
///
/// # Examples
///
/// ```
/// use gamedeck::ItemId;
///
/// let from_number: ItemId = serde_json::from_str("7").unwrap();
/// let from_text: ItemId = serde_json::from_str("\"7\"").unwrap();
/// assert_eq!(from_number, from_text);
/// assert_eq!(from_number.as_str(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
            Unsigned(u64),
        }

        match RawId::deserialize(deserializer) {
            Ok(RawId::Text(text)) => Ok(Self(text)),
            Ok(RawId::Integer(n)) => Ok(Self(n.to_string())),
            Ok(RawId::Unsigned(n)) => Ok(Self(n.to_string())),
            Err(_) => Err(serde::de::Error::custom(
                "item id must be a string or an integer",
            )),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! item_id_from_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl From<$int> for ItemId {
                fn from(value: $int) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

item_id_from_integer!(i32, i64, u32, u64);

/// A single catalog entry.
///
/// Field names serialize in camelCase. The older `thumbnail` and `iframeUrl`
/// keys are accepted on input so existing `games.json` files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(alias = "thumbnail")]
    pub thumbnail_url: String,
    #[serde(alias = "iframeUrl")]
    pub embed_url: String,
}

impl Item {
    /// Creates an item with an empty description and thumbnail.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamedeck::Item;
    ///
    /// let item = Item::new(1, "Speed Run", "Racing", "https://example.com/speed-run")
    ///     .with_description("Go fast");
    /// assert_eq!(item.id.as_str(), "1");
    /// assert_eq!(item.description, "Go fast");
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        category: impl Into<String>,
        embed_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            thumbnail_url: String::new(),
            embed_url: embed_url.into(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = thumbnail_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_legacy_field_names() {
        let json = r#"{
            "id": 3,
            "title": "Block Puzzle",
            "description": "Stack the blocks",
            "category": "Puzzle",
            "thumbnail": "https://img.example.com/block.png",
            "iframeUrl": "https://play.example.com/block"
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::from(3));
        assert_eq!(item.thumbnail_url, "https://img.example.com/block.png");
        assert_eq!(item.embed_url, "https://play.example.com/block");
    }

    #[test]
    fn serializes_camel_case() {
        let item = Item::new("a", "A", "Arcade", "https://play.example.com/a")
            .with_thumbnail("https://img.example.com/a.png");
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], "a");
        assert_eq!(value["embedUrl"], "https://play.example.com/a");
        assert_eq!(value["thumbnailUrl"], "https://img.example.com/a.png");
    }

    #[test]
    fn accepts_ids_beyond_i64() {
        let id: ItemId = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(id.as_str(), "18446744073709551615");

        let id: ItemId = serde_json::from_str("-4").unwrap();
        assert_eq!(id.as_str(), "-4");
    }

    #[test]
    fn fractional_id_names_the_problem() {
        let err = serde_json::from_str::<ItemId>("1.5").unwrap_err();
        assert!(err.to_string().contains("item id must be a string or an integer"));
    }

    #[test]
    fn missing_embed_url_is_rejected() {
        let json = r#"{"id": 1, "title": "T", "description": "", "category": "C", "thumbnailUrl": ""}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }
}
