//! Domain layer for the gamedeck plugin.
//!
//! Core types independent of Zellij APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Catalog item model
//! - [`catalog`]: Validated, immutable item index with derived categories
//!
//! # Examples
//!
//! ```
//! use gamedeck::domain::{Catalog, Item, Result};
//!
//! fn build() -> Result<Catalog> {
//!     Catalog::new(vec![Item::new(1, "Speed Run", "Racing", "https://example.com/1")])
//! }
//! assert_eq!(build().unwrap().len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod item;

pub use catalog::{Catalog, ALL_CATEGORIES};
pub use error::{GamedeckError, Result};
pub use item::{Item, ItemId};
