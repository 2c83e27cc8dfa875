//! Menu Catalog
//!
//! Static menu and restaurant profile, embedded at compile time and
//! validated once on first use.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::config::INFO_SECTION_ID;
use crate::models::{Category, Restaurant};

const MENU_JSON: &str = include_str!("../data/menu.json");

static MENU: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("menu data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("item id '{0}' is used more than once")]
    DuplicateItem(String),
    #[error("section id '{0}' is used more than once")]
    DuplicateSection(String),
    #[error("item '{item}' is listed under '{parent}' but names category '{named}'")]
    CategoryMismatch {
        item: String,
        parent: String,
        named: String,
    },
}

/// Validated menu: categories in display order plus the restaurant profile
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub restaurant: Restaurant,
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut sections = HashSet::from([INFO_SECTION_ID]);
        let mut items = HashSet::new();
        for category in &self.categories {
            if !sections.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateSection(category.id.clone()));
            }
            for item in &category.items {
                if item.category != category.id {
                    return Err(CatalogError::CategoryMismatch {
                        item: item.id.clone(),
                        parent: category.id.clone(),
                        named: item.category.clone(),
                    });
                }
                if !items.insert(item.id.as_str()) {
                    return Err(CatalogError::DuplicateItem(item.id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Navigation order: the info section, then one per category
    pub fn section_ids(&self) -> Vec<String> {
        std::iter::once(INFO_SECTION_ID.to_string())
            .chain(self.categories.iter().map(|c| c.id.clone()))
            .collect()
    }
}

/// The embedded menu, parsed on first call
pub fn menu() -> Result<&'static Catalog, &'static CatalogError> {
    MENU.get_or_init(|| Catalog::from_json(MENU_JSON)).as_ref()
}
