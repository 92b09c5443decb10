//! # Catalog Filter
//!
//! Filter state for the browse screen: an optional category and a search
//! text. Fetching the list is the menu service's job; this type only knows
//! which query parameters to send.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::CategoryId;
use crate::validation::{validate_search_query, ValidationResult};

/// Category and name filter for `foods` listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogFilter {
    pub category: Option<CategoryId>,
    pub search: String,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id`, or clears the selection if `id` is already selected.
    pub fn select_category(&mut self, id: CategoryId) {
        self.category = match self.category {
            Some(current) if current == id => None,
            _ => Some(id),
        };
    }

    /// Sets the search text after trimming and length checks.
    pub fn set_search(&mut self, text: &str) -> ValidationResult<()> {
        self.search = validate_search_query(text)?;
        Ok(())
    }

    /// Query parameters for the listing request. Unset parts are omitted.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(category) = self.category {
            params.push(("category_like", category.to_string()));
        }
        if !self.search.is_empty() {
            params.push(("name_like", self.search.clone()));
        }
        params
    }
}
