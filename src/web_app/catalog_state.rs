// web_app/catalog_state.rs - Load state for the products page
//
// Tracks the two catalog fetches (products, then categories) and the alert
// raised when either fails. The page drives the network calls and reports
// each outcome here; nothing in this module suspends.

use std::fmt::Display;

use crate::web_app::filter::FilterEngine;
use crate::web_app::model::{Product, MAX_CATEGORIES};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    filter: FilterEngine,
    categories: Vec<String>,
    products_loading: bool,
    categories_loading: bool,
    alert: Option<String>,
}

impl CatalogState {
    pub fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FilterEngine {
        &mut self.filter
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn products_loading(&self) -> bool {
        self.products_loading
    }

    pub fn categories_loading(&self) -> bool {
        self.categories_loading
    }

    pub fn is_loading(&self) -> bool {
        self.products_loading || self.categories_loading
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn begin_products(&mut self) {
        self.products_loading = true;
    }

    /// Record the products fetch outcome.
    ///
    /// Returns `true` when the categories fetch should follow. A failure
    /// leaves the previously loaded products in place.
    pub fn finish_products<E: Display>(&mut self, outcome: Result<Vec<Product>, E>) -> bool {
        self.products_loading = false;
        match outcome {
            Ok(products) => {
                tracing::debug!("Loaded {} products", products.len());
                let products = products.into_iter().map(Product::with_defaults).collect();
                self.filter.set_products(products);
                true
            }
            Err(e) => {
                self.raise(format!("Failed to load products: {e}"));
                false
            }
        }
    }

    pub fn begin_categories(&mut self) {
        self.categories_loading = true;
    }

    /// Record the categories fetch outcome. A failure keeps the prior list.
    pub fn finish_categories<E: Display>(&mut self, outcome: Result<Vec<String>, E>) {
        self.categories_loading = false;
        match outcome {
            Ok(mut categories) => {
                categories.truncate(MAX_CATEGORIES);
                self.categories = categories;
            }
            Err(e) => self.raise(format!("Failed to load categories: {e}")),
        }
    }

    fn raise(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.alert = Some(message);
    }
}
