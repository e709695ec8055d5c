// web_app/filter.rs - Client-side product filtering
//
// The filtered view is a pure function of the loaded products, the selected
// categories, the selected brands and the active text query. FilterEngine
// owns all four inputs and recomputes the derived list from inside every
// mutating method, so callers never observe a stale view.

use serde::{Deserialize, Serialize};

use crate::web_app::model::Product;

/// Ordered set of selected filter values.
///
/// An empty set places no restriction on its dimension. Membership is exact,
/// case-sensitive string equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    values: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Returns `false` when the value was already selected.
    pub fn add(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Returns `false` when the value was not selected.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        before != self.values.len()
    }

    pub fn toggle(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.remove(&value) {
            self.values.push(value);
        }
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    fn admits(&self, value: &str) -> bool {
        self.is_empty() || self.contains(value)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for value in iter {
            set.add(value);
        }
        set
    }
}

/// Whether a single product passes all three predicates.
///
/// `needle` must already be lowercased.
fn admits(product: &Product, categories: &SelectionSet, brands: &SelectionSet, needle: &str) -> bool {
    categories.admits(&product.category)
        && brands.admits(&product.brand)
        && (needle.is_empty()
            || product.title.to_lowercase().contains(needle)
            || product.description.to_lowercase().contains(needle))
}

/// Compute the filtered list, preserving the input order.
pub fn recompute(
    products: &[Product],
    categories: &SelectionSet,
    brands: &SelectionSet,
    query: &str,
) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| admits(product, categories, brands, &needle))
        .cloned()
        .collect()
}

/// Distinct brands in the order they first appear
pub fn brand_options(products: &[Product]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for product in products {
        if !brands.iter().any(|b| b == &product.brand) {
            brands.push(product.brand.clone());
        }
    }
    brands
}

/// Filter inputs plus the derived filtered list.
///
/// Category and brand changes apply immediately. The text query only changes
/// through [`FilterEngine::set_query`], which the search bar calls when the
/// user submits the search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterEngine {
    products: Vec<Product>,
    categories: SelectionSet,
    brands: SelectionSet,
    query: String,
    filtered: Vec<Product>,
}

impl FilterEngine {
    pub fn new(products: Vec<Product>) -> Self {
        let mut engine = Self::default();
        engine.set_products(products);
        engine
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn categories(&self) -> &SelectionSet {
        &self.categories
    }

    pub fn brands(&self) -> &SelectionSet {
        &self.brands
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn brand_options(&self) -> Vec<String> {
        brand_options(&self.products)
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.refresh();
    }

    pub fn add_category(&mut self, category: &str) {
        if self.categories.add(category) {
            self.refresh();
        }
    }

    pub fn remove_category(&mut self, category: &str) {
        if self.categories.remove(category) {
            self.refresh();
        }
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.categories.toggle(category);
        self.refresh();
    }

    pub fn reset_categories(&mut self) {
        self.categories.reset();
        self.refresh();
    }

    pub fn add_brand(&mut self, brand: &str) {
        if self.brands.add(brand) {
            self.refresh();
        }
    }

    pub fn remove_brand(&mut self, brand: &str) {
        if self.brands.remove(brand) {
            self.refresh();
        }
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        self.brands.toggle(brand);
        self.refresh();
    }

    pub fn reset_brands(&mut self) {
        self.brands.reset();
        self.refresh();
    }

    /// Apply a submitted search. Surrounding whitespace is ignored.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.query = query.trim().to_string();
        self.refresh();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.filtered = recompute(&self.products, &self.categories, &self.brands, &self.query);
    }
}
