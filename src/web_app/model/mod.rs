// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the catalog API, the server functions and
// the hydrated client, so they stay free of any server-only dependency.

use serde::{Deserialize, Serialize};

#[cfg(feature = "db-tools")]
use sqlx::FromRow;

/// Brand shown for catalog records that arrive without one
pub const UNKNOWN_BRAND: &str = "Unknown Brand";

/// Description shown for catalog records that arrive without one
pub const NO_DESCRIPTION: &str = "No description";

/// Only the first few upstream categories are offered as filters
pub const MAX_CATEGORIES: usize = 6;

/// Pet row from the `pets` table
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct Pet {
    pub name: String,
    pub owner: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRows {
    pub rows: Vec<Pet>,
}

/// Body of `GET /api/add-pet`: `{ "pets": { "rows": [...] } }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetsResponse {
    pub pets: PetRows,
}

impl PetsResponse {
    pub fn new(rows: Vec<Pet>) -> Self {
        Self {
            pets: PetRows { rows },
        }
    }

    pub fn into_rows(self) -> Vec<Pet> {
        self.pets.rows
    }
}

/// Product as displayed and filtered by the products page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub thumbnail: String,
    pub title: String,
    pub category: String,
    pub brand: String,
    pub description: String,
}

impl Product {
    /// Replace an empty brand or description with the display sentinels.
    ///
    /// Applying it twice changes nothing.
    pub fn with_defaults(mut self) -> Self {
        if self.brand.is_empty() {
            self.brand = UNKNOWN_BRAND.to_string();
        }
        if self.description.is_empty() {
            self.description = NO_DESCRIPTION.to_string();
        }
        self
    }
}

/// Product record exactly as the upstream catalog sends it
///
/// Price, rating, stock and the rest of the upstream fields are ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: u32,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CatalogProduct> for Product {
    fn from(raw: CatalogProduct) -> Self {
        Product {
            id: raw.id,
            thumbnail: raw.thumbnail,
            title: raw.title,
            category: raw.category,
            brand: raw.brand.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
        }
        .with_defaults()
    }
}

/// Body of the upstream `/products` endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogPage {
    pub products: Vec<CatalogProduct>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub skip: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl CatalogPage {
    pub fn into_products(self) -> Vec<Product> {
        self.products.into_iter().map(Product::from).collect()
    }
}

/// One entry of the upstream `/products/categories` array.
///
/// Older catalog versions return bare slugs, newer ones return objects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    Slug(String),
    Detailed {
        slug: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl CategoryEntry {
    pub fn into_slug(self) -> String {
        match self {
            CategoryEntry::Slug(slug) => slug,
            CategoryEntry::Detailed { slug, .. } => slug,
        }
    }
}

/// Keep the first [`MAX_CATEGORIES`] categories as plain slugs
pub fn categories_from_entries(entries: Vec<CategoryEntry>) -> Vec<String> {
    entries
        .into_iter()
        .take(MAX_CATEGORIES)
        .map(CategoryEntry::into_slug)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(brand: Option<&str>, description: Option<&str>) -> CatalogProduct {
        CatalogProduct {
            id: 7,
            thumbnail: "https://cdn.example/7.png".to_string(),
            title: "Essence Mascara".to_string(),
            category: "beauty".to_string(),
            brand: brand.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_brand_and_description_get_sentinels() {
        let product = Product::from(raw(None, None));
        assert_eq!(product.brand, UNKNOWN_BRAND);
        assert_eq!(product.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_empty_brand_counts_as_missing() {
        let product = Product::from(raw(Some(""), Some("Lengthening mascara")));
        assert_eq!(product.brand, UNKNOWN_BRAND);
        assert_eq!(product.description, "Lengthening mascara");
    }

    #[test]
    fn test_present_fields_are_kept() {
        let product = Product::from(raw(Some("Essence"), Some("Volume")));
        assert_eq!(product.brand, "Essence");
        assert_eq!(product.description, "Volume");
        assert_eq!(product.id, 7);
    }

    #[test]
    fn test_with_defaults_is_idempotent() {
        let once = Product::from(raw(None, None));
        let twice = once.clone().with_defaults();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_entries_are_capped() {
        let entries: Vec<CategoryEntry> = (0..10)
            .map(|i| CategoryEntry::Slug(format!("cat-{i}")))
            .collect();
        let categories = categories_from_entries(entries);
        assert_eq!(categories.len(), MAX_CATEGORIES);
        assert_eq!(categories[0], "cat-0");
        assert_eq!(categories[5], "cat-5");
    }

    #[test]
    fn test_detailed_entry_reduces_to_slug() {
        let entry = CategoryEntry::Detailed {
            slug: "home-decoration".to_string(),
            name: Some("Home Decoration".to_string()),
            url: None,
        };
        assert_eq!(entry.into_slug(), "home-decoration");
    }

    #[test]
    fn test_pets_response_shape() {
        let response = PetsResponse::new(vec![Pet {
            name: "Fiona".to_string(),
            owner: "Frank".to_string(),
        }]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["pets"]["rows"][0]["name"], "Fiona");
        assert_eq!(json["pets"]["rows"][0]["owner"], "Frank");
    }
}
