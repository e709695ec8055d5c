// fixtures/products.rs
//
// A small catalog shaped like the upstream API, plus the two-item list used
// by the filtering scenarios.

use crate::web_app::model::Product;

pub fn product(id: u32, title: &str, category: &str, brand: &str, description: &str) -> Product {
    Product {
        id,
        thumbnail: format!("https://cdn.dummyjson.com/products/images/{id}/thumbnail.png"),
        title: title.to_string(),
        category: category.to_string(),
        brand: brand.to_string(),
        description: description.to_string(),
    }
}

/// Red Shirt (clothing, Nike, cotton) and Blue Hat (accessories, Adidas, wool)
pub fn shirt_and_hat() -> Vec<Product> {
    vec![
        product(1, "Red Shirt", "clothing", "Nike", "cotton"),
        product(2, "Blue Hat", "accessories", "Adidas", "wool"),
    ]
}

/// Eight products across four categories; two share a brand, one has none.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Essence Mascara Lash Princess", "beauty", "Essence", "Popular mascara known for its volumizing effects"),
        product(2, "Eyeshadow Palette with Mirror", "beauty", "Glamour Beauty", "Versatile range of eyeshadow shades"),
        product(3, "Powder Canister", "beauty", "Velvet Touch", "Finely milled setting powder"),
        product(4, "Dior J'adore", "fragrances", "Dior", "Luxurious and floral fragrance"),
        product(5, "Gucci Bloom Eau de", "fragrances", "Gucci", "Floral and captivating fragrance"),
        product(6, "Annibale Colombo Bed", "furniture", "Annibale Colombo", "Luxurious bed frame crafted with premium materials"),
        product(7, "Annibale Colombo Sofa", "furniture", "Annibale Colombo", "Sophisticated sofa with a blend of comfort"),
        product(8, "Apple", "groceries", "Unknown Brand", "Fresh and crisp apples"),
    ]
}

/// Upstream `/products` body with a record missing brand and description
pub const PRODUCTS_PAGE_JSON: &str = r#"{
    "products": [
        {
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "Popular mascara known for its volumizing effects",
            "category": "beauty",
            "price": 9.99,
            "rating": 4.94,
            "tags": ["beauty", "mascara"],
            "brand": "Essence",
            "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/Essence%20Mascara%20Lash%20Princess/thumbnail.png"
        },
        {
            "id": 16,
            "title": "Apple",
            "category": "groceries",
            "price": 1.99,
            "thumbnail": "https://cdn.dummyjson.com/products/images/groceries/Apple/thumbnail.png"
        }
    ],
    "total": 194,
    "skip": 0,
    "limit": 30
}"#;

/// Upstream categories in the legacy shape: plain slugs
pub const LEGACY_CATEGORIES_JSON: &str = r#"[
    "smartphones", "laptops", "fragrances", "skincare",
    "groceries", "home-decoration", "furniture", "tops"
]"#;

/// Upstream categories in the current shape: slug/name/url objects
pub const CATEGORIES_JSON: &str = r#"[
    {"slug": "beauty", "name": "Beauty", "url": "https://dummyjson.com/products/category/beauty"},
    {"slug": "fragrances", "name": "Fragrances", "url": "https://dummyjson.com/products/category/fragrances"},
    {"slug": "furniture", "name": "Furniture", "url": "https://dummyjson.com/products/category/furniture"},
    {"slug": "groceries", "name": "Groceries", "url": "https://dummyjson.com/products/category/groceries"},
    {"slug": "home-decoration", "name": "Home Decoration", "url": "https://dummyjson.com/products/category/home-decoration"},
    {"slug": "kitchen-accessories", "name": "Kitchen Accessories", "url": "https://dummyjson.com/products/category/kitchen-accessories"},
    {"slug": "laptops", "name": "Laptops", "url": "https://dummyjson.com/products/category/laptops"}
]"#;
