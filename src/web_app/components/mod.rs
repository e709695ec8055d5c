// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - search.rs: Search box and the category/brand chip filters
// - product.rs: Product display components (ProductCard, ProductList)
// - pet.rs: Pet list

pub mod common;
pub mod pet;
pub mod product;
pub mod search;

pub use common::*;
pub use pet::*;
pub use product::*;
pub use search::*;
