// web_app/pages/mod.rs - Page components module
//
// - ProductsPage: catalog grid with category, brand and text filters
// - PetsPage: seeded pets from the local API

pub mod pets;
pub mod products;

pub use pets::PetsPage;
pub use products::ProductsPage;
