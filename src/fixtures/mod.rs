// fixtures/mod.rs - Reusable test data
//
// Product lists and upstream payloads shared by the unit and integration
// tests, so every suite filters the same catalog.

pub mod products;

pub use products::*;
