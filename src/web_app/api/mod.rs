// web_app/api/mod.rs - Server-side data access
//
// db and pets only need sqlx; the catalog client also needs reqwest and is
// compiled with the full server.

pub mod db;
pub mod pets;

#[cfg(feature = "ssr")]
pub mod catalog;
