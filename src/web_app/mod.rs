// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - filter.rs, catalog_state.rs: Pure page state, no framework types
// - config.rs, api/: Environment config and database access (db-tools)
// - error.rs: Server-side error type (SSR only)
// - server_fns.rs: Server function declarations (both client and server)
// - components/, pages/, app.rs: UI (both SSR and hydrate)

pub mod catalog_state;
pub mod filter;
pub mod model;

#[cfg(feature = "db-tools")]
pub mod config;

#[cfg(feature = "db-tools")]
pub mod api;

#[cfg(feature = "ssr")]
pub mod error;

// Server function declarations - must be available to both client and server
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
