// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use crate::web_app::api::db;
    use crate::web_app::error::AppError;
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use sqlx::PgPool;

    if let Some(pool) = use_context::<PgPool>() {
        return Ok(pool);
    }

    if let Some(pool) = db::get_db() {
        return Ok(pool);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(pool_data) = req.app_data::<Data<PgPool>>() {
                return Ok(pool_data.as_ref().clone());
            }
        }
        Err(e) => tracing::error!("Failed to extract HttpRequest: {}", e),
    }

    Err(ServerFnError::new(AppError::PoolUnavailable.to_string()))
}

/// List all pets, creating and seeding the table on first use
///
/// Served at `GET /api/add-pet`.
#[server(name = ListPets, prefix = "/api", endpoint = "add-pet", input = GetUrl)]
pub async fn list_pets() -> Result<PetsResponse, ServerFnError> {
    use crate::web_app::api::pets;
    use crate::web_app::error::AppError;

    let pool = pool().await?;

    let rows = async {
        pets::init_pets(&pool).await?;
        pets::list_pets(&pool).await
    }
    .await
    .map_err(AppError::from);

    match &rows {
        Ok(rows) => tracing::info!("Returning {} pets", rows.len()),
        Err(e) => tracing::error!("Pets request failed: {}", e),
    }

    rows.map(PetsResponse::new)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Fetch the product catalog from the upstream API
#[server(name = GetProducts, prefix = "/api", endpoint = "get_products")]
pub async fn get_products() -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::catalog;

    let products = catalog::client().fetch_products().await;

    match &products {
        Ok(list) => tracing::info!("Fetched {} products from catalog", list.len()),
        Err(e) => tracing::error!("Product fetch failed: {}", e),
    }

    products.map_err(|e| ServerFnError::new(e.to_string()))
}

/// Fetch the first few catalog categories from the upstream API
#[server(name = GetCategories, prefix = "/api", endpoint = "get_categories")]
pub async fn get_categories() -> Result<Vec<String>, ServerFnError> {
    use crate::web_app::api::catalog;

    let categories = catalog::client().fetch_categories().await;

    match &categories {
        Ok(list) => tracing::info!("Fetched {} categories from catalog", list.len()),
        Err(e) => tracing::error!("Category fetch failed: {}", e),
    }

    categories.map_err(|e| ServerFnError::new(e.to_string()))
}
