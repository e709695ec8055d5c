#![recursion_limit = "256"]

// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering) and server functions
// - A lazily connected PostgreSQL pool for the pets endpoint
// - The shared catalog client for the product pages
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use shopfront::web_app::api::catalog::{self, CatalogClient};
    use shopfront::web_app::api::{db, pets};
    use shopfront::web_app::app::App as WebApp;
    use shopfront::web_app::config::AppConfig;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let pool = db::create_lazy_pool(&config).map_err(std::io::Error::other)?;
    db::init_db(pool.clone());

    // Runs alongside startup; the pets endpoint retries on demand.
    let init_pool = pool.clone();
    actix_web::rt::spawn(async move {
        if let Err(e) = pets::init_pets(&init_pool).await {
            tracing::error!("Failed to prepare pets table: {}", e);
        }
    });

    tracing::info!("Using product catalog at {}", config.catalog_base_url);
    catalog::init_client(CatalogClient::new(config.catalog_base_url.clone()));

    let conf = leptos_config::get_configuration(None).map_err(std::io::Error::other)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let pool_data = web::Data::new(pool.clone());

        App::new()
            .app_data(pool_data)
            // Server functions, including GET /api/add-pet
            .route("/api/{tail:.*}", handle_server_fns())
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
