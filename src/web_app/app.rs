// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet, navigation and the router.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{PetsPage, ProductsPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Shopfront" />
        <Meta name="description" content="Product catalog with category, brand and text filters" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/shopfront.css" />

        <Router>
            <NavBar />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductsPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/pets") view=PetsPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200 px-5 h-14 flex items-center gap-6">
            <span class="font-bold text-lg">"Shopfront"</span>
            <A href="/products">"Products"</A>
            <A href="/pets">"Pets"</A>
        </nav>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-500 text-white rounded-3xl hover:bg-blue-600 transition-colors"
                >
                    "Back to products"
                </a>
            </div>
        </div>
    }
}
