// web_app/components/product.rs - Product display components
//
// - ProductCard: thumbnail, title, category and brand badges
// - ProductList: header, card grid and the loading / empty states

use leptos::prelude::*;

use super::common::{Badge, BadgeTone, Loading};
use crate::web_app::model::Product;

const TITLE_LIMIT: usize = 25;
const TITLE_KEEP: usize = 22;

/// Shorten long titles for the card: more than 25 characters become the
/// first 22 followed by `...`.
pub fn display_title(title: &str) -> String {
    if title.chars().count() > TITLE_LIMIT {
        let kept: String = title.chars().take(TITLE_KEEP).collect();
        format!("{kept}...")
    } else {
        title.to_string()
    }
}

pub fn products_heading(count: usize) -> String {
    format!("Products: {count}")
}

/// Product card for the results grid
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let title = display_title(&product.title);
    let full_title = product.title.clone();
    let category = product.category.clone();
    let brand = product.brand.clone();

    view! {
        <div class="h-fit rounded-xl overflow-hidden border border-gray-200 bg-white">
            <img src=product.thumbnail alt="product" class="w-full h-28 object-cover" />
            <div class="mt-2 mb-2 px-3">
                <div class="font-semibold" title=full_title>{title}</div>
                <div class="text-sm text-gray-600 py-2">
                    <Badge tone=BadgeTone::Blue>{category}</Badge>
                </div>
                <div class="text-sm text-gray-600 py-2">
                    <Badge tone=BadgeTone::Red>{brand}</Badge>
                </div>
            </div>
        </div>
    }
}

/// Filtered products as a grid of cards
#[component]
pub fn ProductList(
    products: Signal<Vec<Product>>,
    /// While true only the loading indicator is shown
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <Loading /> }
        >
            <div class="w-full px-5">
                <div class="w-full font-medium mb-3">
                    {move || products_heading(products.with(Vec::len))}
                </div>
                <Show
                    when=move || products.with(|p| !p.is_empty())
                    fallback=|| view! {
                        <div class="text-center py-16 text-gray-500 border border-dashed border-gray-300 rounded-xl">
                            "No products match the current filters."
                        </div>
                    }
                >
                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-3 items-start">
                        <For
                            each=move || products.get()
                            key=|product| product.id
                            children=|product| view! { <ProductCard product=product /> }
                        />
                    </div>
                </Show>
            </div>
        </Show>
    }
}
