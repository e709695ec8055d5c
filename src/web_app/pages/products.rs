// web_app/pages/products.rs - Products page
//
// Owns the catalog state for the page. On mount it fetches the products,
// then, only if that succeeded, the categories. Every filter interaction
// goes through a FilterEngine method, which recomputes the filtered list
// before the signal notifies the view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::catalog_state::CatalogState;
use crate::web_app::components::*;
use crate::web_app::server_fns::{get_categories, get_products};

/// The applied text query, notifying only when the query itself changes
pub fn applied_query(catalog: RwSignal<CatalogState>) -> Memo<String> {
    Memo::new(move |_| catalog.with(|c| c.filter().query().to_string()))
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());
    let draft = RwSignal::new(String::new());

    let load_categories = move || {
        catalog.update(|c| c.begin_categories());
        spawn_local(async move {
            let outcome = get_categories().await;
            catalog.update(|c| c.finish_categories(outcome));
        });
    };

    let load_products = move || {
        catalog.update(|c| c.begin_products());
        spawn_local(async move {
            let outcome = get_products().await;
            let loaded = catalog
                .try_update(|c| c.finish_products(outcome))
                .unwrap_or(false);
            if loaded {
                load_categories();
            }
        });
    };

    // Effects only run in the browser, so this fires once after hydration.
    Effect::new(move || load_products());

    let categories = Signal::derive(move || catalog.with(|c| c.categories().to_vec()));
    let brands = Signal::derive(move || catalog.with(|c| c.filter().brand_options()));
    let selected_categories = Signal::derive(move || catalog.with(|c| c.filter().categories().clone()));
    let selected_brands = Signal::derive(move || catalog.with(|c| c.filter().brands().clone()));
    let active_query = applied_query(catalog);
    let filtered = Signal::derive(move || catalog.with(|c| c.filter().filtered().to_vec()));
    let loading = Signal::derive(move || catalog.with(CatalogState::is_loading));
    let alert = Signal::derive(move || catalog.with(|c| c.alert().map(str::to_string)));

    let on_toggle_category = Callback::new(move |category: String| {
        catalog.update(|c| c.filter_mut().toggle_category(&category));
    });
    let on_clear_categories = Callback::new(move |()| {
        catalog.update(|c| c.filter_mut().reset_categories());
    });
    let on_toggle_brand = Callback::new(move |brand: String| {
        catalog.update(|c| c.filter_mut().toggle_brand(&brand));
    });
    let on_clear_brands = Callback::new(move |()| {
        catalog.update(|c| c.filter_mut().reset_brands());
    });
    let on_search = Callback::new(move |query: String| {
        catalog.update(|c| c.filter_mut().set_query(query));
    });
    let on_clear_search = Callback::new(move |()| {
        catalog.update(|c| c.filter_mut().clear_query());
    });
    let on_dismiss_alert = Callback::new(move |()| {
        catalog.update(|c| c.dismiss_alert());
    });

    view! {
        <div class="w-full px-5 py-8 bg-gray-100 flex justify-center">
            <div class="w-full max-w-7xl rounded-md bg-white">
                <section class="border-b border-gray-100">
                    <SearchBar
                        query=Signal::from(active_query)
                        draft=draft
                        on_search=on_search
                        on_clear=on_clear_search
                    />
                    <CategoryFilter
                        categories=categories
                        selected=selected_categories
                        on_toggle=on_toggle_category
                        on_clear=on_clear_categories
                    />
                    <BrandFilter
                        brands=brands
                        selected=selected_brands
                        on_toggle=on_toggle_brand
                        on_clear=on_clear_brands
                    />
                </section>
                <section class="p-8">
                    <ProductList products=filtered loading=loading />
                </section>
            </div>

            {move || {
                alert.get().map(|message| view! {
                    <AlertDialog message=message on_close=on_dismiss_alert />
                })
            }}
        </div>
    }
}
