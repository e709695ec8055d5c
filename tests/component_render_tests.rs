// Component instantiation tests
// Components are built under a reactive owner; full rendering is left to the
// browser.

use leptos::prelude::*;
use shopfront::fixtures::products::{product, sample_catalog};
use shopfront::web_app::catalog_state::CatalogState;
use shopfront::web_app::components::*;
use shopfront::web_app::model::Pet;
use shopfront::web_app::pages::products::applied_query;

fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        let _ = Loading(LoadingProps { message: "Loading" });
        let _ = Loading(LoadingProps {
            message: "Fetching products",
        });
    });
}

#[test]
fn test_badge_instantiation() {
    with_runtime(|| {
        let _ = Badge(BadgeProps {
            children: Box::new(move || view! { "beauty" }.into_any()),
            tone: BadgeTone::Blue,
        });
    });
}

#[test]
fn test_product_card_instantiation() {
    with_runtime(|| {
        let _ = ProductCard(ProductCardProps {
            product: product(1, "Annibale Colombo Sofa Deluxe", "furniture", "Annibale Colombo", "sofa"),
        });
    });
}

#[test]
fn test_product_list_instantiation() {
    with_runtime(|| {
        let products = RwSignal::new(sample_catalog());
        let loading = RwSignal::new(false);
        let _ = ProductList(ProductListProps {
            products: products.into(),
            loading: loading.into(),
        });
    });
}

#[test]
fn test_pet_list_instantiation() {
    with_runtime(|| {
        let pets = RwSignal::new(vec![Pet {
            name: "Fiona".to_string(),
            owner: "Frank".to_string(),
        }]);
        let _ = PetList(PetListProps { pets: pets.into() });
    });
}

#[test]
fn test_search_draft_survives_catalog_updates() {
    with_runtime(|| {
        let catalog = RwSignal::new(CatalogState::default());
        catalog.update(|c| {
            c.begin_products();
            c.finish_products::<String>(Ok(sample_catalog()));
        });
        let query = applied_query(catalog);
        let draft = RwSignal::new(String::new());
        let _ = SearchBar(SearchBarProps {
            query: query.into(),
            draft,
            on_search: Callback::new(move |q: String| {
                catalog.update(|c| c.filter_mut().set_query(q));
            }),
            on_clear: Callback::new(move |()| {
                catalog.update(|c| c.filter_mut().clear_query());
            }),
        });

        draft.set("wool".to_string());
        catalog.update(|c| c.filter_mut().toggle_category("beauty"));
        catalog.update(|c| {
            c.begin_categories();
            c.finish_categories::<String>(Ok(vec!["beauty".to_string()]));
        });

        assert_eq!(draft.get_untracked(), "wool");
        assert_eq!(query.get_untracked(), "");
        assert_eq!(
            catalog.with_untracked(|c| c.filter().filtered().len()),
            3
        );
    });
}

#[test]
fn test_applied_query_follows_submitted_search() {
    with_runtime(|| {
        let catalog = RwSignal::new(CatalogState::default());
        let query = applied_query(catalog);
        assert_eq!(query.get_untracked(), "");

        catalog.update(|c| c.filter_mut().set_query("  Mascara "));
        assert_eq!(query.get_untracked(), "Mascara");

        catalog.update(|c| c.filter_mut().toggle_brand("Dior"));
        assert_eq!(query.get_untracked(), "Mascara");
    });
}

// ===== Display helpers =====

#[test]
fn test_display_title_truncates_long_titles() {
    assert_eq!(display_title("Red Shirt"), "Red Shirt");
    assert_eq!(
        display_title("Annibale Colombo Sofa Deluxe Edition"),
        "Annibale Colombo Sofa ..."
    );
}

#[test]
fn test_labels() {
    assert_eq!(category_label("home-decoration"), "home decoration");
    assert_eq!(products_heading(8), "Products: 8");
    let pet = Pet {
        name: "Lip".to_string(),
        owner: "Frank".to_string(),
    };
    assert_eq!(pet_label(&pet), "Lip - Frank");
}
