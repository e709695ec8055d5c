// web_app/components/search.rs - Filter and search controls
//
// - SearchBar: text query, applied when the form is submitted
// - FilterChips: toggleable chip row with a clear control
// - CategoryFilter / BrandFilter: chip rows for the two selection sets

use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;

use super::common::{Button, SecondaryButton};
use crate::web_app::filter::SelectionSet;

/// Display label for a category slug: `home-decoration` → `home decoration`
pub fn category_label(category: &str) -> String {
    category.split('-').collect::<Vec<_>>().join(" ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipTone {
    Blue,
    Red,
}

/// CSS classes for a chip in the given tone and selection state
pub fn chip_class(tone: ChipTone, selected: bool) -> &'static str {
    match (tone, selected) {
        (ChipTone::Blue, true) => "chip border-blue-500 bg-blue-500 text-white",
        (ChipTone::Blue, false) => "chip border-blue-500 bg-white text-gray-900",
        (ChipTone::Red, true) => "chip border-red-500 bg-red-500 text-white",
        (ChipTone::Red, false) => "chip border-red-500 bg-white text-gray-900",
    }
}

/// The clear control is only interactive while something is selected
pub fn clear_class(has_selection: bool) -> &'static str {
    if has_selection {
        "chip-clear opacity-100"
    } else {
        "chip-clear opacity-0 pointer-events-none"
    }
}

/// Search input with explicit submit.
///
/// Typing only edits `draft`. Enter or the Search button hands the draft to
/// `on_search`; the filtered list does not change in between. The draft is
/// only written by the input itself and by the clear button.
#[component]
pub fn SearchBar(
    /// The query currently applied to the product list
    query: Signal<String>,
    /// Text typed but not yet submitted
    draft: RwSignal<String>,
    on_search: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_search.run(draft.get_untracked());
    };

    let clear = Callback::new(move |()| {
        draft.set(String::new());
        on_clear.run(());
    });

    view! {
        <form on:submit=on_submit class="w-full flex items-center gap-3 px-8 pt-8">
            <input
                type="search"
                placeholder="Search title or description..."
                class="flex-1 px-4 py-2 border-2 border-gray-200 rounded-3xl \
                       focus:border-blue-500 outline-none transition-colors"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <Button button_type="submit">"Search"</Button>
            <Show when=move || query.with(|q| !q.is_empty())>
                <SecondaryButton on_click=clear>"clear"</SecondaryButton>
            </Show>
        </form>
    }
}

/// Row of toggleable chips.
///
/// `options` are `(value, label)` pairs; `on_toggle` receives the value.
#[component]
pub fn FilterChips(
    title: &'static str,
    options: Signal<Vec<(String, String)>>,
    selected: Signal<SelectionSet>,
    on_toggle: Callback<String>,
    on_clear: Callback<()>,
    tone: ChipTone,
) -> impl IntoView {
    view! {
        <div class="flex flex-row flex-wrap items-center gap-y-2 px-8 py-4">
            <span class="mx-3 font-medium">{title}</span>
            <For
                each=move || options.get()
                key=|(value, _)| value.clone()
                children=move |(value, label)| {
                    let checked = value.clone();
                    view! {
                        <button
                            type="button"
                            class=move || chip_class(tone, selected.with(|s| s.contains(&checked)))
                            on:click=move |_| on_toggle.run(value.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
            <button
                type="button"
                class=move || clear_class(!selected.with(SelectionSet::is_empty))
                on:click=move |_| on_clear.run(())
            >
                "clear"
            </button>
        </div>
    }
}

#[component]
pub fn CategoryFilter(
    categories: Signal<Vec<String>>,
    selected: Signal<SelectionSet>,
    on_toggle: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        categories.with(|cats| {
            cats.iter()
                .map(|c| (c.clone(), category_label(c)))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <FilterChips
            title="Categories:"
            options=options
            selected=selected
            on_toggle=on_toggle
            on_clear=on_clear
            tone=ChipTone::Blue
        />
    }
}

#[component]
pub fn BrandFilter(
    brands: Signal<Vec<String>>,
    selected: Signal<SelectionSet>,
    on_toggle: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        brands.with(|all| all.iter().map(|b| (b.clone(), b.clone())).collect::<Vec<_>>())
    });

    view! {
        <FilterChips
            title="Brands:"
            options=options
            selected=selected
            on_toggle=on_toggle
            on_clear=on_clear
            tone=ChipTone::Red
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_replaces_hyphens() {
        assert_eq!(category_label("home-decoration"), "home decoration");
        assert_eq!(category_label("mens-watches-smart"), "mens watches smart");
        assert_eq!(category_label("beauty"), "beauty");
    }

    #[test]
    fn test_chip_class_reflects_selection() {
        assert!(chip_class(ChipTone::Blue, true).contains("bg-blue-500"));
        assert!(chip_class(ChipTone::Blue, false).contains("bg-white"));
        assert!(chip_class(ChipTone::Red, true).contains("bg-red-500"));
        assert!(chip_class(ChipTone::Red, false).contains("border-red-500"));
    }

    #[test]
    fn test_clear_hidden_without_selection() {
        assert!(clear_class(false).contains("pointer-events-none"));
        assert!(!clear_class(true).contains("pointer-events-none"));
    }
}
