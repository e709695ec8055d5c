// web_app/components/common.rs - Reusable UI components
//
// Small stateless building blocks shared by the pages.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

/// Loading indicator with a short message
#[component]
pub fn Loading(
    #[prop(default = "Loading")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-3 p-8 text-gray-500">
            <div class="animate-spin rounded-full h-6 w-6 border-2 border-gray-200 border-t-blue-500"></div>
            <span class="font-medium">{message}</span>
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class="px-5 py-2 bg-blue-500 text-white rounded-3xl hover:bg-blue-600 transition-colors font-medium"
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Text-style button for secondary actions such as "clear"
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="px-4 py-2 text-blue-500 hover:text-blue-700 transition-colors"
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal overlay
///
/// Escape, the close button and a click on the backdrop all call `on_close`.
/// The parent decides whether the modal is rendered at all.
#[component]
pub fn ModalWrapper(
    children: Children,
    on_close: Callback<()>,
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            role="dialog"
            aria-modal="true"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/60"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-xl shadow-2xl w-full max-w-md overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100">
                    <h2 class="text-lg font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 rounded-full p-1"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        "✕"
                    </button>
                </div>
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Blocking notice for a failed catalog request
#[component]
pub fn AlertDialog(
    message: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalWrapper title="Something went wrong" on_close=on_close>
            <p class="text-gray-700 break-words">{message}</p>
            <div class="flex justify-end mt-6">
                <Button on_click=on_close>"OK"</Button>
            </div>
        </ModalWrapper>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeTone {
    #[default]
    Gray,
    Blue,
    Red,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Gray => "inline-block border-solid border-2 border-gray-400 mr-1 mb-1 py-1 px-3 rounded-3xl",
            BadgeTone::Blue => "inline-block border-solid border-2 border-indigo-600 mr-1 mb-1 py-1 px-3 rounded-3xl",
            BadgeTone::Red => "inline-block border-solid border-2 border-red-600 mr-1 mb-1 py-1 px-3 rounded-3xl",
        }
    }
}

/// Rounded label
#[component]
pub fn Badge(
    children: Children,
    #[prop(default = BadgeTone::Gray)]
    tone: BadgeTone,
) -> impl IntoView {
    view! {
        <span class=tone.class()>
            {children()}
        </span>
    }
}
