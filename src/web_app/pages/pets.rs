// web_app/pages/pets.rs - Pets page
//
// Loads the pets once through `GET /api/add-pet`. A failed request is
// logged and leaves the list empty; nothing is shown to the user.

use leptos::prelude::*;

use crate::web_app::components::{Loading, PetList};
use crate::web_app::model::{Pet, PetsResponse};
use crate::web_app::server_fns::list_pets;

/// Rows of a pets response, or an empty list after logging the failure
pub fn rows_or_empty(result: Result<PetsResponse, ServerFnError>) -> Vec<Pet> {
    match result {
        Ok(response) => response.into_rows(),
        Err(e) => {
            tracing::error!("Error fetching pets: {}", e);
            Vec::new()
        }
    }
}

#[component]
pub fn PetsPage() -> impl IntoView {
    let pets = Resource::new(|| (), |_| async move { list_pets().await });

    view! {
        <div class="max-w-3xl mx-auto px-5 py-8">
            <h1 class="text-2xl font-bold mb-4">"List of Pets"</h1>
            <Suspense fallback=|| view! { <Loading message="Loading pets..." /> }>
                {move || {
                    pets.get().map(|result| {
                        let rows = rows_or_empty(result);
                        view! { <PetList pets=Signal::stored(rows) /> }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_from_success() {
        let response = PetsResponse::new(vec![Pet {
            name: "Ian".to_string(),
            owner: "Frank".to_string(),
        }]);
        let rows = rows_or_empty(Ok(response));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ian");
    }

    #[test]
    fn test_failure_yields_empty_list() {
        let rows = rows_or_empty(Err(ServerFnError::new("500 Internal Server Error")));
        assert!(rows.is_empty());
    }
}
