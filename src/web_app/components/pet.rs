// web_app/components/pet.rs - Pet list

use leptos::prelude::*;

use crate::web_app::model::Pet;

pub fn pet_label(pet: &Pet) -> String {
    format!("{} - {}", pet.name, pet.owner)
}

#[component]
pub fn PetList(pets: Signal<Vec<Pet>>) -> impl IntoView {
    view! {
        <ul class="list-disc pl-6 space-y-1">
            {move || {
                pets.get()
                    .iter()
                    .map(|pet| view! { <li>{pet_label(pet)}</li> })
                    .collect_view()
            }}
        </ul>
    }
}
