//! Profile Page
//!
//! Account identity, the pets on file, and shortcuts into the busiest
//! pages.

use leptos::prelude::*;

use crate::api;
use crate::components::manage_pets::PET_SCHEMA;
use crate::controller::ResourceController;
use crate::models::Pet;
use crate::session::use_session;
use crate::store::{store_navigate, use_app_store, Route};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let pets = ResourceController::<Pet>::new(store, &PET_SCHEMA);

    Effect::new(move |_| {
        if let Some(user_id) = session.user_id() {
            pets.load(api::list_pets(user_id));
        }
    });

    let initial = move || {
        session
            .user()
            .map(|u| u.username.chars().next().unwrap_or('?').to_uppercase().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="page profile-page">
            <h1>"Profile"</h1>

            <div class="card profile-card">
                <div class="avatar">{initial}</div>
                <div class="profile-identity">
                    <h2>{move || session.user().map(|u| u.username).unwrap_or_default()}</h2>
                    <p>{move || session.user().map(|u| u.email).unwrap_or_default()}</p>
                </div>
                <div class="profile-links">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| store_navigate(&store, Route::Medications)
                    >
                        "Manage Medications"
                    </button>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| store_navigate(&store, Route::Billing)
                    >
                        "View Billing Summary"
                    </button>
                </div>
            </div>

            <section class="card">
                <h2>"Your Pets:"</h2>
                {move || {
                    pets.collection()
                        .with(|col| {
                            if col.is_loading() && col.is_empty() {
                                view! { <p class="loading">"Loading pets..."</p> }.into_any()
                            } else if col.is_empty() {
                                view! {
                                    <p class="empty-state">
                                        "No pets currently added to your account."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="profile-pet-list">
                                        {col
                                            .items()
                                            .iter()
                                            .map(|pet| {
                                                view! {
                                                    <li>
                                                        <span class="pet-name">{pet.name.clone()}</span>
                                                        " (" {pet.species.clone()} ")"
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </section>
        </div>
    }
}
