//! Home Page
//!
//! Signed-in landing: greeting, quick links to the main pages, and the
//! care-team panel listing the vet directory.

use leptos::prelude::*;

use crate::api;
use crate::components::vets::VET_SCHEMA;
use crate::controller::ResourceController;
use crate::models::Vet;
use crate::session::use_session;
use crate::store::{store_navigate, use_app_store, Route};

/// Quick-link tiles on the home page
const QUICK_LINKS: &[(Route, &str, &str)] = &[
    (Route::ManagePets, "Manage Pets", "Add, update, or remove your pets"),
    (Route::Appointments, "Appointments", "Schedule and review visits"),
    (Route::Medications, "Medications", "Track prescriptions and refills"),
    (Route::MedicalRecords, "Medical Records", "Browse your pets' history"),
    (Route::Billing, "Billing", "Check balances and charges"),
    (Route::Vets, "Vets", "Meet the care team"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let vets = ResourceController::<Vet>::new(store, &VET_SCHEMA);

    Effect::new(move |_| {
        if session.is_authenticated() {
            vets.load(api::list_vets());
        }
    });

    view! {
        <div class="page home-page">
            <h1>
                {move || {
                    format!(
                        "Welcome, {}!",
                        session.user().map(|u| u.username).unwrap_or_default(),
                    )
                }}
            </h1>
            <p class="page-subtitle">"What would you like to do today?"</p>

            <div class="quick-links">
                {QUICK_LINKS
                    .iter()
                    .map(|(route, title, blurb)| {
                        let route = *route;
                        view! {
                            <button class="quick-link" on:click=move |_| store_navigate(&store, route)>
                                <span class="quick-link-title">{*title}</span>
                                <span class="quick-link-blurb">{*blurb}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="care-team">
                <h2>"Your Care Team"</h2>
                {move || {
                    vets.collection()
                        .with(|col| {
                            if let Some(msg) = col.load_error() {
                                view! { <div class="alert alert-error">{msg.to_string()}</div> }
                                    .into_any()
                            } else if col.is_empty() {
                                view! { <p class="empty-state">"No vets to show yet."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="care-team-list">
                                        <For
                                            each=move || vets.collection().with(|c| c.items().to_vec())
                                            key=|vet| vet.id
                                            children=move |vet: Vet| {
                                                view! {
                                                    <li class="care-team-row">
                                                        <span class="care-team-name">{vet.name.clone()}</span>
                                                        <span class="care-team-specialty">
                                                            {vet.specialty.clone()}
                                                        </span>
                                                    </li>
                                                }
                                            }
                                        />
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
