//! Vets Page
//!
//! Read-only directory of the clinic's vets.

use leptos::prelude::*;
use resource_sync::ResourceSchema;

use crate::api;
use crate::controller::ResourceController;
use crate::models::Vet;
use crate::session::use_session;
use crate::store::use_app_store;

/// The vet directory has no form; the schema only names the resource
pub static VET_SCHEMA: ResourceSchema = ResourceSchema {
    resource: "vets",
    fields: &[],
};

#[component]
pub fn VetsPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let vets = ResourceController::<Vet>::new(store, &VET_SCHEMA);

    Effect::new(move |_| {
        if session.is_authenticated() {
            vets.load(api::list_vets());
        }
    });

    view! {
        <div class="page vets-page">
            <h1>"Meet Our Vets"</h1>
            <p class="page-subtitle">
                "Our veterinarians are here to give your pets the best possible care."
            </p>

            {move || {
                vets.collection()
                    .with(|col| {
                        if col.is_loading() && col.is_empty() {
                            view! { <p class="loading">"Loading vets..."</p> }.into_any()
                        } else if let Some(msg) = col.load_error() {
                            view! { <div class="alert alert-error">{msg.to_string()}</div> }
                                .into_any()
                        } else if col.is_empty() {
                            view! { <p class="empty-state">"No vets are listed right now."</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    <For
                                        each=move || vets.collection().with(|c| c.items().to_vec())
                                        key=|vet| vet.id
                                        children=move |vet: Vet| {
                                            view! {
                                                <div class="card vet-card">
                                                    <h3 class="card-title">{vet.name.clone()}</h3>
                                                    <p class="vet-specialty">{vet.specialty.clone()}</p>
                                                    <p class="vet-information">{vet.information.clone()}</p>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}
