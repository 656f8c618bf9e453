//! Manage Pets Page
//!
//! The user's pets with an add/edit dialog and confirmed delete. The
//! species select offers a fixed list; picking "Other" opens a free-text
//! field whose value is what actually gets stored.

use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::{
    DraftState, FieldRule, FormDraft, NumericRange, ResourceSchema, ValidationError,
};

use crate::api::{self, PetArgs};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::controller::ResourceController;
use crate::models::{effective_species, format_date_short, Pet, SPECIES_OPTIONS};
use crate::session::use_session;
use crate::store::use_app_store;

/// Validation rules for the pet form
pub static PET_SCHEMA: ResourceSchema = ResourceSchema {
    resource: "pets",
    fields: &[
        FieldRule::required("name", "Name"),
        FieldRule::required("species", "Species"),
        FieldRule::required("breed", "Breed"),
        FieldRule::required("dob", "Date of Birth"),
        FieldRule::numeric("weight", "Weight", NumericRange::new(0.0, 50000.0)),
    ],
};

/// Assemble the typed payload from a validated draft
fn pet_args(fields: &FormDraft, user_id: i64) -> Result<PetArgs, ValidationError> {
    let species = effective_species(fields.get("species"), fields.get("other_species"));
    if species.is_empty() {
        return Err(ValidationError::Missing {
            field: "other_species",
            label: "Species",
        });
    }
    Ok(PetArgs {
        user_id,
        name: fields.get("name").trim().to_string(),
        species,
        breed: fields.get("breed").trim().to_string(),
        dob: fields.parse_date("dob", "Date of Birth")?,
        weight: fields.parse_f64("weight", "Weight")?,
    })
}

#[component]
pub fn ManagePetsPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let pets = ResourceController::<Pet>::new(store, &PET_SCHEMA);
    let (dialog, set_dialog) = signal(DraftState::<i64>::closed());
    let (pending_delete, set_pending_delete) = signal(None::<i64>);

    Effect::new(move |_| {
        if let Some(user_id) = session.user_id() {
            pets.load(api::list_pets(user_id));
        }
    });

    let open_add = move |_| {
        set_dialog.update(|d| d.open_create(FormDraft::new()));
    };

    let open_edit = move |pet: Pet| {
        let mut draft = FormDraft::from_pairs(&[
            ("name", pet.name.as_str()),
            ("breed", pet.breed.as_str()),
        ]);
        draft.set("dob", pet.dob.format("%Y-%m-%d").to_string());
        draft.set("weight", pet.weight.to_string());
        if SPECIES_OPTIONS.contains(&pet.species.as_str()) {
            draft.set("species", pet.species.as_str());
        } else {
            draft.set("species", "Other");
            draft.set("other_species", pet.species.as_str());
        }
        set_dialog.update(|d| d.open_edit(pet.id, draft));
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = session.user_id() else {
            return;
        };
        let state = dialog.get();
        let fields = state.fields().clone();
        spawn_local(async move {
            let done = match state.editing_key() {
                Some(id) => pets
                    .update(
                        &fields,
                        |f| Ok(api::update_pet(id, pet_args(f, user_id)?)),
                        "Pet updated successfully!",
                    )
                    .await
                    .is_ok(),
                None => pets
                    .create(
                        &fields,
                        |f| Ok(api::create_pet(pet_args(f, user_id)?)),
                        "Pet added successfully!",
                    )
                    .await
                    .is_ok(),
            };
            if done {
                set_dialog.try_update(|d| d.submit_succeeded());
            }
        });
    };

    let confirm_delete = Callback::new(move |_: ()| {
        if let Some(id) = pending_delete.get() {
            set_pending_delete.set(None);
            spawn_local(async move {
                let _ = pets
                    .remove(id, api::delete_pet(id), "Pet deleted successfully!")
                    .await;
            });
        }
    });

    let set_field = move |name: &'static str, value: String| {
        set_dialog.update(|d| d.set_field(name, value));
    };

    // Rebuild the dialog DOM only when it opens/closes, not per keystroke.
    let dialog_mode = Memo::new(move |_| dialog.with(|d| (d.is_open(), d.is_editing())));

    view! {
        <div class="page pets-page">
            <div class="page-header">
                <h1>"Manage Pets"</h1>
                <button class="btn btn-primary" on:click=open_add>
                    "Add Pet"
                </button>
            </div>

            {move || {
                pets.collection()
                    .with(|col| {
                        if col.is_loading() && col.is_empty() {
                            view! { <p class="loading">"Loading pets..."</p> }.into_any()
                        } else if let Some(msg) = col.load_error() {
                            view! { <div class="alert alert-error">{msg.to_string()}</div> }
                                .into_any()
                        } else if col.is_empty() {
                            view! {
                                <p class="empty-state">
                                    "No pets found. Add your first pet to get started!"
                                </p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    <For
                                        each=move || pets.collection().with(|c| c.items().to_vec())
                                        key=|pet| pet.id
                                        children=move |pet: Pet| {
                                            let pet_for_edit = pet.clone();
                                            view! {
                                                <div class="card pet-card">
                                                    <h3 class="card-title">{pet.name.clone()}</h3>
                                                    <p>{format!("{} · {}", pet.species, pet.breed)}</p>
                                                    <p>
                                                        {format!(
                                                            "Born {} · {} lbs",
                                                            format_date_short(pet.dob),
                                                            pet.weight,
                                                        )}
                                                    </p>
                                                    <div class="card-actions">
                                                        <button
                                                            class="btn btn-small"
                                                            on:click=move |_| open_edit(pet_for_edit.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn-small btn-danger"
                                                            on:click=move |_| set_pending_delete.set(Some(pet.id))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
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

            // Add/edit dialog
            {move || {
                let (open, editing) = dialog_mode.get();
                if !open {
                    return ().into_any();
                }
                view! {
                    <div class="dialog-overlay">
                        <form class="dialog" on:submit=submit>
                            <h3 class="dialog-title">
                                {if editing { "Edit Pet" } else { "Add Pet" }}
                            </h3>
                            <label class="form-field">
                                <span>"Name"</span>
                                <input
                                    type="text"
                                    prop:value=move || dialog.with(|d| d.field("name"))
                                    on:input=move |ev| set_field("name", event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"Species"</span>
                                <select
                                    prop:value=move || dialog.with(|d| d.field("species"))
                                    on:change=move |ev| set_field("species", event_target_value(&ev))
                                >
                                    <option value="">"Select a species"</option>
                                    {SPECIES_OPTIONS
                                        .iter()
                                        .map(|&species| {
                                            view! { <option value=species>{species}</option> }
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                            <Show when=move || dialog.with(|d| d.field("species") == "Other")>
                                <label class="form-field">
                                    <span>"What species?"</span>
                                    <input
                                        type="text"
                                        prop:value=move || {
                                            dialog.with(|d| d.field("other_species"))
                                        }
                                        on:input=move |ev| {
                                            set_field("other_species", event_target_value(&ev))
                                        }
                                    />
                                </label>
                            </Show>
                            <label class="form-field">
                                <span>"Breed"</span>
                                <input
                                    type="text"
                                    prop:value=move || dialog.with(|d| d.field("breed"))
                                    on:input=move |ev| set_field("breed", event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"Date of Birth"</span>
                                <input
                                    type="date"
                                    prop:value=move || dialog.with(|d| d.field("dob"))
                                    on:input=move |ev| set_field("dob", event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"Weight (lbs)"</span>
                                <input
                                    type="number"
                                    step="0.1"
                                    prop:value=move || dialog.with(|d| d.field("weight"))
                                    on:input=move |ev| set_field("weight", event_target_value(&ev))
                                />
                            </label>
                            <div class="dialog-actions">
                                <button
                                    type="button"
                                    class="btn"
                                    on:click=move |_| set_dialog.update(|d| d.cancel())
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-primary">
                                    {if editing { "Save Changes" } else { "Add Pet" }}
                                </button>
                            </div>
                        </form>
                    </div>
                }
                    .into_any()
            }}

            <ConfirmDialog
                title="Delete Pet"
                message="Are you sure you want to delete this pet? This cannot be undone."
                confirm_label="Delete"
                open=Signal::derive(move || pending_delete.get().is_some())
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_: ()| set_pending_delete.set(None))
            />
        </div>
    }
}
