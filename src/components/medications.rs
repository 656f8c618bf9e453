//! Medications Page
//!
//! Reported medications per pet with add/edit/delete. An empty end date
//! means the medication is ongoing. Reporting requires at least one pet
//! on file.

use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::{DraftState, FieldRule, FormDraft, ResourceSchema, ValidationError};

use crate::api::{self, MedicationArgs};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::manage_pets::PET_SCHEMA;
use crate::controller::ResourceController;
use crate::models::{format_date_short, format_end_date, pet_name, Medication, Pet};
use crate::session::use_session;
use crate::store::{store_navigate, use_app_store, Route};

/// Validation rules for the medication form
pub static MEDICATION_SCHEMA: ResourceSchema = ResourceSchema {
    resource: "medications",
    fields: &[
        FieldRule::required("pet_id", "Pet"),
        FieldRule::required("name", "Medication Name"),
        FieldRule::required("dosage", "Dosage"),
        FieldRule::optional("description", "Description"),
        FieldRule::required("start_date", "Start Date"),
        FieldRule::optional("end_date", "End Date"),
        FieldRule::required("side_effects", "Side Effects"),
        FieldRule::required("instructions", "Instructions"),
    ],
};

/// Assemble the typed payload from a validated draft
fn medication_args(
    fields: &FormDraft,
    user_id: i64,
) -> Result<MedicationArgs, ValidationError> {
    Ok(MedicationArgs {
        user_id,
        pet_id: fields.parse_id("pet_id", "Pet")?,
        name: fields.get("name").to_string(),
        dosage: fields.get("dosage").to_string(),
        description: fields.get_opt("description"),
        start_date: fields.parse_date("start_date", "Start Date")?,
        end_date: fields.parse_date_opt("end_date", "End Date")?,
        side_effects: fields.get_opt("side_effects"),
        instructions: fields.get_opt("instructions"),
        refill: fields.get("refill") == "yes",
    })
}

#[component]
pub fn MedicationsPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let medications = ResourceController::<Medication>::new(store, &MEDICATION_SCHEMA);
    let pets = ResourceController::<Pet>::new(store, &PET_SCHEMA);

    let (dialog, set_dialog) = signal(DraftState::<i64>::closed());
    let (pending_delete, set_pending_delete) = signal(None::<i64>);

    Effect::new(move |_| {
        if let Some(user_id) = session.user_id() {
            medications.load(api::list_medications(user_id));
            pets.load(api::list_pets(user_id));
        }
    });

    let set_field = move |name: &'static str, value: String| {
        set_dialog.update(|d| d.set_field(name, value));
    };

    // Rebuild the dialog DOM only when it opens/closes, not per keystroke.
    let dialog_mode = Memo::new(move |_| dialog.with(|d| (d.is_open(), d.is_editing())));

    let no_pets = move || pets.collection().with(|c| c.has_loaded() && c.is_empty());

    let open_add = move |_| {
        if no_pets() {
            return;
        }
        let mut fields = FormDraft::new();
        fields.set("refill", "no");
        set_dialog.update(|d| d.open_create(fields));
    };

    let open_edit = move |med: Medication| {
        let mut fields = FormDraft::new();
        fields.set("pet_id", med.pet_id.to_string());
        fields.set("name", med.name.clone());
        fields.set("dosage", med.dosage.clone());
        fields.set("description", med.description.clone().unwrap_or_default());
        fields.set("start_date", med.start_date.format("%Y-%m-%d").to_string());
        fields.set(
            "end_date",
            med.end_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        fields.set("side_effects", med.side_effects.clone().unwrap_or_default());
        fields.set("instructions", med.instructions.clone().unwrap_or_default());
        fields.set("refill", if med.refill { "yes" } else { "no" });
        set_dialog.update(|d| d.open_edit(med.id, fields));
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = session.user_id() else {
            return;
        };
        let fields = dialog.with(|d| d.fields().clone());
        let editing = dialog.with(|d| d.editing_key());
        spawn_local(async move {
            let done = match editing {
                Some(id) => medications
                    .update(
                        &fields,
                        |f| Ok(api::update_medication(id, medication_args(f, user_id)?)),
                        "Medication updated successfully!",
                    )
                    .await
                    .is_ok(),
                None => medications
                    .create(
                        &fields,
                        |f| Ok(api::create_medication(medication_args(f, user_id)?)),
                        "Medication added successfully!",
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
                let _ = medications
                    .remove(
                        id,
                        api::delete_medication(id),
                        "Medication deleted successfully!",
                    )
                    .await;
            });
        }
    });

    view! {
        <div class="page medications-page">
            <div class="page-header">
                <h1>"Medications"</h1>
                <button class="btn btn-primary" disabled=move || no_pets() on:click=open_add>
                    "Report a Medication"
                </button>
            </div>
            <p class="refill-contact">"To request a refill, contact: 704-XXX-XXXX"</p>

            <Show when=no_pets>
                <div class="alert alert-info">
                    "No pets found. Add a pet before reporting a medication. "
                    <button
                        class="link-btn"
                        on:click=move |_| store_navigate(&store, Route::ManagePets)
                    >
                        "Manage Pets"
                    </button>
                </div>
            </Show>

            {move || {
                medications
                    .collection()
                    .with(|col| {
                        if col.is_loading() && col.is_empty() {
                            view! { <p class="loading">"Loading medications..."</p> }.into_any()
                        } else if let Some(msg) = col.load_error() {
                            view! { <div class="alert alert-error">{msg.to_string()}</div> }
                                .into_any()
                        } else if col.is_empty() {
                            view! {
                                <p class="empty-state">
                                    "No medications found. Click \"Report a Medication\" to add one!"
                                </p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="medication-list">
                                    <For
                                        each=move || {
                                            medications.collection().with(|c| c.items().to_vec())
                                        }
                                        key=|med| med.id
                                        children=move |med: Medication| {
                                            let med_for_edit = med.clone();
                                            let med_pet = med.pet_id;
                                            view! {
                                                <div class="card medication-card">
                                                    <div class="card-header">
                                                        <h3 class="card-title">{med.name.clone()}</h3>
                                                        <div class="card-actions">
                                                            <button
                                                                class="btn btn-small"
                                                                on:click=move |_| open_edit(med_for_edit.clone())
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn-small btn-danger"
                                                                on:click=move |_| set_pending_delete.set(Some(med.id))
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    </div>
                                                    <p class="card-subtitle">
                                                        {move || {
                                                            pets.collection()
                                                                .with(|c| format!("For Pet: {}", pet_name(c.items(), med_pet)))
                                                        }}
                                                    </p>
                                                    <hr/>
                                                    <p>"Dosage: " {med.dosage.clone()}</p>
                                                    <p>
                                                        "Description: "
                                                        {med.description.clone().unwrap_or_default()}
                                                    </p>
                                                    <p>"Start Date: " {format_date_short(med.start_date)}</p>
                                                    <p>"End Date: " {format_end_date(med.end_date)}</p>
                                                    <p>
                                                        "Side Effects: "
                                                        {med.side_effects.clone().unwrap_or_default()}
                                                    </p>
                                                    <p>
                                                        "Instructions: "
                                                        {med.instructions.clone().unwrap_or_default()}
                                                    </p>
                                                    <p>"Refill: " {if med.refill { "Yes" } else { "No" }}</p>
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

            {move || {
                let (open, editing) = dialog_mode.get();
                if !open {
                    return ().into_any();
                }
                view! {
                    <div class="dialog-overlay">
                        <form class="dialog" on:submit=submit>
                            <h2>{if editing { "Edit Medication" } else { "Report a Medication" }}</h2>
                            <label class="form-field">
                                <span>"Pet"</span>
                                <select
                                    prop:value=move || dialog.with(|d| d.field("pet_id"))
                                    on:change=move |ev| set_field("pet_id", event_target_value(&ev))
                                >
                                    <option value="">"Select a pet"</option>
                                    <For
                                        each=move || pets.collection().with(|c| c.items().to_vec())
                                        key=|pet| pet.id
                                        children=move |pet: Pet| {
                                            view! {
                                                <option value=pet.id.to_string()>{pet.name.clone()}</option>
                                            }
                                        }
                                    />
                                </select>
                            </label>
                            <label class="form-field">
                                <span>"Medication Name"</span>
                                <input
                                    type="text"
                                    prop:value=move || dialog.with(|d| d.field("name"))
                                    on:input=move |ev| set_field("name", event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"Dosage"</span>
                                <input
                                    type="text"
                                    prop:value=move || dialog.with(|d| d.field("dosage"))
                                    on:input=move |ev| set_field("dosage", event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"Description (optional)"</span>
                                <textarea
                                    prop:value=move || dialog.with(|d| d.field("description"))
                                    on:input=move |ev| set_field("description", event_target_value(&ev))
                                ></textarea>
                            </label>
                            <div class="form-row">
                                <label class="form-field">
                                    <span>"Start Date"</span>
                                    <input
                                        type="date"
                                        prop:value=move || dialog.with(|d| d.field("start_date"))
                                        on:input=move |ev| set_field("start_date", event_target_value(&ev))
                                    />
                                </label>
                                <label class="form-field">
                                    <span>"End Date (leave blank if ongoing)"</span>
                                    <input
                                        type="date"
                                        prop:value=move || dialog.with(|d| d.field("end_date"))
                                        on:input=move |ev| set_field("end_date", event_target_value(&ev))
                                    />
                                </label>
                            </div>
                            <label class="form-field">
                                <span>"Side Effects"</span>
                                <textarea
                                    prop:value=move || dialog.with(|d| d.field("side_effects"))
                                    on:input=move |ev| set_field("side_effects", event_target_value(&ev))
                                ></textarea>
                            </label>
                            <label class="form-field">
                                <span>"Instructions"</span>
                                <textarea
                                    prop:value=move || dialog.with(|d| d.field("instructions"))
                                    on:input=move |ev| set_field("instructions", event_target_value(&ev))
                                ></textarea>
                            </label>
                            <fieldset class="form-field radio-group">
                                <legend>"Refill Needed?"</legend>
                                <label>
                                    <input
                                        type="radio"
                                        name="refill"
                                        value="yes"
                                        prop:checked=move || dialog.with(|d| d.field("refill") == "yes")
                                        on:change=move |_| set_field("refill", "yes".into())
                                    />
                                    "Yes"
                                </label>
                                <label>
                                    <input
                                        type="radio"
                                        name="refill"
                                        value="no"
                                        prop:checked=move || dialog.with(|d| d.field("refill") != "yes")
                                        on:change=move |_| set_field("refill", "no".into())
                                    />
                                    "No"
                                </label>
                            </fieldset>
                            <div class="dialog-actions">
                                <button
                                    type="button"
                                    class="btn"
                                    on:click=move |_| set_dialog.update(|d| d.cancel())
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-primary">
                                    {if editing { "Save Changes" } else { "Add Medication" }}
                                </button>
                            </div>
                        </form>
                    </div>
                }
                    .into_any()
            }}

            <ConfirmDialog
                title="Delete Medication"
                message="Are you sure you want to delete this medication?"
                confirm_label="Delete"
                open=Signal::derive(move || pending_delete.get().is_some())
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_: ()| set_pending_delete.set(None))
            />
        </div>
    }
}
