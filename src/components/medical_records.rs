//! Medical Records Page
//!
//! Record cards per category with a details view, and add/edit/delete
//! for individual records.

use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::{DraftState, FieldRule, FormDraft, ResourceSchema, ValidationError};

use crate::api::{self, MedicalRecordArgs};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::manage_pets::PET_SCHEMA;
use crate::components::vets::VET_SCHEMA;
use crate::controller::ResourceController;
use crate::models::{
    format_date_short, pet_name, vet_name, MedicalRecord, Pet, Vet, RECORD_TYPES,
};
use crate::session::use_session;
use crate::store::use_app_store;

/// Validation rules for the record form
pub static RECORD_SCHEMA: ResourceSchema = ResourceSchema {
    resource: "medicalrecords",
    fields: &[
        FieldRule::required("pet_id", "Pet"),
        FieldRule::required("kind", "Record Type"),
        FieldRule::required("name", "Event Name"),
        FieldRule::required("vet_id", "Vet"),
        FieldRule::required("description", "Description"),
        FieldRule::required("date", "Date"),
    ],
};

/// Assemble the typed payload from a validated draft
fn record_args(fields: &FormDraft, user_id: i64) -> Result<MedicalRecordArgs, ValidationError> {
    Ok(MedicalRecordArgs {
        user_id,
        pet_id: fields.parse_id("pet_id", "Pet")?,
        vet_id: fields.parse_id("vet_id", "Vet")?,
        kind: fields.get("kind").to_string(),
        name: fields.get("name").to_string(),
        description: fields.get_opt("description"),
        date: fields.parse_date("date", "Date")?,
    })
}

#[component]
pub fn MedicalRecordsPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let records = ResourceController::<MedicalRecord>::new(store, &RECORD_SCHEMA);
    let pets = ResourceController::<Pet>::new(store, &PET_SCHEMA);
    let vets = ResourceController::<Vet>::new(store, &VET_SCHEMA);

    let (dialog, set_dialog) = signal(DraftState::<i64>::closed());
    let (details_type, set_details_type) = signal(None::<&'static str>);
    let (pending_delete, set_pending_delete) = signal(None::<i64>);

    Effect::new(move |_| {
        if let Some(user_id) = session.user_id() {
            records.load(api::list_medical_records(user_id));
            pets.load(api::list_pets(user_id));
            vets.load(api::list_vets());
        }
    });

    let set_field = move |name: &'static str, value: String| {
        set_dialog.update(|d| d.set_field(name, value));
    };

    // Rebuild the dialog DOM only when it opens/closes, not per keystroke.
    let dialog_mode = Memo::new(move |_| dialog.with(|d| (d.is_open(), d.is_editing())));

    let open_add = move |_| {
        set_dialog.update(|d| d.open_create(FormDraft::new()));
    };

    let open_edit = move |record: MedicalRecord| {
        let mut fields = FormDraft::new();
        fields.set("pet_id", record.pet_id.to_string());
        fields.set("kind", record.kind.clone());
        fields.set("name", record.name.clone());
        fields.set("vet_id", record.vet_id.to_string());
        fields.set("description", record.description.clone().unwrap_or_default());
        fields.set("date", record.date.format("%Y-%m-%d").to_string());
        set_details_type.set(None);
        set_dialog.update(|d| d.open_edit(record.id, fields));
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
                Some(id) => records
                    .update(
                        &fields,
                        |f| Ok(api::update_medical_record(id, record_args(f, user_id)?)),
                        "Medical record updated successfully!",
                    )
                    .await
                    .is_ok(),
                None => records
                    .create(
                        &fields,
                        |f| Ok(api::create_medical_record(record_args(f, user_id)?)),
                        "Medical record added successfully!",
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
                let _ = records
                    .remove(
                        id,
                        api::delete_medical_record(id),
                        "Medical record deleted successfully!",
                    )
                    .await;
            });
        }
    });

    view! {
        <div class="page medical-records-page">
            <div class="page-header">
                <h1>"Medical Records"</h1>
                <button class="btn btn-primary" on:click=open_add>
                    "Add a Medical Record"
                </button>
            </div>

            {move || {
                records
                    .collection()
                    .with(|col| {
                        if col.is_loading() && col.is_empty() {
                            view! { <p class="loading">"Loading records..."</p> }.into_any()
                        } else if let Some(msg) = col.load_error() {
                            view! { <div class="alert alert-error">{msg.to_string()}</div> }
                                .into_any()
                        } else {
                            view! {
                                <div class="card-grid record-grid">
                                    {RECORD_TYPES
                                        .iter()
                                        .map(|&kind| {
                                            view! {
                                                <div class="card record-card">
                                                    <h3 class="card-title">{format!("{kind} Records")}</h3>
                                                    <p class="record-count">
                                                        {move || {
                                                            records
                                                                .collection()
                                                                .with(|c| {
                                                                    let count = c
                                                                        .items()
                                                                        .iter()
                                                                        .filter(|r| r.kind == kind)
                                                                        .count();
                                                                    match count {
                                                                        1 => "1 record".to_string(),
                                                                        n => format!("{n} records"),
                                                                    }
                                                                })
                                                        }}
                                                    </p>
                                                    <button
                                                        class="btn btn-small"
                                                        on:click=move |_| set_details_type.set(Some(kind))
                                                    >
                                                        {format!("View {kind} Details")}
                                                    </button>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}

            {move || {
                let Some(kind) = details_type.get() else {
                    return ().into_any();
                };
                view! {
                    <div class="dialog-overlay">
                        <div class="dialog dialog-wide">
                            <h2>{format!("{kind} Records")}</h2>
                            {move || {
                                let entries = records
                                    .collection()
                                    .with(|c| {
                                        c.items()
                                            .iter()
                                            .filter(|record| record.kind == kind)
                                            .cloned()
                                            .collect::<Vec<_>>()
                                    });
                                if entries.is_empty() {
                                    view! { <p class="empty-state">"No records of this type."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="record-list">
                                            {entries
                                                .into_iter()
                                                .map(|record| {
                                                    let record_for_edit = record.clone();
                                                    let record_pet = record.pet_id;
                                                    let record_vet = record.vet_id;
                                                    view! {
                                                        <li class="record-row">
                                                            <div class="record-info">
                                                                <span class="record-name">{record.name.clone()}</span>
                                                                <span>
                                                                    {move || {
                                                                        pets.collection()
                                                                            .with(|c| format!("Pet: {}", pet_name(c.items(), record_pet)))
                                                                    }}
                                                                </span>
                                                                <span>
                                                                    {move || {
                                                                        vets.collection()
                                                                            .with(|c| format!("Vet: {}", vet_name(c.items(), record_vet)))
                                                                    }}
                                                                </span>
                                                                <span class="record-meta">
                                                                    {format_date_short(record.date)} ": "
                                                                    {record.description.clone().unwrap_or_default()}
                                                                </span>
                                                            </div>
                                                            <div class="card-actions">
                                                                <button
                                                                    class="btn btn-small"
                                                                    on:click=move |_| open_edit(record_for_edit.clone())
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="btn btn-small btn-danger"
                                                                    on:click=move |_| set_pending_delete.set(Some(record.id))
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </div>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            }}
                            <div class="dialog-actions">
                                <button class="btn" on:click=move |_| set_details_type.set(None)>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                }
                    .into_any()
            }}

            {move || {
                let (open, editing) = dialog_mode.get();
                if !open {
                    return ().into_any();
                }
                view! {
                    <div class="dialog-overlay">
                        <form class="dialog" on:submit=submit>
                            <h2>
                                {if editing { "Edit Medical Record" } else { "Add Medical Record" }}
                            </h2>
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
                                <span>"Record Type"</span>
                                <select
                                    prop:value=move || dialog.with(|d| d.field("kind"))
                                    on:change=move |ev| set_field("kind", event_target_value(&ev))
                                >
                                    <option value="">"Select a type"</option>
                                    {RECORD_TYPES
                                        .iter()
                                        .map(|&kind| {
                                            view! { <option value=kind>{kind}</option> }
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="form-field">
                                <span>"Event Name"</span>
                                <input
                                    type="text"
                                    prop:value=move || dialog.with(|d| d.field("name"))
                                    on:input=move |ev| set_field("name", event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"Vet"</span>
                                <select
                                    prop:value=move || dialog.with(|d| d.field("vet_id"))
                                    on:change=move |ev| set_field("vet_id", event_target_value(&ev))
                                >
                                    <option value="">"Select a vet"</option>
                                    <For
                                        each=move || vets.collection().with(|c| c.items().to_vec())
                                        key=|vet| vet.id
                                        children=move |vet: Vet| {
                                            view! {
                                                <option value=vet.id
                                                    .to_string()>
                                                    {format!("{} ({})", vet.name, vet.specialty)}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                            </label>
                            <label class="form-field">
                                <span>"Description"</span>
                                <textarea
                                    prop:value=move || dialog.with(|d| d.field("description"))
                                    on:input=move |ev| set_field("description", event_target_value(&ev))
                                ></textarea>
                            </label>
                            <label class="form-field">
                                <span>"Date"</span>
                                <input
                                    type="date"
                                    prop:value=move || dialog.with(|d| d.field("date"))
                                    on:input=move |ev| set_field("date", event_target_value(&ev))
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
                                    {if editing { "Save Changes" } else { "Add Record" }}
                                </button>
                            </div>
                        </form>
                    </div>
                }
                    .into_any()
            }}

            <ConfirmDialog
                title="Delete Medical Record"
                message="Are you sure you want to delete this medical record?"
                confirm_label="Delete"
                open=Signal::derive(move || pending_delete.get().is_some())
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_: ()| set_pending_delete.set(None))
            />
        </div>
    }
}
