//! Appointments Page
//!
//! Schedule form, upcoming visits with reschedule/cancel, and a search
//! panel over the vet directory. Scheduling needs at least one pet; with
//! none on file the form is disabled and points at pet management.

use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::{FieldRule, FormDraft, ResourceSchema, ValidationError};

use crate::api::{self, AppointmentArgs};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::manage_pets::PET_SCHEMA;
use crate::components::vets::VET_SCHEMA;
use crate::controller::ResourceController;
use crate::models::{
    format_date_short, format_time_12h, pet_name, vet_matches, vet_name, Appointment, Pet, Vet,
    CLINIC_LOCATIONS, VISIT_REASONS,
};
use crate::session::use_session;
use crate::store::{store_navigate, use_app_store, Route};

/// Validation rules for the scheduling form
pub static APPOINTMENT_SCHEMA: ResourceSchema = ResourceSchema {
    resource: "appointments",
    fields: &[
        FieldRule::required("pet_id", "Pet"),
        FieldRule::required("reason", "Reason"),
        FieldRule::required("vet_id", "Vet"),
        FieldRule::required("date", "Date"),
        FieldRule::required("time", "Time"),
        FieldRule::required("location", "Location"),
        FieldRule::optional("notes", "Notes"),
    ],
};

/// Assemble the typed payload from a validated draft
fn appointment_args(
    fields: &FormDraft,
    user_id: i64,
) -> Result<AppointmentArgs, ValidationError> {
    Ok(AppointmentArgs {
        user_id,
        pet_id: fields.parse_id("pet_id", "Pet")?,
        vet_id: fields.parse_id("vet_id", "Vet")?,
        reason: fields.get("reason").to_string(),
        date: fields.parse_date("date", "Date")?,
        time: fields.parse_time("time", "Time")?,
        location: fields.get("location").to_string(),
        notes: fields.get_opt("notes"),
    })
}

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let appointments = ResourceController::<Appointment>::new(store, &APPOINTMENT_SCHEMA);
    let pets = ResourceController::<Pet>::new(store, &PET_SCHEMA);
    let vets = ResourceController::<Vet>::new(store, &VET_SCHEMA);

    let (draft, set_draft) = signal(FormDraft::new());
    let (editing, set_editing) = signal(None::<i64>);
    let (pending_cancel, set_pending_cancel) = signal(None::<i64>);
    let (vet_search, set_vet_search) = signal(String::new());

    Effect::new(move |_| {
        if let Some(user_id) = session.user_id() {
            appointments.load(api::list_appointments(user_id));
            pets.load(api::list_pets(user_id));
            vets.load(api::list_vets());
        }
    });

    let set_field = move |name: &'static str, value: String| {
        set_draft.update(|d| d.set(name, value));
    };

    let no_pets = move || pets.collection().with(|c| c.has_loaded() && c.is_empty());

    let start_edit = move |appt: Appointment| {
        let mut fields = FormDraft::new();
        fields.set("pet_id", appt.pet_id.to_string());
        fields.set("vet_id", appt.vet_id.to_string());
        fields.set("reason", appt.reason.clone());
        fields.set("date", appt.date.format("%Y-%m-%d").to_string());
        fields.set("time", appt.time.format("%H:%M").to_string());
        fields.set("location", appt.location.clone());
        fields.set("notes", appt.notes.clone().unwrap_or_default());
        set_draft.set(fields);
        set_editing.set(Some(appt.id));
    };

    let cancel_edit = move |_| {
        set_editing.set(None);
        set_draft.set(FormDraft::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = session.user_id() else {
            return;
        };
        if no_pets() {
            return;
        }
        let fields = draft.get();
        spawn_local(async move {
            let done = match editing.get_untracked() {
                Some(id) => appointments
                    .update(
                        &fields,
                        |f| Ok(api::update_appointment(id, appointment_args(f, user_id)?)),
                        "Appointment updated successfully!",
                    )
                    .await
                    .is_ok(),
                None => appointments
                    .create(
                        &fields,
                        |f| Ok(api::create_appointment(appointment_args(f, user_id)?)),
                        "Appointment scheduled successfully!",
                    )
                    .await
                    .is_ok(),
            };
            if done {
                set_draft.try_set(FormDraft::new());
                set_editing.try_set(None);
            }
        });
    };

    let confirm_cancel = Callback::new(move |_: ()| {
        if let Some(id) = pending_cancel.get() {
            set_pending_cancel.set(None);
            spawn_local(async move {
                let _ = appointments
                    .remove(
                        id,
                        api::delete_appointment(id),
                        "Appointment canceled successfully!",
                    )
                    .await;
            });
        }
    });

    view! {
        <div class="page appointments-page">
            <h1>"Appointments"</h1>

            <div class="two-column">
                <div class="column-main">
                    <Show when=no_pets>
                        <div class="alert alert-info">
                            "No pets found. Add a pet before scheduling an appointment. "
                            <button
                                class="link-btn"
                                on:click=move |_| store_navigate(&store, Route::ManagePets)
                            >
                                "Manage Pets"
                            </button>
                        </div>
                    </Show>

                    <form class="card schedule-form" on:submit=submit>
                        <h2>
                            {move || {
                                if editing.get().is_some() {
                                    "Reschedule Appointment"
                                } else {
                                    "Schedule an Appointment"
                                }
                            }}
                        </h2>
                        <label class="form-field">
                            <span>"Pet"</span>
                            <select
                                prop:value=move || draft.with(|d| d.get("pet_id").to_string())
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
                            <span>"Reason for Visit"</span>
                            <select
                                prop:value=move || draft.with(|d| d.get("reason").to_string())
                                on:change=move |ev| set_field("reason", event_target_value(&ev))
                            >
                                <option value="">"Select a reason"</option>
                                {VISIT_REASONS
                                    .iter()
                                    .map(|&reason| {
                                        view! { <option value=reason>{reason}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="form-field">
                            <span>"Vet"</span>
                            <select
                                prop:value=move || draft.with(|d| d.get("vet_id").to_string())
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
                        <div class="form-row">
                            <label class="form-field">
                                <span>"Date"</span>
                                <input
                                    type="date"
                                    prop:value=move || draft.with(|d| d.get("date").to_string())
                                    on:input=move |ev| set_field("date", event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"Time"</span>
                                <input
                                    type="time"
                                    prop:value=move || draft.with(|d| d.get("time").to_string())
                                    on:input=move |ev| set_field("time", event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <label class="form-field">
                            <span>"Location"</span>
                            <select
                                prop:value=move || draft.with(|d| d.get("location").to_string())
                                on:change=move |ev| set_field("location", event_target_value(&ev))
                            >
                                <option value="">"Select a location"</option>
                                {CLINIC_LOCATIONS
                                    .iter()
                                    .map(|&location| {
                                        view! { <option value=location>{location}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="form-field">
                            <span>"Notes (optional)"</span>
                            <textarea
                                prop:value=move || draft.with(|d| d.get("notes").to_string())
                                on:input=move |ev| set_field("notes", event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="dialog-actions">
                            <Show when=move || editing.get().is_some()>
                                <button type="button" class="btn" on:click=cancel_edit>
                                    "Cancel Edit"
                                </button>
                            </Show>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || no_pets()
                            >
                                {move || {
                                    if editing.get().is_some() {
                                        "Save Changes"
                                    } else {
                                        "Schedule Appointment"
                                    }
                                }}
                            </button>
                        </div>
                    </form>

                    <section class="upcoming">
                        <h2>"Upcoming Appointments"</h2>
                        {move || {
                            appointments
                                .collection()
                                .with(|col| {
                                    if col.is_loading() && col.is_empty() {
                                        view! { <p class="loading">"Loading appointments..."</p> }
                                            .into_any()
                                    } else if let Some(msg) = col.load_error() {
                                        view! {
                                            <div class="alert alert-error">{msg.to_string()}</div>
                                        }
                                            .into_any()
                                    } else if col.is_empty() {
                                        view! {
                                            <p class="empty-state">"No upcoming appointments."</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <ul class="appointment-list">
                                                <For
                                                    each=move || {
                                                        appointments.collection().with(|c| c.items().to_vec())
                                                    }
                                                    key=|appt| appt.id
                                                    children=move |appt: Appointment| {
                                                        let appt_for_edit = appt.clone();
                                                        let appt_pet = appt.pet_id;
                                                        let appt_vet = appt.vet_id;
                                                        view! {
                                                            <li class="appointment-row">
                                                                <div class="appointment-when">
                                                                    <span>{format_date_short(appt.date)}</span>
                                                                    <span>{format_time_12h(appt.time)}</span>
                                                                </div>
                                                                <div class="appointment-details">
                                                                    <span class="appointment-reason">{appt.reason.clone()}</span>
                                                                    <span>
                                                                        {move || {
                                                                            pets.collection()
                                                                                .with(|c| format!("for {}", pet_name(c.items(), appt_pet)))
                                                                        }}
                                                                    </span>
                                                                    <span>
                                                                        {move || {
                                                                            vets.collection()
                                                                                .with(|c| format!("with {}", vet_name(c.items(), appt_vet)))
                                                                        }}
                                                                    </span>
                                                                    <span class="appointment-location">{appt.location.clone()}</span>
                                                                    {appt
                                                                        .notes
                                                                        .clone()
                                                                        .map(|notes| {
                                                                            view! { <span class="appointment-notes">{notes}</span> }
                                                                        })}
                                                                </div>
                                                                <div class="card-actions">
                                                                    <button
                                                                        class="btn btn-small"
                                                                        on:click=move |_| start_edit(appt_for_edit.clone())
                                                                    >
                                                                        "Edit"
                                                                    </button>
                                                                    <button
                                                                        class="btn btn-small btn-danger"
                                                                        on:click=move |_| set_pending_cancel.set(Some(appt.id))
                                                                    >
                                                                        "Cancel"
                                                                    </button>
                                                                </div>
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

                <aside class="column-side">
                    <h2>"Find a Vet"</h2>
                    <input
                        type="search"
                        class="vet-search"
                        placeholder="Search by name or specialty"
                        prop:value=move || vet_search.get()
                        on:input=move |ev| set_vet_search.set(event_target_value(&ev))
                    />
                    {move || {
                        let query = vet_search.get();
                        let matches = vets
                            .collection()
                            .with(|c| {
                                c.items()
                                    .iter()
                                    .filter(|vet| vet_matches(vet, &query))
                                    .cloned()
                                    .collect::<Vec<_>>()
                            });
                        if matches.is_empty() {
                            view! { <p class="empty-state">"No vets match your search."</p> }
                                .into_any()
                        } else {
                            matches
                                .into_iter()
                                .map(|vet| {
                                    view! {
                                        <div class="card vet-card">
                                            <h3 class="card-title">{vet.name}</h3>
                                            <p class="vet-specialty">{vet.specialty}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </aside>
            </div>

            <ConfirmDialog
                title="Cancel Appointment"
                message="Are you sure you want to cancel this appointment?"
                confirm_label="Yes, Cancel"
                open=Signal::derive(move || pending_cancel.get().is_some())
                on_confirm=confirm_cancel
                on_cancel=Callback::new(move |_: ()| set_pending_cancel.set(None))
            />
        </div>
    }
}
