//! Billing Page
//!
//! Per-category balance cards with client-side totals, a details view
//! per category, and add/edit/delete for individual entries.

use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::{DraftState, FieldRule, FormDraft, NumericRange, ResourceSchema, ValidationError};

use crate::api::{self, BillingArgs};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::manage_pets::PET_SCHEMA;
use crate::controller::ResourceController;
use crate::models::{
    billing_total, format_date_short, format_price, pet_name, BillingEntry, Pet, BALANCE_TYPES,
};
use crate::session::use_session;
use crate::store::use_app_store;

/// Validation rules for the balance form
pub static BILLING_SCHEMA: ResourceSchema = ResourceSchema {
    resource: "billing",
    fields: &[
        FieldRule::required("pet_id", "Pet"),
        FieldRule::required("kind", "Balance Type"),
        FieldRule::numeric("price", "Price", NumericRange::new(0.0, 10000.0)),
        FieldRule::required("description", "Description"),
        FieldRule::required("date", "Date"),
    ],
};

/// Assemble the typed payload from a validated draft
fn billing_args(fields: &FormDraft, user_id: i64) -> Result<BillingArgs, ValidationError> {
    Ok(BillingArgs {
        user_id,
        pet_id: fields.parse_id("pet_id", "Pet")?,
        kind: fields.get("kind").to_string(),
        price: fields.parse_f64("price", "Price")?,
        description: fields.get_opt("description"),
        date: fields.parse_date("date", "Date")?,
    })
}

#[component]
pub fn BillingPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let billing = ResourceController::<BillingEntry>::new(store, &BILLING_SCHEMA);
    let pets = ResourceController::<Pet>::new(store, &PET_SCHEMA);

    let (dialog, set_dialog) = signal(DraftState::<i64>::closed());
    let (details_type, set_details_type) = signal(None::<&'static str>);
    let (pending_delete, set_pending_delete) = signal(None::<i64>);

    Effect::new(move |_| {
        if let Some(user_id) = session.user_id() {
            billing.load(api::list_billing(user_id));
            pets.load(api::list_pets(user_id));
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

    let open_edit = move |entry: BillingEntry| {
        let mut fields = FormDraft::new();
        fields.set("pet_id", entry.pet_id.to_string());
        fields.set("kind", entry.kind.clone());
        fields.set("price", entry.price.to_string());
        fields.set("description", entry.description.clone().unwrap_or_default());
        fields.set("date", entry.date.format("%Y-%m-%d").to_string());
        set_details_type.set(None);
        set_dialog.update(|d| d.open_edit(entry.id, fields));
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
                Some(id) => billing
                    .update(
                        &fields,
                        |f| Ok(api::update_billing(id, billing_args(f, user_id)?)),
                        "Entry updated successfully!",
                    )
                    .await
                    .is_ok(),
                None => billing
                    .create(
                        &fields,
                        |f| Ok(api::create_billing(billing_args(f, user_id)?)),
                        "Balance added successfully!",
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
                let _ = billing
                    .remove(
                        id,
                        api::delete_billing(id),
                        "Billing entry deleted successfully!",
                    )
                    .await;
            });
        }
    });

    view! {
        <div class="page billing-page">
            <div class="page-header">
                <h1>"Billing"</h1>
                <button class="btn btn-primary" on:click=open_add>
                    "Add a Balance"
                </button>
            </div>

            {move || {
                billing
                    .collection()
                    .with(|col| {
                        if col.is_loading() && col.is_empty() {
                            view! { <p class="loading">"Loading balances..."</p> }.into_any()
                        } else if let Some(msg) = col.load_error() {
                            view! { <div class="alert alert-error">{msg.to_string()}</div> }
                                .into_any()
                        } else {
                            view! {
                                <div class="card-grid balance-grid">
                                    {BALANCE_TYPES
                                        .iter()
                                        .map(|&kind| {
                                            view! {
                                                <div class="card balance-card">
                                                    <h3 class="card-title">{format!("{kind} Balance")}</h3>
                                                    <p class="balance-total">
                                                        {move || {
                                                            billing
                                                                .collection()
                                                                .with(|c| format_price(billing_total(c.items(), kind)))
                                                        }}
                                                    </p>
                                                    <button
                                                        class="btn btn-small"
                                                        on:click=move |_| set_details_type.set(Some(kind))
                                                    >
                                                        "View Balance Details"
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
                            <h2>{format!("{kind} Balance Details")}</h2>
                            {move || {
                                let entries = billing
                                    .collection()
                                    .with(|c| {
                                        c.items()
                                            .iter()
                                            .filter(|entry| entry.kind == kind)
                                            .cloned()
                                            .collect::<Vec<_>>()
                                    });
                                if entries.is_empty() {
                                    view! { <p class="empty-state">"No current balances."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="balance-list">
                                            {entries
                                                .into_iter()
                                                .map(|entry| {
                                                    let entry_for_edit = entry.clone();
                                                    view! {
                                                        <li class="balance-row">
                                                            <div class="balance-info">
                                                                <span class="balance-pet">
                                                                    {move || {
                                                                        pets.collection()
                                                                            .with(|c| pet_name(c.items(), entry.pet_id))
                                                                    }} ": " {format_price(entry.price)}
                                                                </span>
                                                                <span class="balance-meta">
                                                                    {format_date_short(entry.date)} ": "
                                                                    {entry.description.clone().unwrap_or_default()}
                                                                </span>
                                                            </div>
                                                            <div class="card-actions">
                                                                <button
                                                                    class="btn btn-small"
                                                                    on:click=move |_| open_edit(entry_for_edit.clone())
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="btn btn-small btn-danger"
                                                                    on:click=move |_| set_pending_delete.set(Some(entry.id))
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
                            <h2>{if editing { "Edit Balance" } else { "Add Balance Details" }}</h2>
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
                                <span>"Balance Type"</span>
                                <select
                                    prop:value=move || dialog.with(|d| d.field("kind"))
                                    on:change=move |ev| set_field("kind", event_target_value(&ev))
                                >
                                    <option value="">"Select a type"</option>
                                    {BALANCE_TYPES
                                        .iter()
                                        .map(|&kind| {
                                            view! { <option value=kind>{kind}</option> }
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="form-field">
                                <span>"Price"</span>
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    prop:value=move || dialog.with(|d| d.field("price"))
                                    on:input=move |ev| set_field("price", event_target_value(&ev))
                                />
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
                                    {if editing { "Save Changes" } else { "Add Balance" }}
                                </button>
                            </div>
                        </form>
                    </div>
                }
                    .into_any()
            }}

            <ConfirmDialog
                title="Delete Billing Entry"
                message="Are you sure you want to delete this billing entry?"
                confirm_label="Delete"
                open=Signal::derive(move || pending_delete.get().is_some())
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_: ()| set_pending_delete.set(None))
            />
        </div>
    }
}
