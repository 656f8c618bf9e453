//! End-to-end reconciliation script over the pure state machinery:
//! load a collection, then create, edit, and delete an entry the way a
//! resource page drives it, checking the list and the notification slot
//! after every step.

use resource_sync::{
    Collection, DraftState, Entity, FieldRule, FormDraft, Notice, NotificationState, NumericRange,
    ResourceSchema, SyncError,
};

#[derive(Debug, Clone, PartialEq)]
struct Charge {
    id: i64,
    pet_id: i64,
    kind: String,
    price: f64,
}

impl Entity for Charge {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

static CHARGE_SCHEMA: ResourceSchema = ResourceSchema {
    resource: "billing",
    fields: &[
        FieldRule::required("pet_id", "Pet"),
        FieldRule::required("kind", "Type"),
        FieldRule::numeric("price", "Price", NumericRange::new(0.0, 10000.0)),
    ],
};

fn seeded_collection() -> Collection<Charge> {
    let mut col = Collection::new();
    let ticket = col.begin_load();
    col.complete_load(
        ticket,
        Ok(vec![
            Charge {
                id: 1,
                pet_id: 3,
                kind: "Vaccine".into(),
                price: 45.0,
            },
            Charge {
                id: 2,
                pet_id: 3,
                kind: "Appointment".into(),
                price: 80.0,
            },
        ]),
    );
    col
}

#[test]
fn full_create_update_delete_round_trip() {
    let mut col = seeded_collection();
    let mut notices = NotificationState::new();
    let mut dialog: DraftState<i64> = DraftState::closed();

    // --- Create ---
    dialog.open_create(FormDraft::new());
    dialog.set_field("pet_id", "3");
    dialog.set_field("kind", "Medication");
    dialog.set_field("price", "12.50");
    assert!(CHARGE_SCHEMA.validate(dialog.fields()).is_ok());

    // Server answers with the assigned id; its representation is appended.
    col.apply_created(Charge {
        id: 9,
        pet_id: 3,
        kind: "Medication".into(),
        price: 12.5,
    });
    notices.publish(Notice::success("Billing entry added successfully!"));
    dialog.submit_succeeded();

    assert_eq!(col.len(), 3);
    assert_eq!(col.get(9).map(|c| c.price), Some(12.5));
    assert!(!dialog.is_open());
    assert_eq!(
        notices.current().map(|n| n.message.as_str()),
        Some("Billing entry added successfully!")
    );

    // --- Update ---
    dialog.open_edit(9, FormDraft::from_pairs(&[
        ("pet_id", "3"),
        ("kind", "Medication"),
        ("price", "15.00"),
    ]));
    assert!(CHARGE_SCHEMA.validate(dialog.fields()).is_ok());

    // The server's representation, not the draft, lands in the list.
    assert!(col.apply_updated(Charge {
        id: 9,
        pet_id: 3,
        kind: "Medication".into(),
        price: 15.0,
    }));
    notices.publish(Notice::success("Billing entry updated successfully!"));
    dialog.submit_succeeded();

    assert_eq!(col.len(), 3, "update must not duplicate the entry");
    assert_eq!(col.get(9).map(|c| c.price), Some(15.0));

    // --- Delete ---
    assert!(col.apply_removed(9));
    notices.publish(Notice::success("Billing entry deleted successfully!"));

    assert_eq!(col.len(), 2);
    assert!(col.get(9).is_none());
    assert!(notices.is_visible());
}

#[test]
fn invalid_draft_never_reaches_the_collection() {
    let col = seeded_collection();
    let mut notices = NotificationState::new();
    let mut dialog: DraftState<i64> = DraftState::closed();

    dialog.open_create(FormDraft::new());
    dialog.set_field("pet_id", "3");
    dialog.set_field("kind", "Vaccine");
    dialog.set_field("price", "10000.01");

    let err = CHARGE_SCHEMA.validate(dialog.fields()).unwrap_err();
    notices.publish(Notice::error(err.to_string()));

    // No request was built, so the page state is exactly as before, with
    // the dialog still open and the typed values preserved.
    assert_eq!(col.len(), 2);
    assert!(dialog.is_open());
    assert_eq!(dialog.field("price"), "10000.01");
    assert_eq!(
        notices.current().map(|n| n.message.as_str()),
        Some("Price must be greater than 0 and at most 10000!")
    );
}

#[test]
fn failed_mutation_leaves_the_collection_unchanged() {
    let col = seeded_collection();
    let mut notices = NotificationState::new();
    let mut dialog: DraftState<i64> = DraftState::closed();

    dialog.open_edit(2, FormDraft::from_pairs(&[
        ("pet_id", "3"),
        ("kind", "Appointment"),
        ("price", "95.00"),
    ]));
    assert!(CHARGE_SCHEMA.validate(dialog.fields()).is_ok());

    // The PUT comes back 500: notify, keep the dialog open, touch nothing.
    let err = SyncError::network(Some(500), "Failed to update billing entry");
    notices.publish(Notice::error(err.to_string()));

    assert_eq!(col.get(2).map(|c| c.price), Some(80.0));
    assert!(dialog.is_open());
    assert_eq!(dialog.editing_key(), Some(2));
    assert_eq!(
        notices.current().map(|n| n.severity),
        Some(resource_sync::Severity::Error)
    );
}

#[test]
fn overlapping_reloads_keep_only_the_newest_list() {
    let mut col = seeded_collection();

    let first = col.begin_load();
    let second = col.begin_load();

    col.complete_load(
        second,
        Ok(vec![Charge {
            id: 50,
            pet_id: 4,
            kind: "Vaccine".into(),
            price: 30.0,
        }]),
    );
    col.complete_load(
        first,
        Ok(vec![Charge {
            id: 99,
            pet_id: 4,
            kind: "Vaccine".into(),
            price: 1.0,
        }]),
    );

    assert_eq!(col.len(), 1);
    assert!(col.get(50).is_some(), "only the newest response may land");
}
