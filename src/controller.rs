//! Resource Controller
//!
//! The one generic load/validate/mutate/reconcile path. Every resource page
//! creates a controller with its schema and drives all traffic through it:
//! fenced loads, schema-validated creates/updates, and id-keyed deletes,
//! each mutation outcome surfacing exactly one notification.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::{
    Collection, Entity, FormDraft, LoadOutcome, ResourceSchema, SyncError, SyncResult,
    ValidationError,
};

use crate::store::{store_notify_error, store_notify_success, AppStore};

pub struct ResourceController<T: Entity + 'static> {
    collection: RwSignal<Collection<T>>,
    store: AppStore,
    schema: &'static ResourceSchema,
}

impl<T: Entity + 'static> Clone for ResourceController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Entity + 'static> Copy for ResourceController<T> {}

impl<T> ResourceController<T>
where
    T: Entity + 'static,
{
    /// A controller owning one page-scoped collection
    pub fn new(store: AppStore, schema: &'static ResourceSchema) -> Self {
        Self {
            collection: RwSignal::new(Collection::new()),
            store,
            schema,
        }
    }

    /// The collection signal for views
    pub fn collection(&self) -> RwSignal<Collection<T>> {
        self.collection
    }

    /// Issue a fenced load. If the page unmounted before the response lands,
    /// or a newer load was issued meanwhile, the response is discarded.
    pub fn load<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = SyncResult<Vec<T>>> + 'static,
    {
        let collection = self.collection;
        let resource = self.schema.resource;
        let Some(ticket) = collection.try_update(|c| c.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = fetch.await.map_err(SyncError::into_load);
            if let Err(err) = &result {
                web_sys::console::warn_1(&format!("[load] {} failed: {}", resource, err).into());
            }
            let outcome = collection.try_update(|c| c.complete_load(ticket, result));
            if outcome == Some(LoadOutcome::Stale) {
                web_sys::console::log_1(
                    &format!("[load] {} stale response discarded", resource).into(),
                );
            }
        });
    }

    /// Validate the draft, send the create, and append the server's entity.
    /// An invalid draft notifies and returns before any request is built.
    pub async fn create<Fut>(
        &self,
        draft: &FormDraft,
        build: impl FnOnce(&FormDraft) -> Result<Fut, ValidationError>,
        success: &str,
    ) -> SyncResult<T>
    where
        Fut: Future<Output = SyncResult<T>>,
    {
        let request = match self.validate_and_build(draft, build) {
            Ok(request) => request,
            Err(err) => return Err(err),
        };
        match request.await {
            Ok(entity) => {
                self.collection.try_update(|c| c.apply_created(entity.clone()));
                store_notify_success(&self.store, success);
                Ok(entity)
            }
            Err(err) => {
                store_notify_error(&self.store, err.to_string());
                Err(err)
            }
        }
    }

    /// Validate the draft, send the update, and replace the element by id
    /// with the representation the server returned
    pub async fn update<Fut>(
        &self,
        draft: &FormDraft,
        build: impl FnOnce(&FormDraft) -> Result<Fut, ValidationError>,
        success: &str,
    ) -> SyncResult<T>
    where
        Fut: Future<Output = SyncResult<T>>,
    {
        let request = match self.validate_and_build(draft, build) {
            Ok(request) => request,
            Err(err) => return Err(err),
        };
        match request.await {
            Ok(entity) => {
                self.collection.try_update(|c| c.apply_updated(entity.clone()));
                store_notify_success(&self.store, success);
                Ok(entity)
            }
            Err(err) => {
                store_notify_error(&self.store, err.to_string());
                Err(err)
            }
        }
    }

    /// Send the delete and drop the element by id on success
    pub async fn remove<Fut>(&self, id: T::Id, request: Fut, success: &str) -> SyncResult<()>
    where
        Fut: Future<Output = SyncResult<()>>,
    {
        match request.await {
            Ok(()) => {
                self.collection.try_update(|c| c.apply_removed(id));
                store_notify_success(&self.store, success);
                Ok(())
            }
            Err(err) => {
                store_notify_error(&self.store, err.to_string());
                Err(err)
            }
        }
    }

    fn validate_and_build<Fut>(
        &self,
        draft: &FormDraft,
        build: impl FnOnce(&FormDraft) -> Result<Fut, ValidationError>,
    ) -> SyncResult<Fut>
    where
        Fut: Future<Output = SyncResult<T>>,
    {
        if let Err(err) = self.schema.validate(draft) {
            store_notify_error(&self.store, err.to_string());
            return Err(err.into());
        }
        match build(draft) {
            Ok(request) => Ok(request),
            Err(err) => {
                store_notify_error(&self.store, err.to_string());
                Err(err.into())
            }
        }
    }
}
