//! Notification Toast Component
//!
//! Renders the single transient notice and arms its auto-dismiss timer.
//! Dismissal is generation-fenced: when a notice is superseded, the old
//! timer fires against a stale generation and does nothing.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::AUTO_DISMISS_MS;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationToast() -> impl IntoView {
    let store = use_app_store();

    // Arm a timer per published notice.
    Effect::new(move |_| {
        let generation = store.notices().read().generation();
        if !store.notices().read().is_visible() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            store_dismiss_notice(&store, generation);
        });
    });

    view! {
        {move || {
            let notice = store.notices().read().current().cloned();
            let generation = store.notices().read().generation();
            notice.map(|notice| {
                view! {
                    <div class=format!("toast toast-{}", notice.severity.as_str())>
                        <span class="toast-message">{notice.message.clone()}</span>
                        <button
                            class="toast-close"
                            on:click=move |_| store_dismiss_notice(&store, generation)
                        >
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
