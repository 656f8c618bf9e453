//! Confirm Dialog Component
//!
//! Modal confirmation with confirm/cancel actions, used by every page
//! before a delete goes out.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog confirm-dialog">
                    <h3 class="dialog-title">{title.clone()}</h3>
                    <p class="dialog-text">{message.clone()}</p>
                    <div class="dialog-actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
