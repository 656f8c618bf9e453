//! Register Page
//!
//! Account creation. Registration does not sign the user in; it routes to
//! the login page with a success notice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RegisterArgs};
use crate::store::{store_navigate, store_notify_success, use_app_store, Route};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = use_app_store();
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email_value = email.get();
        let username_value = username.get();
        let password_value = password.get();
        if email_value.trim().is_empty()
            || username_value.trim().is_empty()
            || password_value.is_empty()
        {
            set_error.set(Some("Please fill out every field.".to_string()));
            return;
        }
        if password_value != confirm.get() {
            set_error.set(Some("Passwords do not match.".to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api::register(RegisterArgs {
                email: email_value,
                username: username_value,
                password: password_value,
            })
            .await
            {
                Ok(resp) => {
                    store_notify_success(&store, resp.message);
                    store_navigate(&store, Route::Login);
                }
                Err(err) => {
                    set_error.try_set(Some(err.to_string()));
                }
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h2>"Create your account"</h2>
                {move || {
                    error.get().map(|msg| view! { <div class="alert alert-error">{msg}</div> })
                }}
                <label class="form-field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Confirm Password"</span>
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-switch">
                    "Already have an account? "
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| store_navigate(&store, Route::Login)
                    >
                        "Login"
                    </button>
                </p>
            </form>
        </div>
    }
}
