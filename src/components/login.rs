//! Login Page
//!
//! Username/password sign-in. A rejected login shows the server's error
//! inline; success persists the token and enters the signed-in layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, LoginArgs};
use crate::session::use_session;
use crate::store::{store_navigate, use_app_store, Route};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Please enter your username and password.".to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api::login(LoginArgs {
                username: user,
                password: pass,
            })
            .await
            {
                Ok(resp) => {
                    session.establish(&resp.token, resp.user);
                    store_navigate(&store, Route::Home);
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
                <h2>"Login"</h2>
                {move || {
                    error.get().map(|msg| view! { <div class="alert alert-error">{msg}</div> })
                }}
                <label class="form-field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_username.set(input.value());
                        }
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
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </button>
                <p class="auth-switch">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| store_navigate(&store, Route::Register)
                    >
                        "Register"
                    </button>
                </p>
            </form>
        </div>
    }
}
