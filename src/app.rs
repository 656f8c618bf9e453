//! NinerPets Frontend App
//!
//! Root component: provides the store and the session handle, resolves
//! the persisted session once at startup, and renders the page for the
//! active route. Routes that are not public fall back to the login page
//! until the session is authenticated.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AppointmentsPage, BillingPage, FaqPage, HomePage, LoginPage, ManagePetsPage,
    MedicalRecordsPage, MedicationsPage, NavBar, NotificationToast, ProfilePage, RegisterPage,
    VetsPage,
};
use crate::session::provide_session;
use crate::store::{store_navigate, AppState, AppStateStoreFields, Route};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);
    let session = provide_session(store);

    // Resolve the persisted session once at startup.
    Effect::new(move |_| {
        session.resolve();
    });

    view! {
        <div class="app-layout">
            <NavBar/>
            <main class="page-container">
                {move || {
                    let route = store.route().get();
                    if session.is_pending() {
                        return view! { <p class="loading">"Loading..."</p> }.into_any();
                    }
                    if !route.is_public() && !session.is_authenticated() {
                        return view! { <LoginPage/> }.into_any();
                    }
                    match route {
                        Route::Home => {
                            if session.is_authenticated() {
                                view! { <HomePage/> }.into_any()
                            } else {
                                view! {
                                    <div class="landing">
                                        <h1>"Welcome to NinerPets"</h1>
                                        <p>
                                            "The one shop tool for all pet needs for UNC Charlotte students!"
                                        </p>
                                        <div class="landing-actions">
                                            <button
                                                class="btn btn-primary"
                                                on:click=move |_| store_navigate(&store, Route::Login)
                                            >
                                                "Log In"
                                            </button>
                                            <button
                                                class="btn"
                                                on:click=move |_| store_navigate(&store, Route::Register)
                                            >
                                                "Register"
                                            </button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                        Route::Login => view! { <LoginPage/> }.into_any(),
                        Route::Register => view! { <RegisterPage/> }.into_any(),
                        Route::ManagePets => view! { <ManagePetsPage/> }.into_any(),
                        Route::Appointments => view! { <AppointmentsPage/> }.into_any(),
                        Route::Billing => view! { <BillingPage/> }.into_any(),
                        Route::Medications => view! { <MedicationsPage/> }.into_any(),
                        Route::MedicalRecords => view! { <MedicalRecordsPage/> }.into_any(),
                        Route::Vets => view! { <VetsPage/> }.into_any(),
                        Route::Profile => view! { <ProfilePage/> }.into_any(),
                        Route::Faq => view! { <FaqPage/> }.into_any(),
                    }
                }}
            </main>
            <NotificationToast/>
        </div>
    }
}
