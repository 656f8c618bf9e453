//! Navigation Bar Component
//!
//! Brand, page links for the signed-in layout, and the account menu
//! (profile/logout) or login/register actions.

use leptos::prelude::*;

use crate::session::use_session;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields, Route};

/// Pages shown in the nav once signed in
const NAV_ROUTES: &[Route] = &[
    Route::ManagePets,
    Route::Appointments,
    Route::Medications,
    Route::MedicalRecords,
    Route::Billing,
    Route::Vets,
    Route::Faq,
];

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let session = use_session();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="nav-bar">
            <button class="nav-brand" on:click=move |_| store_navigate(&store, Route::Home)>
                "NinerPets"
            </button>

            <Show when=move || session.is_authenticated()>
                <nav class="nav-links">
                    {NAV_ROUTES
                        .iter()
                        .map(|route| {
                            let route = *route;
                            view! {
                                <button
                                    class=move || {
                                        if store.route().get() == route {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                    on:click=move |_| store_navigate(&store, route)
                                >
                                    {route.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>

            <div class="nav-session">
                {move || {
                    if session.is_authenticated() {
                        let username = session.user().map(|u| u.username).unwrap_or_default();
                        view! {
                            <div class="nav-user">
                                <button
                                    class="nav-user-btn"
                                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                                >
                                    {username}
                                </button>
                                <Show when=move || menu_open.get()>
                                    <div class="nav-menu">
                                        <button
                                            class="nav-menu-item"
                                            on:click=move |_| {
                                                set_menu_open.set(false);
                                                store_navigate(&store, Route::Profile);
                                            }
                                        >
                                            "Profile"
                                        </button>
                                        <button
                                            class="nav-menu-item"
                                            on:click=move |_| {
                                                set_menu_open.set(false);
                                                session.logout();
                                            }
                                        >
                                            "Logout"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="nav-auth">
                                <button
                                    class="nav-link"
                                    on:click=move |_| store_navigate(&store, Route::Login)
                                >
                                    "Login"
                                </button>
                                <button
                                    class="nav-link"
                                    on:click=move |_| store_navigate(&store, Route::Register)
                                >
                                    "Register"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
