//! Dashboard landing page - where a successful login redirects

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session_context;
use crate::utils::constants::ROUTE_LOGIN;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.clear();
        navigate(ROUTE_LOGIN, Default::default());
    };

    view! {
        <div class="content-wrapper">
            <div class="container">
                <div class="card">
                    <h1 class="card-title">"Dashboard"</h1>

                    {move || {
                        let logout = on_logout.clone();

                        if session.is_authenticated() {
                            view! {
                                <div>
                                    <p class="subtitle">"You are logged in to GenBank."</p>
                                    <p class="info">
                                        "Account overviews for guardians and dependents will appear here."
                                    </p>
                                    <button class="btn" on:click=logout>
                                        "Log Out"
                                    </button>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div>
                                    <p class="subtitle">"Your session has ended."</p>
                                    <a href=ROUTE_LOGIN class="btn" style="display: inline-block; text-decoration: none;">
                                        "Log In"
                                    </a>
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
