//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session_context;
use crate::utils::constants::{ROUTE_DASHBOARD, ROUTE_LOGIN, ROUTE_REGISTER};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="brand-gen">"Gen"</span><span class="brand-bank">"Bank"</span>
                    </span>
                </A>
                <div class="nav-links">
                    {move || if session.is_authenticated() {
                        view! {
                            <A href=ROUTE_DASHBOARD>"Dashboard"</A>
                        }.into_any()
                    } else {
                        view! {
                            <span>
                                <A href=ROUTE_LOGIN>"Log In"</A>
                                " "
                                <A href=ROUTE_REGISTER>"Sign Up"</A>
                            </span>
                        }.into_any()
                    }}
                </div>
            </div>
        </nav>
    }
}
