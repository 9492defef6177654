//! Portal application shell: session context, background, navbar, routes.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{AnimatedBackground, Navbar};
use crate::pages::{DashboardPage, LoginPage, RegisterPage};
use crate::state::session::provide_session_context;
use crate::utils::constants::ROUTE_LOGIN;

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();

    view! {
        <Router>
            <div class="app-container">
                <AnimatedBackground/>
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LoginPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href=ROUTE_LOGIN>
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Login"
                    </span>
                </A>
            </div>
        </div>
    }
}
