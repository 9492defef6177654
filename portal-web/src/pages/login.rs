//! Login page - username/password form posting to the auth service

use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::dto::auth::LoginRequest;

use crate::services::auth;
use crate::state::session::use_session_context;
use crate::utils::constants::{ROUTE_DASHBOARD, ROUTE_REGISTER};
use crate::utils::url::get_query_param;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let (submitting, set_submitting) = signal(false);
    let (error_message, set_error_message) = signal(None::<String>);

    let username_ref: NodeRef<Input> = NodeRef::new();
    let password_ref: NodeRef<Input> = NodeRef::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_error_message.set(None);
        set_submitting.set(true);

        let (Some(username_input), Some(password_input)) =
            (username_ref.get(), password_ref.get())
        else {
            set_submitting.set(false);
            return;
        };

        let request = LoginRequest {
            username: username_input.value(),
            password: password_input.value(),
        };

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(&request).await {
                Ok(token) => {
                    session.set(token);
                    // Deep links land back where they started via ?redirect=
                    let destination = get_query_param("redirect")
                        .unwrap_or_else(|| ROUTE_DASHBOARD.to_string());
                    navigate(&destination, Default::default());
                }
                Err(failure) => {
                    set_error_message.set(Some(failure.message));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="content-wrapper">
            <div class="container">
                <div class="card">
                    <h1 class="card-title">"Welcome Back"</h1>
                    <p class="subtitle">"Log in to your GenBank account"</p>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                placeholder="Enter your Username"
                                autocomplete="username"
                                required=true
                                node_ref=username_ref
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                placeholder="Enter your Password"
                                autocomplete="current-password"
                                required=true
                                node_ref=password_ref
                            />
                        </div>

                        {move || error_message.get().map(|message| view! {
                            <div class="error">
                                <p>{message}</p>
                            </div>
                        })}

                        <button type="submit" class="btn" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                        </button>
                    </form>

                    <p class="footer-text">
                        "Don't have an account? "
                        <A href=ROUTE_REGISTER>"Sign up"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}
