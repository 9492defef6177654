//! Registration page - the full signup form for guardians and dependents

use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::dto::auth::{RegisterRequest, Role};
use shared::validation::validate_registration;

use crate::services::auth;
use crate::utils::constants::ROUTE_LOGIN;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let (submitting, set_submitting) = signal(false);
    let (error_message, set_error_message) = signal(None::<String>);
    let (role, set_role) = signal(String::new());

    let username_ref: NodeRef<Input> = NodeRef::new();
    let email_ref: NodeRef<Input> = NodeRef::new();
    let password_ref: NodeRef<Input> = NodeRef::new();
    let confirm_password_ref: NodeRef<Input> = NodeRef::new();
    let age_ref: NodeRef<Input> = NodeRef::new();
    let address_ref: NodeRef<Input> = NodeRef::new();
    let phone_ref: NodeRef<Input> = NodeRef::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_error_message.set(None);
        set_submitting.set(true);

        let fail = move |message: String| {
            set_error_message.set(Some(message));
            set_submitting.set(false);
        };

        let (
            Some(username_input),
            Some(email_input),
            Some(password_input),
            Some(confirm_password_input),
            Some(age_input),
            Some(address_input),
            Some(phone_input),
        ) = (
            username_ref.get(),
            email_ref.get(),
            password_ref.get(),
            confirm_password_ref.get(),
            age_ref.get(),
            address_ref.get(),
            phone_ref.get(),
        )
        else {
            set_submitting.set(false);
            return;
        };

        let Some(role) = Role::from_form_value(&role.get()) else {
            fail("Please select a role.".to_string());
            return;
        };

        let age_value = age_input.value();
        let request = RegisterRequest {
            username: username_input.value(),
            email: email_input.value(),
            password: password_input.value(),
            confirm_password: confirm_password_input.value(),
            age: (!age_value.is_empty()).then_some(age_value),
            address: address_input.value(),
            phone_number: phone_input.value(),
            role,
        };

        // Invalid submissions never reach the network.
        let checked = validate_registration(&request);
        if !checked.is_valid {
            fail(checked
                .error
                .unwrap_or_else(|| "Invalid submission.".to_string()));
            return;
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::register(&request).await {
                Ok(()) => {
                    // Account created; no token is issued until login.
                    navigate(ROUTE_LOGIN, Default::default());
                }
                Err(failure) => fail(failure.message),
            }
        });
    };

    view! {
        <div class="content-wrapper">
            <div class="container">
                <div class="card">
                    <h1 class="card-title">"Let's Get Started"</h1>
                    <p class="subtitle">"Sign up your account"</p>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                placeholder="Enter your Username"
                                autocapitalize="none"
                                required=true
                                node_ref=username_ref
                            />
                        </div>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="text"
                                placeholder="Enter your Email address"
                                autocomplete="email"
                                autocapitalize="none"
                                required=true
                                node_ref=email_ref
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                placeholder="Enter your Password"
                                autocomplete="new-password"
                                required=true
                                node_ref=password_ref
                            />
                        </div>
                        <div class="form-group">
                            <label for="confirm-password">"Confirm Password"</label>
                            <input
                                id="confirm-password"
                                name="confirm-password"
                                type="password"
                                placeholder="Enter your Confirm Password"
                                autocomplete="new-password"
                                required=true
                                node_ref=confirm_password_ref
                            />
                        </div>
                        <div class="form-group">
                            <label for="age">"Age"</label>
                            <input
                                id="age"
                                name="age"
                                type="number"
                                placeholder="Enter your age"
                                min="0"
                                max="120"
                                autocomplete="bday-year"
                                node_ref=age_ref
                            />
                        </div>
                        <div class="form-group">
                            <label for="address">"Address"</label>
                            <input
                                id="address"
                                name="address"
                                type="text"
                                placeholder="Enter your address"
                                autocomplete="street-address"
                                required=true
                                node_ref=address_ref
                            />
                        </div>
                        <div class="form-group">
                            <label for="phone">"Phone"</label>
                            <input
                                id="phone"
                                name="phoneNumber"
                                type="tel"
                                placeholder="Enter your phone number"
                                pattern="[0-9]{8}"
                                autocomplete="tel"
                                required=true
                                node_ref=phone_ref
                            />
                        </div>
                        <div class="form-group">
                            <label for="role">"Role"</label>
                            <select
                                id="role"
                                name="role"
                                prop:value=move || role.get()
                                on:change=move |ev| set_role.set(event_target_value(&ev))
                            >
                                <option value="">"Select role..."</option>
                                <option value="GUARDIAN">"Guardian"</option>
                                <option value="DEPENDENT">"Dependent"</option>
                            </select>
                        </div>

                        {move || error_message.get().map(|message| view! {
                            <div class="error">
                                <p>{message}</p>
                            </div>
                        })}

                        <button type="submit" class="btn" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Signing Up..." } else { "Sign Up" }}
                        </button>
                    </form>

                    <p class="footer-text">
                        "Already have an account? "
                        <A href=ROUTE_LOGIN>"Log in"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}
