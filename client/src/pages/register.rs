//! Registration form.
//!
//! Field values stay in signals for the life of the mount; a failed submit
//! shows the message above the form and leaves every field as typed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::routing::table::LOGIN_PATH;
use crate::state::forms::{FormStatus, RegisterForm, submit_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !status.try_update(FormStatus::start).unwrap_or(false) {
            return;
        }
        let form = RegisterForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirmation: confirmation.get_untracked(),
        };
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = submit_registration(&client, &form).await;
            if let Some(path) = status.try_update(|s| s.finish(result)).flatten() {
                navigate(path, NavigateOptions::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <Show when=move || status.with(|s| s.error.is_some())>
                    <p class="auth-card__error">{move || status.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <form class="auth-form" novalidate on:submit=on_submit>
                    <h1 class="auth-form__title">"Register"</h1>
                    <input
                        class="auth-input"
                        type="text"
                        name="username"
                        placeholder="Username"
                        autofocus
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        name="email"
                        placeholder="Email Address"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        name="confirmation"
                        placeholder="Confirm Password"
                        required
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || status.with(|s| s.busy)>
                        "Register"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href=LOGIN_PATH>"Log In here."</A>
                </p>
            </div>
        </section>
    }
}
