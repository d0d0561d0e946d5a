//! Signup page view.

use api::{Registered, Registration};
use dioxus::prelude::*;
use ui::{sign_in, use_api, use_session};

use super::{use_notice, Notice};
use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut notice = use_notice();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.read().is_signed_in() {
        nav.replace(Route::Tasks {});
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let form = Registration {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                confirm_password: confirm_password(),
            };
            match api.register(&form).await {
                Ok(Registered::SignedIn(signed_in)) => {
                    sign_in(&mut session, signed_in);
                    nav.replace(Route::Tasks {});
                }
                Ok(Registered::AccountCreated) => {
                    notice.set(Notice(Some(
                        "Account created. Please log in.".to_string(),
                    )));
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("Signup failed: {:?}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create Account" }
            p { class: "auth-subtitle", "Start organizing your tasks" }

            form {
                onsubmit: handle_signup,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password (min. 6 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
