//! Login page view with email/password form.

use api::LoginForm;
use dioxus::prelude::*;
use ui::{sign_in, use_api, use_session};

use super::use_notice;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut notice = use_notice();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Shown once, then forgotten
    let flash = use_hook(move || notice.write().0.take());

    // If already logged in, go straight to the tasks
    if session.read().is_signed_in() {
        nav.replace(Route::Tasks {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let form = LoginForm::new(email().trim(), password());
            match api.login(&form).await {
                Ok(signed_in) => {
                    sign_in(&mut session, signed_in);
                    nav.replace(Route::Tasks {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {:?}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Welcome back" }
            p { class: "auth-subtitle", "Sign in to your account" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(message) = &flash {
                    div { class: "alert alert-info", "{message}" }
                }

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Log in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
