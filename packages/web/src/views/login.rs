//! Login page with email/password form.

use dioxus::prelude::*;

use api::AuthCode;
use ui::components::{Button, ButtonVariant, Input};
use ui::{entry_view, signin_message, use_session, use_session_hub, GateOutcome, SessionState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let hub = use_session_hub();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Already signed in: straight to Home.
    if entry_view(&session()) == GateOutcome::RedirectHome {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let is_disabled = busy() || email().is_empty() || password().is_empty();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let hub = hub.clone();
        spawn(async move {
            error.set(None);
            busy.set(true);

            match api::sign_in(email().trim().to_string(), password()).await {
                Ok(user) => {
                    hub.publish(SessionState::Authenticated(user));
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    busy.set(false);
                    let code = AuthCode::from_message(&e.to_string());
                    error.set(Some(signin_message(code).to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page-center",

            div {
                class: "panel panel-narrow",

                div {
                    class: "panel-heading",
                    p { class: "eyebrow", "Capture the Flag" }
                    h1 { "Welcome Back" }
                    p { class: "muted", "Log in to continue solving the mystery." }
                }

                form {
                    onsubmit: handle_submit,
                    class: "form",

                    div {
                        class: "field",
                        label { r#for: "email", "Email" }
                        Input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            autocomplete: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "field",
                        label { r#for: "password", "Password" }
                        Input {
                            id: "password",
                            r#type: "password",
                            placeholder: "********",
                            autocomplete: "current-password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    if let Some(err) = error() {
                        p { class: "form-error", "{err}" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: is_disabled,
                        if busy() { "Checking credentials..." } else { "Enter the Arena" }
                    }

                    p {
                        class: "form-footer",
                        "Need an account? "
                        Link { to: Route::Signup {}, "Create one now" }
                    }
                }
            }
        }
    }
}
