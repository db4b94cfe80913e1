//! Signup page with commander profile form.

use dioxus::prelude::*;

use api::AuthCode;
use ui::components::{Button, ButtonVariant, Input};
use ui::{entry_view, signup_message, use_session, use_session_hub, GateOutcome, SessionState};

use crate::Route;

/// Minimum password length, mirrored by the server-side check. The submit
/// control stays disabled below this, so no request is made for a password
/// the server would reject anyway.
const MIN_PASSWORD_LEN: usize = 6;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let hub = use_session_hub();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    if entry_view(&session()) == GateOutcome::RedirectHome {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let is_disabled =
        busy() || name().is_empty() || email().is_empty() || password().len() < MIN_PASSWORD_LEN;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let hub = hub.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            busy.set(true);

            match api::sign_up(
                name().trim().to_string(),
                email().trim().to_string(),
                password(),
            )
            .await
            {
                Ok(user) => {
                    success.set(Some("Profile created! Launching the mission...".to_string()));
                    hub.publish(SessionState::Authenticated(user));
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    busy.set(false);
                    let code = AuthCode::from_message(&e.to_string());
                    error.set(Some(signup_message(code).to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page-center",

            div {
                class: "panel",

                div {
                    class: "panel-heading",
                    p { class: "eyebrow", "Capture the Flag" }
                    h1 { "Create Your Commander Profile" }
                    p { class: "muted", "Sign up to join the hunt and unlock the main experience." }
                }

                form {
                    onsubmit: handle_submit,
                    class: "form",

                    div {
                        class: "field",
                        label { r#for: "name", "Name" }
                        Input {
                            id: "name",
                            r#type: "text",
                            placeholder: "Commander Jane",
                            autocomplete: "name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }

                    div {
                        class: "field",
                        label { r#for: "signup-email", "Email" }
                        Input {
                            id: "signup-email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            autocomplete: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "field",
                        label { r#for: "signup-password", "Password" }
                        Input {
                            id: "signup-password",
                            r#type: "password",
                            placeholder: "Create a strong password",
                            autocomplete: "new-password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        p { class: "hint", "Use at least 6 characters to keep things secure." }
                    }

                    if let Some(err) = error() {
                        p { class: "form-error", "{err}" }
                    }
                    if let Some(msg) = success() {
                        p { class: "form-success", "{msg}" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: is_disabled,
                        if busy() { "Setting up your profile..." } else { "Join the Mission" }
                    }

                    p {
                        class: "form-footer",
                        "Already enlisted? "
                        Link { to: Route::Login {}, "Head to login" }
                    }
                }
            }
        }
    }
}
