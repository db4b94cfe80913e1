//! Challenge briefing and flag submission form.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input};
use ui::{protected_view, use_session, GateOutcome};

use crate::Route;

/// Challenge page. Submission is a client-side acknowledgment only: nothing
/// is sent or stored. Real flag verification belongs to a collaborator that
/// does not exist yet.
#[component]
pub fn Challenge() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut code = use_signal(String::new);
    let mut acknowledged = use_signal(|| false);

    match protected_view(&session()) {
        GateOutcome::Pending => {
            return rsx! {
                div {
                    class: "page page-center",
                    div {
                        class: "loading",
                        div { class: "spinner" }
                        p { class: "eyebrow", "Preparing your mission..." }
                    }
                }
            };
        }
        GateOutcome::RedirectLogin => {
            nav.replace(Route::Login {});
            return rsx! {};
        }
        _ => {}
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        acknowledged.set(true);
    };

    rsx! {
        div {
            class: "page page-center challenge",

            div {
                class: "panel",

                div {
                    class: "challenge-banner",
                    p { class: "challenge-title", "Challenge 1" }
                }

                div {
                    class: "challenge-briefing",
                    p {
                        "Your mission briefing appears here. Decode the clues, extract the \
                         signal, and be ready to submit the correct flag using the input below."
                    }
                }

                form {
                    onsubmit: handle_submit,
                    class: "form",

                    div {
                        class: "field",
                        label { r#for: "flag-code", class: "sr-only", "Input Code" }
                        Input {
                            id: "flag-code",
                            placeholder: "Input Code",
                            value: code(),
                            oninput: move |evt: FormEvent| code.set(evt.value()),
                        }
                    }

                    if acknowledged() {
                        p { class: "form-success", "Submission received! Keep digging for the real flag." }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        "Enter"
                    }
                }
            }
        }
    }
}
