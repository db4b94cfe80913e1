//! Protected home view.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant};
use ui::{protected_view, use_session, use_session_hub, GateOutcome, SessionState};

use crate::Route;

/// Home page. Renders a loading affordance until the session resolves and
/// bounces unauthenticated visitors to login before any content shows.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let hub = use_session_hub();
    let nav = use_navigator();

    let state = session();
    match protected_view(&state) {
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

    let commander = state
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    let handle_sign_out = move |_| {
        let hub = hub.clone();
        async move {
            if api::sign_out().await.is_ok() {
                hub.publish(SessionState::Unauthenticated);
                nav.replace(Route::Login {});
            }
        }
    };

    rsx! {
        div {
            class: "page",

            header {
                class: "home-header",
                p { class: "eyebrow", "Capture the Flag" }
                div {
                    class: "home-header-actions",
                    span { class: "muted", "{commander}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: handle_sign_out,
                        "Sign Out"
                    }
                }
            }

            main {
                class: "home-main",
                h1 { class: "headline", "SOLVE THE MYSTERY" }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "cta",
                    onclick: move |_| { nav.push(Route::Challenge {}); },
                    "Start Challenge"
                }
            }
        }
    }
}
