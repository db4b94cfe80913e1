//! Shared UI for the workspace: session state, gate decisions, error
//! message mapping, and small form components.

pub mod components;

mod gate;
pub use gate::{entry_view, protected_view, GateOutcome};

mod messages;
pub use messages::{signin_message, signup_message};

mod session;
pub use session::{
    use_session, use_session_hub, SessionHub, SessionProvider, SessionState, Subscription,
};
