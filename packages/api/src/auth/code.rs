//! Stable error codes for authentication failures.
//!
//! Server functions carry failures across the boundary as `ServerFnError`
//! messages; embedding one of these `auth/...` tokens in the message lets the
//! client map the failure to a friendly sentence without depending on the
//! provider's internal error text.

use serde::{Deserialize, Serialize};

/// Authentication failure categories surfaced to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthCode {
    /// Sign-up with an email that already has an identity.
    EmailInUse,
    /// Email missing an `@` or otherwise unparseable.
    InvalidEmail,
    /// Password shorter than the 6-character minimum.
    WeakPassword,
    /// Unknown email or wrong password. Deliberately indistinguishable.
    InvalidCredentials,
    /// Too many failed sign-in attempts for this email.
    TooManyRequests,
    /// Anything else: store write failures, session errors.
    Unknown,
}

impl AuthCode {
    /// The stable token embedded in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthCode::EmailInUse => "auth/email-already-in-use",
            AuthCode::InvalidEmail => "auth/invalid-email",
            AuthCode::WeakPassword => "auth/weak-password",
            AuthCode::InvalidCredentials => "auth/invalid-credentials",
            AuthCode::TooManyRequests => "auth/too-many-requests",
            AuthCode::Unknown => "auth/unknown",
        }
    }

    /// Find a known token inside an error message, if any.
    ///
    /// Transport layers wrap server function errors in their own text, so the
    /// client scans rather than parses. An unrecognised message maps to
    /// [`AuthCode::Unknown`].
    pub fn from_message(message: &str) -> AuthCode {
        const ALL: [AuthCode; 6] = [
            AuthCode::EmailInUse,
            AuthCode::InvalidEmail,
            AuthCode::WeakPassword,
            AuthCode::InvalidCredentials,
            AuthCode::TooManyRequests,
            AuthCode::Unknown,
        ];
        ALL.into_iter()
            .find(|code| message.contains(code.as_str()))
            .unwrap_or(AuthCode::Unknown)
    }
}

impl std::fmt::Display for AuthCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_through_wrapped_messages() {
        let wrapped = format!("error running server function: {}", AuthCode::EmailInUse);
        assert_eq!(AuthCode::from_message(&wrapped), AuthCode::EmailInUse);
    }

    #[test]
    fn unrecognised_message_maps_to_unknown() {
        assert_eq!(
            AuthCode::from_message("connection reset by peer"),
            AuthCode::Unknown
        );
    }

    #[test]
    fn tokens_are_distinct() {
        assert_ne!(
            AuthCode::InvalidCredentials.as_str(),
            AuthCode::InvalidEmail.as_str()
        );
    }
}
