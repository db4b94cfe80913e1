//! Friendly error messages for authentication failures.
//!
//! The server embeds an `auth/...` token in the error; these maps turn a
//! token into the sentence shown inline under the form. Anything
//! unrecognised falls back to the generic message for that flow.

use api::AuthCode;

/// Message for a failed sign-up.
pub fn signup_message(code: AuthCode) -> &'static str {
    match code {
        AuthCode::EmailInUse => {
            "There's already a commander with this email. Try logging in instead."
        }
        AuthCode::InvalidEmail => "That email address looks invalid.",
        AuthCode::WeakPassword => "Try a stronger password (at least 6 characters).",
        _ => "We couldn't create your profile right now. Please try again.",
    }
}

/// Message for a failed sign-in.
pub fn signin_message(code: AuthCode) -> &'static str {
    match code {
        AuthCode::InvalidCredentials => "The email or password you entered is incorrect.",
        AuthCode::TooManyRequests => "Too many attempts. Please wait a moment and try again.",
        AuthCode::InvalidEmail => "That email address looks invalid.",
        _ => "We couldn't sign you in right now. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_in_use_has_the_exact_commander_message() {
        assert_eq!(
            signup_message(AuthCode::EmailInUse),
            "There's already a commander with this email. Try logging in instead."
        );
    }

    #[test]
    fn unknown_codes_fall_back_to_the_generic_message() {
        assert_eq!(
            signup_message(AuthCode::Unknown),
            "We couldn't create your profile right now. Please try again."
        );
        assert_eq!(
            signin_message(AuthCode::Unknown),
            "We couldn't sign you in right now. Please try again."
        );
    }

    #[test]
    fn wrapped_server_errors_map_end_to_end() {
        let wrapped = format!("server fn failed: {}", AuthCode::TooManyRequests);
        assert_eq!(
            signin_message(AuthCode::from_message(&wrapped)),
            "Too many attempts. Please wait a moment and try again."
        );
    }
}
