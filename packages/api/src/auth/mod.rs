//! Identity provider: account creation, credential checks, session keys.

mod code;

#[cfg(feature = "server")]
mod identity;
#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod rate_limit;
#[cfg(feature = "server")]
mod session;

pub use code::AuthCode;

#[cfg(feature = "server")]
pub use identity::{
    authenticate, create_identity, find_by_id, set_display_name, IdentityError,
    MIN_PASSWORD_LEN,
};
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use rate_limit::SignInLimiter;
#[cfg(feature = "server")]
pub use session::SESSION_USER_ID_KEY;
