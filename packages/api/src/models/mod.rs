pub mod challenge;
pub mod user;

pub use challenge::Challenge;
pub use user::UserInfo;
#[cfg(feature = "server")]
pub use user::User;
