mod challenge;
mod home;
mod login;
mod signup;

pub use challenge::Challenge;
pub use home::Home;
pub use login::Login;
pub use signup::Signup;
