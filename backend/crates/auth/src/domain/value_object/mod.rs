//! Value Objects

pub mod display_name;
pub mod email;
pub mod password;

pub use display_name::DisplayName;
pub use email::Email;
pub use password::RawPassword;
