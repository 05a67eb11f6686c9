pub mod admin;
pub mod assignments;
pub mod auth;
pub mod common;
pub mod courses;
pub mod notices;
pub mod notifications;
pub mod submissions;
pub mod users;

pub use common::detail::DetailMessage;
