pub mod datetime;
pub mod validate;
