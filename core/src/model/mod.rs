pub mod job;
pub mod application;

pub mod api_key;
