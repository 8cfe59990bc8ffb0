pub mod user_mapper;
pub mod user_service;

pub use user_service::*;
