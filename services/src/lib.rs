pub mod post_service;
pub mod service;
pub mod user_service;
