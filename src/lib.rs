pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod session;
pub mod templates_structs;
