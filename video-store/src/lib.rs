pub mod application_service;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod server;

pub use config::ServiceConfig;
pub use domain::*;
