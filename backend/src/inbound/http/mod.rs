//! HTTP inbound adapter exposing the login and todo endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod todos;

pub use error::ApiResult;
