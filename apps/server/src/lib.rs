//! carefind - hospital directory server
//!
//! - Hospital directory pages with search highlighting
//! - Visit/contact requests left on a hospital
//! - Q&A board with atomic view counting
//! - Admin inbox, hospital registration and review re-verification
//! - PostgreSQL or in-memory storage behind one `DirectoryStore` trait

pub mod admin_auth;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod messages;
pub mod metrics;
pub mod models;
pub mod pages;
pub mod request_context;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
