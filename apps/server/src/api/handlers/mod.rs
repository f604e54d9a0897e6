//! Request handlers
//!
//! Handlers take explicit extractors, call a service or the store, and shape
//! the outcome into a status plus JSON body or HTML page.

pub mod admin;
pub mod hospitals;
pub mod metrics;
pub mod pages;
pub mod qna;
pub mod users;

pub use admin::*;
pub use hospitals::*;
pub use metrics::*;
pub use pages::*;
pub use qna::*;
pub use users::*;
