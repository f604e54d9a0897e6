//! Server-rendered HTML pages
//!
//! Pure render functions: handlers load data and pass it in, pages compose
//! `carefind-ui` components into a full document.

pub mod admin;
pub mod directory;

use axum::response::Html;
use carefind_ui::{page, ErrorMessage, RetryAction};

pub use admin::{admin_requests, hospital_form, HospitalFormView};
pub use directory::{hospital_detail, hospital_list};

/// Error page with an optional retry link.
pub fn error_page(message: &str, retry_href: Option<&str>) -> Html<String> {
    let mut error = ErrorMessage::new(message);
    if let Some(href) = retry_href {
        error = error.with_retry(RetryAction::link(href));
    }
    Html(page(error.title(), &error.render()))
}

fn optional(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(carefind_ui::text)
        .unwrap_or_else(|| "-".to_string())
}
