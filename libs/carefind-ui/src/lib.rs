//! Presentational components for the carefind hospital directory.
//!
//! Every component is a plain value that renders itself to an HTML fragment.
//! Components never talk to the server or the database; pages build them from
//! already-loaded data and compose the fragments with [`layout`].
//!
//! - [`ErrorMessage`] - title/message banner with an optional retry action
//! - [`highlight`] - case-insensitive search-term highlighting
//! - [`HospitalCardImage`] - hospital image with a one-way placeholder fallback
//! - [`layout`] - public and admin page shells

pub mod card_image;
pub mod error_message;
pub mod highlight;
pub mod layout;

pub use card_image::{HospitalCardImage, ImageState, PLACEHOLDER_GLYPH};
pub use error_message::{ErrorMessage, RetryAction};
pub use highlight::{highlight_html, segments, Segment};
pub use layout::{admin_page, page, NavItem};

/// Escape text for use between HTML tags.
pub fn text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Escape text for use inside a double-quoted attribute.
pub fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}
