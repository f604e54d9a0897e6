//! Hospital card image with a placeholder fallback.
//!
//! The state only ever moves from `Image` to `Placeholder`. Once an instance
//! has failed to load it stays on the placeholder for its whole lifetime.

pub const PLACEHOLDER_GLYPH: &str = "🏥";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    Image(String),
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct HospitalCardImage {
    alt: String,
    state: ImageState,
}

impl HospitalCardImage {
    /// A missing or blank URL starts on the placeholder.
    pub fn new(image_url: Option<&str>, alt: impl Into<String>) -> Self {
        let state = match image_url.map(str::trim) {
            Some(url) if !url.is_empty() => ImageState::Image(url.to_string()),
            _ => ImageState::Placeholder,
        };
        Self {
            alt: alt.into(),
            state,
        }
    }

    /// Load failure (network or decode). Irreversible.
    pub fn on_error(&mut self) {
        self.state = ImageState::Placeholder;
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    pub fn is_placeholder(&self) -> bool {
        self.state == ImageState::Placeholder
    }

    pub fn render(&self) -> String {
        let placeholder = |hidden: bool| {
            format!(
                r#"<span class="card-image-placeholder" role="img" aria-label="{}"{}>{}</span>"#,
                crate::attr(&self.alt),
                if hidden { " hidden" } else { "" },
                PLACEHOLDER_GLYPH
            )
        };

        match &self.state {
            ImageState::Placeholder => {
                format!(r#"<div class="card-image">{}</div>"#, placeholder(false))
            }
            // The browser-side fallback mirrors on_error: hide the image and
            // reveal the placeholder, with no way back.
            ImageState::Image(url) => format!(
                r#"<div class="card-image"><img src="{}" alt="{}" loading="lazy" onerror="this.onerror=null;this.nextElementSibling.hidden=false;this.remove()">{}</div>"#,
                crate::attr(url),
                crate::attr(&self.alt),
                placeholder(true)
            ),
        }
    }
}
