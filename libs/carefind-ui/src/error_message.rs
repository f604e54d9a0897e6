//! Error banner with an optional retry action.

use std::fmt;

pub const DEFAULT_TITLE: &str = "오류가 발생했습니다";
pub const DEFAULT_RETRY_LABEL: &str = "다시 시도";

/// What happens when the user presses the retry control.
///
/// `href` is where the rendered button navigates; `on_click` is an optional
/// in-process callback run by [`ErrorMessage::click_retry`].
pub struct RetryAction {
    label: String,
    href: String,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl RetryAction {
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            label: DEFAULT_RETRY_LABEL.to_string(),
            href: href.into(),
            on_click: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn on_click(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

impl fmt::Debug for RetryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryAction")
            .field("label", &self.label)
            .field("href", &self.href)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// A title/message pair. Holds no state beyond what it was built with.
#[derive(Debug)]
pub struct ErrorMessage {
    title: String,
    message: String,
    retry: Option<RetryAction>,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: message.into(),
            retry: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryAction) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn has_retry(&self) -> bool {
        self.retry.is_some()
    }

    /// Simulate the user pressing retry. Returns `true` when a callback ran.
    pub fn click_retry(&mut self) -> bool {
        match self.retry.as_mut().and_then(|r| r.on_click.as_mut()) {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> String {
        let retry = self
            .retry
            .as_ref()
            .map(|r| {
                format!(
                    r#"<a class="error-retry" role="button" href="{}">{}</a>"#,
                    crate::attr(&r.href),
                    crate::text(&r.label)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<div class="error-message" role="alert"><h2>{}</h2><p>{}</p>{}</div>"#,
            crate::text(&self.title),
            crate::text(&self.message),
            retry
        )
    }
}
