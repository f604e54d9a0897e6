use anyhow::Context as _;
use axum::http::StatusCode;
use serde_json::Value;

/// Assert status code matches expected
pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

/// Assert a `{error: "<message>"}` body and return the message.
pub fn assert_error_body<'a>(body: &'a Value, context: &str) -> anyhow::Result<&'a str> {
    let message = body
        .get("error")
        .and_then(|v| v.as_str())
        .with_context(|| format!("{context}: body has string `error`"))?;
    assert!(!message.is_empty(), "{context}: error message is empty");
    Ok(message)
}

/// Assert a `{message: "<message>"}` body and return the message.
pub fn assert_message_body<'a>(body: &'a Value, context: &str) -> anyhow::Result<&'a str> {
    body.get("message")
        .and_then(|v| v.as_str())
        .with_context(|| format!("{context}: body has string `message`"))
}

/// Ids of a JSON array of objects, in order.
pub fn ids(items: &Value) -> anyhow::Result<Vec<i64>> {
    items
        .as_array()
        .context("value is an array")?
        .iter()
        .map(|item| item["id"].as_i64().context("item has integer id"))
        .collect()
}

/// Assert the HTML contains an accessible error alert with `message`.
pub fn assert_error_alert(html: &str, message: &str) {
    assert!(
        html.contains(r#"role="alert""#),
        "expected an error alert in page"
    );
    assert!(
        html.contains(message),
        "expected error alert to contain {message:?}"
    );
}
