//! Path parameter parsing

use crate::{Error, Result};

/// Parse a numeric path id, rejecting anything that is not a whole `i64`.
pub fn parse_id(raw: &str, invalid_message: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::Validation(invalid_message.to_string()))
}
