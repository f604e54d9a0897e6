//! Q&A board reads

use crate::{db::DirectoryStore, messages, models::QnaWithAuthor, Error, Result};
use std::sync::Arc;

pub struct QnaService {
    store: Arc<dyn DirectoryStore>,
}

impl QnaService {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    /// Count a view and return the post with its author.
    ///
    /// The increment and the read are one store operation, so a missing post
    /// is reported as `NotFound` and never half-counted.
    pub async fn view(&self, id: i64) -> Result<QnaWithAuthor> {
        let qna = self
            .store
            .increment_qna_views(id)
            .await?
            .ok_or_else(|| Error::NotFound(messages::QNA_NOT_FOUND.to_string()))?;

        crate::metrics::QNA_VIEWS_TOTAL.inc();
        Ok(qna)
    }
}
