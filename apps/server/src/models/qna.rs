use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qna {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub view_count: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QnaWithAuthor {
    #[serde(flatten)]
    pub qna: Qna,
    pub user: UserSummary,
}
