use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// "Has read" marker: at most one row per (user, post).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
}

impl PostView {
    pub fn new(user_id: Uuid, post_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            post_id,
        }
    }
}
