use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authoring profile, one per user. Created lazily on first post submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Media store reference, empty until an image is attached.
    pub profile_image: String,
}

impl Author {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            profile_image: String::new(),
        }
    }
}
