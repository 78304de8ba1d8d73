use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

pub const CATEGORY_TITLE_MAX_LEN: usize = 20;

/// A named bucket posts can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
}

impl Category {
    /// Create a category after checking the title. Titles are kept verbatim.
    pub fn new(title: String) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("category title is required"));
        }
        if title.chars().count() > CATEGORY_TITLE_MAX_LEN {
            return Err(DomainError::validation(format!(
                "category title must be at most {CATEGORY_TITLE_MAX_LEN} characters"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title,
        })
    }
}
