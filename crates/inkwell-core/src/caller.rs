//! Explicit caller identity passed into every operation.

use uuid::Uuid;

use crate::error::DomainError;

/// Who is invoking an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Authenticated(Uuid),
}

impl Caller {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Caller::Authenticated(_))
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Caller::Anonymous => None,
            Caller::Authenticated(id) => Some(*id),
        }
    }

    /// The caller's identity, or `Unauthorized` for anonymous callers.
    pub fn require(&self) -> Result<Uuid, DomainError> {
        self.user_id().ok_or(DomainError::Unauthorized)
    }
}

impl From<Option<Uuid>> for Caller {
    fn from(user_id: Option<Uuid>) -> Self {
        user_id.map_or(Caller::Anonymous, Caller::Authenticated)
    }
}
