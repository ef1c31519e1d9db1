use super::{Email, MemberId, Password};
use chrono::{DateTime, Utc};

/// A membership account record. `id` is `None` until the record has been
/// inserted; the store writes the generated key back on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: Option<MemberId>,
    pub email: Email,
    pub password: Password,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

impl Member {
    pub fn new(
        email: Email,
        password: Password,
        name: String,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            email,
            password,
            name,
            registered_at,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
