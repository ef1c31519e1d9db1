use super::MemberStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordChangeError {
    #[error("Member not found")]
    MemberNotFound,
    #[error("Store error")]
    StoreError(#[from] MemberStoreError),
}

impl PartialEq for PasswordChangeError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MemberNotFound, Self::MemberNotFound)
                | (Self::StoreError(_), Self::StoreError(_))
        )
    }
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
