use super::{Email, Member};
use color_eyre::eyre::Report;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

pub type MemberStoreType = Arc<RwLock<dyn MemberStore + Send + Sync>>;

#[async_trait::async_trait]
pub trait MemberStore {
    /// Returns the first row matching `email`, or `None` if no row does.
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Member>, MemberStoreError>;

    /// Returns every stored member, fully materialized, in engine order.
    async fn list_all(&self) -> Result<Vec<Member>, MemberStoreError>;

    /// Persists an unpersisted member and writes the generated key back
    /// into `member.id`.
    async fn insert(
        &mut self,
        member: &mut Member,
    ) -> Result<(), MemberStoreError>;

    /// Updates name and password for the row matching `member.email`.
    /// A missing row is a silent no-op, not an error.
    async fn update(&mut self, member: &Member)
        -> Result<(), MemberStoreError>;

    async fn count(&self) -> Result<i64, MemberStoreError>;
}

#[derive(Debug, Error)]
pub enum MemberStoreError {
    #[error("Storage error")]
    StorageError(#[source] Report),
}

impl PartialEq for MemberStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::StorageError(_), Self::StorageError(_))
        )
    }
}
