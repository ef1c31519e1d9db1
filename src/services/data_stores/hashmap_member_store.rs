use crate::domain::{
    Email, Member, MemberId, MemberStore, MemberStoreError,
};
use color_eyre::eyre::eyre;
use std::collections::HashMap;

/// In-memory stand-in for the Postgres store. Mimics its observable
/// contract, including the unique email constraint and the monotonically
/// increasing generated key.
#[derive(Default)]
pub struct HashmapMemberStore {
    members: HashMap<Email, Member>,
    next_id: i64,
}

#[async_trait::async_trait]
impl MemberStore for HashmapMemberStore {
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Member>, MemberStoreError> {
        Ok(self.members.get(email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Member>, MemberStoreError> {
        Ok(self.members.values().cloned().collect())
    }

    async fn insert(
        &mut self,
        member: &mut Member,
    ) -> Result<(), MemberStoreError> {
        if self.members.contains_key(&member.email) {
            return Err(MemberStoreError::StorageError(eyre!(
                "duplicate key value violates unique constraint on email"
            )));
        }

        self.next_id += 1;
        member.id = Some(MemberId::new(self.next_id));
        self.members.insert(member.email.clone(), member.clone());
        Ok(())
    }

    async fn update(
        &mut self,
        member: &Member,
    ) -> Result<(), MemberStoreError> {
        // Missing email is a silent no-op, same as the SQL store.
        if let Some(stored) = self.members.get_mut(&member.email) {
            stored.name = member.name.clone();
            stored.password = member.password.clone();
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, MemberStoreError> {
        Ok(self.members.len() as i64)
    }
}
