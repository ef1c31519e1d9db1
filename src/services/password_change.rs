use crate::domain::{Email, MemberStoreType, Password, PasswordChangeError};

/// Read-modify-write password update over the member store. Not atomic at
/// the store level; callers wanting atomicity run it inside a surrounding
/// transaction collaborator.
pub struct PasswordChangeService {
    member_store: MemberStoreType,
}

impl PasswordChangeService {
    pub fn new(member_store: MemberStoreType) -> Self {
        Self { member_store }
    }

    #[tracing::instrument(name = "Changing member password", skip_all)]
    pub async fn change_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), PasswordChangeError> {
        let mut store = self.member_store.write().await;

        let mut member = store
            .find_by_email(email)
            .await?
            .ok_or(PasswordChangeError::MemberNotFound)?;

        member.password = new_password;
        store.update(&member).await?;
        Ok(())
    }
}
