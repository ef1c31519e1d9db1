use crate::helpers::{get_random_email, new_member, TestStore};
use member_store::domain::{Password, PasswordChangeError};
use member_store::services::password_change::PasswordChangeService;
use secrecy::Secret;
use test_context::test_context;

#[test_context(TestStore)]
#[tokio::test]
async fn change_password_rewrites_stored_password(store: &mut TestStore) {
    let email = get_random_email();
    let mut member = new_member(email.clone(), "Ada Lovelace", "old-secret");
    store
        .store
        .write()
        .await
        .insert(&mut member)
        .await
        .expect("Failed to insert member");

    let service = PasswordChangeService::new(store.store.clone());
    let new_password = Password::new(Secret::new("new-secret".to_string()));
    service
        .change_password(&email, new_password.clone())
        .await
        .expect("Password change should succeed");

    let found = store
        .store
        .read()
        .await
        .find_by_email(&email)
        .await
        .unwrap()
        .expect("Member should still exist");

    assert_eq!(found.password, new_password);
    assert_eq!(found.name, member.name, "Name should be unchanged");
    assert_eq!(found.id, member.id, "Id should be unchanged");
    assert_eq!(found.registered_at, member.registered_at);
}

#[test_context(TestStore)]
#[tokio::test]
async fn change_password_unknown_email_fails(store: &mut TestStore) {
    let service = PasswordChangeService::new(store.store.clone());

    let result = service
        .change_password(
            &get_random_email(),
            Password::new(Secret::new("whatever".to_string())),
        )
        .await;

    assert_eq!(result, Err(PasswordChangeError::MemberNotFound));
}
