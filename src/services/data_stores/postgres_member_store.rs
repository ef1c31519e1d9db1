use chrono::{DateTime, Utc};
use color_eyre::eyre::eyre;
use secrecy::{ExposeSecret, Secret};
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::{
    Email, Member, MemberId, MemberStore, MemberStoreError, Password,
};

pub struct PostgresMemberStore {
    pool: PgPool,
}

impl PostgresMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps one result-set row to a fully populated `Member`. Shared by every
/// query that selects member rows, so lookups and listings cannot drift.
fn member_from_row(row: &PgRow) -> Result<Member, MemberStoreError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;
    let password: String = row
        .try_get("password")
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;
    let registered_at: DateTime<Utc> = row
        .try_get("regdate")
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;

    Ok(Member {
        id: Some(MemberId::new(id)),
        email: Email::parse(Secret::new(email))
            .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?,
        password: Password::new(Secret::new(password)),
        name,
        registered_at,
    })
}

#[async_trait::async_trait]
impl MemberStore for PostgresMemberStore {
    #[tracing::instrument(
        name = "Retrieving member by email from PostgreSQL",
        skip_all
    )]
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Member>, MemberStoreError> {
        // No ORDER BY: with duplicate emails the "first" row is whatever
        // the engine yields first. The schema's unique constraint is what
        // rules that case out.
        let row = sqlx::query(
            r#"
            SELECT * FROM member WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;

        row.as_ref().map(member_from_row).transpose()
    }

    #[tracing::instrument(name = "Listing members from PostgreSQL", skip_all)]
    async fn list_all(&self) -> Result<Vec<Member>, MemberStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM member
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;

        rows.iter().map(member_from_row).collect()
    }

    #[tracing::instrument(name = "Inserting member into PostgreSQL", skip_all)]
    async fn insert(
        &mut self,
        member: &mut Member,
    ) -> Result<(), MemberStoreError> {
        // The primary key comes from seq_memberId; RETURNING captures the
        // generated value in the same round trip so it can be written back
        // into the record.
        let row = sqlx::query(
            r#"
            INSERT INTO member (id, email, password, name, regdate)
            VALUES (nextval('seq_memberId'), $1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(member.email.as_ref().expose_secret())
        .bind(member.password.as_ref().expose_secret())
        .bind(&member.name)
        .bind(member.registered_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;
        member.id = Some(MemberId::new(id));
        Ok(())
    }

    #[tracing::instrument(name = "Updating member in PostgreSQL", skip_all)]
    async fn update(
        &mut self,
        member: &Member,
    ) -> Result<(), MemberStoreError> {
        // Keys on email; id and regdate are never touched. Zero affected
        // rows is not surfaced, matching the silent no-op contract.
        sqlx::query(
            r#"
            UPDATE member SET name = $1, password = $2 WHERE email = $3
            "#,
        )
        .bind(&member.name)
        .bind(member.password.as_ref().expose_secret())
        .bind(member.email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;

        Ok(())
    }

    #[tracing::instrument(name = "Counting members in PostgreSQL", skip_all)]
    async fn count(&self) -> Result<i64, MemberStoreError> {
        let row = sqlx::query(
            r#"
            SELECT count(*) FROM member
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MemberStoreError::StorageError(eyre!(e)))?;

        row.try_get(0)
            .map_err(|e| MemberStoreError::StorageError(eyre!(e)))
    }
}
