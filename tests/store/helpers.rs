use chrono::{SubsecRound, Utc};
use member_store::{
    domain::{Email, Member, MemberStoreType, Password},
    get_postgres_pool,
    services::data_stores::PostgresMemberStore,
    utils::constants::DATABASE_URL,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{
    postgres::{PgConnectOptions, PgConnection, PgPoolOptions},
    Connection, Executor, PgPool,
};
use std::{str::FromStr, sync::Arc};
use test_context::AsyncTestContext;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct TestStore {
    pub store: MemberStoreType,
    pub tmp_db_name: String,
}

impl TestStore {
    pub async fn new() -> Self {
        // Only the first test to get here installs the subscriber.
        let _ = member_store::utils::tracing::init_tracing();

        let tmp_db_name = Uuid::new_v4().to_string();
        let pg_pool = configure_postgresql(&tmp_db_name).await;
        let store =
            Arc::new(RwLock::new(PostgresMemberStore::new(pg_pool)));

        Self { store, tmp_db_name }
    }
}

impl AsyncTestContext for TestStore {
    async fn setup() -> TestStore {
        TestStore::new().await
    }

    async fn teardown(self) {
        delete_database(&self.tmp_db_name).await;
    }
}

pub fn get_random_email() -> Email {
    Email::parse(Secret::new(format!("{}@example.com", Uuid::new_v4())))
        .expect("Failed to parse email")
}

pub fn new_member(email: Email, name: &str, password: &str) -> Member {
    // TIMESTAMPTZ keeps microseconds; truncate so round-trip comparisons
    // see exactly what the store can give back.
    Member::new(
        email,
        Password::new(Secret::new(password.to_string())),
        name.to_string(),
        Utc::now().trunc_subsecs(6),
    )
}

async fn configure_postgresql(db_name: &str) -> PgPool {
    let postgresql_conn_url = DATABASE_URL.to_owned();

    configure_database(&postgresql_conn_url, db_name).await;

    let postgresql_conn_url_with_db = Secret::new(format!(
        "{}/{}",
        postgresql_conn_url.expose_secret(),
        db_name
    ));

    // Create a new connection pool and return it
    get_postgres_pool(&postgresql_conn_url_with_db)
        .await
        .expect("Failed to create Postgres connection pool!")
}

async fn configure_database(db_conn_string: &Secret<String>, db_name: &str) {
    // Create database connection
    let connection = PgPoolOptions::new()
        .connect(db_conn_string.expose_secret())
        .await
        .expect("Failed to create Postgres connection pool.");

    // Create a new database
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Connect to new database
    let db_conn_string =
        format!("{}/{}", db_conn_string.expose_secret(), db_name);

    let connection = PgPoolOptions::new()
        .connect(&db_conn_string)
        .await
        .expect("Failed to create Postgres connection pool.");

    // Run migrations against new database
    sqlx::migrate!()
        .run(&connection)
        .await
        .expect("Failed to migrate the database");
}

async fn delete_database(db_name: &str) {
    let postgresql_conn_url: String = DATABASE_URL.expose_secret().to_owned();

    let connection_options = PgConnectOptions::from_str(&postgresql_conn_url)
        .expect("Failed to parse PostgreSQL connection string");

    let mut connection = PgConnection::connect_with(&connection_options)
        .await
        .expect("Failed to connect to Postgres");

    // Kill any active connections to the database
    connection
        .execute(
            format!(
                r#"
                SELECT pg_terminate_backend(pg_stat_activity.pid)
                FROM pg_stat_activity
                WHERE pg_stat_activity.datname = '{}'
                  AND pid <> pg_backend_pid();
        "#,
                db_name
            )
            .as_str(),
        )
        .await
        .expect("Failed to drop the database.");

    // Drop the database
    connection
        .execute(format!(r#"DROP DATABASE "{}";"#, db_name).as_str())
        .await
        .expect("Failed to drop the database.");
}
