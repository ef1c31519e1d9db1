use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref DATABASE_URL: Secret<String> = get_db_url();
}

fn load_env() {
    dotenv().ok();
}

fn get_db_url() -> Secret<String> {
    load_env();
    let db_url = std_env::var(env::DATABASE_URL_ENV_VAR)
        .expect("DATABASE_URL must be set.");
    if db_url.is_empty() {
        panic!("DATABASE_URL must not be empty.");
    }
    Secret::new(db_url)
}

pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}
