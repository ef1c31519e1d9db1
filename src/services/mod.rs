pub mod data_stores;
pub mod password_change;
