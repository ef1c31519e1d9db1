mod data_stores;
mod email;
mod error;
mod member;
mod member_id;
mod password;

pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use member::*;
pub use member_id::*;
pub use password::*;
