mod helpers;
mod password_change;
