use super::ValidationError;
use secrecy::{ExposeSecret, Secret};

use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Hash for Email {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

impl Eq for Email {}

impl Email {
    /*
     * The store keys lookups and updates on the email, so the only
     * invariant enforced here is that it is non-empty. Format
     * validation belongs to whatever collects the address.
     */
    pub fn parse(s: Secret<String>) -> Result<Self, ValidationError> {
        if s.expose_secret().is_empty() {
            return Err(ValidationError::new(
                "Email cannot be empty".to_string(),
            ));
        }

        Ok(Self(s))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
