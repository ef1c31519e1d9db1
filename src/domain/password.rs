use secrecy::{ExposeSecret, Secret};

/// An opaque credential. The store persists it verbatim; hashing and
/// strength policy are the caller's concern.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Password {
    pub fn new(s: Secret<String>) -> Self {
        Self(s)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
