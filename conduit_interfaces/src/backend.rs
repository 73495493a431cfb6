//! Security backends and policy snippets.
//!
//! This module enumerates the policy systems an interface may contribute
//! security rules to, and defines the opaque snippet payload carrying those
//! rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A target security policy system.
///
/// The set is closed and shared with the connection manager: adding a
/// backend means adding a variant here. Backends evolve independently of
/// interface implementations, so a backend unknown to this build can still
/// be carried as an opaque [`SecurityBackend::Custom`] token; interfaces
/// answer tokens they do not recognize with "no snippet", never with an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityBackend {
    /// Application confinement profiles.
    AppArmor,

    /// System call filters.
    Seccomp,

    /// Message bus access policy.
    DBus,

    /// Device access tagging rules.
    Udev,

    /// A backend this build does not know about, carried as an opaque token.
    Custom(String),
}

impl SecurityBackend {
    /// The canonical token naming this backend.
    pub fn name(&self) -> &str {
        match self {
            Self::AppArmor => "apparmor",
            Self::Seccomp => "seccomp",
            Self::DBus => "dbus",
            Self::Udev => "udev",
            Self::Custom(token) => token,
        }
    }
}

impl fmt::Display for SecurityBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An opaque fragment of backend-specific security policy.
///
/// A snippet is newly allocated for each call that produces one and is owned
/// by the caller, which merges it into the backend's rule set for the
/// receiving package. Absence of a contribution is expressed as
/// `Option<Snippet>`, not as an empty snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet(Vec<u8>);

impl Snippet {
    /// Create a snippet from raw policy bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw policy bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the snippet, yielding the raw policy bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for Snippet {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Snippet {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_tokens() {
        assert_eq!(SecurityBackend::AppArmor.name(), "apparmor");
        assert_eq!(SecurityBackend::Seccomp.name(), "seccomp");
        assert_eq!(SecurityBackend::DBus.name(), "dbus");
        assert_eq!(SecurityBackend::Udev.name(), "udev");
        assert_eq!(SecurityBackend::Custom("foo".into()).name(), "foo");

        // Display follows the canonical token
        assert_eq!(SecurityBackend::AppArmor.to_string(), "apparmor");
        assert_eq!(SecurityBackend::Custom("foo".into()).to_string(), "foo");
    }

    #[test]
    fn test_snippet_ownership() {
        let snippet = Snippet::from("deny network,");
        assert_eq!(snippet.as_bytes(), b"deny network,");
        assert_eq!(snippet.into_bytes(), b"deny network,".to_vec());
    }
}
