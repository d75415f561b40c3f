//! Core types for report-fetch

use crate::error::Error;
use uuid::Uuid;

/// Account credentials sent with every request
///
/// Supplied once per run and never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user_key: String,
    password: String,
}

impl Credentials {
    /// Create credentials from a user key and password
    pub fn new(user_key: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_key: user_key.into(),
            password: password.into(),
        }
    }

    /// The user identifier
    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    /// The password
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_key", &self.user_key)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identifier of a usage report on the remote service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReportId(Uuid);

impl ReportId {
    /// Wrap an existing UUID
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    pub fn get(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ReportId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ReportId> for Uuid {
    fn from(id: ReportId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ReportId {
    /// Canonical hyphenated lowercase form, as the service expects
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for ReportId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| Error::InvalidReportId {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}
