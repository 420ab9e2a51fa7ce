//!
//! Source-control metadata attached to a sample.
//!

use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;
use serde::Serialize;

///
/// A git identity as the CI pipeline reports it.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitUser {
    /// Display name.
    pub name: String,
    /// Forge account name.
    pub username: String,
    /// E-mail address, omitted from the data file when unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

///
/// Source-control metadata attached to a sample.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit author.
    pub author: GitUser,
    /// Commit committer.
    pub committer: GitUser,
    /// Revision identifier.
    pub id: String,
    /// Commit message.
    pub message: String,
    /// Commit timestamp as an RFC 3339 datetime.
    pub timestamp: DateTime<FixedOffset>,
    /// URL of the commit on the forge.
    pub url: String,
}

impl Commit {
    /// Length of the abbreviated revision identifier.
    pub const SHORT_ID_LENGTH: usize = 7;

    ///
    /// Returns the abbreviated revision identifier used in reports.
    ///
    pub fn short_id(&self) -> &str {
        self.id
            .get(..Self::SHORT_ID_LENGTH)
            .unwrap_or(self.id.as_str())
    }
}
