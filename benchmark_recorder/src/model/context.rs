//!
//! A commit context for sample assembly, passed by the CI pipeline.
//!

use std::path::PathBuf;

use crate::model::record::sample::commit::Commit;

///
/// A commit context for sample assembly, passed by the CI pipeline.
///
/// Every input report that produces a fresh sample is stamped with this
/// commit and date.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Context {
    /// The measured commit.
    pub commit: Commit,
    /// Sample date override as Unix-epoch milliseconds.
    /// Defaults to the commit timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<u64>,
}

impl Context {
    ///
    /// Reads the commit context from a JSON file and validates its
    /// correctness.
    ///
    /// # Errors
    ///
    /// 1. File cannot be read.
    /// 2. Deserialization from JSON file failed.
    /// 3. Context validation failed.
    ///
    pub fn try_from_path(path: PathBuf) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Commit context file {path:?} reading: {error}"))?;
        let context: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Commit context file {path:?} parsing: {error}"))?;
        context.validate()?;
        Ok(context)
    }

    ///
    /// Validates the context fields that the record cannot do without.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.commit.id.is_empty() {
            anyhow::bail!("Commit context: revision identifier is empty");
        }
        if self.commit.url.is_empty() {
            anyhow::bail!("Commit context: commit URL is empty");
        }
        Ok(())
    }

    ///
    /// The date the assembled sample is stamped with.
    ///
    pub fn date(&self) -> u64 {
        self.date
            .unwrap_or_else(|| self.commit.timestamp.timestamp_millis().max(0) as u64)
    }
}
