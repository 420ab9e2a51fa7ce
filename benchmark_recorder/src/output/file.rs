//!
//! Represents a single record output file in a set of many.
//!

use std::path::PathBuf;

///
/// Represents a single record output file in a set of many.
///
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct File {
    /// Path to this file relative to user-provided root.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl File {
    ///
    /// Create a new file instance from a path stem, an extension, and text
    /// content.
    ///
    pub fn new<S>(stem: S, extension: &str, content: String) -> Self
    where
        S: std::fmt::Display,
    {
        let path = format!("{stem}.{extension}").into();
        Self { path, content }
    }
}
