//! The `package.json` written at the project root.

use serde::Serialize;

/// Version every freshly bootstrapped project starts at.
pub const INITIAL_VERSION: &str = "0.1.0";

/// File name of the manifest inside the project root.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Platform line ending appended after the JSON body.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Minimal project manifest.
///
/// Field order is the serialization order: `name`, `version`, `private`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectManifest {
    pub name: String,
    pub version: &'static str,
    pub private: bool,
}

impl ProjectManifest {
    /// A private manifest at [`INITIAL_VERSION`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: INITIAL_VERSION,
            private: true,
        }
    }

    /// Render as 2-space indented JSON followed by the platform line ending.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let mut body = serde_json::to_string_pretty(self)?;
        body.push_str(LINE_ENDING);
        Ok(body)
    }
}
