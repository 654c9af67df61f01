//! Shell script assembly and output.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::secrets::{ExposeSecret, SecretString};
use crate::error::{Error, Result};

/// Permissions for the generated script: owner rw, group/other r.
pub const SCRIPT_MODE: u32 = 0o644;

/// The export script being built for one run.
///
/// Values are inserted verbatim. A value containing quotes, `$` or a
/// newline produces a broken script; callers own that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    text: String,
}

impl Script {
    /// Start a script with `header` as its first line, then a blank line.
    pub fn new(header: &str) -> Self {
        Self {
            text: format!("{header}\n\n"),
        }
    }

    /// Append `export NAME=VALUE`.
    pub fn export(&mut self, name: &str, value: &SecretString) {
        self.text.push_str("export ");
        self.text.push_str(name);
        self.text.push('=');
        self.text.push_str(value.expose_secret());
        self.text.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Write the script to `path`, replacing any previous contents.
    ///
    /// # Errors
    /// Returns [`Error::Write`] if the file cannot be created or written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let write = || -> std::io::Result<()> {
            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(SCRIPT_MODE);
            }
            let mut file = options.open(path)?;
            file.write_all(self.text.as_bytes())?;
            file.flush()
        };

        write().map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = self.text.len(), "script written");
        Ok(())
    }
}
