// error.rs - Error types for the UCD loader.
//
// Only loader failures surface as errors. Everything else in the crate is
// recoverable by design: malformed UCD lines and unknown property values
// are skipped, and invalid UTF-8 in scanned text becomes
// receive_invalid_grapheme_cluster events. Scanning never fails.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for building a property table from a UCD data directory.
#[derive(Debug)]
pub enum UcdError {
    /// A required UCD file does not exist or could not be opened.
    MissingFile { path: PathBuf, source: io::Error },
    /// A UCD file was opened but reading its contents failed.
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for UcdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UcdError::MissingFile { path, .. } => {
                write!(f, "missing UCD file: {}", path.display())
            }
            UcdError::Read { path, .. } => {
                write!(f, "failed to read UCD file: {}", path.display())
            }
        }
    }
}

impl std::error::Error for UcdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UcdError::MissingFile { source, .. } | UcdError::Read { source, .. } => Some(source),
        }
    }
}

impl UcdError {
    /// The path of the file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            UcdError::MissingFile { path, .. } | UcdError::Read { path, .. } => path,
        }
    }
}
