// ❗ Errors - Failure kinds of the conversion
// Read failures are fatal; write-side failures are reported.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    /// Input file missing, unreadable, or not valid UTF-8
    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created, written, or flushed
    #[error("Error saving file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error serializing records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Serialized output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl SeedError {
    /// Fatal errors stop the run before any output is produced
    pub fn is_fatal(&self) -> bool {
        matches!(self, SeedError::Read { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_is_fatal() {
        let err = SeedError::Read {
            path: PathBuf::from("seeding-data-input.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Error reading file seeding-data-input.txt: missing"
        );
    }

    #[test]
    fn test_write_error_is_reported() {
        let err = SeedError::Write {
            path: PathBuf::from("data.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "Error saving file data.json: denied");
    }

    #[test]
    fn test_encoding_error_is_reported() {
        let err = SeedError::from(String::from_utf8(vec![0xff]).unwrap_err());
        assert!(!err.is_fatal());
        assert!(err.to_string().starts_with("Serialized output is not valid UTF-8"));
    }
}
