// 📤 Writer - LanguageRecords → data.json
// 4-space indent, non-ASCII written as-is.

use crate::config::JSON_INDENT;
use crate::error::SeedError;
use crate::record::LanguageRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn serialize_into<W: Write>(writer: W, records: &[LanguageRecord]) -> Result<(), SeedError> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}

fn into_utf8(buf: Vec<u8>) -> Result<String, SeedError> {
    Ok(String::from_utf8(buf)?)
}

/// Render records exactly as they are written to disk
pub fn to_json_string(records: &[LanguageRecord]) -> Result<String, SeedError> {
    let mut buf = Vec::new();
    serialize_into(&mut buf, records)?;
    into_utf8(buf)
}

/// Create or truncate `path` and write the JSON array to it
pub fn write_json(path: &Path, records: &[LanguageRecord]) -> Result<(), SeedError> {
    let write_err = |source| SeedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    serialize_into(&mut writer, records).map_err(|e| match e {
        // serde_json wraps io failures; report them as write errors
        SeedError::Serialize(inner) if inner.is_io() => SeedError::Write {
            path: path.to_path_buf(),
            source: inner.into(),
        },
        other => other,
    })?;

    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn german() -> LanguageRecord {
        LanguageRecord {
            native_name: "Deutsch".to_string(),
            name: "German".to_string(),
            code: "de".to_string(),
        }
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_pretty_layout() {
        let json = to_json_string(&[german()]).unwrap();
        let expected = "[\n    {\n        \"native_name\": \"Deutsch\",\n        \"name\": \"German\",\n        \"code\": \"de\"\n    }\n]";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_non_ascii_not_escaped() {
        let record = LanguageRecord {
            native_name: "日本語".to_string(),
            name: "Japanese".to_string(),
            code: "ja".to_string(),
        };
        let json = to_json_string(&[record]).unwrap();
        assert!(json.contains("\"native_name\": \"日本語\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let err = into_utf8(vec![b'[', 0xc3, b']']).unwrap_err();
        assert!(matches!(err, SeedError::Encoding(_)));
        assert_eq!(into_utf8(b"[]".to_vec()).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "stale content that is longer than the new output").unwrap();

        write_json(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_matches_string_render() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let records = vec![german(), german()];

        write_json(&path, &records).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            to_json_string(&records).unwrap()
        );
    }

    #[test]
    fn test_write_json_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("data.json");

        let err = write_json(&path, &[german()]).unwrap_err();
        assert!(matches!(err, SeedError::Write { .. }));
        assert!(!err.is_fatal());
    }
}
