//! File-backed account records.
//!
//! The generator writes a JSON array of `{privateKey, address, publicKey}`
//! records; the batch runner reads the same file back as its credential
//! source. Any read or parse failure is batch-fatal.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// One generated account as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub private_key: String,
    pub address: String,
    pub public_key: String,
}

/// Errors raised by the account store.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing list cannot be loaded or written.
    #[error("account list unavailable: {0}")]
    Unavailable(String),
}

/// Load the ordered account list from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<AccountRecord>, SourceError> {
    let content = fs::read_to_string(path)
        .map_err(|e| SourceError::Unavailable(format!("read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| SourceError::Unavailable(format!("parse {}: {}", path.display(), e)))
}

/// Persist account records as pretty-printed JSON.
pub fn save_records(path: &Path, records: &[AccountRecord]) -> Result<(), SourceError> {
    let content = serde_json::to_string_pretty(records)
        .map_err(|e| SourceError::Unavailable(format!("serialize: {}", e)))?;
    fs::write(path, content)
        .map_err(|e| SourceError::Unavailable(format!("write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), count = records.len(), "Account file saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<AccountRecord> {
        vec![AccountRecord {
            private_key: "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                .to_string(),
            address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
            public_key: "0x04...".to_string(),
        }]
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");

        let records = sample_records();
        save_records(&path, &records).unwrap();
        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_string(&sample_records()[0]).unwrap();
        assert!(json.contains("privateKey"));
        assert!(json.contains("publicKey"));
        assert!(json.contains("address"));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let result = load_records(Path::new("/nonexistent/accounts.json"));
        assert!(matches!(result, Err(SourceError::Unavailable(_))));
    }

    #[test]
    fn test_malformed_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        fs::write(&path, "{not json").unwrap();

        let result = load_records(&path);
        assert!(matches!(result, Err(SourceError::Unavailable(_))));
    }
}
