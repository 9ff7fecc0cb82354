//! Input fingerprinting for report provenance.

use std::fs;
use std::path::Path;

use tracing::debug;
use xxhash_rust::xxh3::xxh3_64;

use breachscan_core::errors::IngestError;
use breachscan_core::types::InputFingerprint;

/// Fingerprint one input file: xxh3-64 over the raw bytes, rendered as
/// 16 hex digits. Inputs are small enough to read whole.
pub fn fingerprint_file(path: &Path) -> Result<InputFingerprint, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let hash = xxh3_64(&bytes);
    debug!(
        bytes = bytes.len(),
        hash = format!("{hash:016x}"),
        "fingerprinted {}",
        path.display()
    );
    Ok(InputFingerprint {
        path: path.display().to_string(),
        xxh3: format!("{hash:016x}"),
        bytes: bytes.len() as u64,
    })
}
