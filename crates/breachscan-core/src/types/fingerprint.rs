//! Input file fingerprints for report provenance.

use serde::{Deserialize, Serialize};

/// Identity of an input file at the time it was read.
///
/// Reports embed these so a reader can tell which inputs produced a
/// given set of numbers. The hash is xxh3-64 of the raw bytes,
/// rendered as 16 lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFingerprint {
    pub path: String,
    pub xxh3: String,
    pub bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_shape() {
        let fp = InputFingerprint {
            path: "data/breaches.csv".into(),
            xxh3: "0011223344556677".into(),
            bytes: 4096,
        };
        let json = serde_json::to_value(&fp).unwrap();
        assert_eq!(json["path"], "data/breaches.csv");
        assert_eq!(json["xxh3"], "0011223344556677");
        assert_eq!(json["bytes"], 4096);
    }
}
