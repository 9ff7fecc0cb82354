//! breachscan-data: file I/O for the breachscan pipeline.
//!
//! Reads breach disclosure, manual-label, and market CSVs into the core
//! domain types, accumulating per-row data-quality issues instead of
//! failing on dirty rows. Writes the augmented classification output
//! (CSV and JSON) and fingerprints every input for report provenance.

pub mod fingerprint;
pub mod ingest;
pub mod output;

pub use fingerprint::fingerprint_file;
pub use ingest::{read_breaches, read_labels, read_market};
pub use output::{
    read_classified, read_classified_csv, read_classified_json, write_classified_csv,
    write_classified_json, write_sample_csv,
};
