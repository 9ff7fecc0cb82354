//! Ingestion configuration: CSV column mapping and date parsing.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATE_FORMAT, DEFAULT_DESCRIPTION_COLUMN, DEFAULT_DISCLOSED_COLUMN,
    DEFAULT_DISCOVERED_COLUMN, DEFAULT_FIRM_COLUMN, DEFAULT_ID_COLUMN, DEFAULT_RECORDS_COLUMN,
};

/// Configuration for the breach CSV reader.
///
/// Column names map source headers onto `BreachRecord` fields. Only the
/// id column is required to exist in the file; the others degrade to
/// `None` when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IngestConfig {
    /// Column holding the stable row id. Default: "id".
    pub id_column: Option<String>,
    /// Column holding the firm ticker. Default: "ticker".
    pub firm_column: Option<String>,
    /// Column holding the disclosure date. Default: "disclosure_date".
    pub disclosed_column: Option<String>,
    /// Column holding the discovery date. Default: "discovery_date".
    pub discovered_column: Option<String>,
    /// Column holding the free-text description. Default: "description".
    pub description_column: Option<String>,
    /// Column holding the affected-record count. Default: "records_affected".
    pub records_column: Option<String>,
    /// strftime format for date columns. Default: "%Y-%m-%d".
    pub date_format: Option<String>,
}

impl IngestConfig {
    pub fn effective_id_column(&self) -> &str {
        self.id_column.as_deref().unwrap_or(DEFAULT_ID_COLUMN)
    }

    pub fn effective_firm_column(&self) -> &str {
        self.firm_column.as_deref().unwrap_or(DEFAULT_FIRM_COLUMN)
    }

    pub fn effective_disclosed_column(&self) -> &str {
        self.disclosed_column.as_deref().unwrap_or(DEFAULT_DISCLOSED_COLUMN)
    }

    pub fn effective_discovered_column(&self) -> &str {
        self.discovered_column.as_deref().unwrap_or(DEFAULT_DISCOVERED_COLUMN)
    }

    pub fn effective_description_column(&self) -> &str {
        self.description_column.as_deref().unwrap_or(DEFAULT_DESCRIPTION_COLUMN)
    }

    pub fn effective_records_column(&self) -> &str {
        self.records_column.as_deref().unwrap_or(DEFAULT_RECORDS_COLUMN)
    }

    pub fn effective_date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }
}
