//! Domain types for breachscan.
//! Categories, flag vectors, severity bands, records, and label vectors.

pub mod category;
pub mod classification;
pub mod collections;
pub mod fingerprint;
pub mod flags;
pub mod market;
pub mod record;
pub mod severity;

pub use category::BreachCategory;
pub use classification::{Classification, MatchedKeyword};
pub use collections::{FxHashMap, FxHashSet};
pub use fingerprint::InputFingerprint;
pub use flags::CategoryFlags;
pub use market::MarketRow;
pub use record::{BreachRecord, ManualLabels};
pub use severity::Severity;
