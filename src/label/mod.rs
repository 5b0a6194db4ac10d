//! Label lookup records.

/// Seed file loading
mod loader;

pub use loader::{
    LabelError,
    load_labels,
};

use serde::{
    Deserialize,
    Serialize,
};

/// One labeled lookup record.
///
/// The generator never inspects these fields itself; callers register
/// projections picking the key and the per-locale display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Stable identifier; used as the key of every projected line.
    pub label_id: String,
    /// Korean display name.
    pub label_kr_nm: String,
    /// English display name.
    pub label_eng_nm: String,
}
