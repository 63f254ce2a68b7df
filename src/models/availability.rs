use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Upstream availability shape: day -> time -> advisor id.
///
/// Advisor ids arrive as JSON strings or numbers depending on the feed; both
/// are kept as raw values and compared by string form. Nothing beyond this
/// two-level shape is validated.
pub type RawAvailability = HashMap<String, HashMap<String, Value>>;

/// One advisor's remaining open slots.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorAvailability {
    pub advisor_id: String,
    pub times: Vec<String>,
}

/// String form of an advisor id value. `"36232"` and `36232` both map to
/// `36232`.
pub fn advisor_id_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
