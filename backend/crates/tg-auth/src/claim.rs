use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single typed assertion from the client principal's `claims` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "typ")]
    pub claim_type: String,
    #[serde(rename = "val")]
    pub value: String,
}

impl Claim {
    pub fn new<T: Into<String>, V: Into<String>>(claim_type: T, value: V) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }

    /// Read a claim from one `claims` entry.
    ///
    /// Returns `None` unless the entry is an object with string `typ` and `val` fields.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let claim_type = entry.get("typ")?.as_str()?;
        let value = entry.get("val")?.as_str()?;
        Some(Self::new(claim_type, value))
    }

    pub fn is_type(&self, claim_type: &str) -> bool {
        self.claim_type == claim_type
    }
}
