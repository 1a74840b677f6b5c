/*!
 * Record
 * The value type mass-allocated by the reporter
 */

use serde::{Deserialize, Serialize};

/// Minimal record with an identifier and a numeric payload
///
/// Records are only ever default-initialized; what matters is the shallow
/// size of the struct, not the heap behind its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<f64>,
}

impl Record {
    /// Shallow size of one record in bytes
    pub const SIZE: usize = std::mem::size_of::<Record>();

    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.payload.is_empty()
    }
}
