use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lead submission record, built once at submit time and immutable after.
///
/// `name` and `email` are required by the relay; `totalCost` carries the
/// estimate at submission time (or null if never computed) and `source`
/// identifies the originating tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(rename = "totalCost", default)]
    pub total_cost: Option<f64>,

    #[serde(default)]
    pub source: Option<String>,
}

/// Response sent back to the submitting client.
#[derive(Debug, Serialize, Deserialize)]
pub struct LeadResponse {
    pub success: bool,
    pub message: String,
}

/// GHL contact create/update response. Only the contact id is of interest;
/// everything else is kept raw.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactUpsertResponse {
    #[serde(default)]
    pub contact: Option<ContactStub>,

    /// Raw data for any additional fields
    #[serde(flatten)]
    pub raw: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactStub {
    /// Contact identifier; GHL may omit it.
    #[serde(default)]
    pub id: Option<String>,

    /// Raw contact data
    #[serde(flatten)]
    pub raw: Value,
}

impl ContactUpsertResponse {
    /// Contact id, when the CRM returned one.
    pub fn contact_id(self) -> Option<String> {
        self.contact.and_then(|c| c.id)
    }
}
