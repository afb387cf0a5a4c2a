use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub status: ContactStatus,
    pub last_contact: NaiveDate,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Lifecycle labels for a contact. The dashboard and list views only
/// surface the first four; the rest exist for imported data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContactStatus {
    New,
    Active,
    Negotiation,
    Inactive,
    Pending,
    Qualified,
    Won,
    Lost,
}

impl Record for Contact {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
