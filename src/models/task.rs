use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub priority: TaskPriority,
    pub assigned_to: String,
    pub completed: bool,
    /// Loose reference to a contact or deal id; not validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_to: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
