// Staff directory models
// Contact records for the people coordinating portal events

use serde::{Deserialize, Serialize};

/// A staff member in the event coordination directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub department: String,
    pub phone: String,
    pub email: String,
}

/// The university's own contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}
