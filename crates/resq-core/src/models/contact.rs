use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An authority responder reachable from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthorityContact {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub department: String,
    pub is_active: bool,
}
