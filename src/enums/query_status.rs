use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryStatus {
    /// The query is disabled and will not fetch.
    Idle,
    Pending,
    Success,
    Error,
}
