use chrono::{DateTime, Utc};

use crate::domain::model::{RequestId, StatusId};

/// Source of the current time for registration moments.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Generator of unique identifiers for registered entities.
///
/// Request ids may incorporate the sender; uniqueness across both kinds is
/// the implementation's responsibility.
pub trait IdGenerator: Send + Sync {
    fn request_id(&self, sender: &str) -> RequestId;
    fn status_id(&self) -> StatusId;
}
