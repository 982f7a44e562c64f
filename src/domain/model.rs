use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::utils::error::ShippingError;

/// Unique identifier of a shipping request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        RequestId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        RequestId(id.to_string())
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> Self {
        RequestId(id)
    }
}

/// Unique identifier of a shipping status event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StatusId(String);

impl StatusId {
    pub fn new(id: impl Into<String>) -> Self {
        StatusId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StatusId {
    fn from(id: &str) -> Self {
        StatusId(id.to_string())
    }
}

impl From<String> for StatusId {
    fn from(id: String) -> Self {
        StatusId(id)
    }
}

/// The closed set of labels a status event may carry.
///
/// Text enters the system only through [`FromStr`], which trims and
/// lowercases before matching; anything outside the set is rejected with
/// [`ShippingError::NotValidStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    InTransit,
    OnHold,
    Delivered,
    Returned,
}

impl StatusLabel {
    /// Canonical text form of the label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::InTransit => "in transit",
            StatusLabel::OnHold => "on hold",
            StatusLabel::Delivered => "delivered",
            StatusLabel::Returned => "returned",
        }
    }

    /// Every allowed label, in lifecycle order.
    pub const fn all() -> [StatusLabel; 4] {
        [
            StatusLabel::InTransit,
            StatusLabel::OnHold,
            StatusLabel::Delivered,
            StatusLabel::Returned,
        ]
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusLabel {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "in transit" => Ok(StatusLabel::InTransit),
            "on hold" => Ok(StatusLabel::OnHold),
            "delivered" => Ok(StatusLabel::Delivered),
            "returned" => Ok(StatusLabel::Returned),
            _ => Err(ShippingError::NotValidStatus {
                label: s.trim().to_string(),
            }),
        }
    }
}

impl Serialize for StatusLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A registered request to ship goods between a sender and a receiver.
///
/// Only the status list ever changes after registration, and only by
/// appending through [`ShippingRequest::add_status`].
#[derive(Debug, Clone, Serialize)]
pub struct ShippingRequest {
    pub id: RequestId,
    pub sender: String,
    pub receiver: String,
    pub location: String,
    pub cost: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    pub registration_moment: DateTime<Utc>,
    pub statuses: Vec<ShippingStatus>,
}

impl ShippingRequest {
    /// Appends a status event to the tracking history.
    ///
    /// Attachment is the caller's job; the service never does it.
    pub fn add_status(&mut self, status: ShippingStatus) {
        self.statuses.push(status);
    }

    /// Latest recorded status event, if any.
    pub fn last_status(&self) -> Option<&ShippingStatus> {
        self.statuses.last()
    }
}

/// A timestamped status event for a shipment at a location.
///
/// `request_id` is a lookup key, not an ownership edge: the event is valid
/// whether or not the caller ever attaches it to a request.
#[derive(Debug, Clone, Serialize)]
pub struct ShippingStatus {
    pub id: StatusId,
    pub request_id: RequestId,
    pub location: String,
    pub label: StatusLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    pub moment: DateTime<Utc>,
}
