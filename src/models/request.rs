use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RequestId;
use crate::hints::HintsMap;

/// What a pending request asks for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Publish,
    Depublish,
    Delete,
    ScheduledPublish,
    ScheduledDepublish,
    Unknown(String),
}

impl RequestType {
    pub fn parse(value: &str) -> Self {
        match value {
            "publish" => Self::Publish,
            "depublish" => Self::Depublish,
            "delete" => Self::Delete,
            "scheduledpublish" => Self::ScheduledPublish,
            "scheduleddepublish" => Self::ScheduledDepublish,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::ScheduledPublish | Self::ScheduledDepublish)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Publish => write!(f, "publish"),
            Self::Depublish => write!(f, "depublish"),
            Self::Delete => write!(f, "delete"),
            Self::ScheduledPublish => write!(f, "scheduledpublish"),
            Self::ScheduledDepublish => write!(f, "scheduleddepublish"),
            Self::Unknown(value) => write!(f, "{value}"),
        }
    }
}

/// Lifecycle position of a request. Accepted and canceled requests leave the ledger,
/// so they have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    Pending,
    Scheduled,
    Rejected,
    Unknown,
}

impl RequestState {
    pub fn parse(value: &str) -> Self {
        match value {
            "request" | "pending" => Self::Pending,
            "scheduled" => Self::Scheduled,
            "rejected" => Self::Rejected,
            _ => Self::Unknown,
        }
    }

    /// Whether the request still holds up direct publication of the document
    pub fn is_in_flight(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::Rejected => write!(f, "rejected"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A pending workflow request attached to a handle
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: RequestId,
    pub request_type: RequestType,
    pub state: RequestState,
    pub schedule: Option<DateTime<Utc>>,
    /// Present once the request has been rejected
    pub reason: Option<String>,
    /// The request's own hints, which gate accept/reject/cancel
    pub hints: HintsMap,
}

impl Request {
    pub fn is_rejected(&self) -> bool {
        self.state == RequestState::Rejected
    }
}
