use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::collaborators::WorkflowInvoker;
use crate::constants::request_keys;
use crate::error::{
    transition_not_permitted, PublicationError, Result, TransitionError, TransitionResult,
};
use crate::hints::{HintsGate, HintsMap, Visibility};
use crate::models::{DocumentId, Request, RequestId, RequestState, RequestType};

/// Transitions available on a listed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestTransition {
    Accept,
    Reject,
    Cancel,
}

impl RequestTransition {
    pub const ALL: [RequestTransition; 3] = [Self::Accept, Self::Reject, Self::Cancel];

    /// Hint keys that gate this transition, long form first
    pub fn hint_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Accept => request_keys::ACCEPT,
            Self::Reject => request_keys::REJECT,
            Self::Cancel => request_keys::CANCEL,
        }
    }

    /// Label shown for this transition. Canceling a rejected request reads as "drop".
    pub fn label(&self, request: &Request) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Cancel if request.is_rejected() => "drop",
            Self::Cancel => "cancel",
        }
    }
}

impl fmt::Display for RequestTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => write!(f, "accept"),
            Self::Reject => write!(f, "reject"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

/// Read-only projection of a document's requests plus gated transitions on them.
///
/// The ledger never creates requests and never mutates them itself; every transition is
/// checked against the request's hints and then delegated to the [`WorkflowInvoker`].
pub struct RequestLedger {
    invoker: Arc<dyn WorkflowInvoker>,
}

impl RequestLedger {
    pub fn new(invoker: Arc<dyn WorkflowInvoker>) -> Self {
        Self { invoker }
    }

    /// All requests listed under the document's `requests` hint
    pub fn list(hints: &HintsMap) -> Vec<Request> {
        hints
            .requests()
            .map(|(id, nested)| request_from_hints(id, nested))
            .collect()
    }

    pub fn find(hints: &HintsMap, id: &RequestId) -> Option<Request> {
        hints
            .requests()
            .find(|(candidate, _)| candidate == id)
            .map(|(id, nested)| request_from_hints(id, nested))
    }

    /// Reason recorded when the request was rejected
    pub fn reason(hints: &HintsMap, id: &RequestId) -> Option<String> {
        Self::find(hints, id).and_then(|request| request.reason)
    }

    pub fn gate(request: &Request, transition: RequestTransition) -> Visibility {
        HintsGate::resolve_any(&request.hints, transition.hint_keys())
    }

    /// Transitions currently permitted on the request
    pub fn available_transitions(request: &Request) -> Vec<RequestTransition> {
        RequestTransition::ALL
            .into_iter()
            .filter(|transition| Self::gate(request, *transition).is_enabled())
            .collect()
    }

    pub fn check(request: &Request, transition: RequestTransition) -> TransitionResult<()> {
        if Self::gate(request, transition).is_enabled() {
            Ok(())
        } else {
            Err(transition_not_permitted(
                transition.label(request),
                format!("request {} ({})", request.id, request.state),
            ))
        }
    }

    pub async fn accept(
        &self,
        document: &DocumentId,
        hints: &HintsMap,
        id: &RequestId,
    ) -> Result<()> {
        let request = Self::require(hints, id)?;
        Self::check(&request, RequestTransition::Accept)?;

        self.invoker.accept_request(document, id).await?;
        info!(document_id = %document, request_id = %id, "Accepted workflow request");
        Ok(())
    }

    pub async fn reject(
        &self,
        document: &DocumentId,
        hints: &HintsMap,
        id: &RequestId,
        reason: &str,
    ) -> Result<()> {
        let request = Self::require(hints, id)?;
        if reason.trim().is_empty() {
            return Err(TransitionError::MissingReason {
                request_id: id.clone(),
            }
            .into());
        }
        Self::check(&request, RequestTransition::Reject)?;

        self.invoker.reject_request(document, id, reason).await?;
        info!(
            document_id = %document,
            request_id = %id,
            reason = %reason,
            "Rejected workflow request"
        );
        Ok(())
    }

    pub async fn cancel(
        &self,
        document: &DocumentId,
        hints: &HintsMap,
        id: &RequestId,
    ) -> Result<()> {
        let request = Self::require(hints, id)?;
        Self::check(&request, RequestTransition::Cancel)?;

        self.invoker.cancel_request(document, id).await?;
        info!(
            document_id = %document,
            request_id = %id,
            transition = RequestTransition::Cancel.label(&request),
            "Canceled workflow request"
        );
        Ok(())
    }

    fn require(hints: &HintsMap, id: &RequestId) -> Result<Request> {
        Self::find(hints, id).ok_or_else(|| PublicationError::UnknownRequest {
            request_id: id.clone(),
        })
    }
}

fn request_from_hints(id: RequestId, hints: &HintsMap) -> Request {
    let request_type = hints
        .get_str(request_keys::TYPE)
        .map_or_else(|| RequestType::Unknown(String::new()), RequestType::parse);
    let state = hints
        .get_str(request_keys::STATE)
        .map_or(RequestState::Unknown, RequestState::parse);
    let schedule = hints.get_str(request_keys::SCHEDULE).and_then(parse_schedule);
    let reason = hints
        .get_str(request_keys::REASON)
        .filter(|reason| !reason.is_empty())
        .map(str::to_string);

    if state == RequestState::Unknown {
        debug!(request_id = %id, "Request state could not be classified");
    }

    Request {
        id,
        request_type,
        state,
        schedule,
        reason,
        hints: hints.clone(),
    }
}

fn parse_schedule(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}
