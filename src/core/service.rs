use crate::adapters::{SerialIdGenerator, SystemClock};
use crate::domain::model::{RequestId, ShippingRequest, ShippingStatus, StatusLabel};
use crate::domain::ports::{Clock, IdGenerator};
use crate::utils::error::Result;
use crate::utils::validation::{
    normalize_optional_text, validate_non_negative, validate_required_text,
};

/// Caller-built parameter bundle for registering a shipping request.
///
/// Mandatory fields are `Option` on purpose: absence is an input the service
/// must reject, not a shape the caller is prevented from building.
#[derive(Debug, Clone, Default)]
pub struct SendingRequestParams {
    pub receiver: Option<String>,
    pub sender: Option<String>,
    pub location: Option<String>,
    pub cost: i64,
    pub observation: Option<String>,
}

/// Validates registration input and constructs shipping entities.
///
/// Generic over the id and clock ports so tests can pin both; the service
/// itself holds no other state and never stores or looks up requests.
pub struct ShippingService<G: IdGenerator, C: Clock> {
    ids: G,
    clock: C,
}

impl<G: IdGenerator, C: Clock> ShippingService<G, C> {
    pub fn new(ids: G, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Registers a new shipping request.
    ///
    /// Receiver, sender and location are mandatory non-blank text; cost must
    /// not be negative. Checked in that order, each failure naming its field.
    pub fn register_request(&self, params: SendingRequestParams) -> Result<ShippingRequest> {
        let receiver = validate_required_text("Receiver", params.receiver.as_deref())?;
        let sender = validate_required_text("Sender", params.sender.as_deref())?;
        let location = validate_required_text("Location", params.location.as_deref())?;
        let cost = validate_non_negative("Cost", params.cost)?;

        let id = self.ids.request_id(sender);
        let registration_moment = self.clock.now();
        tracing::debug!("Registered shipping request {} from {}", id, sender);

        Ok(ShippingRequest {
            id,
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            location: location.to_string(),
            cost,
            observation: normalize_optional_text(params.observation.as_deref()),
            registration_moment,
            statuses: Vec::new(),
        })
    }

    /// Records a status event for a request.
    ///
    /// All three of RequestId, Location and Status are checked for presence
    /// before the label is matched against the allowed set, so a missing
    /// field is reported even when the label is also invalid. The request id
    /// is a lookup key only; no existence check is performed. The returned
    /// status is not attached to anything: appending it to the request's
    /// history is the caller's job.
    pub fn register_status(
        &self,
        request_id: Option<&str>,
        location: Option<&str>,
        status_label: Option<&str>,
        observation: Option<&str>,
    ) -> Result<ShippingStatus> {
        let request_id = validate_required_text("RequestId", request_id)?;
        let location = validate_required_text("Location", location)?;
        let label_text = validate_required_text("Status", status_label)?;
        let label: StatusLabel = label_text.parse()?;

        let id = self.ids.status_id();
        let moment = self.clock.now();
        tracing::debug!("Recorded status '{}' for request {}", label, request_id);

        Ok(ShippingStatus {
            id,
            request_id: RequestId::from(request_id),
            location: location.to_string(),
            label,
            observation: normalize_optional_text(observation),
            moment,
        })
    }
}

impl Default for ShippingService<SerialIdGenerator, SystemClock> {
    /// Production wiring: serial ids and the system clock.
    fn default() -> Self {
        Self::new(SerialIdGenerator::new(), SystemClock)
    }
}
