use tracing::{debug, warn};

use crate::{
    apply_outcome, HaskerError, InFlight, MessageConfig, Result, Ticket, VoteConfig, VoteOutcome,
    VoteRequest, VoteView,
};

/// How a completed vote ended.
#[derive(Debug)]
pub enum Completion {
    /// The page now shows the server's state for the entity.
    Applied(VoteOutcome),
    /// The server answered `error`.
    Rejected,
    /// The request or its reply was unusable.
    Failed(HaskerError),
    /// A newer vote on the same entity superseded this one.
    Stale,
}

impl Completion {
    /// Text to show the user, if this completion needs one.
    pub fn notice<'a>(&self, messages: &'a MessageConfig) -> Option<&'a str> {
        match self {
            Completion::Applied(_) | Completion::Stale => None,
            Completion::Rejected => Some(messages.rejected.as_str()),
            Completion::Failed(e) if e.is_transport() => Some(messages.transport.as_str()),
            Completion::Failed(_) => Some(messages.rejected.as_str()),
        }
    }
}

/// Owns the page view and the in-flight bookkeeping for every vote control.
///
/// The controller never shows notices itself; callers take them from
/// [`Completion::notice`] once they no longer hold the controller.
pub struct VoteController<V: VoteView> {
    view: V,
    config: VoteConfig,
    in_flight: InFlight,
}

impl<V: VoteView> VoteController<V> {
    pub fn new(view: V, config: VoteConfig) -> Self {
        Self {
            view,
            config,
            in_flight: InFlight::new(),
        }
    }

    pub fn config(&self) -> &VoteConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn pending(&self) -> usize {
        self.in_flight.pending()
    }

    /// Register a click. The returned ticket must be passed back to
    /// [`complete`](Self::complete) with the transport reply.
    pub fn begin(&mut self, request: VoteRequest) -> Ticket {
        let ticket = self.in_flight.begin(request);
        debug!(
            entity = %ticket.request().key,
            direction = %ticket.request().direction,
            generation = ticket.generation(),
            "Vote started"
        );
        ticket
    }

    /// Handle the reply body (or transport failure) for a ticket.
    pub fn complete(&mut self, ticket: Ticket, reply: Result<String>) -> Completion {
        if !self.in_flight.settle(&ticket) {
            debug!(
                entity = %ticket.request().key,
                generation = ticket.generation(),
                "Dropping superseded vote reply"
            );
            return Completion::Stale;
        }

        let request = ticket.request();
        let outcome = match reply.and_then(|body| VoteOutcome::parse(&body)) {
            Ok(outcome) => outcome,
            Err(e) => return failed(request, e),
        };

        if outcome == VoteOutcome::Error {
            warn!(entity = %request.key, direction = %request.direction, "Vote rejected by server");
            return Completion::Rejected;
        }

        match apply_outcome(&self.view, request, &outcome) {
            Ok(()) => Completion::Applied(outcome),
            Err(e) => failed(request, e),
        }
    }
}

fn failed(request: &VoteRequest, error: HaskerError) -> Completion {
    warn!(entity = %request.key, direction = %request.direction, "Vote failed: {}", error);
    Completion::Failed(error)
}
