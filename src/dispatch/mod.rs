//! Intent dispatch
//!
//! A [`Skill`] is a registry of intent handlers plus the fixed lifecycle
//! responses around them: the launch welcome, a fallback for unrecognized
//! intent names, and session teardown. Dispatch is a single synchronous
//! name lookup; every reachable path yields exactly one response.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::envelope::{
    EnvelopeError, RequestBody, RequestEnvelope, ResponseEnvelope, Session,
};
use crate::value_objects::{Intent, Response};

/// Spoken when no handler is registered for an intent name
///
/// Unrecognized intents are an expected condition: the host's language
/// model and this registry are configured independently, and a mismatch
/// must still answer the user.
const FALLBACK_SPEECH: &str = "I'm not sure how to help with that. What else can I help with?";
const FALLBACK_REPROMPT: &str = "What else can I help with?";

/// Handler for a single registered intent
pub trait IntentHandler: Send + Sync {
    /// Produce the response for one intent invocation
    fn handle(&self, intent: &Intent, session: &Session) -> Response;
}

impl<F> IntentHandler for F
where
    F: Fn(&Intent, &Session) -> Response + Send + Sync,
{
    fn handle(&self, intent: &Intent, session: &Session) -> Response {
        self(intent, session)
    }
}

/// A voice skill: registered intent handlers plus fixed lifecycle responses
///
/// Holds only immutable state after construction, so a single instance can
/// serve concurrent requests without coordination.
pub struct Skill {
    application_id: Option<String>,
    welcome: Response,
    fallback: Box<dyn IntentHandler>,
    handlers: HashMap<String, Box<dyn IntentHandler>>,
}

impl Skill {
    /// Create a skill with the given welcome speech and reprompt
    ///
    /// The welcome is always an [`Response::Ask`]: launching a session
    /// opens the interaction and waits for a command.
    pub fn new(welcome_speech: impl Into<String>, welcome_reprompt: impl Into<String>) -> Self {
        Self {
            application_id: None,
            welcome: Response::ask(welcome_speech, welcome_reprompt),
            fallback: Box::new(|_: &Intent, _: &Session| {
                Response::ask(FALLBACK_SPEECH, FALLBACK_REPROMPT)
            }),
            handlers: HashMap::new(),
        }
    }

    /// Restrict the skill to envelopes addressed to one application id
    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    /// Replace the unrecognized-intent fallback
    pub fn with_fallback(mut self, handler: impl IntentHandler + 'static) -> Self {
        self.fallback = Box::new(handler);
        self
    }

    /// Register a handler for an intent name; the last registration wins
    pub fn register(&mut self, name: impl Into<String>, handler: impl IntentHandler + 'static) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Whether a handler is registered for an intent name
    pub fn recognizes(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// The fixed welcome for a newly launched session
    pub fn launch(&self, _session: &Session) -> Response {
        self.welcome.clone()
    }

    /// Route one intent to its handler, or to the fallback for unknown names
    pub fn dispatch(&self, intent: &Intent, session: &Session) -> Response {
        match self.handlers.get(intent.name.as_str()) {
            Some(handler) => {
                debug!(intent = %intent.name, "dispatching intent");
                handler.handle(intent, session)
            }
            None => {
                warn!(intent = %intent.name, "no handler registered, answering with fallback");
                self.fallback.handle(intent, session)
            }
        }
    }

    /// Handle one decoded envelope end to end
    ///
    /// Launch requests get the welcome, intent requests are dispatched, and
    /// session-ended requests produce no response envelope. When an
    /// application id is configured, envelopes addressed elsewhere are
    /// rejected before any handler runs.
    pub fn execute(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<Option<ResponseEnvelope>, EnvelopeError> {
        if let Some(expected) = &self.application_id {
            let actual = envelope.session.application_id();
            if actual != Some(expected.as_str()) {
                return Err(EnvelopeError::ApplicationIdMismatch {
                    expected: expected.clone(),
                    actual: actual.unwrap_or_default().to_string(),
                });
            }
        }

        if envelope.session.new {
            debug!(session = %envelope.session.session_id, "session started");
        }

        let response = match &envelope.request {
            RequestBody::Launch { .. } => self.launch(&envelope.session),
            RequestBody::Intent { intent, .. } => self.dispatch(intent, &envelope.session),
            RequestBody::SessionEnded { reason, .. } => {
                debug!(session = %envelope.session.session_id, ?reason, "session ended");
                return Ok(None);
            }
        };

        Ok(Some(ResponseEnvelope::wrap(response, &envelope.session)))
    }

    /// Decode one request from JSON, execute it, and encode the reply
    pub fn execute_json(&self, json: &str) -> Result<Option<String>, EnvelopeError> {
        let envelope: RequestEnvelope = serde_json::from_str(json)?;
        match self.execute(&envelope)? {
            Some(reply) => Ok(Some(serde_json::to_string(&reply)?)),
            None => Ok(None),
        }
    }
}
