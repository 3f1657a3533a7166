//! Request and response envelopes exchanged with the hosting platform
//!
//! The host decodes speech into a JSON request envelope before this crate
//! sees it, and renders the JSON response envelope produced here. Only the
//! fields this skill reads are modeled; anything else the host sends is
//! ignored during decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::value_objects::{Card, Intent, OutputSpeech, Response};

/// Envelope format version emitted in every response
pub const ENVELOPE_VERSION: &str = "1.0";

/// Errors at the host boundary
///
/// Nothing inside dispatch is fallible; these cover only the decode step
/// and the envelope addressing check.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The inbound envelope was not valid JSON in the expected shape
    #[error("malformed request envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The envelope was addressed to a different skill
    #[error("application id mismatch: expected {expected}, got {actual}")]
    ApplicationIdMismatch { expected: String, actual: String },
}

/// One decoded request from the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Envelope format version as sent by the host
    #[serde(default)]
    pub version: String,
    /// The session this request belongs to
    pub session: Session,
    /// The request body, discriminated by the host's type tag
    pub request: RequestBody,
}

/// The session the host holds open across turns
///
/// Lifecycle and timeout of the session are owned entirely by the host;
/// this crate only reads it and echoes its attributes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Host-assigned session identifier
    pub session_id: String,
    /// True on the first request of a session
    #[serde(default)]
    pub new: bool,
    /// The skill the host believes it is addressing
    #[serde(default)]
    pub application: Option<Application>,
    /// Opaque state echoed back to the host each turn
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

/// Identifies the skill an envelope is addressed to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

impl Session {
    /// A brand-new session with no attributes, as the host opens one
    pub fn fresh(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            new: true,
            application: None,
            attributes: HashMap::new(),
        }
    }

    /// Attach an opaque attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Address the session to a skill
    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application = Some(Application {
            application_id: application_id.into(),
        });
        self
    }

    /// The application id the host sent, if any
    pub fn application_id(&self) -> Option<&str> {
        self.application.as_ref().map(|a| a.application_id.as_str())
    }
}

/// Body of a request, discriminated by the host's type tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    /// Session opened without a spoken intent
    #[serde(rename = "LaunchRequest")]
    Launch {
        #[serde(flatten)]
        meta: RequestMeta,
    },
    /// A parsed spoken command
    #[serde(rename = "IntentRequest")]
    Intent {
        #[serde(flatten)]
        meta: RequestMeta,
        intent: Intent,
    },
    /// The host closed the session; no response is expected
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded {
        #[serde(flatten)]
        meta: RequestMeta,
        #[serde(default)]
        reason: Option<String>,
    },
}

/// Fields common to every request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    /// Host-assigned request identifier
    pub request_id: String,
    /// When the host received the utterance
    pub timestamp: DateTime<Utc>,
}

/// Envelope returned to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    /// The inbound session attributes, passed through unchanged
    pub session_attributes: HashMap<String, serde_json::Value>,
    pub response: ResponseBody,
}

/// The response fields the host renders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

/// Speech the host plays when the follow-up input is unintelligible or absent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl ResponseEnvelope {
    /// Wrap a handler response for the host, echoing the session's
    /// opaque attributes
    pub fn wrap(response: Response, session: &Session) -> Self {
        let body = match response {
            Response::Tell { speech, card } => ResponseBody {
                output_speech: speech,
                card,
                reprompt: None,
                should_end_session: true,
            },
            Response::Ask {
                speech,
                reprompt,
                card,
            } => ResponseBody {
                output_speech: speech,
                card,
                reprompt: Some(Reprompt {
                    output_speech: reprompt,
                }),
                should_end_session: false,
            },
        };

        Self {
            version: ENVELOPE_VERSION.to_string(),
            session_attributes: session.attributes.clone(),
            response: body,
        }
    }
}
