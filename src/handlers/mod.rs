//! Built-in intent handler kinds
//!
//! Three shapes cover every intent this skill serves: directory lookups
//! that answer from a canned reply table, fixed replies that ignore their
//! slots, and the help prompt that keeps the session open.

use tracing::debug;

use crate::directory::Directory;
use crate::dispatch::IntentHandler;
use crate::envelope::Session;
use crate::value_objects::{Card, Intent, Response};

/// Reprompt spoken whenever a lookup misses
const MISS_REPROMPT: &str = "What else can I help with?";

/// Answers an intent by looking a slot value up in a [`Directory`]
///
/// A hit ends the session with the canned reply and a matching card. A
/// miss apologizes and keeps the session open, naming the unknown item
/// when one was given.
pub struct DirectoryLookupHandler {
    directory: Directory,
    slot: String,
}

impl DirectoryLookupHandler {
    /// Create a handler reading the given slot name
    pub fn new(directory: Directory, slot: impl Into<String>) -> Self {
        Self {
            directory,
            slot: slot.into(),
        }
    }
}

impl IntentHandler for DirectoryLookupHandler {
    fn handle(&self, intent: &Intent, _session: &Session) -> Response {
        // Absent slot, valueless slot, and empty value all count as
        // "no name given"; a given name is matched by lowercased key only.
        let name = intent
            .slot_value(&self.slot)
            .map(|value| value.to_lowercase());

        if let Some(name) = name.as_deref() {
            if let Some(reply) = self.directory.lookup(name) {
                let title = format!("{} for {}", self.directory.card_prefix(), name);
                return Response::tell_with_card(reply, Card::new(title, reply));
            }
        }

        debug!(topic = self.directory.topic(), name = ?name, "directory lookup miss");
        let speech = match name.as_deref() {
            Some(name) => format!(
                "I'm sorry, I currently do not know the {} for {}. What else can I help with?",
                self.directory.topic(),
                name
            ),
            None => format!(
                "I'm sorry, I currently do not know that {}. What else can I help with?",
                self.directory.topic()
            ),
        };
        Response::ask(speech, MISS_REPROMPT)
    }
}

/// Replies with one fixed utterance and ends the session, ignoring slots
pub struct FixedReplyHandler {
    speech: String,
}

impl FixedReplyHandler {
    /// Create a handler speaking the given reply
    pub fn new(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
        }
    }
}

impl IntentHandler for FixedReplyHandler {
    fn handle(&self, _intent: &Intent, _session: &Session) -> Response {
        Response::tell(self.speech.clone())
    }
}

/// Speaks usage instructions and keeps the session open
pub struct HelpHandler {
    speech: String,
    reprompt: String,
}

impl HelpHandler {
    /// Create a handler with instructional speech and its reprompt
    pub fn new(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: reprompt.into(),
        }
    }
}

impl IntentHandler for HelpHandler {
    fn handle(&self, _intent: &Intent, _session: &Session) -> Response {
        Response::ask(self.speech.clone(), self.reprompt.clone())
    }
}
