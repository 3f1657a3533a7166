//! Phone Assistant skill
//!
//! A voice-assistant skill that answers phone directory questions. It
//! provides:
//! - Intent dispatch over a registry of named handlers, with a fallback
//!   for unrecognized intent names
//! - Canned reply directories for extension numbers, cell numbers, and
//!   stock prices
//! - Tell/Ask responses with optional display cards
//! - The request and response envelopes exchanged with the hosting
//!   platform
//!
//! The host parses speech into a named intent with slot values; this
//! crate turns each decoded request into exactly one response. All state
//! is immutable after construction, so one [`Skill`] serves concurrent
//! requests without coordination.

pub mod assistant;
pub mod directory;
pub mod dispatch;
pub mod envelope;
pub mod handlers;
pub mod value_objects;

// Re-export main types
pub use assistant::{cell_directory, extension_directory, phone_assistant, stock_directory};

pub use directory::Directory;

pub use dispatch::{IntentHandler, Skill};

pub use envelope::{
    Application, EnvelopeError, Reprompt, RequestBody, RequestEnvelope, RequestMeta,
    ResponseBody, ResponseEnvelope, Session, ENVELOPE_VERSION,
};

pub use handlers::{DirectoryLookupHandler, FixedReplyHandler, HelpHandler};

pub use value_objects::{Card, Intent, OutputSpeech, Response, Slot};
