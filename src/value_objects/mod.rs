//! Value objects for the skill domain
//!
//! Every type here is an immutable value constructed for one
//! request/response cycle. Nothing is mutated after construction and
//! nothing outlives the turn it belongs to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named, pre-classified user request
///
/// The hosting platform's language model turns speech into an intent name
/// plus zero or more named slot values before this crate sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Intent {
    /// Intent name as configured in the host's interaction model
    pub name: String,
    /// Named slot values carried by the intent
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

/// A named parameter of an intent
///
/// The host includes a slot whenever the interaction model defines one,
/// whether or not the speaker filled it, so `value` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    /// The spoken value, if the host captured one
    #[serde(default)]
    pub value: Option<String>,
}

impl Intent {
    /// Create an intent with no slots
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    /// Add a filled slot
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(
            name.into(),
            Slot {
                value: Some(value.into()),
            },
        );
        self
    }

    /// Add a slot the speaker left unfilled
    pub fn with_empty_slot(mut self, name: impl Into<String>) -> Self {
        self.slots.insert(name.into(), Slot::default());
        self
    }

    /// Slot value by name
    ///
    /// An absent slot, a slot without a value, and a slot with an empty
    /// value all read as `None`.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
            .filter(|value| !value.is_empty())
    }
}

/// Spoken output attached to a response
///
/// Plain text is the only kind this skill emits today; the SSML variant is
/// the host format's other speech kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// Plain text read by the device voice
    #[serde(rename = "PlainText")]
    Plain { text: String },
    /// Speech synthesis markup
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// Create plain text speech
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    /// The raw spoken content, whichever kind it is
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } => text,
            Self::Ssml { ssml } => ssml,
        }
    }
}

/// Visual summary of a spoken response, shown on devices with a screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    /// Card headline
    pub title: String,
    /// Card body text
    pub content: String,
}

impl Card {
    /// Create a card
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The outcome of handling one request
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Terminal response; the session ends after this turn
    Tell {
        speech: OutputSpeech,
        card: Option<Card>,
    },
    /// Keeps the session open; the reprompt is spoken if the follow-up
    /// input is unintelligible or absent
    Ask {
        speech: OutputSpeech,
        reprompt: OutputSpeech,
        card: Option<Card>,
    },
}

impl Response {
    /// Terminal plain-text response
    pub fn tell(speech: impl Into<String>) -> Self {
        Self::Tell {
            speech: OutputSpeech::plain(speech),
            card: None,
        }
    }

    /// Terminal plain-text response with a display card
    pub fn tell_with_card(speech: impl Into<String>, card: Card) -> Self {
        Self::Tell {
            speech: OutputSpeech::plain(speech),
            card: Some(card),
        }
    }

    /// Plain-text prompt that keeps the session open
    pub fn ask(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self::Ask {
            speech: OutputSpeech::plain(speech),
            reprompt: OutputSpeech::plain(reprompt),
            card: None,
        }
    }

    /// Prompt with a display card
    pub fn ask_with_card(
        speech: impl Into<String>,
        reprompt: impl Into<String>,
        card: Card,
    ) -> Self {
        Self::Ask {
            speech: OutputSpeech::plain(speech),
            reprompt: OutputSpeech::plain(reprompt),
            card: Some(card),
        }
    }

    /// Whether this response closes the interaction
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Tell { .. })
    }

    /// The spoken part of the response
    pub fn speech(&self) -> &OutputSpeech {
        match self {
            Self::Tell { speech, .. } | Self::Ask { speech, .. } => speech,
        }
    }

    /// The reprompt, for responses that keep the session open
    pub fn reprompt(&self) -> Option<&OutputSpeech> {
        match self {
            Self::Tell { .. } => None,
            Self::Ask { reprompt, .. } => Some(reprompt),
        }
    }

    /// The attached display card, if any
    pub fn card(&self) -> Option<&Card> {
        match self {
            Self::Tell { card, .. } | Self::Ask { card, .. } => card.as_ref(),
        }
    }
}
