//! The Phone Assistant skill
//!
//! Wires the dispatch registry for the phone helper: directory lookups for
//! extension numbers, cell numbers, and stock prices, a handful of fixed
//! joke replies, and the standard help, stop, and cancel intents. The
//! intent names here are the external contract with the host's
//! interaction model.

use crate::directory::Directory;
use crate::dispatch::Skill;
use crate::handlers::{DirectoryLookupHandler, FixedReplyHandler, HelpHandler};

const WELCOME_SPEECH: &str = "Welcome to the Phone Helper. You can ask a question like,  what is the extension number for someone? ... Now, what can I help you with.";
const WELCOME_REPROMPT: &str = "For instructions on what you can say, please say help me.";

const HELP_SPEECH: &str = "You can ask questions about Phone Assistant such as,  what is the extension number for someone? what can I help you with?";
const HELP_REPROMPT: &str = "You can say things like,  what is the extension number for someone, what can I help you with?";

const GOODBYE: &str = "Goodbye";

/// Desk extension replies, keyed by first name
pub fn extension_directory() -> Directory {
    Directory::new("extension number", "Extension number")
        .with_entry("bob", "Bob's extension number is 4 5 2 1.")
        .with_entry("alice", "Alice's extension number is 4 5 0 9.")
        .with_entry("john", "John's extension number is 4 4 7 2.")
        .with_entry("mary", "Mary's extension number is 4 6 1 8.")
        .with_entry("peter", "Peter's extension number is 4 4 3 0.")
}

/// Cell number replies, keyed by first name
pub fn cell_directory() -> Directory {
    Directory::new("cell number", "Cell number")
        .with_entry("bob", "Bob's cell number is 5 5 5, 0 1 4 6.")
        .with_entry("alice", "Alice's cell number is 5 5 5, 0 1 9 2.")
        .with_entry("john", "John's cell number is 5 5 5, 0 1 3 7.")
        .with_entry("mary", "Mary's cell number is 5 5 5, 0 1 7 5.")
}

/// Stock price replies, keyed by company name
pub fn stock_directory() -> Directory {
    Directory::new("stock price", "Stock price")
        .with_entry("amazon", "Amazon is trading at 187 dollars.")
        .with_entry("apple", "Apple is trading at 214 dollars.")
        .with_entry("google", "Google is trading at 166 dollars.")
        .with_entry("microsoft", "Microsoft is trading at 415 dollars.")
}

/// Build the fully wired Phone Assistant skill
pub fn phone_assistant() -> Skill {
    let mut skill = Skill::new(WELCOME_SPEECH, WELCOME_REPROMPT);

    skill.register(
        "AssistantIntent",
        DirectoryLookupHandler::new(extension_directory(), "Person"),
    );
    skill.register(
        "CellPhoneIntent",
        DirectoryLookupHandler::new(cell_directory(), "Person"),
    );
    skill.register(
        "StockIntent",
        DirectoryLookupHandler::new(stock_directory(), "Company"),
    );

    skill.register(
        "JokeNewYearIntent",
        FixedReplyHandler::new("Shin Nian Kwai Le. Hong Bao Na Lai "),
    );
    skill.register(
        "JokeSoftwareIntent",
        FixedReplyHandler::new("The one who must not be named. You know who"),
    );
    skill.register(
        "JokeSingIntent",
        FixedReplyHandler::new("Trust me. You would not like it"),
    );
    skill.register(
        "JokeCoffeeIntent",
        FixedReplyHandler::new("Sold out. Come early next time. "),
    );
    skill.register(
        "JokeAlphaIntent",
        FixedReplyHandler::new("Well, the one you are speaking to."),
    );

    skill.register("AMAZON.StopIntent", FixedReplyHandler::new(GOODBYE));
    skill.register("AMAZON.CancelIntent", FixedReplyHandler::new(GOODBYE));
    skill.register(
        "AMAZON.HelpIntent",
        HelpHandler::new(HELP_SPEECH, HELP_REPROMPT),
    );

    skill
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Session;
    use crate::value_objects::Intent;

    #[test]
    fn test_every_assistant_intent_is_registered() {
        let skill = phone_assistant();

        for name in [
            "AssistantIntent",
            "CellPhoneIntent",
            "StockIntent",
            "JokeNewYearIntent",
            "JokeSoftwareIntent",
            "JokeSingIntent",
            "JokeCoffeeIntent",
            "JokeAlphaIntent",
            "AMAZON.StopIntent",
            "AMAZON.CancelIntent",
            "AMAZON.HelpIntent",
        ] {
            assert!(skill.recognizes(name), "missing handler for {name}");
        }
    }

    #[test]
    fn test_launch_speaks_the_welcome() {
        let skill = phone_assistant();

        let response = skill.launch(&Session::fresh("s"));

        assert!(!response.ends_session());
        assert_eq!(response.speech().text(), WELCOME_SPEECH);
        assert_eq!(response.reprompt().map(|r| r.text()), Some(WELCOME_REPROMPT));
    }

    #[test]
    fn test_stop_and_cancel_say_goodbye() {
        let skill = phone_assistant();
        let session = Session::fresh("s");

        for name in ["AMAZON.StopIntent", "AMAZON.CancelIntent"] {
            let response = skill.dispatch(&Intent::new(name), &session);
            assert!(response.ends_session());
            assert_eq!(response.speech().text(), GOODBYE);
        }
    }
}
