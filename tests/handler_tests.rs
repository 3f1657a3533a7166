//! Tests for the Phone Assistant intent handlers

use phone_assistant::{
    phone_assistant, Directory, DirectoryLookupHandler, Intent, IntentHandler, Response, Session,
};

fn session() -> Session {
    Session::fresh("session-1")
}

#[test]
fn test_extension_lookup_known_name() {
    // Setup
    let skill = phone_assistant();
    let intent = Intent::new("AssistantIntent").with_slot("Person", "Bob");

    // Execute
    let response = skill.dispatch(&intent, &session());

    // Verify
    assert!(response.ends_session());
    assert_eq!(
        response.speech().text(),
        "Bob's extension number is 4 5 2 1."
    );
    let card = response.card().expect("hit should carry a card");
    assert_eq!(card.title, "Extension number for bob");
    assert_eq!(card.content, "Bob's extension number is 4 5 2 1.");
}

#[test]
fn test_lookup_key_matches_regardless_of_spoken_case() {
    let skill = phone_assistant();
    let session = session();

    for spoken in ["alice", "Alice", "ALICE"] {
        let intent = Intent::new("AssistantIntent").with_slot("Person", spoken);
        let response = skill.dispatch(&intent, &session);
        assert!(response.ends_session(), "{spoken} should resolve");
        assert_eq!(
            response.speech().text(),
            "Alice's extension number is 4 5 0 9."
        );
    }
}

#[test]
fn test_cell_lookup_unknown_name() {
    // Setup
    let skill = phone_assistant();
    let intent = Intent::new("CellPhoneIntent").with_slot("Person", "Zed");

    // Execute
    let response = skill.dispatch(&intent, &session());

    // Verify: the unknown name is spoken back lowercased, session stays open
    assert!(!response.ends_session());
    assert_eq!(
        response.speech().text(),
        "I'm sorry, I currently do not know the cell number for zed. What else can I help with?"
    );
    assert_eq!(
        response.reprompt().map(|r| r.text()),
        Some("What else can I help with?")
    );
    assert!(response.card().is_none());
}

#[test]
fn test_lookup_without_a_name_is_generic() {
    let skill = phone_assistant();
    let session = session();
    let generic = "I'm sorry, I currently do not know that stock price. What else can I help with?";

    // Slot absent, slot unfilled, and slot empty all take the same branch
    for intent in [
        Intent::new("StockIntent"),
        Intent::new("StockIntent").with_empty_slot("Company"),
        Intent::new("StockIntent").with_slot("Company", ""),
    ] {
        let response = skill.dispatch(&intent, &session);
        assert!(!response.ends_session());
        assert_eq!(response.speech().text(), generic);
    }
}

#[test]
fn test_stock_lookup_known_company() {
    let skill = phone_assistant();
    let intent = Intent::new("StockIntent").with_slot("Company", "Amazon");

    let response = skill.dispatch(&intent, &session());

    assert!(response.ends_session());
    assert_eq!(response.speech().text(), "Amazon is trading at 187 dollars.");
    let card = response.card().expect("hit should carry a card");
    assert_eq!(card.title, "Stock price for amazon");
}

#[test]
fn test_custom_directory_handler() {
    // Setup: a one-entry table behind a fresh handler
    let directory = Directory::new("extension number", "Extension number").with_entry("bob", "x123");
    let handler = DirectoryLookupHandler::new(directory, "Person");
    let intent = Intent::new("AssistantIntent").with_slot("Person", "Bob");

    // Execute
    let response = handler.handle(&intent, &session());

    // Verify
    assert!(response.ends_session());
    let card = response.card().expect("hit should carry a card");
    assert_eq!(card.title, "Extension number for bob");
    assert_eq!(card.content, "x123");
}

#[test]
fn test_joke_intents_speak_their_fixed_lines() {
    let skill = phone_assistant();
    let session = session();

    let expected = [
        ("JokeNewYearIntent", "Shin Nian Kwai Le. Hong Bao Na Lai "),
        ("JokeSoftwareIntent", "The one who must not be named. You know who"),
        ("JokeSingIntent", "Trust me. You would not like it"),
        ("JokeCoffeeIntent", "Sold out. Come early next time. "),
        ("JokeAlphaIntent", "Well, the one you are speaking to."),
    ];

    for (name, line) in expected {
        // Fixed replies ignore whatever slots arrive with the intent
        let intent = Intent::new(name).with_slot("Person", "Bob");
        let response = skill.dispatch(&intent, &session);
        assert_eq!(response, Response::tell(line), "wrong line for {name}");
    }
}

#[test]
fn test_help_intent_keeps_session_open() {
    let skill = phone_assistant();

    let response = skill.dispatch(&Intent::new("AMAZON.HelpIntent"), &session());

    assert!(!response.ends_session());
    assert_eq!(
        response.speech().text(),
        "You can ask questions about Phone Assistant such as,  what is the extension number for someone? what can I help you with?"
    );
    assert_eq!(
        response.reprompt().map(|r| r.text()),
        Some("You can say things like,  what is the extension number for someone, what can I help you with?")
    );
}
