use crate::tests::completion_dsl::demo_grammar;
use crate::{AutocompleteSession, CompletionConfig, CompletionContext};

fn session() -> AutocompleteSession {
    AutocompleteSession::new(demo_grammar(), CompletionConfig::default())
}

fn selected_label(session: &AutocompleteSession) -> Option<String> {
    session.selected().map(|s| s.display_label.clone())
}

#[test]
fn repeated_input_keeps_selection() {
    let mut session = session();
    session.update("", 0);
    session.next();
    session.next();
    assert_eq!(selected_label(&session).as_deref(), Some("sinks()"));

    session.update("", 0);
    assert_eq!(session.navigator().index(), 2);
}

#[test]
fn changed_input_resets_selection() {
    let mut session = session();
    session.update("", 0);
    session.previous();
    assert_eq!(selected_label(&session).as_deref(), Some("my_asset"));

    let result = session.update("ro", 2);
    assert_eq!(result.items.len(), 1);
    assert_eq!(session.navigator().index(), 0);
    assert_eq!(selected_label(&session).as_deref(), Some("roots()"));
}

#[test]
fn cursor_move_alone_recomputes() {
    let mut session = session();
    session.update("my_asset ", 9);
    assert_eq!(session.result().context, CompletionContext::ExpectingBooleanOperator);

    session.update("my_asset ", 3);
    assert_eq!(
        session.result().context,
        CompletionContext::ExpectingSelectorOrFunction
    );
}

#[test]
fn accept_applies_and_feeds_back() {
    let mut session = session();
    session.update("my_asset and sin", 16);

    let applied = session.accept().expect("a suggestion is selected");
    assert_eq!(applied.text, "my_asset and sinks()");
    assert_eq!(applied.cursor, 19);

    // The session now completes inside the call.
    assert_eq!(
        session.result().context,
        CompletionContext::InsideFunctionArgs("sinks".to_string())
    );
    assert_eq!(session.result().items.len(), 5);
}

#[test]
fn accept_after_dismiss_does_nothing() {
    let mut session = session();
    session.update("ta", 2);
    session.dismiss();
    assert_eq!(session.accept(), None);
    assert_eq!(session.result().items.len(), 1);
}

#[test]
fn accept_without_input_or_items_does_nothing() {
    let mut session = session();
    assert_eq!(session.accept(), None);

    session.update("zzz", 3);
    assert_eq!(session.accept(), None);
}

#[test]
fn accept_chain_builds_a_query() {
    let mut session = session();
    session.update("", 0);
    let applied = session.accept().expect("tag: is first");
    assert_eq!(applied.text, "tag:");

    session.next();
    let applied = session.accept().expect("staging is second");
    assert_eq!(applied.text, "tag:staging");
    assert_eq!(applied.cursor, 11);
    // The accepted value is still the active word and matches itself exactly.
    assert_eq!(session.result().replace.start, 4);
    assert_eq!(session.result().items.len(), 1);
}
