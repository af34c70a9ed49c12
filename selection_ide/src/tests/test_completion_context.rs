use crate::CompletionContext;
use crate::tests::completion_dsl::t;

// ----------------------------
// Reference scenarios
// ----------------------------

#[test]
fn empty_input_offers_every_selector() {
    t("$0")
        .expect_context(CompletionContext::ExpectingSelectorOrFunction)
        .expect_labels(&["tag:", "key:", "sinks()", "roots()", "my_asset"])
        .expect_replace(0, 0);
}

#[test]
fn partial_namespace_is_prefix_filtered() {
    t("ta$0")
        .expect_context(CompletionContext::ExpectingSelectorOrFunction)
        .expect_labels(&["tag:"])
        .expect_replace(0, 2);
}

#[test]
fn namespace_value_after_colon() {
    t("tag:pr$0")
        .expect_context(CompletionContext::ExpectingNamespaceValue("tag".to_string()))
        .expect_labels(&["prod"])
        .expect_replace(4, 6);
}

#[test]
fn selector_after_boolean_operator() {
    t("my_asset and $0")
        .expect_context(CompletionContext::ExpectingSelectorOrFunction)
        .expect_contains_labels(&["tag:", "sinks()", "roots()", "my_asset"])
        .expect_replace(13, 13);
}

#[test]
fn function_insertion_places_cursor_between_parens() {
    t("my_asset and sin$0")
        .expect_replace(13, 16)
        .expect_apply("sinks()", "my_asset and sinks($0)");
}

#[test]
fn boolean_operators_after_complete_term() {
    t("my_asset $0")
        .expect_context(CompletionContext::ExpectingBooleanOperator)
        .expect_labels(&["and", "or"])
        .expect_replace(9, 9);
}

// ----------------------------
// Namespace values
// ----------------------------

#[test]
fn namespace_value_with_empty_query_lists_all_values() {
    t("tag:$0")
        .expect_context(CompletionContext::ExpectingNamespaceValue("tag".to_string()))
        .expect_labels(&["prod", "staging"])
        .expect_replace(4, 4)
        .expect_apply("staging", "tag:staging$0");
}

#[test]
fn namespace_lookup_ignores_case() {
    t("TAG:pr$0")
        .expect_context(CompletionContext::ExpectingNamespaceValue("TAG".to_string()))
        .expect_labels(&["prod"]);
}

#[test]
fn unknown_namespace_yields_no_values() {
    t("owner:$0")
        .expect_context(CompletionContext::ExpectingNamespaceValue("owner".to_string()))
        .expect_empty()
        .expect_replace(6, 6);
}

#[test]
fn whitespace_after_colon_is_not_a_namespace_value() {
    t("tag: $0")
        .expect_context(CompletionContext::Unknown)
        .expect_empty()
        .expect_replace(5, 5);
}

#[test]
fn opened_quote_is_kept_for_namespace_values() {
    t(r#"tag:"pr$0"#)
        .expect_context(CompletionContext::ExpectingNamespaceValue("tag".to_string()))
        .expect_labels(&["prod"])
        .expect_replace(4, 7)
        .expect_item_text("prod", r#""prod""#)
        .expect_apply("prod", r#"tag:"prod"$0"#);
}

// ----------------------------
// Function arguments
// ----------------------------

#[test]
fn inside_known_function_args() {
    t("sinks($0")
        .expect_context(CompletionContext::InsideFunctionArgs("sinks".to_string()))
        .expect_labels(&["tag:", "key:", "sinks()", "roots()", "my_asset"])
        .expect_replace(6, 6);
}

#[test]
fn inside_function_args_reports_declared_casing() {
    t("SINKS(ro$0)")
        .expect_context(CompletionContext::InsideFunctionArgs("sinks".to_string()))
        .expect_labels(&["roots()"])
        .expect_replace(6, 8);
}

#[test]
fn unknown_function_falls_back_to_selector_completion() {
    t("snks(ta$0")
        .expect_context(CompletionContext::InsideFunctionArgs("snks".to_string()))
        .expect_labels(&["tag:"])
        .expect_replace(5, 7);
}

#[test]
fn plain_group_is_not_a_function_call() {
    t("($0")
        .expect_context(CompletionContext::ExpectingSelectorOrFunction)
        .expect_contains_labels(&["tag:", "my_asset"]);
}

#[test]
fn spaced_paren_after_value_is_a_plain_group() {
    t("tag:prod and my_asset ($0")
        .expect_context(CompletionContext::ExpectingSelectorOrFunction)
        .expect_contains_labels(&["tag:", "sinks()", "my_asset"])
        .expect_replace(23, 23);
}

#[test]
fn nested_call_is_innermost() {
    t("sinks(roots($0))")
        .expect_context(CompletionContext::InsideFunctionArgs("roots".to_string()));
}

#[test]
fn closed_call_then_space_expects_operator() {
    t("sinks(my_asset) $0")
        .expect_context(CompletionContext::ExpectingBooleanOperator)
        .expect_labels(&["and", "or"])
        .expect_replace(16, 16);
}

// ----------------------------
// Boolean operators
// ----------------------------

#[test]
fn partial_operator_is_replaced() {
    t("my_asset AN$0")
        .expect_context(CompletionContext::ExpectingBooleanOperator)
        .expect_labels(&["and"])
        .expect_replace(9, 11)
        .expect_apply("and", "my_asset and$0");
}

#[test]
fn complete_operator_keyword_stays_active() {
    t("my_asset or$0")
        .expect_context(CompletionContext::ExpectingBooleanOperator)
        .expect_labels(&["or"])
        .expect_replace(9, 11);
}

#[test]
fn cursor_inside_whitespace_run_expects_operator() {
    t("my_asset $0 ")
        .expect_context(CompletionContext::ExpectingBooleanOperator)
        .expect_labels(&["and", "or"])
        .expect_replace(9, 9);
}

#[test]
fn cursor_between_spaces_before_operator_expects_operator() {
    t("my_asset $0  or tag:prod")
        .expect_context(CompletionContext::ExpectingBooleanOperator)
        .expect_labels(&["and", "or"])
        .expect_replace(9, 9)
        .expect_apply("and", "my_asset and$0  or tag:prod");
}

#[test]
fn not_is_never_offered_after_a_term() {
    t("my_asset $0")
        .suggest_not()
        .expect_not_contains_labels(&["not"]);
}

#[test]
fn after_not_expects_selector() {
    t("not $0").expect_context(CompletionContext::ExpectingSelectorOrFunction);
}

#[test]
fn quoted_term_then_space_expects_operator() {
    t(r#"tag:"my prod" $0"#)
        .expect_context(CompletionContext::ExpectingBooleanOperator)
        .expect_labels(&["and", "or"]);
}

// ----------------------------
// Unknown positions
// ----------------------------

#[test]
fn term_directly_followed_by_cursor_without_space() {
    t("sinks(my_asset)$0")
        .expect_context(CompletionContext::Unknown)
        .expect_empty()
        .expect_replace(15, 15);
}

#[test]
fn plain_string_literal_has_no_completions() {
    t(r#""abc$0def""#)
        .expect_context(CompletionContext::Unknown)
        .expect_empty()
        .expect_replace(4, 4);
}

#[test]
fn unterminated_plain_string_has_no_completions() {
    t(r#""my$0"#)
        .expect_context(CompletionContext::Unknown)
        .expect_empty()
        .expect_replace(3, 3);
}

#[test]
fn unknown_character_blocks_completion() {
    t("my_asset & $0")
        .expect_context(CompletionContext::Unknown)
        .expect_empty();
}

#[test]
fn cursor_strictly_inside_word_replaces_the_whole_word() {
    t("ta$0g:prod")
        .expect_context(CompletionContext::ExpectingSelectorOrFunction)
        .expect_labels(&["tag:"])
        .expect_replace(0, 3)
        .expect_replace_contains_cursor();
}

#[test]
fn cursor_at_word_start_inserts() {
    t("my_asset and $0roots()")
        .expect_context(CompletionContext::ExpectingSelectorOrFunction)
        .expect_replace(13, 13)
        .expect_apply("tag:", "my_asset and tag:$0roots()");
}
