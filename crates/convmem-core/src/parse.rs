//! Content normalization for the save path.
//!
//! Tool callers hand over free-form text. Content that looks like a
//! serialized message list is decoded with a strict typed parse; anything
//! that fails the parse degrades to a single assistant message rather than
//! an error.

use crate::types::ConversationMessage;

/// Derive a conversation identifier from a content path.
///
/// Every character outside `[A-Za-z0-9]` becomes `_`. The mapping is lossy:
/// two paths differing only in punctuation share an identifier, which is
/// accepted so re-saves of the same logical path overwrite in place.
pub fn conversation_id_from_path(path: &str) -> String {
    path.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Normalize free-form content into an ordered message list.
///
/// Content whose leading non-whitespace character is `[` or `{` is treated
/// as a candidate message list and decoded as `Vec<ConversationMessage>`.
/// The decode is strict: every element needs a known `role` and a `content`
/// string. On any parse or shape failure, and for plain text, the content
/// is wrapped verbatim in a single assistant message.
pub fn messages_from_content(content: &str) -> Vec<ConversationMessage> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        if let Ok(messages) = serde_json::from_str::<Vec<ConversationMessage>>(trimmed) {
            return messages;
        }
    }
    vec![ConversationMessage::assistant(content)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn test_conversation_id_replaces_non_alphanumerics() {
        assert_eq!(
            conversation_id_from_path("notes/2024/plan.md"),
            "notes_2024_plan_md"
        );
        assert_eq!(conversation_id_from_path("a b-c"), "a_b_c");
    }

    #[test]
    fn test_conversation_id_keeps_alphanumerics() {
        let id = conversation_id_from_path("Already0Clean9");
        assert_eq!(id, "Already0Clean9");
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }

    #[test]
    fn test_plain_text_becomes_single_assistant_message() {
        let messages = messages_from_content("hello world");
        assert_eq!(messages, vec![ConversationMessage::assistant("hello world")]);
    }

    #[test]
    fn test_valid_message_list_is_used_verbatim() {
        let messages =
            messages_from_content(r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"hey"}]"#);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[1].content, "hey");
    }

    #[test]
    fn test_wrong_shape_falls_back_to_raw_content() {
        let content = r#"[{"foo":"bar"}]"#;
        let messages = messages_from_content(content);
        assert_eq!(messages, vec![ConversationMessage::assistant(content)]);
    }

    #[test]
    fn test_unknown_role_falls_back_to_raw_content() {
        let content = r#"[{"role":"bot","content":"hi"}]"#;
        let messages = messages_from_content(content);
        assert_eq!(messages, vec![ConversationMessage::assistant(content)]);
    }

    #[test]
    fn test_invalid_json_falls_back_to_raw_content() {
        let content = "[not json";
        let messages = messages_from_content(content);
        assert_eq!(messages, vec![ConversationMessage::assistant(content)]);
    }

    #[test]
    fn test_json_object_falls_back_to_raw_content() {
        let content = r#"{"role":"user","content":"hi"}"#;
        let messages = messages_from_content(content);
        assert_eq!(messages, vec![ConversationMessage::assistant(content)]);
    }

    #[test]
    fn test_leading_whitespace_still_detected() {
        let messages = messages_from_content("  \n[{\"role\":\"user\",\"content\":\"hi\"}]");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::User);
    }

    #[test]
    fn test_message_metadata_survives_parse() {
        let messages = messages_from_content(
            r#"[{"role":"user","content":"hi","metadata":{"lang":"en"}}]"#,
        );
        let metadata = messages[0].metadata.as_ref().unwrap();
        assert_eq!(metadata.get("lang").map(String::as_str), Some("en"));
    }
}
