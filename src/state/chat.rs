#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Agent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub author: Author,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: Author::User,
            timestamp: timestamp.into(),
        }
    }

    pub fn agent(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: Author::Agent,
            timestamp: timestamp.into(),
        }
    }
}

/// Trims the draft; whitespace-only input sends nothing.
pub fn prepare_send(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// What the agent bubble says once the request settles.
pub fn reply_text(outcome: Result<String, String>) -> String {
    match outcome {
        Ok(response) => response,
        Err(error) => format!("Error: {}", error),
    }
}

/// Server error payloads carry their own message; anything else degrades
/// to the generic fallback.
pub fn server_error_text(error: Option<String>) -> String {
    error.unwrap_or_else(|| "Failed to get response".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_drafts_send_nothing() {
        assert_eq!(prepare_send(""), None);
        assert_eq!(prepare_send("   "), None);
        assert_eq!(prepare_send("\n\t "), None);
    }

    #[test]
    fn drafts_are_trimmed_before_sending() {
        assert_eq!(prepare_send("  hello "), Some("hello".to_string()));
    }

    #[test]
    fn successful_replies_pass_through() {
        assert_eq!(reply_text(Ok("hi".into())), "hi");
    }

    #[test]
    fn failures_are_prefixed() {
        assert_eq!(
            reply_text(Err("connection refused".into())),
            "Error: connection refused"
        );
        assert_eq!(
            reply_text(Err(server_error_text(Some("rate limited".into())))),
            "Error: rate limited"
        );
        assert_eq!(
            reply_text(Err(server_error_text(None))),
            "Error: Failed to get response"
        );
    }

    #[test]
    fn transcript_entries_keep_author_and_time() {
        let message = ChatMessage::user("hello", "12:30");
        assert_eq!(message.author, Author::User);
        assert_eq!(message.timestamp, "12:30");
        assert_eq!(ChatMessage::agent("hi", "12:31").author, Author::Agent);
    }
}
