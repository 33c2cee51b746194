use std::sync::Arc;

use super::{ChatProvider, ChatRequest, ChatResponse, Message};
use crate::domain::DomainError;

/// A stateful conversational context with a chat provider, seeded with
/// prior turns. Each `send` performs one blocking exchange and appends
/// both sides of it to the history.
pub struct ChatSession {
    provider: Arc<dyn ChatProvider>,
    model: String,
    request: ChatRequest,
    last: Option<ChatResponse>,
}

impl ChatSession {
    /// Open a session. `request.messages` is the seed history; its sampling
    /// parameters apply to every exchange in the session.
    pub fn start(
        provider: Arc<dyn ChatProvider>,
        model: impl Into<String>,
        request: ChatRequest,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            request,
            last: None,
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.request.messages
    }

    /// Full provider reply for the most recent exchange
    pub fn last_response(&self) -> Option<&ChatResponse> {
        self.last.as_ref()
    }

    /// Send one user message and return the model's reply text
    pub async fn send(&mut self, content: impl Into<String>) -> Result<String, DomainError> {
        self.request.messages.push(Message::user(content));

        let response = self
            .provider
            .chat(&self.model, self.request.clone())
            .await?;

        let text = response.message.content.clone();
        self.request.messages.push(response.message.clone());
        self.last = Some(response);

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::{FinishReason, MockChatProvider, Usage};

    fn canned_reply(text: &str) -> ChatResponse {
        ChatResponse::new("gemini-2.5-flash", Message::model(text))
            .with_finish_reason(FinishReason::Stop)
            .with_usage(Usage::new(12, 34))
    }

    #[tokio::test]
    async fn test_send_returns_reply_and_extends_history() {
        let provider = Arc::new(
            MockChatProvider::new("gemini").with_response(canned_reply("A fine carbonara.")),
        );

        let seed = ChatRequest::builder()
            .user("Write a detailed recipe about carbonara in approximately 300 words.")
            .build();

        let mut session = ChatSession::start(provider.clone(), "gemini-2.5-flash", seed);
        let reply = session.send("carbonara").await.unwrap();

        assert_eq!(reply, "A fine carbonara.");
        // seed turn + live user turn + model reply
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history()[1].content, "carbonara");
        assert_eq!(
            session.last_response().unwrap().usage,
            Some(Usage::new(12, 34))
        );
    }

    #[tokio::test]
    async fn test_provider_sees_seed_history_plus_live_turn() {
        let provider =
            Arc::new(MockChatProvider::new("gemini").with_response(canned_reply("ok")));

        let seed = ChatRequest::builder().user("seed instruction").build();
        let mut session = ChatSession::start(provider.clone(), "gemini-2.5-flash", seed);
        session.send("live message").await.unwrap();

        let seen = provider.recorded();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].messages.len(), 2);
        assert_eq!(seen[0].messages[0].content, "seed instruction");
        assert_eq!(seen[0].messages[1].content, "live message");
    }

    #[tokio::test]
    async fn test_send_propagates_provider_error() {
        let provider =
            Arc::new(MockChatProvider::new("gemini").with_error("quota exceeded"));

        let mut session = ChatSession::start(
            provider,
            "gemini-2.5-flash",
            ChatRequest::builder().user("seed").build(),
        );

        let err = session.send("topic").await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert!(session.last_response().is_none());
    }
}
