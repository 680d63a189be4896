//! Session API

use shared::models::{ChatHistoryResponse, ChatMessage};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Ordered chat history of one session. Sessions without messages
    /// yield an empty list.
    pub async fn chat_history(&self, session_id: i64) -> ClientResult<Vec<ChatMessage>> {
        let resp: ChatHistoryResponse = self
            .get_json(self.api_url(&format!("/session/{}/chat-histories", session_id)))
            .await?;
        Ok(resp.chat_histories)
    }
}
