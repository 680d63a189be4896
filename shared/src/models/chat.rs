//! Chat history models

use serde::{Deserialize, Serialize};

/// Message author. The backend only distinguishes `"human"`; every other
/// value (bot, agent, system) renders on the assistant side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    Human,
    #[serde(other)]
    Assistant,
}

/// Single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub sender: ChatSender,
    pub content: String,
}

impl ChatMessage {
    pub fn is_human(&self) -> bool {
        self.sender == ChatSender::Human
    }
}

/// Chat history for one session. Sessions without messages come back
/// without the array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub session_id: String,
    #[serde(default)]
    pub chat_histories: Vec<ChatMessage>,
}
