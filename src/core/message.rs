//! # Mensagens e Contexto da Conversa
//!
//! O núcleo não guarda estado entre chamadas: todo o histórico vive no
//! chamador e é entregue a cada turno como um [`Context`].
//!
//! ```text
//! Histórico (Vec<Message>)
//!   ├── recent_messages      → últimas 5 (apenas texto + remetente)
//!   └── conversation_history → tudo, em ordem
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::emotion::Emotion;

/// Quantas mensagens entram em `recent_messages`.
pub const RECENT_WINDOW: usize = 5;

/// Quem enviou a mensagem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    #[serde(rename = "bot", alias = "assistant")]
    Assistant,
}

/// Uma mensagem do log de conversa.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
}

impl Message {
    /// Mensagem do usuário, carimbada com o instante atual.
    pub fn user(text: impl Into<String>, emotion: Option<Emotion>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            emotion,
        }
    }

    /// Mensagem do bot, carimbada com o instante atual.
    pub fn assistant(text: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            emotion: Some(emotion),
        }
    }
}

/// Visão reduzida de uma mensagem recente (texto + remetente).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentMessage {
    pub text: String,
    pub sender: Sender,
}

impl From<&Message> for RecentMessage {
    fn from(m: &Message) -> Self {
        Self {
            text: m.text.clone(),
            sender: m.sender,
        }
    }
}

/// Contexto entregue pelo chamador a cada turno.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    #[serde(default)]
    pub recent_messages: Vec<RecentMessage>,
    #[serde(default)]
    pub conversation_history: Vec<Message>,
}

impl Context {
    /// Contexto de uma conversa que ainda não começou.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Monta o contexto a partir do histórico completo, anterior ao turno atual.
    pub fn from_history(history: &[Message]) -> Self {
        let start = history.len().saturating_sub(RECENT_WINDOW);
        Self {
            recent_messages: history[start..].iter().map(RecentMessage::from).collect(),
            conversation_history: history.to_vec(),
        }
    }

    pub fn has_recent(&self) -> bool {
        !self.recent_messages.is_empty()
    }
}

/// Resposta de um turno: texto + humor anexado.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub emotion: Emotion,
}

impl Reply {
    pub fn new(text: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            text: text.into(),
            emotion,
        }
    }

    /// Converte a resposta em mensagem do bot para o histórico.
    pub fn into_message(self) -> Message {
        Message::assistant(self.text, self.emotion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emotion::{EmotionKind, SMILE};

    #[test]
    fn context_keeps_last_five_as_recent() {
        let history: Vec<Message> = (0..8).map(|i| Message::user(format!("m{i}"), None)).collect();
        let ctx = Context::from_history(&history);
        assert_eq!(ctx.recent_messages.len(), 5);
        assert_eq!(ctx.recent_messages[0].text, "m3");
        assert_eq!(ctx.recent_messages[4].text, "m7");
        assert_eq!(ctx.conversation_history.len(), 8);
    }

    #[test]
    fn short_history_is_fully_recent() {
        let history = vec![Message::user("oi", None)];
        let ctx = Context::from_history(&history);
        assert_eq!(ctx.recent_messages.len(), 1);
        assert!(ctx.has_recent());
        assert!(!Context::empty().has_recent());
    }

    #[test]
    fn assistant_serializes_as_bot_and_accepts_alias() {
        let m = Message::assistant("olá", Emotion::new(EmotionKind::Neutral, SMILE));
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["sender"], "bot");

        let parsed: Message =
            serde_json::from_str(r#"{"text":"x","sender":"assistant"}"#).unwrap();
        assert_eq!(parsed.sender, Sender::Assistant);
        assert!(parsed.emotion.is_none());
    }

    #[test]
    fn context_deserializes_camel_case() {
        let ctx: Context = serde_json::from_str(
            r#"{"recentMessages":[{"text":"hi","sender":"user"}],"conversationHistory":[]}"#,
        )
        .unwrap();
        assert_eq!(ctx.recent_messages.len(), 1);
        assert!(ctx.conversation_history.is_empty());
    }

    #[test]
    fn reply_becomes_bot_message() {
        let reply = Reply::new("oi", Emotion::new(EmotionKind::Friendly, SMILE));
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["emotion"]["type"], "friendly");
        let m = reply.into_message();
        assert_eq!(m.sender, Sender::Assistant);
        assert_eq!(m.text, "oi");
    }
}
