//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** que o motor de respostas
//! consome e produz:
//!
//! - [`Emotion`]: Humor anexado a cada mensagem (tipo, intensidade, glifo)
//! - [`Message`]: Entrada do log de conversa (texto, remetente, horário)
//! - [`Context`]: Histórico entregue pelo chamador a cada turno
//! - [`Reply`]: Resposta de um turno (texto + emoção)
//! - [`KnowledgeBase`]: Tabela estática de tópicos, palavras-chave e respostas
//! - [`Chooser`]: Fonte injetável de escolhas aleatórias
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use mini_chatbot::core::{Context, KnowledgeBase, Message};
//!
//! let kb = KnowledgeBase::builtin();
//! let history = vec![Message::user("Tell me about Docker", None)];
//! let ctx = Context::from_history(&history);
//! assert!(ctx.has_recent());
//! assert!(kb.topic("dev_tools").is_some());
//! ```

/// Sub-módulo com o trait [`Chooser`] e o [`FixedChooser`] de testes.
pub mod chooser;

/// Sub-módulo com [`Emotion`], [`EmotionKind`] e [`Intensity`].
pub mod emotion;

/// Sub-módulo com [`KnowledgeBase`], [`Topic`] e a pontuação de tópicos.
pub mod knowledge_base;

/// Sub-módulo com [`Message`], [`Sender`] e [`Context`].
pub mod message;

mod topics;

// Re-exports para conveniência: permite usar `crate::core::Emotion` diretamente.
pub use chooser::{Chooser, FixedChooser};
pub use emotion::{Emotion, EmotionKind, Intensity};
pub use knowledge_base::{KnowledgeBase, Topic, TopicQuery};
pub use message::{Context, Message, RecentMessage, Reply, Sender};
