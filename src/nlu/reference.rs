//! # Resolvedor de Referências
//!
//! Decide se a frase atual depende da conversa anterior ("how does it
//! work?") e recupera os tópicos discutidos no histórico.
//!
//! ## Sinais
//!
//! | Sinal | Regra |
//! |-------|-------|
//! | `is_reference` | pronome (`it`, `that`, `this`, `they`, `them`, `those`, `these`, `same`, `similar`) como palavra inteira, com mensagens recentes |
//! | `is_question_with_reference` | interrogativa + auxiliar + pronome ("what is it"), com mensagens recentes |
//! | [`is_follow_up_question`] | marcador de continuação ("what about", "tell me more", "and", ...) como substring |
//!
//! Sem sinal de referência, a frase é respondida de forma independente:
//! o histórico nunca vaza para perguntas novas.
//!
//! ## Ordem dos Tópicos do Contexto
//!
//! [`extract_topics_from_context`] ordena os tópicos pela **última menção**
//! (índice da mensagem, depois posição da última palavra-chave). O último
//! elemento é o tópico discutido mais recentemente.
//!
//! Para o histórico da conversa, [`extract_topics_from_history`] aplica
//! essa ordem às mensagens do **usuário**: o bot costuma citar outros
//! assuntos no fim das próprias respostas.

use regex::Regex;

use crate::core::knowledge_base::{KnowledgeBase, Topic};
use crate::core::message::{Context, Message, Sender};

const FOLLOW_UP_MARKERS: &[&str] = &[
    "what about", "how about", "tell me more", "more about", "explain more", "what else",
    "anything else", "and", "also", "what is", "what are", "can you", "could you", "would you",
    "can it", "does it", "is it", "what do", "how do", "why do", "where do", "when do",
];

/// `true` se a frase contém algum marcador de continuação.
pub fn is_follow_up_question(input: &str) -> bool {
    let lower = input.to_lowercase();
    FOLLOW_UP_MARKERS.iter().any(|m| lower.contains(m))
}

/// Sinais de referência calculados para um turno.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReferenceSignals {
    pub is_reference: bool,
    pub is_question_with_reference: bool,
}

impl ReferenceSignals {
    /// `true` se algum sinal permite usar o contexto.
    pub fn any(&self) -> bool {
        self.is_reference || self.is_question_with_reference
    }
}

/// Detector de pronomes e perguntas com pronome.
#[derive(Clone, Debug)]
pub struct ReferenceResolver {
    pronoun_re: Regex,
    question_re: Regex,
}

impl ReferenceResolver {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pronoun_re: Regex::new(r"(?i)\b(?:it|that|this|they|them|those|these|same|similar)\b")?,
            question_re: Regex::new(
                r"(?i)\b(?:what|how|why|where|when|which|who)\s+(?:is|are|does|do|can|could|will|would)\s+(?:it|that|this|they|them)\b",
            )?,
        })
    }

    /// Calcula os sinais; ambos exigem mensagens recentes.
    pub fn signals(&self, input: &str, context: &Context) -> ReferenceSignals {
        if !context.has_recent() {
            return ReferenceSignals::default();
        }
        ReferenceSignals {
            is_reference: self.pronoun_re.is_match(input),
            is_question_with_reference: self.question_re.is_match(input),
        }
    }
}

/// Tópicos mencionados em um conjunto de textos, do menos ao mais recente.
pub fn extract_topics_from_context<'kb, S: AsRef<str>>(
    texts: &[S],
    kb: &'kb KnowledgeBase,
) -> Vec<&'kb Topic> {
    let lowered: Vec<String> = texts.iter().map(|t| t.as_ref().to_lowercase()).collect();
    let mut found: Vec<((usize, usize), &Topic)> = kb
        .topics()
        .iter()
        .filter_map(|topic| {
            lowered
                .iter()
                .enumerate()
                .rev()
                .find_map(|(idx, text)| topic.last_mention_in(text).map(|at| (idx, at)))
                .map(|key| (key, topic))
        })
        .collect();
    found.sort_by_key(|(key, _)| *key);
    found.into_iter().map(|(_, topic)| topic).collect()
}

/// Tópicos do histórico, do menos ao mais recente, decididos pelo usuário.
///
/// Só as mensagens do usuário são consultadas; o texto do bot entra
/// apenas quando nenhuma delas cita um tópico.
pub fn extract_topics_from_history<'kb>(history: &[Message], kb: &'kb KnowledgeBase) -> Vec<&'kb Topic> {
    let user: Vec<&str> = history
        .iter()
        .filter(|m| m.sender == Sender::User)
        .map(|m| m.text.as_str())
        .collect();
    let topics = extract_topics_from_context(&user, kb);
    if !topics.is_empty() {
        return topics;
    }
    let all: Vec<&str> = history.iter().map(|m| m.text.as_str()).collect();
    extract_topics_from_context(&all, kb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emotion::{Emotion, EmotionKind};

    fn ctx(texts: &[&str]) -> Context {
        let history: Vec<Message> = texts.iter().map(|t| Message::user(*t, None)).collect();
        Context::from_history(&history)
    }

    fn names(topics: &[&Topic]) -> Vec<String> {
        topics.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn follow_up_markers_are_substrings() {
        assert!(is_follow_up_question("What about Python?"));
        assert!(is_follow_up_question("tell me more"));
        assert!(is_follow_up_question("does it scale"));
        assert!(!is_follow_up_question("bye"));
    }

    #[test]
    fn pronoun_needs_recent_messages() {
        let r = ReferenceResolver::new().unwrap();
        assert!(!r.signals("How does it work?", &Context::empty()).any());

        let s = r.signals("How does it work?", &ctx(&["Tell me about Docker"]));
        assert!(s.is_reference);
        assert!(s.is_question_with_reference);
    }

    #[test]
    fn pronoun_must_be_whole_word() {
        let r = ReferenceResolver::new().unwrap();
        let s = r.signals("Tell me about kitten", &ctx(&["hi"]));
        assert!(!s.any());
    }

    #[test]
    fn question_with_reference_needs_adjacent_words() {
        let r = ReferenceResolver::new().unwrap();
        let c = ctx(&["hi"]);
        assert!(r.signals("what is that", &c).is_question_with_reference);
        assert!(!r.signals("what really is that", &c).is_question_with_reference);
    }

    #[test]
    fn topics_are_ordered_by_recency() {
        let kb = KnowledgeBase::builtin();
        let texts = ["I love history", "now tell me about docker"];
        assert_eq!(names(&extract_topics_from_context(&texts, &kb)), vec!["history", "dev_tools"]);

        let reversed = ["tell me about docker", "and history too"];
        assert_eq!(
            names(&extract_topics_from_context(&reversed, &kb)),
            vec!["dev_tools", "history"]
        );
    }

    #[test]
    fn later_offset_wins_within_a_message() {
        let kb = KnowledgeBase::builtin();
        let texts = ["docker first, then history"];
        let topics = extract_topics_from_context(&texts, &kb);
        assert_eq!(topics.last().map(|t| t.name.as_str()), Some("history"));
    }

    #[test]
    fn no_topics_in_small_talk() {
        let kb = KnowledgeBase::builtin();
        assert!(extract_topics_from_context(&["hello there", "bye"], &kb).is_empty());
    }

    // ─── Histórico ───────────────────────────────────────────

    fn bot(text: &str) -> Message {
        Message::assistant(text, Emotion::new(EmotionKind::Enthusiastic, "🐳"))
    }

    #[test]
    fn bot_text_does_not_override_the_user_topic() {
        let kb = KnowledgeBase::builtin();
        let history = vec![
            Message::user("Tell me about Docker", None),
            bot("Containers are used by Netflix; see also history and health apps."),
        ];
        let topics = extract_topics_from_history(&history, &kb);
        assert_eq!(names(&topics), vec!["dev_tools"]);
    }

    #[test]
    fn bot_text_is_used_when_the_user_named_nothing() {
        let kb = KnowledgeBase::builtin();
        let history = vec![
            Message::user("surprise me", None),
            bot("Did you know the roman empire shaped modern history?"),
        ];
        let topics = extract_topics_from_history(&history, &kb);
        assert_eq!(topics.last().map(|t| t.name.as_str()), Some("history"));
    }
}
