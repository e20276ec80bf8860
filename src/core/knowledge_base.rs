//! # KnowledgeBase — Tópicos, Palavras-chave e Pontuação
//!
//! A [`KnowledgeBase`] é uma tabela **estática e imutável** de [`Topic`]s,
//! cada um com palavras-chave e um pool de respostas aprovadas. É criada
//! uma vez na inicialização e injetada na política de diálogo.
//!
//! ## Pontuação Multi-Sinal
//!
//! Para cada tópico, soma-se por palavra-chave:
//!
//! | Sinal | Pontos | Condição |
//! |-------|--------|----------|
//! | Frase exata | +10 | palavra-chave ocorre no texto ([`mentions`]) |
//! | Conceito | +5 | algum conceito expandido contém o radical da palavra-chave, ou vice-versa |
//! | Token | +3 | algum token é igual ao radical da palavra-chave |
//! | Parcial | +1 | alguma palavra começa com o prefixo `min(4, len-2)` da palavra-chave |
//!
//! Vence o tópico com a maior pontuação **estritamente**, se ≥ 1. Empates
//! ficam com o primeiro tópico na ordem de declaração. A ordem dos pesos
//! (frase > conceito > token > parcial) é um compromisso de projeto.
//!
//! ## Ocorrência de Palavra-chave
//!
//! Palavras-chave com 4+ caracteres casam como substring do texto em
//! minúsculas; as mais curtas (`ai`, `js`, `aws`) exigem palavra inteira.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::chooser::{pick, Chooser};
use super::topics::BUILTIN_TOPICS;
use crate::nlu::extractor::extract_concepts;
use crate::nlu::reference::is_follow_up_question;
use crate::nlu::synonyms::{overlaps, SynonymTable};
use crate::nlu::tokenizer::{normalize, stem, tokenize, words};

const EXACT_POINTS: u32 = 10;
const CONCEPT_POINTS: u32 = 5;
const TOKEN_POINTS: u32 = 3;
const PARTIAL_POINTS: u32 = 1;

/// Palavras-chave com menos caracteres que isso exigem palavra inteira.
const SUBSTRING_MIN_LEN: usize = 4;
/// Tamanho mínimo de prefixo (e de radical contido) para sinais fuzzy.
const MIN_FUZZY_LEN: usize = 3;

/// Um tópico da base: nome, rótulo de exibição, palavras-chave e respostas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub label: String,
    pub keywords: Vec<String>,
    pub responses: Vec<String>,
}

impl Topic {
    /// Palavras-chave em minúsculas, sem repetição, na ordem original.
    pub fn lookup_keywords(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| seen.insert(k.clone()))
            .collect()
    }

    /// Sorteia uma resposta do pool do tópico.
    pub fn pick_response(&self, chooser: &mut dyn Chooser) -> &str {
        pick(&self.responses, chooser).as_str()
    }

    /// Pontuação do tópico para uma consulta (ver tabela do módulo).
    pub fn score(&self, query: &TopicQuery) -> u32 {
        self.lookup_keywords()
            .iter()
            .map(|kw| keyword_score(kw, query))
            .sum()
    }

    /// `true` se alguma palavra-chave ocorre no texto (já em minúsculas).
    pub fn mentioned_in(&self, text_lower: &str) -> bool {
        self.lookup_keywords().iter().any(|kw| mentions(text_lower, kw))
    }

    /// Posição da última ocorrência de qualquer palavra-chave no texto.
    pub fn last_mention_in(&self, text_lower: &str) -> Option<usize> {
        self.lookup_keywords()
            .iter()
            .filter_map(|kw| last_mention(text_lower, kw))
            .max()
    }
}

/// Sinais pré-computados de uma frase para a pontuação de tópicos.
#[derive(Clone, Debug)]
pub struct TopicQuery {
    /// Texto normalizado (NFC + minúsculas).
    pub lower: String,
    /// Palavras sem stemming.
    pub words: Vec<String>,
    /// Tokens com stemming.
    pub tokens: Vec<String>,
    /// Conceitos expandidos por sinônimos.
    pub expanded: BTreeSet<String>,
}

impl TopicQuery {
    pub fn new(input: &str, synonyms: &SynonymTable) -> Self {
        Self {
            lower: normalize(input),
            words: words(input),
            tokens: tokenize(input),
            expanded: synonyms.expand_concepts(&extract_concepts(input)),
        }
    }
}

/// Base de conhecimento estática.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KnowledgeBase {
    topics: Vec<Topic>,
}

impl KnowledgeBase {
    /// Cria uma base a partir de tópicos arbitrários.
    ///
    /// Tópicos sem palavras-chave ou sem respostas são descartados.
    pub fn new(topics: Vec<Topic>) -> Self {
        let topics = topics
            .into_iter()
            .filter(|t| {
                let valid = !t.keywords.is_empty() && !t.responses.is_empty();
                if !valid {
                    tracing::warn!(topic = %t.name, "Tópico sem keywords ou respostas, ignorado");
                }
                valid
            })
            .collect();
        Self { topics }
    }

    /// Base embutida com os 14 tópicos suportados.
    pub fn builtin() -> Self {
        let topics = BUILTIN_TOPICS
            .iter()
            .map(|t| Topic {
                name: t.name.to_string(),
                label: t.label.to_string(),
                keywords: t.keywords.iter().map(|k| k.to_string()).collect(),
                responses: t.responses.iter().map(|r| r.to_string()).collect(),
            })
            .collect();
        Self::new(topics)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Tópico com a maior pontuação estritamente, se ≥ 1.
    pub fn find_best_matching_topic(&self, query: &TopicQuery) -> Option<&Topic> {
        let mut best: Option<(&Topic, u32)> = None;
        for topic in &self.topics {
            let score = topic.score(query);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((topic, score));
            }
        }
        if let Some((topic, score)) = best {
            tracing::debug!(topic = %topic.name, score, "Melhor tópico");
        }
        best.map(|(topic, _)| topic)
    }

    /// Varrimento literal: primeiro tópico com palavra-chave no texto ou
    /// com radical contido em algum token.
    pub fn scan_keywords(&self, query: &TopicQuery) -> Option<&Topic> {
        self.topics.iter().find(|topic| {
            topic.lookup_keywords().iter().any(|kw| {
                let kw_stem = stem(kw);
                mentions(&query.lower, kw)
                    || query.tokens.iter().any(|t| {
                        *t == kw_stem
                            || (kw_stem.chars().count() >= MIN_FUZZY_LEN && t.contains(&kw_stem))
                    })
            })
        })
    }

    /// Resposta da base para uma frase.
    ///
    /// Com tópicos de contexto e frase de continuação, reaproveita o tópico
    /// mais recente; senão pontua todos os tópicos e, sem vencedor, cai no
    /// varrimento literal.
    pub fn get_knowledge_base_response(
        &self,
        input: &str,
        query: &TopicQuery,
        context_topics: &[&Topic],
        chooser: &mut dyn Chooser,
    ) -> Option<String> {
        if let Some(last) = context_topics.last() {
            if is_follow_up_question(input) {
                tracing::debug!(topic = %last.name, "Continuando tópico do contexto");
                return Some(follow_up_response(last, chooser));
            }
        }
        let topic = self
            .find_best_matching_topic(query)
            .or_else(|| self.scan_keywords(query))?;
        Some(topic.pick_response(chooser).to_string())
    }
}

fn follow_up_response(topic: &Topic, chooser: &mut dyn Chooser) -> String {
    let response = topic.pick_response(chooser).to_string();
    let label = &topic.label;
    match chooser.index(3) {
        0 => format!("Continuing on {label}... {response}"),
        1 => format!("Great question! Regarding {label}, {}", lowercase_first(&response)),
        _ => format!("Let me tell you more about {label}. {response}"),
    }
}

fn keyword_score(kw: &str, query: &TopicQuery) -> u32 {
    let kw_stem = stem(kw);
    let mut score = 0;
    if mentions(&query.lower, kw) {
        score += EXACT_POINTS;
    }
    if query.expanded.iter().any(|c| overlaps(c, &kw_stem)) {
        score += CONCEPT_POINTS;
    }
    if query.tokens.iter().any(|t| *t == kw_stem) {
        score += TOKEN_POINTS;
    }
    if let Some(prefix) = partial_prefix(kw) {
        if query.words.iter().any(|w| w.starts_with(prefix)) {
            score += PARTIAL_POINTS;
        }
    }
    score
}

/// Prefixo de `min(4, len-2)` caracteres, se tiver ao menos 3.
fn partial_prefix(kw: &str) -> Option<&str> {
    let len = kw.chars().count();
    let n = SUBSTRING_MIN_LEN.min(len.saturating_sub(2));
    if n < MIN_FUZZY_LEN {
        return None;
    }
    kw.char_indices().nth(n).map(|(at, _)| &kw[..at])
}

/// `true` se a palavra-chave ocorre no texto (já em minúsculas).
pub fn mentions(text_lower: &str, keyword: &str) -> bool {
    last_mention(text_lower, keyword).is_some()
}

/// Posição (em bytes) da última ocorrência da palavra-chave no texto.
pub fn last_mention(text_lower: &str, keyword: &str) -> Option<usize> {
    if keyword.is_empty() {
        return None;
    }
    if keyword.chars().count() >= SUBSTRING_MIN_LEN {
        return text_lower.rfind(keyword);
    }
    text_lower
        .rmatch_indices(keyword)
        .map(|(at, _)| at)
        .find(|&at| is_whole_word(text_lower, at, keyword.len()))
}

fn is_whole_word(text: &str, at: usize, len: usize) -> bool {
    let before = text[..at].chars().next_back();
    let after = text[at + len..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// `true` se alguma palavra-chave ocorre no texto ou tem radical igual a um token.
pub fn contains_keywords(query: &TopicQuery, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| {
        let kw = kw.to_lowercase();
        mentions(&query.lower, &kw) || query.tokens.contains(&stem(&kw))
    })
}

/// Baixa apenas o primeiro caractere.
pub fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chooser::FixedChooser;
    use proptest::prelude::*;

    fn query(input: &str) -> TopicQuery {
        TopicQuery::new(input, &SynonymTable::builtin())
    }

    fn best(input: &str) -> Option<String> {
        KnowledgeBase::builtin()
            .find_best_matching_topic(&query(input))
            .map(|t| t.name.clone())
    }

    // ─── Invariantes da base ──────────────────────────────────

    #[test]
    fn builtin_has_fourteen_valid_topics_in_order() {
        let kb = KnowledgeBase::builtin();
        let names: Vec<_> = kb.topics().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "programming", "ai_tools", "ml_frameworks", "cloud_platforms", "dev_tools",
                "databases", "technology", "science", "general", "history", "health", "business",
                "culture", "nature",
            ]
        );
        for t in kb.topics() {
            assert!(!t.keywords.is_empty() && !t.responses.is_empty());
        }
    }

    #[test]
    fn invalid_topics_are_dropped() {
        let kb = KnowledgeBase::new(vec![Topic {
            name: "empty".into(),
            label: "Empty".into(),
            keywords: vec![],
            responses: vec!["x".into()],
        }]);
        assert!(kb.topics().is_empty());
    }

    #[test]
    fn keywords_are_deduplicated_case_insensitively() {
        let t = Topic {
            name: "t".into(),
            label: "T".into(),
            keywords: vec!["Rust".into(), "rust".into(), "cargo".into()],
            responses: vec!["r".into()],
        };
        assert_eq!(t.lookup_keywords(), vec!["rust", "cargo"]);
    }

    // ─── mentions ─────────────────────────────────────────────

    #[test]
    fn short_keywords_need_whole_words() {
        assert!(mentions("i like ai", "ai"));
        assert!(!mentions("explain this", "ai"));
        assert!(mentions("is aws good?", "aws"));
        assert!(mentions("i code in c++ daily", "c++"));
        assert!(mentions("the databases", "database"));
    }

    #[test]
    fn last_mention_finds_rightmost() {
        assert_eq!(last_mention("docker and docker", "docker"), Some(11));
        assert_eq!(last_mention("ai, then ai", "ai"), Some(9));
        assert_eq!(last_mention("nothing", "ai"), None);
    }

    // ─── Pontuação ────────────────────────────────────────────

    #[test]
    fn exact_hits_outweigh_fuzzy_ones() {
        let kb = KnowledgeBase::builtin();
        let history = kb.topic("history").unwrap();
        let exact = history.score(&query("history"));
        let partial = history.score(&query("histo"));
        assert!(exact > partial);
        assert!(exact >= EXACT_POINTS);
    }

    #[test]
    fn picks_expected_topics() {
        assert_eq!(best("history of the roman empire").as_deref(), Some("history"));
        assert_eq!(best("I want to use redis and mongodb").as_deref(), Some("databases"));
        assert_eq!(best("best hospital diet").as_deref(), Some("health"));
    }

    #[test]
    fn gibberish_matches_nothing() {
        assert_eq!(best("asdkjasdlkj random gibberish"), None);
        assert!(KnowledgeBase::builtin()
            .scan_keywords(&query("asdkjasdlkj random gibberish"))
            .is_none());
    }

    #[test]
    fn partial_prefix_rules() {
        assert_eq!(partial_prefix("history"), Some("hist"));
        assert_eq!(partial_prefix("java"), None);
        assert_eq!(partial_prefix("redis"), Some("red"));
        assert_eq!(partial_prefix("ai"), None);
    }

    // ─── Respostas ────────────────────────────────────────────

    #[test]
    fn pick_response_indexes_the_pool() {
        let kb = KnowledgeBase::builtin();
        let science = kb.topic("science").unwrap();
        for (i, expected) in science.responses.iter().enumerate() {
            assert_eq!(science.pick_response(&mut FixedChooser(i)), expected.as_str());
        }
    }

    #[test]
    fn response_comes_from_matched_pool() {
        let kb = KnowledgeBase::builtin();
        let history = kb.topic("history").unwrap();
        for i in 0..history.responses.len() {
            let text = kb
                .get_knowledge_base_response(
                    "history of the roman empire",
                    &query("history of the roman empire"),
                    &[],
                    &mut FixedChooser(i),
                )
                .unwrap();
            assert_eq!(text, history.responses[i]);
        }
    }

    #[test]
    fn follow_up_reuses_last_context_topic() {
        let kb = KnowledgeBase::builtin();
        let docker = kb.topic("dev_tools").unwrap();
        let science = kb.topic("science").unwrap();
        let text = kb
            .get_knowledge_base_response(
                "tell me more",
                &query("tell me more"),
                &[science, docker],
                &mut FixedChooser(0),
            )
            .unwrap();
        assert!(text.starts_with("Continuing on Developer Tools..."));
    }

    #[test]
    fn contains_keywords_uses_stems() {
        assert!(contains_keywords(&query("What is React?"), &["react"]));
        assert!(contains_keywords(&query("any databases?"), &["database"]));
        assert!(!contains_keywords(&query("which one"), &["hi"]));
    }

    #[test]
    fn lowercase_first_only_touches_first_char() {
        assert_eq!(lowercase_first("Docker Rocks"), "docker Rocks");
        assert_eq!(lowercase_first(""), "");
    }

    proptest! {
        #[test]
        fn adding_a_keyword_never_lowers_score(
            base in "[a-z ]{0,30}",
            topic_idx in 0usize..14,
            kw_idx in 0usize..12,
        ) {
            let kb = KnowledgeBase::builtin();
            let topic = &kb.topics()[topic_idx];
            let keywords = topic.lookup_keywords();
            let kw = &keywords[kw_idx % keywords.len()];
            let before = topic.score(&query(&base));
            let after = topic.score(&query(&format!("{base} {kw}")));
            prop_assert!(after >= before);
        }
    }
}
