//! # Extrator de Conceitos
//!
//! Um **conceito** é um token que sobrevive à remoção de stopwords: o
//! substantivo ou tema sobre o qual o usuário está perguntando.
//!
//! ```text
//! "Tell me about Docker containers"
//!   ├── tokenize     → [tell, me, about, docker, containers]
//!   └── filtros      → [docker, containers]
//! ```
//!
//! ## Filtros
//!
//! - tokens com 2 caracteres ou menos
//! - stopwords (comparadas já com stemming: `does` → `doe`)
//! - fragmentos de stopwords (`pleas`, `hat`)
//!
//! A ordem é preservada e duplicatas são mantidas.

use super::tokenizer::{stem, tokenize};

/// Palavras interrogativas, artigos, verbos de consulta e saudações.
pub const STOPWORDS: &[&str] = &[
    "what", "is", "are", "the", "a", "an", "how", "why", "when", "where", "who", "which", "can",
    "could", "would", "should", "tell", "me", "about", "explain", "describe", "do", "does", "did",
    "will", "this", "that", "these", "those", "it", "its", "pls", "please", "hey", "hi", "hello",
];

/// Extrai os conceitos de uma frase.
pub fn extract_concepts(input: &str) -> Vec<String> {
    tokenize(input)
        .into_iter()
        .filter(|token| is_concept(token))
        .collect()
}

fn is_concept(token: &str) -> bool {
    if token.chars().count() <= 2 {
        return false;
    }
    !STOPWORDS
        .iter()
        .any(|sw| stem(sw) == token || sw.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_question_words_and_keeps_topics() {
        assert_eq!(
            extract_concepts("Tell me about Docker containers"),
            vec!["docker", "containers"]
        );
    }

    #[test]
    fn stopwords_are_compared_after_stemming() {
        assert_eq!(extract_concepts("How does this work?"), vec!["work"]);
    }

    #[test]
    fn drops_short_tokens_and_fragments() {
        assert!(extract_concepts("is it ai?").is_empty());
        assert!(extract_concepts("please hello").is_empty());
    }

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(
            extract_concepts("python and python"),
            vec!["python", "and", "python"]
        );
    }

    #[test]
    fn empty_input_has_no_concepts() {
        assert!(extract_concepts("").is_empty());
        assert!(extract_concepts("?? !!").is_empty());
    }
}
