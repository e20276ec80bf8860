//! # Classificador de Tipo de Pergunta
//!
//! Classificador simples pela palavra interrogativa, usado pelos
//! handlers de formato de pergunta e pelo fallback tipado da política.
//!
//! Uma palavra interrogativa conta se abre a frase ou se aparece seguida
//! de espaço em qualquer posição. A primeira da lista abaixo que casar
//! define o tipo.

use std::fmt;

/// Tipo de pergunta, pela palavra interrogativa dominante.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionType {
    What,
    How,
    Why,
    When,
    Where,
    Who,
    Which,
    General,
}

const ORDER: &[(&str, QuestionType)] = &[
    ("what", QuestionType::What),
    ("how", QuestionType::How),
    ("why", QuestionType::Why),
    ("when", QuestionType::When),
    ("where", QuestionType::Where),
    ("who", QuestionType::Who),
    ("which", QuestionType::Which),
];

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::What => "what",
            Self::How => "how",
            Self::Why => "why",
            Self::When => "when",
            Self::Where => "where",
            Self::Who => "who",
            Self::Which => "which",
            Self::General => "general",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifica a pergunta pela palavra interrogativa.
pub fn detect_question_type(input: &str) -> QuestionType {
    let lower = input.trim().to_lowercase();
    ORDER
        .iter()
        .find(|(word, _)| lower.starts_with(word) || followed_by_space(&lower, word))
        .map(|&(_, kind)| kind)
        .unwrap_or(QuestionType::General)
}

fn followed_by_space(text: &str, word: &str) -> bool {
    text.match_indices(word).any(|(at, _)| {
        text[at + word.len()..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_word_decides() {
        assert_eq!(detect_question_type("What is rust?"), QuestionType::What);
        assert_eq!(detect_question_type("how do I start"), QuestionType::How);
        assert_eq!(detect_question_type("Why?"), QuestionType::Why);
        assert_eq!(detect_question_type("when"), QuestionType::When);
        assert_eq!(detect_question_type("Where is it"), QuestionType::Where);
        assert_eq!(detect_question_type("who invented it"), QuestionType::Who);
        assert_eq!(detect_question_type("which one"), QuestionType::Which);
    }

    #[test]
    fn inner_word_followed_by_space_counts() {
        assert_eq!(detect_question_type("tell me how it works"), QuestionType::How);
        assert_eq!(detect_question_type("so, what else"), QuestionType::What);
    }

    #[test]
    fn what_wins_over_how() {
        assert_eq!(detect_question_type("how and what now"), QuestionType::What);
    }

    #[test]
    fn statements_are_general() {
        assert_eq!(detect_question_type("I like pizza"), QuestionType::General);
        assert_eq!(detect_question_type(""), QuestionType::General);
        assert_eq!(detect_question_type("somehow"), QuestionType::General);
    }
}
