//! # Detector de Meta-Intenções
//!
//! Captura as poucas perguntas **sobre o próprio assistente** antes que o
//! casamento genérico de tópicos as desvie para um domínio qualquer.
//!
//! | Intent | Exemplo |
//! |--------|---------|
//! | [`Name`](Intent::Name) | "what's your name?" |
//! | [`Capabilities`](Intent::Capabilities) | "what can you do?" |
//! | [`Creator`](Intent::Creator) | "who made you?" |
//! | [`Purpose`](Intent::Purpose) | "what is your purpose?" |
//! | [`Question`](Intent::Question) | pergunta genérica com conceitos |
//! | [`Unknown`](Intent::Unknown) | nada reconhecido |
//!
//! As regras são testadas contra o texto cru (sem tokenizar), na ordem de
//! declaração; a primeira regra com algum padrão casando vence.

use regex::Regex;

use super::extractor::extract_concepts;
use super::tokenizer::words;

/// Palavras que caracterizam uma pergunta genérica.
const GENERIC_QUESTION_WORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "which", "can", "could", "would", "should",
];

/// Meta-intenção detectada.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Name,
    Capabilities,
    Creator,
    Purpose,
    Question,
    Unknown,
}

/// Confiança da detecção.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Resultado da detecção de intenção.
#[derive(Clone, Debug, PartialEq)]
pub struct IntentMatch {
    pub intent: Intent,
    pub confidence: Confidence,
    /// Resposta canônica da regra (apenas meta-intenções).
    pub response: Option<&'static str>,
    /// Conceitos extraídos (apenas [`Intent::Question`]).
    pub concepts: Vec<String>,
}

impl IntentMatch {
    fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            confidence: Confidence::Low,
            response: None,
            concepts: Vec::new(),
        }
    }

    /// `true` se a intenção é `intent` com confiança alta.
    pub fn is(&self, intent: Intent) -> bool {
        self.intent == intent && self.confidence == Confidence::High
    }
}

/// Regra estática: padrões + resposta canônica.
#[derive(Clone, Debug)]
pub struct IntentRule {
    pub intent: Intent,
    pub patterns: Vec<Regex>,
    pub response: &'static str,
}

/// Conjunto ordenado de regras de meta-intenção.
#[derive(Clone, Debug)]
pub struct IntentRules {
    rules: Vec<IntentRule>,
}

pub const NAME_RESPONSE: &str = "I'm Mini Chatbot! A friendly AI assistant built with Natural Language Processing. I'm here to help, chat, and learn with you. Nice to meet you! 🤖";

pub const CAPABILITIES_RESPONSE: &str = "I can help you with:\n• Answering questions on many topics\n• Discussing programming and technology\n• Having friendly conversations\n• Providing information and insights\n• Responding to your emotions\n• Explaining AI tools and frameworks\n• Discussing cloud platforms and databases\n\nWhat would you like to explore? 💡";

pub const CREATOR_RESPONSE: &str = "I was created as part of an internship project, but I've been enhanced with NLP, emotional intelligence, and extensive knowledge about technologies and AI tools! I'm constantly learning and growing! 🚀";

pub const PURPOSE_RESPONSE: &str = "My purpose is to be a helpful, friendly AI companion! I'm here to:\n• Answer your questions\n• Provide information and insights\n• Have meaningful conversations\n• Support your learning journey\n• Make technology more accessible\n\nI'm always here to help! 😊";

const RULES: &[(Intent, &[&str], &str)] = &[
    (
        Intent::Name,
        &[
            r"(?:what|who|tell me).*(?:your|you).*(?:name|are you|identity)",
            r"(?:who|what).*are you",
            r"(?:introduce|introduction).*yourself",
            r"(?:what|who).*call.*you",
        ],
        NAME_RESPONSE,
    ),
    (
        Intent::Capabilities,
        &[
            r"(?:what|tell me).*(?:can you|you can|you do|you're capable)",
            r"(?:what|tell me).*(?:your capabilities|your abilities|your skills|your features)",
            r"(?:what|tell me).*(?:can.*you.*do|you.*can.*do)",
            r"(?:your|you).*(?:capabilities|abilities|skills|features)",
            r"(?:what.*are.*you.*good.*at|what.*do.*you.*know)",
        ],
        CAPABILITIES_RESPONSE,
    ),
    (
        Intent::Creator,
        &[
            r"(?:who|what).*(?:create|make|build|develop|design).*(?:you|this|chatbot)",
            r"(?:where|how).*(?:come from|originate|start)",
            r"(?:your|you).*(?:creator|developer|maker|builder)",
        ],
        CREATOR_RESPONSE,
    ),
    (
        Intent::Purpose,
        &[
            r"(?:what|why).*(?:purpose|goal|aim|objective|mission)",
            r"(?:why|what).*(?:exist|here|made for)",
            r"(?:what|your).*(?:job|role|function)",
        ],
        PURPOSE_RESPONSE,
    ),
];

impl IntentRules {
    /// Compila as regras embutidas (padrões sem distinção de caixa).
    pub fn builtin() -> Result<Self, regex::Error> {
        let mut rules = Vec::with_capacity(RULES.len());
        for &(intent, patterns, response) in RULES {
            let patterns = patterns
                .iter()
                .map(|p| Regex::new(&format!("(?i){p}")))
                .collect::<Result<Vec<_>, _>>()?;
            rules.push(IntentRule {
                intent,
                patterns,
                response,
            });
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Detecta a meta-intenção de uma frase.
    pub fn detect_intent(&self, input: &str) -> IntentMatch {
        for rule in &self.rules {
            if rule.patterns.iter().any(|p| p.is_match(input)) {
                return IntentMatch {
                    intent: rule.intent,
                    confidence: Confidence::High,
                    response: Some(rule.response),
                    concepts: Vec::new(),
                };
            }
        }

        let has_question_word = words(input)
            .iter()
            .any(|w| GENERIC_QUESTION_WORDS.contains(&w.as_str()));
        if has_question_word {
            let concepts = extract_concepts(input);
            if !concepts.is_empty() {
                return IntentMatch {
                    intent: Intent::Question,
                    confidence: Confidence::Medium,
                    response: None,
                    concepts,
                };
            }
        }
        IntentMatch::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(input: &str) -> IntentMatch {
        IntentRules::builtin().unwrap().detect_intent(input)
    }

    #[test]
    fn all_patterns_compile() {
        let rules = IntentRules::builtin().unwrap();
        assert_eq!(rules.rules().len(), 4);
    }

    #[test]
    fn detects_name() {
        let m = detect("What is your name?");
        assert!(m.is(Intent::Name));
        assert_eq!(m.response, Some(NAME_RESPONSE));
        assert!(detect("Who are you").is(Intent::Name));
        assert!(detect("please introduce yourself").is(Intent::Name));
    }

    #[test]
    fn detects_capabilities() {
        assert!(detect("What can you do?").is(Intent::Capabilities));
        assert!(detect("tell me your skills").is(Intent::Capabilities));
    }

    #[test]
    fn detects_creator_and_purpose() {
        assert!(detect("Who created you?").is(Intent::Creator));
        assert!(detect("What is your purpose?").is(Intent::Purpose));
    }

    #[test]
    fn generic_question_carries_concepts() {
        let m = detect("What is React?");
        assert_eq!(m.intent, Intent::Question);
        assert_eq!(m.confidence, Confidence::Medium);
        assert_eq!(m.concepts, vec!["react"]);
        assert!(m.response.is_none());
    }

    #[test]
    fn question_without_concepts_is_unknown() {
        let m = detect("what is it?");
        assert_eq!(m.intent, Intent::Unknown);
        assert_eq!(m.confidence, Confidence::Low);
    }

    #[test]
    fn statement_is_unknown() {
        assert_eq!(detect("docker rocks").intent, Intent::Unknown);
    }
}
