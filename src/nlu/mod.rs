//! # Pipeline NLU — Compreensão de Linguagem Natural
//!
//! O [`NluPipeline`] calcula, uma única vez por turno, todos os sinais que
//! a política de diálogo consome: emoção, meta-intenção, conceitos,
//! consulta de tópicos, sinais de referência e tipo de pergunta.
//!
//! ## Fluxo de Processamento
//!
//! ```text
//! Frase do usuário
//!   ├── 0. (opcional) normalizar gírias          (slang)
//!   ├── 1. NFC + lowercase + tokenize + stem     (tokenizer)
//!   ├── 2. Conceitos sem stopwords               (extractor)
//!   ├── 3. Expansão por sinônimos                (synonyms)
//!   ├── 4. Humor                                 (emotion)
//!   ├── 5. Meta-intenção sobre o assistente      (intent)
//!   ├── 6. Pronomes / continuação                (reference)
//!   └── 7. Tipo de pergunta                      (question)
//! ```
//!
//! ## Sub-módulos
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`tokenizer`] | Normalização, tokens e stemming |
//! | [`extractor`] | Conceitos (tokens sem stopwords) |
//! | [`synonyms`] | Tabela de sinônimos e expansão |
//! | [`emotion`] | Detector de humor |
//! | [`intent`] | Meta-intenções (nome, capacidades, criador, propósito) |
//! | [`question`] | Tipo de pergunta (what/how/why/...) |
//! | [`reference`] | Referências ao histórico e tópicos do contexto |
//! | [`slang`] | Normalizador de linguagem casual |

pub mod emotion;
pub mod extractor;
pub mod intent;
pub mod question;
pub mod reference;
pub mod slang;
pub mod synonyms;
pub mod tokenizer;

use std::borrow::Cow;

use crate::core::chooser::Chooser;
use crate::core::emotion::Emotion;
use crate::core::knowledge_base::TopicQuery;
use crate::core::message::Context;

use emotion::EmotionDetector;
use extractor::extract_concepts;
use intent::{IntentMatch, IntentRules};
use question::{detect_question_type, QuestionType};
use reference::{ReferenceResolver, ReferenceSignals};
use slang::SlangNormalizer;
use synonyms::SynonymTable;
use tokenizer::simplify;

/// Todos os sinais de um turno, calculados pelo pipeline.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Frase aparada (e normalizada, se o normalizador estiver ligado).
    pub input: String,
    /// Frase digitada, antes das gírias, em minúsculas sem pontuação e
    /// com espaços colapsados. As frases de saída casam contra ela.
    pub simplified: String,
    pub emotion: Emotion,
    pub intent: IntentMatch,
    pub concepts: Vec<String>,
    pub query: TopicQuery,
    pub references: ReferenceSignals,
    pub question_type: QuestionType,
}

impl Analysis {
    /// Primeiro conceito extraído, se houver.
    pub fn main_concept(&self) -> Option<&str> {
        self.concepts.first().map(String::as_str)
    }
}

/// Pipeline NLU com tabelas e regexes compiladas uma única vez.
#[derive(Clone, Debug)]
pub struct NluPipeline {
    synonyms: SynonymTable,
    emotions: EmotionDetector,
    intents: IntentRules,
    references: ReferenceResolver,
    slang: Option<SlangNormalizer>,
}

impl NluPipeline {
    /// Cria o pipeline; `normalize_slang` liga a etapa de gírias.
    pub fn new(normalize_slang: bool) -> Result<Self, regex::Error> {
        let slang = if normalize_slang {
            Some(SlangNormalizer::builtin()?)
        } else {
            None
        };
        Ok(Self {
            synonyms: SynonymTable::builtin(),
            emotions: EmotionDetector::new(),
            intents: IntentRules::builtin()?,
            references: ReferenceResolver::new()?,
            slang,
        })
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Aplica a normalização de gírias, quando ligada.
    pub fn preprocess<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match &self.slang {
            Some(slang) => Cow::Owned(slang.normalize_casual_language(input)),
            None => Cow::Borrowed(input),
        }
    }

    /// Humor de uma frase, sem o resto da análise.
    pub fn detect_emotion(&self, input: &str, chooser: &mut dyn Chooser) -> Emotion {
        self.emotions.detect(&self.preprocess(input.trim()), chooser)
    }

    /// Analisa uma frase (não vazia) no contexto dado.
    pub fn analyze(&self, input: &str, context: &Context, chooser: &mut dyn Chooser) -> Analysis {
        let raw = input.trim();
        let simplified = simplify(raw)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let input = self.preprocess(raw).into_owned();
        let analysis = Analysis {
            emotion: self.emotions.detect(&input, chooser),
            intent: self.intents.detect_intent(&input),
            concepts: extract_concepts(&input),
            query: TopicQuery::new(&input, &self.synonyms),
            references: self.references.signals(&input, context),
            question_type: detect_question_type(&input),
            simplified,
            input,
        };
        tracing::debug!(
            emotion = %analysis.emotion.kind,
            intent = ?analysis.intent.intent,
            concepts = ?analysis.concepts,
            reference = analysis.references.any(),
            "Frase analisada"
        );
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chooser::FixedChooser;
    use crate::core::emotion::EmotionKind;
    use crate::core::message::Message;
    use intent::Intent;

    #[test]
    fn analyze_collects_all_signals() {
        let nlu = NluPipeline::new(false).unwrap();
        let a = nlu.analyze("  What is React?  ", &Context::empty(), &mut FixedChooser(0));
        assert_eq!(a.input, "What is React?");
        assert_eq!(a.simplified, "what is react");
        assert_eq!(a.emotion.kind, EmotionKind::Curious);
        assert_eq!(a.intent.intent, Intent::Question);
        assert_eq!(a.main_concept(), Some("react"));
        assert_eq!(a.question_type, QuestionType::What);
        assert!(!a.references.any());
        assert_eq!(
            nlu.detect_emotion("What is React?", &mut FixedChooser(0)),
            a.emotion
        );
    }

    #[test]
    fn references_use_context() {
        let nlu = NluPipeline::new(false).unwrap();
        let history = vec![Message::user("Tell me about Docker", None)];
        let a = nlu.analyze(
            "How does it work?",
            &Context::from_history(&history),
            &mut FixedChooser(0),
        );
        assert!(a.references.is_question_with_reference);
    }

    #[test]
    fn simplified_keeps_the_typed_words() {
        let nlu = NluPipeline::new(true).unwrap();
        let a = nlu.analyze("Gotta go!", &Context::empty(), &mut FixedChooser(0));
        assert_eq!(a.input, "got to go!");
        assert_eq!(a.simplified, "gotta go");
    }

    #[test]
    fn slang_stage_is_optional() {
        let off = NluPipeline::new(false).unwrap();
        assert_eq!(off.preprocess("can u help"), "can u help");
        let on = NluPipeline::new(true).unwrap();
        assert_eq!(on.preprocess("can u help"), "can you help");
    }
}
