//! # Orquestrador — A Política de Diálogo
//!
//! O [`Orchestrator`] transforma `(frase, contexto)` em `(texto, emoção)`.
//! É uma **cascata de prioridades**: as regras são avaliadas em ordem e a
//! primeira que se aplica responde; nenhuma regra posterior é consultada.
//!
//! ## A Cascata
//!
//! ```text
//! Frase do usuário ─► NluPipeline::analyze ─► Turn
//!   │
//!   ├──  1. Empty              entrada vazia → convite neutro
//!   ├──  2. ContextReference   pronome + assunto citado pelo usuário
//!   ├──  3. Farewell           "bye", "gtg", ... (frase exata)
//!   ├──  4. Greeting           saudação conforme a hora
//!   ├──  5. Comfort            tristeza intensa → empatia 💙
//!   ├──  6. Cheer              alegria intensa
//!   ├──  7. Identity           meta-intent `name`
//!   ├──  8. Technology         catálogo de tecnologias nomeadas
//!   ├──  9. KnowledgeBase      pontuação de tópicos (contexto só com referência)
//!   ├── 10. AssistantIntent    capacidades / criador / propósito
//!   ├── 11. LegacyFaq          palavras-chave de identidade e criador
//!   ├──     Help, Compliment, Clock, Calendar
//!   ├── 12. QuestionShape      comparação, "how does X work", "best for"
//!   ├── 13. HistoryContinuation tópico no histórico recente e na frase
//!   ├── 14. TopicScore         melhor tópico com pontuação ≥ 1
//!   ├── 15. TypedQuestion      pedido de esclarecimento por tipo
//!   └── 16. Fallback           desculpas (friendly/apologetic), total
//! ```
//!
//! ## Pureza
//!
//! O núcleo não guarda estado: o histórico chega no [`Context`] e toda
//! escolha aleatória passa pelo [`Chooser`] injetado. O relógio também é
//! um parâmetro (`now`), então `respond` é determinístico nos testes.

pub mod rules;
pub mod tech;

use chrono::{Local, NaiveDateTime};

use crate::core::chooser::Chooser;
use crate::core::knowledge_base::KnowledgeBase;
use crate::core::message::{Context, Reply};
use crate::nlu::reference::extract_topics_from_history;
use crate::nlu::NluPipeline;

use rules::{Patterns, Turn};
use tech::TechCatalog;

/// Regra da cascata de diálogo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Empty,
    ContextReference,
    Farewell,
    Greeting,
    Comfort,
    Cheer,
    Identity,
    Technology,
    KnowledgeBase,
    AssistantIntent,
    LegacyFaq,
    Help,
    Compliment,
    Clock,
    Calendar,
    QuestionShape,
    HistoryContinuation,
    TopicScore,
    TypedQuestion,
    Fallback,
}

/// Ordem de avaliação. [`Rule::Fallback`] fecha a cascata e sempre responde.
pub const CASCADE: &[Rule] = &[
    Rule::Empty,
    Rule::ContextReference,
    Rule::Farewell,
    Rule::Greeting,
    Rule::Comfort,
    Rule::Cheer,
    Rule::Identity,
    Rule::Technology,
    Rule::KnowledgeBase,
    Rule::AssistantIntent,
    Rule::LegacyFaq,
    Rule::Help,
    Rule::Compliment,
    Rule::Clock,
    Rule::Calendar,
    Rule::QuestionShape,
    Rule::HistoryContinuation,
    Rule::TopicScore,
    Rule::TypedQuestion,
];

/// Política de diálogo com tabelas estáticas injetadas na construção.
#[derive(Clone, Debug)]
pub struct Orchestrator {
    kb: KnowledgeBase,
    nlu: NluPipeline,
    tech: TechCatalog,
    patterns: Patterns,
}

impl Orchestrator {
    /// Cria o orquestrador sobre uma base e um pipeline quaisquer.
    pub fn new(kb: KnowledgeBase, nlu: NluPipeline) -> Result<Self, regex::Error> {
        Ok(Self {
            kb,
            nlu,
            tech: TechCatalog::builtin()?,
            patterns: Patterns::new()?,
        })
    }

    /// Orquestrador com a base e o pipeline embutidos.
    pub fn builtin(normalize_slang: bool) -> Result<Self, regex::Error> {
        Self::new(KnowledgeBase::builtin(), NluPipeline::new(normalize_slang)?)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn nlu(&self) -> &NluPipeline {
        &self.nlu
    }

    /// Responde com aleatoriedade e relógio do sistema.
    pub fn process(&self, utterance: &str, context: &Context) -> Reply {
        self.respond(
            utterance,
            context,
            &mut rand::thread_rng(),
            Local::now().naive_local(),
        )
    }

    /// Responde a uma frase. Total: sempre devolve texto não vazio.
    pub fn respond(
        &self,
        utterance: &str,
        context: &Context,
        chooser: &mut dyn Chooser,
        now: NaiveDateTime,
    ) -> Reply {
        let analysis = self.nlu.analyze(utterance, context, chooser);
        let (context_topics, context_tech) = if analysis.references.any() {
            let history = &context.conversation_history;
            (
                extract_topics_from_history(history, &self.kb),
                self.tech.subject_of(history, &self.kb, self.nlu.synonyms()),
            )
        } else {
            (Vec::new(), None)
        };
        let turn = Turn {
            analysis,
            context,
            context_topics,
            context_tech,
            now,
        };

        for &rule in CASCADE {
            if let Some(reply) = self.apply(rule, &turn, chooser) {
                tracing::debug!(?rule, emotion = %reply.emotion.kind, "Regra aplicada");
                return reply;
            }
        }
        tracing::debug!(rule = ?Rule::Fallback, "Regra aplicada");
        rules::fallback(&turn, chooser)
    }

    /// Avalia uma única regra contra o turno.
    fn apply(&self, rule: Rule, turn: &Turn, chooser: &mut dyn Chooser) -> Option<Reply> {
        let kb = &self.kb;
        let patterns = &self.patterns;
        match rule {
            Rule::Empty => rules::empty_input(turn),
            Rule::ContextReference => rules::context_reference(turn, &self.tech, chooser),
            Rule::Farewell => rules::farewell(turn, chooser),
            Rule::Greeting => rules::greeting(turn, patterns, chooser),
            Rule::Comfort => rules::comfort(turn, chooser),
            Rule::Cheer => rules::cheer(turn, chooser),
            Rule::Identity => rules::identity(turn, chooser),
            Rule::Technology => self
                .tech
                .respond(&turn.analysis.input, &turn.analysis.query, chooser),
            Rule::KnowledgeBase => rules::knowledge_base(turn, kb, chooser),
            Rule::AssistantIntent => rules::assistant_intent(turn, patterns, chooser),
            Rule::LegacyFaq => rules::legacy_faq(turn, patterns, chooser),
            Rule::Help => rules::help(turn, patterns, chooser),
            Rule::Compliment => rules::compliment(turn, chooser),
            Rule::Clock => rules::clock(turn, chooser),
            Rule::Calendar => rules::calendar(turn, chooser),
            Rule::QuestionShape => rules::question_shape(turn, kb, patterns, chooser),
            Rule::HistoryContinuation => rules::history_continuation(turn, kb, chooser),
            Rule::TopicScore => rules::topic_score(turn, kb, chooser),
            Rule::TypedQuestion => rules::typed_question(turn, kb, chooser),
            Rule::Fallback => Some(rules::fallback(turn, chooser)),
        }
    }
}
