//! Regras da cascata de diálogo: uma função por regra.
//!
//! Cada função devolve `Some(Reply)` quando a regra se aplica ao turno, ou
//! `None` para passar a vez à próxima. [`fallback`] é total.

use chrono::{NaiveDateTime, Timelike};
use regex::Regex;

use crate::core::chooser::{pick, Chooser};
use crate::core::emotion::{Emotion, EmotionKind, SMILE};
use crate::core::knowledge_base::{contains_keywords, lowercase_first, KnowledgeBase, Topic};
use crate::core::message::{Context, Reply};
use crate::nlu::intent::{Intent, CAPABILITIES_RESPONSE, CREATOR_RESPONSE};
use crate::nlu::question::QuestionType;
use crate::nlu::tokenizer::stem;
use crate::nlu::Analysis;

use super::tech::{TechCatalog, TechProfile};

/// Tudo o que uma regra pode consultar em um turno.
pub(crate) struct Turn<'a> {
    pub analysis: Analysis,
    pub context: &'a Context,
    /// Tópicos do histórico, do menos ao mais recente (vazio sem referência).
    pub context_topics: Vec<&'a Topic>,
    /// Tecnologia citada por último pelo usuário (só com referência).
    pub context_tech: Option<&'a TechProfile>,
    pub now: NaiveDateTime,
}

impl Turn<'_> {
    fn glyph(&self) -> &str {
        &self.analysis.emotion.glyph
    }

    fn detected(&self, text: impl Into<String>) -> Reply {
        Reply::new(text, self.analysis.emotion.clone())
    }

    fn lower(&self) -> &str {
        &self.analysis.query.lower
    }
}

/// Regexes das regras, compiladas uma vez.
#[derive(Clone, Debug)]
pub(crate) struct Patterns {
    greeting: Regex,
    about_assistant: Vec<Regex>,
    explicit_capabilities: Vec<Regex>,
    help: Vec<Regex>,
    assistant_word: Regex,
    explain: Regex,
    how_work: Regex,
    best_for: Regex,
    comparison: Regex,
}

fn compile(patterns: &[&str]) -> Result<Vec<Regex>, regex::Error> {
    patterns.iter().map(|p| Regex::new(&format!("(?i){p}"))).collect()
}

fn compile_one(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("(?i){pattern}"))
}

impl Patterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            greeting: compile_one(
                r"\b(?:hi|hello|hey|greetings|good morning|good afternoon|good evening)\b",
            )?,
            about_assistant: compile(&[
                r"(?:you|your|chatbot|bot|assistant).*(?:can|do|capable|ability|help)",
                r"(?:what|tell me).*(?:can you|you can|you do|you're capable)",
            ])?,
            explicit_capabilities: compile(&[
                r"(?:what|tell me).*(?:can you|you can|you do|you're capable|your capabilities)",
                r"(?:your|you).*(?:capabilities|abilities|skills|features)",
            ])?,
            help: compile(&[
                r"(?:how|what).*(?:can you|you can|do you).*(?:help|assist|support|aid)",
                r"(?:what|how).*(?:you|can you|do you).*(?:do|help|assist)",
                r"(?:your|you).*(?:capability|ability|skill|help)",
            ])?,
            assistant_word: compile_one(r"(?:you|your|chatbot|bot|assistant)")?,
            explain: compile_one(r"(?:what|tell me|explain|describe|can you).*(?:is|are|about|mean)")?,
            how_work: compile_one(r"(?:how|why|when|where).*(?:work|function|operate|use|utilize)")?,
            best_for: compile_one(r"(?:best|recommend|suggest|top|popular|which).*(?:for|to|should|use)")?,
            comparison: compile_one(r"(?:difference|compare|vs|versus|between).*(?:and|&)")?,
        })
    }
}

fn any_match(patterns: &[Regex], input: &str) -> bool {
    patterns.iter().any(|re| re.is_match(input))
}

// ─── 1. Entrada vazia ─────────────────────────────────────────

pub const EMPTY_PROMPT: &str = "Please type something! I'm here and ready to chat! 😊";

pub(crate) fn empty_input(turn: &Turn) -> Option<Reply> {
    turn.analysis
        .input
        .is_empty()
        .then(|| Reply::new(EMPTY_PROMPT, Emotion::new(EmotionKind::Neutral, SMILE)))
}

// ─── 2. Referência ao tópico anterior ─────────────────────────

pub(crate) fn context_reference(turn: &Turn, tech: &TechCatalog, chooser: &mut dyn Chooser) -> Option<Reply> {
    if !turn.analysis.references.any() {
        return None;
    }
    if turn.context_tech.is_none() && turn.context_topics.is_empty() {
        return None;
    }
    let lower = turn.lower();
    let template = chooser.index(4);
    // Respostas de tecnologia abrem com o nome próprio: não baixam a caixa.
    let (label, response, inline) = match turn.context_tech {
        Some(profile) => {
            let response = tech.answer(profile, &turn.analysis.input, chooser);
            (profile.name, response, response.to_string())
        }
        None => {
            let topic = turn.context_topics.last()?;
            let response = topic.pick_response(chooser);
            (topic.label.as_str(), response, lowercase_first(response))
        }
    };
    let text = match template {
        0 if lower.contains("what is") || lower.contains("what are") => {
            format!("You're asking what {label} is? {response}")
        }
        0 if lower.contains("how") => format!("You're asking how {label} works? {response}"),
        0 => format!("You're asking about {label}? {response}"),
        1 => format!("Regarding {label}, {inline}"),
        2 => format!("About {label} - {inline}"),
        _ => format!("Yes, {label}! {response}"),
    };
    Some(turn.detected(text))
}

// ─── 3. Despedida ─────────────────────────────────────────────

const EXIT_PHRASES: &[&str] = &[
    "bye", "exit", "quit", "goodbye", "see you", "farewell", "cya", "later", "gtg", "gotta go",
];

const FAREWELLS: &[&str] = &[
    "Bye! It was great chatting with you! Take care! 👋",
    "See ya! Had fun talking! Have a good one! 🌟",
    "Later! It was nice chatting! Come back anytime! 😊",
    "Bye bye! Thanks for the chat! Hit me up anytime! 💙",
    "Catch you later! Was fun talking! 👋",
    "Alright, see you! Thanks for chatting! 😊",
];

pub(crate) fn farewell(turn: &Turn, chooser: &mut dyn Chooser) -> Option<Reply> {
    if !EXIT_PHRASES.contains(&turn.analysis.simplified.as_str()) {
        return None;
    }
    Some(Reply::new(
        *pick(FAREWELLS, chooser),
        Emotion::new(EmotionKind::Happy, "👋"),
    ))
}

// ─── 4. Saudação ──────────────────────────────────────────────

pub(crate) fn greeting(turn: &Turn, patterns: &Patterns, chooser: &mut dyn Chooser) -> Option<Reply> {
    if !patterns.greeting.is_match(&turn.analysis.input) {
        return None;
    }
    let (hello, glyph) = match turn.now.hour() {
        h if h < 12 => ("Good morning!", "🌅"),
        h if h < 17 => ("Good afternoon!", "☀️"),
        _ => ("Good evening!", "🌙"),
    };
    let text = match chooser.index(3) {
        0 => format!("{hello} {glyph} How can I help you today?"),
        1 => format!("{hello} {glyph} It's great to see you! What's on your mind?"),
        _ => format!("{hello} {glyph} Welcome! I'm excited to chat with you!"),
    };
    Some(Reply::new(text, Emotion::new(EmotionKind::Happy, glyph)))
}

// ─── 5–6. Emoções intensas ────────────────────────────────────

pub(crate) fn comfort(turn: &Turn, chooser: &mut dyn Chooser) -> Option<Reply> {
    if !turn.analysis.emotion.is_intense(EmotionKind::Sad) {
        return None;
    }
    let e = turn.glyph();
    let text = match chooser.index(3) {
        0 => format!("I'm sorry to hear you're feeling down. {e} Would you like to talk about it? I'm here to listen and help if I can."),
        1 => format!("It sounds like you're going through a tough time. {e} Remember, things often get better. Is there anything specific I can help with?"),
        _ => format!("I sense you might be feeling low. {e} Sometimes talking helps. What's on your mind?"),
    };
    Some(Reply::new(text, Emotion::new(EmotionKind::Empathetic, "💙")))
}

pub(crate) fn cheer(turn: &Turn, chooser: &mut dyn Chooser) -> Option<Reply> {
    if !turn.analysis.emotion.is_intense(EmotionKind::Happy) {
        return None;
    }
    let e = turn.glyph();
    let text = match chooser.index(3) {
        0 => format!("That's wonderful! {e} I'm so glad to hear you're feeling great! What's making you happy today?"),
        1 => format!("Awesome! {e} Your positivity is contagious! Tell me more about what's going well!"),
        _ => format!("Fantastic! {e} I love your energy! What exciting things are happening?"),
    };
    Some(Reply::new(text, Emotion::new(EmotionKind::Happy, e)))
}

// ─── 7. Identidade ────────────────────────────────────────────

pub(crate) fn identity(turn: &Turn, chooser: &mut dyn Chooser) -> Option<Reply> {
    if !turn.analysis.intent.is(Intent::Name) {
        return None;
    }
    let e = turn.glyph();
    let text = match chooser.index(3) {
        0 => format!("Hey! I'm Mini Chatbot! {e} A friendly AI assistant. Nice to meet you! 🤖"),
        1 => format!("Hi! I'm Mini Chatbot! {e} Your friendly digital buddy! What's up? 💬"),
        _ => format!("Hey there! I'm Mini Chatbot! {e} I'm here to help and chat. What can I do for you? 😊"),
    };
    Some(Reply::new(text, Emotion::new(EmotionKind::Happy, "🤖")))
}

// ─── 9. Base de conhecimento ──────────────────────────────────

pub(crate) fn knowledge_base(
    turn: &Turn,
    kb: &KnowledgeBase,
    chooser: &mut dyn Chooser,
) -> Option<Reply> {
    kb.get_knowledge_base_response(
        &turn.analysis.input,
        &turn.analysis.query,
        &turn.context_topics,
        chooser,
    )
    .map(|text| turn.detected(text))
}

// ─── 10. Meta-intenções restantes ─────────────────────────────

const MORE_CAPABILITIES: &[&str] = &[
    "I'm here to assist with:\n• General knowledge and questions\n• Programming and tech topics\n• Casual conversations\n• Emotional support\n• Learning together\n\nWhat interests you? 🚀",
    "My capabilities include:\n• Knowledge sharing across various topics\n• Technical discussions\n• Friendly chats\n• Understanding emotions\n• Being a helpful companion\n\nHow can I help you today? ✨",
];

const MORE_CREATOR: &[&str] = &[
    "I started as a simple chatbot project and evolved into a more sophisticated assistant with emotions and expanded knowledge! It's been quite a journey! 🌟",
    "My origins trace back to a small internship project, but I've grown into something much more - with NLP and the ability to understand emotions! 💙",
];

fn capabilities_reply(chooser: &mut dyn Chooser) -> Reply {
    let pool: Vec<&str> = std::iter::once(CAPABILITIES_RESPONSE)
        .chain(MORE_CAPABILITIES.iter().copied())
        .collect();
    Reply::new(*pick(&pool, chooser), Emotion::new(EmotionKind::Helpful, "💡"))
}

fn creator_reply(chooser: &mut dyn Chooser) -> Reply {
    let pool: Vec<&str> = std::iter::once(CREATOR_RESPONSE)
        .chain(MORE_CREATOR.iter().copied())
        .collect();
    Reply::new(*pick(&pool, chooser), Emotion::new(EmotionKind::Proud, "🚀"))
}

pub(crate) fn assistant_intent(
    turn: &Turn,
    patterns: &Patterns,
    chooser: &mut dyn Chooser,
) -> Option<Reply> {
    let intent = &turn.analysis.intent;
    let input = &turn.analysis.input;
    if intent.is(Intent::Capabilities) && any_match(&patterns.about_assistant, input) {
        return Some(capabilities_reply(chooser));
    }
    if intent.is(Intent::Creator) {
        return Some(creator_reply(chooser));
    }
    if intent.is(Intent::Purpose) {
        let text = intent.response?;
        return Some(Reply::new(text, Emotion::new(EmotionKind::Helpful, SMILE)));
    }
    None
}

// ─── 11. FAQ por palavras-chave ───────────────────────────────

const NAME_KEYWORDS: &[&str] = &["name", "who are you", "what are you", "your name", "identity"];
const CAPABILITY_KEYWORDS: &[&str] =
    &["what can you do", "capabilities", "features", "what do you do", "abilities"];
const CREATOR_KEYWORDS: &[&str] =
    &["who created", "who made", "who built", "creator", "developer", "who designed"];

pub(crate) fn legacy_faq(turn: &Turn, patterns: &Patterns, chooser: &mut dyn Chooser) -> Option<Reply> {
    let query = &turn.analysis.query;
    if contains_keywords(query, NAME_KEYWORDS) {
        let e = turn.glyph();
        let text = match chooser.index(3) {
            0 => format!("I'm Mini Chatbot! {e} A friendly AI assistant built with Natural Language Processing. Nice to meet you! 🤖"),
            1 => format!("Hello! I'm Mini Chatbot! {e} I'm here to help, chat, and learn with you. What would you like to know? 💬"),
            _ => format!("I'm Mini Chatbot! {e} Think of me as your friendly digital companion. I love having conversations and helping out! 🌟"),
        };
        return Some(Reply::new(text, Emotion::new(EmotionKind::Happy, "🤖")));
    }
    if any_match(&patterns.explicit_capabilities, &turn.analysis.input)
        && contains_keywords(query, CAPABILITY_KEYWORDS)
    {
        return Some(capabilities_reply(chooser));
    }
    if contains_keywords(query, CREATOR_KEYWORDS) {
        return Some(creator_reply(chooser));
    }
    None
}

// ─── Ajuda, elogios, relógio e calendário ─────────────────────

const HELP_KEYWORDS: &[&str] = &["how can you help", "how help", "assist", "support", "what help"];

const HELP_RESPONSES: &[&str] = &[
    "I'm here to help! 😊 I can:\n• Answer your questions\n• Have meaningful conversations\n• Provide information on various topics\n• Offer emotional support\n• Discuss programming and technology\n\nJust ask me anything - I'm all ears!",
    "I'd love to help! 🌟 Whether you need:\n• Information on topics\n• Someone to chat with\n• Technical explanations\n• Emotional support\n• Learning assistance\n\nI'm here for you! What do you need?",
    "Helping is what I do best! 💙 I can assist with:\n• Questions and answers\n• Friendly conversations\n• Knowledge sharing\n• Understanding your emotions\n• Technical discussions\n\nWhat can I help you with today?",
];

pub(crate) fn help(turn: &Turn, patterns: &Patterns, chooser: &mut dyn Chooser) -> Option<Reply> {
    let input = &turn.analysis.input;
    let about_assistant = patterns.assistant_word.is_match(input)
        || contains_keywords(&turn.analysis.query, HELP_KEYWORDS);
    if !(any_match(&patterns.help, input) && about_assistant) {
        return None;
    }
    Some(Reply::new(
        *pick(HELP_RESPONSES, chooser),
        Emotion::new(EmotionKind::Helpful, SMILE),
    ))
}

const COMPLIMENT_KEYWORDS: &[&str] = &[
    "good", "great", "awesome", "amazing", "wonderful", "excellent", "smart", "intelligent",
    "clever", "brilliant", "perfect",
];

pub(crate) fn compliment(turn: &Turn, chooser: &mut dyn Chooser) -> Option<Reply> {
    if !contains_keywords(&turn.analysis.query, COMPLIMENT_KEYWORDS) {
        return None;
    }
    let e = turn.glyph();
    let text = match chooser.index(3) {
        0 => format!("Aww, thank you! {e} That's so kind of you to say! I really appreciate it! 💙"),
        1 => format!("You're too sweet! {e} Thanks for the kind words - they mean a lot! 😊"),
        _ => format!("Thank you! {e} Your positivity makes my day! I'm here whenever you need me! 🌟"),
    };
    Some(Reply::new(text, Emotion::new(EmotionKind::Happy, SMILE)))
}

const CLOCK_KEYWORDS: &[&str] = &["time", "what time", "current time", "clock"];
const CALENDAR_KEYWORDS: &[&str] = &["date", "what date", "today", "current date", "what day"];

pub(crate) fn clock(turn: &Turn, chooser: &mut dyn Chooser) -> Option<Reply> {
    if !contains_keywords(&turn.analysis.query, CLOCK_KEYWORDS) {
        return None;
    }
    let t = turn.now.format("%-I:%M:%S %p");
    let text = match chooser.index(3) {
        0 => format!("The current time is {t}. ⏰"),
        1 => format!("It's {t} right now! ⏰"),
        _ => format!("Current time: {t} ⏰"),
    };
    Some(Reply::new(text, Emotion::new(EmotionKind::Neutral, "⏰")))
}

pub(crate) fn calendar(turn: &Turn, chooser: &mut dyn Chooser) -> Option<Reply> {
    if !contains_keywords(&turn.analysis.query, CALENDAR_KEYWORDS) {
        return None;
    }
    let d = turn.now.format("%A, %B %-d, %Y");
    let text = match chooser.index(3) {
        0 => format!("Today's date is {d}. 📅"),
        1 => format!("It's {d} today! 📅"),
        _ => format!("The date is {d}. 📅"),
    };
    Some(Reply::new(text, Emotion::new(EmotionKind::Neutral, "📅")))
}

// ─── 12. Formas de pergunta ───────────────────────────────────

const TECH_HINTS: &[&str] = &["code", "programming", "software", "tool", "framework", "platform"];

pub(crate) fn question_shape(
    turn: &Turn,
    kb: &KnowledgeBase,
    patterns: &Patterns,
    chooser: &mut dyn Chooser,
) -> Option<Reply> {
    let a = &turn.analysis;
    let input = &a.input;

    if patterns.explain.is_match(input) && !a.concepts.is_empty() {
        if let Some(topic) = kb.find_best_matching_topic(&a.query) {
            let response = topic.pick_response(chooser);
            return Some(turn.detected(format!(
                "I think you're asking about {}! {response}",
                topic.label
            )));
        }
    }
    if patterns.how_work.is_match(input)
        && a.query
            .expanded
            .iter()
            .any(|c| TECH_HINTS.iter().any(|hint| c.contains(hint)))
    {
        return Some(turn.detected(
            "That's a great question! I'd be happy to explain how that works. Could you be more specific about which technology or tool you're asking about? I can explain programming concepts, frameworks, cloud platforms, and more! 💻",
        ));
    }
    if patterns.best_for.is_match(input) && !a.concepts.is_empty() {
        return Some(turn.detected(
            "Great question! The best choice depends on your specific needs. I can help you understand different options for programming languages, frameworks, cloud platforms, databases, and AI tools. What are you trying to accomplish? 🤔",
        ));
    }
    if patterns.comparison.is_match(input) && a.concepts.len() >= 2 {
        return Some(turn.detected(
            "I'd be happy to help you compare those! Each technology has its strengths and use cases. Could you tell me which specific technologies or tools you'd like to compare? I can explain the differences! 🔍",
        ));
    }
    None
}

// ─── 13. Continuação do histórico ─────────────────────────────

pub(crate) fn history_continuation(
    turn: &Turn,
    kb: &KnowledgeBase,
    chooser: &mut dyn Chooser,
) -> Option<Reply> {
    if !turn.analysis.references.any() || !turn.context.has_recent() {
        return None;
    }
    let recent = turn
        .context
        .recent_messages
        .iter()
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let query = &turn.analysis.query;
    let topic = kb.topics().iter().find(|topic| {
        topic.mentioned_in(&recent)
            && (topic.mentioned_in(&query.lower)
                || topic.lookup_keywords().iter().any(|kw| {
                    let kw_stem = stem(kw);
                    kw_stem.chars().count() >= 3 && query.tokens.iter().any(|t| t.contains(&kw_stem))
                }))
    })?;

    let label = &topic.label;
    let template = chooser.index(3);
    let response = topic.pick_response(chooser);
    let text = match template {
        0 => format!("Yes, we were just discussing {label}! {response}"),
        1 => format!("Great connection! About {label}, {}", lowercase_first(response)),
        _ => format!("You're continuing our {label} discussion! {response}"),
    };
    Some(turn.detected(text))
}

// ─── 14. Pontuação completa ───────────────────────────────────

pub(crate) fn topic_score(turn: &Turn, kb: &KnowledgeBase, chooser: &mut dyn Chooser) -> Option<Reply> {
    let topic = kb.find_best_matching_topic(&turn.analysis.query)?;
    Some(turn.detected(topic.pick_response(chooser)))
}

// ─── 15. Perguntas tipadas ────────────────────────────────────

pub(crate) fn typed_question(
    turn: &Turn,
    kb: &KnowledgeBase,
    chooser: &mut dyn Chooser,
) -> Option<Reply> {
    let a = &turn.analysis;
    let kind = a.question_type;
    let retries_kb = matches!(kind, QuestionType::What | QuestionType::How | QuestionType::Why);
    let clarifies = retries_kb
        || matches!(kind, QuestionType::When | QuestionType::Where | QuestionType::Who);
    if !clarifies {
        return None;
    }
    if let Some(topic) = kb.find_best_matching_topic(&a.query) {
        return Some(turn.detected(topic.pick_response(chooser)));
    }
    if retries_kb {
        if let Some(reply) = knowledge_base(turn, kb, chooser) {
            return Some(reply);
        }
    }

    let e = turn.glyph();
    let subject = a.main_concept().unwrap_or("that");
    let text = match kind {
        QuestionType::What => match a.main_concept() {
            Some(c) => format!("I'm sorry, but I don't have specific knowledge about {c}. {e} Could you provide more context or rephrase your question? 💭"),
            None => format!("I'm not sure what you're asking about. {e} Could you be more specific? 💭"),
        },
        QuestionType::How => format!("I don't have detailed information on how {subject} works. {e} Could you provide more specific details? 🤔"),
        QuestionType::Why => format!("I'm not sure about the specific reasons for {subject}. {e} Could you provide more context? 💬"),
        QuestionType::Who => format!("I don't have information about who {subject}. {e} Could you provide more context? 👤"),
        _ => format!("I don't have the specific {kind} information about {subject}. {e} Could you provide more details? 📍"),
    };
    Some(turn.detected(text))
}

// ─── 16. Fallback final ───────────────────────────────────────

/// Resposta final, sempre disponível.
pub(crate) fn fallback(turn: &Turn, chooser: &mut dyn Chooser) -> Reply {
    let e = turn.glyph();
    let text = match chooser.index(4) {
        0 => format!("I'm sorry, but I don't have specific knowledge about that. {e} I don't want to give you incorrect information. Could you rephrase your question or provide more context? 💭"),
        1 => format!("I'm not sure about that specific question. {e} Could you provide more details or clarify what you're asking? I want to make sure I answer your question accurately. 🤔"),
        2 => format!("I don't have information about that. {e} Could you give me more context or rephrase your question? I'd like to help you with the right answer. 💬"),
        _ => format!("I'm not familiar with that specific topic. {e} Could you provide more details about what you're asking? I want to give you an accurate response. 🌟"),
    };
    let kind = if turn.analysis.references.any() && !turn.context_topics.is_empty() {
        EmotionKind::Apologetic
    } else {
        EmotionKind::Friendly
    };
    Reply::new(text, Emotion::new(kind, SMILE))
}
