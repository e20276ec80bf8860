//! # Detector de Emoção
//!
//! Conta palavras positivas, negativas e interrogativas e decide o humor
//! da frase. O teste de pertinência é "o token contém o radical da palavra
//! da lista", tolerante ao ruído do stemming (`thanks` → `thank`).
//!
//! ## Regra de Decisão (em ordem)
//!
//! | Condição | Humor | Intensidade | Glifo |
//! |----------|-------|-------------|-------|
//! | positivas > negativas | `happy` | `high` se > 2, senão `medium` | sorteado (positivos) |
//! | negativas > positivas | `sad` | `high` se > 2, senão `medium` | sorteado (negativos) |
//! | `?` ou palavra interrogativa | `curious` | `medium` | 🤔 |
//! | resto | `neutral` | `low` | 😊 |
//!
//! Empates com contagem > 0 caem nos ramos de pergunta/neutro.
//!
//! Um relato em primeira pessoa (`feel`, `feeling`, `felt`) soma 1 à
//! polaridade dominante apenas no cálculo da intensidade: "I feel terrible
//! and sad today" é tristeza intensa.

use crate::core::chooser::{pick, Chooser};
use crate::core::emotion::{Emotion, EmotionKind, Intensity, SMILE};

use super::tokenizer::{stem, tokenize};

pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "great", "awesome", "wonderful", "excellent", "good", "nice", "love", "like",
    "amazing", "fantastic", "brilliant", "perfect", "joy", "excited", "glad", "pleased",
    "delighted", "thank", "thanks", "appreciate",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "sad", "bad", "terrible", "awful", "hate", "angry", "mad", "frustrated", "disappointed",
    "upset", "worried", "anxious", "stressed", "tired", "exhausted", "sick", "hurt", "pain",
    "problem", "issue", "difficult",
];

pub const QUESTION_WORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "which", "can", "could", "would", "should",
    "tell", "explain", "describe",
];

pub const POSITIVE_GLYPHS: &[&str] = &["😊", "😄", "😁", "😃", "😍", "🥰", "😎", "🤩", "🎉", "✨"];
pub const NEGATIVE_GLYPHS: &[&str] = &["😢", "😞", "😔", "😟", "😕", "😤", "😠", "😡", "😰", "😨", "😓"];
pub const CURIOUS_GLYPH: &str = "🤔";

/// Radicais de relato de sentimento em primeira pessoa.
const SELF_REPORT: &[&str] = &["feel", "felt"];

/// Acima deste número de ocorrências a intensidade é alta.
const HIGH_INTENSITY_ABOVE: usize = 2;

/// Detector com as listas de palavras já reduzidas a radicais.
#[derive(Clone, Debug)]
pub struct EmotionDetector {
    positive: Vec<String>,
    negative: Vec<String>,
    question: Vec<String>,
}

/// Contagens brutas de uma frase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmotionCounts {
    pub positive: usize,
    pub negative: usize,
    pub question: usize,
    pub self_report: bool,
}

impl Default for EmotionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionDetector {
    pub fn new() -> Self {
        let stems = |words: &[&str]| words.iter().map(|w| stem(w)).collect::<Vec<_>>();
        Self {
            positive: stems(POSITIVE_WORDS),
            negative: stems(NEGATIVE_WORDS),
            question: stems(QUESTION_WORDS),
        }
    }

    /// Conta ocorrências de cada classe de palavra.
    pub fn count(&self, input: &str) -> EmotionCounts {
        let mut counts = EmotionCounts::default();
        for token in tokenize(input) {
            let hits = |list: &Vec<String>| list.iter().any(|w| token.contains(w.as_str()));
            if hits(&self.positive) {
                counts.positive += 1;
            }
            if hits(&self.negative) {
                counts.negative += 1;
            }
            if hits(&self.question) {
                counts.question += 1;
            }
            if SELF_REPORT.contains(&token.as_str()) {
                counts.self_report = true;
            }
        }
        counts
    }

    /// Detecta o humor de uma frase.
    pub fn detect(&self, input: &str, chooser: &mut dyn Chooser) -> Emotion {
        let counts = self.count(input);
        let boost = usize::from(counts.self_report);

        if counts.positive > counts.negative {
            let intensity = intensity_for(counts.positive + boost);
            return Emotion::with_intensity(
                EmotionKind::Happy,
                intensity,
                *pick(POSITIVE_GLYPHS, chooser),
            );
        }
        if counts.negative > counts.positive {
            let intensity = intensity_for(counts.negative + boost);
            return Emotion::with_intensity(
                EmotionKind::Sad,
                intensity,
                *pick(NEGATIVE_GLYPHS, chooser),
            );
        }
        if input.contains('?') || counts.question > 0 {
            return Emotion::with_intensity(EmotionKind::Curious, Intensity::Medium, CURIOUS_GLYPH);
        }
        Emotion::with_intensity(EmotionKind::Neutral, Intensity::Low, SMILE)
    }
}

fn intensity_for(count: usize) -> Intensity {
    if count > HIGH_INTENSITY_ABOVE {
        Intensity::High
    } else {
        Intensity::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chooser::FixedChooser;

    fn detect(input: &str) -> Emotion {
        EmotionDetector::new().detect(input, &mut FixedChooser(0))
    }

    #[test]
    fn positive_words_make_happy() {
        let e = detect("this is great, thanks");
        assert_eq!(e.kind, EmotionKind::Happy);
        assert_eq!(e.intensity, Some(Intensity::Medium));
        assert!(POSITIVE_GLYPHS.contains(&e.glyph.as_str()));
    }

    #[test]
    fn many_positive_words_are_intense() {
        let e = detect("awesome, amazing, wonderful day");
        assert!(e.is_intense(EmotionKind::Happy));
    }

    #[test]
    fn feeling_report_raises_intensity() {
        let e = detect("I feel terrible and sad today");
        assert_eq!(e.kind, EmotionKind::Sad);
        assert_eq!(e.intensity, Some(Intensity::High));
        assert!(NEGATIVE_GLYPHS.contains(&e.glyph.as_str()));

        let plain = detect("terrible and sad today");
        assert_eq!(plain.intensity, Some(Intensity::Medium));
    }

    #[test]
    fn tie_falls_through_to_question() {
        let e = detect("good but bad?");
        assert_eq!(e.kind, EmotionKind::Curious);
        assert_eq!(e.glyph, CURIOUS_GLYPH);
    }

    #[test]
    fn question_words_make_curious() {
        assert_eq!(detect("how does docker run").kind, EmotionKind::Curious);
    }

    #[test]
    fn nothing_is_neutral_low() {
        let e = detect("the sky over berlin");
        assert_eq!(e.kind, EmotionKind::Neutral);
        assert_eq!(e.intensity, Some(Intensity::Low));
        assert_eq!(e.glyph, SMILE);
    }

    #[test]
    fn counts_tolerate_stemming() {
        let c = EmotionDetector::new().count("thanks, really great");
        assert_eq!(c.positive, 2);
    }
}
