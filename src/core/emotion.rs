//! # Emoção — O Humor Anexado a Cada Mensagem
//!
//! Toda mensagem (do usuário ou do bot) pode carregar uma [`Emotion`]:
//! o tipo de humor, uma intensidade opcional e um glifo para exibição.
//!
//! | Tipo | Origem típica |
//! |------|---------------|
//! | `happy` / `sad` | Detector de emoção (palavras positivas/negativas) |
//! | `curious` / `neutral` | Detector de emoção (perguntas ou nada) |
//! | `empathetic` | Resposta de conforto a tristeza intensa |
//! | `enthusiastic` | Handlers de tecnologias nomeadas |
//! | `helpful` / `proud` | Meta-intents (capacidades, criador) |
//! | `apologetic` / `friendly` | Fallback final |
//!
//! A intensidade é opcional porque vários caminhos da política de diálogo
//! forçam uma emoção fixa sem medir nada.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Glifo padrão para humor neutro/amigável.
pub const SMILE: &str = "😊";

/// Tipo de humor inferido ou atribuído a uma resposta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionKind {
    Happy,
    Sad,
    Curious,
    Neutral,
    Empathetic,
    Enthusiastic,
    Helpful,
    Proud,
    Apologetic,
    Friendly,
}

impl EmotionKind {
    /// Nome em minúsculas, igual ao formato serializado.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Curious => "curious",
            Self::Neutral => "neutral",
            Self::Empathetic => "empathetic",
            Self::Enthusiastic => "enthusiastic",
            Self::Helpful => "helpful",
            Self::Proud => "proud",
            Self::Apologetic => "apologetic",
            Self::Friendly => "friendly",
        }
    }
}

impl fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intensidade do humor detectado.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Humor completo: tipo, intensidade (quando medida) e glifo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emotion {
    /// Tipo do humor.
    #[serde(rename = "type")]
    pub kind: EmotionKind,
    /// Intensidade, presente apenas nos caminhos que a medem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    /// Símbolo curto para exibição (emoji).
    #[serde(rename = "emoji")]
    pub glyph: String,
}

impl Emotion {
    /// Cria uma emoção sem intensidade medida.
    pub fn new(kind: EmotionKind, glyph: &str) -> Self {
        Self {
            kind,
            intensity: None,
            glyph: glyph.to_string(),
        }
    }

    /// Cria uma emoção com intensidade.
    pub fn with_intensity(kind: EmotionKind, intensity: Intensity, glyph: &str) -> Self {
        Self {
            kind,
            intensity: Some(intensity),
            glyph: glyph.to_string(),
        }
    }

    /// `true` se o humor é do tipo dado com intensidade alta.
    pub fn is_intense(&self, kind: EmotionKind) -> bool {
        self.kind == kind && self.intensity == Some(Intensity::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase_with_emoji_field() {
        let e = Emotion::with_intensity(EmotionKind::Sad, Intensity::High, "😢");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "sad");
        assert_eq!(json["intensity"], "high");
        assert_eq!(json["emoji"], "😢");
    }

    #[test]
    fn intensity_is_omitted_when_absent() {
        let e = Emotion::new(EmotionKind::Happy, "👋");
        let json = serde_json::to_string(&e).unwrap();
        assert!(!json.contains("intensity"));
        let back: Emotion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn is_intense_requires_kind_and_high() {
        let e = Emotion::with_intensity(EmotionKind::Happy, Intensity::High, "🎉");
        assert!(e.is_intense(EmotionKind::Happy));
        assert!(!e.is_intense(EmotionKind::Sad));
        let medium = Emotion::with_intensity(EmotionKind::Happy, Intensity::Medium, "🎉");
        assert!(!medium.is_intense(EmotionKind::Happy));
    }
}
