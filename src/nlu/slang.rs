//! # Normalizador de Linguagem Casual
//!
//! Expande gírias e abreviações de chat em palavras completas
//! (`u` → `you`, `idk` → `i don't know`) e descarta risadas (`lol`).
//! A troca é feita por palavra inteira, sem distinção de caixa.
//!
//! Etapa opcional de pré-processamento: ligada por configuração
//! (`MINICHAT_NORMALIZE_SLANG`) e aplicada antes da análise.

use regex::Regex;

const MAPPINGS: &[(&str, &str)] = &[
    ("u", "you"),
    ("ur", "your"),
    ("r", "are"),
    ("pls", "please"),
    ("plz", "please"),
    ("thx", "thanks"),
    ("ty", "thank you"),
    ("wanna", "want to"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("lemme", "let me"),
    ("dunno", "don't know"),
    ("idk", "i don't know"),
    ("lol", ""),
    ("haha", ""),
    ("omg", "oh my god"),
    ("btw", "by the way"),
    ("imo", "in my opinion"),
    ("tbh", "to be honest"),
];

/// Tabela compilada de substituições.
#[derive(Clone, Debug)]
pub struct SlangNormalizer {
    rules: Vec<(Regex, &'static str)>,
}

impl SlangNormalizer {
    pub fn builtin() -> Result<Self, regex::Error> {
        let rules = MAPPINGS
            .iter()
            .map(|&(casual, formal)| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(casual))).map(|re| (re, formal))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Reescreve a frase em linguagem formal, em minúsculas.
    pub fn normalize_casual_language(&self, input: &str) -> String {
        let mut text = input.to_lowercase();
        for (re, formal) in &self.rules {
            text = re.replace_all(&text, *formal).into_owned();
        }
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(input: &str) -> String {
        SlangNormalizer::builtin().unwrap().normalize_casual_language(input)
    }

    #[test]
    fn expands_whole_words_only() {
        assert_eq!(normalize("can u help"), "can you help");
        assert_eq!(normalize("Ur bot r cool"), "your bot are cool");
        assert_eq!(normalize("run fast"), "run fast");
    }

    #[test]
    fn drops_laughter() {
        assert_eq!(normalize("lol what is docker haha"), "what is docker");
    }

    #[test]
    fn multi_word_expansions() {
        assert_eq!(normalize("idk tbh"), "i don't know to be honest");
    }
}
