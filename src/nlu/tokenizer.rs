//! # Tokenizador e Stemmer
//!
//! Primeira etapa do pipeline: transforma texto livre em uma sequência
//! de *stems* (radicais).
//!
//! ```text
//! "Which tools are supported?"
//!   ├── lowercase + NFC         → "which tools are supported?"
//!   ├── pontuação → espaço      → "which tools are supported "
//!   ├── split em espaços        → [which, tools, are, supported]
//!   └── stem                    → [which, tool, are, support]
//! ```
//!
//! ## Regras de Stemming (ordem fixa, uma única regra por token)
//!
//! | Ordem | Sufixo | Reescrita |
//! |-------|--------|-----------|
//! | 1 | `ies`, `ied`, `ier`, `iest` | → `y` |
//! | 2 | `ed`, `ing`, `er`, `est`, `ly` | removido |
//! | 3 | `es` após sibilante, senão `s` (nunca `ss`) | removido |
//!
//! Tokens com menos de 3 caracteres não são tocados. Uma regra só "casa"
//! se o radical resultante tiver ao menos 3 caracteres; e a reescrita só é
//! aplicada se o radical for estável (nenhuma regra casa nele). Isso
//! garante `stem(stem(t)) == stem(t)` para qualquer token.

use unicode_normalization::UnicodeNormalization;

/// Tamanho mínimo de token (e de radical) para o stemmer agir.
const MIN_STEM_LEN: usize = 3;

const Y_ENDINGS: &[&str] = &["iest", "ies", "ied", "ier"];
const STRIP_ENDINGS: &[&str] = &["ing", "est", "ed", "er", "ly"];
const SIBILANTS: &[&str] = &["s", "x", "z", "ch", "sh"];

/// Normaliza para NFC + minúsculas.
pub fn normalize(input: &str) -> String {
    input.nfc().collect::<String>().to_lowercase()
}

/// Texto normalizado com toda pontuação trocada por espaço.
pub fn simplify(input: &str) -> String {
    normalize(input)
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect()
}

/// Palavras sem stemming (minúsculas, sem pontuação).
pub fn words(input: &str) -> Vec<String> {
    simplify(input)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Tokeniza e aplica stemming a cada palavra.
pub fn tokenize(input: &str) -> Vec<String> {
    words(input).iter().map(|w| stem(w)).collect()
}

/// Reduz uma palavra ao seu radical por regras de sufixo.
pub fn stem(word: &str) -> String {
    if word.chars().count() < MIN_STEM_LEN {
        return word.to_string();
    }
    match apply_first_rule(word) {
        Some(candidate) if apply_first_rule(&candidate).is_none() => candidate,
        _ => word.to_string(),
    }
}

/// Aplica a primeira regra que casar; `None` se nenhuma casar.
fn apply_first_rule(word: &str) -> Option<String> {
    for ending in Y_ENDINGS {
        if let Some(base) = strip(word, ending) {
            return Some(format!("{base}y"));
        }
    }
    for ending in STRIP_ENDINGS {
        if let Some(base) = strip(word, ending) {
            return Some(base.to_string());
        }
    }
    plural_base(word).map(str::to_string)
}

fn plural_base(word: &str) -> Option<&str> {
    if word.ends_with("ss") {
        return None;
    }
    if let Some(base) = word.strip_suffix("es") {
        if SIBILANTS.iter().any(|s| base.ends_with(s)) && long_enough(base) {
            return Some(base);
        }
    }
    strip(word, "s")
}

/// Remove `suffix` se o que sobra tiver tamanho mínimo.
fn strip<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
    word.strip_suffix(suffix).filter(|base| long_enough(base))
}

fn long_enough(s: &str) -> bool {
    s.chars().count() >= MIN_STEM_LEN
}
