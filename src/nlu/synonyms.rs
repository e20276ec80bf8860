//! # Expansão por Sinônimos
//!
//! Aumenta o conjunto de conceitos com sinônimos de domínio para cobrir
//! diferenças de vocabulário ("db" ↔ "database", "deploy" ↔ "release").
//!
//! ## Regra de Casamento
//!
//! Um grupo casa com um conceito quando a âncora ou qualquer frase do
//! grupo é substring do conceito, ou vice-versa. Strings com menos de 3
//! caracteres só casam por igualdade (senão "ai" casaria "maintain").
//! Quando o grupo casa, entram a âncora e todas as frases. Cada conceito
//! também ganha sua variante singular/plural ingênua.

use std::collections::BTreeSet;

/// Tamanho mínimo para casamento por substring.
pub const MIN_CONTAINMENT_LEN: usize = 3;

/// Um grupo de sinônimos: âncora + frases relacionadas.
#[derive(Clone, Debug)]
pub struct SynonymGroup {
    pub anchor: &'static str,
    pub phrases: &'static [&'static str],
}

/// Tabela estática de grupos de sinônimos.
#[derive(Clone, Debug)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
}

const BUILTIN: &[(&str, &[&str])] = &[
    // IA / ML
    ("ai", &["artificial intelligence", "machine intelligence", "smart system", "intelligent system", "cognitive computing"]),
    ("ml", &["machine learning", "ml", "automated learning", "statistical learning", "data science"]),
    ("neural", &["neural network", "neural net", "nn", "deep learning", "deep neural", "ann"]),
    ("model", &["ai model", "ml model", "algorithm", "system", "predictive model"]),
    // Programação
    ("code", &["programming", "coding", "develop", "development", "software", "write code", "build software"]),
    ("language", &["programming language", "lang", "syntax", "programming syntax", "code language"]),
    ("framework", &["library", "toolkit", "platform", "system", "development framework"]),
    ("api", &["application programming interface", "endpoint", "service", "web service", "rest api"]),
    // Cloud
    ("cloud", &["cloud computing", "cloud service", "hosting", "cloud platform", "cloud infrastructure"]),
    ("server", &["serverless", "backend", "host", "server infrastructure"]),
    ("deploy", &["deployment", "publish", "release", "launch", "host", "put online"]),
    // Bancos de dados
    ("database", &["db", "data storage", "data store", "data management", "data repository"]),
    ("query", &["search", "find", "retrieve", "fetch", "get data", "lookup"]),
    ("store", &["save", "persist", "keep", "record", "save data"]),
    // Tecnologia em geral
    ("tool", &["software", "application", "app", "utility", "program", "platform"]),
    ("platform", &["system", "environment", "ecosystem", "infrastructure"]),
    ("service", &["api", "endpoint", "function", "microservice"]),
    ("build", &["create", "make", "develop", "construct", "build application"]),
    ("learn", &["study", "understand", "know", "grasp", "master", "get knowledge"]),
    ("use", &["utilize", "employ", "apply", "work with", "leverage"]),
    ("work", &["function", "operate", "run", "execute", "perform"]),
    ("help", &["assist", "support", "aid", "guide", "provide assistance"]),
    ("understand", &["comprehend", "grasp", "know", "learn", "get"]),
    ("explain", &["describe", "tell", "clarify", "elaborate", "break down"]),
    ("difference", &["compare", "distinguish", "contrast", "differentiate"]),
    ("best", &["top", "greatest", "recommended", "popular", "leading"]),
    ("popular", &["common", "widely used", "famous", "well-known", "trending"]),
];

impl SynonymTable {
    /// Tabela embutida com os grupos dos domínios suportados.
    pub fn builtin() -> Self {
        Self {
            groups: BUILTIN
                .iter()
                .map(|&(anchor, phrases)| SynonymGroup { anchor, phrases })
                .collect(),
        }
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    /// Expande conceitos com sinônimos e variantes singular/plural.
    ///
    /// Operação puramente aditiva: todo conceito de entrada está na saída.
    pub fn expand_concepts(&self, concepts: &[String]) -> BTreeSet<String> {
        let mut expanded = BTreeSet::new();
        for concept in concepts {
            expanded.insert(concept.clone());
            for group in &self.groups {
                let hit = overlaps(concept, group.anchor)
                    || group.phrases.iter().any(|p| overlaps(concept, p));
                if hit {
                    expanded.insert(group.anchor.to_string());
                    expanded.extend(group.phrases.iter().map(|p| p.to_string()));
                }
            }
            match concept.strip_suffix('s') {
                Some(singular) => expanded.insert(singular.to_string()),
                None => expanded.insert(format!("{concept}s")),
            };
        }
        expanded
    }
}

/// Substring em qualquer direção, com guarda para strings curtas.
pub fn overlaps(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let contains = |outer: &str, inner: &str| {
        inner.chars().count() >= MIN_CONTAINMENT_LEN && outer.contains(inner)
    };
    contains(a, b) || contains(b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(words: &[&str]) -> BTreeSet<String> {
        let concepts: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        SynonymTable::builtin().expand_concepts(&concepts)
    }

    #[test]
    fn db_expands_to_database_group() {
        let out = expand(&["db"]);
        assert!(out.contains("database"));
        assert!(out.contains("data storage"));
        assert!(out.contains("dbs"));
    }

    #[test]
    fn short_anchor_does_not_match_inside_words() {
        let out = expand(&["maintain"]);
        assert!(!out.contains("artificial intelligence"));
        assert!(out.contains("maintains"));
    }

    #[test]
    fn plural_variant_strips_s() {
        let out = expand(&["containers"]);
        assert!(out.contains("container"));
        assert!(out.contains("containers"));
    }

    #[test]
    fn expansion_never_removes() {
        let input = ["deploy", "cloud", "xyz"];
        let out = expand(&input);
        for w in input {
            assert!(out.contains(w));
        }
        assert!(out.contains("release"));
        assert!(out.contains("hosting"));
    }

    #[test]
    fn overlaps_guard() {
        assert!(overlaps("ai", "ai"));
        assert!(!overlaps("maintain", "ai"));
        assert!(overlaps("application", "app"));
        assert!(overlaps("app", "application"));
    }

    #[test]
    fn table_has_expected_size() {
        assert!(SynonymTable::builtin().groups().len() >= 25);
    }
}
