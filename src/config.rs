//! # Configuração — Variáveis de Ambiente
//!
//! | Variável | Padrão | Efeito |
//! |----------|--------|--------|
//! | `MINICHAT_ADDR` | `0.0.0.0:3000` | Endereço do servidor HTTP |
//! | `MINICHAT_HISTORY` | `data/history.json` | Arquivo do histórico |
//! | `MINICHAT_SEED` | - | Semente do gerador de respostas |
//! | `MINICHAT_NORMALIZE_SLANG` | `false` | Liga a normalização de gírias |
//!
//! Valores inválidos são erros de configuração, nunca ignorados.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::persistence::DEFAULT_HISTORY_PATH;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Configuração do processo.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub history_path: PathBuf,
    pub seed: Option<u64>,
    pub normalize_slang: bool,
}

impl AppConfig {
    /// Lê a configuração das variáveis de ambiente do processo.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lê a configuração de uma função de busca arbitrária.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = lookup("MINICHAT_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("MINICHAT_ADDR inválido: {addr:?}"))?;

        let history_path: PathBuf = lookup("MINICHAT_HISTORY")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HISTORY_PATH.to_string())
            .into();

        let seed: Option<u64> = match lookup("MINICHAT_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("MINICHAT_SEED inválido: {raw:?}"))?,
            ),
            None => None,
        };

        let normalize_slang = match lookup("MINICHAT_NORMALIZE_SLANG") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("MINICHAT_NORMALIZE_SLANG inválido: {raw:?}"))?,
            None => false,
        };

        Ok(Self {
            addr,
            history_path,
            seed,
            normalize_slang,
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => bail!("esperado true/false/1/0, recebido {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.history_path, PathBuf::from("data/history.json"));
        assert_eq!(cfg.seed, None);
        assert!(!cfg.normalize_slang);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("MINICHAT_ADDR", "127.0.0.1:8080"),
            ("MINICHAT_HISTORY", "/tmp/chat.json"),
            ("MINICHAT_SEED", "42"),
            ("MINICHAT_NORMALIZE_SLANG", "TRUE"),
        ])
        .unwrap();
        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.history_path, PathBuf::from("/tmp/chat.json"));
        assert_eq!(cfg.seed, Some(42));
        assert!(cfg.normalize_slang);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(config(&[("MINICHAT_ADDR", "not an addr")]).is_err());
        assert!(config(&[("MINICHAT_SEED", "-3")]).is_err());
        let err = config(&[("MINICHAT_NORMALIZE_SLANG", "maybe")]).unwrap_err();
        assert!(format!("{err:#}").contains("MINICHAT_NORMALIZE_SLANG"));
    }

    #[test]
    fn flag_accepts_digits() {
        assert!(config(&[("MINICHAT_NORMALIZE_SLANG", "1")]).unwrap().normalize_slang);
        assert!(!config(&[("MINICHAT_NORMALIZE_SLANG", "0")]).unwrap().normalize_slang);
    }
}
