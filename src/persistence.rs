//! # Persistência — Histórico da Conversa em Disco
//!
//! O núcleo não guarda estado: o histórico vive no chamador e é salvo
//! por um [`HistoryStore`]. A implementação padrão é [`JsonFileStore`],
//! que grava a lista de [`Message`] como JSON em `data/history.json`.
//!
//! ## Formato de Armazenamento
//!
//! JSON "pretty-printed" para facilitar inspeção manual. Cada mensagem
//! carrega `id`, `text`, `sender` (`"user"`/`"bot"`), `timestamp` e,
//! opcionalmente, `emotion`.
//!
//! ## Falhas
//!
//! | Situação | `try_*` | Trait |
//! |----------|---------|-------|
//! | Arquivo ausente | `Ok(vec![])` | histórico vazio |
//! | JSON corrompido | `Err(Corrupt)` | log `warn!` + histórico vazio |
//! | Erro de I/O | `Err(Io)` | log `error!` e segue |
//!
//! ## ⚠️ Atomicidade
//!
//! A escrita **não é atômica**: crash durante escrita pode corromper
//! o arquivo. Um arquivo corrompido é tratado como histórico vazio.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::Message;

/// Caminho padrão do arquivo de histórico.
pub const DEFAULT_HISTORY_PATH: &str = "data/history.json";

/// Erros do armazenamento de histórico.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("falha de I/O no histórico: {0}")]
    Io(#[from] std::io::Error),
    #[error("histórico corrompido: {0}")]
    Corrupt(#[source] serde_json::Error),
}

/// Armazenamento do histórico da conversa.
///
/// Os métodos do trait nunca falham: erros são registrados e
/// neutralizados, para que uma falha de disco não derrube um turno.
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Vec<Message>;
    fn save(&self, history: &[Message]);
    fn clear(&self);
}

/// Histórico gravado em um arquivo JSON.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lê o histórico; arquivo ausente é um histórico vazio.
    pub fn try_load(&self) -> Result<Vec<Message>, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("Nenhum {} encontrado, iniciando conversa vazia", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&json).map_err(StoreError::Corrupt)
    }

    /// Grava o histórico, criando o diretório pai se não existir.
    pub fn try_save(&self, history: &[Message]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(history).map_err(StoreError::Corrupt)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove o arquivo; ausente já conta como limpo.
    pub fn try_clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Vec<Message> {
        match self.try_load() {
            Ok(history) => {
                tracing::info!(messages = history.len(), path = %self.path.display(), "Histórico carregado");
                history
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Histórico ilegível, iniciando vazio");
                Vec::new()
            }
        }
    }

    fn save(&self, history: &[Message]) {
        if let Err(e) = self.try_save(history) {
            tracing::error!(error = %e, path = %self.path.display(), "Falha ao salvar histórico");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.try_clear() {
            tracing::error!(error = %e, path = %self.path.display(), "Falha ao limpar histórico");
        }
    }
}
