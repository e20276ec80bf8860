//! # Estado da Aplicação Web
//!
//! Define o estado compartilhado entre todos os handlers Axum.
//!
//! ```text
//! AppState (Clone, barato: só Arcs)
//!  ├── orchestrator → política de diálogo (imutável, sem estado)
//!  ├── history      → log da conversa em memória (parking_lot::Mutex)
//!  ├── store        → persistência do log (dyn HistoryStore)
//!  ├── persist      → ordena as gravações (tokio::sync::Mutex)
//!  └── rng          → gerador semeável das escolhas de resposta
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::Message;
use crate::orchestrator::Orchestrator;
use crate::persistence::HistoryStore;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    /// Histórico completo, em ordem cronológica.
    pub history: Arc<Mutex<Vec<Message>>>,
    pub store: Arc<dyn HistoryStore>,
    /// Segurado do início do turno até o fim da gravação: os snapshots
    /// chegam ao disco na mesma ordem em que o histórico mudou.
    pub persist: Arc<tokio::sync::Mutex<()>>,
    pub rng: Arc<Mutex<ChaCha8Rng>>,
}

impl AppState {
    /// Monta o estado carregando o histórico do `store`.
    ///
    /// Sem `seed`, o gerador é semeado com entropia do sistema.
    pub fn new(orchestrator: Orchestrator, store: Arc<dyn HistoryStore>, seed: Option<u64>) -> Self {
        let history = store.load();
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            orchestrator: Arc::new(orchestrator),
            history: Arc::new(Mutex::new(history)),
            store,
            persist: Arc::new(tokio::sync::Mutex::new(())),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}
