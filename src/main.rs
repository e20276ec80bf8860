//! # Mini Chatbot — Servidor de Chat
//!
//! **Ponto de entrada** da aplicação: lê a configuração, carrega o
//! histórico persistido e inicia o servidor web.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── AppConfig::from_env()
//!   ├── Compila as tabelas do orquestrador
//!   ├── Carrega o histórico (JsonFileStore)
//!   ├── Monta AppState e Router
//!   └── Inicia servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Logs de cada regra aplicada, semente fixa e gírias normalizadas
//! RUST_LOG=debug MINICHAT_SEED=42 MINICHAT_NORMALIZE_SLANG=true cargo run
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use mini_chatbot::config::AppConfig;
use mini_chatbot::orchestrator::Orchestrator;
use mini_chatbot::persistence::JsonFileStore;
use mini_chatbot::web::{self, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível. Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🤖 Mini Chatbot: Starting...");

    let config = AppConfig::from_env().context("Configuração inválida")?;
    tracing::info!(
        addr = %config.addr,
        history = %config.history_path.display(),
        seed = ?config.seed,
        normalize_slang = config.normalize_slang,
        "Configuração carregada"
    );

    let orchestrator = Orchestrator::builtin(config.normalize_slang)
        .context("Falha ao compilar as regras do orquestrador")?;
    tracing::info!(
        topics = orchestrator.knowledge_base().topics().len(),
        "Base de conhecimento pronta"
    );

    let store = Arc::new(JsonFileStore::new(config.history_path.clone()));
    let state = AppState::new(orchestrator, store, config.seed);
    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Falha ao abrir {}", config.addr))?;
    tracing::info!("🚀 Server running at http://{}", config.addr);

    axum::serve(listener, app).await.context("Servidor encerrado com erro")?;

    Ok(())
}
