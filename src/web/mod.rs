//! # Módulo Web — A Interface do Chat
//!
//! Camada de apresentação construída com **Axum** + **HTMX** + **Maud**.
//! O núcleo continua sem estado: é aqui que o histórico vive, é
//! persistido e vira [`Context`](crate::core::Context) a cada turno.
//!
//! ## Arquitetura Web
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Browser (HTMX)                                       │
//! ├──────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                            │
//! │  ├── GET  /               → página do chat           │
//! │  ├── POST /chat           → HTMX fragment (um turno) │
//! │  ├── GET  /history        → JSON: mensagens          │
//! │  ├── POST /history/clear  → HTMX fragment            │
//! │  └── POST /api/respond    → JSON: Reply              │
//! ├──────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── HTMX fragments ───────────────────────────────────
        .route("/chat", post(handlers::chat))
        .route("/history/clear", post(handlers::clear_history))
        // ── API JSON ──────────────────────────────────────────
        .route("/history", get(handlers::history))
        .route("/api/respond", post(handlers::respond))
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(state)
}
