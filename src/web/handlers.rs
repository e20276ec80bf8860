//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`]. As rotas do chat seguem o padrão
//! **HTMX fragment**; `/history` e `/api/respond` falam JSON.
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Página do chat com o histórico |
//! | `chat` | POST | HTMX fragment | Um turno da conversa |
//! | `history` | GET | JSON | Histórico completo |
//! | `clear_history` | POST | HTMX fragment | Apaga a conversa |
//! | `respond` | POST | JSON | Contrato do núcleo, sem estado |
//!
//! ## Um Turno
//!
//! ```text
//! 1. Contexto = histórico ANTES da nova mensagem (últimas 5 = recentes)
//! 2. Humor do usuário + resposta do orquestrador (mesmo gerador)
//! 3. Anexa usuário e bot ao histórico e tira um snapshot
//! 4. Solta os locks e persiste o snapshot em spawn_blocking
//! 5. Renderiza as duas mensagens + humor atual
//! ```

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use chrono::Local;
use serde::Deserialize;

use super::state::AppState;
use super::templates;
use crate::core::{Context, Message, Reply};

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// Dados do formulário de chat (campo `message` do form HTML).
#[derive(Deserialize)]
pub struct ChatForm {
    pub message: String,
}

/// Corpo de `/api/respond`.
#[derive(Deserialize)]
pub struct RespondRequest {
    pub utterance: String,
    /// Histórico anterior à frase, em ordem cronológica.
    #[serde(default)]
    pub history: Vec<Message>,
}

/// GET `/`: Página principal do chat.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let history = state.history.lock();
    markup_to_html(templates::full_page(&history))
}

/// POST `/chat`: Processa um turno e devolve o fragmento HTMX.
///
/// Uma frase vazia recebe o convite do orquestrador, mas não entra
/// no histórico.
pub async fn chat(State(state): State<AppState>, Form(form): Form<ChatForm>) -> Html<String> {
    let user_text = form.message.trim().to_string();
    let now = Local::now().naive_local();

    if user_text.is_empty() {
        let reply = {
            let history = state.history.lock();
            let mut rng = state.rng.lock();
            state
                .orchestrator
                .respond("", &Context::from_history(&history), &mut *rng, now)
        };
        return markup_to_html(templates::message(&reply.into_message()));
    }

    let _persist = state.persist.lock().await;
    let (user, bot, snapshot) = {
        let mut history = state.history.lock();
        let context = Context::from_history(&history);
        let mut rng = state.rng.lock();
        let mood = state.orchestrator.nlu().detect_emotion(&user_text, &mut *rng);
        let reply = state
            .orchestrator
            .respond(&user_text, &context, &mut *rng, now);
        drop(rng);

        let user = Message::user(user_text, Some(mood));
        let bot = reply.into_message();
        history.push(user.clone());
        history.push(bot.clone());
        (user, bot, history.clone())
    };
    persist_snapshot(&state, snapshot).await;

    tracing::info!(
        emotion = %bot.emotion.as_ref().map_or("none", |e| e.kind.as_str()),
        "Turno processado"
    );
    markup_to_html(templates::exchange(&user, &bot))
}

/// GET `/history`: Histórico completo como JSON.
pub async fn history(State(state): State<AppState>) -> Json<Vec<Message>> {
    Json(state.history.lock().clone())
}

/// Grava o snapshot numa thread de bloqueio; os locks do histórico já
/// foram liberados.
async fn persist_snapshot(state: &AppState, snapshot: Vec<Message>) {
    let store = state.store.clone();
    if let Err(e) = tokio::task::spawn_blocking(move || store.save(&snapshot)).await {
        tracing::error!(error = %e, "Tarefa de gravação do histórico falhou");
    }
}

/// POST `/history/clear`: Apaga a conversa em memória e em disco.
pub async fn clear_history(State(state): State<AppState>) -> Html<String> {
    let _persist = state.persist.lock().await;
    state.history.lock().clear();
    let store = state.store.clone();
    if let Err(e) = tokio::task::spawn_blocking(move || store.clear()).await {
        tracing::error!(error = %e, "Tarefa de limpeza do histórico falhou");
    }
    tracing::info!("Histórico apagado pelo usuário");
    markup_to_html(templates::welcome())
}

/// POST `/api/respond`: `{ utterance, history? }` → [`Reply`].
///
/// Não lê nem grava o histórico do servidor.
pub async fn respond(
    State(state): State<AppState>,
    Json(req): Json<RespondRequest>,
) -> Json<Reply> {
    let context = Context::from_history(&req.history);
    let mut rng = state.rng.lock();
    let reply = state.orchestrator.respond(
        &req.utterance,
        &context,
        &mut *rng,
        Local::now().naive_local(),
    );
    Json(reply)
}
