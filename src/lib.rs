//! # Mini Chatbot
//!
//! Motor de respostas baseado em regras: recebe uma frase e o histórico
//! da conversa e devolve `(texto, emoção)`. Sem modelos treinados, sem
//! estado entre chamadas.
//!
//! ## Camadas
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`core`] | Tipos do domínio, base de conhecimento, `Chooser` |
//! | [`nlu`] | Tokenização, conceitos, sinônimos, humor, intenções, referências |
//! | [`orchestrator`] | Cascata de regras que escolhe a resposta |
//! | [`persistence`] | Histórico da conversa em JSON |
//! | [`web`] | Chat HTTP (Axum + HTMX + Maud) |
//! | [`config`] | Variáveis de ambiente |

pub mod config;
pub mod core;
pub mod nlu;
pub mod orchestrator;
pub mod persistence;
pub mod web;
