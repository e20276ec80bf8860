//! # Templates Maud — HTML Server-Side Rendering
//!
//! Templates HTML compilados com o macro [`maud`](https://maud.lambda.xyz/).
//! O padrão é **Hypermedia-Driven**: o servidor devolve fragmentos HTML
//! e o HTMX os injeta em `#chat-messages`.
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Chat com o histórico persistido |
//! | [`exchange()`] | Fragment HTMX | Mensagem do usuário + resposta + humor |
//! | [`welcome()`] | Fragment HTMX | Mensagem de boas-vindas |
//!
//! ## Layout
//!
//! ```text
//! ┌──────────── nav-bar ─────────────┐
//! │ 🤖 Mini Chatbot          😊 happy │  ← #mood (hx-swap-oob)
//! ├──────────────────────────────────┤
//! │  #chat-messages                  │
//! │    bot:  Hello! ...              │
//! │    user:           What is React?│
//! ├──────────────────────────────────┤
//! │ [🗑 Limpar] [______________][Send]│
//! └──────────────────────────────────┘
//! ```

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::core::emotion::SMILE;
use crate::core::{Emotion, EmotionKind, Message, Sender};

/// Texto da mensagem de boas-vindas.
pub const WELCOME_TEXT: &str = "Hello! I'm Mini Chatbot. How can I help you today? 😊";

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

/// Página principal com o histórico já renderizado.
pub fn full_page(history: &[Message]) -> Markup {
    let mood = history
        .iter()
        .rev()
        .find(|m| m.sender == Sender::Assistant)
        .and_then(|m| m.emotion.clone())
        .unwrap_or_else(|| Emotion::new(EmotionKind::Friendly, SMILE));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Mini Chatbot" }
                link rel="stylesheet" href="/assets/style.css";
                script src=(HTMX_SRC) {}
            }
            body {
                div class="app-shell" {
                    nav class="nav-bar" {
                        a href="/" class="nav-brand" {
                            span class="nav-brand-icon" { "🤖" }
                            span class="nav-brand-text" { "Mini " em { "Chatbot" } }
                        }
                        (mood_badge(&mood, false))
                    }

                    div class="chat-panel" {
                        div id="chat-messages" class="chat-messages" {
                            @if history.is_empty() {
                                (welcome())
                            } @else {
                                @for msg in history {
                                    (message(msg))
                                }
                            }
                        }

                        div class="chat-input-area" {
                            button class="clear-btn"
                                hx-post="/history/clear"
                                hx-target="#chat-messages"
                                hx-swap="innerHTML"
                                hx-confirm="Apagar toda a conversa?" {
                                "🗑 Limpar"
                            }

                            form id="chat-form"
                                hx-post="/chat"
                                hx-target="#chat-messages"
                                hx-swap="beforeend"
                                hx-on--after-request="this.reset()" {
                                input type="text" name="message"
                                    placeholder="Type a message..."
                                    autocomplete="off"
                                    autofocus;
                                button type="submit" { "Send" }
                            }
                        }
                    }
                }

                (PreEscaped(r#"<script>
document.addEventListener('DOMContentLoaded', function() {
  var msgs = document.getElementById('chat-messages');
  if (msgs) {
    var observer = new MutationObserver(function() {
      msgs.scrollTop = msgs.scrollHeight;
    });
    observer.observe(msgs, { childList: true, subtree: true });
    msgs.scrollTop = msgs.scrollHeight;
  }
});
</script>"#))
            }
        }
    }
}

/// Mensagem de boas-vindas exibida com o histórico vazio.
pub fn welcome() -> Markup {
    html! {
        div class="message bot-message welcome" {
            div class="message-role" { "Mini Chatbot" }
            div class="message-content" { (WELCOME_TEXT) }
        }
    }
}

/// Uma mensagem do histórico.
pub fn message(msg: &Message) -> Markup {
    let (class, role) = match msg.sender {
        Sender::User => ("message user-message", "You"),
        Sender::Assistant => ("message bot-message", "Mini Chatbot"),
    };
    html! {
        div class=(class) data-emotion=[msg.emotion.as_ref().map(|e| e.kind.as_str())] {
            div class="message-role" {
                (role)
                @if let Some(emotion) = &msg.emotion {
                    " " span class="message-emoji" title=(emotion.kind.as_str()) { (emotion.glyph) }
                }
            }
            div class="message-content" { (msg.text) }
            div class="message-time" { (msg.timestamp.format("%H:%M").to_string()) }
        }
    }
}

/// Fragmento de um turno: as duas mensagens e o humor atualizado.
pub fn exchange(user: &Message, bot: &Message) -> Markup {
    html! {
        (message(user))
        (message(bot))
        @if let Some(emotion) = &bot.emotion {
            (mood_badge(emotion, true))
        }
    }
}

fn mood_badge(emotion: &Emotion, out_of_band: bool) -> Markup {
    html! {
        div id="mood" class="nav-status" hx-swap-oob=[out_of_band.then_some("true")] {
            span class="mood-glyph" { (emotion.glyph) }
            span class="mood-label" { (emotion.kind.as_str()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_shows_welcome() {
        let page = full_page(&[]).into_string();
        assert!(page.contains(WELCOME_TEXT));
        assert!(page.contains("hx-post=\"/chat\""));
    }

    #[test]
    fn form_resets_after_each_request() {
        let page = full_page(&[]).into_string();
        assert!(page.contains("hx-on--after-request=\"this.reset()\""));
    }

    #[test]
    fn history_replaces_welcome() {
        let history = vec![
            Message::user("hi <b>", None),
            Message::assistant("Hello!", Emotion::new(EmotionKind::Happy, "👋")),
        ];
        let page = full_page(&history).into_string();
        assert!(!page.contains(WELCOME_TEXT));
        assert!(page.contains("hi &lt;b&gt;"));
        assert!(page.contains("data-emotion=\"happy\""));
    }

    #[test]
    fn exchange_updates_mood_out_of_band() {
        let user = Message::user("bye", None);
        let bot = Message::assistant("Goodbye!", Emotion::new(EmotionKind::Happy, "👋"));
        let html = exchange(&user, &bot).into_string();
        assert!(html.contains("user-message"));
        assert!(html.contains("bot-message"));
        assert!(html.contains("hx-swap-oob=\"true\""));
    }
}
