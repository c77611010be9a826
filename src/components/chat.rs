use chrono::Local;
use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::config;
use crate::state::chat::{prepare_send, reply_text, server_error_text, Author, ChatMessage};

#[derive(Deserialize)]
struct ChatReply {
    response: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

pub enum ChatWidgetMsg {
    Toggle,
    Close,
    Send,
    Reply(String),
}

/// Floating support chat. One request per user message; the send button
/// is disabled while a request is in flight and re-enabled on every
/// completion branch. Overlapping sends from the Enter key racing a
/// click are allowed, replies append in arrival order.
pub struct ChatWidget {
    open: bool,
    seen: bool,
    sending: bool,
    messages: Vec<ChatMessage>,
    input: NodeRef,
    list: NodeRef,
    needs_focus: bool,
    keydown: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            seen: false,
            sending: false,
            messages: vec![ChatMessage::agent(
                "Hi, I'm Sarah from Webnify. How can I help you today?",
                now_hhmm(),
            )],
            input: NodeRef::default(),
            list: NodeRef::default(),
            needs_focus: false,
            keydown: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    link.send_message(ChatWidgetMsg::Close);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);

            let document = web_sys::window().unwrap().document().unwrap();
            document
                .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                .unwrap();
            self.keydown = Some(callback);
        }

        if let Some(list) = self.list.cast::<HtmlElement>() {
            list.set_scroll_top(list.scroll_height());
        }
        if self.needs_focus {
            self.needs_focus = false;
            if let Some(input) = self.input.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(callback) = self.keydown.take() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.open = !self.open;
                if self.open {
                    self.seen = true;
                    self.needs_focus = true;
                }
                true
            }
            ChatWidgetMsg::Close => {
                if !self.open {
                    return false;
                }
                self.open = false;
                true
            }
            ChatWidgetMsg::Send => {
                let input = match self.input.cast::<HtmlInputElement>() {
                    Some(input) => input,
                    None => return false,
                };
                let text = match prepare_send(&input.value()) {
                    Some(text) => text,
                    None => return false,
                };

                self.messages.push(ChatMessage::user(text.clone(), now_hhmm()));
                input.set_value("");
                self.sending = true;

                ctx.link().send_future(async move {
                    let outcome = match Request::post(&format!(
                        "{}/chat",
                        config::get_backend_url()
                    ))
                    .json(&json!({ "message": text }))
                    {
                        Ok(request) => match request.send().await {
                            Ok(response) => {
                                if response.ok() {
                                    match response.json::<ChatReply>().await {
                                        Ok(reply) => Ok(reply.response),
                                        Err(error) => Err(error.to_string()),
                                    }
                                } else {
                                    let error = response
                                        .json::<ErrorResponse>()
                                        .await
                                        .ok()
                                        .map(|reply| reply.error);
                                    Err(server_error_text(error))
                                }
                            }
                            Err(error) => {
                                log!("Chat request failed:", error.to_string());
                                Err(error.to_string())
                            }
                        },
                        Err(error) => Err(error.to_string()),
                    };
                    ChatWidgetMsg::Reply(reply_text(outcome))
                });
                true
            }
            ChatWidgetMsg::Reply(text) => {
                self.messages.push(ChatMessage::agent(text, now_hhmm()));
                self.sending = false;
                self.needs_focus = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let sending = self.sending;
        let onkeypress = ctx.link().batch_callback(move |e: KeyboardEvent| {
            (e.key() == "Enter" && !sending).then_some(ChatWidgetMsg::Send)
        });

        html! {
            <div class="chat-widget">
                <style>
                    {r#"
                    .chat-widget { position: fixed; bottom: 30px; right: 30px; z-index: 9500; }
                    .chat-toggle {
                        position: relative;
                        width: 56px;
                        height: 56px;
                        border: none;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #3b82f6, #1d4ed8);
                        color: white;
                        font-size: 1.4rem;
                        cursor: pointer;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.35);
                    }
                    .chat-notification {
                        position: absolute;
                        top: -4px;
                        right: -4px;
                        width: 20px;
                        height: 20px;
                        border-radius: 50%;
                        background: #ef4444;
                        color: white;
                        font-size: 0.7rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .chat-window {
                        position: absolute;
                        bottom: 72px;
                        right: 0;
                        width: 340px;
                        height: 440px;
                        display: none;
                        flex-direction: column;
                        background: rgba(15, 23, 42, 0.98);
                        border: 1px solid rgba(59, 130, 246, 0.25);
                        border-radius: 16px;
                        overflow: hidden;
                        box-shadow: 0 20px 50px rgba(0, 0, 0, 0.45);
                    }
                    .chat-window.active { display: flex; }
                    .chat-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.9rem 1.1rem;
                        background: rgba(30, 41, 59, 0.9);
                    }
                    .chat-header h4 { font-size: 1rem; }
                    .chat-header p {
                        font-size: 0.75rem;
                        color: #10b981;
                    }
                    .chat-close {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.7);
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .chat-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .message { display: flex; gap: 0.5rem; }
                    .message.user-message { flex-direction: row-reverse; }
                    .message-avatar {
                        width: 28px;
                        height: 28px;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #10b981, #059669);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.75rem;
                        flex-shrink: 0;
                    }
                    .message-content {
                        background: rgba(30, 41, 59, 0.9);
                        border-radius: 12px;
                        padding: 0.6rem 0.85rem;
                        max-width: 80%;
                    }
                    .user-message .message-content {
                        background: linear-gradient(135deg, #3b82f6, #1d4ed8);
                    }
                    .message-content p { font-size: 0.9rem; line-height: 1.45; }
                    .message-time {
                        display: block;
                        margin-top: 0.25rem;
                        font-size: 0.7rem;
                        color: rgba(255, 255, 255, 0.45);
                    }
                    .chat-input-row {
                        display: flex;
                        gap: 0.5rem;
                        padding: 0.75rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .chat-input-row input {
                        flex: 1;
                        padding: 0.6rem 0.85rem;
                        border-radius: 10px;
                        border: 1px solid rgba(59, 130, 246, 0.25);
                        background: rgba(30, 41, 59, 0.9);
                        color: white;
                        font: inherit;
                    }
                    .chat-send {
                        border: none;
                        border-radius: 10px;
                        padding: 0 1rem;
                        background: linear-gradient(135deg, #3b82f6, #1d4ed8);
                        color: white;
                        cursor: pointer;
                    }
                    .chat-send:disabled { opacity: 0.5; cursor: not-allowed; }
                    "#}
                </style>
                <div class={classes!("chat-window", self.open.then(|| "active"))}>
                    <div class="chat-header">
                        <div>
                            <h4>{"Sarah"}</h4>
                            <p>{"● Online"}</p>
                        </div>
                        <button
                            class="chat-close"
                            onclick={ctx.link().callback(|_| ChatWidgetMsg::Close)}
                            aria-label="Close chat"
                        >
                            {"✕"}
                        </button>
                    </div>
                    <div class="chat-messages" ref={self.list.clone()}>
                        { for self.messages.iter().map(render_message) }
                    </div>
                    <div class="chat-input-row">
                        <input
                            ref={self.input.clone()}
                            type="text"
                            placeholder="Type a message..."
                            {onkeypress}
                        />
                        <button
                            class="chat-send"
                            onclick={ctx.link().callback(|_| ChatWidgetMsg::Send)}
                            disabled={self.sending}
                        >
                            {"Send"}
                        </button>
                    </div>
                </div>
                <button
                    class="chat-toggle"
                    onclick={ctx.link().callback(|_| ChatWidgetMsg::Toggle)}
                    aria-label="Toggle chat"
                >
                    {"💬"}
                    if !self.seen {
                        <span class="chat-notification">{"1"}</span>
                    }
                </button>
            </div>
        }
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let class = match message.author {
        Author::User => "message user-message",
        Author::Agent => "message agent-message",
    };

    html! {
        <div {class}>
            if message.author == Author::Agent {
                <div class="message-avatar">{"S"}</div>
            }
            <div class="message-content">
                <p>{ &message.text }</p>
                <span class="message-time">{ &message.timestamp }</span>
            </div>
        </div>
    }
}
