use leptos::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

const CHAT_WS_URL: &str = "ws://localhost:3000/api/chat";

/// A chat message received from the auction chat socket
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub username: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}

/// A message sent over the socket; the server attributes the sender.
#[derive(Serialize)]
struct OutgoingMessage {
    content: String,
}

/// Live chat alongside the auction listings. Connects once on mount; socket
/// failures surface as a status line inside the widget.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let messages = create_rw_signal(Vec::<ChatMessage>::new());
    let draft = create_rw_signal(String::new());
    let status = create_rw_signal(None::<String>);
    let socket = create_rw_signal(None::<WebSocket>);

    match WebSocket::new(CHAT_WS_URL) {
        Ok(ws) => {
            let onmessage = Closure::wrap(Box::new(move |ev: MessageEvent| {
                if let Some(text) = ev.data().as_string() {
                    match serde_json::from_str::<ChatMessage>(&text) {
                        Ok(msg) => messages.update(|all| all.push(msg)),
                        Err(err) => log::error!("Failed to parse chat message '{text}': {err}"),
                    }
                } else {
                    log::error!("Ignoring non-text chat frame");
                }
            }) as Box<dyn FnMut(MessageEvent)>);
            ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
            onmessage.forget();

            let onclose = Closure::wrap(Box::new(move |ev: CloseEvent| {
                log::info!("Chat socket closed: {:?}", ev.reason());
                status.set(Some("Chat disconnected".to_string()));
            }) as Box<dyn FnMut(CloseEvent)>);
            ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
            onclose.forget();

            let onerror = Closure::wrap(Box::new(move |_: JsValue| {
                log::error!("Chat socket error");
                status.set(Some("Chat connection error".to_string()));
            }) as Box<dyn FnMut(JsValue)>);
            ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onerror.forget();

            socket.set(Some(ws));
        }
        Err(err) => {
            log::error!("Failed to open chat socket: {err:?}");
            status.set(Some("Chat unavailable".to_string()));
        }
    }

    let on_send = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get();
        if content.is_empty() {
            return;
        }

        if let Some(ws) = socket.get() {
            let outgoing = OutgoingMessage { content };
            if let Ok(json) = serde_json::to_string(&outgoing) {
                if let Err(err) = ws.send_with_str(&json) {
                    log::error!("Failed to send chat message: {err:?}");
                    status.set(Some("Failed to send message".to_string()));
                } else {
                    draft.set(String::new());
                }
            }
        } else {
            status.set(Some("Chat is not connected".to_string()));
        }
    };

    view! {
        <section class="bg-white border border-gray-200 rounded-lg shadow-sm p-4">
            <h2 class="text-2xl font-semibold text-gray-800 mb-4">Chat</h2>

            <Show when=move || status.get().is_some() fallback=|| ()>
                <p class="text-sm text-gray-500 italic mb-2">{status.get().unwrap()}</p>
            </Show>

            <div class="h-64 overflow-y-auto space-y-2 mb-4">
                <For
                    each=move || messages.get()
                    key=|msg| format!("{}-{}-{}", msg.timestamp, msg.username, msg.content)
                    children=move |msg: ChatMessage| view! {
                        <div class="text-sm">
                            <span class="font-bold text-gray-800 mr-2">{msg.username}</span>
                            <span class="text-gray-700">{msg.content}</span>
                        </div>
                    }
                />
            </div>

            <form class="flex space-x-2" on:submit=on_send>
                <input class="flex-1 shadow-sm border rounded-lg py-2 px-3 text-gray-700"
                    type="text" placeholder="Type a message..."
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    prop:value=draft />
                <button class="bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded-lg"
                    type="submit">
                    Send
                </button>
            </form>
        </section>
    }
}
