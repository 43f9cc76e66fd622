use contracts::query::ChatMode;
use leptos::prelude::*;
use thaw::*;

use super::ConsoleStore;
use crate::console::api::HttpClient;
use crate::console::controller::{self, Store};
use crate::console::state::{Event, Selection};

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel(store: ConsoleStore) -> impl IntoView {
    let state = store.state();
    let is_processing = Signal::derive(move || state.get().is_processing);

    let handle_send = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let client = HttpClient::from_window();
            controller::submit_query(&client, &store).await;
        });
    };

    view! {
        <div class="panel">
            <h2 class="panel__title">"RAG query interface"</h2>

            <div class="chat__mode">
                <label for="chat-mode">"Chat mode:"</label>
                <select
                    id="chat-mode"
                    class="select"
                    prop:value=move || state.get().chat_mode.code().to_string()
                    on:change=move |ev| {
                        if let Some(mode) = ChatMode::from_code(&event_target_value(&ev)) {
                            store.dispatch(Event::SelectionChanged(Selection::ChatMode(mode)));
                        }
                    }
                >
                    {ChatMode::all()
                        .into_iter()
                        .map(|mode| {
                            view! { <option value=mode.code()>{mode.display_name()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="chat__history">
                {move || {
                    state
                        .get()
                        .chat_history
                        .into_iter()
                        .map(|turn| {
                            view! {
                                <div class="chat__turn">
                                    <p class="chat__question">{format!("Q: {}", turn.question)}</p>
                                    <p class="chat__answer">{format!("A: {}", turn.answer)}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    state
                        .get()
                        .is_processing
                        .then(|| view! { <p class="chat__processing">"Processing..."</p> })
                }}
            </div>

            // Latest answer, or a failed query's error shown inline only
            {move || {
                let response = state.get().chat_response;
                (!response.is_empty())
                    .then(|| view! { <div class="chat__response">{response}</div> })
            }}

            <div class="chat__compose">
                <textarea
                    class="chat__input"
                    placeholder="Type your question..."
                    rows="3"
                    prop:value=move || state.get().chat_input
                    on:input=move |ev| {
                        store
                            .dispatch(
                                Event::SelectionChanged(
                                    Selection::ChatInput(event_target_value(&ev)),
                                ),
                            );
                    }
                ></textarea>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_processing
                    on_click=move |_| handle_send()
                >
                    "Send"
                </Button>
            </div>
        </div>
    }
}
