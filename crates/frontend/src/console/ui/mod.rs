//! Console screen: upload panel, document list and chat panel over one
//! shared reactive store.

mod chat_panel;
mod document_list;
mod upload_panel;

use leptos::prelude::*;

use crate::console::api::HttpClient;
use crate::console::controller::{self, Store};
use crate::console::state::{reduce, AppState, Event};

use chat_panel::ChatPanel;
use document_list::DocumentList;
use upload_panel::UploadPanel;

/// Reactive store handed to every panel. Dispatching runs the pure
/// reducer inside the signal update, so the view only ever sees
/// committed snapshots.
#[derive(Clone, Copy)]
pub struct ConsoleStore {
    state: RwSignal<AppState>,
}

impl ConsoleStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AppState::default()),
        }
    }

    pub fn state(&self) -> RwSignal<AppState> {
        self.state
    }
}

impl Default for ConsoleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for ConsoleStore {
    fn snapshot(&self) -> AppState {
        self.state.get_untracked()
    }

    fn dispatch(&self, event: Event) {
        self.state.update(|state| reduce(state, event));
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ConsolePage() -> impl IntoView {
    let store = ConsoleStore::new();

    // Initial load: documents and models, once at startup.
    wasm_bindgen_futures::spawn_local(async move {
        let client = HttpClient::from_window();
        controller::load_documents(&client, &store).await;
        controller::load_models(&client, &store).await;
    });

    view! {
        <div class="page">
            <UploadPanel store=store />
            <DocumentList store=store />
            <ChatPanel store=store />
        </div>
    }
}
