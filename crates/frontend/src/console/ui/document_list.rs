use leptos::prelude::*;

use super::ConsoleStore;
use crate::console::api::HttpClient;
use crate::console::controller;

#[component]
#[allow(non_snake_case)]
pub fn DocumentList(store: ConsoleStore) -> impl IntoView {
    let state = store.state();

    let handle_delete = move |id: String| {
        // Simple confirm dialog via browser
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Are you sure you want to delete this document?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            let client = HttpClient::from_window();
            controller::delete_document(&client, &store, &id).await;
        });
    };

    view! {
        <div class="panel">
            <h2 class="panel__title">"Loaded documents"</h2>
            {move || {
                let documents = state.get().documents;
                if documents.is_empty() {
                    view! { <p class="panel__empty">"No documents loaded yet."</p> }.into_any()
                } else {
                    documents
                        .into_iter()
                        .map(|doc| {
                            let id = doc.id.clone();
                            let name = doc.display_name().to_string();
                            let doc_type = doc.metadata.doc_type.display_name();
                            view! {
                                <div class="document-row">
                                    <div>
                                        <span class="document-row__name">{name}</span>
                                        <span class="document-row__type">
                                            {format!("({doc_type})")}
                                        </span>
                                    </div>
                                    <button
                                        class="button button--danger"
                                        on:click=move |_| handle_delete(id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
