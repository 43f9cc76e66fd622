use contracts::documents::DocType;
use leptos::prelude::*;
use thaw::*;

use super::ConsoleStore;
use crate::console::api::HttpClient;
use crate::console::controller::{self, Store};
use crate::console::files::PendingFile;
use crate::console::state::{Event, Selection};

#[component]
#[allow(non_snake_case)]
pub fn UploadPanel(store: ConsoleStore) -> impl IntoView {
    let state = store.state();
    let is_uploading = Signal::derive(move || state.get().is_uploading);

    let handle_upload = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let client = HttpClient::from_window();
            controller::upload_documents(&client, &store).await;
        });
    };

    let handle_refresh = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let client = HttpClient::from_window();
            controller::load_documents(&client, &store).await;
        });
    };

    view! {
        <div class="panel">
            <div class="panel__header">
                <h2 class="panel__title">"Document upload"</h2>
                {move || {
                    state
                        .get()
                        .is_uploading
                        .then(|| view! { <span class="panel__spinner">"..."</span> })
                }}
            </div>

            <div class="panel__selects">
                <select
                    class="select"
                    prop:value=move || {
                        state
                            .get()
                            .document_type
                            .map(|doc_type| doc_type.code())
                            .unwrap_or("")
                            .to_string()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        store
                            .dispatch(
                                Event::SelectionChanged(
                                    Selection::DocumentType(DocType::from_code(&value)),
                                ),
                            );
                    }
                >
                    <option value="">"Select document type"</option>
                    {DocType::selectable()
                        .into_iter()
                        .map(|doc_type| {
                            view! {
                                <option value=doc_type.code()>{doc_type.display_name()}</option>
                            }
                        })
                        .collect_view()}
                </select>

                <select
                    class="select"
                    prop:value=move || state.get().selected_model
                    disabled=move || state.get().models.is_empty()
                    on:change=move |ev| {
                        store
                            .dispatch(
                                Event::SelectionChanged(Selection::Model(event_target_value(&ev))),
                            );
                    }
                >
                    <option value="">"Select model"</option>
                    {move || {
                        state
                            .get()
                            .models
                            .into_iter()
                            .map(|model| {
                                view! {
                                    <option value=model.name.clone()>{model.name.clone()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            {move || {
                state
                    .get()
                    .models
                    .is_empty()
                    .then(|| {
                        view! {
                            <p class="panel__warning">
                                "No models available. Make sure models are loaded on the server."
                            </p>
                        }
                    })
            }}

            <input
                type="file"
                multiple
                class="panel__file-input"
                on:change=move |ev| {
                    use wasm_bindgen::JsCast;
                    let input: web_sys::HtmlInputElement = ev
                        .target()
                        .unwrap()
                        .dyn_into()
                        .unwrap();
                    let mut files = Vec::new();
                    if let Some(list) = input.files() {
                        for index in 0..list.length() {
                            if let Some(file) = list.get(index) {
                                files.push(PendingFile::from_browser(file));
                            }
                        }
                    }
                    store.dispatch(Event::SelectionChanged(Selection::Files(files)));
                }
            />

            <div class="panel__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_uploading
                    on_click=move |_| handle_upload()
                >
                    {move || if state.get().is_uploading { "Uploading..." } else { "Upload" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| handle_refresh()
                >
                    "Refresh"
                </Button>
            </div>

            {move || {
                state
                    .get()
                    .notice()
                    .map(|notice| {
                        view! {
                            <div class="notice" class:notice--error=notice.is_error>
                                <p>{notice.text}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
