//! Workflow orchestration between the HTTP client and the state store.
//!
//! Each workflow is a sequence of suspending calls interleaved with
//! dispatched state transitions. Re-entry is gated by the busy/processing
//! flag the workflow itself sets; distinct workflows may interleave.

use crate::console::api::RemoteService;
use crate::console::state::{AppState, Event};

/// Committed-snapshot seam between the workflows and whatever holds the
/// state (a reactive signal in the app, a plain cell in tests).
pub trait Store {
    fn snapshot(&self) -> AppState;
    fn dispatch(&self, event: Event);
}

pub async fn load_documents<S: RemoteService>(service: &S, store: &impl Store) {
    store.dispatch(Event::DocumentsLoaded(service.list_documents().await));
}

pub async fn load_models<S: RemoteService>(service: &S, store: &impl Store) {
    store.dispatch(Event::ModelsLoaded(service.list_models().await));
}

/// Upload every pending file, strictly in order, one request per file.
///
/// The first failure aborts the remaining files but still completes the
/// workflow: the busy flag is cleared and the pending set emptied either
/// way. The document list is refreshed from the backend only after full
/// success; it is never synthesized from upload responses.
pub async fn upload_documents<S: RemoteService>(service: &S, store: &impl Store) {
    let snapshot = store.snapshot();
    if snapshot.is_uploading {
        return;
    }
    let files = snapshot.pending_files;
    let doc_type = match snapshot.document_type {
        Some(doc_type) if !files.is_empty() => doc_type,
        _ => {
            store.dispatch(Event::ValidationFailed(
                "Please select files and a document type".to_string(),
            ));
            return;
        }
    };

    store.dispatch(Event::UploadStarted);

    let mut outcome = Ok(());
    for file in &files {
        let ingested = match file.read_text().await {
            Ok(content) => service.ingest_document(&content, doc_type).await,
            Err(e) => Err(e),
        };
        if let Err(e) = ingested {
            log::error!("upload of {} failed: {e}", file.name());
            outcome = Err(e);
            break;
        }
    }

    let succeeded = outcome.is_ok();
    store.dispatch(Event::UploadFinished(outcome));
    if succeeded {
        load_documents(service, store).await;
    }
}

/// Delete one document. The caller must already have confirmed the
/// deletion with the user. On success the list is refreshed from the
/// backend; on failure it stays stale until the next refresh.
pub async fn delete_document<S: RemoteService>(service: &S, store: &impl Store, id: &str) {
    let outcome = service.delete_document(id).await;
    let succeeded = outcome.is_ok();
    if let Err(e) = &outcome {
        log::error!("deletion of {id} failed: {e}");
    }
    store.dispatch(Event::DeletionFinished(id.to_string(), outcome));
    if succeeded {
        load_documents(service, store).await;
    }
}

/// Submit the current chat input to the route selected by the chat mode.
///
/// An input that is empty after trimming is ignored without a notice, and
/// so is a submission while a query is already in flight.
pub async fn submit_query<S: RemoteService>(service: &S, store: &impl Store) {
    let snapshot = store.snapshot();
    if snapshot.chat_input.trim().is_empty() || snapshot.is_processing {
        return;
    }

    // The question is fixed at submission time; the raw input is sent.
    let question = snapshot.chat_input.clone();
    store.dispatch(Event::QueryStarted);
    let outcome = service.submit_query(&question, snapshot.chat_mode).await;
    store.dispatch(Event::QueryFinished { question, outcome });
}
