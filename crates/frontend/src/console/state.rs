//! The console's state store: one snapshot struct plus a pure reducer.
//!
//! No I/O happens here. Workflows dispatch [`Event`]s between their
//! suspension points; the presentation layer only ever observes committed
//! snapshots.

use contracts::documents::{DocType, Document};
use contracts::models::ModelDescriptor;
use contracts::query::{ChatMode, ChatTurn};

use crate::console::error::ApiError;
use crate::console::files::PendingFile;

/// Authoritative snapshot of everything the console screen shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub documents: Vec<Document>,
    pub models: Vec<ModelDescriptor>,
    /// Empty, or the name of some entry in `models`
    pub selected_model: String,
    /// `None` is an invalid submission state for upload
    pub document_type: Option<DocType>,
    pub chat_mode: ChatMode,
    pub upload_status: String,
    pub error_message: String,
    pub is_uploading: bool,
    /// Ordered; cleared unconditionally when an upload workflow completes
    pub pending_files: Vec<PendingFile>,
    pub chat_input: String,
    /// Latest answer text, or the inline error of a failed query
    pub chat_response: String,
    pub chat_history: Vec<ChatTurn>,
    pub is_processing: bool,
}

/// Single-slot notice derived from the transient status fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl AppState {
    /// The one notice shown to the user. The error message, when present,
    /// always takes precedence over the upload status.
    pub fn notice(&self) -> Option<Notice> {
        if !self.error_message.is_empty() {
            Some(Notice {
                text: self.error_message.clone(),
                is_error: true,
            })
        } else if !self.upload_status.is_empty() {
            Some(Notice {
                text: self.upload_status.clone(),
                is_error: false,
            })
        } else {
            None
        }
    }
}

/// A user edit of one selection field
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Model(String),
    DocumentType(Option<DocType>),
    ChatMode(ChatMode),
    ChatInput(String),
    Files(Vec<PendingFile>),
}

/// State transitions. Loaded/finished events carry the workflow outcome so
/// failure handling stays inside the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DocumentsLoaded(Result<Vec<Document>, ApiError>),
    ModelsLoaded(Result<Vec<ModelDescriptor>, ApiError>),
    SelectionChanged(Selection),
    UploadStarted,
    UploadFinished(Result<(), ApiError>),
    DeletionFinished(String, Result<(), ApiError>),
    QueryStarted,
    QueryFinished {
        question: String,
        outcome: Result<String, ApiError>,
    },
    /// A workflow precondition failed locally; nothing was sent
    ValidationFailed(String),
}

pub fn reduce(state: &mut AppState, event: Event) {
    match event {
        Event::DocumentsLoaded(Ok(documents)) => {
            state.documents = documents;
            state.error_message.clear();
        }
        Event::DocumentsLoaded(Err(e)) => {
            state.error_message = format!("Failed to fetch documents: {e}");
        }
        Event::ModelsLoaded(Ok(models)) => {
            let still_listed = models.iter().any(|m| m.name == state.selected_model);
            if !still_listed {
                state.selected_model = models
                    .first()
                    .map(|m| m.name.clone())
                    .unwrap_or_default();
            }
            state.models = models;
        }
        Event::ModelsLoaded(Err(e)) => {
            state.models.clear();
            state.selected_model.clear();
            state.error_message = format!("Failed to fetch models: {e}");
        }
        Event::SelectionChanged(selection) => match selection {
            Selection::Model(name) => state.selected_model = name,
            Selection::DocumentType(doc_type) => state.document_type = doc_type,
            Selection::ChatMode(mode) => state.chat_mode = mode,
            Selection::ChatInput(text) => state.chat_input = text,
            Selection::Files(files) => state.pending_files = files,
        },
        Event::UploadStarted => {
            state.is_uploading = true;
            state.error_message.clear();
            state.upload_status = "Uploading...".to_string();
        }
        Event::UploadFinished(outcome) => {
            state.is_uploading = false;
            // Unconditional, success or failure
            state.pending_files.clear();
            match outcome {
                Ok(()) => {
                    state.upload_status = "Upload completed successfully".to_string();
                    state.error_message.clear();
                }
                Err(e) => {
                    state.upload_status = "Upload failed".to_string();
                    state.error_message = format!("Upload failed: {e}");
                }
            }
        }
        Event::DeletionFinished(id, outcome) => match outcome {
            Ok(()) => {
                state.upload_status = format!("Document {id} deleted");
                state.error_message.clear();
            }
            // The document list stays as-is, stale until the next refresh
            Err(e) => {
                state.error_message = format!("Failed to delete: {e}");
            }
        },
        Event::QueryStarted => {
            state.is_processing = true;
        }
        Event::QueryFinished { question, outcome } => {
            state.is_processing = false;
            match outcome {
                Ok(answer) => {
                    state.chat_response = answer.clone();
                    state.chat_history.push(ChatTurn { question, answer });
                    state.chat_input.clear();
                }
                // Shown inline for this turn only, never recorded in history
                Err(e) => {
                    state.chat_response = format!("Error: {e}");
                }
            }
        }
        Event::ValidationFailed(message) => {
            state.error_message = message;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str) -> ModelDescriptor {
        ModelDescriptor {
            name: name.to_string(),
        }
    }

    fn state_with_pending_upload() -> AppState {
        AppState {
            pending_files: vec![PendingFile::from_text("a.txt", "a")],
            is_uploading: true,
            ..AppState::default()
        }
    }

    #[test]
    fn test_upload_finished_clears_pending_and_busy_on_success() {
        let mut state = state_with_pending_upload();
        reduce(&mut state, Event::UploadFinished(Ok(())));
        assert!(state.pending_files.is_empty());
        assert!(!state.is_uploading);
        assert_eq!(state.upload_status, "Upload completed successfully");
        assert!(state.error_message.is_empty());
    }

    #[test]
    fn test_upload_finished_clears_pending_and_busy_on_failure() {
        let mut state = state_with_pending_upload();
        reduce(
            &mut state,
            Event::UploadFinished(Err(ApiError::bad_status(500))),
        );
        assert!(state.pending_files.is_empty());
        assert!(!state.is_uploading);
        assert_eq!(state.upload_status, "Upload failed");
        assert!(state.error_message.contains("status 500"));
    }

    #[test]
    fn test_models_loaded_empty_resets_selection() {
        let mut state = AppState {
            models: vec![model("m1")],
            selected_model: "m1".to_string(),
            ..AppState::default()
        };
        reduce(&mut state, Event::ModelsLoaded(Ok(vec![])));
        assert!(state.models.is_empty());
        assert_eq!(state.selected_model, "");
    }

    #[test]
    fn test_models_loaded_reselects_when_selection_disappears() {
        let mut state = AppState::default();
        reduce(
            &mut state,
            Event::ModelsLoaded(Ok(vec![model("m1"), model("m2")])),
        );
        assert_eq!(state.selected_model, "m1");

        reduce(&mut state, Event::ModelsLoaded(Ok(vec![model("m2")])));
        assert_eq!(state.selected_model, "m2");
    }

    #[test]
    fn test_models_loaded_keeps_selection_when_still_listed() {
        let mut state = AppState {
            models: vec![model("m1"), model("m2")],
            selected_model: "m2".to_string(),
            ..AppState::default()
        };
        reduce(
            &mut state,
            Event::ModelsLoaded(Ok(vec![model("m2"), model("m3")])),
        );
        assert_eq!(state.selected_model, "m2");
    }

    #[test]
    fn test_models_load_failure_empties_list_and_selection() {
        let mut state = AppState {
            models: vec![model("m1")],
            selected_model: "m1".to_string(),
            ..AppState::default()
        };
        reduce(
            &mut state,
            Event::ModelsLoaded(Err(ApiError::Transport("offline".to_string()))),
        );
        assert!(state.models.is_empty());
        assert_eq!(state.selected_model, "");
        assert!(state.error_message.contains("Failed to fetch models"));
    }

    #[test]
    fn test_error_takes_precedence_in_notice() {
        let mut state = AppState::default();
        reduce(&mut state, Event::UploadStarted);
        let notice = state.notice().unwrap();
        assert!(!notice.is_error);
        assert_eq!(notice.text, "Uploading...");

        reduce(
            &mut state,
            Event::UploadFinished(Err(ApiError::bad_status(502))),
        );
        let notice = state.notice().unwrap();
        assert!(notice.is_error);
        assert!(notice.text.contains("status 502"));
        // Both slots are written, the error wins on display
        assert_eq!(state.upload_status, "Upload failed");
    }

    #[test]
    fn test_query_finished_success_appends_history_and_clears_input() {
        let mut state = AppState {
            chat_input: "What is DUT?".to_string(),
            is_processing: true,
            ..AppState::default()
        };
        reduce(
            &mut state,
            Event::QueryFinished {
                question: "What is DUT?".to_string(),
                outcome: Ok("It is a test".to_string()),
            },
        );
        assert!(!state.is_processing);
        assert_eq!(state.chat_input, "");
        assert_eq!(state.chat_response, "It is a test");
        assert_eq!(
            state.chat_history,
            vec![ChatTurn {
                question: "What is DUT?".to_string(),
                answer: "It is a test".to_string(),
            }]
        );
    }

    #[test]
    fn test_query_finished_failure_leaves_history_untouched() {
        let mut state = AppState {
            chat_input: "What is DUT?".to_string(),
            is_processing: true,
            ..AppState::default()
        };
        reduce(
            &mut state,
            Event::QueryFinished {
                question: "What is DUT?".to_string(),
                outcome: Err(ApiError::bad_status(500)),
            },
        );
        assert!(!state.is_processing);
        assert!(state.chat_history.is_empty());
        assert_eq!(state.chat_input, "What is DUT?");
        assert!(state.chat_response.starts_with("Error:"));
    }

    #[test]
    fn test_deletion_failure_keeps_documents() {
        let doc: Document =
            serde_json::from_str(r#"{"id":"abc123","metadata":{"doc_type":"DUT"}}"#).unwrap();
        let mut state = AppState {
            documents: vec![doc.clone()],
            ..AppState::default()
        };
        reduce(
            &mut state,
            Event::DeletionFinished("abc123".to_string(), Err(ApiError::bad_status(500))),
        );
        assert_eq!(state.documents, vec![doc]);
        assert!(state.error_message.contains("Failed to delete"));
    }

    #[test]
    fn test_validation_failure_sets_error_only() {
        let mut state = AppState {
            pending_files: vec![PendingFile::from_text("a.txt", "a")],
            ..AppState::default()
        };
        reduce(
            &mut state,
            Event::ValidationFailed("Please select files and a document type".to_string()),
        );
        assert_eq!(
            state.error_message,
            "Please select files and a document type"
        );
        // A precondition failure never ran the workflow, so the pending
        // set survives for the retry.
        assert_eq!(state.pending_files.len(), 1);
        assert!(!state.is_uploading);
    }
}
