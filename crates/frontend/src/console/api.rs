//! Typed HTTP client for the RAG backend.
//!
//! One function per backend capability, one request per call, no retries.
//! The client is stateless apart from the base URL.

use contracts::documents::{DocType, Document, DocumentsResponse, IngestRequest};
use contracts::models::{ModelDescriptor, ModelsResponse};
use contracts::query::{ChatMode, QueryRequest, QueryResponse, NO_ANSWER_FALLBACK};
use gloo_net::http::{Request, Response};

use crate::console::error::ApiError;
use crate::shared::api_utils::api_base;

/// Backend operations the interaction controller depends on. The seam
/// that lets workflow tests run against a fake backend.
#[allow(async_fn_in_trait)]
pub trait RemoteService {
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError>;
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, ApiError>;
    async fn ingest_document(&self, content: &str, doc_type: DocType) -> Result<(), ApiError>;
    async fn delete_document(&self, id: &str) -> Result<(), ApiError>;
    async fn submit_query(&self, question: &str, mode: ChatMode) -> Result<String, ApiError>;
}

/// `gloo-net` implementation talking JSON to the backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base: String,
}

impl HttpClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Default client pointing at the backend port on the current host
    pub fn from_window() -> Self {
        Self::new(api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn send_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("failed to send request: {e}"))
}

fn serialize_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("failed to serialize request: {e}"))
}

/// Status is checked before any body parsing; a non-success status always
/// yields a protocol error carrying it.
fn expect_success(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::bad_status(response.status()))
    }
}

async fn expect_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    expect_success(&response)?;
    let status = response.status();
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::bad_payload(status, e))
}

impl RemoteService for HttpClient {
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let response = Request::get(&self.url("/documents"))
            .send()
            .await
            .map_err(send_error)?;
        let payload: DocumentsResponse = expect_json(response).await?;
        Ok(payload.documents)
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, ApiError> {
        let response = Request::get(&self.url("/models"))
            .send()
            .await
            .map_err(send_error)?;
        // A `models` field that is not a sequence decodes to an empty list
        // (see contracts::models), so only a non-JSON body fails here.
        let payload: ModelsResponse = expect_json(response).await?;
        Ok(payload.models)
    }

    async fn ingest_document(&self, content: &str, doc_type: DocType) -> Result<(), ApiError> {
        let body = IngestRequest {
            content: content.to_string(),
            doc_type,
        };
        let response = Request::post(&self.url("/process"))
            .json(&body)
            .map_err(serialize_error)?
            .send()
            .await
            .map_err(send_error)?;
        expect_success(&response)
    }

    async fn delete_document(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/documents/{id}")))
            .send()
            .await
            .map_err(send_error)?;
        expect_success(&response)
    }

    async fn submit_query(&self, question: &str, mode: ChatMode) -> Result<String, ApiError> {
        let body = QueryRequest {
            question: question.to_string(),
        };
        let response = Request::post(&self.url(mode.endpoint()))
            .json(&body)
            .map_err(serialize_error)?
            .send()
            .await
            .map_err(send_error)?;
        let payload: QueryResponse = expect_json(response).await?;
        Ok(payload
            .result
            .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string()))
    }
}
