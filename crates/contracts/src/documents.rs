use serde::{Deserialize, Serialize};

/// Document category assigned at ingestion time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocType {
    Dut,
    DutManual,
    Report,
    Other,
    /// Absent or unrecognized category. Never submitted by the client.
    #[default]
    #[serde(other)]
    Unknown,
}

impl DocType {
    /// Wire code sent to the backend
    pub fn code(&self) -> &'static str {
        match self {
            DocType::Dut => "DUT",
            DocType::DutManual => "DUT_MANUAL",
            DocType::Report => "REPORT",
            DocType::Other => "OTHER",
            DocType::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable name for dropdowns and the document list
    pub fn display_name(&self) -> &'static str {
        match self {
            DocType::Dut => "DUT guidelines",
            DocType::DutManual => "DUT manual",
            DocType::Report => "Example reports",
            DocType::Other => "Other documents",
            DocType::Unknown => "Unknown",
        }
    }

    /// Types a user may pick when uploading
    pub fn selectable() -> Vec<DocType> {
        vec![
            DocType::Dut,
            DocType::DutManual,
            DocType::Report,
            DocType::Other,
        ]
    }

    /// Parse a dropdown value; unknown or empty strings select nothing
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DUT" => Some(DocType::Dut),
            "DUT_MANUAL" => Some(DocType::DutManual),
            "REPORT" => Some(DocType::Report),
            "OTHER" => Some(DocType::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub doc_type: DocType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A document known to the backend. The id is server-assigned and opaque;
/// the client never mutates documents in place, it reloads the full list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn display_name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or(&self.id)
    }
}

/// Body of `GET /documents`
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsResponse {
    pub documents: Vec<Document>,
}

/// Body of `POST /process`; one request per uploaded file
#[derive(Debug, Clone, Serialize)]
pub struct IngestRequest {
    pub content: String,
    pub doc_type: DocType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_type_codes_round_trip() {
        for doc_type in DocType::selectable() {
            assert_eq!(DocType::from_code(doc_type.code()), Some(doc_type));
        }
        assert_eq!(DocType::from_code(""), None);
        assert_eq!(DocType::from_code("UNKNOWN"), None);
    }

    #[test]
    fn test_missing_doc_type_decodes_as_unknown() {
        let doc: Document = serde_json::from_str(r#"{"id":"d1","metadata":{}}"#).unwrap();
        assert_eq!(doc.metadata.doc_type, DocType::Unknown);
    }

    #[test]
    fn test_unrecognized_doc_type_decodes_as_unknown() {
        let doc: Document =
            serde_json::from_str(r#"{"id":"d1","metadata":{"doc_type":"SOMETHING_NEW"}}"#)
                .unwrap();
        assert_eq!(doc.metadata.doc_type, DocType::Unknown);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let with_name: Document =
            serde_json::from_str(r#"{"id":"d1","metadata":{"doc_type":"DUT","name":"spec.pdf"}}"#)
                .unwrap();
        assert_eq!(with_name.display_name(), "spec.pdf");

        let without_name: Document =
            serde_json::from_str(r#"{"id":"d2","metadata":{"doc_type":"REPORT"}}"#).unwrap();
        assert_eq!(without_name.display_name(), "d2");
    }

    #[test]
    fn test_ingest_request_serializes_wire_code() {
        let body = IngestRequest {
            content: "text".to_string(),
            doc_type: DocType::DutManual,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["doc_type"], "DUT_MANUAL");
    }
}
