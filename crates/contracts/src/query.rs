use serde::{Deserialize, Serialize};

/// Answer text used when the backend returns no `result` field.
/// "No answer" is a valid semantic outcome, not a protocol fault.
pub const NO_ANSWER_FALLBACK: &str = "No answer available.";

/// Which backend query route a question is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// Query against DUT guideline documents only
    Dut,
    /// Query against the whole corpus
    #[default]
    Full,
}

impl ChatMode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ChatMode::Dut => "/query/dut",
            ChatMode::Full => "/query/full",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ChatMode::Dut => "dut",
            ChatMode::Full => "full",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChatMode::Dut => "DUT only",
            ChatMode::Full => "DUT + other documents",
        }
    }

    pub fn all() -> Vec<ChatMode> {
        vec![ChatMode::Dut, ChatMode::Full]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dut" => Some(ChatMode::Dut),
            "full" => Some(ChatMode::Full),
            _ => None,
        }
    }
}

/// Body of `POST /query/{dut,full}`
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub question: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub result: Option<String>,
}

/// One completed question/answer exchange. History is append-only and
/// lives only for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
}
