use wasm_bindgen_futures::JsFuture;

use crate::console::error::ApiError;

/// A user-selected file held between selection and the upload action.
///
/// Wraps either a browser `File` handle or plain text (how tests build
/// one). Content is only read when the upload workflow asks for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile {
    name: String,
    source: FileSource,
}

#[derive(Debug, Clone, PartialEq)]
enum FileSource {
    Browser(web_sys::File),
    InMemory(String),
}

impl PendingFile {
    pub fn from_browser(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            source: FileSource::Browser(file),
        }
    }

    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::InMemory(text.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the file as text. Binary files are decoded lossily; the
    /// backend receives whatever text comes out.
    pub async fn read_text(&self) -> Result<String, ApiError> {
        match &self.source {
            FileSource::InMemory(text) => Ok(text.clone()),
            FileSource::Browser(file) => {
                let value = JsFuture::from(file.text()).await.map_err(|e| {
                    ApiError::Transport(format!("failed to read file {}: {:?}", self.name, e))
                })?;
                value.as_string().ok_or_else(|| {
                    ApiError::Transport(format!("failed to read file {}", self.name))
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_in_memory_file_reads_back() {
        let file = PendingFile::from_text("notes.txt", "hello");
        assert_eq!(file.name(), "notes.txt");
        assert_eq!(block_on(file.read_text()), Ok("hello".to_string()));
    }
}
