use serde::{Deserialize, Serialize};

/// A generation model the backend offers. Read-only from the client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
}

/// Body of `GET /models`.
///
/// The backend's shape is not fully trusted here: a `models` field that is
/// missing or not a sequence decodes to an empty list instead of failing,
/// so a malformed model list never takes down the rest of the screen.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsResponse {
    #[serde(default, deserialize_with = "sequence_or_empty")]
    pub models: Vec<ModelDescriptor>,
}

fn sequence_or_empty<'de, D>(deserializer: D) -> Result<Vec<ModelDescriptor>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        // Explicit fallback branch: anything that is not a sequence is empty.
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_models_list() {
        let payload: ModelsResponse =
            serde_json::from_str(r#"{"models":[{"name":"m1"},{"name":"m2"}]}"#).unwrap();
        assert_eq!(
            payload.models,
            vec![
                ModelDescriptor {
                    name: "m1".to_string()
                },
                ModelDescriptor {
                    name: "m2".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_models_not_a_sequence_decodes_empty() {
        let payload: ModelsResponse =
            serde_json::from_str(r#"{"models":"not-an-array"}"#).unwrap();
        assert!(payload.models.is_empty());
    }

    #[test]
    fn test_missing_models_field_decodes_empty() {
        let payload: ModelsResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.models.is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let payload: ModelsResponse =
            serde_json::from_str(r#"{"models":[{"name":"m1"},42,{"nope":true}]}"#).unwrap();
        assert_eq!(payload.models.len(), 1);
        assert_eq!(payload.models[0].name, "m1");
    }
}
