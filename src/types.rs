use serde::{Deserialize, Serialize};
use serde_json::Value;

// Text fields stay as raw JSON values so a non-string `essayText` reaches the
// validator and gets the endpoint's own 400 message instead of a serde error.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRequest {
    #[serde(default)]
    pub essay_text: Option<Value>,
    #[serde(default)]
    pub outline_goal: Option<Value>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ProofreadRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

/// One flagged edit as the proofreading prompt asks the model to emit it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SuggestionItem {
    pub id: u64,
    pub category: String,
    pub original: String,
    pub suggestion: String,
    pub description: String,
}

/// Sampling knobs forwarded to the completion service. Unset fields are omitted.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Sampling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompletionCall {
    pub model: String,
    pub system: Option<String>,
    pub user_parts: Vec<String>,
    pub sampling: Sampling,
}
