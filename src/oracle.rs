use crate::config::Config;
use crate::error::RelayError;
use crate::types::{CompletionCall, Sampling};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(flatten)]
    sampling: &'a Sampling,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
struct ContentPart<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// Built once at startup and shared through `AppState`; each call is a
/// single attempt with no retry and whatever timeout the transport defaults to.
#[derive(Clone)]
pub struct CompletionClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    pub async fn complete(&self, call: &CompletionCall) -> Result<String, RelayError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &call.system {
            messages.push(ChatMessage {
                role: "system",
                content: vec![ContentPart {
                    kind: "text",
                    text: system.as_str(),
                }],
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: call
                .user_parts
                .iter()
                .map(|text| ContentPart {
                    kind: "text",
                    text: text.as_str(),
                })
                .collect(),
        });

        let body = ChatRequest {
            model: call.model.as_str(),
            messages,
            sampling: &call.sampling,
        };

        let mut request = self.http.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let resp = match request.send().await {
            Ok(response) => {
                if !response.status().is_success() {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to get error body".into());
                    log::error!(
                        "Error from completion service: Status {}, Body: {}",
                        status,
                        error_text
                    );
                    return Err(RelayError::Oracle(format!(
                        "Error code: {} - {}",
                        status.as_u16(),
                        error_text
                    )));
                }
                response
            }
            Err(e) => {
                log::error!("Failed to reach completion service: {e}");
                return Err(RelayError::Oracle(e.to_string()));
            }
        };

        let parsed = resp.json::<ChatResponse>().await.map_err(|e| {
            log::error!("Unreadable completion response: {e}");
            RelayError::Internal(e.to_string())
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| RelayError::Internal("No response content from AI".into()))
    }
}
