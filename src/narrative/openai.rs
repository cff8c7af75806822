use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use tracing::debug;

use super::{build_prompt, NarrativeProvider};
use crate::config::{http_client, NarrativeConfig};
use crate::error::{Error, Result};
use crate::fetch::Fetch;
use crate::models::{BrandPersonality, BrandStory, Narrative};

/// Narrative provider for OpenAI-compatible chat-completion endpoints
pub struct OpenAiNarrator {
    http: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OpenAiNarrator {
    pub fn new(config: &NarrativeConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config.request_timeout)?,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl NarrativeProvider for OpenAiNarrator {
    async fn narrate(&self, name: &str, description: &str) -> Result<Narrative> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": build_prompt(name, description)}
            ],
            "response_format": {"type": "json_object"}
        });

        let url = format!("{}/chat/completions", self.api_base);
        let completion: ChatCompletionResponse = Fetch::post(&self.http, &url)
            .bearer_auth(&self.api_key)
            .json(&body)?
            .execute()
            .await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::narrative("response did not include message content"))?;

        debug!(%name, bytes = content.len(), "narrative received");
        parse_narrative(&content)
    }
}

/// Parse the JSON object the model was asked to produce
pub(crate) fn parse_narrative(content: &str) -> Result<Narrative> {
    let raw: NarrativePayload = serde_json::from_str(content)
        .map_err(|e| Error::narrative(format!("malformed narrative JSON: {}", e)))?;
    Ok(raw.into())
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NarrativePayload {
    story: String,
    meaning: String,
    #[serde(default)]
    cultural_significance: Vec<String>,
    #[serde(default)]
    pronunciation: BTreeMap<String, String>,
    brand_personality: BrandPersonality,
}

impl From<NarrativePayload> for Narrative {
    fn from(raw: NarrativePayload) -> Self {
        Narrative {
            brand_story: BrandStory {
                story: raw.story,
                meaning: raw.meaning,
                cultural_significance: raw.cultural_significance,
                pronunciation: raw.pronunciation,
            },
            brand_personality: raw.brand_personality,
        }
    }
}
