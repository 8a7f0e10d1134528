//! services/api/src/adapters/enhance_llm.rs
//!
//! This module contains the adapter for the section-enhancing LLM.
//! It implements the `EnhanceService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    error::OpenAIError,
    Client,
};
use async_trait::async_trait;
use resume_core::domain::{SectionKind, SectionValue};
use resume_core::editor::add_skill;
use resume_core::ports::{EnhanceService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `EnhanceService` using an OpenAI-compatible LLM.
///
/// Only free-text content is sent to the model: the summary text, the
/// description of each entry, and skill suggestions. Entry ids and the
/// structured fields are never put through the model, so the returned value
/// always has the shape of the section it was asked to enhance.
#[derive(Clone)]
pub struct OpenAiEnhanceAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiEnhanceAdapter {
    /// Creates a new `OpenAiEnhanceAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    /// Runs one chat completion and returns the first choice's text.
    async fn complete(&self, system: &str, user: String) -> PortResult<String> {
        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                PortError::Unexpected(
                    "Enhancement LLM returned no text content in its response.".to_string(),
                )
            })
    }
}

const REWRITE_PROMPT: &str = "You are a professional resume writer. Rewrite the given resume \
    text to be more impactful and achievement-oriented while staying truthful to its content. \
    Respond with ONLY the rewritten text, no quotes, no explanation.";

const SKILLS_PROMPT: &str = "You are a professional resume writer. Given a list of skills, \
    suggest up to four complementary professional skills that are not already listed. Respond \
    with ONLY the new skills, one per line, no numbering, no explanation.";

//=========================================================================================
// `EnhanceService` Trait Implementation
//=========================================================================================

#[async_trait]
impl EnhanceService for OpenAiEnhanceAdapter {
    async fn enhance_section(
        &self,
        kind: SectionKind,
        content: SectionValue,
    ) -> PortResult<SectionValue> {
        match content {
            SectionValue::Summary(text) => {
                let rewritten = self
                    .complete(REWRITE_PROMPT, format!("Professional summary:\n\n{}", text))
                    .await?;
                Ok(SectionValue::Summary(rewritten))
            }
            SectionValue::Experience(items) => {
                let mut enhanced = Vec::with_capacity(items.len());
                for mut item in items {
                    item.description = self
                        .complete(
                            REWRITE_PROMPT,
                            format!(
                                "Description of the role '{}' at '{}':\n\n{}",
                                item.position, item.company, item.description
                            ),
                        )
                        .await?;
                    enhanced.push(item);
                }
                Ok(SectionValue::Experience(enhanced))
            }
            SectionValue::Education(items) => {
                let mut enhanced = Vec::with_capacity(items.len());
                for mut item in items {
                    item.description = self
                        .complete(
                            REWRITE_PROMPT,
                            format!(
                                "Description of the degree '{}' at '{}':\n\n{}",
                                item.degree, item.institution, item.description
                            ),
                        )
                        .await?;
                    enhanced.push(item);
                }
                Ok(SectionValue::Education(enhanced))
            }
            SectionValue::Skills(skills) => {
                let suggestions = self
                    .complete(SKILLS_PROMPT, format!("Skills:\n{}", skills.join("\n")))
                    .await?;
                // Route suggestions through the same dedup rule manual entry uses.
                let merged = suggestions
                    .lines()
                    .take(4)
                    .fold(skills, |acc, line| add_skill(&acc, line));
                Ok(SectionValue::Skills(merged))
            }
            // There is nothing an LLM should rewrite in contact details.
            SectionValue::PersonalInfo(info) => {
                tracing::debug!(section = %kind, "Skipping LLM enhancement for contact details");
                Ok(SectionValue::PersonalInfo(info))
            }
        }
    }
}
