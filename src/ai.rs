use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
};

use crate::error::AIError;
use crate::message::{Role, Transcript};
use crate::settings::Settings;

pub const NO_RESPONSE: &str = "No response from AI.";

pub const NARRATOR_PREAMBLE: &str = "You are the narrator of an interactive text adventure. \
Continue the story from the player's latest action and describe what happens as a result. \
Always end by handing control back to the player.";

/// The remote storyteller behind the game.
///
/// `generate` starts a story from a bare prompt, `respond` continues one given
/// the whole transcript so far. Both return the narration verbatim or an
/// [`AIError`]; turning failures into something printable is the caller's job
/// (see [`narration_or_fallback`]).
#[allow(async_fn_in_trait)]
pub trait Narrator {
    async fn generate(&self, prompt: &str) -> Result<String, AIError>;

    async fn respond(&self, input: &str, transcript: &Transcript) -> Result<String, AIError>;
}

/// Collapse a narration result into text the player can read.
pub fn narration_or_fallback(result: Result<String, AIError>) -> String {
    match result {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) | Err(AIError::NoMessageFound) => {
            log::warn!("Provider returned an empty response");
            NO_RESPONSE.to_string()
        }
        Err(e) => {
            log::error!("Narration request failed: {e}");
            format!("An error occurred: {e}")
        }
    }
}

/// Serialize the transcript plus the new player input into chat messages.
///
/// Player turns become `user` messages and narrator turns `assistant`
/// messages, in transcript order. The preamble, when given, leads as a
/// `system` message and the new input always comes last.
pub fn build_messages(
    preamble: Option<&str>,
    transcript: &Transcript,
    input: &str,
) -> Result<Vec<ChatCompletionRequestMessage>, AIError> {
    let mut messages: Vec<ChatCompletionRequestMessage> =
        Vec::with_capacity(transcript.len() + 2);

    if let Some(preamble) = preamble {
        messages.push(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(preamble)
                .build()?
                .into(),
        );
    }

    for turn in transcript {
        let message: ChatCompletionRequestMessage = match turn.role() {
            Role::Player => ChatCompletionRequestUserMessageArgs::default()
                .content(turn.text())
                .build()?
                .into(),
            Role::Narrator => ChatCompletionRequestAssistantMessageArgs::default()
                .content(turn.text())
                .build()?
                .into(),
        };
        messages.push(message);
    }

    messages.push(
        ChatCompletionRequestUserMessageArgs::default()
            .content(input)
            .build()?
            .into(),
    );

    Ok(messages)
}

// Pull the text of the first choice, treating blank output as no output.
fn extract_content(response: CreateChatCompletionResponse) -> Result<String, AIError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(AIError::NoMessageFound)
}

/// [`Narrator`] backed by an OpenAI-compatible chat completions endpoint.
pub struct GameAI {
    client: Client<OpenAIConfig>,
    model: String,
    preamble: Option<String>,
}

impl GameAI {
    pub fn new(settings: &Settings) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(settings.api_key())
            .with_api_base(settings.provider.api_base());
        let client = Client::with_config(openai_config);

        Self {
            client,
            model: settings.model.clone(),
            preamble: Some(NARRATOR_PREAMBLE.to_string()),
        }
    }

    pub fn with_preamble(mut self, preamble: Option<String>) -> Self {
        self.preamble = preamble;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AIError> {
        log::debug!(
            "Sending {} messages to model {}",
            messages.len(),
            self.model
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(request).await?;
        extract_content(response)
    }
}

impl Narrator for GameAI {
    async fn generate(&self, prompt: &str) -> Result<String, AIError> {
        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?
            .into();
        self.complete(vec![message]).await
    }

    async fn respond(&self, input: &str, transcript: &Transcript) -> Result<String, AIError> {
        let messages = build_messages(self.preamble.as_deref(), transcript, input)?;
        self.complete(messages).await
    }
}
