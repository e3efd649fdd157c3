use std::sync::Arc;

use crate::{
    models::{
        generic_limit, ContentOnly, FormatOutcome, FormatTarget, FormattedPost, BLUESKY_LIMIT,
        BLUETICK_LIMIT, LINKEDIN_LIMIT, TRUTH_SOCIAL_LIMIT, X_LIMIT,
    },
    services::{
        gemini::{ModelError, TextModel},
        metrics::MetricsService,
    },
    utils::text::{fits_within, tidy_reply, truncate_with_ellipsis},
};

const DEFAULT_INSTRUCTION: &str = "Improve clarity and engagement while keeping the original meaning.";

/// Per-platform post formatting on top of a [`TextModel`].
#[derive(Clone)]
pub struct FormattingService {
    model: Arc<dyn TextModel>,
    metrics: Arc<MetricsService>,
}

impl FormattingService {
    pub fn new(model: Arc<dyn TextModel>, metrics: Arc<MetricsService>) -> Self {
        Self { model, metrics }
    }

    /// Routes a `/api/format/{platform}` request to its formatter.
    pub async fn format(&self, platform: &str, content: &str) -> Result<FormatOutcome, ModelError> {
        let post = match FormatTarget::from_path(platform) {
            FormatTarget::BlueTick => self.format_bluetick(content),
            FormatTarget::Bluesky => self.format_bluesky(content).await?,
            FormatTarget::TruthSocial => self.format_truth_social(content).await?,
            FormatTarget::LinkedIn => self.format_linkedin(content).await?,
            FormatTarget::X => return Ok(FormatOutcome::ContentOnly(self.format_x(content))),
            FormatTarget::Generic(name) => self.format_generic(&name, content).await?,
        };
        Ok(FormatOutcome::Formatted(post))
    }

    pub async fn format_generic(
        &self,
        platform: &str,
        content: &str,
    ) -> Result<FormattedPost, ModelError> {
        let limit = generic_limit(platform);
        let prompt = format!(
            "Format this text for {platform} in {limit} characters or less.\n\
             Add appropriate formatting:\n\
             - Use ** for bold text\n\
             - Use _ for italics\n\
             - Add relevant emojis\n\
             - Add appropriate hashtags\n\
             - Maintain professional tone\n\
             - Break into readable paragraphs\n\n\
             Original content:\n{content}"
        );
        self.shorten("format", platform, limit, content, prompt).await
    }

    pub async fn format_bluesky(&self, content: &str) -> Result<FormattedPost, ModelError> {
        let prompt = summary_prompt(BLUESKY_LIMIT, content, "Bluesky");
        self.shorten("format_bluesky", "Bluesky", BLUESKY_LIMIT, content, prompt)
            .await
    }

    pub async fn format_truth_social(&self, content: &str) -> Result<FormattedPost, ModelError> {
        let prompt = summary_prompt(TRUTH_SOCIAL_LIMIT, content, "Truth Social");
        self.shorten(
            "format_truthsocial",
            "Truth Social",
            TRUTH_SOCIAL_LIMIT,
            content,
            prompt,
        )
        .await
    }

    pub async fn format_linkedin(&self, content: &str) -> Result<FormattedPost, ModelError> {
        let prompt = format!(
            "Format this text professionally for LinkedIn in {LINKEDIN_LIMIT} characters or less:\n\
             {content}\n\
             Add relevant hashtags and maintain a business-appropriate tone."
        );
        self.shorten("format_linkedin", "LinkedIn", LINKEDIN_LIMIT, content, prompt)
            .await
    }

    /// Local truncation only, the model is never consulted.
    pub fn format_bluetick(&self, content: &str) -> FormattedPost {
        FormattedPost::new(content, truncate_with_ellipsis(content, BLUETICK_LIMIT))
    }

    pub fn format_x(&self, content: &str) -> ContentOnly {
        ContentOnly {
            content: truncate_with_ellipsis(content, X_LIMIT),
        }
    }

    pub async fn refine(&self, content: &str, instruction: &str) -> Result<String, ModelError> {
        let instruction = match instruction.trim() {
            "" => DEFAULT_INSTRUCTION,
            given => given,
        };
        let prompt = format!(
            "Refine the following social media post according to this instruction: {instruction}\n\n\
             Post:\n{content}\n\n\
             Return only the refined post text, without any preamble or explanation."
        );
        let reply = self.ask("refine", &prompt).await?;
        Ok(tidy_reply(&reply))
    }

    pub async fn generate(&self, topic: &str) -> Result<String, ModelError> {
        let prompt = format!(
            "Write an engaging social media post about the following topic or context:\n\
             {topic}\n\n\
             Keep it concise, use a friendly tone, and include a few relevant hashtags. \
             Return only the post text."
        );
        let reply = self.ask("generate", &prompt).await?;
        Ok(tidy_reply(&reply))
    }

    /// Passes `content` through when it fits, otherwise asks the model to
    /// rewrite it with `prompt`.
    async fn shorten(
        &self,
        operation: &str,
        platform: &str,
        limit: usize,
        content: &str,
        prompt: String,
    ) -> Result<FormattedPost, ModelError> {
        if fits_within(content, limit) {
            return Ok(FormattedPost::unchanged(content));
        }

        tracing::info!("Content exceeds {} limit of {}, calling model", platform, limit);
        let reply = self.ask(operation, &prompt).await?;
        Ok(FormattedPost::new(content, reply.trim()))
    }

    async fn ask(&self, operation: &str, prompt: &str) -> Result<String, ModelError> {
        let result = self.model.generate(prompt).await;
        self.metrics.record_model_call(operation, result.is_ok());

        if let Err(ref e) = result {
            tracing::error!("Error in {}: {}", operation, e);
        }
        result
    }
}

fn summary_prompt(limit: usize, content: &str, audience: &str) -> String {
    format!(
        "Summarize this text in {limit} characters or less while maintaining the key message:\n\
         {content}\n\
         Make it engaging for {audience} users."
    )
}
