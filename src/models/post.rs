use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::utils::text::char_count;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub variations: Option<HashMap<String, String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub success: bool,
    pub posts: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FormatRequest {
    #[serde(default)]
    pub content: String,
}

/// Result of a platform formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FormattedPost {
    pub content: String,
    pub formatted_content: String,
    pub char_count: usize,
}

impl FormattedPost {
    pub fn new(content: impl Into<String>, formatted_content: impl Into<String>) -> Self {
        let formatted_content = formatted_content.into();
        Self {
            content: content.into(),
            char_count: char_count(&formatted_content),
            formatted_content,
        }
    }

    pub fn unchanged(content: &str) -> Self {
        Self::new(content, content)
    }
}

/// The X formatter only reports the truncated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentOnly {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormatOutcome {
    Formatted(FormattedPost),
    ContentOnly(ContentOnly),
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefineRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub instruction: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefineResponse {
    pub refined_content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub original_content: String,
    pub generated_content: String,
}
