#![allow(clippy::pedantic, clippy::style)]
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Config for `models.generate_content` parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentParameters {
    /// ID of the model to use.
    pub model: String,
    /// Content of the request.
    pub contents: Vec<Content>,
    /// Configuration that contains optional model parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerateContentConfig>,
}

/// Contains the multi-part content of a message.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// List of parts that constitute a single message. Each part may have
    /// a different IANA MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
    /// Optional. The producer of the content. Must be either 'user' or
    /// 'model'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A datatype containing media content.
///
/// Exactly one field within a Part should be set, representing the specific
/// type of content being conveyed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Optional. Inlined bytes data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
    /// Optional. Text part (can be code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Inlined media bytes.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// Required. Raw bytes.
    /// @remarks Encoded as base64 string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Required. The IANA standard MIME type of the source data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Optional model configuration parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentConfig {
    /// Value that controls the degree of randomness in token selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Output response mimetype of the generated candidate text.
    /// Supported mimetype:
    /// - `text/plain`: (default) Text output.
    /// - `application/json`: JSON response in the candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Optional. Output schema of the generated response, expressed as
    /// [JSON Schema](https://json-schema.org/). If set, `response_mime_type`
    /// is required. Only a subset of JSON Schema keywords is supported,
    /// including `type`, `properties`, `required`, `items`, `enum`,
    /// `minimum`, `maximum` and `additionalProperties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_json_schema: Option<Value>,
}

/// Response message for PredictionService.GenerateContent.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Response variations returned by the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
    /// Output only. The model version used to generate the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    /// Output only. `response_id` is used to identify each response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
    /// Feedback on the prompt itself. Populated when the prompt was blocked
    /// and no candidates were generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<GenerateContentResponsePromptFeedback>,
    /// Usage metadata about the response(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<GenerateContentResponseUsageMetadata>,
}

/// A response candidate generated from the model.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Contains the multi-part content of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Describes the reason the model stopped generating tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_message: Option<String>,
    /// The reason why the model stopped generating tokens.
    /// If empty, the model has not stopped generating the tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
    /// Output only. Index of the candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

/// Output only. The reason why the model stopped generating tokens.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The finish reason is unspecified.
    #[serde(rename = "FINISH_REASON_UNSPECIFIED")]
    Unspecified,
    /// Token generation reached a natural stopping point or a configured stop
    /// sequence.
    #[serde(rename = "STOP")]
    Stop,
    /// Token generation reached the configured maximum output tokens.
    #[serde(rename = "MAX_TOKENS")]
    MaxTokens,
    /// Token generation stopped because the content potentially contains
    /// safety violations.
    #[serde(rename = "SAFETY")]
    Safety,
    /// The token generation stopped because of potential recitation.
    #[serde(rename = "RECITATION")]
    Recitation,
    /// The token generation stopped because of using an unsupported language.
    #[serde(rename = "LANGUAGE")]
    Language,
    /// All other reasons that stopped the token generation.
    #[serde(rename = "OTHER")]
    Other,
    /// Token generation stopped because the content contains forbidden terms.
    #[serde(rename = "BLOCKLIST")]
    Blocklist,
    /// Token generation stopped for potentially containing prohibited content.
    #[serde(rename = "PROHIBITED_CONTENT")]
    ProhibitedContent,
    /// Token generation stopped because the content potentially contains
    /// Sensitive Personally Identifiable Information (SPII).
    #[serde(rename = "SPII")]
    Spii,
    /// The function call generated by the model is invalid.
    #[serde(rename = "MALFORMED_FUNCTION_CALL")]
    MalformedFunctionCall,
    /// Token generation stopped because generated images have safety
    /// violations.
    #[serde(rename = "IMAGE_SAFETY")]
    ImageSafety,
    /// The tool call generated by the model is invalid.
    #[serde(rename = "UNEXPECTED_TOOL_CALL")]
    UnexpectedToolCall,
}

/// Content filter results for a prompt sent in the request.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponsePromptFeedback {
    /// Output only. Blocked reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<BlockedReason>,
    /// Output only. A readable block reason message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason_message: Option<String>,
}

/// Output only. The reason why the prompt was blocked.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedReason {
    /// The blocked reason is unspecified.
    #[serde(rename = "BLOCKED_REASON_UNSPECIFIED")]
    Unspecified,
    /// The prompt was blocked by safety settings.
    #[serde(rename = "SAFETY")]
    Safety,
    /// The prompt was blocked for another unspecified reason.
    #[serde(rename = "OTHER")]
    Other,
    /// The prompt was blocked because it contains forbidden terms.
    #[serde(rename = "BLOCKLIST")]
    Blocklist,
    /// The prompt was blocked for potentially containing prohibited content.
    #[serde(rename = "PROHIBITED_CONTENT")]
    ProhibitedContent,
    /// The prompt was blocked because submitted images have safety violations.
    #[serde(rename = "IMAGE_SAFETY")]
    ImageSafety,
}

/// Usage metadata about response(s).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponseUsageMetadata {
    /// Number of tokens in the response(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_token_count: Option<u32>,
    /// Number of tokens in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_token_count: Option<u32>,
    /// Output only. Number of tokens present in thoughts output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoughts_token_count: Option<u32>,
    /// Total token count for prompt and response candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_token_count: Option<i32>,
}
