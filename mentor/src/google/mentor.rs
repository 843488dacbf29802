use super::api::{
    Blob, Content, FinishReason, GenerateContentConfig, GenerateContentParameters,
    GenerateContentResponse, Part,
};
use crate::{
    client_utils, id_utils, media_utils,
    mentor::Mentor,
    prompts, schema,
    telemetry::MentorSpan,
    AnalysisResult, Challenge, ChallengeDraft, ImageAttachment, MentorError, MentorResult,
    Platform,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "google";

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL_ID: &str = "gemini-3-flash-preview";

/// Length of the locally synthesized challenge identifier.
const CHALLENGE_ID_LENGTH: usize = 9;

/// [`Mentor`] implementation backed by the Gemini API.
pub struct GoogleMentor {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleMentorOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GoogleMentor {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: GoogleMentorOptions) -> Self {
        let GoogleMentorOptions {
            api_key,
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> MentorResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                MentorError::InvalidInput(format!("Invalid Google header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                MentorError::InvalidInput(format!(
                    "Invalid Google header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Send a `generateContent` request and return the concatenated text of
    /// the first candidate, recording the call on a telemetry span.
    async fn request_json_payload(
        &self,
        params: GenerateContentParameters,
        operation: &'static str,
    ) -> MentorResult<String> {
        let mut span = MentorSpan::new(PROVIDER, &self.model_id, operation);

        let result = span
            .instrument_future(async {
                let url = format!(
                    "{}/models/{}:generateContent?key={}",
                    self.base_url, self.model_id, self.api_key
                );
                let headers = self.request_headers()?;
                let mut response: GenerateContentResponse =
                    client_utils::send_json(&self.client, &url, &params, headers).await?;
                let usage = response.usage_metadata.take();
                let text = extract_response_text(response)?;
                Ok::<_, MentorError>((text, usage))
            })
            .await;

        match result {
            Ok((text, usage)) => {
                if let Some(usage) = usage {
                    span.on_usage(
                        usage.prompt_token_count.map(i64::from),
                        usage.candidates_token_count.map(i64::from),
                    );
                }
                Ok(text)
            }
            Err(error) => {
                span.on_error(&error);
                Err(error)
            }
        }
    }
}

#[async_trait::async_trait]
impl Mentor for GoogleMentor {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn generate_challenge(&self, specialty: &str) -> MentorResult<Challenge> {
        if specialty.trim().is_empty() {
            return Err(MentorError::InvalidInput(
                "specialty must not be empty".to_string(),
            ));
        }

        let params = challenge_request(&self.model_id, specialty);
        let payload = self
            .request_json_payload(params, "generate_challenge")
            .await?;
        let draft = parse_challenge_payload(&payload)?;

        Ok(draft.into_challenge(
            id_utils::generate_string(CHALLENGE_ID_LENGTH),
            media_utils::placeholder_image_url(),
        ))
    }

    async fn analyze_submission(
        &self,
        platform: Platform,
        caption: &str,
        image: Option<&ImageAttachment>,
    ) -> MentorResult<AnalysisResult> {
        if caption.trim().is_empty() {
            return Err(MentorError::InvalidInput(
                "caption must not be empty".to_string(),
            ));
        }

        let params = analysis_request(&self.model_id, platform, caption, image);
        let payload = self
            .request_json_payload(params, "analyze_submission")
            .await?;
        parse_analysis_payload(&payload)
    }
}

fn challenge_request(model_id: &str, specialty: &str) -> GenerateContentParameters {
    GenerateContentParameters {
        model: model_id.to_string(),
        contents: vec![Content {
            parts: Some(vec![Part {
                text: Some(prompts::challenge_prompt(specialty)),
                ..Default::default()
            }]),
            role: Some("user".to_string()),
        }],
        generation_config: Some(GenerateContentConfig {
            response_mime_type: Some("application/json".to_string()),
            response_json_schema: Some(schema::challenge_schema()),
            ..Default::default()
        }),
    }
}

fn analysis_request(
    model_id: &str,
    platform: Platform,
    caption: &str,
    image: Option<&ImageAttachment>,
) -> GenerateContentParameters {
    let mut parts = vec![Part {
        text: Some(prompts::analysis_prompt(platform, caption)),
        ..Default::default()
    }];
    if let Some(image) = image {
        parts.push(Part {
            inline_data: Some(Blob {
                data: Some(image.data.clone()),
                mime_type: Some(image.mime_type.clone()),
            }),
            ..Default::default()
        });
    }

    GenerateContentParameters {
        model: model_id.to_string(),
        contents: vec![Content {
            parts: Some(parts),
            role: Some("user".to_string()),
        }],
        generation_config: Some(GenerateContentConfig {
            response_mime_type: Some("application/json".to_string()),
            response_json_schema: Some(schema::analysis_schema()),
            ..Default::default()
        }),
    }
}

fn extract_response_text(response: GenerateContentResponse) -> MentorResult<String> {
    if let Some(feedback) = response.prompt_feedback {
        if let Some(reason) = feedback.block_reason {
            let message = feedback
                .block_reason_message
                .unwrap_or_else(|| format!("{reason:?}"));
            return Err(MentorError::Refusal(format!("Prompt blocked: {message}")));
        }
    }

    let candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| MentorError::Invariant(PROVIDER, "No candidate in response".to_string()))?;

    let finish_reason = candidate.finish_reason;
    let text: String = candidate
        .content
        .and_then(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        return Err(match finish_reason {
            Some(
                reason @ (FinishReason::Safety
                | FinishReason::Blocklist
                | FinishReason::ProhibitedContent
                | FinishReason::ImageSafety),
            ) => MentorError::Refusal(format!("Candidate blocked: {reason:?}")),
            _ => MentorError::Invariant(PROVIDER, "No text part in response".to_string()),
        });
    }

    Ok(text)
}

fn parse_challenge_payload(payload: &str) -> MentorResult<ChallengeDraft> {
    serde_json::from_str(payload).map_err(|error| {
        MentorError::Invariant(PROVIDER, format!("Malformed challenge payload: {error}"))
    })
}

fn parse_analysis_payload(payload: &str) -> MentorResult<AnalysisResult> {
    serde_json::from_str(payload).map_err(|error| {
        MentorError::Invariant(PROVIDER, format!("Malformed analysis payload: {error}"))
    })
}
