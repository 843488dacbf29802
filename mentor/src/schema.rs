//! JSON Schemas advertised to the provider for structured output. Only
//! features the Gemini `responseJsonSchema` field supports are used
//! (`type`, `enum`, `items`, `minimum`/`maximum`, `properties`, `required`,
//! `additionalProperties`).

use serde_json::{json, Value};

pub type JSONSchema = Value;

/// Schema for the challenge generator output ([`crate::ChallengeDraft`]).
/// `id` and `image_url` are deliberately absent: the caller synthesizes
/// them.
#[must_use]
pub fn challenge_schema() -> JSONSchema {
    json!({
        "title": "Challenge",
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "Short, punchy challenge name."
            },
            "description": {
                "type": "string",
                "description": "What to create and why it books clients."
            },
            "platform": {
                "type": "string",
                "enum": [
                    "Instagram",
                    "TikTok",
                    "Facebook",
                    "Google Business Profile",
                    "GBP",
                    "WhatsApp Business"
                ]
            },
            "requirements": {
                "type": "array",
                "description": "Ordered list of things the submission must include.",
                "items": { "type": "string" }
            },
            "category": { "type": "string" }
        },
        "required": ["title", "description", "platform", "requirements", "category"],
        "additionalProperties": false
    })
}

/// Schema for the submission analyzer output ([`crate::AnalysisResult`]).
#[must_use]
pub fn analysis_schema() -> JSONSchema {
    json!({
        "title": "SubmissionAnalysis",
        "type": "object",
        "properties": {
            "overallScore": score_schema(),
            "potentialStatus": {
                "type": "string",
                "description": "Short headline verdict, e.g. 'Strong Booking Potential'."
            },
            "breakdown": {
                "type": "object",
                "properties": {
                    "visuals": category_schema(),
                    "copywriting": category_schema(),
                    "strategy": category_schema(),
                    "engagement": category_schema()
                },
                "required": ["visuals", "copywriting", "strategy", "engagement"],
                "additionalProperties": false
            }
        },
        "required": ["overallScore", "potentialStatus", "breakdown"],
        "additionalProperties": false
    })
}

fn score_schema() -> Value {
    json!({ "type": "integer", "minimum": 0, "maximum": 100 })
}

fn category_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "score": score_schema(),
            "feedback": { "type": "string" }
        },
        "required": ["score", "feedback"],
        "additionalProperties": false
    })
}
