use opentelemetry::trace::Status;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Span wrapper for a single mentor call, recording GenAI semantic
/// convention attributes.
pub struct MentorSpan {
    span: Span,
    input_tokens: Option<i64>,
    output_tokens: Option<i64>,
}

impl MentorSpan {
    pub fn new(provider: &str, model_id: &str, operation: &str) -> Self {
        let span = if operation == "analyze_submission" {
            info_span!("mentor.analyze_submission")
        } else {
            info_span!("mentor.generate_challenge")
        };
        span.set_attribute("gen_ai.operation.name", "generate_content");
        span.set_attribute("gen_ai.provider.name", provider.to_string());
        span.set_attribute("gen_ai.request.model", model_id.to_string());
        span.set_attribute("mentor.operation", operation.to_string());

        Self {
            span,
            input_tokens: None,
            output_tokens: None,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_usage(&mut self, input_tokens: Option<i64>, output_tokens: Option<i64>) {
        if input_tokens.is_some() {
            self.input_tokens = input_tokens;
        }
        if output_tokens.is_some() {
            self.output_tokens = output_tokens;
        }
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if let Some(input_tokens) = self.input_tokens {
            self.span
                .set_attribute("gen_ai.usage.input_tokens", input_tokens);
        }
        if let Some(output_tokens) = self.output_tokens {
            self.span
                .set_attribute("gen_ai.usage.output_tokens", output_tokens);
        }
    }
}

impl Drop for MentorSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}
