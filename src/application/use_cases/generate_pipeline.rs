use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::ChatClient;
use crate::application::use_cases::build_pipeline_prompt;
use crate::domain::{
    render_legacy, ApiKey, DomainError, GeneratedPipeline, GenerationResult, ProjectRequest,
};

pub struct GeneratePipelineUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl GeneratePipelineUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    /// Reject the submission if any required field, the key included, is empty.
    pub fn validate(request: &ProjectRequest, api_key: &ApiKey) -> Result<(), DomainError> {
        let mut missing = request.missing_fields();
        if api_key.is_empty() {
            missing.push("api_key");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(missing))
        }
    }

    /// Validate, build the prompt and issue exactly one chat-completion call.
    ///
    /// Validation failures return before any network traffic.
    pub async fn execute(&self, request: &ProjectRequest, api_key: &ApiKey) -> GenerationResult {
        Self::validate(request, api_key)?;

        let prompt = build_pipeline_prompt(request);
        info!(
            "Generating pipeline for project {} with model {}",
            request.project_name(),
            self.chat_client.model()
        );
        debug!("Prompt length: {} chars", prompt.len());

        let start_time = Instant::now();
        let result = self.chat_client.complete(api_key, &prompt).await;
        let elapsed = start_time.elapsed();

        match result {
            Ok(content) => {
                info!(
                    "Generated {} chars for {} in {:.2?}",
                    content.len(),
                    request.project_name(),
                    elapsed
                );
                Ok(GeneratedPipeline::new(request.project_name(), content))
            }
            Err(e) => {
                warn!("Generation failed after {:.2?}: {}", elapsed, e);
                Err(e)
            }
        }
    }

    /// Same as [`Self::execute`], collapsed to the single textual channel:
    /// the generated text, or `"Error: <message>"`.
    pub async fn execute_legacy(&self, request: &ProjectRequest, api_key: &ApiKey) -> String {
        render_legacy(&self.execute(request, api_key).await)
    }
}
