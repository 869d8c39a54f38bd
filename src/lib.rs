pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{build_pipeline_prompt, ChatClient, GeneratePipelineUseCase};

pub use cli::Commands;

pub use connector::{MockChatClient, OpenRouterClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub use domain::{
    render_legacy, workflow_file_name, ApiKey, DomainError, GeneratedPipeline, GenerationResult,
    ProjectRequest,
};

#[cfg(test)]
mod tests;
