use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatClient, GeneratePipelineUseCase};
use crate::connector::adapter::{
    MockChatClient, OpenRouterClient, DEFAULT_BASE_URL, DEFAULT_MODEL,
};

/// Process-wide settings. Read-only once the container is built; the API key
/// is never part of it.
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    pub base_url: String,
    pub model: String,
    /// Answer with a canned workflow instead of calling the remote model.
    pub mock_llm: bool,
}

impl ContainerConfig {
    /// Resolve settings with precedence: explicit value, then environment
    /// (`OPENROUTER_BASE_URL`, `OPENROUTER_MODEL`), then built-in default.
    pub fn resolve(base_url: Option<String>, model: Option<String>, mock_llm: bool) -> Self {
        let base_url = base_url
            .or_else(|| std::env::var("OPENROUTER_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = model
            .or_else(|| std::env::var("OPENROUTER_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            base_url,
            model,
            mock_llm,
        }
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            mock_llm: false,
        }
    }
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            debug!(
                "Using chat-completion endpoint at {} with model {}",
                config.base_url, config.model
            );
            Arc::new(OpenRouterClient::new(&config.model, &config.base_url))
        };

        Self {
            chat_client,
            config,
        }
    }

    /// Build a container around an explicit client, bypassing `config.mock_llm`.
    pub fn with_chat_client(config: ContainerConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            config,
        }
    }

    pub fn generate_use_case(&self) -> GeneratePipelineUseCase {
        GeneratePipelineUseCase::new(self.chat_client.clone())
    }

    pub fn model(&self) -> &str {
        self.chat_client.model()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn mock_llm(&self) -> bool {
        self.config.mock_llm
    }
}
