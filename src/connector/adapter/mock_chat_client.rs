use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{ApiKey, DomainError};

const MOCK_MODEL: &str = "mock-llm";

/// Offline [`ChatClient`] that answers every prompt with a canned workflow.
///
/// Useful for exercising the form and download flow without a real key or
/// network access.
pub struct MockChatClient {
    reply: String,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            reply: DEFAULT_REPLY.to_string(),
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, _api_key: &ApiKey, prompt: &str) -> Result<String, DomainError> {
        debug!("Mock chat client received {} char prompt", prompt.len());
        Ok(self.reply.clone())
    }

    fn model(&self) -> &str {
        MOCK_MODEL
    }
}

const DEFAULT_REPLY: &str = "\
name: Deploy to staging

on:
  push:
    branches: [main]

jobs:
  build-test-deploy:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Build
        run: echo \"build\"
      - name: Test
        run: echo \"test\"
      - name: Deploy
        env:
          SSH_KEY: ${{ secrets.SSH_KEY }}
          SERVER_USER: ${{ secrets.SERVER_USER }}
        run: echo \"deploy\"
";
