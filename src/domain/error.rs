use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing required fields: {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP status {status} from chat-completion endpoint: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("Unexpected response format: {0}")]
    MalformedResponse(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(fields: Vec<&'static str>) -> Self {
        Self::Validation { fields }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn upstream(status: u16, detail: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            detail: detail.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// True for failures that happened while talking to the remote model.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Upstream { .. } | Self::MalformedResponse(_)
        )
    }

    /// The single textual error channel: `"Error: <message>"`.
    pub fn to_legacy_string(&self) -> String {
        format!("Error: {}", self)
    }
}
