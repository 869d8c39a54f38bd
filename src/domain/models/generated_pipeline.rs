use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

const FILE_SUFFIX: &str = "_workflow.yml";

/// Raw text returned by the model for one project, expected to be YAML.
///
/// The content is kept exactly as received; nothing is trimmed or unwrapped
/// from code fences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPipeline {
    project_name: String,
    content: String,
}

impl GeneratedPipeline {
    pub fn new(project_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            content: content.into(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    /// `<project_name>_workflow.yml`
    pub fn file_name(&self) -> String {
        workflow_file_name(&self.project_name)
    }
}

/// Download file name for a project's workflow.
///
/// Path separators, quotes and control characters in the project name are
/// replaced with `_` so the name is safe both on disk and inside a
/// `Content-Disposition` header. Ordinary names pass through unchanged.
pub fn workflow_file_name(project_name: &str) -> String {
    let stem: String = project_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '"' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}{}", stem, FILE_SUFFIX)
}

/// Outcome of one generation attempt.
pub type GenerationResult = Result<GeneratedPipeline, DomainError>;

/// Collapse a [`GenerationResult`] into one string: the raw text on success,
/// `"Error: <message>"` on failure.
pub fn render_legacy(result: &GenerationResult) -> String {
    match result {
        Ok(pipeline) => pipeline.content().to_string(),
        Err(e) => e.to_legacy_string(),
    }
}
