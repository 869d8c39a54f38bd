use serde::{Deserialize, Serialize};

use crate::domain::{ApiKey, GeneratedPipeline, ProjectRequest};

/// Fields posted by the HTML form and accepted by `POST /api/generate`.
///
/// Every field defaults to empty so that a missing key is reported by
/// validation rather than rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateForm {
    pub project_name: String,
    pub language: String,
    pub database: String,
    pub other_tech: String,
    pub staging_server: String,
    pub deploy_method: String,
    pub api_key: ApiKey,
}

impl GenerateForm {
    pub fn into_parts(self) -> (ProjectRequest, ApiKey) {
        let request = ProjectRequest::new(
            self.project_name,
            self.language,
            self.staging_server,
            self.deploy_method,
        )
        .with_database(self.database)
        .with_other_tech(self.other_tech);

        (request, self.api_key)
    }
}

/// Hidden fields carried by the result page's download button.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DownloadForm {
    pub project_name: String,
    pub content: String,
    /// Set by the result page's download button.
    pub from_result_page: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub project_name: String,
    pub file_name: String,
    pub content: String,
}

impl From<GeneratedPipeline> for GenerateResponse {
    fn from(pipeline: GeneratedPipeline) -> Self {
        Self {
            file_name: pipeline.file_name(),
            project_name: pipeline.project_name().to_string(),
            content: pipeline.into_content(),
        }
    }
}
