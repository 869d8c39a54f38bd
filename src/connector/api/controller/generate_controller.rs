use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::domain::{ApiKey, DomainError, GeneratedPipeline, ProjectRequest};

use super::super::Container;

/// Where a generated workflow goes once the model has answered.
pub enum OutputTarget {
    Stdout,
    Directory(PathBuf),
}

pub struct GenerateController<'a> {
    container: &'a Container,
}

impl<'a> GenerateController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn generate(
        &self,
        request: ProjectRequest,
        api_key: ApiKey,
        target: OutputTarget,
    ) -> Result<String> {
        let use_case = self.container.generate_use_case();
        let pipeline = use_case.execute(&request, &api_key).await?;

        match target {
            OutputTarget::Stdout => Ok(pipeline.into_content()),
            OutputTarget::Directory(dir) => {
                let path = self.write_pipeline(&dir, &pipeline).await?;
                Ok(self.format_written(&path))
            }
        }
    }

    async fn write_pipeline(
        &self,
        dir: &Path,
        pipeline: &GeneratedPipeline,
    ) -> Result<PathBuf, DomainError> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(pipeline.file_name());
        tokio::fs::write(&path, pipeline.content()).await?;
        info!("Wrote {}", path.display());
        Ok(path)
    }

    fn format_written(&self, path: &Path) -> String {
        format!(
            "Pipeline generated: {}\n\nCopy it to your repo's .github/workflows/ folder. \
             Set GitHub secrets (e.g. SERVER_USER, SSH_KEY) for deployment. \
             Files deploy to a unique folder to avoid conflicts.",
            path.display()
        )
    }
}
