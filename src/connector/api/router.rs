use anyhow::Result;

use crate::domain::{ApiKey, ProjectRequest};
use crate::Commands;

use super::container::Container;
use super::controller::{GenerateController, OutputTarget};

pub struct Router<'a> {
    generate_controller: GenerateController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            generate_controller: GenerateController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Generate {
                project_name,
                language,
                database,
                other_tech,
                staging_server,
                deploy_method,
                api_key,
                output_dir,
                stdout,
            } => {
                let request =
                    ProjectRequest::new(project_name, language, staging_server, deploy_method)
                        .with_database(database)
                        .with_other_tech(other_tech);
                let api_key = api_key
                    .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
                    .map(ApiKey::from)
                    .unwrap_or_default();
                let target = if stdout {
                    OutputTarget::Stdout
                } else {
                    OutputTarget::Directory(output_dir)
                };

                self.generate_controller
                    .generate(request, api_key, target)
                    .await
            }
            Commands::Serve { .. } => unreachable!("serve command is handled separately in main"),
        }
    }
}
