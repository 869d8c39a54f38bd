use crate::domain::ProjectRequest;

/// Build the instruction sent to the model for one project.
///
/// Pure string interpolation: every field of `request` is embedded verbatim,
/// once each. Empty optional fields are interpolated as empty strings.
pub fn build_pipeline_prompt(request: &ProjectRequest) -> String {
    format!(
        "Generate a GitHub Actions YAML pipeline for a software project with these details:\n\
         - Language/Tech: {language}\n\
         - Database: {database}\n\
         - Other tech: {other_tech}\n\
         - Build steps: Auto-detect based on language (e.g., npm install for Node, pip install for Python).\n\
         - Test steps: Run unit tests if applicable.\n\
         - Deploy to staging server: {staging_server}. Use {deploy_method} for deployment. \
         Assume secure credentials are stored as GitHub secrets (e.g., SSH_KEY, SERVER_USER, SERVER_PASS).\n\
         - Trigger on push to main branch.\n\
         - Make it simple, secure, handle errors, and avoid overwriting other projects' files \
         (e.g., deploy to a project-specific folder like /staging/{project_name}/).\n\
         Output ONLY the YAML code, no explanations.\n",
        language = request.language(),
        database = request.database(),
        other_tech = request.other_tech(),
        staging_server = request.staging_server(),
        deploy_method = request.deploy_method(),
        project_name = request.project_name(),
    )
}
