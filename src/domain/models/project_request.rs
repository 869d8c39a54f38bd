use std::fmt;

use serde::{Deserialize, Serialize};

/// Project metadata collected from a single form submission.
///
/// `database` and `other_tech` are optional and may be empty; every other
/// field must be non-empty before a generation call is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    project_name: String,
    language: String,
    #[serde(default)]
    database: String,
    #[serde(default)]
    other_tech: String,
    staging_server: String,
    deploy_method: String,
}

impl ProjectRequest {
    pub fn new(
        project_name: impl Into<String>,
        language: impl Into<String>,
        staging_server: impl Into<String>,
        deploy_method: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            language: language.into(),
            database: String::new(),
            other_tech: String::new(),
            staging_server: staging_server.into(),
            deploy_method: deploy_method.into(),
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_other_tech(mut self, other_tech: impl Into<String>) -> Self {
        self.other_tech = other_tech.into();
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn other_tech(&self) -> &str {
        &self.other_tech
    }

    pub fn staging_server(&self) -> &str {
        &self.staging_server
    }

    pub fn deploy_method(&self) -> &str {
        &self.deploy_method
    }

    /// Names of required fields that are empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("project_name", &self.project_name),
            ("language", &self.language),
            ("staging_server", &self.staging_server),
            ("deploy_method", &self.deploy_method),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// A user-supplied credential for the chat-completion endpoint.
///
/// Held only for the duration of one outbound call. Must never reach logs,
/// error messages or responses: `Debug` is redacted and there is no
/// `Display` or `Serialize` impl.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw key, for building the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiKey(<empty>)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_request_has_no_missing_fields() {
        let request = ProjectRequest::new("shop", "Python", "10.0.0.5", "SSH with scp");
        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn database_and_other_tech_are_optional() {
        let request = ProjectRequest::new("shop", "Python", "10.0.0.5", "FTP")
            .with_database("")
            .with_other_tech("");
        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn missing_fields_reported_in_form_order() {
        let request = ProjectRequest::new("", "Rust", "", "FTP");
        assert_eq!(request.missing_fields(), vec!["project_name", "staging_server"]);
    }

    #[test]
    fn whitespace_counts_as_present() {
        let request = ProjectRequest::new(" ", "Rust", "host", "FTP");
        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-or-secret-value");
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains("sk-or-secret-value"));
        assert_eq!(rendered, "ApiKey(<redacted>)");
        assert_eq!(key.expose(), "sk-or-secret-value");
    }

    #[test]
    fn deserializes_with_optional_fields_absent() {
        let json = r#"{
            "project_name": "shop",
            "language": "Node.js",
            "staging_server": "staging.example.com",
            "deploy_method": "SSH with scp"
        }"#;
        let request: ProjectRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.database(), "");
        assert_eq!(request.other_tech(), "");
        assert_eq!(request.language(), "Node.js");
    }
}
