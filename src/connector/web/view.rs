//! Server-rendered HTML pages for the form flow.
//!
//! Templates are compiled into the binary and registered under `.html` names,
//! so every interpolated value is autoescaped.

use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::{DomainError, GeneratedPipeline, ProjectRequest};

const TEMPLATES: [(&str, &str); 3] = [
    ("base.html", include_str!("../../../templates/base.html")),
    ("form.html", include_str!("../../../templates/form.html")),
    ("result.html", include_str!("../../../templates/result.html")),
];

#[derive(Serialize)]
struct FieldView<'a> {
    name: &'static str,
    label: &'static str,
    value: &'a str,
}

fn form_fields(values: &ProjectRequest) -> [FieldView<'_>; 6] {
    [
        FieldView {
            name: "project_name",
            label: "Project Name (used for unique folder)",
            value: values.project_name(),
        },
        FieldView {
            name: "language",
            label: "Main programming language (e.g., Python, Node.js, Java)",
            value: values.language(),
        },
        FieldView {
            name: "database",
            label: "Database (e.g., PostgreSQL, MongoDB, none)",
            value: values.database(),
        },
        FieldView {
            name: "other_tech",
            label: "Other technologies (e.g., React, Docker, none)",
            value: values.other_tech(),
        },
        FieldView {
            name: "staging_server",
            label: "Staging server IP/hostname",
            value: values.staging_server(),
        },
        FieldView {
            name: "deploy_method",
            label: "Deployment method (e.g., SSH with scp, FTP)",
            value: values.deploy_method(),
        },
    ]
}

pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, DomainError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| DomainError::internal(format!("failed to load templates: {e}")))?;
        Ok(Self { tera })
    }

    /// The project form, pre-filled with `values`. The API key field is never
    /// pre-filled.
    pub fn render_form(
        &self,
        values: &ProjectRequest,
        error: Option<&str>,
    ) -> Result<String, DomainError> {
        let mut context = Context::new();
        context.insert("fields", &form_fields(values));
        context.insert("error", &error);
        self.render("form.html", &context)
    }

    /// Success page: read-only YAML, a download button and the usage hint.
    pub fn render_result(&self, pipeline: &GeneratedPipeline) -> Result<String, DomainError> {
        let mut context = Context::new();
        context.insert("project_name", pipeline.project_name());
        context.insert("file_name", &pipeline.file_name());
        context.insert("content", pipeline.content());
        self.render("result.html", &context)
    }

    fn render(&self, template: &str, context: &Context) -> Result<String, DomainError> {
        self.tera
            .render(template, context)
            .map_err(|e| DomainError::internal(format!("failed to render {template}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views() -> Views {
        Views::new().unwrap()
    }

    #[test]
    fn form_keeps_values_but_not_the_key() {
        let values = ProjectRequest::new("shop", "Python", "10.0.0.5", "FTP");
        let html = views().render_form(&values, None).unwrap();
        assert!(html.contains("name=\"project_name\" value=\"shop\""));
        assert!(html.contains(
            "type=\"password\" id=\"api_key\" name=\"api_key\" autocomplete=\"off\">"
        ));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn form_escapes_submitted_values() {
        let values = ProjectRequest::new(r#""><script>x</script>"#, "Python", "host", "FTP");
        let html = views().render_form(&values, None).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;x&lt;&#x2F;script&gt;\""));
    }

    #[test]
    fn form_shows_escaped_error() {
        let html = views()
            .render_form(&ProjectRequest::default(), Some("Error: <bad>"))
            .unwrap();
        assert!(html.contains("Error: &lt;bad&gt;"));
    }

    #[test]
    fn result_page_offers_download_and_hint() {
        let pipeline = GeneratedPipeline::new("shop", "name: \"CI\"\n");
        let html = views().render_result(&pipeline).unwrap();
        assert!(html.contains("Pipeline generated!"));
        assert!(html.contains("name: &quot;CI&quot;"));
        assert!(html.contains("Download YAML (shop_workflow.yml)"));
        assert!(html.contains("name=\"from_result_page\" value=\"true\""));
        assert!(html.contains(".github/workflows/"));
    }
}
