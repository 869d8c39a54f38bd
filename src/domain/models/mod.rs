mod generated_pipeline;
mod project_request;

pub use generated_pipeline::*;
pub use project_request::*;
