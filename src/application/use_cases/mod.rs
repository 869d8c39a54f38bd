mod build_prompt;
mod generate_pipeline;

pub use build_prompt::*;
pub use generate_pipeline::*;
