use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the project form over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Generate one workflow file from the command line
    Generate {
        /// Project name, used for the deploy folder and the output file name
        #[arg(long, default_value = "")]
        project_name: String,

        /// Main programming language (e.g. Python, Node.js, Java)
        #[arg(short = 'L', long, default_value = "")]
        language: String,

        /// Database (e.g. PostgreSQL, MongoDB, none)
        #[arg(long, default_value = "")]
        database: String,

        /// Other technologies (e.g. React, Docker, none)
        #[arg(long, default_value = "")]
        other_tech: String,

        /// Staging server IP or hostname
        #[arg(long, default_value = "")]
        staging_server: String,

        /// Deployment method (e.g. SSH with scp, FTP)
        #[arg(long, default_value = "")]
        deploy_method: String,

        /// OpenRouter API key; falls back to OPENROUTER_API_KEY
        #[arg(long)]
        api_key: Option<String>,

        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Print the YAML instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}
