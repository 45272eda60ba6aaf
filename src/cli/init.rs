//! Init command implementation
//!
//! Writes a starter `nex.toml` and `.env.example` into a directory.

use super::output::{Output, Status};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the init operation
#[derive(Debug, PartialEq)]
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// nex.toml already exists and --force was not given
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing Nex.Ai server");

    let base_path = &config.path;
    if !base_path.exists() {
        if let Err(e) = fs::create_dir_all(base_path) {
            output.status(
                Status::Error,
                &format!("Failed to create {}: {}", base_path.display(), e),
            );
            return InitResult::Error(e.to_string());
        }
    }

    let config_path = base_path.join("nex.toml");
    if config_path.exists() && !config.force {
        output.status(Status::Warn, "nex.toml already exists");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    if let Err(e) = write_file(&config_path, &generate_nex_toml(&config), config.force) {
        output.status(Status::Error, &format!("Failed to create nex.toml: {e}"));
        return InitResult::Error(e.to_string());
    }
    output.status(Status::Created, "nex.toml");

    let env_example_path = base_path.join(".env.example");
    if env_example_path.exists() && !config.force {
        output.status(Status::Skipped, ".env.example (already exists)");
    } else if let Err(e) = write_file(&env_example_path, generate_env_example(), config.force) {
        output.status(Status::Error, &format!("Failed to create .env.example: {e}"));
        return InitResult::Error(e.to_string());
    } else {
        output.status(Status::Created, ".env.example");
    }

    output.status(Status::Ok, "Project initialized");

    output.header("Next steps");
    output.status(Status::Info, "Set OPENAI_API_KEY in .env:");
    output.command("cp .env.example .env");
    output.status(Status::Info, "Start the server:");
    output.command("nex-server");

    output.hint(&format!(
        "Server will be available at http://{}:{}",
        config.host, config.port
    ));

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(()); // Skip existing files unless force is true
    }
    fs::write(path, content)
}

fn generate_nex_toml(config: &InitConfig) -> String {
    format!(
        r#"# Nex.Ai server configuration
# Generated by: nex-server init
#
# Environment variables HOST, PORT, CORS_ORIGINS and OPENAI_API_URL override
# the values below. The API key is read from the variable named by
# llm.api_key_env and never stored here.

[server]
host = "{host}"
port = {port}
log_level = "info"
json_logs = false
cors_origins = ["*"]

[llm]
api_url = "https://api.openai.com/v1/chat/completions"
api_key_env = "OPENAI_API_KEY"
max_tokens = 1024
temperature = 0.7
timeout_secs = 60
"#,
        host = config.host,
        port = config.port,
    )
}

fn generate_env_example() -> &'static str {
    r#"# Nex.Ai environment variables
# Copy this file to .env and fill in the values.

# REQUIRED: key for the chat completion API
OPENAI_API_KEY=sk-...

# Optional: point at any OpenAI-compatible endpoint
# OPENAI_API_URL=https://api.openai.com/v1/chat/completions

# Optional: comma separated origins allowed to call the API
# CORS_ORIGINS=http://localhost:8080

# Optional: Logging level (trace, debug, info, warn, error)
RUST_LOG=info,nex=debug
"#
}
