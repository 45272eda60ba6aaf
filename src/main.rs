use anyhow::Context;
use nex::cli::{
    Cli, Commands,
    init::{self, InitConfig, InitResult},
    output::{Output, Status},
};
use nex::llm::OpenAIClient;
use nex::utils::{
    telemetry,
    toml_config::{ConfigSource, NexConfig},
};
use nex::{AppState, LLMClient, build_app};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command.take() {
        Some(Commands::Init {
            path,
            force,
            host,
            port,
        }) => match init::run(
            InitConfig {
                path,
                force,
                host,
                port,
            },
            &output,
        ) {
            InitResult::Success | InitResult::AlreadyExists => Ok(()),
            InitResult::Error(e) => anyhow::bail!("init failed: {e}"),
        },
        Some(Commands::Config { validate }) => show_config(&cli.config, validate, &output),
        None => serve(cli).await,
    }
}

fn show_config(path: &std::path::Path, validate: bool, output: &Output) -> anyhow::Result<()> {
    let config = NexConfig::load(path)
        .with_context(|| format!("invalid configuration in {}", path.display()))?;
    let api_key = config.llm.api_key();

    output.header("Resolved configuration");
    output.kv("config file", &path.display().to_string());
    output.kv("listen", &config.bind_address());
    output.kv("log level", &config.server.log_level);
    output.kv("cors origins", &config.server.cors_origins.join(", "));
    output.kv("upstream", &config.llm.api_url);
    output.kv(
        &config.llm.api_key_env,
        if api_key.is_some() { "set" } else { "missing" },
    );

    if validate {
        if api_key.is_none() {
            output.status(Status::Error, &format!("{} is not set", config.llm.api_key_env));
            anyhow::bail!("configuration is incomplete");
        }
        output.status(Status::Ok, "Configuration is valid");
    }

    Ok(())
}

async fn serve(cli: Cli) -> anyhow::Result<()> {
    let (mut config, source) =
        NexConfig::load_with_source(&cli.config, |name| std::env::var(name).ok())
            .with_context(|| format!("invalid configuration in {}", cli.config.display()))?;

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    telemetry::init_tracing(
        &config.server.log_level,
        cli.verbose,
        config.server.json_logs,
    );

    match &source {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
        ConfigSource::Defaults => tracing::info!(
            path = %cli.config.display(),
            "No configuration file, using defaults"
        ),
    }

    let api_key = config.llm.api_key();
    if api_key.is_none() {
        tracing::warn!(
            env = %config.llm.api_key_env,
            "API key not set; chat requests will fail until it is configured"
        );
    }

    let llm = OpenAIClient::new(&config.llm, api_key)?;
    let addr = config.bind_address();

    tracing::info!(
        addr = %addr,
        upstream = %config.llm.api_url,
        provider = llm.provider_name(),
        "Starting Nex.Ai server"
    );

    let app = build_app(AppState::new(config, Arc::new(llm)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
