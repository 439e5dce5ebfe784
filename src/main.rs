//! sdkgen CLI entrypoint
//! Parses command-line arguments and dispatches to the generator or the HTTP server.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use sdkgen::{
    application::GenerateSdkUseCase,
    config::ServerConfig,
    generation::{GenerationRequest, SdkGenerator, SpecLoader, TargetOptions},
    infrastructure::{FileSpecLoader, FileSystemOutputService, http},
};
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use serde_json::Value as JsonValue;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sdkgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate an SDK archive from a spec file
    ///
    /// Method names come from the first literal path segment, the verb and
    /// whether the path has a parameter, so `GET /users/{id}` and
    /// `GET /users/{id}/posts` both map to `getUsersById`. Such collisions
    /// fail generation and name both operations.
    Generate {
        /// Path to the API spec (YAML or JSON)
        #[arg(long)]
        schema_path: String,
        /// API key the SDK is generated for
        #[arg(long, env = "SDKGEN_API_KEY")]
        api_key: String,
        /// Target profile to generate
        #[arg(long, default_value = "nodejs-fetch")]
        target: String,
        /// Base URL baked into the generated client
        #[arg(long, env = "SDKGEN_BASE_URL")]
        base_url: String,
        /// Where to write the archive
        #[arg(long, default_value = "sdk.zip")]
        output: PathBuf,
    },
    /// Serve the generator over HTTP
    Serve {
        /// TOML config file
        #[arg(long, env = "SDKGEN_CONFIG")]
        config: Option<PathBuf>,
        /// Bind address, overrides the config file
        #[arg(long, env = "SDKGEN_HOST")]
        host: Option<String>,
        /// Port, overrides the config file
        #[arg(long, env = "SDKGEN_PORT")]
        port: Option<u16>,
    },
    /// List supported target profiles
    Targets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let generator = Arc::new(SdkGenerator::with_defaults());
    let use_case = Arc::new(GenerateSdkUseCase::new(
        generator.clone(),
        Arc::new(FileSystemOutputService::new()),
    ));

    match cli.command {
        Commands::Generate {
            schema_path,
            api_key,
            target,
            base_url,
            output,
        } => {
            generate(GenerateParams {
                use_case: &use_case,
                schema_path: &schema_path,
                api_key: &api_key,
                target: &target,
                base_url: &base_url,
                output: &output,
            })
            .await?
        }
        Commands::Serve { config, host, port } => {
            let config = ServerConfig::load(config.as_deref())
                .await
                .context("Failed to load server config")?
                .with_overrides(host, port);

            http::serve(&config, http::AppState::new(use_case))
                .await
                .with_context(|| format!("Server on {} failed", config.bind_address()))?
        }
        Commands::Targets => {
            for target in generator.resolver().supported_targets() {
                println!("{}\t{}", target, target.display_name());
            }
        }
    }
    Ok(())
}

/// Parameters for archive generation
struct GenerateParams<'a> {
    use_case: &'a GenerateSdkUseCase,
    schema_path: &'a str,
    api_key: &'a str,
    target: &'a str,
    base_url: &'a str,
    output: &'a PathBuf,
}

/// Generate an SDK archive from a spec file on disk
async fn generate(params: GenerateParams<'_>) -> anyhow::Result<()> {
    info!(sdk_target = %params.target, "Generating SDK");

    if params.api_key.is_empty() {
        anyhow::bail!("API key is required");
    }

    let spec = FileSpecLoader::new()
        .load(params.schema_path)
        .await
        .with_context(|| format!("Failed to load spec from {}", params.schema_path))?;

    let mut options = TargetOptions::new();
    options.insert(
        "baseUrl".to_string(),
        JsonValue::String(params.base_url.to_string()),
    );

    let request = GenerationRequest::new(&spec, params.api_key, params.target, Some(&options));
    let response = params
        .use_case
        .export(request, params.output)
        .await
        .context("Failed to generate SDK")?;

    info!(
        output_path = %params.output.display(),
        "Successfully generated {} SDK ({} file(s))",
        response.target,
        response.files_count
    );
    Ok(())
}
