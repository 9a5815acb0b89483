use clap::Parser;
use hirelens::cli::{Cli, Commands};
use hirelens::types::config::Config;
use hirelens::HirelensResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> HirelensResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet); a broken discovered file
    // is reported once the subscriber is installed
    let (config, discover_error) = match &cli.config {
        Some(path) => (Config::load(path)?, None),
        None => match Config::discover() {
            Ok(config) => (config, None),
            Err(e) => (Config::default_config(), Some(e)),
        },
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("hirelens={}", log_level)
            .parse()
            .unwrap_or_else(|_| "hirelens=info".parse().expect("fallback directive is valid")),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.general.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    if let Some(e) = discover_error {
        tracing::warn!(error = %e, "Ignoring invalid config, using defaults");
    }

    match cli.command {
        Commands::Init { path } => {
            hirelens::cli::commands::init(path)?;
        }
        Commands::Evaluate { profile, json } => {
            let ok = hirelens::cli::commands::evaluate(&profile, json, &config).await?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Config => {
            hirelens::cli::commands::show_config(&config)?;
        }
        Commands::Doctor => {
            hirelens::cli::commands::doctor(&config).await?;
        }
        Commands::Version => {
            hirelens::cli::commands::version();
        }
    }

    Ok(())
}
