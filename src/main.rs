use clap::Parser;
use lexideck::cli::{Cli, Commands};
use lexideck::types::config::Config;
use lexideck::LexiResult;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> LexiResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let mut config = Config::load_or_default(&cli.config);
    config.apply_env_overrides();

    // CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let mut filter = EnvFilter::from_default_env();
    let directive = format!("lexideck={}", log_level)
        .parse::<Directive>()
        .or_else(|_| "lexideck=info".parse::<Directive>());
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }

    let registry = tracing_subscriber::registry().with(filter);
    if config.general.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Serve { host, port } => {
            lexideck::cli::commands::serve(host, port, &config).await?;
        }
        Commands::Init { path } => {
            lexideck::cli::commands::init(path).await?;
        }
        Commands::Words {
            count,
            difficulty,
            offline,
        } => {
            lexideck::cli::commands::words(count, difficulty, offline, &config).await?;
        }
        Commands::Idioms {
            count,
            difficulty,
            refresh,
        } => {
            lexideck::cli::commands::idioms(count, difficulty, refresh, &config).await?;
        }
        Commands::Lookup { word } => {
            lexideck::cli::commands::lookup(&word, &config).await?;
        }
        Commands::Stats => {
            lexideck::cli::commands::stats(&config).await?;
        }
        Commands::Version => {
            lexideck::cli::commands::version();
        }
    }

    Ok(())
}
