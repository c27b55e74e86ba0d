use clap::Parser;
use research_tool::{cli, config, error, http, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use http::HttpResearchService;
use research_tool_common::{EntityType, FormInput};
use session::Session;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Verify { name, affiliation, entity_type, research } => {
            let service = HttpResearchService::from_config(&config)?;
            let mut session = Session::new(service, cli.format);
            tracing::debug!(
                base_url = session.store().service().endpoint().base_url(),
                "using endpoint"
            );

            session.fill(&FormInput {
                name,
                affiliation,
                entity_type: EntityType::from(entity_type),
            });

            session.verify().await?;
            if research {
                session.research().await?;
            }
        }

        Commands::Interactive => {
            let service = HttpResearchService::from_config(&config)?;
            let mut session = Session::new(service, cli.format);
            session.run_interactive().await?;
        }

        Commands::Config { set_api_url, set_timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                changed = true;
                println!("✔ APIベースURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.timeout_seconds = (seconds > 0).then_some(seconds);
                changed = true;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  APIベースURL: {}", config.api_base_url());
                match config.timeout() {
                    Some(timeout) => println!("  タイムアウト: {}秒", timeout.as_secs()),
                    None => println!("  タイムアウト: なし"),
                }
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// RUST_LOG があればそれを優先
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
