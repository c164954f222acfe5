use artable::api::ArtableApi;
use artable::config::ArtableConfig;
use artable::error::Result;
use artable::fetch::http::HttpFetcher;
use artable::session::TableSession;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_messages, print_page, print_selection};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    session: TableSession<HttpFetcher>,
    config: ArtableConfig,
    config_dir: PathBuf,
}

#[tokio::main]
async fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if cli.verbose { "artable=debug" } else { "warn" },
    ))
    .init();

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { page }) => handle_list(&mut ctx, page).await,
        Some(Commands::Select { count, page }) => handle_select(&mut ctx, count, page).await,
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, 1).await,
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir();
    let mut config = ArtableConfig::load(&config_dir).unwrap_or_default();

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }

    let fetcher = HttpFetcher::new(
        config.endpoint.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;
    let session = TableSession::new(ArtableApi::new(fetcher));

    Ok(AppContext {
        session,
        config,
        config_dir,
    })
}

/// `ARTABLE_HOME` overrides the platform config dir (used by tests).
fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("ARTABLE_HOME") {
        return PathBuf::from(home);
    }

    ProjectDirs::from("com", "artable", "artable")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".artable"))
}

async fn handle_list(ctx: &mut AppContext, page_one_based: usize) -> Result<()> {
    let view = ctx.session.set_page(page_one_based.saturating_sub(1)).await?;
    print_page(view);
    Ok(())
}

async fn handle_select(
    ctx: &mut AppContext,
    count: Option<i64>,
    page_one_based: usize,
) -> Result<()> {
    ctx.session.set_page(page_one_based.saturating_sub(1)).await?;
    let selection = ctx.session.request_selection(count).await?;
    print_selection(selection);
    print_messages(ctx.session.messages());
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    use artable::error::ArtableError;

    match (key, value) {
        (None, _) => {
            println!("endpoint = {}", ctx.config.endpoint);
            println!("timeout_secs = {}", ctx.config.timeout_secs);
            Ok(())
        }
        (Some(key), Some(value)) => {
            match key.as_str() {
                "endpoint" => ctx.config.endpoint = value,
                "timeout_secs" => {
                    ctx.config.timeout_secs = value
                        .parse()
                        .map_err(|_| ArtableError::Api("timeout_secs must be a number".into()))?
                }
                other => {
                    return Err(ArtableError::Api(format!("Unknown config key: {}", other)));
                }
            }
            ctx.config.save(&ctx.config_dir)?;
            println!("{} updated", key);
            Ok(())
        }
        (Some(key), None) => {
            let value = match key.as_str() {
                "endpoint" => ctx.config.endpoint.clone(),
                "timeout_secs" => ctx.config.timeout_secs.to_string(),
                other => {
                    return Err(ArtableError::Api(format!("Unknown config key: {}", other)));
                }
            };
            println!("{}", value);
            Ok(())
        }
    }
}
