//! pageload: fetch page data from the backend and render it.
//!
//! Entry point and error handling boundary. Uses `anyhow` for setup
//! errors; a failed load is rendered as an error page instead.

mod cli;

use pageload::config;
use pageload::constants;
use pageload::env;
use pageload::loader;
use pageload::output;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Command, LoginArgs, OutputFormat, UsersArgs};
use config::Config;
use env::Env;
use loader::{LoadResult, PageLoader};
use output::PageData;

/// How a page render ended.
enum Outcome {
    Rendered,
    LoadFailed,
}

#[tokio::main]
async fn main() {
    init_logging();

    match run().await {
        Ok(Outcome::Rendered) => {}
        Ok(Outcome::LoadFailed) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

/// Install the stderr log subscriber. Filter comes from `PAGELOAD_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config = Config::load(cli.config.as_deref(), Some(&cwd), &Env::real())
        .context("failed to load configuration")?;
    cli.apply_overrides(&mut config);

    match cli.command {
        Command::Users(ref args) => run_users(args, &config, cli.format).await,
        Command::Login(ref args) => run_login(args, &config, cli.format).await,
        Command::Config => run_config(&config),
        Command::Version => run_version(),
    }
}

fn build_loader(config: &Config) -> Result<PageLoader> {
    if config.base_url().is_empty() {
        warn!("no backend URL configured; set {} or --server-url", constants::ENV_SERVER_URL);
    }

    let loader = PageLoader::new(config.base_url(), config.timeout())
        .context("failed to build page loader")?
        .with_first_name(config.first_name());
    Ok(loader)
}

async fn run_users(args: &UsersArgs, config: &Config, format: OutputFormat) -> Result<Outcome> {
    let loader = build_loader(config)?;

    let load = if args.inspect {
        loader.load_users_raw().map(PageData::Raw)
    } else {
        loader.load_users().map(PageData::from)
    };

    Ok(render(load, format).await)
}

async fn run_login(args: &LoginArgs, config: &Config, format: OutputFormat) -> Result<Outcome> {
    let loader = build_loader(config)?;

    let load = if args.inspect {
        loader
            .load_login_status()
            .map(|status| PageData::Status(status.as_u16()))
    } else {
        loader.load_user().map(PageData::from)
    };

    Ok(render(load, format).await)
}

/// Await the load and print either the page or the error page.
async fn render(load: LoadResult<PageData>, format: OutputFormat) -> Outcome {
    match load.resolve().await {
        Ok(page) => {
            print!("{}", format.render(&page));
            Outcome::Rendered
        }
        Err(err) => {
            error!(error = %err, "page load failed");
            print!("{}", format.render_error(&err));
            Outcome::LoadFailed
        }
    }
}

fn run_config(config: &Config) -> Result<Outcome> {
    let rendered = toml::to_string_pretty(config).context("failed to serialize configuration")?;
    print!("{rendered}");
    Ok(Outcome::Rendered)
}

fn run_version() -> Result<Outcome> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(Outcome::Rendered)
}
