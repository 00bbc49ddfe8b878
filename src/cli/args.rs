//! Clap argument types and config overrides.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use pageload::config::Config;
use pageload::loader::{LoadError, ResolvedLoad};
use pageload::output::{PageData, PageRenderer};

/// Fetch page data from the backend and render it.
#[derive(Parser, Debug)]
#[command(
    name = "pageload",
    version = pageload::constants::VERSION,
    about = "Fetch page data from the backend and render it."
)]
pub struct Cli {
    /// Backend base URL (overrides SERVER_URL and config files).
    #[arg(long, global = true)]
    pub server_url: Option<String>,

    /// Request timeout in seconds (default: none).
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Extra config file layered above `.pageload.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Load the user listing page (`GET /`).
    Users(UsersArgs),

    /// Load the current user through the login call (`POST /auth/login`).
    Login(LoginArgs),

    /// Print the resolved configuration.
    Config,

    /// Print version information.
    Version,
}

/// Arguments for the `users` subcommand.
#[derive(Parser, Debug)]
pub struct UsersArgs {
    /// Log and print the raw body instead of parsing it.
    #[arg(long, default_value_t = false)]
    pub inspect: bool,
}

/// Arguments for the `login` subcommand.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Only report the response status; the body is not read.
    #[arg(long, default_value_t = false)]
    pub inspect: bool,

    /// First name sent in the login payload.
    #[arg(long)]
    pub first_name: Option<String>,
}

/// Output format for a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    fn renderer(&self) -> &'static dyn PageRenderer {
        match self {
            OutputFormat::Terminal => &pageload::output::terminal::TerminalRenderer,
            OutputFormat::Json => &pageload::output::json::JsonRenderer,
        }
    }

    pub fn render(&self, page: &ResolvedLoad<PageData>) -> String {
        self.renderer().render(page)
    }

    pub fn render_error(&self, err: &LoadError) -> String {
        self.renderer().render_error(err)
    }
}

impl Cli {
    /// Apply global flags on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref url) = self.server_url {
            config.server.url = Some(url.clone());
        }
        if let Some(secs) = self.timeout {
            config.server.timeout_secs = Some(secs);
        }
        if let Command::Login(LoginArgs {
            first_name: Some(ref name),
            ..
        }) = self.command
        {
            config.login.first_name = Some(name.clone());
        }
    }
}
