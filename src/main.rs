use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotally::{cli, config, error, types::AuthFlow};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth(AuthOptions),

    /// Run a play tally session until Ctrl-C
    Track(TrackOptions),

    /// Some helper information about the cached token and polling policy
    Info(InfoOptions),

    /// Remove the cached token
    Logout,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Run a fresh authorization even when a token is already cached
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    /// Polling cadence in seconds (defaults to POLL_INTERVAL_SECONDS)
    #[clap(long)]
    pub interval: Option<u64>,

    /// Maximum number of leaderboard rows to print
    #[clap(long)]
    pub limit: Option<usize>,

    /// Re-render the leaderboard whenever a play is counted
    #[clap(long)]
    pub live: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// Show cached token status
    #[clap(long)]
    token: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => {
            let oauth_result: Arc<Mutex<Option<AuthFlow>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result), opt.force).await;
        }
        Command::Track(opt) => cli::track(opt.interval, opt.limit, opt.live).await,
        Command::Info(opt) => cli::info(opt.token).await,
        Command::Logout => cli::logout().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
