use clap::{Parser, Subcommand};
use jikan_client::{DEFAULT_BASE_URL, JikanClient, JikanError, ReqwestTransport};
use serde::Serialize;
use std::process;
use std::time::Duration;
use thiserror::Error;

/// Fetch anime metadata from the Jikan API and print it as JSON
#[derive(Debug, Parser)]
#[command(name = "jikan", version, about)]
struct Cli {
    /// Base URL of the Jikan API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Anime details
    Anime { id: u32 },
    /// Characters, voice actors and staff
    Characters { id: u32 },
    /// Episode listing
    Episodes {
        id: u32,
        /// Page to fetch (0 for the unpaginated resource)
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Related news articles
    News { id: u32 },
    /// Pictures
    Pictures { id: u32 },
    /// Promotional and episode videos
    Videos { id: u32 },
    /// Watch-status counters and score distribution
    Stats { id: u32 },
    /// Recent forum threads
    Forum { id: u32 },
    /// Additional information
    Moreinfo { id: u32 },
    /// User reviews
    Reviews {
        id: u32,
        /// Page to fetch (0 for the unpaginated resource)
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Recommendations of similar anime
    Recommendations { id: u32 },
    /// Recent user list updates
    Userupdates {
        id: u32,
        /// Page to fetch (0 for the unpaginated resource)
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
}

/// Errors surfaced by the CLI
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] JikanError),

    #[error("Failed to render record as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

/// Runs the selected command and renders its record as pretty JSON
fn run(client: &JikanClient<ReqwestTransport>, command: Command) -> Result<String, CliError> {
    fn render<T: Serialize>(record: T) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(&record)?)
    }

    match command {
        Command::Anime { id } => render(client.anime(id)?),
        Command::Characters { id } => render(client.characters_staff(id)?),
        Command::Episodes { id, page } => render(client.episodes(id, page)?),
        Command::News { id } => render(client.news(id)?),
        Command::Pictures { id } => render(client.pictures(id)?),
        Command::Videos { id } => render(client.videos(id)?),
        Command::Stats { id } => render(client.stats(id)?),
        Command::Forum { id } => render(client.forum(id)?),
        Command::Moreinfo { id } => render(client.more_info(id)?),
        Command::Reviews { id, page } => render(client.reviews(id, page)?),
        Command::Recommendations { id } => render(client.recommendations(id)?),
        Command::Userupdates { id, page } => render(client.user_updates(id, page)?),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let transport = match ReqwestTransport::with_timeout(Duration::from_secs(cli.timeout)) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("Error: Failed to set up HTTP client: {}", e);
            process::exit(1);
        }
    };

    let client = JikanClient::new(cli.base_url, transport);
    log::debug!("Using Jikan API at {}", client.base_url());

    match run(&client, cli.command) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
